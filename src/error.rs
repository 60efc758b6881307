use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF renderer unavailable: build with the `pdf` feature enabled")]
    MissingRenderer,

    #[error("Invalid report: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Input(e.to_string())
    }
}
