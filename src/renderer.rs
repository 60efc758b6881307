//! Capability check for the PDF backend, which is an optional build feature.

use crate::canvas::Document;
use crate::error::{ReportError, Result};

pub fn available() -> bool {
    cfg!(feature = "pdf")
}

pub fn ensure_available() -> Result<()> {
    if available() {
        Ok(())
    } else {
        Err(ReportError::MissingRenderer)
    }
}

/// Serialize a finished document to PDF bytes.
#[cfg(feature = "pdf")]
pub fn render(doc: &Document) -> Result<Vec<u8>> {
    crate::pdf::render(doc)
}

#[cfg(not(feature = "pdf"))]
pub fn render(_doc: &Document) -> Result<Vec<u8>> {
    Err(ReportError::MissingRenderer)
}
