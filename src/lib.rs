//! Report engine for audiovisual productions: lays out budgets and
//! executive summaries on fixed-size pages and serializes them to PDF.

pub mod canvas;
pub mod error;
pub mod executive;
pub mod fmt;
pub mod models;
#[cfg(feature = "pdf")]
mod pdf;
pub mod renderer;
pub mod report;
pub mod sections;
pub mod settings;
pub mod table;

pub use error::{ReportError, Result};
pub use models::{
    ExecutiveSpec, LineItem, Party, ProductionMeta, ProductionStatus, ReportSpec, Totals,
};
