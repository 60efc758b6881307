pub mod check;
pub mod executive;
pub mod generate;
pub mod sample;
pub mod status;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use serde::de::DeserializeOwned;

use safetasks_budget::settings::{shellexpand_path, Settings};
use safetasks_budget::ReportSpec;

#[derive(Parser)]
#[command(name = "budget", about = "Printable budgets for audiovisual productions.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a budget PDF from a JSON report spec.
    Generate {
        /// Path to the report spec (JSON)
        input: String,
        /// Output file path (default: <output_dir>/orcamento-ftv-NNNN.pdf)
        #[arg(long)]
        output: Option<String>,
        /// Directory for the default file name (overrides settings)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
    /// Validate a report spec and show how many pages it would take.
    Check {
        /// Path to the report spec (JSON)
        input: String,
    },
    /// Render an executive summary PDF from a JSON period report.
    Executive {
        /// Path to the period report (JSON)
        input: String,
        /// Output file path (default: <output_dir>/relatorio-executivo-fva-<period>.pdf)
        #[arg(long)]
        output: Option<String>,
        /// Directory for the default file name (overrides settings)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
    /// Print a sample report spec to stdout.
    Sample {
        /// Print an executive report input instead of a budget
        #[arg(long)]
        executive: bool,
    },
    /// Show settings and whether the PDF renderer is available.
    Status,
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .map_err(safetasks_budget::ReportError::from)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(value)
}

pub(crate) fn read_spec(path: &Path) -> anyhow::Result<ReportSpec> {
    read_json(path)
}

/// Directory for default file names: `--output-dir`, else settings.
pub(crate) fn output_dir(flag: Option<&str>, settings: &Settings) -> PathBuf {
    shellexpand_path(flag.unwrap_or(&settings.output_dir))
}
