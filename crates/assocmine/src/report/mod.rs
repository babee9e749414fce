pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render_text;

use crate::analysis::Analysis;
use crate::error::{AssocError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = AssocError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(AssocError::Config(format!(
                "Unsupported report format '{}'. Use 'text' or 'json'",
                value
            ))),
        }
    }
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

pub fn render_report(analysis: &Analysis, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(analysis)),
        ReportFormat::Json => render_json(analysis),
    }
}

pub fn write_report<P: AsRef<Path>>(analysis: &Analysis, format: ReportFormat, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_report(analysis, format)?)?;
    log::info!("Wrote {} report to {}", format.as_str(), path.display());
    Ok(())
}
