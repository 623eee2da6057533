//! Serialization of per-brand aggregate results into comparison documents.
//!
//! The exporter computes nothing: it takes already-aggregated results for
//! an ordered set of brands and renders them, either as an XLSX workbook
//! with one sheet per brand or as a PDF with one page per brand. The two
//! formats share one tabular layout, built in [`layout`].

mod layout;
mod pdf;
mod sheet;

use std::str::FromStr;

use thiserror::Error;

use spotdash_engine::AggregateResult;

pub use layout::{report_rows, Cell};
pub use sheet::sheet_name;

/// Which document a comparison export produces. A parameter, not a fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    /// Content type for the produced document.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Conventional file extension for the produced document.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Pdf(#[from] printpdf::Error),
}

/// One brand's slice of a comparison.
#[derive(Debug, Clone)]
pub struct BrandReport {
    pub brand: String,
    pub result: AggregateResult,
}

/// Render the comparison in the requested format.
///
/// # Errors
///
/// Returns [`ExportError`] if the underlying writer fails.
pub fn write_comparison(
    reports: &[BrandReport],
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Xlsx => sheet::write_workbook(reports),
        ExportFormat::Pdf => pdf::write_document(reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("Excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn format_exposes_content_type_and_extension() {
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
    }
}
