use thiserror::Error;

use crate::render::RenderError;
use crate::report::ReportType;

/// Error type that captures report export failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A rendering back end failed while producing the output artifact.
    /// Carries the report type that was being exported.
    #[error("{report} export failed: {source}")]
    Renderer {
        report: ReportType,
        #[source]
        source: RenderError,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
