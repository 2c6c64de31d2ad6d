//! Error type for the analysis engine.

use casita_core::error::{SourceError, ValidationErrors};
use thiserror::Error;

/// Failure modes of an analysis request.
///
/// "No data for this combination" is deliberately absent — it is a branch of
/// [`AnalysisOutcome`](casita_core::types::AnalysisOutcome), not an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The request violated one or more field constraints.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    /// The market-data collaborator failed.
    #[error("market data source failure: {0}")]
    Source(#[from] SourceError),
}
