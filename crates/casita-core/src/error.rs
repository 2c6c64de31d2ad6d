//! Error types shared across the Casita crates.
//!
//! Two failure families live here:
//!
//! - [`SourceError`]: the market-data collaborator was reachable but failed,
//!   or could not be reached at all. Distinct from "no data for this
//!   combination", which is a regular result branch, not an error.
//! - [`ValidationErrors`]: per-field input violations, collected before any
//!   analysis runs.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error raised by a market-data source implementation.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Connection to the backing store failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Operation timed out.
    #[error("timeout")]
    Timeout,

    /// Stored data could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Query-level failure in the backing store.
    #[error("database error: {0}")]
    DatabaseError(String),

    /// IO error while reading source data.
    #[error("IO error: {0}")]
    IoError(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::IoError(e.to_string())
    }
}

/// A single violated input constraint, naming the offending field.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{field} {message}")]
pub struct FieldViolation {
    /// Wire-level field name, e.g. `purchasePrice`.
    pub field: &'static str,
    /// Human-readable constraint description.
    pub message: String,
}

/// The full set of field violations for one request.
///
/// Violations are accumulated rather than short-circuited so the caller sees
/// every problem at once.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// All violated constraints.
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Creates an empty violation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation against `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Returns `true` when no constraint was violated.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Converts the set into a `Result`: `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
