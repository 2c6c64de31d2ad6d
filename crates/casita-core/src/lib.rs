//! # Casita Core
//!
//! Core types, traits, and abstractions for the Casita short-term-rental
//! investment analytics service.
//!
//! This crate provides the foundational building blocks used throughout Casita:
//!
//! - **Types**: Domain types for analysis requests, comparable market
//!   statistics, expense breakdowns, and the full analysis report
//! - **Traits**: The [`MarketDataSource`](traits::MarketDataSource) seam that
//!   supplies comparable statistics and percentiles to the engine
//! - **Rounding**: The single place where the monetary (2 dp) and ratio (4 dp)
//!   rounding policy lives
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic**: every monetary and ratio value is a
//!   [`rust_decimal::Decimal`]; binary floating point never touches money
//! - **Immutable per-request data**: entities are constructed, consumed, and
//!   dropped — no shared mutable state
//! - **Explicit failure branches**: "no data for this combination" is a value,
//!   not an error; upstream source failures are errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod formatting;
pub mod rounding;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FieldViolation, SourceError, ValidationErrors};
    pub use crate::traits::MarketDataSource;
    pub use crate::types::{
        AnalysisOutcome, AnalysisReport, AnalysisRequest, ComparableStatistics, Confidence,
        ConfigurationInfo, ExpenseBreakdown, ExpenseCategory, ExpenseItem, MarketInfo,
        MetricsSection, NeighborhoodInfo, PercentileStatistics, ProfileSource, Recommendation,
        SupportedCombination,
    };
}
