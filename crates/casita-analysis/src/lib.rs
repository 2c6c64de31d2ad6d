//! # Casita Analysis
//!
//! The analysis and financial-modeling engine: turns comparable market
//! statistics and user financing parameters into a structured investment
//! analysis.
//!
//! - **Mortgage**: fixed-rate amortization
//! - **Expenses**: itemized annual projection with cited assumptions
//! - **Metrics**: cash-on-cash return, cap rate, NOI, break-even occupancy,
//!   gross yield
//! - **Revenue**: authoritative revenue selection and percentile context
//! - **Recommendation**: qualitative tier, confidence, and headline
//! - **Roi**: the standalone simple ROI calculator
//! - **Service**: the orchestrator composing the above over a
//!   [`MarketDataSource`](casita_core::traits::MarketDataSource)
//!
//! All computation is pure and synchronous; the only suspension points are
//! the two data-source lookups in [`service::AnalysisService::analyze`].
//! Every monetary and ratio value is a [`rust_decimal::Decimal`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
mod error;
pub mod expenses;
pub mod metrics;
pub mod mortgage;
pub mod recommendation;
pub mod revenue;
pub mod roi;
pub mod service;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use roi::{RentalInputs, RentalResult};
pub use service::AnalysisService;
