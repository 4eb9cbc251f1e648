//! Rentability System - projection engine for rental property investment returns
//!
//! This library provides:
//! - Loan amortization (fixed monthly payment from the financing terms)
//! - Year-by-year cash-flow projection with rent and charge escalation
//! - Terminal sale valuation with a flat capital-gains tax
//! - Internal rate of return solving over the full cash-flow sequence
//! - Batch scenario running and spreadsheet export

pub mod params;
pub mod financing;
pub mod projection;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use params::{InvestmentParameters, ParameterError};
pub use financing::LoanSchedule;
pub use projection::{ProjectionEngine, ProjectionResult, CashflowRow, CashflowSeries};
pub use scenario::ScenarioRunner;
