//! Projection engine for single-scenario investment projections

mod cashflows;
mod engine;
pub mod irr;
mod sale;
mod state;

pub use cashflows::{CashflowRow, CashflowSeries, ProjectionResult, ProjectionSummary};
pub use engine::ProjectionEngine;
pub use irr::{solve_irr, IrrError};
pub use sale::{sale_outcome, SaleOutcome};
pub use state::ProjectionState;
