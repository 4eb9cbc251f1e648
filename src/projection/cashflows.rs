//! Cashflow output structures for projections

use crate::financing::LoanSchedule;
use serde::{Deserialize, Serialize};

/// A single holding year of projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    /// Holding year (1-indexed)
    pub year: u32,

    /// Gross rent before vacancy
    pub gross_rent: f64,

    /// Rent net of vacancy
    pub effective_revenue: f64,

    /// Operating charges for the year
    pub operating_charges: f64,

    /// Annual financing cost (monthly payment x 12)
    pub debt_service: f64,

    /// Effective revenue less charges and debt service
    pub net_cashflow: f64,

    /// Net sale proceeds, non-zero only in the final holding year
    pub sale_proceeds: f64,
}

/// Yearly cash-flow sequence for the IRR solver and the export layer
///
/// Index 0 is the initial equity outlay (negative), indices 1..=N the
/// operating flow of each holding year. The final entry is incremented by
/// the net sale proceeds rather than appended as an extra entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSeries {
    values: Vec<f64>,
}

impl CashflowSeries {
    /// Assemble the sequence from the equity outlay, the per-year rows and
    /// the terminal sale proceeds
    pub fn from_projection(equity: f64, rows: &[CashflowRow], net_sale_proceeds: f64) -> Self {
        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(-equity);
        values.extend(rows.iter().map(|r| r.net_cashflow));

        // With no holding years there is no operating entry to carry the
        // sale proceeds; the outlay entry is left untouched.
        if !rows.is_empty() {
            if let Some(last) = values.last_mut() {
                *last += net_sale_proceeds;
            }
        }

        Self { values }
    }

    /// The full sequence, outlay first
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of entries, including the leading outlay
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Complete projection result for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Total acquisition cost including fees, works and furnishing
    pub total_investment: f64,

    /// Derived amortization schedule
    pub loan: LoanSchedule,

    /// First-year operating cash flow
    pub annual_cashflow: f64,

    /// Internal rate of return over the full sequence (0.0 when no root exists)
    pub irr: f64,

    /// Terminal sale value net of capital-gains tax
    pub net_sale_proceeds: f64,

    /// Per-year detail rows
    pub rows: Vec<CashflowRow>,

    /// Equity outlay followed by the yearly flows
    pub series: CashflowSeries,
}

impl ProjectionResult {
    /// IRR expressed as a percentage for display
    pub fn irr_pct(&self) -> f64 {
        self.irr * 100.0
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.rows.iter().map(|r| r.effective_revenue).sum();
        let total_charges: f64 = self.rows.iter().map(|r| r.operating_charges).sum();
        let total_debt_service: f64 = self.rows.iter().map(|r| r.debt_service).sum();
        let total_net_cashflow: f64 = self.rows.iter().map(|r| r.net_cashflow).sum();

        ProjectionSummary {
            holding_years: self.rows.len() as u32,
            total_revenue,
            total_charges,
            total_debt_service,
            total_net_cashflow,
            net_sale_proceeds: self.net_sale_proceeds,
            irr_pct: self.irr_pct(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub holding_years: u32,
    pub total_revenue: f64,
    pub total_charges: f64,
    pub total_debt_service: f64,
    pub total_net_cashflow: f64,
    pub net_sale_proceeds: f64,
    pub irr_pct: f64,
}
