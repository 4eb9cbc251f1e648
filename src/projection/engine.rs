//! Core projection engine for yearly investment cash-flow projections

use super::cashflows::{CashflowRow, CashflowSeries, ProjectionResult};
use super::irr::{solve_irr, IrrError};
use super::sale::sale_outcome;
use super::state::ProjectionState;
use crate::financing::LoanSchedule;
use crate::params::InvestmentParameters;
use log::warn;

/// Main projection engine
///
/// One invocation is a pure function of the parameters: amortize the loan,
/// simulate each holding year, value the terminal sale, and solve the
/// internal rate of return over the assembled sequence. Every run builds
/// its own state; nothing is shared or cached across runs.
pub struct ProjectionEngine {
    params: InvestmentParameters,
}

impl ProjectionEngine {
    /// Create a new engine for one parameter set
    pub fn new(params: InvestmentParameters) -> Self {
        Self { params }
    }

    /// Run the full projection
    pub fn project(&self) -> ProjectionResult {
        let params = &self.params;

        let loan = LoanSchedule::from_parameters(params);
        let debt_service = loan.annual_debt_service();

        let mut rows = Vec::with_capacity(params.holding_period_years as usize);
        let mut state = ProjectionState::from_parameters(params);

        for _year in 1..=params.holding_period_years {
            rows.push(self.calculate_year(&state, debt_service));

            // Escalation applies from the following year onward; year 1
            // always uses the un-escalated base values.
            state.escalate(params.rent_escalation(), params.charges_escalation());
        }

        let sale = sale_outcome(
            params.purchase_price,
            params.appreciation_rate(),
            params.holding_period_years,
            params.capital_gains_rate(),
        );
        if let Some(last) = rows.last_mut() {
            last.sale_proceeds = sale.net_proceeds;
        }

        let series = CashflowSeries::from_projection(params.equity, &rows, sale.net_proceeds);

        let irr = match solve_irr(series.values()) {
            Ok(rate) => rate,
            Err(IrrError::NoConvergence) => {
                warn!("IRR solver found no rate for this scenario, reporting 0.0");
                0.0
            }
        };

        let annual_cashflow = rows.first().map(|r| r.net_cashflow).unwrap_or(0.0);

        ProjectionResult {
            total_investment: params.total_investment(),
            loan,
            annual_cashflow,
            irr,
            net_sale_proceeds: sale.net_proceeds,
            rows,
            series,
        }
    }

    /// Net cash flow for a single holding year
    fn calculate_year(&self, state: &ProjectionState, debt_service: f64) -> CashflowRow {
        let effective_revenue = state.running_rent * (1.0 - self.params.vacancy_rate());
        let expenses = state.running_charges + debt_service;

        CashflowRow {
            year: state.year,
            gross_rent: state.running_rent,
            effective_revenue,
            operating_charges: state.running_charges,
            debt_service,
            net_cashflow: effective_revenue - expenses,
            sale_proceeds: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> InvestmentParameters {
        InvestmentParameters::default_scenario()
    }

    #[test]
    fn test_projection_runs_reference_scenario() {
        let engine = ProjectionEngine::new(reference_params());
        let result = engine.project();

        assert_eq!(result.total_investment, 251_000.0);
        assert_relative_eq!(result.loan.monthly_payment, 1_179.5620, max_relative = 1e-6);

        // Financing cost exceeds rent net of charges in year 1
        assert!(result.annual_cashflow < 0.0);
        assert!(result.irr.is_finite());
        assert!(result.net_sale_proceeds > 0.0);
    }

    #[test]
    fn test_row_count_matches_holding_period() {
        let mut params = reference_params();
        params.holding_period_years = 7;

        let result = ProjectionEngine::new(params).project();

        assert_eq!(result.rows.len(), 7);
        // Series carries the leading equity outlay entry as well
        assert_eq!(result.series.len(), 8);
        assert_eq!(result.series.values()[0], -20_000.0);
    }

    #[test]
    fn test_escalation_compounding_per_year() {
        let mut params = reference_params();
        params.rent_escalation_pct = 2.0;
        params.vacancy_rate_pct = 0.0;

        let result = ProjectionEngine::new(params.clone()).project();

        let base_rent = params.annual_rent();
        for (i, row) in result.rows.iter().enumerate() {
            let expected = base_rent * 1.02_f64.powi(i as i32);
            assert_relative_eq!(row.gross_rent, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_year_one_uses_unescalated_bases() {
        let mut params = reference_params();
        params.rent_escalation_pct = 5.0;
        params.charges_escalation_pct = 5.0;

        let result = ProjectionEngine::new(params.clone()).project();
        let first = &result.rows[0];

        assert_eq!(first.gross_rent, params.annual_rent());
        assert_eq!(first.operating_charges, params.annual_charges());
    }

    #[test]
    fn test_sale_proceeds_land_on_final_entry() {
        let result = ProjectionEngine::new(reference_params()).project();

        let last_row = result.rows.last().unwrap();
        assert!(last_row.sale_proceeds > 0.0);
        assert_eq!(result.net_sale_proceeds, last_row.sale_proceeds);

        // The final series entry is the operating flow plus the proceeds
        let last_value = *result.series.values().last().unwrap();
        assert_relative_eq!(
            last_value,
            last_row.net_cashflow + last_row.sale_proceeds,
            max_relative = 1e-12
        );

        // Every earlier operating entry carries no proceeds
        for row in &result.rows[..result.rows.len() - 1] {
            assert_eq!(row.sale_proceeds, 0.0);
        }
    }

    #[test]
    fn test_full_equity_purchase_has_no_financing_cost() {
        let mut params = reference_params();
        params.equity = params.total_investment();
        params.vacancy_rate_pct = 5.0;

        let result = ProjectionEngine::new(params.clone()).project();

        assert_eq!(result.loan.monthly_payment, 0.0);
        let expected = params.annual_rent() * 0.95 - params.annual_charges();
        assert_relative_eq!(result.annual_cashflow, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_vacancy_reduces_effective_revenue() {
        let mut params = reference_params();
        params.vacancy_rate_pct = 10.0;

        let result = ProjectionEngine::new(params.clone()).project();
        let first = &result.rows[0];

        assert_relative_eq!(
            first.effective_revenue,
            first.gross_rent * 0.90,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_reference_irr_value() {
        let result = ProjectionEngine::new(reference_params()).project();

        // 1.5% appreciation with 30% gains tax over 15 years
        assert_relative_eq!(result.irr, 0.092192, max_relative = 1e-3);
    }

    #[test]
    fn test_irr_fallback_reports_zero() {
        // No appreciation, rent never covers the outlay: every flow negative,
        // so no rate discounts the sequence to zero
        let mut params = reference_params();
        params.monthly_rent = 100.0;
        params.appreciation_rate_pct = 0.0;
        params.capital_gains_tax_pct = 60.0;
        params.purchase_price = 0.0;
        params.notary_fees = 0.0;
        params.renovation = 100_000.0;
        params.furnishing = 0.0;
        params.equity = 100_000.0;
        params.condo_fees = 10_000.0;

        let result = ProjectionEngine::new(params).project();
        assert_eq!(result.irr, 0.0);
    }

    #[test]
    fn test_idempotent_projection() {
        let params = reference_params();
        let first = ProjectionEngine::new(params.clone()).project();
        let second = ProjectionEngine::new(params).project();

        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_totals() {
        let result = ProjectionEngine::new(reference_params()).project();
        let summary = result.summary();

        assert_eq!(summary.holding_years, 15);
        let expected_net: f64 = result.rows.iter().map(|r| r.net_cashflow).sum();
        assert_relative_eq!(summary.total_net_cashflow, expected_net);
        assert_relative_eq!(summary.irr_pct, result.irr * 100.0);
    }
}
