//! Loan amortization: fixed-payment schedule from the financing terms

use crate::params::InvestmentParameters;
use serde::{Deserialize, Serialize};

/// Amortization schedule derived once from the parameters, never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Amount borrowed: total investment cost less equity (may be <= 0)
    pub principal: f64,

    /// Combined monthly rate: loan interest plus insurance, per month
    pub monthly_rate: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Fixed monthly payment amortizing the principal over the term
    pub monthly_payment: f64,
}

impl LoanSchedule {
    /// Derive the schedule from an investment scenario
    pub fn from_parameters(params: &InvestmentParameters) -> Self {
        let principal = params.loan_principal();
        let monthly_rate = params.monthly_rate();
        let term_months = params.term_months();

        Self {
            principal,
            monthly_rate,
            term_months,
            monthly_payment: monthly_payment(principal, monthly_rate, term_months),
        }
    }

    /// Yearly financing cost: monthly payment x 12
    pub fn annual_debt_service(&self) -> f64 {
        self.monthly_payment * 12.0
    }
}

/// Fixed monthly payment M such that `term_months` payments of M fully
/// amortize `principal` at the given monthly rate.
///
/// Uses the annuity formula `M = P * r / (1 - (1+r)^-n)`. A zero rate
/// degenerates to straight-line repayment `P / n`. A non-positive principal
/// (equity at or above total cost) yields a non-positive payment.
pub fn monthly_payment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        principal / term_months as f64
    } else {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(term_months as i32)))
    }
}
