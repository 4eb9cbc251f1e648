//! Investment parameter record matching the scenario input format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported loan interest rate range, in percent
pub const LOAN_RATE_RANGE: (f64, f64) = (0.5, 6.0);
/// Supported loan insurance rate range, in percent
pub const INSURANCE_RATE_RANGE: (f64, f64) = (0.0, 1.0);
/// Supported vacancy rate range, in percent
pub const VACANCY_RANGE: (f64, f64) = (0.0, 20.0);
/// Supported escalation range for rent and charges, in percent
pub const ESCALATION_RANGE: (f64, f64) = (0.0, 10.0);
/// Supported capital-gains tax range, in percent
pub const CAPITAL_GAINS_TAX_RANGE: (f64, f64) = (0.0, 60.0);
/// Supported loan term and holding period, in years
pub const DURATION_RANGE: (u32, u32) = (1, 30);

/// Boundary validation failure for a parameter set
///
/// Raised by [`InvestmentParameters::validate`] at the input boundary; the
/// projection engine itself accepts any finite values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} of {value}% is outside the supported {min}%-{max}% range")]
    RateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} of {value} years is outside the supported {min}-{max} year range")]
    DurationOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// A single investment scenario
///
/// All rates are expressed as percentages (fractions of 100); the accessor
/// methods convert to the decimal fractions the engine works with. Amounts
/// are in a single currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    // Acquisition costs
    /// Purchase price of the property
    pub purchase_price: f64,
    /// Notary fees paid at acquisition
    pub notary_fees: f64,
    /// Renovation works budget
    pub renovation: f64,
    /// Furnishing budget
    pub furnishing: f64,
    /// Agency fees paid at acquisition
    #[serde(default)]
    pub agency_fees: f64,

    // Financing terms
    /// Personal equity contribution
    pub equity: f64,
    /// Annual loan interest rate, percent
    pub loan_rate_pct: f64,
    /// Annual loan insurance rate, percent
    pub insurance_rate_pct: f64,
    /// Loan term in years
    pub loan_term_years: u32,

    // Rental income
    /// Gross monthly rent
    pub monthly_rent: f64,
    /// Fraction of rent lost to vacancy, percent
    pub vacancy_rate_pct: f64,
    /// Annual rent escalation, percent
    pub rent_escalation_pct: f64,

    // Operating charges (annual amounts)
    /// Condominium fees
    pub condo_fees: f64,
    /// Landlord (non-occupant) insurance premium
    pub landlord_insurance: f64,
    /// Property tax
    pub property_tax: f64,
    /// Other recurring charges
    #[serde(default)]
    pub other_charges: f64,
    /// Annual charges escalation, percent
    pub charges_escalation_pct: f64,

    // Exit assumptions
    /// Holding period in years
    pub holding_period_years: u32,
    /// Annual market appreciation, percent
    pub appreciation_rate_pct: f64,
    /// Flat capital-gains tax rate, percent
    pub capital_gains_tax_pct: f64,
}

impl InvestmentParameters {
    /// Reference scenario with the standard form defaults
    pub fn default_scenario() -> Self {
        Self {
            purchase_price: 200_000.0,
            notary_fees: 16_000.0,
            renovation: 30_000.0,
            furnishing: 5_000.0,
            agency_fees: 0.0,
            equity: 20_000.0,
            loan_rate_pct: 1.8,
            insurance_rate_pct: 0.3,
            loan_term_years: 20,
            monthly_rent: 1_000.0,
            vacancy_rate_pct: 0.0,
            rent_escalation_pct: 1.0,
            condo_fees: 1_200.0,
            landlord_insurance: 200.0,
            property_tax: 1_000.0,
            other_charges: 800.0,
            charges_escalation_pct: 1.5,
            holding_period_years: 15,
            appreciation_rate_pct: 1.5,
            capital_gains_tax_pct: 30.0,
        }
    }

    /// Total acquisition cost including fees, works and furnishing
    pub fn total_investment(&self) -> f64 {
        self.purchase_price + self.notary_fees + self.renovation + self.furnishing + self.agency_fees
    }

    /// Amount to borrow: total cost less equity (may be <= 0)
    pub fn loan_principal(&self) -> f64 {
        self.total_investment() - self.equity
    }

    /// Combined monthly financing rate: loan interest plus insurance
    pub fn monthly_rate(&self) -> f64 {
        (self.loan_rate_pct + self.insurance_rate_pct) / 100.0 / 12.0
    }

    /// Loan term in months
    pub fn term_months(&self) -> u32 {
        self.loan_term_years * 12
    }

    /// Gross annual rent before vacancy
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    /// Vacancy rate as a fraction
    pub fn vacancy_rate(&self) -> f64 {
        self.vacancy_rate_pct / 100.0
    }

    /// Annual rent escalation as a fraction
    pub fn rent_escalation(&self) -> f64 {
        self.rent_escalation_pct / 100.0
    }

    /// Year-1 operating charges: sum of the four annual line items
    pub fn annual_charges(&self) -> f64 {
        self.condo_fees + self.landlord_insurance + self.property_tax + self.other_charges
    }

    /// Annual charges escalation as a fraction
    pub fn charges_escalation(&self) -> f64 {
        self.charges_escalation_pct / 100.0
    }

    /// Annual market appreciation as a fraction
    pub fn appreciation_rate(&self) -> f64 {
        self.appreciation_rate_pct / 100.0
    }

    /// Capital-gains tax rate as a fraction
    pub fn capital_gains_rate(&self) -> f64 {
        self.capital_gains_tax_pct / 100.0
    }

    /// Check the documented input ranges
    ///
    /// This is the presentation-layer boundary check. Equity above the total
    /// investment cost is accepted: it yields a non-positive loan principal
    /// and a non-positive payment downstream.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_amount("purchase price", self.purchase_price)?;
        check_amount("notary fees", self.notary_fees)?;
        check_amount("renovation", self.renovation)?;
        check_amount("furnishing", self.furnishing)?;
        check_amount("agency fees", self.agency_fees)?;
        check_amount("equity", self.equity)?;
        check_amount("monthly rent", self.monthly_rent)?;
        check_amount("condo fees", self.condo_fees)?;
        check_amount("landlord insurance", self.landlord_insurance)?;
        check_amount("property tax", self.property_tax)?;
        check_amount("other charges", self.other_charges)?;
        check_amount("appreciation rate", self.appreciation_rate_pct)?;

        check_rate("loan rate", self.loan_rate_pct, LOAN_RATE_RANGE)?;
        check_rate("insurance rate", self.insurance_rate_pct, INSURANCE_RATE_RANGE)?;
        check_rate("vacancy rate", self.vacancy_rate_pct, VACANCY_RANGE)?;
        check_rate("rent escalation", self.rent_escalation_pct, ESCALATION_RANGE)?;
        check_rate("charges escalation", self.charges_escalation_pct, ESCALATION_RANGE)?;
        check_rate(
            "capital-gains tax",
            self.capital_gains_tax_pct,
            CAPITAL_GAINS_TAX_RANGE,
        )?;

        check_duration("loan term", self.loan_term_years)?;
        check_duration("holding period", self.holding_period_years)?;

        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value < 0.0 {
        return Err(ParameterError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rate(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ParameterError> {
    if value < min || value > max {
        return Err(ParameterError::RateOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_duration(field: &'static str, value: u32) -> Result<(), ParameterError> {
    let (min, max) = DURATION_RANGE;
    if value < min || value > max {
        return Err(ParameterError::DurationOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_is_valid() {
        let params = InvestmentParameters::default_scenario();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_total_investment_sums_acquisition_costs() {
        let params = InvestmentParameters::default_scenario();
        assert_eq!(params.total_investment(), 251_000.0);
        assert_eq!(params.loan_principal(), 231_000.0);
    }

    #[test]
    fn test_rate_conversions() {
        let params = InvestmentParameters::default_scenario();
        assert!((params.monthly_rate() - 0.00175).abs() < 1e-12);
        assert_eq!(params.term_months(), 240);
        assert_eq!(params.annual_rent(), 12_000.0);
        assert_eq!(params.annual_charges(), 3_200.0);
    }

    #[test]
    fn test_vacancy_out_of_range_rejected() {
        let mut params = InvestmentParameters::default_scenario();
        params.vacancy_rate_pct = 25.0;
        assert_eq!(
            params.validate(),
            Err(ParameterError::RateOutOfRange {
                field: "vacancy rate",
                value: 25.0,
                min: 0.0,
                max: 20.0,
            })
        );
    }

    #[test]
    fn test_zero_loan_term_rejected() {
        let mut params = InvestmentParameters::default_scenario();
        params.loan_term_years = 0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::DurationOutOfRange { field: "loan term", .. })
        ));
    }

    #[test]
    fn test_equity_above_total_cost_accepted() {
        let mut params = InvestmentParameters::default_scenario();
        params.equity = 300_000.0;
        assert!(params.validate().is_ok());
        assert!(params.loan_principal() < 0.0);
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut params = InvestmentParameters::default_scenario();
        params.monthly_rent = -100.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NegativeAmount { field: "monthly rent", .. })
        ));
    }
}
