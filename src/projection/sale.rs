//! Terminal sale valuation with a flat capital-gains tax

use serde::{Deserialize, Serialize};

/// Outcome of selling the property at the end of the holding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleOutcome {
    /// Market value after compounded appreciation
    pub resale_value: f64,

    /// Resale value less the original purchase price
    pub capital_gain: f64,

    /// Flat tax on the gain; negative when the sale is at a loss
    pub tax: f64,

    /// Resale value net of tax, credited to the final holding year
    pub net_proceeds: f64,
}

/// Value the exit: compound the purchase price over the holding period and
/// tax the resulting gain at the flat rate.
///
/// A negative gain produces a negative tax, i.e. a capital-loss credit; the
/// result is not clamped.
pub fn sale_outcome(
    purchase_price: f64,
    appreciation_rate: f64,
    holding_years: u32,
    tax_rate: f64,
) -> SaleOutcome {
    let resale_value = purchase_price * (1.0 + appreciation_rate).powi(holding_years as i32);
    let capital_gain = resale_value - purchase_price;
    let tax = capital_gain * tax_rate;

    SaleOutcome {
        resale_value,
        capital_gain,
        tax,
        net_proceeds: resale_value - tax,
    }
}
