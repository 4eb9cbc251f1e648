//! Internal Rate of Return (IRR) calculation
//!
//! Solves the discount rate at which the yearly cash-flow sequence has zero
//! net present value.

use thiserror::Error;

/// The solver could not find a rate discounting the sequence to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IrrError {
    /// Empty sequence, no sign change, or the iteration failed to converge
    #[error("cash-flow sequence admits no internal rate of return")]
    NoConvergence,
}

/// Find the annual rate r such that `sum(C[t] / (1+r)^t) = 0` over the
/// sequence, using the Newton-Raphson method.
///
/// # Arguments
/// * `cashflows` - Yearly values, index 0 = initial outlay (negative = outflow)
///
/// # Returns
/// * `Result<f64, IrrError>` - Annual rate as a decimal (0.05 for 5%), or
///   `NoConvergence` when no solution exists in the bounded rate range
pub fn solve_irr(cashflows: &[f64]) -> Result<f64, IrrError> {
    if cashflows.is_empty() {
        return Err(IrrError::NoConvergence);
    }

    // An all-zero sequence discounts to zero at any rate
    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Ok(0.0);
    }

    // At least one sign change is required for a root to exist
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return Err(IrrError::NoConvergence);
    }

    // Newton-Raphson iteration on the annual rate
    let mut rate = 0.05;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            // Derivative too small, try bisection instead
            return solve_irr_bisection(cashflows);
        }

        let new_rate = rate - npv / dnpv;

        // Bound the rate to reasonable values
        let new_rate = new_rate.max(-0.99).min(10.0);

        if (new_rate - rate).abs() < tolerance {
            // A stalled iterate at the bounds is not a root
            if residual_is_small(cashflows, new_rate) {
                return Ok(new_rate);
            }
            return solve_irr_bisection(cashflows);
        }

        rate = new_rate;
    }

    // Newton-Raphson didn't converge, try bisection
    solve_irr_bisection(cashflows)
}

/// Check the NPV at a candidate root against the magnitude of the sequence
fn residual_is_small(cashflows: &[f64], rate: f64) -> bool {
    let scale: f64 = cashflows.iter().map(|cf| cf.abs()).sum();
    npv_at_rate(cashflows, rate).abs() <= 1e-9 * scale.max(1.0)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / ((1.0 + rate).powi(t as i32 + 1));
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using the bisection method
fn solve_irr_bisection(cashflows: &[f64]) -> Result<f64, IrrError> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    // Check that we have a root in this interval
    if npv_low * npv_high > 0.0 {
        return Err(IrrError::NoConvergence);
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Ok(mid);
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    Err(IrrError::NoConvergence)
}

/// Calculate NPV at a given annual rate
pub fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_irr() {
        // Outlay of 1000, returns 1100 one year later
        let cashflows = vec![-1000.0, 1100.0];

        let irr = solve_irr(&cashflows).unwrap();
        assert!((irr - 0.10).abs() < 1e-9, "Expected 10% IRR, got {}", irr);
    }

    #[test]
    fn test_level_coupon_round_trip() {
        // 1000 outlay, nine 100 coupons, principal plus coupon at maturity
        let mut cashflows = vec![-1000.0];
        cashflows.extend(vec![100.0; 9]);
        cashflows.push(1100.0);

        let irr = solve_irr(&cashflows).unwrap();
        assert!((irr - 0.10).abs() < 1e-6, "Expected 10% IRR, got {}", irr);
        assert!(npv_at_rate(&cashflows, irr).abs() < 1e-6);
    }

    #[test]
    fn test_negative_interim_flows() {
        // Rental shape: outlay, negative operating years, large terminal inflow
        let mut cashflows = vec![-20_000.0];
        cashflows.extend(vec![-5_354.74; 14]);
        cashflows.push(-5_354.74 + 235_032.49);

        let irr = solve_irr(&cashflows).unwrap();
        assert!((irr - 0.0922).abs() < 1e-3, "got {}", irr);
    }

    #[test]
    fn test_no_sign_change_fails() {
        assert_eq!(
            solve_irr(&[-100.0, -50.0, -25.0]),
            Err(IrrError::NoConvergence)
        );
        assert_eq!(
            solve_irr(&[100.0, 50.0, 25.0]),
            Err(IrrError::NoConvergence)
        );
    }

    #[test]
    fn test_empty_sequence_fails() {
        assert_eq!(solve_irr(&[]), Err(IrrError::NoConvergence));
    }

    #[test]
    fn test_all_zero_sequence_is_zero_rate() {
        assert_eq!(solve_irr(&[0.0, 0.0, 0.0]), Ok(0.0));
    }

    #[test]
    fn test_deep_loss_rate_is_negative() {
        // Recover only a fraction of the outlay
        let irr = solve_irr(&[-1000.0, 300.0]).unwrap();
        assert!((irr + 0.70).abs() < 1e-6, "got {}", irr);
    }
}
