//! Annuities whose payments grow geometrically

use log::{debug, trace};

use crate::compounding::{check_time, growth_factor, periodic_rate};
use crate::error::{FinanceError, FinanceResult};
use crate::money::{scale, Amount};

use super::{rate_on_payment_basis, AnnuityTerms};

/// Below this gap between rate and growth the general formula loses most of
/// its significant digits.
const NEAR_DEGENERATE_GAP: f64 = 1e-9;

/// Future value of an annuity whose first payment is `payment` and which
/// grows by `growth` (nominal, per unit time, applied at the payment
/// frequency) with interest at `rate`.
///
/// With `i` the interest and `g` the growth per payment period and
/// `m = time * p` payments:
///
/// - `growth != rate`: `payment * ((1+i)^m - (1+g)^m) / (i - g) * (1 + i * due)`
/// - `growth == rate`: `payment * m * (1+i)^(m-1) * (1 + i * due)`
///
/// When payment and compounding frequencies differ only `rate` is converted
/// to the payment basis; `growth` is already quoted per payment.
///
/// Rates that are close but not exactly equal use the general formula and
/// suffer cancellation as `rate - growth` approaches zero.
pub fn future_variable_annuity_value(
    payment: Amount,
    time: f64,
    rate: f64,
    growth: f64,
    terms: &AnnuityTerms,
) -> FinanceResult<Amount> {
    check_time(time)?;
    if !growth.is_finite() {
        return Err(FinanceError::invalid(format!("growth {} is not finite", growth)));
    }

    let converted = rate_on_payment_basis(rate, terms)?;
    let p = terms.payment_frequency;
    let payments = time * p as f64;

    let i = periodic_rate(converted, p)?;
    let g = periodic_rate(growth, p)?;
    let timing = terms.timing.adjustment(i);

    let factor = if growth == rate || i == g {
        debug!("growing annuity: rate equals growth ({}), using limit form", growth);
        payments * growth_factor(i, payments - 1.0)? * timing
    } else {
        if (i - g).abs() < NEAR_DEGENERATE_GAP {
            debug!(
                "growing annuity: rate {} and growth {} nearly equal, result may be imprecise",
                converted, growth
            );
        }
        let spread = growth_factor(i, payments)? - growth_factor(g, payments)?;
        spread / (i - g) * timing
    };
    trace!("growing annuity: i={} g={} m={} factor={}", i, g, payments, factor);

    scale(payment, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::future_fixed_annuity_value;
    use crate::compounding::equivalent_rate;
    use crate::money::to_f64;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_general_formula_annual() {
        let fv = future_variable_annuity_value(dec!(100), 5.0, 0.05, 0.03, &AnnuityTerms::default())
            .unwrap();
        let expected = 100.0 * (1.05_f64.powi(5) - 1.03_f64.powi(5)) / 0.02;
        assert_relative_eq!(to_f64(fv), expected, max_relative = 1e-12);
        assert!((to_f64(fv) - 585.04).abs() < 0.01);
    }

    #[test]
    fn test_equal_rate_and_growth_uses_limit() {
        let fv = future_variable_annuity_value(dec!(100), 5.0, 0.05, 0.05, &AnnuityTerms::default())
            .unwrap();
        let expected = 100.0 * 5.0 * 1.05_f64.powi(4);
        assert_relative_eq!(to_f64(fv), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_limit_with_monthly_terms_and_due() {
        let terms = AnnuityTerms::monthly().due();
        let fv = future_variable_annuity_value(dec!(50), 2.0, 0.06, 0.06, &terms).unwrap();
        let i = 0.06 / 12.0;
        let expected = 50.0 * 24.0 * (1.0_f64 + i).powf(23.0) * (1.0 + i);
        assert_relative_eq!(to_f64(fv), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_growth_matches_fixed_annuity() {
        let terms = AnnuityTerms::new(4).due();
        let growing = future_variable_annuity_value(dec!(300), 6.0, 0.07, 0.0, &terms).unwrap();
        let fixed = future_fixed_annuity_value(dec!(300), 6.0, 0.07, &terms).unwrap();
        assert_relative_eq!(to_f64(growing), to_f64(fixed), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_and_growth_sums_payments() {
        let fv = future_variable_annuity_value(dec!(100), 3.0, 0.0, 0.0, &AnnuityTerms::monthly())
            .unwrap();
        assert_eq!(fv, dec!(3600));
    }

    #[test]
    fn test_converges_to_limit() {
        let terms = AnnuityTerms::default();
        let limit = to_f64(future_variable_annuity_value(dec!(100), 10.0, 0.05, 0.05, &terms).unwrap());

        for gap in [1e-2, 1e-3, 1e-4, 1e-5, 1e-6] {
            let below = future_variable_annuity_value(dec!(100), 10.0, 0.05, 0.05 - gap, &terms).unwrap();
            let above = future_variable_annuity_value(dec!(100), 10.0, 0.05, 0.05 + gap, &terms).unwrap();
            // Error shrinks linearly with the gap
            assert!((to_f64(below) - limit).abs() / limit < 10.0 * gap);
            assert!((to_f64(above) - limit).abs() / limit < 10.0 * gap);
            assert!(to_f64(below) < limit && limit < to_f64(above));
        }
    }

    #[test]
    fn test_near_degenerate_still_finite() {
        let terms = AnnuityTerms::default();
        let limit = to_f64(future_variable_annuity_value(dec!(100), 10.0, 0.05, 0.05, &terms).unwrap());
        let close = to_f64(
            future_variable_annuity_value(dec!(100), 10.0, 0.05, 0.05 - 1e-12, &terms).unwrap(),
        );
        // Cancellation leaves only a few correct digits
        assert!((close - limit).abs() / limit < 1e-2);
    }

    #[test]
    fn test_mismatched_frequency_converts_rate_only() {
        let terms = AnnuityTerms::new(1).paid(12);
        let fv = future_variable_annuity_value(dec!(100), 2.0, 0.08, 0.03, &terms).unwrap();

        let i = equivalent_rate(0.08, 1, 12).unwrap() / 12.0;
        let g = 0.03 / 12.0;
        let expected = 100.0 * ((1.0 + i).powf(24.0) - (1.0_f64 + g).powf(24.0)) / (i - g);
        assert_relative_eq!(to_f64(fv), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_mismatched_frequency_equal_inputs_use_converted_limit() {
        let terms = AnnuityTerms::new(12).paid(4);
        let fv = future_variable_annuity_value(dec!(100), 3.0, 0.06, 0.06, &terms).unwrap();

        let i = equivalent_rate(0.06, 12, 4).unwrap() / 4.0;
        let expected = 100.0 * 12.0 * (1.0 + i).powf(11.0);
        assert_relative_eq!(to_f64(fv), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_non_finite_growth_rejected() {
        assert!(matches!(
            future_variable_annuity_value(dec!(100), 1.0, 0.05, f64::NAN, &AnnuityTerms::default()),
            Err(FinanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extreme_growth_overflows() {
        let terms = AnnuityTerms::default();
        assert!(matches!(
            future_variable_annuity_value(dec!(1000), 1000.0, 1.0, 0.5, &terms),
            Err(FinanceError::NumericOverflow(_))
        ));
        // Limit branch
        assert!(matches!(
            future_variable_annuity_value(dec!(1000), 1000.0, 1.0, 1.0, &terms),
            Err(FinanceError::NumericOverflow(_))
        ));
    }

    #[test]
    fn test_growth_below_minus_periods_rejected() {
        assert!(matches!(
            future_variable_annuity_value(dec!(100), 1.0, 0.05, -2.0, &AnnuityTerms::default()),
            Err(FinanceError::InvalidInput(_))
        ));
    }
}
