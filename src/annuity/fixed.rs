//! Level-payment annuities

use log::trace;

use crate::compounding::{check_time, growth_factor, periodic_rate};
use crate::error::FinanceResult;
use crate::money::{scale, Amount};

use super::{rate_on_payment_basis, AnnuityTerms};

/// Future value of `payment` made `terms.payment_frequency` times per unit
/// time for `time` units, with interest at `rate` compounded
/// `terms.compounding_periods` times per unit time.
///
/// With `i` the rate per payment period and `m = time * p` payments:
///
/// `payment / i * ((1 + i)^m - 1) * (1 + i * due)`
///
/// A zero rate gives the plain sum of payments, `payment * m`.
pub fn future_fixed_annuity_value(
    payment: Amount,
    time: f64,
    rate: f64,
    terms: &AnnuityTerms,
) -> FinanceResult<Amount> {
    check_time(time)?;
    let rate = rate_on_payment_basis(rate, terms)?;
    let p = terms.payment_frequency;
    let payments = time * p as f64;

    let i = periodic_rate(rate, p)?;
    if i == 0.0 {
        return scale(payment, payments);
    }

    let accumulation = (growth_factor(i, payments)? - 1.0) / i;
    let factor = accumulation * terms.timing.adjustment(i);
    trace!("fixed annuity: i={} m={} factor={}", i, payments, factor);

    scale(payment, factor)
}
