//! Future and present value of a single sum

use crate::error::FinanceResult;
use crate::money::{scale, Amount};

use super::rates::{check_time, growth_factor, periodic_rate};

/// Value of `principal` after `time` units growing at `rate`, compounded
/// `periods` times per unit time.
///
/// `principal * (1 + rate/n)^(time*n)`
///
/// Negative rates (decay) are accepted down to `-periods`.
///
/// # Example
/// ```
/// use retirement_finance::future_value;
/// use rust_decimal::Decimal;
///
/// let fv = future_value(Decimal::new(1000, 0), 10.0, 0.05, 12).unwrap();
/// assert_eq!(fv.round_dp(2), Decimal::new(164701, 2));
/// ```
pub fn future_value(principal: Amount, time: f64, rate: f64, periods: u32) -> FinanceResult<Amount> {
    check_time(time)?;
    let per_period = periodic_rate(rate, periods)?;
    let factor = growth_factor(per_period, time * periods as f64)?;
    scale(principal, factor)
}

/// Worth today of `principal` received after `time` units, discounting at
/// `rate` compounded `periods` times per unit time.
///
/// `principal * (1 + rate/n)^(-time*n)`
pub fn present_value(principal: Amount, time: f64, rate: f64, periods: u32) -> FinanceResult<Amount> {
    check_time(time)?;
    let per_period = periodic_rate(rate, periods)?;
    let factor = growth_factor(per_period, -time * periods as f64)?;
    scale(principal, factor)
}
