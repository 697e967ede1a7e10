//! Rate conversion and the shared growth-factor primitive

use log::trace;

use crate::error::{FinanceError, FinanceResult};

/// Convert a nominal rate compounded `from_periods` times per unit time into
/// the nominal rate compounded `to_periods` times that gives the same
/// effective growth.
///
/// `to * ((1 + rate/from)^(from/to) - 1)`
///
/// # Example
/// ```
/// use retirement_finance::equivalent_rate;
///
/// // 12% compounded monthly is about 12.68% compounded annually
/// let annual = equivalent_rate(0.12, 12, 1).unwrap();
/// assert!((annual - 0.126825).abs() < 1e-6);
/// ```
pub fn equivalent_rate(rate: f64, from_periods: u32, to_periods: u32) -> FinanceResult<f64> {
    check_periods(from_periods, "from_periods")?;
    check_periods(to_periods, "to_periods")?;

    let per_period = periodic_rate(rate, from_periods)?;
    if from_periods == to_periods {
        return Ok(rate);
    }

    let exponent = from_periods as f64 / to_periods as f64;
    let converted = to_periods as f64 * (growth_factor(per_period, exponent)? - 1.0);

    trace!(
        "equivalent_rate: {} @ {}/unit -> {} @ {}/unit",
        rate, from_periods, converted, to_periods
    );

    Ok(converted)
}

pub(crate) fn check_periods(periods: u32, name: &str) -> FinanceResult<()> {
    if periods == 0 {
        return Err(FinanceError::invalid(format!("{} must be positive", name)));
    }
    Ok(())
}

pub(crate) fn check_time(time: f64) -> FinanceResult<()> {
    if !time.is_finite() {
        return Err(FinanceError::invalid(format!("time {} is not finite", time)));
    }
    Ok(())
}

/// Per-period rate `rate / periods`, rejecting rates below `-periods`
/// (a negative growth base has no real fractional power).
pub(crate) fn periodic_rate(rate: f64, periods: u32) -> FinanceResult<f64> {
    check_periods(periods, "compounding periods")?;
    if !rate.is_finite() {
        return Err(FinanceError::invalid(format!("rate {} is not finite", rate)));
    }

    let per_period = rate / periods as f64;
    if 1.0 + per_period < 0.0 {
        return Err(FinanceError::invalid(format!(
            "rate {} is below -{} (the number of compounding periods)",
            rate, periods
        )));
    }

    Ok(per_period)
}

/// `(1 + per_period)^exponent`, failing instead of returning inf/NaN
pub(crate) fn growth_factor(per_period: f64, exponent: f64) -> FinanceResult<f64> {
    let base = 1.0 + per_period;

    if base == 0.0 && exponent < 0.0 {
        return Err(FinanceError::degenerate(
            "zero growth base raised to a negative power (rate equals -periods)",
        ));
    }

    let factor = base.powf(exponent);
    if !factor.is_finite() {
        return Err(FinanceError::overflow(format!(
            "({})^{} is not representable",
            base, exponent
        )));
    }

    Ok(factor)
}
