//! Currency amounts
//!
//! Amounts are decimal so that sums and products of currency do not drift.
//! Growth factors are computed in f64 (they need `powf`) and cross into
//! decimal exactly once, when the factor is applied to the amount.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{FinanceError, FinanceResult};

/// A monetary amount
pub type Amount = Decimal;

/// Multiply an amount by a floating-point factor.
///
/// The factor is rounded into decimal once; the product is checked.
pub fn scale(amount: Amount, factor: f64) -> FinanceResult<Amount> {
    if !factor.is_finite() {
        return Err(FinanceError::overflow(format!(
            "factor {} is not finite",
            factor
        )));
    }

    let factor = Decimal::from_f64(factor).ok_or_else(|| {
        FinanceError::overflow(format!("factor {} is outside the decimal range", factor))
    })?;

    amount.checked_mul(factor).ok_or_else(|| {
        FinanceError::overflow(format!("{} * {} overflows", amount, factor))
    })
}

/// Lossy view of an amount as f64, for reporting and comparisons.
///
/// Never fails: every `Decimal` lies within the f64 range, so the result is
/// the nearest f64 to `amount` (the NaN fallback is unreachable).
pub fn to_f64(amount: Amount) -> f64 {
    amount.to_f64().unwrap_or(f64::NAN)
}
