//! Compound growth of a single sum and conversion of rates between
//! compounding frequencies
//!
//! Rates are nominal: a `rate` quoted with `n` compounding periods per unit
//! of time grows by `1 + rate / n` each period.

mod lump_sum;
mod rates;

pub use lump_sum::{future_value, present_value};
pub use rates::equivalent_rate;

pub(crate) use rates::{check_periods, check_time, growth_factor, periodic_rate};

/// Compounding periods per unit time when none is given
pub const DEFAULT_COMPOUNDING_PERIODS: u32 = 1;
