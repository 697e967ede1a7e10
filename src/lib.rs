//! Retirement Finance - time-value-of-money calculations
//!
//! This library provides:
//! - Future and present value of a lump sum under compound growth
//! - Conversion of nominal rates between compounding frequencies
//! - Future value of fixed and geometrically growing annuities
//! - Percentiles of a numeric sample
//!
//! Every function is pure. Currency amounts are [`Amount`] (decimal); rates
//! and times are `f64`.

pub mod error;
pub mod money;
pub mod compounding;
pub mod annuity;
pub mod stats;

// Re-export commonly used types
pub use error::{FinanceError, FinanceResult};
pub use money::Amount;
pub use compounding::{future_value, present_value, equivalent_rate, DEFAULT_COMPOUNDING_PERIODS};
pub use annuity::{
    AnnuityTerms, PaymentTiming, future_fixed_annuity_value, future_variable_annuity_value,
};
pub use stats::{percentile, percentile_with, percentiles, PercentileMethod};
