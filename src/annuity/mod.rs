//! Future value of annuities
//!
//! - **Fixed**: level payments
//! - **Variable**: payments growing geometrically at a constant rate
//!
//! Both accept [`AnnuityTerms`] describing how often interest compounds, how
//! often payments are made, and whether payments fall at the start or end of
//! each period. When payment and compounding frequencies differ, the interest
//! rate is first converted to the equivalent rate compounded at the payment
//! frequency, and the payment frequency then plays the role of the
//! compounding period count.

mod terms;
mod fixed;
mod growing;

pub use terms::{AnnuityTerms, PaymentTiming};
pub use fixed::future_fixed_annuity_value;
pub use growing::future_variable_annuity_value;

use log::debug;

use crate::compounding::{check_periods, equivalent_rate};
use crate::error::FinanceResult;

/// Nominal rate restated on the payment-frequency basis
fn rate_on_payment_basis(rate: f64, terms: &AnnuityTerms) -> FinanceResult<f64> {
    check_periods(terms.compounding_periods, "compounding periods")?;
    check_periods(terms.payment_frequency, "payment frequency")?;

    if terms.frequencies_match() {
        return Ok(rate);
    }

    let converted = equivalent_rate(rate, terms.compounding_periods, terms.payment_frequency)?;
    debug!(
        "annuity rate {} compounded {}/unit restated as {} compounded {}/unit",
        rate, terms.compounding_periods, converted, terms.payment_frequency
    );
    Ok(converted)
}
