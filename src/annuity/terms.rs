//! Payment terms shared by the annuity formulas

use serde::{Deserialize, Serialize};

use crate::compounding::DEFAULT_COMPOUNDING_PERIODS;

/// When each payment is made within its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Ordinary annuity: payments at the end of each period
    Ordinary,
    /// Annuity-due: payments at the start of each period
    Due,
}

impl PaymentTiming {
    /// 0 for ordinary, 1 for due
    pub fn as_flag(&self) -> f64 {
        match self {
            PaymentTiming::Ordinary => 0.0,
            PaymentTiming::Due => 1.0,
        }
    }

    /// Extra growth earned by paying one period early: `1 + i * flag`
    pub fn adjustment(&self, per_period_rate: f64) -> f64 {
        1.0 + per_period_rate * self.as_flag()
    }
}

impl Default for PaymentTiming {
    fn default() -> Self {
        PaymentTiming::Ordinary
    }
}

/// Compounding and payment schedule of an annuity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityTerms {
    /// Interest compounding periods per unit time
    pub compounding_periods: u32,

    /// Payments at the start or end of each period
    pub timing: PaymentTiming,

    /// Payments per unit time
    pub payment_frequency: u32,
}

impl Default for AnnuityTerms {
    fn default() -> Self {
        Self {
            compounding_periods: DEFAULT_COMPOUNDING_PERIODS,
            timing: PaymentTiming::Ordinary,
            payment_frequency: 1,
        }
    }
}

impl AnnuityTerms {
    /// Payments made once per compounding period
    pub fn new(compounding_periods: u32) -> Self {
        Self {
            compounding_periods,
            timing: PaymentTiming::Ordinary,
            payment_frequency: compounding_periods,
        }
    }

    /// Monthly payments, monthly compounding
    pub fn monthly() -> Self {
        Self::new(12)
    }

    /// Pay at the start of each period
    pub fn due(mut self) -> Self {
        self.timing = PaymentTiming::Due;
        self
    }

    /// Pay `frequency` times per unit time, independently of compounding
    pub fn paid(mut self, frequency: u32) -> Self {
        self.payment_frequency = frequency;
        self
    }

    pub fn frequencies_match(&self) -> bool {
        self.payment_frequency == self.compounding_periods
    }
}
