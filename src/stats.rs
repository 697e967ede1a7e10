//! Percentiles of a numeric sample
//!
//! Ranks are 1-based order statistics with linear interpolation between the
//! two observations that bracket the rank.

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Rank convention used to locate a percentile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentileMethod {
    /// rank = (N - 1) * p + 1, defined for every p in [0, 1]
    /// (spreadsheet PERCENTILE / PERCENTILE.INC)
    Inclusive,
    /// rank = (N + 1) * p, defined only where the rank lands in [1, N]
    /// (spreadsheet PERCENTILE.EXC)
    Exclusive,
}

impl Default for PercentileMethod {
    fn default() -> Self {
        PercentileMethod::Inclusive
    }
}

impl PercentileMethod {
    fn rank(&self, n: usize, p: f64) -> f64 {
        match self {
            PercentileMethod::Inclusive => (n as f64 - 1.0) * p + 1.0,
            PercentileMethod::Exclusive => (n as f64 + 1.0) * p,
        }
    }
}

/// The `p`-th percentile (`p` in [0, 1]) of `sample`, inclusive method.
///
/// The sample is copied before sorting; the caller's slice is untouched.
///
/// # Example
/// ```
/// use retirement_finance::percentile;
///
/// let median = percentile(&[40.0, 10.0, 30.0, 20.0], 0.5).unwrap();
/// assert_eq!(median, 25.0);
/// ```
pub fn percentile(sample: &[f64], p: f64) -> FinanceResult<f64> {
    percentile_with(sample, p, PercentileMethod::Inclusive)
}

/// The `p`-th percentile of `sample` under the given rank convention
pub fn percentile_with(sample: &[f64], p: f64, method: PercentileMethod) -> FinanceResult<f64> {
    let sorted = sorted_copy(sample)?;
    percentile_of_sorted(&sorted, p, method)
}

/// Several inclusive percentiles of one sample, sorting it once
pub fn percentiles(sample: &[f64], ps: &[f64]) -> FinanceResult<Vec<f64>> {
    let sorted = sorted_copy(sample)?;
    ps.iter()
        .map(|&p| percentile_of_sorted(&sorted, p, PercentileMethod::Inclusive))
        .collect()
}

fn sorted_copy(sample: &[f64]) -> FinanceResult<Vec<f64>> {
    if sample.is_empty() {
        return Err(FinanceError::invalid("percentile of an empty sample"));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(FinanceError::invalid("sample contains a non-finite value"));
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

fn percentile_of_sorted(sorted: &[f64], p: f64, method: PercentileMethod) -> FinanceResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(FinanceError::invalid(format!(
            "percentile {} is outside [0, 1]",
            p
        )));
    }

    let n = sorted.len();
    let rank = method.rank(n, p);
    if rank < 1.0 || rank > n as f64 {
        return Err(FinanceError::invalid(format!(
            "percentile {} is out of range for {} observations ({:?})",
            p, n, method
        )));
    }

    if rank == 1.0 {
        return Ok(sorted[0]);
    }
    if rank == n as f64 {
        return Ok(sorted[n - 1]);
    }

    let k = rank.floor() as usize;
    let d = rank - k as f64;
    Ok(sorted[k - 1] + d * (sorted[k] - sorted[k - 1]))
}
