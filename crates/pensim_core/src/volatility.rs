//! Portfolio volatility estimation
//!
//! Collapses a strategy's asset-class weights into a single annualized
//! standard deviation using a fixed covariance model: a per-class volatility
//! table and a symmetric pairwise correlation matrix. The constants are
//! deliberate round numbers, not calibrated estimates; Monte Carlo only
//! needs a plausible dispersion figure per strategy.

use crate::model::Allocation;

/// Annualized volatility (%) assumed for classes outside the known set.
const DEFAULT_VOLATILITY: f64 = 10.0;
/// Correlation assumed between any pair involving an unknown class.
const DEFAULT_CORRELATION: f64 = 0.2;

/// Annualized volatility (%) per asset class.
fn class_volatility(class: &str) -> f64 {
    match class {
        "stocks" => 18.0,
        "bonds" => 5.0,
        "gold" => 15.0,
        "reits" => 17.0,
        "cash" => 1.0,
        _ => DEFAULT_VOLATILITY,
    }
}

/// Pairwise correlation between two asset classes. Symmetric; 1.0 on the
/// diagonal, including for unknown class names.
fn class_correlation(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    // Order the pair so each correlation is stated once.
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    match (lo, hi) {
        ("bonds", "stocks") => -0.2,
        ("gold", "stocks") => 0.1,
        ("reits", "stocks") => 0.7,
        ("cash", "stocks") => 0.0,
        ("bonds", "gold") => 0.2,
        ("bonds", "reits") => 0.2,
        ("bonds", "cash") => 0.2,
        ("gold", "reits") => 0.1,
        ("cash", "gold") => 0.0,
        ("cash", "reits") => 0.0,
        _ => DEFAULT_CORRELATION,
    }
}

/// Estimate the annualized standard deviation (%) of a portfolio.
///
/// Zero-weight classes are dropped and the remaining weights normalized to
/// fractions of 1, so allocations need not sum to exactly 100. The variance
/// is the standard quadratic form over all ordered class pairs (cross terms
/// appear twice, once per orientation). Never fails: an empty allocation
/// estimates to 0 and the result is always finite and non-negative.
#[must_use]
pub fn estimate_volatility(allocation: &Allocation) -> f64 {
    let held = allocation.held_classes();
    let total_weight: f64 = held.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let mut variance = 0.0;
    for &(class_i, weight_i) in &held {
        for &(class_j, weight_j) in &held {
            let w_i = weight_i / total_weight;
            let w_j = weight_j / total_weight;
            variance += w_i
                * w_j
                * class_volatility(class_i)
                * class_volatility(class_j)
                * class_correlation(class_i, class_j);
        }
    }

    variance.max(0.0).sqrt()
}
