//! Portfolio strategy definitions
//!
//! Strategies are static presets: an asset-class weighting, the return/MDD
//! expectations attached to it, and the ETF lineup that implements it.
//! The engine only consumes the allocation map and `expected_return`;
//! `expected_mdd` and the ETF list are informational.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Asset-class weights in percent, keyed by class name.
///
/// Weights conceptually sum to 100 but that is not enforced; the volatility
/// estimator normalizes whatever it is given. Class names outside the known
/// set ({stocks, bonds, gold, reits, cash}) are legal and get default risk
/// parameters downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allocation(pub FxHashMap<String, f64>);

impl Allocation {
    /// Build an allocation from `(class, weight_pct)` pairs.
    #[must_use]
    pub fn of(pairs: &[(&str, f64)]) -> Self {
        Allocation(
            pairs
                .iter()
                .map(|(class, weight)| ((*class).to_owned(), *weight))
                .collect(),
        )
    }

    /// Weight for a class, 0 when absent.
    #[must_use]
    pub fn weight(&self, class: &str) -> f64 {
        self.0.get(class).copied().unwrap_or(0.0)
    }

    /// Non-zero entries sorted by class name.
    ///
    /// Map iteration order is not stable across builds; sorting keeps every
    /// computation over the allocation bit-for-bit deterministic.
    #[must_use]
    pub fn held_classes(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .0
            .iter()
            .filter(|(_, w)| **w > 0.0)
            .map(|(class, w)| (class.as_str(), *w))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// One ETF position inside a strategy's lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtfHolding {
    pub ticker: String,
    pub name: String,
    pub asset_class: String,
    /// Weight within the portfolio (%).
    pub weight: f64,
}

impl EtfHolding {
    pub(crate) fn new(ticker: &str, name: &str, asset_class: &str, weight: f64) -> Self {
        EtfHolding {
            ticker: ticker.to_owned(),
            name: name.to_owned(),
            asset_class: asset_class.to_owned(),
            weight,
        }
    }
}

/// A static allocation preset, looked up by id and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioStrategy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub allocation: Allocation,
    /// Expected annual return (%), nominal.
    pub expected_return: f64,
    /// Expected maximum drawdown (%). Informational; not consumed by the
    /// projection math.
    pub expected_mdd: f64,
    pub etf_list: Vec<EtfHolding>,
}
