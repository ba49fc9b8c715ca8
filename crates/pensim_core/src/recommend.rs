//! Strategy recommendation scoring
//!
//! Ranks catalog presets against a user's return goal and drawdown
//! tolerance. Pure scoring over static data; the projection engine never
//! calls this. It feeds the strategy-selection step upstream of a
//! simulation.

use crate::catalog::StrategyCatalog;
use crate::model::PortfolioStrategy;

/// Score assigned to strategies whose risk exceeds the tolerance buffer;
/// keeps them out of the alternatives list while still sortable.
const EXCLUDED_SCORE: f64 = 9_999.0;

/// Strategies may exceed the stated drawdown tolerance by this much (%-pts)
/// before being excluded outright.
const MDD_BUFFER: f64 = 5.0;

/// The best-scoring preset plus up to two runner-ups.
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub recommended: &'a PortfolioStrategy,
    pub alternatives: Vec<&'a PortfolioStrategy>,
}

/// Score one strategy against the user's goals; lower is better.
///
/// Missing the return goal in either direction costs double the distance.
/// Risk above tolerance is penalized at twice the excess; risk below it
/// earns a slight safety bonus so equally-matched returns prefer the calmer
/// portfolio.
fn score(strategy: &PortfolioStrategy, target_return: f64, max_drawdown: f64) -> f64 {
    if strategy.expected_mdd > max_drawdown + MDD_BUFFER {
        return EXCLUDED_SCORE;
    }

    let return_diff = (strategy.expected_return - target_return).abs();
    let mdd_diff = strategy.expected_mdd - max_drawdown;
    let mdd_penalty = if mdd_diff > 0.0 { mdd_diff * 2.0 } else { 0.0 };
    let safety_bonus = if mdd_diff < 0.0 { -mdd_diff * 0.1 } else { 0.0 };

    return_diff * 2.0 + mdd_penalty - safety_bonus
}

/// Pick the preset closest to the stated goals, with up to two alternatives.
///
/// Returns `None` only for an empty catalog. When every preset is excluded
/// by the drawdown filter the least-bad one is still recommended (the
/// product always shows something), but no alternatives are offered.
#[must_use]
pub fn recommend_strategy<'a>(
    catalog: &'a StrategyCatalog,
    target_return: f64,
    max_drawdown: f64,
) -> Option<Recommendation<'a>> {
    let mut scored: Vec<(&PortfolioStrategy, f64)> = catalog
        .iter()
        .map(|strategy| (strategy, score(strategy, target_return, max_drawdown)))
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    let (recommended, _) = *scored.first()?;
    let alternatives = scored
        .iter()
        .skip(1)
        .filter(|(_, s)| *s < EXCLUDED_SCORE)
        .take(2)
        .map(|(strategy, _)| *strategy)
        .collect();

    Some(Recommendation {
        recommended,
        alternatives,
    })
}
