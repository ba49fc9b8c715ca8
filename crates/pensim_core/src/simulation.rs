//! Projection orchestration
//!
//! Wires the leaf components into the single entry point the UI layer
//! calls: three deterministic scenarios at spread rates, a Monte Carlo
//! success probability on the median assumptions (with a deterministic
//! fallback score), and the income gap analysis, all merged into one
//! result. Every call is a pure computation over its inputs - no caching,
//! no shared state.

use rand::RngCore;

use crate::catalog::StrategyCatalog;
use crate::gap::analyze_gap;
use crate::model::{
    Assumptions, PortfolioStrategy, ScenarioSet, SimulationResult, UserInputs,
};
use crate::monte_carlo::{self, DEFAULT_RUNS};
use crate::scenario::{INFLATION_RATE_PCT, project_scenario, round_currency};
use crate::volatility::estimate_volatility;

/// Worst/best scenarios sit this many %-points below/above the median rate.
pub const SCENARIO_SPREAD_PCT: f64 = 2.0;

/// Run a full projection with the built-in catalog and an entropy seed.
///
/// The deterministic parts of the result (scenarios, gap analysis) depend
/// only on the inputs; only `success_probability` varies across calls. Use
/// [`run_simulation_seeded`] for fully reproducible output.
#[must_use]
pub fn run_simulation(inputs: &UserInputs, strategy: &PortfolioStrategy) -> SimulationResult {
    run_simulation_seeded(
        inputs,
        strategy,
        &StrategyCatalog::builtin(),
        rand::rng().next_u64(),
    )
}

/// Run a full projection against an explicit catalog and Monte Carlo seed.
///
/// Rates: with `inflation_adjusted`, expected returns shift to real terms
/// by the fixed 2% inflation assumption. The post-retirement rate comes
/// from the strategy named by `post_retirement_strategy_id` (unknown ids
/// fall back to the catalog's first entry), else from `strategy` itself.
/// Worst/median/best apply the ±2pp spread to both phases.
#[must_use]
pub fn run_simulation_seeded(
    inputs: &UserInputs,
    strategy: &PortfolioStrategy,
    catalog: &StrategyCatalog,
    seed: u64,
) -> SimulationResult {
    let years_to_retirement = inputs.years_to_retirement();

    let inflation_rate = if inputs.inflation_adjusted {
        INFLATION_RATE_PCT
    } else {
        0.0
    };
    let pre_return = strategy.expected_return - inflation_rate;

    let post_strategy = match &inputs.post_retirement_strategy_id {
        Some(id) => catalog.resolve_or_first(id).unwrap_or(strategy),
        None => strategy,
    };
    let post_return = post_strategy.expected_return - inflation_rate;

    let scenarios = ScenarioSet {
        worst: project_scenario(
            inputs,
            pre_return - SCENARIO_SPREAD_PCT,
            post_return - SCENARIO_SPREAD_PCT,
            years_to_retirement,
        ),
        median: project_scenario(inputs, pre_return, post_return, years_to_retirement),
        best: project_scenario(
            inputs,
            pre_return + SCENARIO_SPREAD_PCT,
            post_return + SCENARIO_SPREAD_PCT,
            years_to_retirement,
        ),
    };

    let estimated_volatility = estimate_volatility(&strategy.allocation);

    // Monte Carlo runs on the median assumptions; a failed or zero result
    // degrades to the deterministic scenario-survival score.
    let monte_carlo_outcome = monte_carlo::success_probability(
        inputs,
        pre_return,
        post_return,
        estimated_volatility,
        years_to_retirement,
        DEFAULT_RUNS,
        seed,
    );
    let (success_probability, monte_carlo_runs) = match monte_carlo_outcome {
        Ok(probability) if probability > 0 => (probability, DEFAULT_RUNS),
        _ => (monte_carlo::fallback_success_score(&scenarios), 0),
    };

    let total_contributions = inputs.current_assets
        + inputs.monthly_contribution * 12.0 * f64::from(years_to_retirement);

    let gap_analysis = analyze_gap(
        inputs,
        scenarios.median.monthly_payout as f64,
        pre_return,
        post_return,
        years_to_retirement,
    );

    SimulationResult {
        years_to_retirement,
        total_contributions: round_currency(total_contributions),
        scenarios,
        success_probability,
        assumptions: Assumptions {
            inflation_rate,
            pre_retirement_return: pre_return,
            post_retirement_return: post_return,
            estimated_volatility,
            monte_carlo_runs,
        },
        gap_analysis,
    }
}
