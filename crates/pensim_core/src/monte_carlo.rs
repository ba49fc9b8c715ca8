//! Monte Carlo success-probability estimation
//!
//! Re-runs a simplified accumulation/withdrawal path many times with
//! normally-distributed annual returns and reports the fraction of trials
//! that never deplete assets before age 100. Sampling is generic over
//! `rand::Rng` so tests can inject a seeded generator; the batch entry point
//! derives one `SmallRng` seed per trial up front from a master seed, which
//! keeps results identical between the serial and `rayon` paths and makes
//! survival pathwise monotone in the contribution under a fixed seed.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::EstimatorError;
use crate::model::{ScenarioDetail, ScenarioSet, UserInputs};
use crate::payout::monthly_payout;
use crate::scenario::{HORIZON_AGE, INFLATION_RATE_PCT};

/// Default number of trials per estimate.
pub const DEFAULT_RUNS: u32 = 500;

/// Post-retirement volatility is dampened to this fraction of the
/// accumulation volatility...
const POST_VOLATILITY_DAMPING: f64 = 0.8;
/// ...but never below this floor (%-points).
const POST_VOLATILITY_FLOOR: f64 = 3.0;

/// Return distributions for the two phases of a trial.
#[derive(Debug, Clone, Copy)]
struct ReturnModel {
    accumulation: Normal<f64>,
    decumulation: Normal<f64>,
}

impl ReturnModel {
    fn new(
        pre_return_pct: f64,
        post_return_pct: f64,
        volatility_pct: f64,
    ) -> Result<Self, EstimatorError> {
        let post_volatility = (volatility_pct * POST_VOLATILITY_DAMPING).max(POST_VOLATILITY_FLOOR);
        let accumulation = Normal::new(pre_return_pct, volatility_pct).map_err(|_| {
            EstimatorError::InvalidDistributionParameters {
                phase: "accumulation",
                mean: pre_return_pct,
                std_dev: volatility_pct,
            }
        })?;
        let decumulation = Normal::new(post_return_pct, post_volatility).map_err(|_| {
            EstimatorError::InvalidDistributionParameters {
                phase: "decumulation",
                mean: post_return_pct,
                std_dev: post_volatility,
            }
        })?;
        Ok(ReturnModel {
            accumulation,
            decumulation,
        })
    }
}

/// Simulate one trial; `true` if assets stay positive through the horizon.
///
/// Each year draws a fresh annual return and compounds it monthly, with
/// contributions added during accumulation and withdrawals subtracted during
/// decumulation. A trial fails the instant assets reach zero mid-month; no
/// further months are simulated for it.
fn run_survives<R: Rng + ?Sized>(
    inputs: &UserInputs,
    model: &ReturnModel,
    post_return_pct: f64,
    years_to_retirement: u32,
    rng: &mut R,
) -> bool {
    let mut assets = inputs.current_assets;

    for _ in 0..years_to_retirement {
        let annual_return = model.accumulation.sample(rng);
        let monthly_rate = annual_return / 100.0 / 12.0;
        for _ in 0..12 {
            assets = assets * (1.0 + monthly_rate) + inputs.monthly_contribution;
        }
    }

    let horizon_years = HORIZON_AGE.saturating_sub(inputs.retirement_age);
    let escalation = 1.0 + INFLATION_RATE_PCT / 100.0;

    for elapsed in 1..=horizon_years {
        let annual_return = model.decumulation.sample(rng);
        let monthly_rate = annual_return / 100.0 / 12.0;
        let monthly_withdrawal = if inputs.target_retirement_income > 0.0 {
            inputs.target_retirement_income * escalation.powi(elapsed as i32)
        } else {
            // No stated target: withdraw whatever the current pot pays out.
            monthly_payout(assets, inputs.payout, post_return_pct)
        };

        for _ in 0..12 {
            assets = assets * (1.0 + monthly_rate) - monthly_withdrawal;
            if assets <= 0.0 {
                return false;
            }
        }
    }

    true
}

/// Estimate the probability (%) of never depleting assets before age 100.
///
/// Runs `runs` independent trials at the given mean returns and estimated
/// volatility (all in %), seeded from `seed`. The result is an integer
/// percentage in [0, 100] by construction. `runs = 0` yields 0, which the
/// orchestration layer treats as "fall back to the deterministic score".
pub fn success_probability(
    inputs: &UserInputs,
    pre_return_pct: f64,
    post_return_pct: f64,
    volatility_pct: f64,
    years_to_retirement: u32,
    runs: u32,
    seed: u64,
) -> Result<u8, EstimatorError> {
    if runs == 0 {
        return Ok(0);
    }
    let model = ReturnModel::new(pre_return_pct, post_return_pct, volatility_pct)?;

    // Per-trial seeds come from the master seed, not from run order, so the
    // serial and parallel paths count the same survivals.
    let mut seed_rng = SmallRng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..runs).map(|_| seed_rng.next_u64()).collect();

    let survived = count_survivals(inputs, &model, post_return_pct, years_to_retirement, seeds);

    let probability = survived as f64 / f64::from(runs) * 100.0;
    Ok(probability.round() as u8)
}

#[cfg(feature = "parallel")]
fn count_survivals(
    inputs: &UserInputs,
    model: &ReturnModel,
    post_return_pct: f64,
    years_to_retirement: u32,
    seeds: Vec<u64>,
) -> usize {
    seeds
        .into_par_iter()
        .filter(|trial_seed| {
            let mut rng = SmallRng::seed_from_u64(*trial_seed);
            run_survives(inputs, model, post_return_pct, years_to_retirement, &mut rng)
        })
        .count()
}

#[cfg(not(feature = "parallel"))]
fn count_survivals(
    inputs: &UserInputs,
    model: &ReturnModel,
    post_return_pct: f64,
    years_to_retirement: u32,
    seeds: Vec<u64>,
) -> usize {
    seeds
        .into_iter()
        .filter(|trial_seed| {
            let mut rng = SmallRng::seed_from_u64(*trial_seed);
            run_survives(inputs, model, post_return_pct, years_to_retirement, &mut rng)
        })
        .count()
}

/// Deterministic stand-in when Monte Carlo is skipped, fails, or reports 0.
///
/// Scores six survival checks (three scenarios × ages 85 and 100) at up to
/// 80 points, with a 10-point bonus when the worst scenario reaches 85 and
/// 5 more when it reaches 100, clamped to [10, 99].
#[must_use]
pub fn fallback_success_score(scenarios: &ScenarioSet) -> u8 {
    let survives = |scenario: &ScenarioDetail, age: u32| {
        scenario.assets_at_age(age).is_some_and(|assets| assets > 0)
    };

    let checks = [
        survives(&scenarios.worst, 85),
        survives(&scenarios.worst, 100),
        survives(&scenarios.median, 85),
        survives(&scenarios.median, 100),
        survives(&scenarios.best, 85),
        survives(&scenarios.best, 100),
    ];
    let passed = checks.iter().filter(|ok| **ok).count();

    let mut score = passed as f64 / 6.0 * 80.0;
    if checks[0] {
        score += 10.0;
    }
    if checks[1] {
        score += 5.0;
    }

    (score.round() as u8).clamp(10, 99)
}
