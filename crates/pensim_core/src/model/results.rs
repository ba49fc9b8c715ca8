//! Projection results
//!
//! Output types for a single `run_simulation` call. Everything here is
//! consumed verbatim by chart/report renderers, so monetary figures are
//! pre-rounded to whole currency units and serialization is part of the
//! contract.

use serde::{Deserialize, Serialize};

/// One row of the year-by-year trajectory.
///
/// Rows are continuous across the accumulation/decumulation boundary:
/// `year` keeps counting and `age` keeps increasing. Withdrawal fields are
/// only present for decumulation years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearlyData {
    /// Sequential index, 1-based.
    pub year: u32,
    pub age: u32,
    /// Contributions paid in during the year; 0 once retired.
    pub contribution: i64,
    /// End-of-year assets, rounded, clamped at 0.
    pub assets: i64,
    /// End minus start minus contributions; 0 during decumulation.
    pub return_amount: i64,
    /// Amount actually withdrawn that year, after inflation escalation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_nominal: Option<i64>,
    /// The same withdrawal deflated to retirement-date purchasing power.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_real: Option<i64>,
}

/// Full trajectory and payout figures for one return scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDetail {
    /// Assets at retirement age (not at the end of the horizon).
    pub final_assets: i64,
    /// `final_assets` minus everything paid in.
    pub total_return: i64,
    /// The pre-retirement annual rate (%) this scenario compounded at.
    pub annualized_return: f64,
    /// Monthly payout the accumulated assets support at retirement.
    pub monthly_payout: i64,
    /// Payout horizon; `None` for the perpetual 4%-rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_years: Option<u32>,
    pub yearly_data: Vec<YearlyData>,
}

impl ScenarioDetail {
    /// End-of-year assets at a given age, if the trajectory covers it.
    #[must_use]
    pub fn assets_at_age(&self, age: u32) -> Option<i64> {
        self.yearly_data
            .iter()
            .find(|row| row.age == age)
            .map(|row| row.assets)
    }

    /// First age at which stored assets hit zero, if they ever do.
    /// Chart layers use this as the depletion age.
    #[must_use]
    pub fn depletion_age(&self) -> Option<u32> {
        self.yearly_data
            .iter()
            .find(|row| row.assets == 0)
            .map(|row| row.age)
    }
}

/// The three deterministic scenarios of one simulation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub worst: ScenarioDetail,
    pub median: ScenarioDetail,
    pub best: ScenarioDetail,
}

/// Echo of the rates and parameters the projection actually used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assumptions {
    /// Inflation rate (%) subtracted from nominal returns; 0 when the call
    /// was not inflation-adjusted.
    pub inflation_rate: f64,
    /// Median pre-retirement annual return (%), after inflation adjustment.
    pub pre_retirement_return: f64,
    /// Median post-retirement annual return (%), after inflation adjustment.
    pub post_retirement_return: f64,
    /// Portfolio volatility (%) estimated from the strategy allocation.
    pub estimated_volatility: f64,
    /// Monte Carlo trial count; 0 when the deterministic fallback was used.
    pub monte_carlo_runs: u32,
}

/// Projected retirement income versus the stated target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapAnalysisResult {
    /// The user's target monthly income.
    pub target_income: f64,
    /// Monthly payout from personal investments alone (median scenario).
    pub projected_income: f64,
    /// Total projected income minus target; positive means surplus.
    pub gap: f64,
    /// `gap` as a percentage of the target; 0 when the target is 0.
    pub gap_percentage: f64,
    pub is_shortfall: bool,
    /// Extra monthly contribution needed to close the gap; 0 if none.
    pub additional_monthly_contribution: i64,
    pub national_pension_amount: f64,
    /// `projected_income + national_pension_amount`.
    pub total_retirement_income: f64,
}

/// Top-level return value of `run_simulation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub years_to_retirement: u32,
    /// Starting assets plus every planned contribution through retirement.
    pub total_contributions: i64,
    pub scenarios: ScenarioSet,
    /// Probability (%) of not depleting assets before age 100.
    pub success_probability: u8,
    pub assumptions: Assumptions,
    pub gap_analysis: GapAnalysisResult,
}
