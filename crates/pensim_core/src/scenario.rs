//! Deterministic scenario compounding
//!
//! Projects one fixed-rate scenario from the current age to the horizon:
//! monthly compounding with contributions up to retirement, then monthly
//! withdrawals against the post-retirement rate through age 100. All three
//! worst/median/best trajectories in a simulation result come from this one
//! routine at different rates.

use crate::model::{ScenarioDetail, UserInputs, YearlyData};
use crate::payout::monthly_payout;

/// Decumulation always runs to this age, regardless of depletion.
pub const HORIZON_AGE: u32 = 100;

/// Assumed annual inflation used both to shift nominal returns to real
/// terms and to escalate withdrawals during decumulation.
pub const INFLATION_RATE_PCT: f64 = 2.0;

pub(crate) fn round_currency(value: f64) -> i64 {
    value.round() as i64
}

/// Project a single scenario at fixed pre/post-retirement annual rates (%).
///
/// Accumulation: `years_to_retirement` years of
/// `assets ← assets·(1+r) + contribution` applied monthly, one row per year
/// with the compounding return isolated from the principal paid in.
///
/// Decumulation: exactly `100 − retirement_age` further years. The
/// withdrawal base is the target income when one is stated, otherwise the
/// payout the accumulated assets support. With `inflation_adjusted`,
/// year k of retirement withdraws base × 1.02ᵏ nominal; the row records
/// both that amount and its retirement-date real value. Assets clamp to 0
/// once depleted and the loop keeps emitting zero rows through the horizon,
/// so every scenario's trajectory has the same length and chart layers can
/// read the first zero row as the depletion age.
///
/// The headline figures (`final_assets`, `monthly_payout`) are measured at
/// retirement, not at the end of the horizon.
#[must_use]
pub fn project_scenario(
    inputs: &UserInputs,
    pre_annual_return_pct: f64,
    post_annual_return_pct: f64,
    years_to_retirement: u32,
) -> ScenarioDetail {
    let horizon_years = HORIZON_AGE.saturating_sub(inputs.retirement_age);
    let mut yearly_data =
        Vec::with_capacity((years_to_retirement + horizon_years) as usize);

    // Accumulation phase.
    let monthly_rate = pre_annual_return_pct / 100.0 / 12.0;
    let yearly_contribution = inputs.monthly_contribution * 12.0;
    let mut assets = inputs.current_assets;

    for year in 1..=years_to_retirement {
        let start_assets = assets;
        for _ in 0..12 {
            assets = assets * (1.0 + monthly_rate) + inputs.monthly_contribution;
        }
        let return_amount = assets - start_assets - yearly_contribution;

        yearly_data.push(YearlyData {
            year,
            age: inputs.current_age + year,
            contribution: round_currency(yearly_contribution),
            assets: round_currency(assets.max(0.0)),
            return_amount: round_currency(return_amount),
            withdrawal_nominal: None,
            withdrawal_real: None,
        });
    }

    let final_assets = assets;
    let total_contributions =
        inputs.current_assets + yearly_contribution * f64::from(years_to_retirement);
    let payout = monthly_payout(final_assets, inputs.payout, post_annual_return_pct);

    // Decumulation phase.
    let withdrawal_base = if inputs.target_retirement_income > 0.0 {
        inputs.target_retirement_income
    } else {
        payout
    };
    let post_monthly_rate = post_annual_return_pct / 100.0 / 12.0;
    let escalation = 1.0 + INFLATION_RATE_PCT / 100.0;

    for elapsed in 1..=horizon_years {
        let inflation_factor = if inputs.inflation_adjusted {
            escalation.powi(elapsed as i32)
        } else {
            1.0
        };
        let monthly_withdrawal = withdrawal_base * inflation_factor;

        for _ in 0..12 {
            assets = assets * (1.0 + post_monthly_rate) - monthly_withdrawal;
        }
        if assets < 0.0 {
            assets = 0.0;
        }

        let nominal = monthly_withdrawal * 12.0;
        yearly_data.push(YearlyData {
            year: years_to_retirement + elapsed,
            age: inputs.retirement_age + elapsed,
            contribution: 0,
            assets: round_currency(assets),
            return_amount: 0,
            withdrawal_nominal: Some(round_currency(nominal)),
            withdrawal_real: Some(round_currency(nominal / inflation_factor)),
        });
    }

    ScenarioDetail {
        final_assets: round_currency(final_assets),
        total_return: round_currency(final_assets - total_contributions),
        annualized_return: pre_annual_return_pct,
        monthly_payout: round_currency(payout),
        payout_years: inputs.payout.years(),
        yearly_data,
    }
}
