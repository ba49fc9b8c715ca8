//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `scenario` - Deterministic compounding and decumulation trajectories
//! - `simulation` - The full `run_simulation` contract and baseline fixture
//! - `monte_carlo` - Success probability estimation and its fallback score
//! - `gap` - Shortfall pricing and the contribution round-trip
//!
//! Leaf modules (`payout`, `volatility`, `catalog`, `recommend`) carry
//! their own unit tests inline.

mod gap;

use crate::model::{PayoutType, PortfolioStrategy, UserInputs};

/// The baseline regression fixture: age 30 to 60, 1,000,000/month into a
/// 7% strategy, inflation-adjusted (5% real), perpetual payout, 3,000,000
/// monthly target.
pub(crate) fn baseline_inputs() -> UserInputs {
    UserInputs {
        current_age: 30,
        retirement_age: 60,
        current_assets: 0.0,
        monthly_contribution: 1_000_000.0,
        target_retirement_income: 3_000_000.0,
        target_return: 7.0,
        max_drawdown: 25.0,
        payout: PayoutType::Perpetual,
        inflation_adjusted: true,
        post_retirement_strategy_id: None,
        national_pension_amount: 0.0,
    }
}

/// A minimal 60/40 strategy at the given expected return.
pub(crate) fn strategy_with_return(expected_return: f64) -> PortfolioStrategy {
    PortfolioStrategy {
        id: "test_sixty_forty".to_owned(),
        name: "Test 60/40".to_owned(),
        description: "fixture".to_owned(),
        allocation: crate::model::Allocation::of(&[("stocks", 60.0), ("bonds", 40.0)]),
        expected_return,
        expected_mdd: 22.0,
        etf_list: vec![],
    }
}

/// Closed-form end value of monthly contributions at a monthly rate:
/// ordinary annuity future value plus compounded starting assets.
pub(crate) fn closed_form_future_value(
    starting_assets: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    months: u32,
) -> f64 {
    let growth = (1.0 + monthly_rate).powi(months as i32);
    if monthly_rate == 0.0 {
        starting_assets + monthly_contribution * f64::from(months)
    } else {
        starting_assets * growth + monthly_contribution * (growth - 1.0) / monthly_rate
    }
}
