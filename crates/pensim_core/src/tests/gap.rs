//! Tests for gap analysis on full simulation output
//!
//! These tests verify that:
//! - The reported shortfall prices consistently with the payout math
//! - Adding the computed extra contribution closes the gap on a re-run
//! - The pension offsets the target without being inflation-adjusted

use super::{baseline_inputs, strategy_with_return};
use crate::catalog::StrategyCatalog;
use crate::model::{PayoutType, UserInputs};
use crate::simulation::run_simulation_seeded;

#[test]
fn test_baseline_reports_a_shortfall() {
    let inputs = baseline_inputs();
    let catalog = StrategyCatalog::builtin();
    let strategy = strategy_with_return(7.0);
    let result = run_simulation_seeded(&inputs, &strategy, &catalog, 42);

    let gap = &result.gap_analysis;
    assert_eq!(gap.target_income, 3_000_000.0);
    assert_eq!(
        gap.projected_income,
        result.scenarios.median.monthly_payout as f64
    );
    // 1,000,000/month at 5% real for 30 years pays out under 3,000,000.
    assert!(gap.is_shortfall);
    assert!(gap.gap < 0.0);
    assert!(gap.additional_monthly_contribution > 0);
    assert!((gap.total_retirement_income - gap.projected_income).abs() < 1e-9);
    assert!(
        (gap.gap_percentage - gap.gap / gap.target_income * 100.0).abs() < 1e-9
    );
}

#[test]
fn test_extra_contribution_closes_the_gap_perpetual() {
    let inputs = baseline_inputs();
    let catalog = StrategyCatalog::builtin();
    let strategy = strategy_with_return(7.0);
    let first = run_simulation_seeded(&inputs, &strategy, &catalog, 42);
    assert!(first.gap_analysis.is_shortfall);

    let adjusted = UserInputs {
        monthly_contribution: inputs.monthly_contribution
            + first.gap_analysis.additional_monthly_contribution as f64,
        ..inputs
    };
    let second = run_simulation_seeded(&adjusted, &strategy, &catalog, 42);

    // The gap must close to within rounding noise of the payout pipeline.
    assert!(
        second.gap_analysis.gap > -5.0,
        "residual gap {}",
        second.gap_analysis.gap
    );
}

#[test]
fn test_extra_contribution_closes_the_gap_fixed_term() {
    let inputs = UserInputs {
        payout: PayoutType::Fixed { years: 25 },
        monthly_contribution: 500_000.0,
        ..baseline_inputs()
    };
    let catalog = StrategyCatalog::builtin();
    let strategy = strategy_with_return(6.0);
    let first = run_simulation_seeded(&inputs, &strategy, &catalog, 42);
    assert!(first.gap_analysis.is_shortfall);

    let adjusted = UserInputs {
        monthly_contribution: inputs.monthly_contribution
            + first.gap_analysis.additional_monthly_contribution as f64,
        ..inputs
    };
    let second = run_simulation_seeded(&adjusted, &strategy, &catalog, 42);
    assert!(
        second.gap_analysis.gap > -5.0,
        "residual gap {}",
        second.gap_analysis.gap
    );
}

#[test]
fn test_pension_reduces_required_extra_contribution() {
    let catalog = StrategyCatalog::builtin();
    let strategy = strategy_with_return(7.0);

    let without = run_simulation_seeded(&baseline_inputs(), &strategy, &catalog, 42);
    let with_pension = UserInputs {
        national_pension_amount: 600_000.0,
        ..baseline_inputs()
    };
    let with = run_simulation_seeded(&with_pension, &strategy, &catalog, 42);

    assert_eq!(with.gap_analysis.national_pension_amount, 600_000.0);
    assert!(
        with.gap_analysis.total_retirement_income
            > without.gap_analysis.total_retirement_income
    );
    assert!(
        with.gap_analysis.additional_monthly_contribution
            < without.gap_analysis.additional_monthly_contribution
    );
}
