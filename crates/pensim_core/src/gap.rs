//! Retirement income gap analysis
//!
//! Compares total projected monthly retirement income (personal payout plus
//! the flat public pension) against the stated target and, on a shortfall,
//! inverts the annuity math to price the missing income as an extra monthly
//! contribution: income shortfall → present-value asset shortfall (inverse
//! payout formula at the post-retirement rate) → required payment into a
//! future-value annuity at the pre-retirement rate.

use crate::model::{GapAnalysisResult, UserInputs};
use crate::payout::required_assets;
use crate::scenario::round_currency;

/// Analyze the income gap for a projection's median outcome.
///
/// `projected_income` is the median scenario's personal monthly payout.
/// `gap` is positive on surplus; `gap_percentage` is defined as 0 when the
/// target is 0 so the result is always finite.
#[must_use]
pub fn analyze_gap(
    inputs: &UserInputs,
    projected_income: f64,
    pre_return_pct: f64,
    post_return_pct: f64,
    years_to_retirement: u32,
) -> GapAnalysisResult {
    let target_income = inputs.target_retirement_income;
    let total_retirement_income = projected_income + inputs.national_pension_amount;
    let gap = total_retirement_income - target_income;
    let gap_percentage = if target_income == 0.0 {
        0.0
    } else {
        gap / target_income * 100.0
    };
    let is_shortfall = gap < 0.0;

    let additional_monthly_contribution = if is_shortfall {
        let income_shortfall = target_income - total_retirement_income;
        let asset_shortfall = required_assets(income_shortfall, inputs.payout, post_return_pct);
        round_currency(required_monthly_saving(
            asset_shortfall,
            pre_return_pct,
            years_to_retirement,
        ))
    } else {
        0
    };

    GapAnalysisResult {
        target_income,
        projected_income,
        gap,
        gap_percentage,
        is_shortfall,
        additional_monthly_contribution,
        national_pension_amount: inputs.national_pension_amount,
        total_retirement_income,
    }
}

/// Monthly payment that grows to `future_value` over the remaining years:
/// the inverse future-value-of-annuity formula `PMT = FV·r / ((1+r)ⁿ − 1)`,
/// with straight division at r = 0.
fn required_monthly_saving(future_value: f64, annual_return_pct: f64, years: u32) -> f64 {
    let r = annual_return_pct / 100.0 / 12.0;
    let n = f64::from(years) * 12.0;
    if r == 0.0 {
        future_value / n
    } else {
        future_value * r / ((1.0 + r).powf(n) - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PayoutType;

    fn base_inputs(target: f64, pension: f64) -> UserInputs {
        UserInputs {
            current_age: 30,
            retirement_age: 60,
            current_assets: 0.0,
            monthly_contribution: 500_000.0,
            target_retirement_income: target,
            target_return: 7.0,
            max_drawdown: 25.0,
            payout: PayoutType::Perpetual,
            inflation_adjusted: true,
            post_retirement_strategy_id: None,
            national_pension_amount: pension,
        }
    }

    #[test]
    fn test_surplus_needs_no_extra_contribution() {
        let inputs = base_inputs(1_000_000.0, 0.0);
        let result = analyze_gap(&inputs, 1_500_000.0, 5.0, 5.0, 30);
        assert!(!result.is_shortfall);
        assert_eq!(result.additional_monthly_contribution, 0);
        assert!((result.gap - 500_000.0).abs() < 1e-9);
        assert!((result.gap_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_has_zero_percentage() {
        let inputs = base_inputs(0.0, 0.0);
        let result = analyze_gap(&inputs, 800_000.0, 5.0, 5.0, 30);
        assert_eq!(result.gap_percentage, 0.0);
        assert!(!result.is_shortfall);
    }

    #[test]
    fn test_pension_counts_toward_income() {
        let inputs = base_inputs(2_000_000.0, 600_000.0);
        let result = analyze_gap(&inputs, 1_400_000.0, 5.0, 5.0, 30);
        assert!((result.total_retirement_income - 2_000_000.0).abs() < 1e-9);
        assert!(!result.is_shortfall);
    }

    #[test]
    fn test_shortfall_prices_the_missing_income() {
        let inputs = base_inputs(3_000_000.0, 0.0);
        let result = analyze_gap(&inputs, 2_000_000.0, 5.0, 5.0, 30);
        assert!(result.is_shortfall);
        assert!((result.gap + 1_000_000.0).abs() < 1e-9);

        // 1,000,000/month under the 4%-rule needs 300,000,000 of assets;
        // saving toward that over 360 months at 5%/yr costs FV·r/((1+r)ⁿ−1).
        let fv = 1_000_000.0 * 12.0 / 0.04;
        let r: f64 = 0.05 / 12.0;
        let expected = fv * r / ((1.0 + r).powf(360.0) - 1.0);
        assert_eq!(
            result.additional_monthly_contribution,
            expected.round() as i64
        );
    }

    #[test]
    fn test_zero_rate_saving_is_straight_line() {
        let inputs = UserInputs {
            payout: PayoutType::Fixed { years: 20 },
            ..base_inputs(1_000_000.0, 0.0)
        };
        let result = analyze_gap(&inputs, 500_000.0, 0.0, 0.0, 10);
        // Asset shortfall at r = 0 is income × months; the saving plan is a
        // straight division over the remaining months.
        let expected: f64 = (500_000.0 * 240.0) / 120.0;
        assert_eq!(
            result.additional_monthly_contribution,
            expected.round() as i64
        );
    }
}
