//! Payout math
//!
//! Converts a pot of assets into a monthly withdrawal amount and back.
//! Two policies: the perpetual 4%-rule (rate-independent) and a fixed-term
//! annuity-certain, amortized at the post-retirement return. Both directions
//! guard the r = 0 case with straight-line division, since a 0% return is a
//! valid input.

use crate::model::PayoutType;

/// Annual withdrawal fraction under the perpetual policy.
const PERPETUAL_RATE: f64 = 0.04;

/// Monthly payout a pot of `assets` supports under the given policy.
///
/// `annual_return_pct` only matters for the fixed-term policy, where the
/// assets are treated as the present value of an annuity-certain:
/// `payment = assets · r / (1 − (1+r)⁻ⁿ)` at monthly rate r over n months.
#[must_use]
pub fn monthly_payout(assets: f64, payout: PayoutType, annual_return_pct: f64) -> f64 {
    match payout {
        PayoutType::Perpetual => assets * PERPETUAL_RATE / 12.0,
        PayoutType::Fixed { years } => {
            let r = annual_return_pct / 100.0 / 12.0;
            let n = f64::from(years) * 12.0;
            if r == 0.0 {
                assets / n
            } else {
                assets * r / (1.0 - (1.0 + r).powf(-n))
            }
        }
    }
}

/// Present-value assets required to fund `monthly_income` under the given
/// policy, the inverse of [`monthly_payout`].
#[must_use]
pub fn required_assets(monthly_income: f64, payout: PayoutType, annual_return_pct: f64) -> f64 {
    match payout {
        PayoutType::Perpetual => monthly_income * 12.0 / PERPETUAL_RATE,
        PayoutType::Fixed { years } => {
            let r = annual_return_pct / 100.0 / 12.0;
            let n = f64::from(years) * 12.0;
            if r == 0.0 {
                monthly_income * n
            } else {
                monthly_income * (1.0 - (1.0 + r).powf(-n)) / r
            }
        }
    }
}
