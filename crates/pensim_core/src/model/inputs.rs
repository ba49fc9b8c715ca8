//! Caller-supplied simulation inputs
//!
//! One `UserInputs` value describes a single projection request. The engine
//! treats it as immutable; numeric range validation (ages, required fields)
//! is the responsibility of the input-collection layer upstream.

use serde::{Deserialize, Serialize};

/// Withdrawal policy applied from retirement onward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayoutType {
    /// 4%-rule: pay a fixed 4% of retirement-date assets per year, forever.
    Perpetual,
    /// Annuity-certain: amortize retirement-date assets over a fixed term.
    Fixed { years: u32 },
}

impl PayoutType {
    /// Payout horizon in years, `None` for the perpetual policy.
    #[must_use]
    pub fn years(&self) -> Option<u32> {
        match self {
            PayoutType::Perpetual => None,
            PayoutType::Fixed { years } => Some(*years),
        }
    }
}

/// Inputs for a single projection call.
///
/// Monetary amounts are in whole currency units; `target_retirement_income`
/// and `national_pension_amount` are monthly figures in current-value terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInputs {
    pub current_age: u32,
    /// Must be greater than `current_age`; the engine does not re-check this.
    pub retirement_age: u32,
    pub current_assets: f64,
    pub monthly_contribution: f64,
    /// Desired monthly retirement income. Zero means "whatever the assets
    /// can pay", in which case withdrawals follow the computed payout.
    pub target_retirement_income: f64,
    /// Annual return goal (%), consumed by strategy recommendation only.
    pub target_return: f64,
    /// Drawdown tolerance (%), consumed by strategy recommendation only.
    pub max_drawdown: f64,
    pub payout: PayoutType,
    /// When set, expected returns are shifted to real terms (2% inflation)
    /// and decumulation withdrawals escalate 2%/year.
    pub inflation_adjusted: bool,
    /// Strategy to assume after retirement; `None` keeps the accumulation
    /// strategy. Unknown ids fall back to the catalog's first entry.
    #[serde(default)]
    pub post_retirement_strategy_id: Option<String>,
    /// Flat monthly public pension, assumed to start at retirement and not
    /// inflate.
    #[serde(default)]
    pub national_pension_amount: f64,
}

impl UserInputs {
    /// Whole years between now and retirement.
    #[must_use]
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}
