//! Retirement savings projection engine
//!
//! Given a saver's age, assets, contribution rate and a preset asset
//! allocation, this crate projects account growth to retirement and
//! withdrawal sustainability afterward. It provides:
//! - Deterministic worst/median/best scenario compounding to age 100
//! - Payout math for the perpetual 4%-rule and fixed-term annuities
//! - Portfolio volatility estimation from a fixed covariance model
//! - A Monte Carlo estimate of the probability of never running dry
//! - Gap analysis that prices an income shortfall as an extra monthly
//!   contribution
//!
//! The engine is a pure function set: one call in, one result out, no
//! market data, no persistence, no process-wide state.
//!
//! ```ignore
//! use pensim_core::catalog::StrategyCatalog;
//! use pensim_core::model::{PayoutType, UserInputs};
//! use pensim_core::simulation::run_simulation_seeded;
//!
//! let catalog = StrategyCatalog::builtin();
//! let strategy = catalog.find("sixty_forty")?;
//! let inputs = UserInputs {
//!     current_age: 30,
//!     retirement_age: 60,
//!     current_assets: 0.0,
//!     monthly_contribution: 1_000_000.0,
//!     target_retirement_income: 3_000_000.0,
//!     target_return: 7.0,
//!     max_drawdown: 25.0,
//!     payout: PayoutType::Perpetual,
//!     inflation_adjusted: true,
//!     post_retirement_strategy_id: None,
//!     national_pension_amount: 0.0,
//! };
//! let result = run_simulation_seeded(&inputs, strategy, &catalog, 42);
//! println!("{}% success", result.success_probability);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod gap;
pub mod monte_carlo;
pub mod payout;
pub mod recommend;
pub mod scenario;
pub mod simulation;
pub mod volatility;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::StrategyCatalog;
pub use model::{
    Assumptions, GapAnalysisResult, PayoutType, PortfolioStrategy, ScenarioDetail, ScenarioSet,
    SimulationResult, UserInputs, YearlyData,
};
pub use simulation::{run_simulation, run_simulation_seeded};
