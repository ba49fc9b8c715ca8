mod inputs;
mod results;
mod strategy;

pub use inputs::{PayoutType, UserInputs};
pub use results::{
    Assumptions, GapAnalysisResult, ScenarioDetail, ScenarioSet, SimulationResult, YearlyData,
};
pub use strategy::{Allocation, EtfHolding, PortfolioStrategy};
