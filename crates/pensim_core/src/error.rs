use std::fmt;

/// Errors related to strategy catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    StrategyNotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::StrategyNotFound(id) => write!(f, "strategy {id:?} not found"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors related to Monte Carlo distribution setup
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    InvalidDistributionParameters {
        phase: &'static str,
        mean: f64,
        std_dev: f64,
    },
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::InvalidDistributionParameters {
                phase,
                mean,
                std_dev,
            } => {
                write!(
                    f,
                    "invalid {phase} return distribution (mean={mean}, std_dev={std_dev}): \
                     std_dev must be non-negative and finite"
                )
            }
        }
    }
}

impl std::error::Error for EstimatorError {}
