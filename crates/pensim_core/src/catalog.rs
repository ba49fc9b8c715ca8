//! Static strategy catalog
//!
//! The preset allocation strategies the projection engine can be pointed
//! at, with the Korea-listed ETF lineups that implement them. This is data,
//! not logic: expected returns and drawdowns are the presets' published
//! assumptions, never recalculated.
//!
//! Lookup is by string id. An unknown id resolves to the catalog's first
//! entry via [`StrategyCatalog::resolve_or_first`], a deliberate
//! silent-degradation policy (the UI always renders *some* projection)
//! made explicit and tested here rather than left as an accidental
//! default.

use rustc_hash::FxHashMap;

use crate::error::CatalogError;
use crate::model::{Allocation, EtfHolding, PortfolioStrategy};

/// An ordered set of strategies with an id index.
///
/// Order matters: the first entry is the fallback for unknown ids.
#[derive(Debug, Clone)]
pub struct StrategyCatalog {
    strategies: Vec<PortfolioStrategy>,
    index: FxHashMap<String, usize>,
}

impl StrategyCatalog {
    /// Build a catalog from an ordered strategy list. Later duplicates of
    /// an id are unreachable through lookup.
    #[must_use]
    pub fn new(strategies: Vec<PortfolioStrategy>) -> Self {
        let mut index = FxHashMap::default();
        for (position, strategy) in strategies.iter().enumerate() {
            index.entry(strategy.id.clone()).or_insert(position);
        }
        StrategyCatalog { strategies, index }
    }

    /// The built-in preset catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_strategies())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PortfolioStrategy> {
        self.index.get(id).map(|position| &self.strategies[*position])
    }

    pub fn find(&self, id: &str) -> Result<&PortfolioStrategy, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::StrategyNotFound(id.to_owned()))
    }

    #[must_use]
    pub fn first(&self) -> Option<&PortfolioStrategy> {
        self.strategies.first()
    }

    /// Look up `id`, falling back to the first entry when it is unknown.
    /// Only an empty catalog yields `None`.
    #[must_use]
    pub fn resolve_or_first(&self, id: &str) -> Option<&PortfolioStrategy> {
        self.get(id).or_else(|| self.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PortfolioStrategy> {
        self.strategies.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

fn strategy(
    id: &str,
    name: &str,
    description: &str,
    allocation: &[(&str, f64)],
    expected_return: f64,
    expected_mdd: f64,
    etf_list: Vec<EtfHolding>,
) -> PortfolioStrategy {
    PortfolioStrategy {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        allocation: Allocation::of(allocation),
        expected_return,
        expected_mdd,
        etf_list,
    }
}

fn etf(ticker: &str, name: &str, asset_class: &str, weight: f64) -> EtfHolding {
    EtfHolding::new(ticker, name, asset_class, weight)
}

fn builtin_strategies() -> Vec<PortfolioStrategy> {
    vec![
        strategy(
            "kor_us_6040",
            "Korea-US 60/40 Split",
            "Half Korean and half US assets for currency diversification and stability",
            &[("stocks", 60.0), ("bonds", 40.0)],
            7.0,
            18.0,
            vec![
                etf("102110", "TIGER 200", "stocks", 30.0),
                etf("360750", "TIGER US S&P 500", "stocks", 30.0),
                etf("114260", "KODEX Korea Treasury 3Y", "bonds", 20.0),
                etf("441610", "KODEX US Aggregate Bond Active (H)", "bonds", 20.0),
            ],
        ),
        strategy(
            "permanent",
            "Permanent Portfolio",
            "Equal split across four asset classes for steady returns",
            &[("stocks", 25.0), ("bonds", 25.0), ("gold", 25.0), ("cash", 25.0)],
            6.0,
            15.0,
            vec![
                etf("102110", "TIGER 200", "stocks", 25.0),
                etf("365340", "KBSTAR KIS Korea Treasury 30Y Enhanced", "bonds", 25.0),
                etf("411060", "ACE KRX Gold Spot", "gold", 25.0),
                etf("423160", "KODEX KOFR Rate Active", "cash", 25.0),
            ],
        ),
        strategy(
            "all_weather",
            "All Weather Portfolio",
            "Ray Dalio's four-seasons allocation built from Korea-listed ETFs",
            &[("stocks", 30.0), ("bonds", 55.0), ("gold", 7.5), ("cash", 7.5)],
            6.5,
            18.0,
            vec![
                etf("251350", "KODEX MSCI World", "stocks", 30.0),
                etf("453850", "ACE US 30Y Treasury Active (H)", "bonds", 40.0),
                etf("305080", "TIGER US Treasury 10Y Futures", "bonds", 15.0),
                etf("411060", "ACE KRX Gold Spot", "gold", 7.5),
                etf("423160", "KODEX KOFR Rate Active", "cash", 7.5),
            ],
        ),
        strategy(
            "conservative_income",
            "Conservative Income (20/80)",
            "Bond-heavy allocation that puts capital preservation first",
            &[("stocks", 20.0), ("bonds", 80.0)],
            4.5,
            10.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 20.0),
                etf("441610", "KODEX US Aggregate Bond Active (H)", "bonds", 80.0),
            ],
        ),
        strategy(
            "golden_butterfly",
            "Golden Butterfly",
            "Permanent-portfolio variant with a larger equity sleeve",
            &[("stocks", 40.0), ("bonds", 40.0), ("gold", 20.0)],
            7.0,
            20.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 20.0),
                etf("333560", "TIGER US S&P 500 Value", "stocks", 20.0),
                etf("453850", "ACE US 30Y Treasury Active (H)", "bonds", 20.0),
                etf("449170", "TIGER USD SOFR Rate Active", "bonds", 20.0),
                etf("411060", "ACE KRX Gold Spot", "gold", 20.0),
            ],
        ),
        strategy(
            "bogleheads_three",
            "Bogleheads Three-Fund",
            "US equity, international equity, and bonds - the classic index mix",
            &[("stocks", 60.0), ("bonds", 40.0)],
            7.5,
            25.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 40.0),
                etf("251350", "KODEX MSCI World", "stocks", 20.0),
                etf("441610", "KODEX US Aggregate Bond Active (H)", "bonds", 40.0),
            ],
        ),
        strategy(
            "sixty_forty",
            "Classic 60/40",
            "The standard 60% equity / 40% bond allocation",
            &[("stocks", 60.0), ("bonds", 40.0)],
            7.2,
            22.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 60.0),
                etf("441610", "KODEX US Aggregate Bond Active (H)", "bonds", 40.0),
            ],
        ),
        strategy(
            "swensen_yale",
            "David Swensen Yale Model",
            "Broad diversification across equities, REITs and treasuries",
            &[("stocks", 50.0), ("bonds", 30.0), ("reits", 20.0)],
            8.0,
            28.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 30.0),
                etf("251350", "KODEX MSCI World", "stocks", 15.0),
                etf("195980", "TIGER MSCI Emerging Markets (H)", "stocks", 5.0),
                etf("182480", "TIGER US MSCI REITs (H)", "reits", 20.0),
                etf("305080", "TIGER US Treasury 10Y Futures", "bonds", 30.0),
            ],
        ),
        strategy(
            "ivy_portfolio",
            "Meb Faber Ivy Portfolio",
            "Five-sleeve endowment-style split across asset classes",
            &[("stocks", 40.0), ("bonds", 20.0), ("reits", 20.0), ("cash", 20.0)],
            7.3,
            20.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 20.0),
                etf("251350", "KODEX MSCI World", "stocks", 20.0),
                etf("305080", "TIGER US Treasury 10Y Futures", "bonds", 20.0),
                etf("182480", "TIGER US MSCI REITs (H)", "reits", 20.0),
                etf("411060", "ACE KRX Gold Spot", "cash", 20.0),
            ],
        ),
        strategy(
            "buffett_90_10",
            "Warren Buffett 90/10",
            "90% S&P 500 index and 10% short-term treasuries",
            &[("stocks", 90.0), ("bonds", 10.0)],
            9.5,
            45.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 90.0),
                etf("449170", "TIGER USD SOFR Rate Active", "bonds", 10.0),
            ],
        ),
        strategy(
            "aggressive_growth",
            "Aggressive Growth (100%)",
            "All-equity allocation chasing maximum growth, high volatility",
            &[("stocks", 100.0)],
            10.0,
            50.0,
            vec![
                etf("360750", "TIGER US S&P 500", "stocks", 60.0),
                etf("367380", "ACE US Nasdaq 100", "stocks", 40.0),
            ],
        ),
        strategy(
            "vanguard_2065",
            "Target Retirement 2065",
            "High-growth target-date mix for investors 40+ years from retirement",
            &[("stocks", 90.0), ("bonds", 10.0)],
            9.8,
            48.0,
            vec![
                etf("251350", "KODEX MSCI World", "stocks", 90.0),
                etf("441610", "KODEX US Aggregate Bond Active (H)", "bonds", 10.0),
            ],
        ),
    ]
}
