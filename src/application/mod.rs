pub mod use_cases;

pub use use_cases::market_report::{MarketProfiler, MarketReport};
