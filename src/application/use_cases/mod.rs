pub mod corrector;
pub mod deduplicator;
pub mod frequency;
pub mod grouped_average;
pub mod language_filter;
pub mod market_report;
pub mod price_filter;
