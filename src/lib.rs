mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use app::run;
pub use application::MarketProfiler;
pub use domain::dataset::AnalysisConfig;
pub use domain::error::AppError;
