pub mod error;

// Marketplace datasets
pub mod dataset;
