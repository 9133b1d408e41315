// ============================================================
// DATASET DOMAIN LAYER
// ============================================================
// Rows, schemas, and typed records for the marketplace dumps
// No I/O

mod analysis_config;
mod app_record;
mod csv_row;
pub mod schema;

pub use analysis_config::AnalysisConfig;
pub use app_record::{
    clean_installs, into_records, parse_number, AppRecord, AppleAppRecord, GoogleAppRecord,
};
pub use csv_row::{CsvRow, Dataset};
pub use schema::DatasetSchema;
