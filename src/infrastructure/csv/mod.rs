// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV loading with encoding fallback

mod csv_loader;

pub use csv_loader::CsvLoader;
