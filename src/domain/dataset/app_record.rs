// ============================================================
// APP RECORDS
// ============================================================
// Typed views over raw rows, one per marketplace

use super::schema::{apple, google, DatasetSchema};
use super::CsvRow;
use crate::domain::error::{AppError, Result};

/// Common surface of both marketplace records
pub trait AppRecord: Clone {
    /// Layout this record was validated against
    fn schema() -> &'static DatasetSchema;

    /// Underlying raw row
    fn row(&self) -> &CsvRow;

    /// App name / title
    fn name(&self) -> &str {
        &self.row().values[Self::schema().name]
    }

    /// Raw price text
    fn price(&self) -> &str {
        &self.row().values[Self::schema().price]
    }
}

/// Check that `row` carries exactly the schema's column count
fn validate_width(row: &CsvRow, schema: &DatasetSchema) -> Result<()> {
    if row.len() != schema.column_count {
        return Err(AppError::FormatError(format!(
            "{} row {} has {} fields, expected {}",
            schema.label,
            row.index,
            row.len(),
            schema.column_count
        )));
    }
    Ok(())
}

/// Parse a numeric text field as f64
pub fn parse_number(value: &str, field: &str, row_index: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|e| {
        AppError::ParseError(format!(
            "Row {}: {} value '{}' is not numeric: {}",
            row_index, field, value, e
        ))
    })
}

/// Strip install-count decorations: "1,000,000+" -> "1000000"
pub fn clean_installs(value: &str) -> String {
    value.replace('+', "").replace(',', "")
}

/// One App Store listing
#[derive(Debug, Clone, PartialEq)]
pub struct AppleAppRecord {
    row: CsvRow,
}

impl AppleAppRecord {
    /// Total user rating count
    pub fn rating_count(&self) -> Result<f64> {
        parse_number(self.rating_count_text(), "rating_count_tot", self.row.index)
    }

    pub fn rating_count_text(&self) -> &str {
        &self.row.values[apple::RATING_COUNT]
    }

    pub fn prime_genre(&self) -> &str {
        &self.row.values[apple::PRIME_GENRE]
    }
}

impl AppRecord for AppleAppRecord {
    fn schema() -> &'static DatasetSchema {
        &apple::SCHEMA
    }

    fn row(&self) -> &CsvRow {
        &self.row
    }
}

impl TryFrom<CsvRow> for AppleAppRecord {
    type Error = AppError;

    fn try_from(row: CsvRow) -> Result<Self> {
        validate_width(&row, &apple::SCHEMA)?;
        Ok(Self { row })
    }
}

/// One Google Play listing
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleAppRecord {
    row: CsvRow,
}

impl GoogleAppRecord {
    pub fn category(&self) -> &str {
        &self.row.values[google::CATEGORY]
    }

    pub fn genres(&self) -> &str {
        &self.row.values[google::GENRES]
    }

    /// Review count
    pub fn reviews(&self) -> Result<f64> {
        parse_number(&self.row.values[google::REVIEWS], "Reviews", self.row.index)
    }

    /// Raw installs bucket, e.g. "10,000+"
    pub fn installs_text(&self) -> &str {
        &self.row.values[google::INSTALLS]
    }

    /// Installs bucket as a number, "+" and "," stripped
    pub fn installs(&self) -> Result<f64> {
        parse_number(
            &clean_installs(self.installs_text()),
            "Installs",
            self.row.index,
        )
    }
}

impl AppRecord for GoogleAppRecord {
    fn schema() -> &'static DatasetSchema {
        &google::SCHEMA
    }

    fn row(&self) -> &CsvRow {
        &self.row
    }
}

impl TryFrom<CsvRow> for GoogleAppRecord {
    type Error = AppError;

    fn try_from(row: CsvRow) -> Result<Self> {
        validate_width(&row, &google::SCHEMA)?;
        Ok(Self { row })
    }
}

/// Convert raw rows into typed records, failing on the first malformed row
pub fn into_records<R>(rows: Vec<CsvRow>) -> Result<Vec<R>>
where
    R: TryFrom<CsvRow, Error = AppError>,
{
    rows.into_iter().map(R::try_from).collect()
}
