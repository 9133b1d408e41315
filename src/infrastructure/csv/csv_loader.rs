// ============================================================
// CSV LOADER
// ============================================================
// Read marketplace exports with encoding fallback and width checks

use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::{Encoding, WINDOWS_1252};
use tracing::{debug, warn};

use crate::domain::dataset::{CsvRow, Dataset};
use crate::domain::error::AppError;

/// CSV loader producing a header plus raw data rows
pub struct CsvLoader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Accept rows whose width differs from the header
    flexible: bool,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            flexible: false,
        }
    }
}

impl CsvLoader {
    /// Create a strict loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Allow ragged rows; width is then the caller's problem
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Load a CSV file
    pub fn load_file(&self, path: &Path) -> Result<Dataset, AppError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound(format!("{}", path.display())),
            _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        let content = decode(&bytes, path);
        let dataset = self.parse_content(&content)?;

        debug!(
            path = %path.display(),
            rows = dataset.rows.len(),
            columns = dataset.header.len(),
            "Loaded CSV"
        );
        Ok(dataset)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Dataset, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::None)
            .flexible(self.flexible)
            .from_reader(content.as_bytes());

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::FormatError(format!("Failed to read CSV header: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        if header.is_empty() {
            return Err(AppError::FormatError("CSV content has no header".to_string()));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| match e.kind() {
                csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                    AppError::FormatError(format!(
                        "Row {} has {} fields, header has {}",
                        index, len, expected_len
                    ))
                }
                _ => AppError::FormatError(format!("Failed to parse CSV row {}: {}", index, e)),
            })?;

            rows.push(CsvRow::new(
                index,
                record.iter().map(str::to_string).collect(),
            ));
        }

        Ok(Dataset::new(header, rows))
    }
}

/// UTF-8 (BOM honoured), falling back to Windows-1252
fn decode(bytes: &[u8], path: &Path) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!(path = %path.display(), "File is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,reviews,price\nAlice,30,0\nBob,25,0";
        let dataset = CsvLoader::new().parse_content(content).unwrap();

        assert_eq!(dataset.header, vec!["name", "reviews", "price"]);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[1].index, 1);
        assert_eq!(dataset.rows[1].values[0], "Bob");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let content = "name,price\n Padded ,0.0 ";
        let dataset = CsvLoader::new().parse_content(content).unwrap();

        assert_eq!(dataset.rows[0].values[0], " Padded ");
        assert_eq!(dataset.rows[0].values[1], "0.0 ");
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let content = "App,Installs\n\"Chat, Free\",\"1,000,000+\"";
        let dataset = CsvLoader::new().parse_content(content).unwrap();

        assert_eq!(dataset.rows[0].values, vec!["Chat, Free", "1,000,000+"]);
    }

    #[test]
    fn test_width_mismatch_is_format_error() {
        let content = "a,b,c\n1,2,3\n4,5";
        let err = CsvLoader::new().parse_content(content).unwrap_err();
        assert!(matches!(err, AppError::FormatError(_)));
    }

    #[test]
    fn test_flexible_accepts_short_rows() {
        let content = "a,b,c\n1,2,3\n4,5";
        let dataset = CsvLoader::new()
            .with_flexible(true)
            .parse_content(content)
            .unwrap();
        assert_eq!(dataset.rows[1].len(), 2);
    }

    #[test]
    fn test_custom_delimiter() {
        let dataset = CsvLoader::new()
            .with_delimiter(b';')
            .parse_content("a;b\n1;2")
            .unwrap();
        assert_eq!(dataset.shape(), (1, 2));
    }

    #[test]
    fn test_empty_content_has_no_header() {
        assert!(CsvLoader::new().parse_content("").is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = CsvLoader::new()
            .load_file(Path::new("definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_decode_strips_bom_and_falls_back() {
        let path = Path::new("mem.csv");
        assert_eq!(decode(b"\xEF\xBB\xBFname", path), "name");
        assert_eq!(decode(b"caf\xE9", path), "café");
    }
}
