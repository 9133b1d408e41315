// ============================================================
// KNOWN BAD ROW CORRECTION
// ============================================================
// One-off removal of a row the published export is known to corrupt

use tracing::{info, warn};

use crate::domain::dataset::CsvRow;
use crate::domain::error::AppError;

/// Drop the data row at `index`, returning a new collection.
///
/// This is a fixed correction for a specific export, not validation: the row
/// is removed even if it no longer looks broken, but a warning is logged when
/// its rating column is not outside `0..=max_rating`.
pub fn remove_known_bad_row(
    rows: &[CsvRow],
    index: usize,
    rating_column: usize,
    max_rating: f64,
) -> Result<Vec<CsvRow>, AppError> {
    let bad = rows.get(index).ok_or_else(|| {
        AppError::ValidationError(format!(
            "Known bad row {} is past the end of the dataset ({} rows)",
            index,
            rows.len()
        ))
    })?;

    let rating = bad.get(rating_column).and_then(|v| v.parse::<f64>().ok());
    let confirmed = matches!(rating, Some(r) if r > max_rating || r < 0.0);

    if confirmed {
        info!(
            row = index,
            app = bad.get(0).unwrap_or_default(),
            "Removed row with out-of-range rating"
        );
    } else {
        warn!(
            row = index,
            app = bad.get(0).unwrap_or_default(),
            rating = bad.get(rating_column).unwrap_or_default(),
            "Removed known bad row, but its rating looks valid; has the export changed?"
        );
    }

    Ok(rows
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, row)| row.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, name: &str, rating: &str) -> CsvRow {
        CsvRow::new(index, vec![name.to_string(), "TOOLS".to_string(), rating.to_string()])
    }

    #[test]
    fn test_removes_exactly_the_bad_row() {
        let rows = vec![row(0, "A", "4.1"), row(1, "Photo Frame", "19"), row(2, "C", "3.9")];

        let corrected = remove_known_bad_row(&rows, 1, 2, 5.0).unwrap();

        assert_eq!(corrected.len(), rows.len() - 1);
        assert!(corrected.iter().all(|r| r.values[0] != "Photo Frame"));
        assert_eq!(corrected[1].values[0], "C");
    }

    #[test]
    fn test_removes_even_when_rating_looks_valid() {
        let rows = vec![row(0, "A", "4.1"), row(1, "B", "4.5")];
        let corrected = remove_known_bad_row(&rows, 0, 2, 5.0).unwrap();
        assert_eq!(corrected, vec![row(1, "B", "4.5")]);
    }

    #[test]
    fn test_index_past_end_is_error() {
        let rows = vec![row(0, "A", "4.1")];
        let err = remove_known_bad_row(&rows, 10472, 2, 5.0).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_input_is_left_untouched() {
        let rows = vec![row(0, "A", "19"), row(1, "B", "4.5")];
        let _ = remove_known_bad_row(&rows, 0, 2, 5.0).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
