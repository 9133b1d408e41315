// ============================================================
// FREQUENCY TABLES
// ============================================================
// Percentage share of each distinct value of a categorical column

use std::cmp::Ordering;
use std::collections::HashMap;

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub value: String,

    /// Share of the collection, 0-100, rounded to 2 decimals
    pub percentage: f64,
}

/// Distinct values with their percentage share, in display order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyTable {
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Percentage for `value`, if present
    pub fn get(&self, value: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.percentage)
    }

    /// Sum of all percentages (100 give or take rounding)
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }
}

/// Round the exact binary value to `decimals` places.
///
/// `(x * 100.0).round() / 100.0` double-rounds and disagrees on values such as
/// 1.005; formatting goes through the exact decimal expansion instead.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Build a frequency table over `selector`, sorted by percentage then value,
/// both descending.
pub fn frequency_table<R, F>(records: &[R], selector: F) -> FrequencyTable
where
    F: Fn(&R) -> &str,
{
    if records.is_empty() {
        return FrequencyTable::default();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(selector(record)).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(value, count)| FrequencyEntry {
            value: value.to_string(),
            percentage: round_to(count as f64 / total * 100.0, 2),
        })
        .collect();

    entries.sort_by(display_order);

    FrequencyTable { entries }
}

fn display_order(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.percentage
        .total_cmp(&a.percentage)
        .then_with(|| b.value.cmp(&a.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&'static str]) -> FrequencyTable {
        frequency_table(values, |v| *v)
    }

    #[test]
    fn test_percentages_and_order() {
        let t = table(&["Games", "Games", "Games", "Music", "Books"]);

        assert_eq!(t.len(), 3);
        assert_eq!(t.entries[0].value, "Games");
        assert_eq!(t.entries[0].percentage, 60.0);
        assert_eq!(t.get("Music"), Some(20.0));
        assert_eq!(t.get("Weather"), None);
    }

    #[test]
    fn test_ties_sort_by_value_descending() {
        let t = table(&["Books", "Music", "Games", "Art"]);
        let order: Vec<&str> = t.entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(order, vec!["Music", "Games", "Books", "Art"]);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let t = table(&["A", "B", "B"]);
        assert_eq!(t.get("A"), Some(33.33));
        assert_eq!(t.get("B"), Some(66.67));
    }

    #[test]
    fn test_sums_to_hundred_within_tolerance() {
        let values: Vec<&'static str> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .cycle()
            .take(101)
            .copied()
            .collect();
        let t = table(&values);

        assert!((t.total() - 100.0).abs() <= 0.02 * t.len() as f64);
    }

    #[test]
    fn test_empty_collection() {
        assert!(table(&[]).is_empty());
    }

    #[test]
    fn test_round_to_matches_exact_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(58.1626, 2), 58.16);
    }
}
