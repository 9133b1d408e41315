// ============================================================
// DEDUPLICATOR
// ============================================================
// Keep one record per key: the one with the largest comparison value

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::error::AppError;

/// Counts of repeated and distinct keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateSummary {
    /// Records whose key had already been seen
    pub duplicates: usize,

    /// Distinct keys
    pub unique: usize,
}

/// Count how many records repeat an earlier key
pub fn duplicate_summary<R, K>(records: &[R], key: K) -> DuplicateSummary
where
    K: Fn(&R) -> &str,
{
    let mut seen = HashSet::new();
    let mut duplicates = 0;

    for record in records {
        if !seen.insert(key(record)) {
            duplicates += 1;
        }
    }

    DuplicateSummary {
        duplicates,
        unique: seen.len(),
    }
}

/// Reduce `records` to one per key, keeping the maximum of `value`.
///
/// Two passes: the first records the max per key, the second keeps the first
/// record (in input order) whose value equals that max. Equal maxima therefore
/// resolve to the earliest row, wherever the max was first observed.
pub fn dedupe_by_max<R, K, V>(records: &[R], key: K, value: V) -> Result<Vec<R>, AppError>
where
    R: Clone,
    K: Fn(&R) -> &str,
    V: Fn(&R) -> Result<f64, AppError>,
{
    let mut max_by_key: HashMap<&str, f64> = HashMap::new();

    for record in records {
        let n = value(record)?;
        match max_by_key.get_mut(key(record)) {
            Some(max) => {
                if *max < n {
                    *max = n;
                }
            }
            None => {
                max_by_key.insert(key(record), n);
            }
        }
    }

    let mut kept = Vec::with_capacity(max_by_key.len());
    let mut already_added = HashSet::new();

    for record in records {
        let name = key(record);
        if already_added.contains(name) {
            continue;
        }
        if value(record)? == max_by_key[name] {
            kept.push(record.clone());
            already_added.insert(name);
        }
    }

    debug!(
        input = records.len(),
        kept = kept.len(),
        "Deduplicated by max value"
    );
    Ok(kept)
}
