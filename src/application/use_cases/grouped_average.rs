// ============================================================
// GROUPED AVERAGES
// ============================================================
// Mean of a numeric column per group, groups in first-seen order

use std::collections::HashMap;

use crate::domain::error::AppError;

/// Average of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub group: String,

    /// Mean truncated toward zero
    pub average: i64,

    /// Records in the group
    pub count: usize,
}

/// Distinct group values in the order they first appear
pub fn distinct_groups<R, G>(records: &[R], group: G) -> Vec<String>
where
    G: Fn(&R) -> &str,
{
    let mut order: Vec<String> = Vec::new();
    for record in records {
        let key = group(record);
        if !order.iter().any(|g| g == key) {
            order.push(key.to_string());
        }
    }
    order
}

/// Mean of `value` per distinct `group`, in first-seen group order.
///
/// The float mean is truncated toward zero. A `value` failure aborts the
/// whole aggregation.
pub fn grouped_average<R, G, V>(
    records: &[R],
    group: G,
    value: V,
) -> Result<Vec<GroupAverage>, AppError>
where
    G: Fn(&R) -> &str,
    V: Fn(&R) -> Result<f64, AppError>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let key = group(record);
        let n = value(record)?;

        let slot = totals.entry(key).or_insert_with(|| {
            order.push(key);
            (0.0, 0)
        });
        slot.0 += n;
        slot.1 += 1;
    }

    Ok(order
        .into_iter()
        .map(|key| {
            let (total, count) = totals[key];
            GroupAverage {
                group: key.to_string(),
                average: (total / count as f64).trunc() as i64,
                count,
            }
        })
        .collect())
}
