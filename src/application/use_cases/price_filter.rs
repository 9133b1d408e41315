// ============================================================
// PRICE FILTER
// ============================================================

use crate::domain::dataset::AppRecord;

/// Exact text match against the free sentinel; "0.00" or "Free" do not count
pub fn is_free_price(price: &str, sentinel: &str) -> bool {
    price == sentinel
}

/// Records priced at their dataset's free sentinel
pub fn filter_free<R: AppRecord>(records: &[R]) -> Vec<R> {
    let sentinel = R::schema().free_sentinel;
    records
        .iter()
        .filter(|r| is_free_price(r.price(), sentinel))
        .cloned()
        .collect()
}
