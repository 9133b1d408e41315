// ============================================================
// DATASET SCHEMAS
// ============================================================
// Column positions and sentinels for the two marketplace dumps

/// Fixed layout of one marketplace CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSchema {
    /// Human-readable dataset label used in logs and report headings
    pub label: &'static str,

    /// Number of columns every well-formed row carries
    pub column_count: usize,

    /// App name column
    pub name: usize,

    /// Price column (compared as text against `free_sentinel`)
    pub price: usize,

    /// Literal price value that marks an app as free
    pub free_sentinel: &'static str,

    /// Data row known to be malformed in the published export, if any
    pub known_bad_row: Option<usize>,
}

/// App Store dump (`AppleStore.csv`)
pub mod apple {
    use super::DatasetSchema;

    pub const NAME: usize = 1;
    pub const PRICE: usize = 4;
    pub const RATING_COUNT: usize = 5;
    pub const PRIME_GENRE: usize = 11;

    pub const SCHEMA: DatasetSchema = DatasetSchema {
        label: "App Store",
        column_count: 16,
        name: NAME,
        price: PRICE,
        free_sentinel: "0.0",
        known_bad_row: None,
    };
}

/// Google Play dump (`googleplaystore.csv`)
pub mod google {
    use super::DatasetSchema;

    pub const NAME: usize = 0;
    pub const CATEGORY: usize = 1;
    pub const RATING: usize = 2;
    pub const REVIEWS: usize = 3;
    pub const INSTALLS: usize = 5;
    pub const PRICE: usize = 7;
    pub const GENRES: usize = 9;

    /// Ratings are on a 0-5 scale; anything above is corrupt
    pub const MAX_RATING: f64 = 5.0;

    /// "Life Made WI-Fi Touchscreen Photo Frame", rating 19, missing its category
    pub const KNOWN_BAD_ROW: usize = 10472;

    pub const SCHEMA: DatasetSchema = DatasetSchema {
        label: "Google Play",
        column_count: 13,
        name: NAME,
        price: PRICE,
        free_sentinel: "0",
        known_bad_row: Some(KNOWN_BAD_ROW),
    };
}
