// ============================================================
// CSV ROW TYPES
// ============================================================
// Raw rows as they come off disk, header kept apart from data

/// A single data row in a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// Row index among data rows at load time (0-based, header excluded)
    pub index: usize,

    /// Field values in column order, untrimmed
    pub values: Vec<String>,
}

impl CsvRow {
    /// Create a new CSV row
    pub fn new(index: usize, values: Vec<String>) -> Self {
        Self { index, values }
    }

    /// Number of fields in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Field value at `column`, if the row is long enough
    pub fn get(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// A loaded CSV file: header separated from data rows
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Header labels
    pub header: Vec<String>,

    /// Data rows in file order
    pub rows: Vec<CsvRow>,
}

impl Dataset {
    pub fn new(header: Vec<String>, rows: Vec<CsvRow>) -> Self {
        Self { header, rows }
    }

    /// (data rows, header columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.header.len())
    }

    /// Rows in `start..end`, clamped to the dataset
    pub fn slice(&self, start: usize, end: usize) -> &[CsvRow] {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        &self.rows[start..end]
    }
}
