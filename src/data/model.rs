use std::fmt;

// ---------------------------------------------------------------------------
// Table – header plus text rows
// ---------------------------------------------------------------------------

/// One data row: cells in header order.
pub type Row = Vec<String>;

/// A parsed comma-separated table.
///
/// Every row holds exactly `header.len()` cells; the loader rejects input that
/// does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names in file order.
    pub header: Vec<String>,
    /// Data rows (the header is not included).
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Table { header, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize as comma-joined cells and newline-joined rows, header first,
    /// with no trailing newline.
    pub fn to_csv_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header.join(","))?;
        for row in &self.rows {
            write!(f, "\n{}", row.join(","))?;
        }
        Ok(())
    }
}
