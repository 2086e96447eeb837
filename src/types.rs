use serde::Serialize;

//==============================================================================
// Tables
//==============================================================================

/// A catalog snapshot: one ordered schema shared by every row.
///
/// All cells are text. A missing value is the empty string; there is no
/// separate null. Every row holds exactly `columns().len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from literal rows, padding short rows with `""`.
    pub fn from_rows<C, R, S>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new(columns.into_iter().map(Into::into).collect());
        for row in rows {
            table.push_row(row.into_iter().map(Into::into).collect());
        }
        table
    }

    /// Append a row. Short rows are padded with `""` and extra cells are
    /// dropped so the width invariant always holds.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text, or `None` when the position is outside the table.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Identifier (column 0) of every row, in row order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(|row| row.first().map(String::as_str).unwrap_or(""))
    }

    /// Copy of this table keeping only rows whose identifier passes `keep`.
    pub fn filter_by_id<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&str) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| keep(row.first().map(String::as_str).unwrap_or("")))
            .cloned()
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Overwrite every cell at `column` with `values`, keeping the column name.
    /// Positions outside the schema are left alone.
    pub(crate) fn replace_column(&mut self, column: usize, values: Vec<String>) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            if let Some(cell) = row.get_mut(column) {
                *cell = value;
            }
        }
    }

    /// Add a trailing column.
    pub(crate) fn append_column(&mut self, name: &str, values: Vec<String>) {
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Identifier/description pairs (columns 0 and 1) for display.
    pub fn listing(&self) -> Vec<ListingEntry> {
        self.rows
            .iter()
            .map(|row| ListingEntry {
                id: row.first().cloned().unwrap_or_default(),
                description: row.get(1).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

//==============================================================================
// Output views
//==============================================================================

/// One line of the add or delete list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub id: String,
    pub description: String,
}

/// A product present in both tables whose price text differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceChange {
    pub id: String,
    pub description: String,
    pub new_price: String,
    pub old_price: String,
}

/// Row counts for one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub new_rows: usize,
    pub old_rows: usize,
    pub added: usize,
    pub deleted: usize,
    pub common: usize,
    /// `None` when either table lacks a price-like column.
    pub price_changes: Option<usize>,
}

/// Everything one comparison run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub new_rows: usize,
    pub old_rows: usize,
    pub to_add: Table,
    pub to_delete: Table,
    pub common: Table,
    /// `None` means the price comparison does not apply to this pair.
    pub price_changes: Option<Vec<PriceChange>>,
    pub export: Table,
    /// Positions of the two synthesized formula columns in `export`.
    pub formula_columns: [usize; 2],
}

impl Comparison {
    pub fn add_list(&self) -> Vec<ListingEntry> {
        self.to_add.listing()
    }

    pub fn delete_list(&self) -> Vec<ListingEntry> {
        self.to_delete.listing()
    }

    /// Price changes, empty when the comparison was not applicable.
    pub fn price_change_list(&self) -> &[PriceChange] {
        self.price_changes.as_deref().unwrap_or(&[])
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            new_rows: self.new_rows,
            old_rows: self.old_rows,
            added: self.to_add.row_count(),
            deleted: self.to_delete.row_count(),
            common: self.common.row_count(),
            price_changes: self.price_changes.as_ref().map(Vec::len),
        }
    }
}
