use std::collections::HashMap;

// Column names shared across the loader, the merger and the writer.
pub const COL_SLICE: &str = "Slice";
pub const COL_TOTAL_AREA: &str = "Total Area";
pub const COL_WELL_TOKEN: &str = "wellID";
pub const COL_SLICE_KEY: &str = "slice_key";
pub const COL_MERGE_STATUS: &str = "merge_status";
pub const COL_DENSITY: &str = "Transport Density";
pub const COL_WELL_ID: &str = "WellID";

/// One measurement record. A key absent from the map is the explicit
/// "undefined" marker and serializes as an empty CSV field.
pub type Row = HashMap<String, String>;

/// An ordered table: a column list (union of all source schemas, first-seen
/// order) plus rows keyed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Append a column to the schema if it is not already present.
    pub fn add_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Remove a column from the schema and from every row. No-op if absent.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.remove(name);
        }
    }

    /// Derive a new column from each row. Rows where `f` returns `None` keep
    /// the field undefined.
    pub fn derive_column<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&Row) -> Option<String>,
    {
        self.add_column(name);
        for row in &mut self.rows {
            if let Some(v) = f(row) {
                row.insert(name.to_string(), v);
            }
        }
    }
}
