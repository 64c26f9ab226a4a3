use std::collections::HashSet;

use tracing::debug;

use crate::platform::Platform;
use crate::record::Record;

/// Placeholder written for missing or empty cells.
pub const SENTINEL: &str = "Unknown";

/// Rows x columns view of the accumulated records. `None` is a missing cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build from loose (column, value) rows. Columns are the union of keys in
    /// first-seen order; a row without a column gets `None` there.
    pub fn from_rows<I, R, K, V>(rows: I) -> Table
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Table::default();
        let mut pending: Vec<Vec<(usize, String)>> = Vec::new();

        for row in rows {
            let mut cells = Vec::new();
            for (key, value) in row {
                let key = key.into();
                let idx = match table.columns.iter().position(|c| *c == key) {
                    Some(idx) => idx,
                    None => {
                        table.columns.push(key);
                        table.columns.len() - 1
                    }
                };
                cells.push((idx, value.into()));
            }
            pending.push(cells);
        }

        let width = table.columns.len();
        table.rows = pending
            .into_iter()
            .map(|cells| {
                let mut row = vec![None; width];
                for (idx, value) in cells {
                    row[idx] = Some(value);
                }
                row
            })
            .collect();
        table
    }

    pub fn from_records(records: &[Record]) -> Table {
        Table::from_rows(records.iter().map(Record::fields))
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Bring the table into its clean shape for `schema`:
    /// expected columns present, exact duplicate rows dropped (first kept),
    /// missing or empty cells replaced by [`SENTINEL`].
    pub fn normalize(mut self, schema: Platform) -> Table {
        debug!(
            schema = %schema,
            rows = self.rows.len(),
            columns = self.columns.len(),
            "normalizing"
        );

        for expected in schema.columns() {
            if self.column(expected).is_none() {
                self.columns.push(expected.to_string());
                for row in &mut self.rows {
                    row.push(Some(SENTINEL.to_string()));
                }
            }
        }

        let mut seen = HashSet::with_capacity(self.rows.len());
        self.rows.retain(|row| seen.insert(row.clone()));

        for cell in self.rows.iter_mut().flatten() {
            if cell.as_deref().map_or(true, str::is_empty) {
                *cell = Some(SENTINEL.to_string());
            }
        }

        debug!(rows = self.rows.len(), columns = self.columns.len(), "normalized");
        self
    }

    /// Cell values as written to disk.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.as_deref().unwrap_or("")).collect())
    }
}
