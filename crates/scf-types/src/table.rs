use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A minimal tabular value: named columns in declared order and rows of
/// optional cell text in column order.
///
/// This is the narrow surface the cell model consumes. Construction from
/// richer table shapes and rendering (e.g. Markdown export) live outside
/// the model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table with the given column names and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The value count must match the declared columns.
    pub fn push_row(&mut self, values: Vec<Option<String>>) -> Result<(), TypeError> {
        if values.len() != self.columns.len() {
            return Err(TypeError::ColumnCount {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Column names in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order; each row's values are in column order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of declared columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no columns and no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Character length of the table content: column names plus all cell
    /// text. Zero when the table has no columns or no rows.
    pub fn content_length(&self) -> usize {
        if self.columns.is_empty() || self.rows.is_empty() {
            return 0;
        }

        let names: usize = self.columns.iter().map(|c| c.chars().count()).sum();
        let cells: usize = self
            .rows
            .iter()
            .flatten()
            .filter_map(|value| value.as_ref())
            .map(|value| value.chars().count())
            .sum();

        names + cells
    }
}
