use crate::cell::CellValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One named column and its values in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub values: Vec<CellValue>,
}

/// Column-oriented table: label → values, in header order.
///
/// Every column owns its own vector. A label seen twice maps to one column
/// whose position is fixed by its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table with an empty column for each label.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::default();
        for label in labels {
            let label = label.into();
            if table.position(&label).is_none() {
                table.columns.push(Column {
                    label,
                    values: Vec::new(),
                });
            }
        }
        table
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.label == label)
    }

    /// Append a value to the named column.
    ///
    /// Returns `false` (and drops the value) if the label is unknown.
    pub fn push(&mut self, label: &str, value: CellValue) -> bool {
        match self.position(label) {
            Some(idx) => {
                self.columns[idx].values.push(value);
                true
            }
            None => false,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, label: &str) -> Option<&[CellValue]> {
        self.position(label).map(|idx| self.columns[idx].values.as_slice())
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    /// True when all columns hold the same number of values.
    pub fn is_rectangular(&self) -> bool {
        let expected = self.row_count();
        self.columns.iter().all(|c| c.values.len() == expected)
    }

    /// Values of row `index` in column order; `None` where a column is short.
    pub fn row(&self, index: usize) -> Vec<Option<&CellValue>> {
        self.columns.iter().map(|c| c.values.get(index)).collect()
    }

    /// Iterate rows by index, up to [`Table::row_count`].
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&CellValue>>> + '_ {
        (0..self.row_count()).map(move |i| self.row(i))
    }
}

/// Serializes as a JSON-style object keyed by label, in column order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.label, &column.values)?;
        }
        map.end()
    }
}
