use anyhow::Result;
use pokedex_model::Table;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("table has no column labels")]
    NoColumns,

    #[error("column '{label}' has {len} values, expected {expected}")]
    RaggedColumn {
        label: String,
        len: usize,
        expected: usize,
    },
}

/// Check that a table is rectangular.
///
/// Every column must have as many values as the longest one. Returns the
/// list of problems found; an empty list means the table can be written.
pub fn validate_table(table: &Table) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if table.columns().is_empty() {
        errors.push(ValidationError::NoColumns);
        return errors;
    }

    let expected = table.row_count();
    for column in table.columns() {
        if column.values.len() != expected {
            errors.push(ValidationError::RaggedColumn {
                label: column.label.clone(),
                len: column.values.len(),
                expected,
            });
        }
    }

    errors
}

/// Fail if [`validate_table`] reports anything, logging each problem.
pub fn ensure_rectangular(table: &Table) -> Result<()> {
    let errors = validate_table(table);
    if !errors.is_empty() {
        for e in &errors {
            tracing::warn!("{e}");
        }
        anyhow::bail!("{} validation errors in extracted table", errors.len());
    }
    tracing::debug!(
        columns = table.columns().len(),
        rows = table.row_count(),
        "Table is rectangular"
    );
    Ok(())
}
