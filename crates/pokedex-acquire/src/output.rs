use crate::types::TableExport;
use anyhow::{Context, Result};
use pokedex_model::Table;
use std::fs;
use std::io::Write;
use std::path::Path;

/// File format for the scraped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated, header line first. No index column.
    #[default]
    Csv,
    /// Pretty JSON with provenance and one array per column.
    Json,
}

/// Write the table as CSV, replacing whatever is at `path`.
///
/// Ragged tables are refused before the file is touched.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    pokedex_validate::ensure_rectangular(table)?;

    let mut writer = csv_writer(
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
    );
    write_records(table, &mut writer)?;
    writer.flush().context("flushing CSV")?;

    tracing::info!(
        path = %path.display(),
        columns = table.columns().len(),
        rows = table.row_count(),
        "Wrote CSV"
    );
    Ok(())
}

/// Render the table as CSV in memory, same bytes as [`write_csv`].
pub fn to_csv_string(table: &Table) -> Result<String> {
    pokedex_validate::ensure_rectangular(table)?;

    let mut writer = csv_writer(Vec::new());
    write_records(table, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn write_records<W: Write>(table: &Table, writer: &mut csv::Writer<W>) -> Result<()> {
    writer
        .write_record(table.labels())
        .context("writing header")?;

    for (index, row) in table.rows().enumerate() {
        let fields: Vec<String> = row
            .into_iter()
            .map(|value| value.map(ToString::to_string).unwrap_or_default())
            .collect();
        writer
            .write_record(&fields)
            .with_context(|| format!("writing row {index}"))?;
    }

    Ok(())
}

/// Write the table plus its provenance as pretty JSON.
pub fn write_json(export: &TableExport<'_>, path: &Path) -> Result<()> {
    pokedex_validate::ensure_rectangular(export.columns)?;

    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        columns = export.columns.columns().len(),
        rows = export.columns.row_count(),
        "Wrote JSON"
    );
    Ok(())
}

/// Save the raw fetched HTML so the page can be re-examined without re-fetching.
pub fn cache_html(path: &Path, html: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}
