use pokedex_model::Table;
use serde::{Deserialize, Serialize};

/// Provenance information about one scrape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceInfo {
    pub url: String,
    pub table_id: String,
    pub fetched_at: String,
}

/// JSON export: provenance plus the column-oriented table.
#[derive(Debug, Serialize)]
pub struct TableExport<'a> {
    pub source: &'a SourceInfo,
    pub columns: &'a Table,
}
