use crate::document::Document;
use crate::error::ScrapeError;
use crate::extract;
use crate::fetch::{fetch_page, FetchOptions};
use crate::output::{self, OutputFormat};
use crate::types::{SourceInfo, TableExport};
use anyhow::{Context, Result};
use ego_tree::NodeId;
use pokedex_model::Table;
use scraper::{ElementRef, Html};
use std::path::PathBuf;

/// A parsed Pokedex page with its table already located.
///
/// The page is fetched and the table looked up exactly once, when the value
/// is built. Every later call reads from that same element.
pub struct Pokedex {
    raw_html: String,
    document: Html,
    table: NodeId,
    source: SourceInfo,
}

impl Pokedex {
    /// Fetch the page and locate the table in it.
    pub async fn fetch(options: &FetchOptions) -> Result<Self, ScrapeError> {
        tracing::info!(url = %options.url, "Fetching Pokedex page");
        let html = fetch_page(&options.url, options.user_agent.as_deref()).await?;
        tracing::info!(bytes = html.len(), "Received HTML");
        Self::from_html(html, &options.url, &options.table_id)
    }

    /// Locate the table in an already downloaded page.
    pub fn from_html(html: String, url: &str, table_id: &str) -> Result<Self, ScrapeError> {
        let document = Html::parse_document(&html);
        if !document.errors.is_empty() {
            tracing::debug!(errors = document.errors.len(), "HTML parser recovered from errors");
        }

        let table = document
            .find_by_id(table_id)
            .ok_or_else(|| ScrapeError::TableNotFound {
                id: table_id.to_string(),
            })?
            .id();
        tracing::debug!(id = table_id, "Located table element");

        Ok(Self {
            raw_html: html,
            document,
            table,
            source: SourceInfo {
                url: url.to_string(),
                table_id: table_id.to_string(),
                fetched_at: chrono::Utc::now().to_rfc3339(),
            },
        })
    }

    /// The located table element.
    pub fn table_element(&self) -> ElementRef<'_> {
        self.document
            .tree
            .get(self.table)
            .and_then(ElementRef::wrap)
            .expect("table node id belongs to the retained document")
    }

    pub fn column_labels(&self) -> Result<Vec<String>, ScrapeError> {
        extract::column_labels(&self.table_element())
    }

    pub fn content_rows(&self) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        extract::content_rows(&self.table_element())
    }

    /// Labels, rows, and typed values in one go.
    pub fn table(&self) -> Result<Table, ScrapeError> {
        let labels = self.column_labels()?;
        let rows = self.content_rows()?;
        let table = extract::build_table(&labels, &rows);
        tracing::info!(
            columns = table.columns().len(),
            rows = rows.len(),
            "Extracted table"
        );
        Ok(table)
    }

    pub fn source(&self) -> &SourceInfo {
        &self.source
    }

    pub fn raw_html(&self) -> &str {
        &self.raw_html
    }
}

/// Everything one run needs: where the page comes from and where the table goes.
#[derive(Debug, Clone)]
pub struct AcquireOptions {
    pub fetch: FetchOptions,
    /// Read the page from this file instead of fetching `fetch.url`.
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Also save the fetched page here.
    pub cache_html: Option<PathBuf>,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            input: None,
            output: PathBuf::from("pokedex.csv"),
            format: OutputFormat::Csv,
            cache_html: None,
        }
    }
}

/// Fetch (or read) the page, extract the table, and write it out.
///
/// Any failure returns before the output file is opened.
pub async fn acquire(options: &AcquireOptions) -> Result<Table> {
    let pokedex = match &options.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading Pokedex page from file");
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Pokedex::from_html(html, &path.display().to_string(), &options.fetch.table_id)?
        }
        None => Pokedex::fetch(&options.fetch).await?,
    };

    if let Some(path) = &options.cache_html {
        output::cache_html(path, pokedex.raw_html())?;
    }

    let table = pokedex.table()?;

    match options.format {
        OutputFormat::Csv => output::write_csv(&table, &options.output)?,
        OutputFormat::Json => {
            let export = TableExport {
                source: pokedex.source(),
                columns: &table,
            };
            output::write_json(&export, &options.output)?;
        }
    }

    Ok(table)
}
