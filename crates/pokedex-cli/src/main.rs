use anyhow::Result;
use clap::Parser;
use pokedex_acquire::{AcquireOptions, FetchOptions, OutputFormat, DEFAULT_TABLE_ID, DEFAULT_URL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Scrape the Pokedex table into a CSV file")]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// Page holding the table
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// `id` attribute of the table element
    #[arg(long, default_value = DEFAULT_TABLE_ID)]
    table_id: String,

    /// Output file, overwritten if it exists
    #[arg(short, long, default_value = "pokedex.csv")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "csv", value_enum)]
    format: Format,

    /// Read the page from a local HTML file instead of fetching --url
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also save the raw page to this path
    #[arg(long)]
    cache_html: Option<PathBuf>,

    /// User-Agent header to send (none by default)
    #[arg(long)]
    user_agent: Option<String>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    /// Comma-separated values with a header line
    Csv,
    /// Pretty JSON with source provenance
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn acquire_options(&self) -> AcquireOptions {
        AcquireOptions {
            fetch: FetchOptions {
                url: self.url.clone(),
                table_id: self.table_id.clone(),
                user_agent: self.user_agent.clone(),
            },
            input: self.input.clone(),
            output: self.output.clone(),
            format: self.format.into(),
            cache_html: self.cache_html.clone(),
        }
    }
}

fn init_tracing(log_level: &LogLevel, utc: bool) {
    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.utc);

    let options = cli.acquire_options();
    tracing::info!(
        url = %options.fetch.url,
        table_id = %options.fetch.table_id,
        output = %options.output.display(),
        "Scraping Pokedex table"
    );

    let table = pokedex_acquire::acquire(&options).await?;
    tracing::info!(
        columns = table.columns().len(),
        rows = table.row_count(),
        "Done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_fixed_defaults() {
        let cli = Cli::try_parse_from(["pokedex"]).unwrap();
        let options = cli.acquire_options();
        assert_eq!(options.fetch.url, "http://pokemondb.net/pokedex/all");
        assert_eq!(options.fetch.table_id, "pokedex");
        assert_eq!(options.output, PathBuf::from("pokedex.csv"));
        assert_eq!(options.format, OutputFormat::Csv);
        assert!(options.input.is_none());
        assert!(options.fetch.user_agent.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pokedex",
            "--input",
            "page.html",
            "-o",
            "out.json",
            "-f",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let options = cli.acquire_options();
        assert_eq!(options.input, Some(PathBuf::from("page.html")));
        assert_eq!(options.output, PathBuf::from("out.json"));
        assert_eq!(options.format, OutputFormat::Json);
    }
}
