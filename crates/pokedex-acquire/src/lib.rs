pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pokedex;
pub mod types;

pub use error::ScrapeError;
pub use fetch::{FetchOptions, DEFAULT_TABLE_ID, DEFAULT_URL};
pub use output::OutputFormat;
pub use pokedex::{acquire, AcquireOptions, Pokedex};
pub use types::{SourceInfo, TableExport};
