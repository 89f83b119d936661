use thiserror::Error;

/// Failures while fetching the page or locating the table inside it.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no element with id '{id}' in the document")]
    TableNotFound { id: String },

    #[error("table has no <{section}> section")]
    SectionMissing { section: &'static str },
}
