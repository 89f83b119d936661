use crate::error::ScrapeError;

pub const DEFAULT_URL: &str = "http://pokemondb.net/pokedex/all";

/// `id` attribute of the table on the default page.
pub const DEFAULT_TABLE_ID: &str = "pokedex";

/// Where to fetch the page from and which table to pick out of it.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub url: String,
    pub table_id: String,
    /// Sent only when set; the request otherwise carries no custom headers.
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            user_agent: None,
        }
    }
}

/// Issue one GET and return the body as text.
///
/// No timeout and no retry: a stalled server stalls the caller.
pub async fn fetch_page(url: &str, user_agent: Option<&str>) -> Result<String, ScrapeError> {
    let mut builder = reqwest::Client::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    let client = builder.build().map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| ScrapeError::Body {
        url: url.to_string(),
        source,
    })
}
