use anyhow::Context;
use lyrics_model::{LyricsError, SearchQuery};
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://genius.com";

/// Results requested per search category.
pub const SEARCH_PAGE_SIZE: u32 = 5;

// Upstream serves degraded or blocked responses to non-browser agents.
const SEARCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";
const VIEW_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

/// Thin client over the three genius.com calls a lookup makes.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct GeniusClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeniusClient {
    /// Build a client rooted at `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LyricsError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LyricsError::Upstream(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/api/search/multi?per_page={SEARCH_PAGE_SIZE}&q={}",
            self.base_url,
            urlencoding::encode(query.as_str())
        )
    }

    pub fn count_view_url(&self, song_id: &str) -> String {
        format!("{}/api/songs/{song_id}/count_view", self.base_url)
    }

    /// Run the multi-category search and return the raw JSON document.
    ///
    /// The payload is kept untyped so it can be echoed back verbatim when
    /// no song is found.
    pub async fn search(&self, query: &SearchQuery) -> Result<serde_json::Value, LyricsError> {
        let url = self.search_url(query);
        tracing::debug!(url = %url, "Searching genius");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(USER_AGENT, SEARCH_USER_AGENT)
            .send()
            .await
            .map_err(|e| request_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LyricsError::Upstream(format!("HTTP {status} for {url}")));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| request_error(e, &url))
    }

    /// Tell upstream the song was viewed.
    ///
    /// Callers are expected to log and drop the error.
    pub async fn count_view(&self, song_id: &str, referer: &str) -> anyhow::Result<()> {
        let url = self.count_view_url(song_id);

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "*/*")
            .header(REFERER, referer)
            .header(USER_AGENT, VIEW_USER_AGENT)
            .json(&serde_json::json!({}))
            .send()
            .await
            .context("Failed to send view count")?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

        tracing::debug!(song_id, "Recorded view");
        Ok(())
    }

    /// Fetch the song page HTML.
    pub async fn fetch_page(&self, url: &str) -> Result<String, LyricsError> {
        tracing::debug!(url = %url, "Fetching song page");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LyricsError::Upstream(format!("HTTP {status} for {url}")));
        }

        let html = response.text().await.map_err(|e| request_error(e, url))?;
        tracing::debug!(bytes = html.len(), "Received HTML");
        Ok(html)
    }
}

fn request_error(err: reqwest::Error, url: &str) -> LyricsError {
    if err.is_timeout() {
        LyricsError::Timeout { url: url.to_string() }
    } else {
        LyricsError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GeniusClient {
        GeniusClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let q = SearchQuery::parse(Some("Dynasty MIIA & co/?")).unwrap();
        assert_eq!(
            client(DEFAULT_BASE_URL).search_url(&q),
            "https://genius.com/api/search/multi?per_page=5&q=Dynasty%20MIIA%20%26%20co%2F%3F"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let c = client("http://127.0.0.1:8080/");
        assert_eq!(c.base_url(), "http://127.0.0.1:8080");
        assert_eq!(
            c.count_view_url("378195"),
            "http://127.0.0.1:8080/api/songs/378195/count_view"
        );
    }
}
