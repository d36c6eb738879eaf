use crate::parsing;
use crate::r#trait::DiscogsClient;
use crate::{
    CollectionPage, DiscogsError, Identity, ReleaseDetail, Result, SearchCriteria, SearchPage,
};
use async_trait::async_trait;
use http_client::{HttpClient, Request, Response};
use http_types::{Method, StatusCode, Url};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

const DEFAULT_BASE_URL: &str = "https://api.discogs.com";
const USER_AGENT: &str = "discogs-top-rated/0.1 +https://github.com/colonelpanic8/discogs-top-rated";

/// Minimum gap between any two requests.
///
/// Discogs enforces an undocumented per-token rate ceiling (roughly one
/// request per second for authenticated clients). Spacing requests out
/// explicitly keeps a long detail-fetch batch under it.
const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Concrete [`DiscogsClient`] backed by an HTTP implementation.
///
/// The client authenticates every request with a personal access token and
/// enforces a minimum interval between requests. It is strictly sequential:
/// callers issue one request at a time and the interval gate would serialize
/// them anyway.
///
/// # Examples
///
/// ```rust,no_run
/// use discogs_top_rated::{DiscogsClient, DiscogsHttpClient, SearchCriteria};
///
/// # tokio_test::block_on(async {
/// // Create client with any HTTP implementation
/// let http_client = http_client::native::NativeClient::new();
/// let client = DiscogsHttpClient::new(Box::new(http_client), "token".to_string());
///
/// let criteria = SearchCriteria::builder().filter("style", "ambient")?.build();
/// let page = client.search_page(&criteria, 1).await?;
/// println!("{} results", page.total_results);
/// # Ok::<(), discogs_top_rated::DiscogsError>(())
/// # }).unwrap();
/// ```
pub struct DiscogsHttpClient {
    client: Box<dyn HttpClient>,
    base_url: String,
    token: String,
    request_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl DiscogsHttpClient {
    /// Create a new [`DiscogsHttpClient`] against the public Discogs API.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    /// * `token` - A Discogs personal access token
    pub fn new(client: Box<dyn HttpClient>, token: String) -> Self {
        Self::with_base_url(client, token, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new [`DiscogsHttpClient`] with a custom base URL.
    ///
    /// Useful for tests against a local stub server.
    pub fn with_base_url(client: Box<dyn HttpClient>, token: String, base_url: String) -> Self {
        Self {
            client,
            base_url,
            token,
            request_interval: DEFAULT_REQUEST_INTERVAL,
            last_request: Mutex::new(None),
        }
    }

    /// Override the minimum interval between requests.
    ///
    /// A zero interval disables throttling entirely (tests do this).
    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Wait until the configured interval has passed since the last request.
    async fn throttle(&self) {
        if self.request_interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.request_interval {
                let wait = self.request_interval - elapsed;
                log::debug!("throttling for {}ms before next request", wait.as_millis());
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Make an authenticated GET request and return the response body.
    ///
    /// Any non-success status aborts with [`DiscogsError::Api`] (or
    /// [`DiscogsError::RateLimit`] for 429). There are no retries; this is a
    /// one-shot query tool and a failed page fetch is a hard failure.
    async fn get(&self, url: &str) -> Result<String> {
        self.throttle().await;

        let parsed_url = url
            .parse::<Url>()
            .map_err(|e| DiscogsError::Http(format!("invalid URL '{url}': {e}")))?;
        let mut request = Request::new(Method::Get, parsed_url);
        let authorization = format!("Discogs token={}", self.token);
        request.insert_header("User-Agent", USER_AGENT);
        request.insert_header("Accept", "application/json");
        request.insert_header("Authorization", authorization.as_str());

        log::debug!("GET {url}");
        let mut response: Response = self
            .client
            .send(request)
            .await
            .map_err(|e| DiscogsError::Http(e.to_string()))?;

        let body = response
            .body_string()
            .await
            .map_err(|e| DiscogsError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TooManyRequests {
            return Err(DiscogsError::RateLimit {
                retry_after: retry_after_seconds(&response),
            });
        }
        if !status.is_success() {
            return Err(DiscogsError::Api {
                status: status as u16,
                message: error_message(&body, status),
            });
        }

        Ok(body)
    }
}

fn search_url(base_url: &str, criteria: &SearchCriteria, page: u32) -> String {
    let mut url = format!("{base_url}/database/search?page={page}");
    for (key, value) in criteria.params() {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// Pull the error message out of a Discogs error body.
///
/// Error responses carry `{"message": "..."}`; fall back to the canonical
/// status reason when the body is not in that shape.
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.canonical_reason().to_string())
}

fn retry_after_seconds(response: &Response) -> u64 {
    response
        .header("Retry-After")
        .and_then(|values| values.get(0))
        .and_then(|value| value.as_str().parse().ok())
        .unwrap_or(60)
}

#[async_trait(?Send)]
impl DiscogsClient for DiscogsHttpClient {
    async fn search_page(&self, criteria: &SearchCriteria, page: u32) -> Result<SearchPage> {
        let url = search_url(&self.base_url, criteria, page);
        let body = self.get(&url).await?;
        parsing::parse_search_page(&body)
    }

    async fn get_release(&self, release_id: u64) -> Result<ReleaseDetail> {
        let url = format!("{}/releases/{release_id}", self.base_url);
        let body = self.get(&url).await?;
        parsing::parse_release_detail(&body)
    }

    async fn identity(&self) -> Result<Identity> {
        let url = format!("{}/oauth/identity", self.base_url);
        let body = self.get(&url).await?;
        parsing::parse_identity(&body)
    }

    async fn collection_page(&self, username: &str, page: u32) -> Result<CollectionPage> {
        let url = format!(
            "{}/users/{}/collection/folders/0/releases?page={page}",
            self.base_url,
            urlencoding::encode(username)
        );
        let body = self.get(&url).await?;
        parsing::parse_collection_page(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_search_url_with_encoded_params() {
        let criteria = SearchCriteria::builder()
            .filter("style", "drum n bass")
            .unwrap()
            .filter("year", "1990-1995")
            .unwrap()
            .build();
        let url = search_url(DEFAULT_BASE_URL, &criteria, 2);
        assert_eq!(
            url,
            "https://api.discogs.com/database/search?page=2&style=drum%20n%20bass&year=1990-1995"
        );
    }

    #[test]
    fn extracts_api_error_message() {
        let message = error_message(
            r#"{"message": "You must authenticate to access this resource."}"#,
            StatusCode::Unauthorized,
        );
        assert_eq!(message, "You must authenticate to access this resource.");

        let fallback = error_message("<html>nope</html>", StatusCode::Unauthorized);
        assert_eq!(fallback, "Unauthorized");
    }
}
