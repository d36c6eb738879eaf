use thiserror::Error;

/// Error types for Discogs operations.
///
/// This enum covers everything that can go wrong while querying the Discogs
/// API: configuration problems caught before any network call, transport
/// failures, non-success API responses, and malformed payloads.
///
/// A release without community rating data is deliberately *not* represented
/// here. The API frequently omits ratings, so the detail parser treats a
/// missing or malformed rating as 0.0 and carries on (see
/// [`crate::parsing`]).
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use discogs_top_rated::{DiscogsClient, DiscogsError, DiscogsHttpClient};
///
/// # tokio_test::block_on(async {
/// let client = DiscogsHttpClient::new(
///     Box::new(http_client::native::NativeClient::new()),
///     "token".to_string(),
/// );
///
/// match client.get_release(249504).await {
///     Ok(detail) => println!("rated {}", detail.community_rating),
///     Err(DiscogsError::Api { status, message }) => {
///         eprintln!("Discogs returned {status}: {message}");
///     }
///     Err(DiscogsError::RateLimit { retry_after }) => {
///         eprintln!("Rate limited, retry in {retry_after} seconds");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # });
/// ```
#[derive(Error, Debug)]
pub enum DiscogsError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, and other
    /// low-level networking issues.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid configuration, detected before any network call.
    ///
    /// # Common Causes
    /// - An unrecognized search option key
    /// - A missing `DISCOGS_API_TOKEN`
    /// - A `--style` value not present in the styles file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Discogs answered with a non-success status code.
    ///
    /// The whole run aborts on the first such response; no partial results
    /// are reported.
    #[error("Discogs API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message from the response body, or the canonical reason
        message: String,
    },

    /// Failed to parse a Discogs response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Rate limiting from Discogs (HTTP 429).
    ///
    /// The client throttles its own requests to stay under the API's
    /// ceiling, so this should be rare. It is fatal when it happens; this
    /// tool is a one-shot query and simply re-running it is the recovery.
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimit {
        /// Number of seconds to wait before retrying
        retry_after: u64,
    },

    /// File system I/O errors.
    ///
    /// This can occur when reading or writing the styles reference file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
