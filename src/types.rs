//! Data types for Discogs search results and release metadata.
//!
//! This module contains the core data structures used throughout the crate:
//! search result summaries, paginated page containers, per-release rating
//! details, and the final filtered report.

use serde::{Deserialize, Serialize};

// ================================================================================================
// SEARCH RESULTS
// ================================================================================================

/// One hit from the Discogs database search.
///
/// This is the summary form of a release as returned by a single search
/// page. It carries enough information to display the release and to fetch
/// its full detail by id, but no rating — ratings are only available from
/// the per-release endpoint.
///
/// # Examples
///
/// ```rust
/// use discogs_top_rated::ResultSummary;
///
/// let summary = ResultSummary {
///     id: 249504,
///     title: "Selected Ambient Works 85-92".to_string(),
///     artist: "Aphex Twin".to_string(),
///     country: Some("UK".to_string()),
///     year: Some("1992".to_string()),
///     has_video: false,
///     thumbnail_url: None,
/// };
///
/// println!("{} by {}", summary.title, summary.artist);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Discogs release id
    pub id: u64,
    /// The release title
    pub title: String,
    /// The artist name
    ///
    /// Discogs search results encode this inside the title field as
    /// `"Artist - Title"`; the parser splits the two apart.
    pub artist: String,
    /// Country of release, if reported
    pub country: Option<String>,
    /// Year of release, if reported
    ///
    /// Kept as a string because the API reports it that way in search
    /// results ("1992", sometimes empty).
    pub year: Option<String>,
    /// Whether the release has attached videos
    ///
    /// Search results rarely carry this; the pipeline also folds in the
    /// video count from the release detail before filtering.
    pub has_video: bool,
    /// Thumbnail image URL, if any
    pub thumbnail_url: Option<String>,
}

/// One page of search results.
///
/// Returned by [`DiscogsClient::search_page`](crate::DiscogsClient::search_page)
/// and consumed by [`SearchResultsIterator`](crate::SearchResultsIterator).
/// The total counts come from the API's pagination block; the first page's
/// `total_results` is the figure reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// The result summaries on this page
    pub results: Vec<ResultSummary>,
    /// Current page number (1-indexed)
    pub page_number: u32,
    /// Whether there are more pages available
    pub has_next_page: bool,
    /// Total number of results across all pages
    pub total_results: u64,
    /// Total number of pages
    pub total_pages: u32,
}

// ================================================================================================
// RELEASE DETAIL AND RATING
// ================================================================================================

/// Community rating detail for a single release.
///
/// Fetched lazily, one release at a time, from the release endpoint. A
/// release with no community rating decodes with `community_rating` of 0.0
/// rather than failing, so a missing rating never aborts a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDetail {
    /// Discogs release id
    pub id: u64,
    /// Average community rating, 0.0–5.0 (0.0 when absent)
    pub community_rating: f64,
    /// Number of ratings behind the average
    pub rating_count: u32,
    /// Number of videos attached to the release
    pub video_count: u32,
}

/// A release that passed the rating filter.
///
/// Summary fields plus the rating that qualified it. Instances are emitted
/// in search-result order; no re-sorting happens anywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingRelease {
    /// Discogs release id
    pub id: u64,
    /// The release title
    pub title: String,
    /// The artist name
    pub artist: String,
    /// Country of release, if reported
    pub country: Option<String>,
    /// Year of release, if reported
    pub year: Option<String>,
    /// The community rating that cleared the threshold
    pub rating: f64,
}

impl QualifyingRelease {
    /// Build a qualifying release from a summary and the rating that let it
    /// through the filter.
    pub fn from_summary(summary: ResultSummary, rating: f64) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            artist: summary.artist,
            country: summary.country,
            year: summary.year,
            rating,
        }
    }
}

/// The outcome of a full top-rated search run.
///
/// `total_results` is the count the API reported on the first search page;
/// `releases` holds only the hits that cleared the rating threshold, in
/// search-result order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Total number of search results before filtering
    pub total_results: u64,
    /// The qualifying releases, in search-result order
    pub releases: Vec<QualifyingRelease>,
}

// ================================================================================================
// IDENTITY AND COLLECTION (styles maintenance)
// ================================================================================================

/// The authenticated user's identity, from `/oauth/identity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Discogs username
    pub username: String,
}

/// One release in the user's collection, reduced to the fields the styles
/// maintenance mode needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Style names from the release's basic information
    pub styles: Vec<String>,
}

/// One page of the user's collection folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPage {
    /// The collection items on this page
    pub items: Vec<CollectionItem>,
    /// Current page number (1-indexed)
    pub page_number: u32,
    /// Whether there are more pages available
    pub has_next_page: bool,
}
