//! Search criteria construction and validation.
//!
//! The query builder maps recognized filter options onto Discogs search
//! parameters. Unrecognized option keys are rejected up front with a
//! configuration error, before any network traffic.

use crate::{DiscogsError, Result};

/// The search option keys Discogs' `/database/search` endpoint accepts.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "query",
    "type",
    "title",
    "release_title",
    "credit",
    "artist",
    "anv",
    "label",
    "genre",
    "style",
    "country",
    "year",
    "format",
    "catno",
    "barcode",
    "track",
    "submitter",
    "contributor",
];

/// Default minimum community rating a release must reach.
pub const DEFAULT_MIN_RATING: f64 = 4.0;

/// A validated, immutable set of search filters plus the two local controls
/// (`min_rating`, `no_videos`) the API itself does not understand.
///
/// Built once via [`SearchCriteria::builder`] and then consumed by the
/// paginator; filters keep their insertion order when turned into request
/// parameters. Year ranges (`"1990-1995"`) pass through to the API
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use discogs_top_rated::SearchCriteria;
///
/// let criteria = SearchCriteria::builder()
///     .filter("style", "ambient")?
///     .filter("country", "UK")?
///     .filter("year", "1990-1995")?
///     .min_rating(4.5)
///     .build();
///
/// assert_eq!(criteria.min_rating(), 4.5);
/// # Ok::<(), discogs_top_rated::DiscogsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    filters: Vec<(String, String)>,
    min_rating: f64,
    no_videos: bool,
}

impl SearchCriteria {
    /// Start building criteria.
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// The configured minimum community rating.
    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Whether releases with videos are excluded.
    pub fn no_videos(&self) -> bool {
        self.no_videos
    }

    /// The request parameters for one search call, in insertion order.
    ///
    /// The free-text `query` option is renamed to the `q` parameter the API
    /// expects; every other key maps to a parameter of the same name.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(key, value)| (param_name(key), value.as_str()))
    }

    /// Whether any search filter was set at all.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

fn param_name(key: &str) -> &str {
    match key {
        "query" => "q",
        other => other,
    }
}

/// Builder for [`SearchCriteria`].
#[derive(Debug, Clone)]
pub struct SearchCriteriaBuilder {
    filters: Vec<(String, String)>,
    min_rating: f64,
    no_videos: bool,
}

impl SearchCriteriaBuilder {
    fn new() -> Self {
        Self {
            filters: Vec::new(),
            min_rating: DEFAULT_MIN_RATING,
            no_videos: false,
        }
    }

    /// Add a search filter.
    ///
    /// Returns [`DiscogsError::Config`] when `key` is not one of
    /// [`RECOGNIZED_KEYS`]. Values are passed to the API verbatim.
    pub fn filter(mut self, key: &str, value: &str) -> Result<Self> {
        if !RECOGNIZED_KEYS.contains(&key) {
            return Err(DiscogsError::Config(format!(
                "unrecognized search option '{key}'"
            )));
        }
        self.filters.push((key.to_string(), value.to_string()));
        Ok(self)
    }

    /// Set the minimum community rating (default 4.0).
    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Exclude releases that have videos attached (default false).
    pub fn no_videos(mut self, no_videos: bool) -> Self {
        self.no_videos = no_videos;
        self
    }

    /// Finish building.
    pub fn build(self) -> SearchCriteria {
        SearchCriteria {
            filters: self.filters,
            min_rating: self.min_rating,
            no_videos: self.no_videos,
        }
    }
}

impl Default for SearchCriteriaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
