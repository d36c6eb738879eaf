//! JSON parsing for Discogs API responses.
//!
//! This module converts the wire format of the search, release, identity,
//! and collection endpoints into the crate's domain types. All parsing is
//! deliberately forgiving about rating data: a release whose community
//! block is missing or malformed decodes with a rating of 0.0 instead of
//! failing, because the API omits ratings routinely.

use crate::types::{CollectionItem, CollectionPage, Identity, ReleaseDetail, ResultSummary, SearchPage};
use crate::{DiscogsError, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct WirePagination {
    page: u32,
    pages: u32,
    items: u64,
}

#[derive(Debug, Deserialize)]
struct WireSearchResponse {
    pagination: WirePagination,
    results: Vec<WireSearchResult>,
}

#[derive(Debug, Deserialize)]
struct WireSearchResult {
    id: u64,
    title: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    master_id: Option<u64>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    thumb: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireReleaseDetail {
    id: u64,
    #[serde(default)]
    community: Value,
    #[serde(default)]
    videos: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct WireIdentity {
    username: String,
}

#[derive(Debug, Deserialize)]
struct WireCollectionResponse {
    pagination: WirePagination,
    releases: Vec<WireCollectionRelease>,
}

#[derive(Debug, Deserialize)]
struct WireCollectionRelease {
    basic_information: WireBasicInformation,
}

#[derive(Debug, Deserialize)]
struct WireBasicInformation {
    #[serde(default)]
    styles: Vec<String>,
}

/// Parse one page of `/database/search` results.
///
/// Master entries are dropped here: they aggregate multiple pressings and
/// carry no community rating of their own, so rating them is meaningless.
/// A hit is a master when its `type` says so or when its id equals its own
/// `master_id`.
pub fn parse_search_page(body: &str) -> Result<SearchPage> {
    let response: WireSearchResponse =
        serde_json::from_str(body).map_err(|e| DiscogsError::Parse(e.to_string()))?;

    let results = response
        .results
        .into_iter()
        .filter(|result| !is_master(result))
        .map(into_summary)
        .collect();

    Ok(SearchPage {
        results,
        page_number: response.pagination.page,
        has_next_page: response.pagination.page < response.pagination.pages,
        total_results: response.pagination.items,
        total_pages: response.pagination.pages,
    })
}

fn is_master(result: &WireSearchResult) -> bool {
    result.kind.as_deref() == Some("master") || result.master_id == Some(result.id)
}

fn into_summary(result: WireSearchResult) -> ResultSummary {
    let (artist, title) = split_artist_title(&result.title);
    ResultSummary {
        id: result.id,
        title,
        artist,
        country: result.country.filter(|c| !c.is_empty()),
        year: result.year.filter(|y| !y.is_empty()),
        has_video: false,
        thumbnail_url: result.thumb.filter(|t| !t.is_empty()),
    }
}

/// Split a combined `"Artist - Title"` search result title.
///
/// Search results encode the artist inside the title field. When no
/// separator is present the whole string is treated as the title and the
/// artist is left empty.
pub fn split_artist_title(combined: &str) -> (String, String) {
    match combined.split_once(" - ") {
        Some((artist, title)) => (artist.trim().to_string(), title.trim().to_string()),
        None => (String::new(), combined.trim().to_string()),
    }
}

/// Parse a `/releases/{id}` response into a [`ReleaseDetail`].
///
/// The community rating is extracted defensively: a missing community
/// block, a missing rating, or a rating of the wrong JSON type all decode
/// as 0.0 with an informational log line, never as an error.
pub fn parse_release_detail(body: &str) -> Result<ReleaseDetail> {
    let detail: WireReleaseDetail =
        serde_json::from_str(body).map_err(|e| DiscogsError::Parse(e.to_string()))?;

    let rating_count = detail
        .community
        .pointer("/rating/count")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    let community_rating = match detail
        .community
        .pointer("/rating/average")
        .and_then(Value::as_f64)
    {
        Some(average) => average,
        None => {
            log::info!(
                "release {} has no community rating, treating as 0.0",
                detail.id
            );
            0.0
        }
    };

    Ok(ReleaseDetail {
        id: detail.id,
        community_rating,
        rating_count,
        video_count: detail.videos.len() as u32,
    })
}

/// Parse an `/oauth/identity` response.
pub fn parse_identity(body: &str) -> Result<Identity> {
    let identity: WireIdentity =
        serde_json::from_str(body).map_err(|e| DiscogsError::Parse(e.to_string()))?;
    Ok(Identity {
        username: identity.username,
    })
}

/// Parse one page of a collection folder listing.
pub fn parse_collection_page(body: &str) -> Result<CollectionPage> {
    let response: WireCollectionResponse =
        serde_json::from_str(body).map_err(|e| DiscogsError::Parse(e.to_string()))?;

    let items = response
        .releases
        .into_iter()
        .map(|release| CollectionItem {
            styles: release.basic_information.styles,
        })
        .collect();

    Ok(CollectionPage {
        items,
        page_number: response.pagination.page,
        has_next_page: response.pagination.page < response.pagination.pages,
    })
}
