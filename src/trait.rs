use crate::{CollectionPage, Identity, ReleaseDetail, Result, SearchCriteria, SearchPage};
use async_trait::async_trait;

/// Trait for Discogs API operations that can be mocked for testing.
///
/// This trait abstracts the upstream API behind the handful of operations
/// the pipeline needs, so the paginator, detail fetcher, and filter can be
/// exercised against a fake in-memory implementation with no network.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockDiscogsClient` that implements this trait using the `mockall`
/// library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait DiscogsClient {
    /// Fetch one page of database search results for the given criteria.
    ///
    /// Page numbers are 1-indexed. The returned page reports whether more
    /// pages follow and the total result count across all pages.
    async fn search_page(&self, criteria: &SearchCriteria, page: u32) -> Result<SearchPage>;

    /// Fetch the full detail (community rating) for a single release.
    ///
    /// A release without community rating data yields a detail with
    /// `community_rating` of 0.0; absence of a rating is not an error.
    async fn get_release(&self, release_id: u64) -> Result<ReleaseDetail>;

    /// Fetch the authenticated user's identity.
    ///
    /// Used by the styles maintenance mode to locate the user's collection.
    async fn identity(&self) -> Result<Identity>;

    /// Fetch one page of the user's collection folder 0.
    ///
    /// Page numbers are 1-indexed. Used by the styles maintenance mode to
    /// enumerate style names across the collection.
    async fn collection_page(&self, username: &str, page: u32) -> Result<CollectionPage>;
}
