//! The top-rated search pipeline.
//!
//! One linear pass: accumulate every search result, fetch each release's
//! rating detail strictly sequentially, filter, and hand back a report.
//! There is no retry and no branching beyond the filter predicate; a
//! failed fetch aborts the run with no partial output.

use crate::filter;
use crate::iterator::{AsyncPaginatedIterator, SearchResultsIterator};
use crate::r#trait::DiscogsClient;
use crate::types::{QualifyingRelease, SearchReport};
use crate::{Result, SearchCriteria};

/// Pipeline driver: search, enrich with ratings, filter.
///
/// Owns the client for its whole lifetime; nothing else touches the
/// connection while a run is in flight, so detail fetches stay strictly
/// sequential.
///
/// # Examples
///
/// ```rust,no_run
/// use discogs_top_rated::{DiscogsHttpClient, SearchCriteria, TopRatedSearch};
///
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let client = DiscogsHttpClient::new(Box::new(http_client), "token".to_string());
///
/// let criteria = SearchCriteria::builder()
///     .filter("style", "ambient")?
///     .filter("year", "1990-1995")?
///     .min_rating(4.5)
///     .build();
///
/// let report = TopRatedSearch::new(client).run(&criteria).await?;
/// println!("{} of {} qualify", report.releases.len(), report.total_results);
/// # Ok::<(), discogs_top_rated::DiscogsError>(())
/// # }).unwrap();
/// ```
pub struct TopRatedSearch<C: DiscogsClient> {
    client: C,
}

impl<C: DiscogsClient> TopRatedSearch<C> {
    /// Create a pipeline over the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run the full pipeline for one set of criteria.
    ///
    /// All pages are accumulated before the first detail fetch, so the
    /// reported total reflects the complete search. Details are fetched one
    /// at a time, in search-result order, and the output preserves that
    /// order.
    pub async fn run(&self, criteria: &SearchCriteria) -> Result<SearchReport> {
        let mut results = SearchResultsIterator::new(&self.client, criteria);
        let summaries = results.collect_all().await?;
        let total_results = results.total_results().unwrap_or(summaries.len() as u64);

        log::info!(
            "accumulated {} search results ({} reported by the API), fetching ratings",
            summaries.len(),
            total_results
        );

        let mut releases: Vec<QualifyingRelease> = Vec::new();
        for mut summary in summaries {
            let detail = self.client.get_release(summary.id).await?;
            // Search results rarely carry video info; the detail is authoritative.
            summary.has_video = summary.has_video || detail.video_count > 0;

            if filter::qualifies(&summary, &detail, criteria.min_rating(), criteria.no_videos()) {
                log::debug!(
                    "keeping release {} ('{}' rated {})",
                    summary.id,
                    summary.title,
                    detail.community_rating
                );
                releases.push(QualifyingRelease::from_summary(
                    summary,
                    detail.community_rating,
                ));
            }
        }

        Ok(SearchReport {
            total_results,
            releases,
        })
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }
}
