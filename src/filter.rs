//! The rating filter.
//!
//! Pure functions: no I/O, no side effects, and the input order is the
//! output order.

use crate::types::{QualifyingRelease, ReleaseDetail, ResultSummary};

/// Decide whether one (summary, detail) pair clears the filter.
///
/// A pair qualifies when the community rating is at or above `min_rating`
/// and, if `no_videos` is set, the release has no videos attached. A
/// missing rating was already decoded as 0.0, so it never clears a
/// positive threshold.
pub fn qualifies(
    summary: &ResultSummary,
    detail: &ReleaseDetail,
    min_rating: f64,
    no_videos: bool,
) -> bool {
    if no_videos && summary.has_video {
        return false;
    }
    detail.community_rating >= min_rating
}

/// Filter (summary, detail) pairs down to the qualifying releases.
///
/// Order-preserving: the output sequence is the input sequence minus the
/// pairs that failed the predicate.
pub fn filter_releases<I>(pairs: I, min_rating: f64, no_videos: bool) -> Vec<QualifyingRelease>
where
    I: IntoIterator<Item = (ResultSummary, ReleaseDetail)>,
{
    pairs
        .into_iter()
        .filter(|(summary, detail)| qualifies(summary, detail, min_rating, no_videos))
        .map(|(summary, detail)| QualifyingRelease::from_summary(summary, detail.community_rating))
        .collect()
}
