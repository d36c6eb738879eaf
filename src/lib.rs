pub mod client;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod iterator;
pub mod parsing;
pub mod pipeline;
pub mod report;
pub mod styles;
pub mod r#trait;
pub mod types;

pub use client::DiscogsHttpClient;
pub use criteria::{SearchCriteria, SearchCriteriaBuilder, DEFAULT_MIN_RATING};
pub use error::DiscogsError;
pub use filter::{filter_releases, qualifies};
pub use iterator::{AsyncPaginatedIterator, SearchResultsIterator};
pub use pipeline::TopRatedSearch;
pub use report::{release_url, render_report, slugify};
pub use r#trait::DiscogsClient;
pub use types::{
    CollectionItem, CollectionPage, Identity, QualifyingRelease, ReleaseDetail, ResultSummary,
    SearchPage, SearchReport,
};

#[cfg(feature = "mock")]
pub use r#trait::MockDiscogsClient;

pub type Result<T> = std::result::Result<T, DiscogsError>;
