use crate::r#trait::DiscogsClient;
use crate::{Result, ResultSummary, SearchCriteria, SearchPage};

use async_trait::async_trait;

/// Async iterator trait for paginated Discogs data.
///
/// This trait provides a common interface for iterating over paginated data
/// from Discogs. Iterators fetch pages lazily and are finite and
/// non-restartable: once exhausted they keep returning `None`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// This method automatically handles pagination, fetching new pages as needed.
    /// Returns `None` when there are no more items available.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` - Next item in the sequence
    /// - `Ok(None)` - No more items available
    /// - `Err(...)` - Network or parsing error occurred
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// This fetches every remaining page. Any page failure aborts the whole
    /// collection; no partial accumulation is returned.
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to n items from the iterator.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of items to collect
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Get the current page number (0-indexed).
    ///
    /// Returns the page number of the most recently fetched page.
    fn current_page(&self) -> u32;

    /// Get the total number of pages, if known.
    ///
    /// Returns `Some(n)` if the total page count is known, `None` otherwise.
    /// This information may not be available until at least one page has been fetched.
    fn total_pages(&self) -> Option<u32> {
        None // Default implementation returns None
    }
}

/// Iterator over database search results.
///
/// Issues repeated search requests, one page at a time, until the API
/// signals the last page. Summaries come out in the exact order the API
/// returned them. The total result count reported by the *first* page is
/// kept and exposed via [`total_results`](Self::total_results) so the
/// report can quote it even after later pages arrive.
pub struct SearchResultsIterator<'a, C: DiscogsClient> {
    client: &'a C,
    criteria: &'a SearchCriteria,
    current_page: u32,
    has_more: bool,
    buffer: Vec<ResultSummary>,
    total_pages: Option<u32>,
    total_results: Option<u64>,
}

#[async_trait(?Send)]
impl<'a, C: DiscogsClient> AsyncPaginatedIterator<ResultSummary>
    for SearchResultsIterator<'a, C>
{
    async fn next(&mut self) -> Result<Option<ResultSummary>> {
        // If buffer is empty, try to load next page
        while self.buffer.is_empty() {
            match self.next_page().await? {
                Some(page) => {
                    self.buffer = page.results;
                    self.buffer.reverse(); // Reverse so we can pop from end efficiently
                }
                None => return Ok(None),
            }
        }

        Ok(self.buffer.pop())
    }

    fn current_page(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}

impl<'a, C: DiscogsClient> SearchResultsIterator<'a, C> {
    /// Create a new search results iterator starting at page 1.
    pub fn new(client: &'a C, criteria: &'a SearchCriteria) -> Self {
        Self {
            client,
            criteria,
            current_page: 1,
            has_more: true,
            buffer: Vec::new(),
            total_pages: None,
            total_results: None,
        }
    }

    /// Fetch the next page of search results.
    pub async fn next_page(&mut self) -> Result<Option<SearchPage>> {
        if !self.has_more {
            return Ok(None);
        }

        log::debug!("Fetching search results page {}", self.current_page);
        let page = self
            .client
            .search_page(self.criteria, self.current_page)
            .await?;

        self.has_more = page.has_next_page;
        self.current_page += 1;
        self.total_pages = Some(page.total_pages);
        if self.total_results.is_none() {
            // The first page's figure is the one quoted in the report
            self.total_results = Some(page.total_results);
        }

        Ok(Some(page))
    }

    /// The total result count reported by the first page.
    ///
    /// Returns `None` until at least one page has been fetched.
    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }
}
