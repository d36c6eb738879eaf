#![allow(dead_code)]
use async_trait::async_trait;
use discogs_top_rated::{
    CollectionItem, CollectionPage, DiscogsClient, DiscogsError, Identity, ReleaseDetail, Result,
    ResultSummary, SearchCriteria, SearchPage,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory [`DiscogsClient`] for deterministic pipeline tests.
///
/// Search results are served from pre-arranged pages, release details from
/// a map keyed by id. Every call is recorded in `calls` so tests can assert
/// on ordering (e.g. that all pages are fetched before any detail).
pub struct FakeDiscogsClient {
    pages: Vec<Vec<ResultSummary>>,
    total_results: u64,
    details: HashMap<u64, ReleaseDetail>,
    collection: Vec<Vec<CollectionItem>>,
    username: String,
    fail_search_on_page: Option<u32>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeDiscogsClient {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            total_results: 0,
            details: HashMap::new(),
            collection: vec![Vec::new()],
            username: "testuser".to_string(),
            fail_search_on_page: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_pages(mut self, pages: Vec<Vec<ResultSummary>>) -> Self {
        self.total_results = pages.iter().map(|p| p.len() as u64).sum();
        self.pages = pages;
        self
    }

    /// Override the total the API reports, independent of the page contents.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total_results = total;
        self
    }

    pub fn with_rating(mut self, id: u64, rating: f64, count: u32) -> Self {
        self.details.insert(
            id,
            ReleaseDetail {
                id,
                community_rating: rating,
                rating_count: count,
                video_count: 0,
            },
        );
        self
    }

    pub fn with_detail(mut self, detail: ReleaseDetail) -> Self {
        self.details.insert(detail.id, detail);
        self
    }

    pub fn with_collection(mut self, collection: Vec<Vec<CollectionItem>>) -> Self {
        self.collection = collection;
        self
    }

    pub fn failing_search_on_page(mut self, page: u32) -> Self {
        self.fail_search_on_page = Some(page);
        self
    }

    /// Indices (in call order) of search and release calls.
    pub fn call_kinds(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.split(':').next().unwrap().to_string())
            .collect()
    }
}

#[async_trait(?Send)]
impl DiscogsClient for FakeDiscogsClient {
    async fn search_page(&self, _criteria: &SearchCriteria, page: u32) -> Result<SearchPage> {
        self.calls.borrow_mut().push(format!("search:{page}"));
        if self.fail_search_on_page == Some(page) {
            return Err(DiscogsError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        let index = page.saturating_sub(1) as usize;
        let results = self
            .pages
            .get(index)
            .cloned()
            .ok_or_else(|| DiscogsError::Api {
                status: 404,
                message: format!("page {page} out of range"),
            })?;
        Ok(SearchPage {
            results,
            page_number: page,
            has_next_page: index + 1 < self.pages.len(),
            total_results: self.total_results,
            total_pages: self.pages.len() as u32,
        })
    }

    async fn get_release(&self, release_id: u64) -> Result<ReleaseDetail> {
        self.calls.borrow_mut().push(format!("release:{release_id}"));
        self.details
            .get(&release_id)
            .cloned()
            .ok_or_else(|| DiscogsError::Api {
                status: 404,
                message: format!("release {release_id} not found"),
            })
    }

    async fn identity(&self) -> Result<Identity> {
        self.calls.borrow_mut().push("identity".to_string());
        Ok(Identity {
            username: self.username.clone(),
        })
    }

    async fn collection_page(&self, _username: &str, page: u32) -> Result<CollectionPage> {
        self.calls.borrow_mut().push(format!("collection:{page}"));
        let index = page.saturating_sub(1) as usize;
        let items = self
            .collection
            .get(index)
            .cloned()
            .ok_or_else(|| DiscogsError::Api {
                status: 404,
                message: format!("collection page {page} out of range"),
            })?;
        Ok(CollectionPage {
            items,
            page_number: page,
            has_next_page: index + 1 < self.collection.len(),
        })
    }
}

pub fn summary(id: u64) -> ResultSummary {
    ResultSummary {
        id,
        title: format!("Title {id}"),
        artist: format!("Artist {id}"),
        country: Some("UK".to_string()),
        year: Some("1992".to_string()),
        has_video: false,
        thumbnail_url: None,
    }
}

pub fn summary_with_video(id: u64) -> ResultSummary {
    ResultSummary {
        has_video: true,
        ..summary(id)
    }
}
