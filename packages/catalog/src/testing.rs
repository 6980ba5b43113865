//! Mock listing sources for testing.
//!
//! Useful for exercising the browsing engine without network calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{SourceError, SourceResult};
use crate::traits::source::ListingSource;
use crate::types::facet::FacetGroup;
use crate::types::item::ListingItem;
use crate::types::page::{ListingPage, PageRequest};

/// Source that replays scripted responses in order.
///
/// Once the script runs out every fetch fails with a transport error.
#[derive(Default)]
pub struct MockListingSource {
    responses: Arc<RwLock<VecDeque<SourceResult<ListingPage>>>>,
    requests: Arc<RwLock<Vec<PageRequest>>>,
}

impl MockListingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: ListingPage) {
        self.responses.write().unwrap().push_back(Ok(page));
    }

    pub fn push_error(&self, error: SourceError) {
        self.responses.write().unwrap().push_back(Err(error));
    }

    pub fn with_page(self, page: ListingPage) -> Self {
        self.push_page(page);
        self
    }

    pub fn with_error(self, error: SourceError) -> Self {
        self.push_error(error);
        self
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn last_request(&self) -> Option<PageRequest> {
        self.requests.read().unwrap().last().cloned()
    }
}

impl Clone for MockListingSource {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch(&self, request: &PageRequest) -> SourceResult<ListingPage> {
        self.requests.write().unwrap().push(request.clone());

        self.responses
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Transport("no scripted response".into())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Source that pages through a synthetic catalog of `total` items.
///
/// Item ids encode the sort code and position (`item-{sort}-{index}`), so a
/// sort change yields a visibly different first page.
#[derive(Default)]
pub struct PagedListingSource {
    total: u64,
    facets: Option<Vec<FacetGroup>>,
    failures: Arc<RwLock<usize>>,
    requests: Arc<RwLock<Vec<PageRequest>>>,
}

impl PagedListingSource {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Facet groups attached to every page.
    pub fn with_facets(mut self, groups: Vec<FacetGroup>) -> Self {
        self.facets = Some(groups);
        self
    }

    /// Make the next fetch fail with a transport error.
    pub fn fail_next(&self) {
        *self.failures.write().unwrap() += 1;
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn item_id(sort_code: u8, index: u64) -> String {
        format!("item-{}-{}", sort_code, index)
    }

    /// The page this source serves for `request`, without recording it.
    pub fn page_for(&self, request: &PageRequest) -> ListingPage {
        let size = u64::from(request.page_size);
        let start = u64::from(request.page_number.saturating_sub(1)) * size;
        let end = (start + size).min(self.total);

        let items = (start..end)
            .map(|i| {
                ListingItem::new(
                    Self::item_id(request.sort.code(), i),
                    format!("Product {}", i),
                    100.0,
                    Some(120.0),
                )
            })
            .collect();

        ListingPage {
            items,
            total_results: self.total,
            facet_groups: self.facets.clone(),
        }
    }
}

#[async_trait]
impl ListingSource for PagedListingSource {
    async fn fetch(&self, request: &PageRequest) -> SourceResult<ListingPage> {
        self.requests.write().unwrap().push(request.clone());

        {
            let mut failures = self.failures.write().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(SourceError::Transport("injected failure".into()));
            }
        }

        Ok(self.page_for(request))
    }

    fn name(&self) -> &str {
        "paged"
    }
}
