//! Listing synchronization engine.
//!
//! Owns the pagination cursor, sort, facet selection and the accumulated item
//! list for one browsing session. Every state change happens synchronously;
//! the only suspension point is the [`ListingSource`] call, which the engine
//! never holds a borrow across when driven through the two-phase API:
//!
//! ```rust,ignore
//! let pending = engine.begin_sort_change(SortOption::PriceLowToHigh);
//! let result = source.fetch(pending.request()).await;
//! engine.apply(pending, result);
//! ```
//!
//! Each issued request is tagged with an increasing generation. A response is
//! applied only if its generation is the latest one issued; anything older is
//! discarded without touching visible state.

use listings_client::SortOption;
use serde::Serialize;

use crate::error::{ConfigError, SourceError, SourceResult};
use crate::facets::FacetCatalog;
use crate::traits::source::ListingSource;
use crate::types::config::BrowseConfig;
use crate::types::facet::{FacetGroup, FacetValue};
use crate::types::item::ListingItem;
use crate::types::page::{ListingPage, PageRequest};
use crate::types::selection::{FacetSelection, SelectedFacet};

/// A request issued by the engine and not yet applied.
#[derive(Debug, Clone)]
#[must_use = "a pending load must be fetched and applied"]
pub struct PendingLoad {
    generation: u64,
    reset: bool,
    request: PageRequest,
}

impl PendingLoad {
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a successful response replaces the list instead of extending it.
    pub fn is_reset(&self) -> bool {
        self.reset
    }
}

/// What [`ListingsEngine::apply`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response merged into state
    Applied,
    /// Error recorded; accumulated list untouched
    Failed,
    /// A newer request was issued since; response discarded
    Stale,
    /// Nothing was requested (already loading or nothing more to load)
    Skipped,
}

/// UI-facing state of the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ListingsView {
    pub items: Vec<ListingItem>,
    pub total_results: u64,
    pub has_more: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub sort: SortOption,
    pub selected_facets: FacetSelection,
    pub facet_catalog: Vec<FacetGroup>,
}

#[derive(Debug)]
pub struct ListingsEngine {
    query: String,
    page_size: u32,
    items: Vec<ListingItem>,
    total_results: u64,
    next_page: u32,
    sort: SortOption,
    selection: FacetSelection,
    catalog: FacetCatalog,
    is_loading: bool,
    error: Option<SourceError>,
    generation: u64,
    /// The visible list does not belong to the current sort/filters
    /// (nothing loaded yet, or the last reset failed).
    needs_reset: bool,
}

impl ListingsEngine {
    pub fn new(config: BrowseConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            query: config.query,
            page_size: config.page_size,
            items: Vec::new(),
            total_results: 0,
            next_page: 1,
            sort: config.initial_sort,
            selection: FacetSelection::new(),
            catalog: FacetCatalog::new(),
            is_loading: false,
            error: None,
            generation: 0,
            needs_reset: true,
        })
    }

    // ------------------------------------------------------------------
    // Intents: phase one
    // ------------------------------------------------------------------

    /// Load page 1 with the current sort and filters (initial load, retry).
    pub fn begin_refresh(&mut self) -> PendingLoad {
        self.begin_reset()
    }

    pub fn begin_sort_change(&mut self, sort: SortOption) -> PendingLoad {
        self.sort = sort;
        self.begin_reset()
    }

    /// Replace the selection for one group. Empty `values` clears that filter.
    pub fn begin_facet_change(
        &mut self,
        group_id: impl Into<String>,
        values: Vec<SelectedFacet>,
    ) -> PendingLoad {
        self.selection.set(group_id, values);
        self.begin_reset()
    }

    /// Flip a single option in a group.
    pub fn begin_toggle_facet(
        &mut self,
        group_id: &str,
        option_id: &str,
        value: FacetValue,
    ) -> PendingLoad {
        let values = self.selection.toggled(group_id, option_id, value);
        self.begin_facet_change(group_id, values)
    }

    /// Request the next page, or `None` if already loading or nothing is left.
    ///
    /// After a failed reset the list on screen belongs to the previous
    /// sort/filters, so the reset is reissued instead of appending to it.
    pub fn begin_load_more(&mut self) -> Option<PendingLoad> {
        if self.is_loading {
            return None;
        }
        if self.needs_reset {
            return Some(self.begin_reset());
        }
        if !self.has_more() {
            return None;
        }
        Some(self.issue(false))
    }

    fn begin_reset(&mut self) -> PendingLoad {
        self.next_page = 1;
        self.needs_reset = true;
        self.issue(true)
    }

    fn issue(&mut self, reset: bool) -> PendingLoad {
        self.generation += 1;
        self.is_loading = true;

        let request = PageRequest {
            query: self.query.clone(),
            page_number: if reset { 1 } else { self.next_page },
            page_size: self.page_size,
            sort: self.sort,
            facets: self.selection.clone(),
        };

        tracing::debug!(
            generation = self.generation,
            page = request.page_number,
            reset,
            sort = %self.sort,
            facet_groups = self.selection.len(),
            "Issuing listings request"
        );

        PendingLoad {
            generation: self.generation,
            reset,
            request,
        }
    }

    // ------------------------------------------------------------------
    // Phase two
    // ------------------------------------------------------------------

    /// Merge the result of a pending load.
    pub fn apply(&mut self, pending: PendingLoad, result: SourceResult<ListingPage>) -> LoadOutcome {
        if pending.generation != self.generation {
            tracing::debug!(
                generation = pending.generation,
                latest = self.generation,
                "Discarding stale listings response"
            );
            return LoadOutcome::Stale;
        }

        self.is_loading = false;

        match result {
            Ok(page) => {
                let received = page.items.len();
                if pending.reset {
                    self.items = page.items;
                    self.needs_reset = false;
                } else {
                    self.items.extend(page.items);
                }
                self.next_page = pending.request.page_number + 1;
                self.total_results = page.total_results;
                if let Some(groups) = page.facet_groups {
                    self.catalog.merge(groups);
                }
                self.error = None;

                tracing::debug!(
                    generation = pending.generation,
                    received,
                    accumulated = self.items.len(),
                    total = self.total_results,
                    "Applied listings page"
                );
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(
                    generation = pending.generation,
                    page = pending.request.page_number,
                    reset = pending.reset,
                    error = %err,
                    "Failed to load listings"
                );
                self.error = Some(err);
                LoadOutcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------
    // Drivers: begin, fetch, apply
    // ------------------------------------------------------------------

    pub async fn refresh<S: ListingSource + ?Sized>(&mut self, source: &S) -> LoadOutcome {
        let pending = self.begin_refresh();
        self.run(source, pending).await
    }

    pub async fn change_sort<S: ListingSource + ?Sized>(
        &mut self,
        source: &S,
        sort: SortOption,
    ) -> LoadOutcome {
        let pending = self.begin_sort_change(sort);
        self.run(source, pending).await
    }

    pub async fn change_facet_selection<S: ListingSource + ?Sized>(
        &mut self,
        source: &S,
        group_id: &str,
        values: Vec<SelectedFacet>,
    ) -> LoadOutcome {
        let pending = self.begin_facet_change(group_id, values);
        self.run(source, pending).await
    }

    pub async fn toggle_facet_option<S: ListingSource + ?Sized>(
        &mut self,
        source: &S,
        group_id: &str,
        option_id: &str,
        value: FacetValue,
    ) -> LoadOutcome {
        let pending = self.begin_toggle_facet(group_id, option_id, value);
        self.run(source, pending).await
    }

    pub async fn load_more<S: ListingSource + ?Sized>(&mut self, source: &S) -> LoadOutcome {
        match self.begin_load_more() {
            Some(pending) => self.run(source, pending).await,
            None => LoadOutcome::Skipped,
        }
    }

    async fn run<S: ListingSource + ?Sized>(&mut self, source: &S, pending: PendingLoad) -> LoadOutcome {
        tracing::debug!(
            source = source.name(),
            generation = pending.generation,
            page = pending.request.page_number,
            "Fetching listings page"
        );
        let result = source.fetch(pending.request()).await;
        self.apply(pending, result)
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[ListingItem] {
        &self.items
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn has_more(&self) -> bool {
        (self.items.len() as u64) < self.total_results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(SourceError::user_message)
    }

    pub fn last_error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn selected_facets(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn facet_catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page number the next append will request.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> ListingsView {
        ListingsView {
            items: self.items.clone(),
            total_results: self.total_results,
            has_more: self.has_more(),
            is_loading: self.is_loading,
            error_message: self.error_message().map(str::to_string),
            sort: self.sort,
            selected_facets: self.selection.clone(),
            facet_catalog: self.catalog.groups().cloned().collect(),
        }
    }
}
