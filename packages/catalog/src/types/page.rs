use listings_client::{ListingsRequest, SortOption};
use serde::{Deserialize, Serialize};

use super::facet::FacetGroup;
use super::item::ListingItem;
use super::selection::FacetSelection;

/// One page request, in domain terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub query: String,
    /// 1-based
    pub page_number: u32,
    pub page_size: u32,
    pub sort: SortOption,
    pub facets: FacetSelection,
}

impl PageRequest {
    pub fn to_wire(&self) -> ListingsRequest {
        ListingsRequest {
            query: self.query.clone(),
            page_number: self.page_number,
            size: self.page_size,
            additional_pages: None,
            sort: self.sort,
            facets: self.facets.to_wire(),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<ListingItem>,
    pub total_results: u64,
    /// `None` when the backend omitted facets entirely
    pub facet_groups: Option<Vec<FacetGroup>>,
}

impl ListingPage {
    pub fn new(items: Vec<ListingItem>, total_results: u64) -> Self {
        Self {
            items,
            total_results,
            facet_groups: None,
        }
    }

    pub fn with_facets(mut self, groups: Vec<FacetGroup>) -> Self {
        self.facet_groups = Some(groups);
        self
    }
}
