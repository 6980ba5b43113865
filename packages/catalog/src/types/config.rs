//! Configuration for a browsing session.

use listings_client::SortOption;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Fixed parameters of one browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Free-text query, fixed for the session.
    pub query: String,

    /// Items requested per page. Default: 24.
    pub page_size: u32,

    /// Sort applied to the first load. Default: Recommended.
    pub initial_sort: SortOption,
}

impl BrowseConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: DEFAULT_PAGE_SIZE,
            initial_sort: SortOption::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_initial_sort(mut self, sort: SortOption) -> Self {
        self.initial_sort = sort;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
