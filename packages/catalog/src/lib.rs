//! Product catalog browsing engine.
//!
//! Drives a paginated, sortable, facet-filtered product listing against a
//! search backend and keeps a small comparison set alongside it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog::{BrowseConfig, ComparisonSet, HttpListingSource, ListingsEngine, SortOption};
//!
//! let source = HttpListingSource::from_endpoint("https://example.com/listings", "api-key");
//! let mut engine = ListingsEngine::new(BrowseConfig::new("toilets"))?;
//!
//! engine.refresh(&source).await;
//! engine.change_sort(&source, SortOption::PriceLowToHigh).await;
//! while engine.has_more() {
//!     engine.load_more(&source).await;
//! }
//!
//! let mut compare = ComparisonSet::new();
//! compare.toggle(engine.items()[0].clone());
//! ```
//!
//! # Modules
//!
//! - [`listings`] - Listing synchronization engine (pagination, resets, stale-response discard)
//! - [`facets`] - Session-wide facet catalog
//! - [`comparison`] - Bounded comparison set
//! - [`mapping`] - Wire format to domain model
//! - [`format`] - Price and facet value display
//! - [`traits`] - The `ListingSource` seam
//! - [`sources`] - HTTP-backed source
//! - [`testing`] - Mock sources for testing

pub mod comparison;
pub mod error;
pub mod facets;
pub mod format;
pub mod listings;
pub mod mapping;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

pub use comparison::{AddOutcome, ComparisonSet, ToggleOutcome, COMPARISON_CAPACITY};
pub use error::{ConfigError, SourceError, SourceResult, LOAD_FAILED_MESSAGE};
pub use facets::{merge_group, FacetCatalog};
pub use listings::{ListingsEngine, ListingsView, LoadOutcome, PendingLoad};
pub use listings_client::SortOption;
pub use sources::HttpListingSource;
pub use traits::source::ListingSource;
pub use types::{
    config::{BrowseConfig, DEFAULT_PAGE_SIZE},
    facet::{FacetGroup, FacetKind, FacetOption, FacetValue},
    item::{discount_percentage, ListingItem},
    page::{ListingPage, PageRequest},
    selection::{FacetSelection, SelectedFacet},
};
