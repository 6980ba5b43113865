//! Facet groups and options as reported by the listings backend.

use serde::{Deserialize, Serialize};

pub use listings_client::FacetValue;

/// How a facet group's values are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    PriceRange,
    #[default]
    Categorical,
}

impl FacetKind {
    /// A group whose options are all numeric ranges is a price range group.
    pub fn infer(options: &[FacetOption]) -> Self {
        if !options.is_empty() && options.iter().all(|o| o.value.is_range()) {
            FacetKind::PriceRange
        } else {
            FacetKind::Categorical
        }
    }
}

/// A selectable option within a facet group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    /// Unique within its group
    pub identifier: String,
    pub label: String,
    pub value: FacetValue,
    /// Products matching this option under the current filters
    pub product_count: u32,
    pub priority: i32,
}

impl FacetOption {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>, value: FacetValue) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            value,
            product_count: 0,
            priority: 0,
        }
    }

    pub fn with_count(mut self, product_count: u32) -> Self {
        self.product_count = product_count;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A filterable dimension (price, brand, ...) and its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetGroup {
    /// Unique across a response
    pub identifier: String,
    pub display_name: String,
    pub priority: i32,
    pub kind: FacetKind,
    pub options: Vec<FacetOption>,
}

impl FacetGroup {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            priority: 0,
            kind: FacetKind::default(),
            options: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: FacetKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_option(mut self, option: FacetOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn option(&self, identifier: &str) -> Option<&FacetOption> {
        self.options.iter().find(|o| o.identifier == identifier)
    }
}
