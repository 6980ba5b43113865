//! Session-wide catalog of every facet option seen so far.
//!
//! Facet counts depend on the active filters, so a response only lists the
//! options that currently match. The catalog keeps every option it has ever
//! seen for a group and zeroes the count of options the latest response left
//! out. Options are never removed; groups are never removed.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

use crate::types::facet::{FacetGroup, FacetOption};

#[derive(Debug, Clone, Default, Serialize)]
pub struct FacetCatalog {
    groups: IndexMap<String, FacetGroup>,
}

impl FacetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a response's facet groups into the catalog.
    ///
    /// Groups absent from `incoming` are left untouched.
    pub fn merge(&mut self, incoming: Vec<FacetGroup>) -> &Self {
        for group in incoming {
            match self.groups.get(&group.identifier) {
                None => {
                    self.groups.insert(group.identifier.clone(), group);
                }
                Some(existing) => {
                    let merged = merge_group(existing, group);
                    self.groups.insert(merged.identifier.clone(), merged);
                }
            }
        }
        self
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = &FacetGroup> {
        self.groups.values()
    }

    pub fn get(&self, group_id: &str) -> Option<&FacetGroup> {
        self.groups.get(group_id)
    }

    pub fn option(&self, group_id: &str, option_id: &str) -> Option<&FacetOption> {
        self.get(group_id).and_then(|g| g.option(option_id))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Reconcile a known group with a fresh observation of it.
///
/// Known options keep their position and take the fresh option when reported,
/// otherwise drop to a zero count. Unseen options follow in response order.
/// Group metadata comes from `incoming`.
pub fn merge_group(existing: &FacetGroup, incoming: FacetGroup) -> FacetGroup {
    let FacetGroup {
        identifier,
        display_name,
        priority,
        kind,
        options: incoming_options,
    } = incoming;

    let kind = if incoming_options.is_empty() {
        existing.kind
    } else {
        kind
    };

    let mut fresh: HashMap<String, FacetOption> = HashMap::with_capacity(incoming_options.len());
    let mut order: Vec<String> = Vec::with_capacity(incoming_options.len());
    for option in incoming_options {
        order.push(option.identifier.clone());
        fresh.insert(option.identifier.clone(), option);
    }

    let mut options: Vec<FacetOption> = existing
        .options
        .iter()
        .map(|known| match fresh.remove(&known.identifier) {
            Some(option) => option,
            None => FacetOption {
                product_count: 0,
                ..known.clone()
            },
        })
        .collect();

    // Whatever is left in `fresh` was never seen before
    options.extend(order.into_iter().filter_map(|id| fresh.remove(&id)));

    FacetGroup {
        identifier,
        display_name,
        priority,
        kind,
        options,
    }
}
