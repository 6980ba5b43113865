//! The user's current facet filters.

use indexmap::IndexMap;
use listings_client::FacetFilterValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::facet::FacetValue;

/// A chosen option and the value sent back to the API for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFacet {
    pub identifier: String,
    pub value: FacetValue,
}

impl SelectedFacet {
    pub fn new(identifier: impl Into<String>, value: FacetValue) -> Self {
        Self {
            identifier: identifier.into(),
            value,
        }
    }
}

/// Selected options per facet group.
///
/// A group with nothing selected is absent from the map; it is never present
/// with an empty list. Within a group each option id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct FacetSelection {
    groups: IndexMap<String, Vec<SelectedFacet>>,
}

/// Deserialized shape, normalized through [`FacetSelection::set`].
#[derive(Deserialize)]
struct RawSelection {
    #[serde(default)]
    groups: IndexMap<String, Vec<SelectedFacet>>,
}

impl From<RawSelection> for FacetSelection {
    fn from(raw: RawSelection) -> Self {
        let mut selection = FacetSelection::new();
        for (group_id, values) in raw.groups {
            selection.set(group_id, values);
        }
        selection
    }
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a group's selection. An empty list removes the group.
    ///
    /// Repeated option ids keep their first occurrence.
    pub fn set(&mut self, group_id: impl Into<String>, mut values: Vec<SelectedFacet>) {
        let group_id = group_id.into();
        let mut seen = HashSet::new();
        values.retain(|s| seen.insert(s.identifier.clone()));

        if values.is_empty() {
            self.groups.shift_remove(&group_id);
        } else {
            self.groups.insert(group_id, values);
        }
    }

    /// The selection for `group_id` with `option_id` flipped.
    ///
    /// Does not modify `self`; feed the result to [`FacetSelection::set`].
    pub fn toggled(&self, group_id: &str, option_id: &str, value: FacetValue) -> Vec<SelectedFacet> {
        let mut current = self.get(group_id).to_vec();
        if current.iter().any(|s| s.identifier == option_id) {
            current.retain(|s| s.identifier != option_id);
        } else {
            current.push(SelectedFacet::new(option_id, value));
        }
        current
    }

    pub fn get(&self, group_id: &str) -> &[SelectedFacet] {
        self.groups.get(group_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, group_id: &str, option_id: &str) -> bool {
        self.get(group_id).iter().any(|s| s.identifier == option_id)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn contains_group(&self, group_id: &str) -> bool {
        self.groups.contains_key(group_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SelectedFacet])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Request form; `None` when nothing is selected so the key is omitted.
    pub fn to_wire(&self) -> Option<IndexMap<String, Vec<FacetFilterValue>>> {
        if self.groups.is_empty() {
            return None;
        }

        Some(
            self.groups
                .iter()
                .map(|(group, values)| {
                    let values = values
                        .iter()
                        .map(|s| FacetFilterValue {
                            identifier: s.identifier.clone(),
                            value: s.value.clone(),
                        })
                        .collect();
                    (group.clone(), values)
                })
                .collect(),
        )
    }
}
