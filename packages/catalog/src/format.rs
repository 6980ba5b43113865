//! Display formatting for prices and facet values.

use crate::types::facet::{FacetKind, FacetOption, FacetValue};
use crate::types::item::ListingItem;

pub fn format_price(amount: f64) -> String {
    format!("£{:.2}", amount)
}

pub fn format_facet_value(kind: FacetKind, value: &FacetValue) -> String {
    match (kind, value) {
        (_, FacetValue::Text(text)) => text.clone(),
        (FacetKind::PriceRange, FacetValue::Range { gte, lte }) => {
            format!("£{:.0} - £{:.0}", gte, lte)
        }
        (FacetKind::Categorical, FacetValue::Range { gte, lte }) => {
            format!("{} - {}", gte, lte)
        }
    }
}

impl FacetOption {
    /// The server label, or the formatted value when the label is blank.
    pub fn display_label(&self, kind: FacetKind) -> String {
        if self.label.trim().is_empty() {
            format_facet_value(kind, &self.value)
        } else {
            self.label.clone()
        }
    }
}

impl ListingItem {
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Struck-through price, only when the item is actually reduced.
    pub fn original_price_label(&self) -> Option<String> {
        match self.original_price {
            Some(original) if original > self.price => Some(format_price(original)),
            _ => None,
        }
    }

    pub fn discount_label(&self) -> Option<String> {
        self.discount_percentage.map(|pct| format!("{}% off", pct))
    }
}
