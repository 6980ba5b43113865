use serde::{Deserialize, Serialize};

/// A product as shown in the listing grid.
///
/// Created per response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Stable across pages
    pub id: String,
    pub title: String,
    /// Current price including tax
    pub price: f64,
    pub original_price: Option<f64>,
    pub on_promotion: bool,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    /// Present only when `original_price` exceeds `price`
    pub discount_percentage: Option<u32>,
}

impl ListingItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        original_price: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            original_price,
            on_promotion: false,
            image_url: None,
            image_alt: None,
            discount_percentage: discount_percentage(price, original_price),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>, alt: Option<String>) -> Self {
        self.image_url = Some(url.into());
        self.image_alt = alt;
        self
    }

    pub fn with_promotion(mut self, on_promotion: bool) -> Self {
        self.on_promotion = on_promotion;
        self
    }

    /// Whether a struck-through original price should be shown.
    pub fn is_reduced(&self) -> bool {
        self.discount_percentage.is_some()
    }
}

/// `round(100 * (original - price) / original)` when the original price is higher.
pub fn discount_percentage(price: f64, original_price: Option<f64>) -> Option<u32> {
    let original = original_price?;
    if original <= price || original <= 0.0 {
        return None;
    }
    Some((100.0 * (original - price) / original).round() as u32)
}
