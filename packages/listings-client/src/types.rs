use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Sort order accepted by the listings API. Serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SortOption {
    #[default]
    Recommended,
    PriceLowToHigh,
    PriceHighToLow,
    LargestDiscount,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Recommended => "Recommended",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::LargestDiscount => "Largest Discount",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            SortOption::Recommended => 1,
            SortOption::PriceLowToHigh => 2,
            SortOption::PriceHighToLow => 3,
            SortOption::LargestDiscount => 4,
        }
    }

    pub fn variants() -> &'static [SortOption] {
        &[
            SortOption::Recommended,
            SortOption::PriceLowToHigh,
            SortOption::PriceHighToLow,
            SortOption::LargestDiscount,
        ]
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SortOption> for u8 {
    fn from(sort: SortOption) -> Self {
        sort.code()
    }
}

impl TryFrom<u8> for SortOption {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SortOption::variants()
            .iter()
            .copied()
            .find(|s| s.code() == code)
            .ok_or_else(|| format!("unknown sort option code: {}", code))
    }
}

/// Accepts the numeric code or a short name (`recommended`, `price-asc`,
/// `price-desc`, `discount`).
impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return SortOption::try_from(code);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "recommended" => Ok(SortOption::Recommended),
            "price-asc" => Ok(SortOption::PriceLowToHigh),
            "price-desc" => Ok(SortOption::PriceHighToLow),
            "discount" => Ok(SortOption::LargestDiscount),
            other => Err(format!("unknown sort option: {}", other)),
        }
    }
}

/// Value of a facet option: either a categorical string or an inclusive numeric range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Text(String),
    Range { gte: f64, lte: f64 },
}

impl FacetValue {
    /// Interpret an untyped option value from a response.
    ///
    /// Returns `None` for shapes the API may send that cannot be requested back.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn is_range(&self) -> bool {
        matches!(self, FacetValue::Range { .. })
    }
}

/// A selected facet option as sent in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetFilterValue {
    pub identifier: String,
    pub value: FacetValue,
}

/// Request payload for the listings endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsRequest {
    pub query: String,
    pub page_number: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_pages: Option<u32>,
    pub sort: SortOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Groups are sent in selection order.
    pub facets: Option<IndexMap<String, Vec<FacetFilterValue>>>,
}

/// A single product as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub id: String,
    pub product_name: String,
    pub price: ApiPrice,
    pub image: Option<ApiImage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPrice {
    pub price_inc_tax: f64,
    pub was_price: Option<f64>,
    #[serde(default)]
    pub is_on_promotion: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiImage {
    pub url: String,
    pub attributes: Option<ApiImageAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiImageAttributes {
    pub image_alt_text: Option<String>,
}

/// One option within a facet group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFacetValue {
    pub identifier: String,
    /// Untyped on the wire; see [`FacetValue::from_json`].
    pub value: serde_json::Value,
    #[serde(default)]
    pub display_value: String,
    #[serde(default)]
    pub product_count: u32,
    #[serde(default)]
    pub priority: i32,
}

/// A facet group with its options.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFacetGroup {
    pub identifier: String,
    pub display_name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub options: Vec<ApiFacetValue>,
}

/// Response body of the listings endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub products: Vec<ApiProduct>,
    pub total_results: u64,
    pub facets: Option<Vec<ApiFacetGroup>>,
}
