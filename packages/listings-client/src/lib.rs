//! Pure product listings REST API client.
//!
//! A minimal client for the listings search endpoint. One request returns a
//! page of products, the total result count and the facet groups that apply
//! to the current query.
//!
//! # Example
//!
//! ```rust,ignore
//! use listings_client::{ListingsClient, ListingsRequest, SortOption};
//!
//! let client = ListingsClient::new("https://example.com/listings", "api-key");
//!
//! let response = client
//!     .fetch_listings(&ListingsRequest {
//!         query: "toilets".into(),
//!         page_number: 1,
//!         size: 24,
//!         additional_pages: None,
//!         sort: SortOption::Recommended,
//!         facets: None,
//!     })
//!     .await?;
//! println!("{} results", response.total_results);
//! ```

pub mod error;
pub mod types;

pub use error::{ListingsError, Result};
pub use types::{
    ApiFacetGroup, ApiFacetValue, ApiImage, ApiImageAttributes, ApiPrice, ApiProduct,
    FacetFilterValue, FacetValue, ListingsRequest, ListingsResponse, SortOption,
};

#[derive(Clone)]
pub struct ListingsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ListingsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch one page of listings.
    pub async fn fetch_listings(&self, request: &ListingsRequest) -> Result<ListingsResponse> {
        tracing::debug!(
            query = %request.query,
            page = request.page_number,
            size = request.size,
            sort = request.sort.code(),
            facet_groups = request.facets.as_ref().map(|f| f.len()).unwrap_or(0),
            "Fetching listings"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("apikey", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ListingsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let listings = parse_response(&body)?;
        tracing::debug!(
            products = listings.products.len(),
            total = listings.total_results,
            "Listings fetched"
        );

        Ok(listings)
    }
}

/// Decode a listings response body.
pub fn parse_response(body: &str) -> Result<ListingsResponse> {
    Ok(serde_json::from_str(body)?)
}
