use async_trait::async_trait;
use listings_client::ListingsClient;

use crate::error::SourceResult;
use crate::mapping::map_response;
use crate::traits::source::ListingSource;
use crate::types::page::{ListingPage, PageRequest};

/// Listing source backed by the listings REST API.
#[derive(Clone)]
pub struct HttpListingSource {
    client: ListingsClient,
}

impl HttpListingSource {
    pub fn new(client: ListingsClient) -> Self {
        Self { client }
    }

    pub fn from_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(ListingsClient::new(endpoint, api_key))
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self, request: &PageRequest) -> SourceResult<ListingPage> {
        let response = self.client.fetch_listings(&request.to_wire()).await?;
        Ok(map_response(response))
    }

    fn name(&self) -> &str {
        "http"
    }
}
