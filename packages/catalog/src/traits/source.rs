//! The seam between the browsing engine and whatever serves listings.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::page::{ListingPage, PageRequest};

/// Serves one page of listings per request.
///
/// Implementations may fail; they impose their own timeouts. The engine never
/// retries on its own.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, request: &PageRequest) -> SourceResult<ListingPage>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: ListingSource + ?Sized> ListingSource for std::sync::Arc<T> {
    async fn fetch(&self, request: &PageRequest) -> SourceResult<ListingPage> {
        (**self).fetch(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
