pub mod http;

pub use http::HttpListingSource;
