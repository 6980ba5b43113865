use anyhow::{anyhow, Context, Result};
use catalog::SortOption;
use dotenvy::dotenv;
use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub query: String,
    pub page_size: u32,
    pub sort: SortOption,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_url: env::var("LISTINGS_API_URL").context("LISTINGS_API_URL must be set")?,
            api_key: env::var("LISTINGS_API_KEY").context("LISTINGS_API_KEY must be set")?,
            query: env::var("LISTINGS_QUERY").unwrap_or_else(|_| "toilets".to_string()),
            page_size: env::var("LISTINGS_PAGE_SIZE")
                .unwrap_or_else(|_| catalog::DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .context("LISTINGS_PAGE_SIZE must be a valid number")?,
            sort: match env::var("LISTINGS_SORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|e| anyhow!("LISTINGS_SORT is invalid: {}", e))?,
                Err(_) => SortOption::default(),
            },
        })
    }
}
