use crate::utils::error::Result;
use async_trait::async_trait;

/// A fully-read HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client port. Implementations must be reusable across sequential calls.
#[async_trait]
pub trait HttpSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

pub trait CatalogSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn status(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str>;
}
