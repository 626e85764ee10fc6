use crate::core::{CatalogSettings, HttpResponse, HttpSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `HttpSource` backed by a single reusable reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &impl CatalogSettings) -> Result<Self> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(settings.timeout_seconds()));

        if let Some(user_agent) = settings.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl HttpSource for ReqwestSource {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
