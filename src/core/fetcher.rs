use crate::core::HttpSource;
use crate::utils::error::{PetStoreError, Result};

/// 對目錄端點發出單一 GET 請求，非 2xx 狀態直接回傳錯誤，不重試
pub async fn fetch(client: &(impl HttpSource + ?Sized), url: &str) -> Result<String> {
    tracing::debug!("Making catalog request to: {}", url);
    let response = client.get(url).await?;

    tracing::debug!("Catalog response status: {}", response.status);

    if !response.is_success() {
        return Err(PetStoreError::Http {
            status: response.status,
            url: url.to_string(),
        });
    }

    tracing::debug!("Catalog response body: {} bytes", response.body.len());
    Ok(response.body)
}
