use crate::core::{decoder, fetcher, sorter, CatalogSettings, HttpSource, Pet};
use crate::utils::error::{PetStoreError, Result};
use url::Url;

pub const FIND_BY_STATUS_PATH: &str = "pet/findByStatus";

/// 依分類排序的結果。原始抓取順序與排序後順序分開保存。
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub fetched: Vec<Pet>,
    pub ordered: Vec<Pet>,
}

pub struct PetCatalog<H: HttpSource> {
    source: H,
    endpoint: String,
}

impl<H: HttpSource> PetCatalog<H> {
    pub fn new(source: H, settings: &impl CatalogSettings) -> Result<Self> {
        let endpoint = find_by_status_url(settings.base_url(), settings.status())?;
        tracing::debug!("Catalog endpoint resolved to: {}", endpoint);
        Ok(Self { source, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode, in the order the catalog returned them.
    pub async fn available_pets(&self) -> Result<Vec<Pet>> {
        let body = fetcher::fetch(&self.source, &self.endpoint).await?;
        let pets = decoder::decode(&body)?;
        tracing::info!("Fetched {} pets", pets.len());
        Ok(pets)
    }

    pub async fn by_category_reversed(&self) -> Result<CategoryListing> {
        let fetched = self.available_pets().await?;
        let ordered = sorter::order_by_category_reversed(&fetched);
        Ok(CategoryListing { fetched, ordered })
    }
}

/// `<base>/pet/findByStatus?status=<status>`. A trailing slash on the base is optional.
pub fn find_by_status_url(base_url: &str, status: &str) -> Result<String> {
    let invalid = |reason: String| PetStoreError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base
        .join(FIND_BY_STATUS_PATH)
        .map_err(|e| invalid(format!("Cannot build endpoint: {}", e)))?;
    url.query_pairs_mut().clear().append_pair("status", status);

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetcher::tests::MockSource;

    struct Settings {
        base_url: String,
    }

    impl CatalogSettings for Settings {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn status(&self) -> &str {
            "available"
        }

        fn timeout_seconds(&self) -> u64 {
            30
        }

        fn user_agent(&self) -> Option<&str> {
            None
        }
    }

    fn settings() -> Settings {
        Settings {
            base_url: "https://petstore.swagger.io/v2".to_string(),
        }
    }

    const UNORDERED: &str = r#"[
        {"id":1,"category":{"id":1,"name":"Dog"},"name":"Buddy"},
        {"id":2,"category":{"id":2,"name":"Cat"},"name":"Whiskers"},
        {"id":3,"category":{"id":1,"name":"Dog"},"name":"Max"}
    ]"#;

    #[test]
    fn test_find_by_status_url() {
        assert_eq!(
            find_by_status_url("https://petstore.swagger.io/v2", "available").unwrap(),
            "https://petstore.swagger.io/v2/pet/findByStatus?status=available"
        );
        assert_eq!(
            find_by_status_url("http://localhost:8080/", "sold").unwrap(),
            "http://localhost:8080/pet/findByStatus?status=sold"
        );
    }

    #[test]
    fn test_find_by_status_url_rejects_garbage() {
        assert!(find_by_status_url("not a url", "available").is_err());
        assert!(find_by_status_url("mailto:pets@example.com", "available").is_err());
    }

    #[tokio::test]
    async fn test_available_pets_keeps_catalog_order() {
        let source = MockSource::new(200, UNORDERED);
        let catalog = PetCatalog::new(source.clone(), &settings()).unwrap();

        let pets = catalog.available_pets().await.unwrap();

        let ids: Vec<i64> = pets.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            *source.requests.lock().await,
            vec!["https://petstore.swagger.io/v2/pet/findByStatus?status=available"]
        );
    }

    #[tokio::test]
    async fn test_by_category_reversed_keeps_both_orders() {
        let catalog = PetCatalog::new(MockSource::new(200, UNORDERED), &settings()).unwrap();

        let listing = catalog.by_category_reversed().await.unwrap();

        let fetched: Vec<i64> = listing.fetched.iter().map(|p| p.id).collect();
        let ordered: Vec<i64> = listing.ordered.iter().map(|p| p.id).collect();
        assert_eq!(fetched, vec![1, 2, 3]);
        assert_eq!(ordered, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_not_an_error() {
        let catalog = PetCatalog::new(MockSource::new(200, "[]"), &settings()).unwrap();

        let listing = catalog.by_category_reversed().await.unwrap();

        assert!(listing.fetched.is_empty());
        assert!(listing.ordered.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_never_reaches_decoder() {
        // body would be a decode error if it were ever parsed
        let catalog = PetCatalog::new(MockSource::new(500, "<html>oops"), &settings()).unwrap();

        let err = catalog.available_pets().await.unwrap_err();

        assert!(matches!(err, PetStoreError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let catalog = PetCatalog::new(MockSource::new(200, r#"{"id":1}"#), &settings()).unwrap();

        let err = catalog.by_category_reversed().await.unwrap_err();

        assert!(matches!(err, PetStoreError::Decode(_)));
    }
}
