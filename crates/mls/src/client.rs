//! HTTP client for the WFRMLS RESO Web API.
//!
//! The API is an OData v4 service: each entity collection is listed with
//! `$top`/`$filter`/`$orderby` and continued through `@odata.nextLink`.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::errors::MlsApiError;
use crate::models::{EntityType, ExternalRecord, PageCursor, RecordFilter, RecordPage};

/// Default base URL of the WFRMLS RESO Web API.
pub const DEFAULT_API_URL: &str = "https://resoapi.utahrealestate.com/reso/odata";

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contract every MLS data source implements.
///
/// A single call is a single HTTP round trip; retry and pacing live in
/// [`crate::RateLimitedClient`].
#[async_trait]
pub trait MlsApiClient: Send + Sync {
    /// Fetch one page of `entity` records. `cursor` is `None` for the first
    /// page and the previous page's `next_cursor` afterwards.
    async fn fetch_page(
        &self,
        entity: EntityType,
        filter: &RecordFilter,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordPage, MlsApiError>;
}

/// Connection settings for [`WfrmlsClient`].
#[derive(Debug, Clone)]
pub struct MlsClientConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub page_size: usize,
    pub timeout: Duration,
}

impl Default for MlsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            bearer_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ODataPage {
    #[serde(default)]
    value: Vec<ExternalRecord>,
    #[serde(rename = "@odata.nextLink", default)]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ODataErrorEnvelope {
    error: Option<ODataErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ODataErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// reqwest-backed client for the WFRMLS API.
#[derive(Debug, Clone)]
pub struct WfrmlsClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
    page_size: usize,
}

impl WfrmlsClient {
    /// Build a client. Fails fast when no bearer token is configured.
    pub fn new(config: MlsClientConfig) -> Result<Self, MlsApiError> {
        let token = config
            .bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MlsApiError::MissingCredential)?;

        let auth_header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| MlsApiError::InvalidConfig(format!("Invalid bearer token format: {}", e)))?;

        if config.page_size == 0 {
            return Err(MlsApiError::InvalidConfig(
                "page size must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MlsApiError::InvalidConfig(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
            page_size: config.page_size,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// URL of the first page of a listing.
    pub fn first_page_url(&self, entity: EntityType, filter: &RecordFilter) -> String {
        build_listing_url(&self.base_url, entity, filter, self.page_size)
    }

    fn resolve_url(
        &self,
        entity: EntityType,
        filter: &RecordFilter,
        cursor: Option<&PageCursor>,
    ) -> Result<String, MlsApiError> {
        match cursor {
            None => Ok(self.first_page_url(entity, filter)),
            Some(cursor) if cursor.as_str().starts_with(&self.base_url) => {
                Ok(cursor.as_str().to_string())
            }
            Some(cursor) => Err(MlsApiError::InvalidCursor(cursor.as_str().to_string())),
        }
    }
}

/// Builds `{base}/{Resource}?$top=..&$orderby=..[&$filter=..]`.
pub fn build_listing_url(
    base_url: &str,
    entity: EntityType,
    filter: &RecordFilter,
    page_size: usize,
) -> String {
    let mut url = format!(
        "{}/{}?$top={}&$orderby={}",
        base_url.trim_end_matches('/'),
        entity.resource(),
        page_size,
        entity.order_key()
    );
    if let Some(expr) = filter.to_odata() {
        url.push_str("&$filter=");
        url.push_str(&urlencoding::encode(&expr));
    }
    url
}

async fn classify_failure(
    entity: EntityType,
    response: reqwest::Response,
) -> MlsApiError {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return MlsApiError::RateLimited {
            resource: entity.resource().to_string(),
        };
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return MlsApiError::Unauthorized {
            status: status.as_u16(),
        };
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ODataErrorEnvelope>(&body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.chars().take(200).collect());

    MlsApiError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl MlsApiClient for WfrmlsClient {
    async fn fetch_page(
        &self,
        entity: EntityType,
        filter: &RecordFilter,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordPage, MlsApiError> {
        let url = self.resolve_url(entity, filter, cursor)?;
        debug!("[Wfrmls] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MlsApiError::Timeout(e.to_string())
                } else {
                    MlsApiError::Network(e)
                }
            })?;

        if !response.status().is_success() {
            return Err(classify_failure(entity, response).await);
        }

        let body = response.text().await?;
        let page: ODataPage = serde_json::from_str(&body).map_err(|e| {
            MlsApiError::Decode(format!(
                "{} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        })?;

        debug!(
            "[Wfrmls] {} page: {} records, more={}",
            entity,
            page.value.len(),
            page.next_link.is_some()
        );

        Ok(RecordPage {
            records: page.value,
            next_cursor: page.next_link.map(PageCursor::new),
            page_size: self.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn config(token: Option<&str>) -> MlsClientConfig {
        MlsClientConfig {
            bearer_token: token.map(str::to_string),
            ..MlsClientConfig::default()
        }
    }

    #[test]
    fn test_missing_token_fails_fast() {
        assert!(matches!(
            WfrmlsClient::new(config(None)),
            Err(MlsApiError::MissingCredential)
        ));
        assert!(matches!(
            WfrmlsClient::new(config(Some("   "))),
            Err(MlsApiError::MissingCredential)
        ));
    }

    #[test]
    fn test_client_creation() {
        let client = WfrmlsClient::new(config(Some("secret"))).unwrap();
        assert_eq!(client.base_url, DEFAULT_API_URL);
        assert_eq!(client.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_base_url_normalization() {
        let client = WfrmlsClient::new(MlsClientConfig {
            base_url: "https://mls.example.test/odata/".to_string(),
            ..config(Some("secret"))
        })
        .unwrap();
        assert_eq!(client.base_url, "https://mls.example.test/odata");
    }

    #[test]
    fn test_listing_url_encodes_filter() {
        let floor = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let filter = RecordFilter::active_members().modified_after(Some(floor));
        let url = build_listing_url("https://mls.example.test/odata", EntityType::Member, &filter, 50);

        assert!(url.starts_with(
            "https://mls.example.test/odata/Member?$top=50&$orderby=MemberKeyNumeric&$filter="
        ));
        assert!(url.contains("MemberStatus%20eq%20%27Active%27"));
        assert!(url.contains("ModificationTimestamp%20gt%202024-01-02T03%3A04%3A05Z"));
    }

    #[test]
    fn test_listing_url_without_filter() {
        let url = build_listing_url(
            "https://mls.example.test/odata",
            EntityType::Property,
            &RecordFilter::default(),
            200,
        );
        assert_eq!(
            url,
            "https://mls.example.test/odata/Property?$top=200&$orderby=ListingKeyNumeric"
        );
    }

    #[test]
    fn test_foreign_cursor_is_rejected() {
        let client = WfrmlsClient::new(config(Some("secret"))).unwrap();
        let cursor = PageCursor::new("https://elsewhere.test/Member?$skip=200");
        let result = client.resolve_url(EntityType::Member, &RecordFilter::default(), Some(&cursor));
        assert!(matches!(result, Err(MlsApiError::InvalidCursor(_))));

        let own = PageCursor::new(format!("{}/Member?$skip=200", DEFAULT_API_URL));
        let resolved = client
            .resolve_url(EntityType::Member, &RecordFilter::default(), Some(&own))
            .unwrap();
        assert_eq!(resolved, own.as_str());
    }

    #[test]
    fn test_odata_page_decoding() {
        let body = r#"{
            "@odata.context": "https://mls.example.test/odata/$metadata#Member",
            "value": [{"MemberKeyNumeric": 1}, {"MemberKeyNumeric": 2}],
            "@odata.nextLink": "https://mls.example.test/odata/Member?$skip=2"
        }"#;
        let page: ODataPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.value.len(), 2);
        assert_eq!(
            page.next_link.as_deref(),
            Some("https://mls.example.test/odata/Member?$skip=2")
        );
    }
}
