//! restcountries v3.1 client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::CountryApi;
use crate::types::{COUNTRY_FIELDS, Country};
use crate::utils::log_sanitizer::describe_count;

/// Public restcountries endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 默认重试次数
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Options for [`RestCountriesClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root, without trailing slash, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Retries for transient failures (0 = no retry).
    pub max_retries: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// [`CountryApi`] backed by the restcountries REST API.
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl RestCountriesClient {
    /// Build a client with the given options.
    ///
    /// # Errors
    /// `InvalidQuery` if the base URL is empty, `Network` if the TLS backend
    /// cannot be initialised.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = options.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidQuery {
                detail: "base URL is empty".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ApiError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            max_retries: options.max_retries,
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn all_url(&self) -> String {
        format!("{}/all", self.base_url)
    }

    fn name_url(&self, name: &str) -> String {
        format!("{}/name/{}", self.base_url, urlencoding::encode(name))
    }

    async fn get_countries(&self, url: String, label: &str) -> Result<Vec<Country>> {
        let request = self
            .client
            .get(url)
            .query(&[("fields", COUNTRY_FIELDS.join(","))]);

        let body = HttpUtils::execute_request_with_retry(request, label, self.max_retries).await?;
        let countries: Vec<Country> = HttpUtils::parse_json(&body, label)?;

        log::info!("{label}: {}", describe_count(countries.len()));
        Ok(countries)
    }
}

#[async_trait]
impl CountryApi for RestCountriesClient {
    fn id(&self) -> &'static str {
        "restcountries"
    }

    async fn all(&self) -> Result<Vec<Country>> {
        self.get_countries(self.all_url(), "/all").await
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Country>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidQuery {
                detail: "name must not be empty".to_string(),
            });
        }

        let label = format!("/name/{name}");
        self.get_countries(self.name_url(name), &label).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RestCountriesClient {
        RestCountriesClient::new(ClientOptions {
            base_url: base_url.to_string(),
            ..ClientOptions::default()
        })
        .expect("client")
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let c = client("https://example.test/v3.1/");
        assert_eq!(c.base_url(), "https://example.test/v3.1");
        assert_eq!(c.all_url(), "https://example.test/v3.1/all");
    }

    #[test]
    fn empty_base_url_rejected() {
        let result = RestCountriesClient::new(ClientOptions {
            base_url: "  ".to_string(),
            ..ClientOptions::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidQuery { .. })));
    }

    #[test]
    fn name_is_percent_encoded() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(
            c.name_url("united states"),
            "https://restcountries.com/v3.1/name/united%20states"
        );
        assert_eq!(
            c.name_url("Côte d'Ivoire"),
            "https://restcountries.com/v3.1/name/C%C3%B4te%20d%27Ivoire"
        );
    }

    #[test]
    fn requested_fields_stay_within_api_limit() {
        assert!(COUNTRY_FIELDS.len() <= 10);
    }

    #[tokio::test]
    async fn blank_search_is_rejected_without_request() {
        // Unroutable base URL: reaching the network would fail differently
        let c = client("http://127.0.0.1:9");
        let result = c.search_by_name("   ").await;
        assert!(matches!(result, Err(ApiError::InvalidQuery { .. })));
    }
}
