//! # country-dashboard-api
//!
//! Typed, read-only client for the [restcountries](https://restcountries.com)
//! v3.1 REST API.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`CountryApi::all`] | `GET /all?fields=…` |
//! | [`CountryApi::search_by_name`] | `GET /name/{name}?fields=…` |
//! | [`CountryApi::detail_by_official_name`] | `GET /name/{official}?fields=…`, exact match preferred |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use country_dashboard_api::{ClientOptions, CountryApi, RestCountriesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = RestCountriesClient::new(ClientOptions::default())?;
//!
//!     let countries = api.search_by_name("swit").await?;
//!     for country in &countries {
//!         println!(
//!             "{} - {} people, {}",
//!             country.name.common,
//!             country.formatted_population(),
//!             country.currency_summary()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Transient errors
//! (`Network`, `Timeout`, `RateLimited`) are retried with exponential backoff;
//! HTTP 404 becomes [`ApiError::NotFound`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientOptions, DEFAULT_BASE_URL, RestCountriesClient};
pub use error::{ApiError, Result};
pub use traits::CountryApi;
pub use types::{COUNTRY_FIELDS, Country, CountryKey, CountryName, Currency, Flags};
pub use utils::format::group_thousands;
