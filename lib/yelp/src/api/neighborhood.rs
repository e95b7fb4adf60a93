//! Neighborhood search API client.
//!
//! Upstream documentation:
//! <http://www.yelp.com/developers/documentation/neighborhood_api>

use serde_json::Value;
use url::Url;
use yelp_core::{HttpTransport, QueryPairs, Result};

use super::ApiClient;
use crate::client::HyperTransport;

/// Yelp Neighborhood API client.
///
/// Resolves a geopoint or a free-text location to the neighborhood records
/// the service knows about.
#[derive(Debug, Clone)]
pub struct NeighborhoodApi<C = HyperTransport> {
    client: ApiClient<C>,
}

impl NeighborhoodApi<HyperTransport> {
    /// Create a client talking to the live service with a default transport.
    ///
    /// # Errors
    ///
    /// Returns [`yelp_core::Error::Config`] if `client_key` is empty.
    pub fn new(client_key: impl Into<String>) -> Result<Self> {
        Self::with_transport(HyperTransport::new(), client_key)
    }
}

impl<C: HttpTransport> NeighborhoodApi<C> {
    /// Base endpoint for neighborhood searches.
    pub const BASE_URL: &'static str = "http://api.yelp.com/neighborhood_search";

    /// Create a client with an injected transport.
    ///
    /// # Errors
    ///
    /// Returns [`yelp_core::Error::Config`] if `client_key` is empty.
    pub fn with_transport(transport: C, client_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(Self::BASE_URL)?;
        Ok(Self {
            client: ApiClient::new(transport, base_url, client_key)?,
        })
    }

    /// Create a client against an alternate base URL (proxies, test servers).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or `client_key` is empty.
    pub fn with_base_url(
        transport: C,
        base_url: impl AsRef<str>,
        client_key: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client: ApiClient::new(transport, base_url, client_key)?,
        })
    }

    /// Select the serialization the service responds with. Only `"json"`
    /// (the default) is decoded by this client.
    #[must_use]
    pub fn output(mut self, format: impl Into<String>) -> Self {
        self.client = self.client.output(format);
        self
    }

    /// Find the neighborhood containing a geopoint.
    pub async fn by_geopoint(&self, lat: f64, long: f64) -> Result<Value> {
        let params = QueryPairs::new().pair("lat", lat).pair("long", long);
        self.client.request(params).await
    }

    /// Find neighborhoods matching a free-text location specifier of the
    /// form "address, city, state or zip, optional country".
    ///
    /// `cc` is an optional ISO 3166-1 alpha-2 country code.
    pub async fn by_location(&self, location: &str, cc: Option<&str>) -> Result<Value> {
        let params = QueryPairs::new()
            .pair("location", location)
            .opt_pair("cc", cc);
        self.client.request(params).await
    }
}
