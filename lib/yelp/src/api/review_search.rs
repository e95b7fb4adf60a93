//! Review search API client.
//!
//! Upstream documentation:
//! <http://www.yelp.com/developers/documentation/search_api>

use serde_json::Value;
use url::Url;
use yelp_core::{HttpTransport, QueryPairs, Result, ToQueryPairs};

use super::ApiClient;
use crate::client::HyperTransport;

/// Optional filters shared by the coordinate-based review searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Search term to filter by.
    pub term: Option<String>,
    /// `+`-separated list of categories to filter by. See
    /// <http://www.yelp.com/developers/documentation/category_list> for the
    /// list of valid categories.
    pub category: Option<String>,
    /// Maximum number of matching results to return.
    pub num_biz_requested: Option<u32>,
}

impl ToQueryPairs for SearchOptions {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        QueryPairs::new()
            .opt_pair("term", self.term.as_deref())
            .opt_pair("category", self.category.as_deref())
            .opt_pair("num_biz_requested", self.num_biz_requested)
            .into_vec()
    }
}

/// Optional filters for [`ReviewSearchApi::by_location`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationOptions {
    /// ISO 3166-1 alpha-2 country code.
    pub cc: Option<String>,
    /// Search radius, in miles.
    pub radius: Option<f64>,
    /// Search term to filter by.
    pub term: Option<String>,
    /// `+`-separated list of categories to filter by.
    pub category: Option<String>,
    /// Maximum number of matching results to return.
    pub num_biz_requested: Option<u32>,
}

impl ToQueryPairs for LocationOptions {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        QueryPairs::new()
            .opt_pair("cc", self.cc.as_deref())
            .opt_pair("radius", self.radius)
            .opt_pair("term", self.term.as_deref())
            .opt_pair("category", self.category.as_deref())
            .opt_pair("num_biz_requested", self.num_biz_requested)
            .into_vec()
    }
}

/// Yelp Review Search API client.
///
/// Searches businesses and their review snippets by bounding box, geopoint,
/// or free-text location. Results come back as an undecoded
/// [`serde_json::Value`]; the service's own error documents decode the same
/// way and are returned as `Ok`.
#[derive(Debug, Clone)]
pub struct ReviewSearchApi<C = HyperTransport> {
    client: ApiClient<C>,
}

impl ReviewSearchApi<HyperTransport> {
    /// Create a client talking to the live service with a default transport.
    ///
    /// # Errors
    ///
    /// Returns [`yelp_core::Error::Config`] if `client_key` is empty.
    pub fn new(client_key: impl Into<String>) -> Result<Self> {
        Self::with_transport(HyperTransport::new(), client_key)
    }
}

impl<C: HttpTransport> ReviewSearchApi<C> {
    /// Base endpoint for review searches.
    pub const BASE_URL: &'static str = "http://api.yelp.com/business_review_search";

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

    /// Search reviews within a map bounding box.
    ///
    /// `tl_*` is the top-left corner, `br_*` the bottom-right corner.
    pub async fn by_bounding_box(
        &self,
        tl_lat: f64,
        tl_long: f64,
        br_lat: f64,
        br_long: f64,
        options: &SearchOptions,
    ) -> Result<Value> {
        let params = QueryPairs::new()
            .pair("tl_lat", tl_lat)
            .pair("tl_long", tl_long)
            .pair("br_lat", br_lat)
            .pair("br_long", br_long)
            .extend_from(options);
        self.client.request(params).await
    }

    /// Search reviews around a geopoint, with a search radius in miles.
    ///
    /// Of the optional filters only `category` reaches the wire: `term` and
    /// `num_biz_requested` are accepted but never forwarded on this search.
    pub async fn by_geopoint(
        &self,
        lat: f64,
        long: f64,
        radius: f64,
        options: &SearchOptions,
    ) -> Result<Value> {
        let params = QueryPairs::new()
            .pair("lat", lat)
            .pair("long", long)
            .pair("radius", radius)
            .opt_pair("category", options.category.as_deref());
        self.client.request(params).await
    }

    /// Search reviews near a free-text location specifier of the form
    /// "address, neighborhood, city, state or zip, optional country".
    pub async fn by_location(&self, location: &str, options: &LocationOptions) -> Result<Value> {
        let params = QueryPairs::new()
            .pair("location", location)
            .extend_from(options);
        self.client.request(params).await
    }
}
