//! API clients for the three Yelp v1 search families.
//!
//! [`ApiClient`] carries the construction-time configuration (client key,
//! output format) and drives each call: build the request URL, issue one
//! GET through the injected transport, decode the JSON body. The endpoint
//! clients ([`ReviewSearchApi`], [`PhoneApi`], [`NeighborhoodApi`]) each
//! fix a base URL and map their named arguments onto [`QueryPairs`].

mod neighborhood;
mod phone;
mod review_search;

pub use neighborhood::NeighborhoodApi;
pub use phone::PhoneApi;
pub use review_search::{LocationOptions, ReviewSearchApi, SearchOptions};

use serde_json::Value;
use url::Url;
use yelp_core::{Error, HttpTransport, QueryPairs, Result, decode};

/// Query parameter carrying the client key on every request.
const YWSID_PARAM: &str = "ywsid";

/// Query parameter selecting the response serialization.
const OUTPUT_PARAM: &str = "output";

/// Default output format; the only one this client decodes.
pub const DEFAULT_OUTPUT: &str = "json";

/// Base API client shared by the endpoint clients.
///
/// Stateless between calls: the only data it holds is the transport, the
/// base URL, and the immutable key/output configuration, so one instance is
/// safe to reuse across tasks.
#[derive(Debug)]
pub struct ApiClient<C> {
    transport: C,
    base_url: Url,
    client_key: String,
    output: String,
}

impl<C: Clone> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            client_key: self.client_key.clone(),
            output: self.output.clone(),
        }
    }
}

impl<C> ApiClient<C> {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `client_key` is empty or whitespace-only.
    /// The key is the one required piece of configuration; a missing key
    /// fails here rather than on the first call.
    pub fn new(transport: C, base_url: Url, client_key: impl Into<String>) -> Result<Self> {
        let client_key = client_key.into();
        if client_key.trim().is_empty() {
            return Err(Error::config("client key must not be empty"));
        }

        Ok(Self {
            transport,
            base_url,
            client_key,
            output: DEFAULT_OUTPUT.to_string(),
        })
    }

    /// Select the serialization the service responds with.
    ///
    /// The value is passed through uninterpreted; only `"json"` (the
    /// default) can be decoded by this client.
    #[must_use]
    pub fn output(mut self, format: impl Into<String>) -> Self {
        self.output = format.into();
        self
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the inner transport.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.transport
    }

    /// Build the full request URL for one call.
    ///
    /// Caller parameters keep their insertion order; `ywsid` and `output`
    /// are always appended after them, unconditionally. Keys and values are
    /// form-urlencoded, nothing is validated.
    fn request_url(&self, params: &QueryPairs) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params.iter() {
                query.append_pair(name, value);
            }
            query.append_pair(YWSID_PARAM, &self.client_key);
            query.append_pair(OUTPUT_PARAM, &self.output);
        }
        url
    }
}

impl<C: HttpTransport> ApiClient<C> {
    /// Issue one GET with the given parameters and decode the JSON body.
    ///
    /// The body is decoded no matter the status code; the service reports
    /// its own failures as JSON documents, and those come back as
    /// `Ok(value)` just like results.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the round trip fails, or
    /// [`Error::Decode`] if the body is not valid JSON.
    pub async fn request(&self, params: QueryPairs) -> Result<Value> {
        let url = self.request_url(&params);
        let response = self.transport.get(url).await?;
        decode(response.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: &str) -> Result<ApiClient<()>> {
        let base_url =
            Url::parse("http://api.yelp.com/business_review_search").expect("valid URL");
        ApiClient::new((), base_url, key)
    }

    #[test]
    fn request_url_encodes_and_appends_fixed_params() {
        let client = client("KEY123").expect("client");
        let params = QueryPairs::new().pair("location", "Noe Valley, San Francisco CA");

        let url = client.request_url(&params);
        assert_eq!(
            url.as_str(),
            "http://api.yelp.com/business_review_search?location=Noe+Valley%2C+San+Francisco+CA&ywsid=KEY123&output=json"
        );
    }

    #[test]
    fn request_url_encoding_is_reversible() {
        let client = client("KEY123").expect("client");
        let location = "Noe Valley, San Francisco CA";
        let params = QueryPairs::new().pair("location", location);

        let url = client.request_url(&params);
        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(
            decoded.first(),
            Some(&("location".to_string(), location.to_string()))
        );
    }

    #[test]
    fn fixed_params_are_last_even_without_caller_params() {
        let client = client("KEY123").expect("client");

        let url = client.request_url(&QueryPairs::new());
        assert_eq!(
            url.as_str(),
            "http://api.yelp.com/business_review_search?ywsid=KEY123&output=json"
        );
    }

    #[test]
    fn output_override_is_passed_through() {
        let client = client("KEY123").expect("client").output("php");

        let url = client.request_url(&QueryPairs::new().pair("phone", "6505833244"));
        assert!(url.as_str().ends_with("phone=6505833244&ywsid=KEY123&output=php"));
    }

    #[test]
    fn empty_client_key_is_rejected() {
        let err = client("").expect_err("should fail");
        assert!(err.is_config());

        let err = client("   ").expect_err("should fail");
        assert!(err.is_config());
    }
}
