//! HTTP transport trait.
//!
//! [`HttpTransport`] is the seam between the API clients and the network.
//! The `yelp` crate provides a hyper-based implementation; tests inject
//! recording doubles instead of a shared global connection.

use std::future::Future;

use url::Url;

use crate::{Response, Result};

/// Transport for issuing a single HTTP GET.
///
/// Implementations issue exactly one request per call: no batching, no
/// pipelining, no retries. Failure conditions (connection, DNS, TLS,
/// timeout) surface as errors, but a non-2xx status is NOT a failure; the
/// response is returned unchanged so its body can be decoded like any other.
pub trait HttpTransport: Send + Sync {
    /// Execute a GET request against `url` and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the network level:
    /// - Connection or DNS errors
    /// - TLS errors
    /// - Timeouts
    fn get(&self, url: Url) -> impl Future<Output = Result<Response>> + Send;
}
