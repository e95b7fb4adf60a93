//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::{Instrument, Level, debug, span, warn};
use url::Url;
use yelp_core::{Error, HttpTransport, Response, Result};

use crate::{config::TransportConfig, connector::https_connector};

/// HTTP transport backed by the hyper-util client, with connection pooling
/// and rustls TLS.
///
/// Issues exactly one GET per [`HttpTransport::get`] call. Non-2xx statuses
/// are returned like any other response; only network-level failures
/// (connection, TLS, timeout) become errors.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use yelp::{HyperTransport, TransportConfig};
///
/// let transport = HyperTransport::with_config(
///     TransportConfig::builder()
///         .timeout(Duration::from_secs(10))
///         .build(),
/// );
/// ```
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a new transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a new transport with custom configuration.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let connector = https_connector();

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner, config }
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for HyperTransport {
    async fn get(&self, url: Url) -> Result<Response> {
        let span = span!(Level::DEBUG, "yelp_request", url = %url);

        async move {
            debug!("sending GET request");

            let request = http::Request::builder()
                .method(http::Method::GET)
                .uri(url.as_str())
                .body(Empty::<Bytes>::new())
                .map_err(|e| Error::invalid_request(e.to_string()))?;

            let start = Instant::now();
            let response = tokio::time::timeout(self.config.timeout, self.inner.request(request))
                .await
                .map_err(|_| Error::Timeout)?
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let headers = Self::extract_headers(response.headers());

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            // Saturating conversion to u64 (truncates after ~584 million years)
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if (200..300).contains(&status) {
                debug!(status, elapsed_ms, body_len = body.len(), "request completed");
            } else {
                warn!(status, elapsed_ms, "request completed with non-success status");
            }

            Ok(Response::new(status, headers, body))
        }
        .instrument(span)
        .await
    }
}
