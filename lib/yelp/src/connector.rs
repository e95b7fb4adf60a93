//! Connector using rustls.

use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;

/// Create a connector that serves both `http://` and `https://` endpoints.
///
/// The v1 API endpoints live on plain `http://api.yelp.com` and speak
/// HTTP/1.1 only, so the connector stays on HTTP/1 and accepts cleartext;
/// TLS uses the Mozilla root certificates when an `https://` base URL is
/// configured.
pub(crate) fn https_connector() -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .build()
}
