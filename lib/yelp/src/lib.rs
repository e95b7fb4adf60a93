//! Async Rust client for the Yelp v1 search APIs.
//!
//! Three endpoint clients cover the three search families the service
//! exposes: [`ReviewSearchApi`], [`PhoneApi`], and [`NeighborhoodApi`].
//! Every call issues a single HTTP GET carrying the caller's parameters,
//! the client key (`ywsid`), and the output format selector, then decodes
//! the JSON body into a generic [`Value`].
//!
//! The service reports its own application-level failures as ordinary JSON
//! documents, so those come back as `Ok(value)`; inspect the decoded
//! structure to tell them apart from results.
//!
//! # Example
//!
//! ```ignore
//! use yelp::prelude::*;
//!
//! let reviews = ReviewSearchApi::new("YOUR-YWSID")?;
//! let found = reviews
//!     .by_location("Noe Valley, San Francisco CA", &LocationOptions::default())
//!     .await?;
//! println!("{found:#}");
//! ```

mod api;
mod client;
mod config;
mod connector;
pub mod prelude;

pub use api::{
    ApiClient, DEFAULT_OUTPUT, LocationOptions, NeighborhoodApi, PhoneApi, ReviewSearchApi,
    SearchOptions,
};
pub use client::HyperTransport;
pub use config::{TransportConfig, TransportConfigBuilder};

// Re-export core types
pub use yelp_core::{
    Error, HttpTransport, QueryPairs, Response, Result, ToQueryPairs, decode, from_json,
};

// Re-export the decoded result type
pub use serde_json::Value;
