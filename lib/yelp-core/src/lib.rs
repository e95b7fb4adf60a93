//! Core types for the Yelp v1 search API client.
//!
//! This crate provides the foundational types used by the `yelp` crate:
//! - [`QueryPairs`] and [`ToQueryPairs`] - Query parameter building
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpTransport`] - Transport trait for issuing GET requests
//! - [`decode`] and [`from_json`] - JSON response decoding

mod client;
mod decode;
mod error;
pub mod prelude;
mod query;
mod response;

pub use client::HttpTransport;
pub use decode::{decode, from_json};
pub use error::{Error, Result};
pub use query::{QueryPairs, ToQueryPairs};
pub use response::Response;
