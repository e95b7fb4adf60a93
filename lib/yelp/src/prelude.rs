//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use yelp::prelude::*;
//! ```

pub use crate::{
    ApiClient, Error, HttpTransport, HyperTransport, LocationOptions, NeighborhoodApi, PhoneApi,
    QueryPairs, Response, Result, ReviewSearchApi, SearchOptions, ToQueryPairs, TransportConfig,
    Value, decode, from_json,
};
pub use serde::{Deserialize, Serialize};
