//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use yelp_core::prelude::*;
//! ```

pub use crate::{Error, HttpTransport, QueryPairs, Response, Result, ToQueryPairs, decode, from_json};
