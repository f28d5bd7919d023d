//! Native REST client for the places gallery API.
//!
//! Every call issues exactly one request built by [`places_core::ApiRequest`]
//! and resolves with the parsed JSON body; non-2xx responses become
//! `ApiError::Http { status }`. There are no retries.

pub mod error;
pub mod http_client;

pub use error::ClientError;
pub use http_client::HttpClient;
pub use places_core::{ApiConfig, ApiError};
