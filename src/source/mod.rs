//! The remote order-query endpoint and its wire format.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

pub mod http;
pub mod request;
pub mod response;

pub use http::HttpOrderSource;
pub use request::{OrderFilterPayload, OrderQueryRequest};
pub use response::normalize_response;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Anything that can answer an order query with a raw JSON body.
///
/// Implementations only move bytes; interpreting the body is left to
/// [`normalize_response`].
pub trait OrderSource {
    fn query_orders(
        &self,
        request: &OrderQueryRequest,
    ) -> impl Future<Output = SourceResult<Value>> + Send;
}

impl<S> OrderSource for &S
where
    S: OrderSource + Sync + ?Sized,
{
    fn query_orders(
        &self,
        request: &OrderQueryRequest,
    ) -> impl Future<Output = SourceResult<Value>> + Send {
        (**self).query_orders(request)
    }
}
