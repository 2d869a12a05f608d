//! DTOs exposed by the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::order::OrderSummary;
use crate::pagination::PageMarker;

/// Query parameters accepted by `/api/v1/orders`.
///
/// `origin` and `destination` may repeat.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub origin: Vec<String>,
    #[serde(default)]
    pub destination: Vec<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub items: Vec<OrderSummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Page strip; `null` entries are ellipses.
    pub pages: Vec<PageMarker>,
}
