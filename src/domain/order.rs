use serde::{Deserialize, Serialize};

/// One order card as returned by the order-query endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: String,
    pub goods_name: String,
    pub origin_name: String,
    pub destination_name: String,
}

/// One page of normalized orders plus pagination metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<OrderSummary>,
    /// Always at least 1, even when there are no items.
    pub total_pages: usize,
    pub total_items: usize,
}

impl ResultPage {
    /// The page shown before the first fetch and after any failed fetch.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            total_items: 0,
        }
    }
}

impl Default for ResultPage {
    fn default() -> Self {
        Self::empty()
    }
}
