use serde::Serialize;

use crate::domain::query::{OPEN_ORDER_STATUS, PAGE_SIZE, QueryState};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OrderFilterPayload {
    pub order_status: Vec<i32>,
    pub origin_code: Vec<String>,
    pub destination_code: Vec<String>,
}

/// JSON body posted to the order-query endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OrderQueryRequest {
    pub keyword: String,
    pub filter: OrderFilterPayload,
    pub page: usize,
    pub limit: usize,
}

impl From<&QueryState> for OrderQueryRequest {
    fn from(state: &QueryState) -> Self {
        Self {
            keyword: state.keyword.clone(),
            filter: OrderFilterPayload {
                order_status: vec![OPEN_ORDER_STATUS],
                origin_code: state.filter.origin_codes(),
                destination_code: state.filter.destination_codes(),
            },
            page: state.page.get(),
            limit: PAGE_SIZE,
        }
    }
}
