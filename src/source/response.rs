//! Tolerant interpretation of order-query response bodies.
//!
//! The endpoint does not fix its field names. Every value is looked up
//! through an ordered table of accessors; the first accessor that yields a
//! usable value wins.

use serde_json::{Map, Value};

use crate::domain::order::{OrderSummary, ResultPage};
use crate::source::{SourceError, SourceResult};

/// Fields that may carry the order list, by priority.
pub const ITEM_LIST_FIELDS: &[&str] = &["order_list", "orders", "data"];

/// Fields that may carry the order identifier, by priority.
pub const ORDER_ID_FIELDS: &[&str] = &["do_id", "order_id", "id"];

/// Fields that may carry the total number of matching orders, by priority.
pub const TOTAL_ITEMS_FIELDS: &[&str] = &["total", "total_items"];

/// How the total page count is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCountStrategy {
    /// The field holds the page count itself.
    Explicit(&'static str),
    /// The field holds an item count; pages are `ceil(count / page_size)`.
    FromItemCount(&'static str),
}

pub const PAGE_COUNT_STRATEGIES: &[PageCountStrategy] = &[
    PageCountStrategy::Explicit("total_pages"),
    PageCountStrategy::FromItemCount("total"),
    PageCountStrategy::FromItemCount("total_items"),
];

impl PageCountStrategy {
    fn resolve(self, body: &Map<String, Value>, page_size: usize) -> Option<usize> {
        match self {
            PageCountStrategy::Explicit(field) => body.get(field).and_then(as_count),
            PageCountStrategy::FromItemCount(field) => body
                .get(field)
                .and_then(as_count)
                .map(|total| total.div_ceil(page_size)),
        }
    }
}

/// Returns the first accessor match in `fields` order.
fn first_match<'a, T>(
    body: &'a Map<String, Value>,
    fields: &[&str],
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    fields
        .iter()
        .find_map(|field| body.get(*field).and_then(&extract))
}

/// Non-negative integer given as a JSON integer, an integral float, or a
/// string of digits.
fn as_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|n| usize::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn text_field(item: &Map<String, Value>, field: &str) -> String {
    item.get(field).and_then(as_text).unwrap_or_default()
}

fn parse_order(position: usize, value: &Value) -> Option<OrderSummary> {
    let Some(item) = value.as_object() else {
        log::warn!("Skipping order #{position}: not an object");
        return None;
    };

    let Some(id) = first_match(item, ORDER_ID_FIELDS, as_text) else {
        log::warn!("Skipping order #{position}: no identifier");
        return None;
    };

    Some(OrderSummary {
        id,
        goods_name: text_field(item, "goods_name"),
        origin_name: text_field(item, "origin_name"),
        destination_name: text_field(item, "destination_name"),
    })
}

/// Turns a raw response body into a [`ResultPage`].
///
/// Only a body that is not a JSON object is rejected; every missing field
/// falls back to a value derived from what is present.
pub fn normalize_response(body: &Value, page_size: usize) -> SourceResult<ResultPage> {
    let Some(body) = body.as_object() else {
        return Err(SourceError::Malformed(format!(
            "expected a JSON object, got {}",
            kind_of(body)
        )));
    };
    let page_size = page_size.max(1);

    let raw_items = first_match(body, ITEM_LIST_FIELDS, Value::as_array);
    let listed = raw_items.map_or(0, Vec::len);
    let items: Vec<OrderSummary> = raw_items
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(position, value)| parse_order(position, value))
        .collect();

    let total_items = first_match(body, TOTAL_ITEMS_FIELDS, as_count).unwrap_or(listed);

    let total_pages = PAGE_COUNT_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.resolve(body, page_size))
        .unwrap_or_else(|| listed.div_ceil(page_size))
        .max(1);

    Ok(ResultPage {
        items,
        total_pages,
        total_items,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
