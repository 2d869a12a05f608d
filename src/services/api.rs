use crate::controller::OrderQueryController;
use crate::domain::filter::FilterSelection;
use crate::domain::query::QueryState;
use crate::domain::types::PageNumber;
use crate::dto::api::{OrdersQuery, OrdersResponse};
use crate::forms::main::location_code;
use crate::pagination::{DEFAULT_WINDOW_DELTA, pagination_window};
use crate::services::{ServiceError, ServiceResult};
use crate::source::OrderSource;

fn location_codes(raw: &[String]) -> ServiceResult<Vec<String>> {
    raw.iter()
        .map(|code| {
            location_code(code)
                .map(|code| code.into_inner())
                .map_err(|err| {
                    log::error!("Rejecting location code '{code}': {err}");
                    ServiceError::from(err)
                })
        })
        .collect()
}

/// Runs one stateless order query for the JSON API.
pub async fn list_orders<S>(source: S, params: OrdersQuery) -> ServiceResult<OrdersResponse>
where
    S: OrderSource,
{
    let page = PageNumber::new(params.page.unwrap_or(1))
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let query = QueryState {
        keyword: params
            .keyword
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        filter: FilterSelection::from_codes(
            location_codes(&params.origin)?,
            location_codes(&params.destination)?,
        ),
        page,
    };

    let mut controller = OrderQueryController::new(source);
    controller.fetch(query).await;

    let result = controller.result();
    let current = controller.query().page.get();
    Ok(OrdersResponse {
        items: result.items.clone(),
        page: current,
        total_pages: result.total_pages,
        total_items: result.total_items,
        pages: pagination_window(current, result.total_pages, DEFAULT_WINDOW_DELTA),
    })
}
