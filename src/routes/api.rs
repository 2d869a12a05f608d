use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::api::OrdersQuery;
use crate::services::api as api_service;
use crate::source::HttpOrderSource;

#[get("/v1/orders")]
pub async fn api_v1_orders(req: HttpRequest, source: web::Data<HttpOrderSource>) -> impl Responder {
    let params: OrdersQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(e) => {
            log::error!("Failed to parse orders query: {e}");
            return HttpResponse::BadRequest().finish();
        }
    };

    match api_service::list_orders(source.get_ref(), params).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list orders: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}
