#![allow(dead_code, unused_macros)]

use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Orders the fake upstream knows about for an ordinary keyword.
pub const UPSTREAM_TOTAL: usize = 13;

type Recorded = web::Data<Mutex<Vec<Value>>>;

/// Local stand-in for the order-query API.
///
/// Keywords steer the reply: `boom` answers 500, `garbage` answers a body
/// that is not JSON, `none` matches nothing; anything else pages through
/// [`UPSTREAM_TOTAL`] orders.
pub struct Upstream {
    base: String,
    recorded: Recorded,
}

impl Upstream {
    pub async fn start() -> Self {
        let recorded: Recorded = web::Data::new(Mutex::new(Vec::new()));
        let shared = recorded.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(shared.clone())
                .route("/api/orders", web::post().to(orders))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake upstream");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests().pop().expect("upstream saw no request")
    }
}

async fn orders(body: web::Json<Value>, recorded: Recorded) -> HttpResponse {
    let body = body.into_inner();
    recorded.lock().unwrap().push(body.clone());

    let keyword = body["keyword"].as_str().unwrap_or_default();
    match keyword {
        "boom" => return HttpResponse::InternalServerError().finish(),
        "garbage" => {
            return HttpResponse::Ok()
                .content_type("application/json")
                .body("{not json");
        }
        _ => {}
    }

    let total = if keyword == "none" { 0 } else { UPSTREAM_TOTAL };
    let page = body["page"].as_u64().unwrap_or(1) as usize;
    let limit = body["limit"].as_u64().unwrap_or(6) as usize;
    let start = (page.max(1) - 1) * limit;
    let end = (start + limit).min(total);

    let items: Vec<Value> = (start..end)
        .map(|n| {
            json!({
                "do_id": format!("DO-{:03}", n + 1),
                "goods_name": format!("Kain #{}", n + 1),
                "origin_name": "BANDUNG",
                "destination_name": "MEDAN",
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({ "order_list": items, "total": total, "limit": limit }))
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}/api/orders")
}

/// Builds the board application against `$source` with a throwaway key.
macro_rules! board_app {
    ($source:expr) => {{
        let tera = tera::Tera::new("templates/**/*").expect("templates");
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .configure(logkar_orders::routes::configure)
                .app_data(actix_web::web::Data::new(tera))
                .app_data(actix_web::web::Data::new($source)),
        )
        .await
    }};
}
