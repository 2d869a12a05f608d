use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test;
use logkar_orders::source::HttpOrderSource;

#[macro_use]
mod common;

/// Keeps the most recent session cookie, as a browser would.
#[derive(Default)]
struct Jar(Option<Cookie<'static>>);

impl Jar {
    fn absorb<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(cookie) = resp.response().cookies().next() {
            self.0 = Some(cookie.into_owned());
        }
    }

    fn get(&self, uri: &str) -> test::TestRequest {
        self.attach(test::TestRequest::get().uri(uri))
    }

    fn post(&self, uri: &str) -> test::TestRequest {
        self.attach(test::TestRequest::post().uri(uri))
    }

    fn attach(&self, req: test::TestRequest) -> test::TestRequest {
        match &self.0 {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }
}

async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn index_renders_first_page_of_cards() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("accept-ch"));

    let body = body_text(resp).await;
    assert!(body.contains("DO-001"));
    assert!(body.contains("DO-006"));
    assert!(!body.contains("DO-007"));
    assert!(body.contains("href=\"/page/2\""));
    assert!(body.contains("href=\"/page/3\""));
    assert!(!body.contains("Loading..."));

    let sent = upstream.last_request();
    assert_eq!(sent["keyword"], "");
    assert_eq!(sent["page"], 1);
    assert_eq!(sent["limit"], 6);
}

#[actix_web::test]
async fn search_and_paging_share_the_session() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());
    let mut jar = Jar::default();

    let resp = test::call_service(&app, jar.get("/search?keyword=kain").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    jar.absorb(&resp);
    assert_eq!(upstream.last_request()["keyword"], "kain");

    let resp = test::call_service(&app, jar.get("/page/3").to_request()).await;
    jar.absorb(&resp);
    let body = body_text(resp).await;
    assert!(body.contains("DO-013"));
    let sent = upstream.last_request();
    assert_eq!(sent["page"], 3);
    assert_eq!(sent["keyword"], "kain");

    // Out of range: the query stays on page 3.
    let resp = test::call_service(&app, jar.get("/page/9").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(upstream.last_request()["page"], 3);
}

#[actix_web::test]
async fn failed_upstream_renders_empty_state() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/search?keyword=boom")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Tidak ada data ditemukan."));
    assert!(!body.contains("class=\"pagination\""));
}

#[actix_web::test]
async fn overlong_keyword_is_rejected() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());

    let uri = format!("/search?keyword={}", "x".repeat(101));
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(upstream.requests().is_empty());
}

#[actix_web::test]
async fn popover_filter_flow() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());
    let mut jar = Jar::default();

    let resp = test::call_service(&app, jar.post("/filter/open").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    jar.absorb(&resp);

    let resp = test::call_service(&app, jar.get("/").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("filter-panel popover"));
    assert!(body.contains("BANDUNG : BDG"));
    assert!(!body.contains("class=\"overlay\""));

    let resp = test::call_service(
        &app,
        jar.post("/filter/toggle")
            .set_form([("category", "origin"), ("code", "BDG")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    jar.absorb(&resp);

    let resp = test::call_service(&app, jar.post("/filter/apply").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    jar.absorb(&resp);

    let resp = test::call_service(&app, jar.get("/").to_request()).await;
    jar.absorb(&resp);
    let body = body_text(resp).await;
    assert!(!body.contains("filter-panel"));
    assert!(body.contains("Filter (1)"));

    let sent = upstream.last_request();
    assert_eq!(sent["filter"]["origin_code"][0], "BDG");
    assert_eq!(sent["page"], 1);
}

#[actix_web::test]
async fn sidebar_filter_stays_open_until_outside_click() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());
    let mut jar = Jar::default();
    let mobile = ("Sec-CH-Viewport-Width", "375");

    let resp = test::call_service(&app, jar.post("/filter/open").to_request()).await;
    jar.absorb(&resp);

    let resp = test::call_service(
        &app,
        jar.get("/filter/tab?tab=destination&find=medan")
            .to_request(),
    )
    .await;
    jar.absorb(&resp);

    let resp = test::call_service(
        &app,
        jar.post("/filter/toggle")
            .set_form([("category", "destination"), ("code", "MDN")])
            .to_request(),
    )
    .await;
    jar.absorb(&resp);

    let resp = test::call_service(
        &app,
        jar.post("/filter/apply")
            .insert_header(mobile)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    jar.absorb(&resp);

    let resp = test::call_service(&app, jar.get("/").insert_header(mobile).to_request()).await;
    jar.absorb(&resp);
    let body = body_text(resp).await;
    assert!(body.contains("filter-panel sidebar"));
    assert!(body.contains("class=\"overlay\""));
    assert!(body.contains("MEDAN : MDN"));
    assert!(!body.contains("PEKANBARU : PKU"));
    assert_eq!(upstream.last_request()["filter"]["destination_code"][0], "MDN");

    let resp = test::call_service(
        &app,
        jar.post("/filter/dismiss")
            .insert_header(mobile)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    jar.absorb(&resp);

    let resp = test::call_service(&app, jar.get("/").insert_header(mobile).to_request()).await;
    let body = body_text(resp).await;
    assert!(!body.contains("filter-panel"));
}

#[actix_web::test]
async fn blank_toggle_code_is_rejected() {
    let upstream = common::Upstream::start().await;
    let app = board_app!(HttpOrderSource::new(&upstream.orders_url()).unwrap());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/filter/toggle")
            .set_form([("category", "origin"), ("code", " ")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
