//! HTTP handlers and the helpers they share.

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::models::session::{BOARD_SESSION_KEY, BoardSession};
use crate::shell::Viewport;

pub mod api;
pub mod main;

/// Client hints the board asks browsers to send.
pub const VIEWPORT_HINTS: &str = "Sec-CH-Viewport-Width, Viewport-Width";

/// Registers every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(api::api_v1_orders))
        .service(main::show_index)
        .service(main::search)
        .service(main::show_page)
        .service(main::open_filter)
        .service(main::close_filter)
        .service(main::dismiss_filter)
        .service(main::select_filter_tab)
        .service(main::toggle_filter)
        .service(main::reset_filter)
        .service(main::apply_filter);
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header(("Accept-CH", VIEWPORT_HINTS))
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Viewport derived from the client-hint headers of this request.
pub fn viewport_of(req: &HttpRequest) -> Viewport {
    let headers = req.headers();
    let hint = headers
        .get("Sec-CH-Viewport-Width")
        .or_else(|| headers.get("Viewport-Width"))
        .and_then(|value| value.to_str().ok());
    Viewport::from_hint(hint)
}

/// Board state of this browser, or the initial state when there is none.
pub fn load_board(session: &Session) -> BoardSession {
    match session.get::<BoardSession>(BOARD_SESSION_KEY) {
        Ok(Some(board)) => board,
        Ok(None) => BoardSession::default(),
        Err(e) => {
            log::warn!("Discarding unreadable board session: {e}");
            BoardSession::default()
        }
    }
}

pub fn store_board(session: &Session, board: &BoardSession) {
    if let Err(e) = session.insert(BOARD_SESSION_KEY, board) {
        log::error!("Failed to store board session: {e}");
    }
}
