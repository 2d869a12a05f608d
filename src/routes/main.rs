use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::dto::main::BoardPage;
use crate::forms::main::{FilterTabQuery, SearchForm, ToggleFilterForm};
use crate::routes::{load_board, redirect, render_template, store_board, viewport_of};
use crate::services::main as board_service;
use crate::source::HttpOrderSource;

fn render_board(session: &Session, tera: &Tera, page: BoardPage) -> HttpResponse {
    store_board(session, &page.session);

    let mut context = match Context::from_serialize(&page.data) {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to build board context: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };
    context.insert("current_page", "index");

    render_template(tera, "main/index.html", &context)
}

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    session: Session,
    source: web::Data<HttpOrderSource>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let board = load_board(&session);
    let page = board_service::load_index_page(source.get_ref(), board, viewport_of(&req)).await;
    render_board(&session, &tera, page)
}

#[get("/search")]
pub async fn search(
    req: HttpRequest,
    session: Session,
    source: web::Data<HttpOrderSource>,
    tera: web::Data<Tera>,
    web::Query(form): web::Query<SearchForm>,
) -> impl Responder {
    let board = load_board(&session);
    match board_service::search_orders(source.get_ref(), board, form, viewport_of(&req)).await {
        Ok(page) => render_board(&session, &tera, page),
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}

#[get("/page/{page}")]
pub async fn show_page(
    req: HttpRequest,
    page: web::Path<usize>,
    session: Session,
    source: web::Data<HttpOrderSource>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let board = load_board(&session);
    let page = board_service::show_page(
        source.get_ref(),
        board,
        page.into_inner(),
        viewport_of(&req),
    )
    .await;
    render_board(&session, &tera, page)
}

#[post("/filter/open")]
pub async fn open_filter(session: Session) -> impl Responder {
    let mut board = load_board(&session);
    board_service::open_filter(&mut board);
    store_board(&session, &board);
    redirect("/")
}

#[post("/filter/close")]
pub async fn close_filter(session: Session) -> impl Responder {
    let mut board = load_board(&session);
    board_service::close_filter(&mut board);
    store_board(&session, &board);
    redirect("/")
}

#[post("/filter/dismiss")]
pub async fn dismiss_filter(req: HttpRequest, session: Session) -> impl Responder {
    let mut board = load_board(&session);
    board_service::dismiss_filter(&mut board, viewport_of(&req));
    store_board(&session, &board);
    redirect("/")
}

#[get("/filter/tab")]
pub async fn select_filter_tab(
    session: Session,
    web::Query(query): web::Query<FilterTabQuery>,
) -> impl Responder {
    let mut board = load_board(&session);
    board_service::select_filter_tab(&mut board, query);
    store_board(&session, &board);
    redirect("/")
}

#[post("/filter/toggle")]
pub async fn toggle_filter(
    session: Session,
    web::Form(form): web::Form<ToggleFilterForm>,
) -> impl Responder {
    let mut board = load_board(&session);
    if let Err(err) = board_service::toggle_filter_code(&mut board, form) {
        return HttpResponse::BadRequest().body(err.to_string());
    }
    store_board(&session, &board);
    redirect("/")
}

#[post("/filter/reset")]
pub async fn reset_filter(session: Session) -> impl Responder {
    let mut board = load_board(&session);
    board_service::reset_filter(&mut board);
    store_board(&session, &board);
    redirect("/")
}

#[post("/filter/apply")]
pub async fn apply_filter(req: HttpRequest, session: Session) -> impl Responder {
    let mut board = load_board(&session);
    board_service::apply_filter(&mut board, viewport_of(&req));
    store_board(&session, &board);
    redirect("/")
}
