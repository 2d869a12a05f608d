use crate::controller::OrderQueryController;
use crate::dto::main::{BoardPage, IndexPageData};
use crate::forms::main::{FilterTabQuery, SearchForm, ToggleFilterForm};
use crate::models::session::BoardSession;
use crate::services::ServiceResult;
use crate::shell::{FilterPanel, Viewport};
use crate::source::OrderSource;

fn finish<S>(controller: OrderQueryController<S>, panel: FilterPanel, viewport: Viewport) -> BoardPage
where
    S: OrderSource,
{
    let data = IndexPageData::build(&controller, &panel, viewport);
    BoardPage {
        data,
        session: BoardSession {
            controller: controller.snapshot(),
            panel,
        },
    }
}

/// Re-fetches the query stored in the session and renders it.
pub async fn load_index_page<S>(source: S, session: BoardSession, viewport: Viewport) -> BoardPage
where
    S: OrderSource,
{
    let mut controller = OrderQueryController::restore(source, session.controller);
    controller.refresh().await;
    finish(controller, session.panel, viewport)
}

/// Runs a keyword search from the first page.
pub async fn search_orders<S>(
    source: S,
    session: BoardSession,
    form: SearchForm,
    viewport: Viewport,
) -> ServiceResult<BoardPage>
where
    S: OrderSource,
{
    let keyword = form.keyword().map_err(|err| {
        log::error!("Failed to validate search form: {err}");
        err
    })?;

    let mut controller = OrderQueryController::restore(source, session.controller);
    controller.set_keyword(keyword).await;
    Ok(finish(controller, session.panel, viewport))
}

/// Moves to `page`. A page outside the known bounds leaves the query alone
/// and re-renders the current page.
pub async fn show_page<S>(
    source: S,
    session: BoardSession,
    page: usize,
    viewport: Viewport,
) -> BoardPage
where
    S: OrderSource,
{
    let mut controller = OrderQueryController::restore(source, session.controller);
    if !controller.go_to_page(page).await {
        log::debug!("Ignoring request for page {page}");
        controller.refresh().await;
    }
    finish(controller, session.panel, viewport)
}

/// Commits the panel's working copy. When it changed, the stored query moves
/// to the new filter on page 1; the next render fetches it.
pub fn apply_filter(session: &mut BoardSession, viewport: Viewport) {
    if let Some(selection) = session.panel.apply(viewport.filter_presentation()) {
        session.controller.query = session.controller.query.with_filter(selection);
    }
}

pub fn open_filter(session: &mut BoardSession) {
    let active = session.controller.query.filter.clone();
    session.panel.open(&active);
}

pub fn close_filter(session: &mut BoardSession) {
    session.panel.close();
}

pub fn dismiss_filter(session: &mut BoardSession, viewport: Viewport) {
    session.panel.dismiss_outside(viewport.filter_presentation());
}

pub fn select_filter_tab(session: &mut BoardSession, query: FilterTabQuery) {
    if let Some(tab) = query.tab {
        session.panel.select_tab(tab);
    }
    match query.find.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => session.panel.set_search_term(term),
        _ => session.panel.clear_search_term(),
    }
}

pub fn toggle_filter_code(session: &mut BoardSession, form: ToggleFilterForm) -> ServiceResult<()> {
    let code = form.code().map_err(|err| {
        log::error!("Failed to validate filter toggle: {err}");
        err
    })?;
    session.panel.toggle(form.category, code.into_inner());
    Ok(())
}

pub fn reset_filter(session: &mut BoardSession) {
    session.panel.reset_all();
}
