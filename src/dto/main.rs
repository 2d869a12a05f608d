use serde::Serialize;

use crate::controller::OrderQueryController;
use crate::domain::catalog::Location;
use crate::domain::filter::{FilterCategory, FilterSelection};
use crate::domain::order::OrderSummary;
use crate::domain::query::PAGE_SIZE;
use crate::models::session::BoardSession;
use crate::pagination::Paginated;
use crate::shell::{FilterPanel, FilterPresentation, Viewport};
use crate::source::OrderSource;

/// One checkbox of the filter panel.
#[derive(Debug, Serialize)]
pub struct FilterOptionView {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterPanelView {
    pub open: bool,
    pub presentation: FilterPresentation,
    pub tab: FilterCategory,
    pub search_term: String,
    pub origin_count: usize,
    pub destination_count: usize,
    pub can_apply: bool,
    pub options: Vec<FilterOptionView>,
}

impl FilterPanelView {
    fn build(panel: &FilterPanel, presentation: FilterPresentation) -> Self {
        let tab = panel.tab();
        let options = panel
            .visible_options()
            .into_iter()
            .map(|Location { code, name }| FilterOptionView {
                code,
                name,
                selected: panel.working().contains(tab, code),
            })
            .collect();

        Self {
            open: panel.is_open(),
            presentation,
            tab,
            search_term: panel.search_term().to_string(),
            origin_count: panel.selected_count(FilterCategory::Origin),
            destination_count: panel.selected_count(FilterCategory::Destination),
            can_apply: panel.can_apply(),
            options,
        }
    }
}

/// Codes of the filter that currently constrains the results.
#[derive(Debug, Serialize)]
pub struct ActiveFilterView {
    pub origin: Vec<String>,
    pub destination: Vec<String>,
    pub count: usize,
}

impl From<&FilterSelection> for ActiveFilterView {
    fn from(selection: &FilterSelection) -> Self {
        let origin = selection.origin_codes();
        let destination = selection.destination_codes();
        let count = origin.len() + destination.len();
        Self {
            origin,
            destination,
            count,
        }
    }
}

/// Data required to render the order board template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub keyword: String,
    /// No items and nothing in flight: show the empty-state hint.
    pub empty: bool,
    pub orders: Paginated<OrderSummary>,
    pub total_items: usize,
    pub active_filter: ActiveFilterView,
    pub filter_panel: FilterPanelView,
    pub is_desktop: bool,
}

impl IndexPageData {
    pub fn build<S>(
        controller: &OrderQueryController<S>,
        panel: &FilterPanel,
        viewport: Viewport,
    ) -> Self
    where
        S: OrderSource,
    {
        let query = controller.query();
        let result = controller.result();
        let items: Vec<OrderSummary> = result.items.iter().take(PAGE_SIZE).cloned().collect();
        let empty = items.is_empty() && !controller.is_loading();

        Self {
            keyword: query.keyword.clone(),
            empty,
            orders: Paginated::new(items, query.page.get(), result.total_pages),
            total_items: result.total_items,
            active_filter: ActiveFilterView::from(&query.filter),
            filter_panel: FilterPanelView::build(panel, viewport.filter_presentation()),
            is_desktop: viewport.is_desktop(),
        }
    }
}

/// A rendered board plus the session state to store for the next request.
#[derive(Debug)]
pub struct BoardPage {
    pub data: IndexPageData,
    pub session: BoardSession,
}
