//! Filter form state shared by the popover and sidebar presentations.
//!
//! The panel edits a working copy of the selection. The copy is compared
//! against the baseline taken when the panel was opened (or last applied) to
//! decide whether "apply" is enabled.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{self, Location};
use crate::domain::filter::{FilterCategory, FilterSelection};
use crate::shell::viewport::FilterPresentation;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterPanel {
    open: bool,
    tab: FilterCategory,
    search_term: String,
    working: FilterSelection,
    baseline: FilterSelection,
}

impl FilterPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tab(&self) -> FilterCategory {
        self.tab
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn working(&self) -> &FilterSelection {
        &self.working
    }

    /// Opens the panel with both the working copy and the baseline synced to
    /// the filter that is currently active.
    pub fn open(&mut self, active: &FilterSelection) {
        self.open = true;
        self.working = active.clone();
        self.baseline = active.clone();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click on the overlay. Only the sidebar has one.
    pub fn dismiss_outside(&mut self, presentation: FilterPresentation) {
        if presentation == FilterPresentation::Sidebar {
            self.close();
        }
    }

    pub fn select_tab(&mut self, tab: FilterCategory) {
        self.tab = tab;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search_term(&mut self) {
        self.search_term.clear();
    }

    pub fn toggle(&mut self, category: FilterCategory, code: impl Into<String>) -> bool {
        self.working.toggle(category, code)
    }

    pub fn reset_all(&mut self) {
        self.working.reset_all();
    }

    pub fn can_apply(&self) -> bool {
        self.working != self.baseline
    }

    /// Commits the working copy.
    ///
    /// Returns the selection to activate, or `None` when nothing changed. The
    /// popover closes itself afterwards; the sidebar stays open.
    pub fn apply(&mut self, presentation: FilterPresentation) -> Option<FilterSelection> {
        if !self.can_apply() {
            return None;
        }
        self.baseline = self.working.clone();
        if presentation == FilterPresentation::Popover {
            self.close();
        }
        Some(self.working.clone())
    }

    /// Catalog entries of the active tab matching the search term.
    pub fn visible_options(&self) -> Vec<Location> {
        catalog::search(self.tab, &self.search_term)
    }

    pub fn selected_count(&self, category: FilterCategory) -> usize {
        self.working.count(category)
    }
}
