//! Order query controller.
//!
//! Owns the current [`QueryState`] and the last [`ResultPage`]. Every
//! operation derives the next query from an explicit snapshot, fetches it and
//! keeps the outcome of the most recently *issued* request. Completions that
//! arrive for an older request are dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::filter::FilterSelection;
use crate::domain::order::ResultPage;
use crate::domain::query::{PAGE_SIZE, QueryState};
use crate::domain::types::PageNumber;
use crate::source::{OrderQueryRequest, OrderSource, SourceResult, normalize_response};

/// A fetch that has been issued but not yet applied.
#[derive(Debug)]
pub struct FetchTicket {
    id: u64,
    pub request: OrderQueryRequest,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// The part of the controller state worth carrying between requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub query: QueryState,
    pub total_pages: usize,
}

pub struct OrderQueryController<S> {
    source: S,
    query: QueryState,
    result: ResultPage,
    loading: bool,
    latest_ticket: u64,
}

impl<S> OrderQueryController<S>
where
    S: OrderSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            query: QueryState::initial(),
            result: ResultPage::empty(),
            loading: false,
            latest_ticket: 0,
        }
    }

    /// Rebuilds a controller from a snapshot taken by [`Self::snapshot`].
    ///
    /// Items are not carried over; only the page bounds needed by
    /// [`Self::go_to_page`] are.
    pub fn restore(source: S, snapshot: ControllerSnapshot) -> Self {
        let mut controller = Self::new(source);
        controller.query = snapshot.query;
        controller.result.total_pages = snapshot.total_pages.max(1);
        controller
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            query: self.query.clone(),
            total_pages: self.result.total_pages,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn result(&self) -> &ResultPage {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// New keyword, current filter, page 1.
    pub async fn set_keyword(&mut self, keyword: impl Into<String>) {
        let next = self.query.with_keyword(keyword);
        self.fetch(next).await;
    }

    /// Current keyword, new filter, page 1.
    pub async fn apply_filter(&mut self, selection: FilterSelection) {
        let next = self.query.with_filter(selection);
        self.fetch(next).await;
    }

    /// Moves to page `page` when it lies within `1..=total_pages`.
    ///
    /// Returns `false` and leaves every piece of state untouched otherwise.
    pub async fn go_to_page(&mut self, page: usize) -> bool {
        if page > self.result.total_pages {
            return false;
        }
        let Ok(page) = PageNumber::new(page) else {
            return false;
        };
        let next = self.query.with_page(page);
        self.fetch(next).await;
        true
    }

    /// Re-issues the current query.
    pub async fn refresh(&mut self) {
        let current = self.query.clone();
        self.fetch(current).await;
    }

    /// Issues `query` and applies the outcome unless a newer fetch was issued
    /// in the meantime.
    pub async fn fetch(&mut self, query: QueryState) {
        let ticket = self.begin_fetch(query);
        let outcome = self.source.query_orders(&ticket.request).await;
        self.complete_fetch(ticket, outcome);
    }

    /// Records `query` as current, marks the controller as loading and hands
    /// out the ticket that [`Self::complete_fetch`] expects.
    pub fn begin_fetch(&mut self, query: QueryState) -> FetchTicket {
        self.latest_ticket += 1;
        self.loading = true;
        let request = OrderQueryRequest::from(&query);
        self.query = query;
        FetchTicket {
            id: self.latest_ticket,
            request,
        }
    }

    /// Applies a finished fetch.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    /// Failures of any kind leave an empty first page behind; they are logged
    /// and never returned.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: SourceResult<Value>) -> bool {
        if ticket.id != self.latest_ticket {
            log::debug!(
                "Dropping stale order response #{} (latest is #{})",
                ticket.id,
                self.latest_ticket
            );
            return false;
        }

        self.result = match outcome.and_then(|body| normalize_response(&body, PAGE_SIZE)) {
            Ok(page) => page,
            Err(e) => {
                log::error!("Failed to fetch orders: {e}");
                ResultPage::empty()
            }
        };
        self.loading = false;
        true
    }
}
