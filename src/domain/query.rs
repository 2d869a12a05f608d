use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterSelection;
use crate::domain::types::PageNumber;

/// Number of order cards requested and rendered per page.
pub const PAGE_SIZE: usize = 6;

/// Order status constraint sent with every query.
pub const OPEN_ORDER_STATUS: i32 = 0;

/// Everything one order query depends on.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryState {
    pub keyword: String,
    pub filter: FilterSelection,
    pub page: PageNumber,
}

impl QueryState {
    /// `("", {}, 1)`.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Same filter, new keyword, back to page 1.
    #[must_use]
    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            filter: self.filter.clone(),
            page: PageNumber::FIRST,
        }
    }

    /// Same keyword, new filter, back to page 1.
    #[must_use]
    pub fn with_filter(&self, filter: FilterSelection) -> Self {
        Self {
            keyword: self.keyword.clone(),
            filter,
            page: PageNumber::FIRST,
        }
    }

    /// Same keyword and filter, different page.
    #[must_use]
    pub fn with_page(&self, page: PageNumber) -> Self {
        Self {
            keyword: self.keyword.clone(),
            filter: self.filter.clone(),
            page,
        }
    }
}
