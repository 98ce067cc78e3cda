use serde::{Deserialize, Serialize};

/// Default number of customers requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Listing metadata the directory returns alongside each page of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultMeta {
    /// Customers matching the current filters across all pages.
    #[serde(rename = "total")]
    pub total_count: usize,
    /// Pages available at the requested page size.
    #[serde(rename = "pages")]
    pub page_count: usize,
}

/// One fetched page plus everything needed to draw the paging controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub meta: ResultMeta,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, meta: ResultMeta) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        Self {
            items,
            page: current_page,
            meta,
        }
    }

    /// A previous page exists to move back to.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// A further page exists to advance to.
    pub fn has_next(&self) -> bool {
        self.page < self.meta.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position caption, e.g. `Page 2 of 7`. An empty result set reads
    /// `Page 1 of 0` with both controls disabled.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.meta.page_count)
    }
}
