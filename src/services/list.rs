//! Customer list controller: fetch orchestration, paging, and the
//! delete-confirmation flow.
//!
//! One controller instance lives per mounted list view and owns that view's
//! query, so two views never share filter state. Fetches are tagged with a
//! monotonic sequence number; a response is applied only when its tag is
//! still the latest, so a slow response can never overwrite the result of a
//! newer query.

use crate::directory::errors::DirectoryResult;
use crate::directory::{CustomerReader, CustomerWriter};
use crate::domain::customer::Customer;
use crate::pagination::{Paginated, ResultMeta};
use crate::query::{CustomerListQuery, FilterField, SortDirection, SortField};
use crate::services::{Flash, display_message};

/// Fixed message shown when a listing call fails.
pub const FETCH_FAILED: &str = "Failed to fetch customers.";
/// Fallback shown when a delete is rejected without a server message.
pub const DELETE_FAILED_FALLBACK: &str = "Failed to delete customer.";
/// Flash raised after a confirmed delete goes through.
pub const CUSTOMER_DELETED: &str = "Customer deleted successfully.";
/// Label rendered over an empty result set.
pub const NO_CUSTOMERS_FOUND: &str = "No customers found.";

/// Display states of the customer list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing has been fetched yet.
    Idle,
    /// A fetch for the current query is outstanding.
    Loading,
    /// The last fetch succeeded; an empty page is still a success.
    Success(Paginated<Customer>),
    /// The last fetch failed and no results are shown.
    Error(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

/// Ticket identifying one issued fetch; stale tickets no longer apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTag(u64);

/// State of the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletePrompt {
    pub show: bool,
    pub customer_id: Option<i64>,
}

/// Drives one customer list view.
#[derive(Debug)]
pub struct ListController {
    query: CustomerListQuery,
    state: ListState,
    seq: u64,
    prompt: DeletePrompt,
    flash: Option<Flash>,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListController {
    pub fn new() -> Self {
        Self {
            query: CustomerListQuery::default(),
            state: ListState::Idle,
            seq: 0,
            prompt: DeletePrompt::default(),
            flash: None,
        }
    }

    pub fn query(&self) -> &CustomerListQuery {
        &self.query
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn prompt(&self) -> DeletePrompt {
        self.prompt
    }

    /// Takes the pending one-shot notification, if any.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    /// Applies one filter edit. Any in-flight fetch is invalidated.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.query = self.query.clone().set_filter(field, value);
        self.invalidate();
    }

    /// Replaces the sort key and direction. Any in-flight fetch is
    /// invalidated.
    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.query = self.query.clone().set_sort(field, direction);
        self.invalidate();
    }

    /// Jumps to the given page, keeping the filters.
    pub fn set_page(&mut self, page: usize) {
        self.query = self.query.clone().set_page(page);
        self.invalidate();
    }

    /// Advances one page when the last fetched metadata allows it.
    pub fn next_page(&mut self) {
        if let ListState::Success(page) = &self.state {
            if page.has_next() {
                self.set_page(self.query.page + 1);
            }
        }
    }

    /// Moves back one page unless already on the first.
    pub fn prev_page(&mut self) {
        if let ListState::Success(page) = &self.state {
            if page.has_prev() {
                self.set_page(self.query.page - 1);
            }
        }
    }

    /// Resets every filter, the sorting and the page to the defaults.
    pub fn clear_filters(&mut self) {
        self.query = self.query.clone().clear();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.seq += 1;
        self.state = ListState::Loading;
    }

    /// Marks the start of a fetch for the current query. The returned tag
    /// must be handed back to [`finish_fetch`](Self::finish_fetch) with the
    /// outcome; only the most recently issued tag is applied.
    pub fn begin_fetch(&mut self) -> FetchTag {
        self.seq += 1;
        self.state = ListState::Loading;
        FetchTag(self.seq)
    }

    /// Applies a fetch outcome, unless a newer fetch or query edit has
    /// superseded the tag.
    pub fn finish_fetch(
        &mut self,
        tag: FetchTag,
        outcome: DirectoryResult<(ResultMeta, Vec<Customer>)>,
    ) {
        if tag.0 != self.seq {
            log::debug!("Discarding stale customer list response");
            return;
        }

        match outcome {
            Ok((meta, customers)) => {
                self.state = ListState::Success(Paginated::new(customers, self.query.page, meta));
            }
            Err(err) => {
                log::error!("Failed to fetch customers: {err}");
                self.state = ListState::Error(FETCH_FAILED.to_string());
            }
        }
    }

    /// Fetches the current page in one step.
    pub async fn refresh<D>(&mut self, directory: &D)
    where
        D: CustomerReader + ?Sized,
    {
        let tag = self.begin_fetch();
        let outcome = directory.list_customers(self.query.clone()).await;
        self.finish_fetch(tag, outcome);
    }

    /// Opens the delete confirmation prompt for one customer. Nothing is
    /// sent to the directory until the prompt is confirmed.
    pub fn request_delete(&mut self, customer_id: i64) {
        self.prompt = DeletePrompt {
            show: true,
            customer_id: Some(customer_id),
        };
    }

    /// Discards the prompt without touching the directory.
    pub fn cancel_delete(&mut self) {
        self.prompt = DeletePrompt::default();
    }

    /// Runs the confirmed delete. The prompt closes either way; on success
    /// the full list is re-fetched with the current query so removals on
    /// other pages are reflected too.
    pub async fn confirm_delete<D>(&mut self, directory: &D)
    where
        D: CustomerReader + CustomerWriter + ?Sized,
    {
        let Some(customer_id) = self.prompt.customer_id else {
            return;
        };
        self.prompt = DeletePrompt::default();

        match directory.remove_customer(customer_id).await {
            Ok(()) => {
                self.flash = Some(Flash::Success(CUSTOMER_DELETED.to_string()));
                self.refresh(directory).await;
            }
            Err(err) => {
                log::error!("Failed to delete customer {customer_id}: {err}");
                self.flash = Some(Flash::Error(display_message(&err, DELETE_FAILED_FALLBACK)));
            }
        }
    }
}
