//! List synchronization driver
//!
//! Owns one background task per list view. Inputs arrive over a
//! command channel, search input is debounced on the trailing edge,
//! fetches run as detached tasks tagged with a sequence number, and
//! every accepted transition is published over a watch channel.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::{mpsc, watch};
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use shared::response::Page;

use crate::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_PER_PAGE};
use crate::error::ApiResult;

use super::state::{
    ItemChange, Keyed, ListAction, ListEvent, ListFilter, ListState, LoadPhase, reduce,
};

/// Fetches one page of records for a filter.
///
/// Implemented by the per-entity API clients; tests substitute fakes.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync + 'static {
    async fn fetch(&self, filter: &ListFilter) -> ApiResult<Page<T>>;
}

/// Tuning for one controller
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub per_page: u32,
    /// Trailing-edge debounce window for search input
    pub debounce: Duration,
    /// Initial day filter, for date-scoped lists
    pub date: Option<NaiveDate>,
    /// When set, a blank search clears the list instead of fetching
    pub skip_empty_search: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            date: None,
            skip_empty_search: false,
        }
    }
}

enum ListCommand<T> {
    SetSearch(String),
    SetPage(u32),
    SetPerPage(u32),
    SetDate(Option<NaiveDate>),
    Refresh,
    Apply(ItemChange<T>),
}

/// Cloneable input side of a running controller
#[derive(Debug)]
pub struct ListHandle<T> {
    cmd_tx: mpsc::UnboundedSender<ListCommand<T>>,
}

impl<T> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
        }
    }
}

impl<T> ListHandle<T> {
    /// Queue a search-text change; the fetch fires after the debounce
    /// window goes quiet
    pub fn set_search(&self, term: impl Into<String>) {
        let _ = self.cmd_tx.send(ListCommand::SetSearch(term.into()));
    }

    /// Jump to a page (1-based); fetches immediately
    pub fn set_page(&self, page: u32) {
        let _ = self.cmd_tx.send(ListCommand::SetPage(page));
    }

    /// Change the page size; fetches immediately
    pub fn set_per_page(&self, per_page: u32) {
        let _ = self.cmd_tx.send(ListCommand::SetPerPage(per_page));
    }

    /// Change the day filter; fetches immediately
    pub fn set_date(&self, date: Option<NaiveDate>) {
        let _ = self.cmd_tx.send(ListCommand::SetDate(date));
    }

    /// Force a fetch for the current inputs
    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(ListCommand::Refresh);
    }

    /// Reconcile a server-confirmed mutation into the items
    pub fn apply(&self, change: ItemChange<T>) {
        let _ = self.cmd_tx.send(ListCommand::Apply(change));
    }
}

/// Handle to one synchronized list view.
///
/// Dropping the controller cancels the driver task; responses that
/// resolve afterwards go nowhere.
pub struct ListController<T> {
    handle: ListHandle<T>,
    state_rx: watch::Receiver<ListState<T>>,
    cancel: CancellationToken,
}

impl<T> ListController<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    /// Spawn the driver task and issue the initial fetch
    pub fn spawn(fetcher: impl PageFetcher<T>, options: ListOptions) -> Self {
        let fetcher: Arc<dyn PageFetcher<T>> = Arc::new(fetcher);
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();

        let state = ListState::new(options.per_page.max(1), options.date);
        let (state_tx, state_rx) = watch::channel(state.clone());
        let cancel = CancellationToken::new();

        let mut driver = Driver {
            fetcher,
            options,
            state,
            state_tx,
            result_tx,
            next_seq: 0,
            last_issued: None,
            pending_search: None,
            debounce_deadline: None,
        };

        let shutdown = cancel.clone();
        tokio::spawn(async move {
            driver.issue_fetch(true);

            loop {
                // With no debounce pending, park the timer far away.
                let deadline = driver
                    .debounce_deadline
                    .unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));
                let debounce_armed = driver.debounce_deadline.is_some();

                tokio::select! {
                    _ = shutdown.cancelled() => break,

                    _ = tokio::time::sleep_until(deadline), if debounce_armed => {
                        driver.debounce_deadline = None;
                        driver.flush_search();
                    }

                    Some(cmd) = cmd_rx.recv() => driver.handle_command(cmd),

                    Some(outcome) = result_rx.recv() => driver.handle_outcome(outcome),
                }
            }

            tracing::debug!("list driver stopped");
        });

        Self {
            handle: ListHandle { cmd_tx },
            state_rx,
            cancel,
        }
    }

    /// A cloneable input handle, e.g. for a mutation coordinator
    pub fn handle(&self) -> ListHandle<T> {
        self.handle.clone()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ListState<T> {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn watch(&self) -> watch::Receiver<ListState<T>> {
        self.state_rx.clone()
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.handle.set_search(term);
    }

    pub fn set_page(&self, page: u32) {
        self.handle.set_page(page);
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.handle.set_per_page(per_page);
    }

    pub fn set_date(&self, date: Option<NaiveDate>) {
        self.handle.set_date(date);
    }

    pub fn refresh(&self) {
        self.handle.refresh();
    }

    pub fn apply(&self, change: ItemChange<T>) {
        self.handle.apply(change);
    }
}

impl<T> Drop for ListController<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct FetchOutcome<T> {
    seq: u64,
    result: ApiResult<Page<T>>,
}

struct Driver<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    options: ListOptions,
    state: ListState<T>,
    state_tx: watch::Sender<ListState<T>>,
    result_tx: mpsc::UnboundedSender<FetchOutcome<T>>,
    next_seq: u64,
    last_issued: Option<ListFilter>,
    pending_search: Option<String>,
    debounce_deadline: Option<Instant>,
}

impl<T> Driver<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    fn handle_command(&mut self, cmd: ListCommand<T>) {
        match cmd {
            ListCommand::SetSearch(term) => {
                if self.options.skip_empty_search && term.trim().is_empty() {
                    // Blanking the query clears the list right away,
                    // without waiting out the debounce window.
                    self.pending_search = None;
                    self.debounce_deadline = None;
                    self.state.search.clear();
                    self.issue_fetch(true);
                    return;
                }

                self.pending_search = Some(term);
                self.debounce_deadline = Some(Instant::now() + self.options.debounce);
            }

            ListCommand::SetPage(page) => {
                let page = page.max(1);
                if page != self.state.page {
                    self.state.page = page;
                    self.issue_fetch(false);
                }
            }

            ListCommand::SetPerPage(per_page) => {
                let per_page = per_page.max(1);
                if per_page != self.state.per_page {
                    self.state.per_page = per_page;
                    self.issue_fetch(false);
                }
            }

            ListCommand::SetDate(date) => {
                if date != self.state.date {
                    self.state.date = date;
                    self.issue_fetch(false);
                }
            }

            ListCommand::Refresh => self.issue_fetch(true),

            ListCommand::Apply(change) => self.apply_event(ListEvent::Mutated(change)),
        }
    }

    /// Promote the debounced search text to the effective filter
    fn flush_search(&mut self) {
        let Some(term) = self.pending_search.take() else {
            return;
        };

        if term == self.state.search {
            return;
        }

        self.state.search = term;
        self.issue_fetch(false);
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome<T>) {
        let event = match outcome.result {
            Ok(page) => ListEvent::FetchSucceeded {
                seq: outcome.seq,
                page,
            },
            Err(err) => ListEvent::FetchFailed {
                seq: outcome.seq,
                message: err.to_string(),
            },
        };
        self.apply_event(event);
    }

    fn apply_event(&mut self, event: ListEvent<T>) {
        let action = reduce(&mut self.state, event);
        self.publish();

        if action == Some(ListAction::Refetch) {
            self.issue_fetch(true);
        }
    }

    /// Issue a fetch for the current filter unless the previous fetch
    /// already covered it
    fn issue_fetch(&mut self, force: bool) {
        if self.options.skip_empty_search && self.state.search.trim().is_empty() {
            // Candidate mode with a blank query shows nothing and asks
            // for nothing. Bump the sequence so in-flight responses
            // cannot repopulate the cleared list.
            self.next_seq += 1;
            self.state.seq = self.next_seq;
            self.state.items.clear();
            self.state.total_pages = 1;
            self.state.phase = LoadPhase::Idle;
            self.state.last_error = None;
            self.last_issued = None;
            self.publish();
            return;
        }

        let filter = self.state.filter();
        if !force && self.last_issued.as_ref() == Some(&filter) {
            tracing::debug!("inputs unchanged, keeping previous result");
            return;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.last_issued = Some(filter.clone());
        self.apply_event(ListEvent::FetchStarted { seq });

        let fetcher = Arc::clone(&self.fetcher);
        let result_tx = self.result_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch(&filter).await;
            let _ = result_tx.send(FetchOutcome { seq, result });
        });
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state.clone());
    }
}
