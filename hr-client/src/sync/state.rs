//! List state machine
//!
//! Pure data plus a transition function, no I/O. The controller drives
//! this from its event loop; unit tests drive it directly.

use chrono::NaiveDate;

use shared::response::Page;

/// Key accessor for records held in a synchronized list
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Fetch parameters for one page load.
///
/// Two filters comparing equal means the previous response still
/// answers the question and no refetch is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub date: Option<NaiveDate>,
}

/// Load phase of a list: `Idle` until the first fetch is issued, then
/// `Loading` until the newest fetch settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Observable state of one synchronized list
#[derive(Debug, Clone)]
pub struct ListState<T> {
    /// Current page, 1-based
    pub page: u32,
    pub per_page: u32,
    /// Effective (already debounced) search text
    pub search: String,
    /// Day filter, for date-scoped lists
    pub date: Option<NaiveDate>,
    pub items: Vec<T>,
    pub total_pages: u32,
    pub phase: LoadPhase,
    /// Message from the most recent failed fetch
    pub last_error: Option<String>,
    /// Sequence number of the newest issued fetch; older responses are
    /// discarded on arrival
    pub(crate) seq: u64,
}

impl<T> ListState<T> {
    pub(crate) fn new(per_page: u32, date: Option<NaiveDate>) -> Self {
        Self {
            page: 1,
            per_page,
            search: String::new(),
            date,
            items: Vec::new(),
            total_pages: 1,
            phase: LoadPhase::Idle,
            last_error: None,
            seq: 0,
        }
    }

    /// Fetch parameters for the current inputs
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            page: self.page,
            per_page: self.per_page,
            search: self.search.clone(),
            date: self.date,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// Events fed through [`reduce`]
#[derive(Debug)]
pub enum ListEvent<T> {
    FetchStarted { seq: u64 },
    FetchSucceeded { seq: u64, page: Page<T> },
    FetchFailed { seq: u64, message: String },
    /// A server-confirmed mutation to reconcile into the items
    Mutated(ItemChange<T>),
}

/// A confirmed mutation to one record
#[derive(Debug, Clone)]
pub enum ItemChange<T> {
    Created(T),
    Updated(T),
    Removed(i64),
}

/// Follow-up the driver must perform after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// The current page fell out of range; fetch again at the clamped page
    Refetch,
}

/// Apply one event to the state, returning any required follow-up.
///
/// Responses whose sequence number is older than the newest issued
/// fetch are superseded and leave the state untouched.
pub fn reduce<T: Keyed>(state: &mut ListState<T>, event: ListEvent<T>) -> Option<ListAction> {
    match event {
        ListEvent::FetchStarted { seq } => {
            state.seq = seq;
            state.phase = LoadPhase::Loading;
            None
        }

        ListEvent::FetchSucceeded { seq, page } => {
            if seq != state.seq {
                tracing::debug!(stale = seq, current = state.seq, "discarding superseded response");
                return None;
            }

            state.items = page.data;
            state.total_pages = page.meta.total_pages.max(1);
            state.phase = LoadPhase::Loaded;
            state.last_error = None;

            // The filtered set shrank under us; step back to the last
            // page that still exists.
            if state.page > state.total_pages {
                state.page = state.total_pages;
                return Some(ListAction::Refetch);
            }
            None
        }

        ListEvent::FetchFailed { seq, message } => {
            if seq != state.seq {
                tracing::debug!(stale = seq, current = state.seq, "discarding superseded failure");
                return None;
            }

            tracing::warn!(error = %message, "list fetch failed");
            state.phase = LoadPhase::Failed;
            state.last_error = Some(message);
            None
        }

        ListEvent::Mutated(change) => apply_change(state, change),
    }
}

fn apply_change<T: Keyed>(state: &mut ListState<T>, change: ItemChange<T>) -> Option<ListAction> {
    match change {
        ItemChange::Created(item) => {
            state.items.push(item);
            None
        }

        ItemChange::Updated(item) => {
            if let Some(slot) = state
                .items
                .iter_mut()
                .find(|existing| existing.key() == item.key())
            {
                *slot = item;
            }
            None
        }

        ItemChange::Removed(id) => {
            state.items.retain(|item| item.key() != id);

            // Removing the last row of a deep page leaves it empty;
            // step back one page and refill.
            if state.items.is_empty() && state.page > 1 {
                state.page -= 1;
                return Some(ListAction::Refetch);
            }
            None
        }
    }
}
