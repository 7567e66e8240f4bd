//! List synchronization
//!
//! Debounced fetching, stale-response supersession, and
//! confirm-then-apply reconciliation for the list views.

pub mod controller;
pub mod membership;
pub mod mutation;
pub mod state;

pub use controller::{ListController, ListHandle, ListOptions, PageFetcher};
pub use membership::{MembershipEditor, MembershipSet, Toggle};
pub use mutation::Mutator;
pub use state::{
    ItemChange, Keyed, ListAction, ListEvent, ListFilter, ListState, LoadPhase, reduce,
};
