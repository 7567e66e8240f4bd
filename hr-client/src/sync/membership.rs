//! Department membership editing
//!
//! Membership edits are batched locally and committed as one
//! full-roster department update; candidate lookup runs its own
//! debounced search that only fires for a non-blank query.

use std::time::Duration;

use shared::models::{DepartmentEmployee, DepartmentUpdate, DepartmentWithEmployees, Employee};

use crate::api::{DepartmentApi, EmployeeApi};
use crate::error::ApiResult;

use super::controller::{ListController, ListOptions};
use super::state::Keyed;

/// Candidate search asks for one page big enough to hold every match
const CANDIDATE_PAGE_SIZE: u32 = 100_000;

/// Outcome of a membership toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Insertion-ordered set of records keyed by id
#[derive(Debug, Clone)]
pub struct MembershipSet<T> {
    items: Vec<T>,
}

impl<T> Default for MembershipSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> MembershipSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing roster, keeping the first entry per id
    pub fn seed(items: Vec<T>) -> Self {
        let mut set = Self::new();
        for item in items {
            if !set.contains(item.key()) {
                set.items.push(item);
            }
        }
        set
    }

    /// Add the record if absent, remove it if present
    pub fn toggle(&mut self, item: T) -> Toggle {
        let id = item.key();
        if let Some(pos) = self.items.iter().position(|existing| existing.key() == id) {
            self.items.remove(pos);
            Toggle::Removed
        } else {
            self.items.push(item);
            Toggle::Added
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.key() == id)
    }

    /// Ids in insertion order, for a full-roster update payload
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(Keyed::key).collect()
    }

    /// Replace the whole set with the server's canonical roster
    pub fn replace(&mut self, items: Vec<T>) {
        *self = Self::seed(items);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Edits one department's employee roster.
///
/// Toggles only touch the local set; nothing reaches the server until
/// [`MembershipEditor::commit`]. A failed commit leaves the batched
/// set intact so the user can retry.
pub struct MembershipEditor {
    department: DepartmentWithEmployees,
    members: MembershipSet<DepartmentEmployee>,
    candidates: ListController<Employee>,
    departments: DepartmentApi,
}

impl MembershipEditor {
    /// Open an editor seeded with the department's current roster
    pub fn open(
        department: DepartmentWithEmployees,
        employees: EmployeeApi,
        departments: DepartmentApi,
        debounce: Duration,
    ) -> Self {
        let members = MembershipSet::seed(department.employees.clone());
        let candidates = ListController::spawn(
            employees,
            ListOptions {
                per_page: CANDIDATE_PAGE_SIZE,
                debounce,
                date: None,
                skip_empty_search: true,
            },
        );

        Self {
            department,
            members,
            candidates,
            departments,
        }
    }

    pub fn department(&self) -> &DepartmentWithEmployees {
        &self.department
    }

    pub fn members(&self) -> &MembershipSet<DepartmentEmployee> {
        &self.members
    }

    /// The candidate search list; watch it to render matches
    pub fn candidates(&self) -> &ListController<Employee> {
        &self.candidates
    }

    /// Update the candidate query text
    pub fn search(&self, term: impl Into<String>) {
        self.candidates.set_search(term);
    }

    /// Toggle a record in or out of the batched roster
    pub fn toggle(&mut self, employee: impl Into<DepartmentEmployee>) -> Toggle {
        let outcome = self.members.toggle(employee.into());
        if outcome == Toggle::Added {
            // Picking a match resets the query box.
            self.candidates.set_search("");
        }
        outcome
    }

    /// Send the batched roster as one full-replacement update.
    ///
    /// On success the canonical response becomes the new baseline; on
    /// failure the local set is left as the user built it.
    pub async fn commit(&mut self, name: impl Into<String>) -> ApiResult<DepartmentWithEmployees> {
        let update = DepartmentUpdate {
            name: name.into(),
            employees: self.members.ids(),
        };

        let updated = self.departments.update(self.department.id, &update).await?;
        self.members.replace(updated.employees.clone());
        self.department = updated.clone();
        Ok(updated)
    }
}
