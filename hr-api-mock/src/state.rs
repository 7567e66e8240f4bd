//! In-memory store behind the mock API.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shared::models::{Attendance, DepartmentEmployee, DepartmentWithEmployees, Employee, Salary};
use shared::response::Page;
use uuid::Uuid;

/// Everything the mock keeps between requests.
#[derive(Debug, Default)]
pub struct MockStore {
    pub employees: Vec<Employee>,
    pub departments: Vec<DepartmentRecord>,
    pub salaries: Vec<Salary>,
    pub attendance: Vec<Attendance>,
    tokens: HashSet<String>,
    next_id: i64,
}

/// Department row as stored. The roster is a list of employee ids,
/// joined against the employee table whenever a response is rendered.
#[derive(Debug, Clone)]
pub struct DepartmentRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub member_ids: Vec<i64>,
}

impl MockStore {
    pub fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn mint_token(&mut self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.insert(token.clone());
        token
    }

    pub fn token_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn render_department(&self, record: &DepartmentRecord) -> DepartmentWithEmployees {
        let employees = record
            .member_ids
            .iter()
            .filter_map(|id| self.employee(*id))
            .map(|e| DepartmentEmployee::from(e.clone()))
            .collect();

        DepartmentWithEmployees {
            id: record.id,
            name: record.name.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            employees,
        }
    }
}

/// Slices `items` into one page. `total_pages` is at least 1 even for
/// an empty input, and a page past the end yields empty data.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_pages = (items.len() as u32).div_ceil(per_page).max(1);
    let start = (page as usize - 1) * per_page as usize;
    let data = items.iter().skip(start).take(per_page as usize).cloned().collect();
    Page::new(data, total_pages)
}
