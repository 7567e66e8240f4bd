//! Employee API

use async_trait::async_trait;

use shared::models::{Employee, EmployeeCreate, EmployeeListQuery, EmployeeUpdate};
use shared::response::Page;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::sync::{Keyed, ListFilter, PageFetcher};

/// Employee endpoints
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    gateway: Gateway,
}

impl EmployeeApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// One page of employees, optionally filtered by name or email
    pub async fn list(&self, page: u32, per_page: u32, search: &str) -> ApiResult<Page<Employee>> {
        let query = EmployeeListQuery {
            page,
            per_page,
            search: search.to_string(),
        };
        self.gateway.get_query("/employee/get-all", &query).await
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ApiResult<Employee> {
        self.gateway.post("/employee/create", payload).await
    }

    pub async fn update(&self, id: i64, patch: &EmployeeUpdate) -> ApiResult<Employee> {
        self.gateway
            .patch(&format!("/employee/update/{id}"), patch)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway
            .delete(&format!("/employee/delete/{id}"))
            .await
    }
}

impl Keyed for Employee {
    fn key(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl PageFetcher<Employee> for EmployeeApi {
    async fn fetch(&self, filter: &ListFilter) -> ApiResult<Page<Employee>> {
        self.list(filter.page, filter.per_page, &filter.search).await
    }
}
