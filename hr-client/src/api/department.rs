//! Department API

use async_trait::async_trait;

use shared::models::{
    DepartmentCreate, DepartmentEmployee, DepartmentUpdate, DepartmentWithEmployees,
};
use shared::response::Page;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::sync::{Keyed, ListFilter, PageFetcher};

/// Department endpoints
#[derive(Debug, Clone)]
pub struct DepartmentApi {
    gateway: Gateway,
}

impl DepartmentApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Every department with its member roster; the server does not
    /// paginate this collection
    pub async fn list_with_employees(&self) -> ApiResult<Vec<DepartmentWithEmployees>> {
        self.gateway.get("/department/all/with-employees").await
    }

    /// Create a department; it starts with an empty roster
    pub async fn create(&self, payload: &DepartmentCreate) -> ApiResult<DepartmentWithEmployees> {
        self.gateway.post("/department/create", payload).await
    }

    /// Rename and replace the roster in one call
    pub async fn update(
        &self,
        id: i64,
        payload: &DepartmentUpdate,
    ) -> ApiResult<DepartmentWithEmployees> {
        self.gateway
            .patch(&format!("/department/update/{id}"), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway
            .delete(&format!("/department/delete/{id}"))
            .await
    }
}

impl Keyed for DepartmentWithEmployees {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for DepartmentEmployee {
    fn key(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl PageFetcher<DepartmentWithEmployees> for DepartmentApi {
    async fn fetch(&self, _filter: &ListFilter) -> ApiResult<Page<DepartmentWithEmployees>> {
        let departments = self.list_with_employees().await?;
        Ok(Page::single(departments))
    }
}
