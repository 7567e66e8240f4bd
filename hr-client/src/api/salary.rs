//! Salary API

use async_trait::async_trait;

use shared::models::{Salary, SalaryCreate, SalaryUpdate};
use shared::response::Page;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::sync::{Keyed, ListFilter, PageFetcher};

/// Salary endpoints
#[derive(Debug, Clone)]
pub struct SalaryApi {
    gateway: Gateway,
}

impl SalaryApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Full salary history, newest entries included; not paginated
    pub async fn history(&self) -> ApiResult<Vec<Salary>> {
        self.gateway.get("/salary/history").await
    }

    pub async fn create(&self, payload: &SalaryCreate) -> ApiResult<Salary> {
        self.gateway.post("/salary/create", payload).await
    }

    /// Adjust the schedule of an existing record. The amount is
    /// immutable; record a new salary to change it.
    pub async fn update(&self, id: i64, patch: &SalaryUpdate) -> ApiResult<Salary> {
        self.gateway
            .patch(&format!("/salary/update/{id}"), patch)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(&format!("/salary/delete/{id}")).await
    }
}

impl Keyed for Salary {
    fn key(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl PageFetcher<Salary> for SalaryApi {
    async fn fetch(&self, _filter: &ListFilter) -> ApiResult<Page<Salary>> {
        let history = self.history().await?;
        Ok(Page::single(history))
    }
}
