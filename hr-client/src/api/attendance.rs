//! Attendance API

use async_trait::async_trait;
use chrono::NaiveDate;

use shared::models::{
    Attendance, AttendanceCreate, AttendanceListQuery, AttendanceStatus, AttendanceStatusUpdate,
};
use shared::response::Page;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::sync::{Keyed, ListFilter, PageFetcher};

/// Attendance endpoints
#[derive(Debug, Clone)]
pub struct AttendanceApi {
    gateway: Gateway,
}

impl AttendanceApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// One page of attendance records for a single day
    pub async fn list_by_date(
        &self,
        page: u32,
        per_page: u32,
        date: NaiveDate,
    ) -> ApiResult<Page<Attendance>> {
        let query = AttendanceListQuery {
            page,
            per_page,
            date,
        };
        self.gateway
            .get_query("/attendance/get-by-date", &query)
            .await
    }

    pub async fn create(&self, payload: &AttendanceCreate) -> ApiResult<Attendance> {
        self.gateway.post("/attendance/create", payload).await
    }

    /// Flip one record's status; all other fields stay untouched
    pub async fn set_status(&self, id: i64, status: AttendanceStatus) -> ApiResult<Attendance> {
        let patch = AttendanceStatusUpdate { status };
        self.gateway
            .patch(&format!("/attendance/update/{id}"), &patch)
            .await
    }
}

impl Keyed for Attendance {
    fn key(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl PageFetcher<Attendance> for AttendanceApi {
    async fn fetch(&self, filter: &ListFilter) -> ApiResult<Page<Attendance>> {
        match filter.date {
            Some(date) => self.list_by_date(filter.page, filter.per_page, date).await,
            // No day picked yet, nothing to show.
            None => Ok(Page::single(Vec::new())),
        }
    }
}
