//! Public-holidays client
//!
//! Talks to the external holidays provider rather than the HR API:
//! requests authenticate with an API key header, and the response is
//! cached for the life of the process.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use reqwest::Client;

use shared::models::Holiday;

use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Default holidays provider endpoint
pub const HOLIDAYS_BASE_URL: &str = "https://api.api-ninjas.com/v1/holidays";
/// Default country filter
pub const DEFAULT_COUNTRY: &str = "EG";

/// Client for the external public-holidays feed
#[derive(Debug, Clone)]
pub struct HolidayApi {
    client: Client,
    base_url: String,
    api_key: String,
    country: String,
    cache: Arc<Mutex<Option<Vec<Holiday>>>>,
}

impl HolidayApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: HOLIDAYS_BASE_URL.to_string(),
            api_key: api_key.into(),
            country: DEFAULT_COUNTRY.to_string(),
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Point at a different provider URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Fetch the country's holidays, bypassing the cache
    pub async fn fetch(&self) -> ApiResult<Vec<Holiday>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("country", self.country.as_str())])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Gateway::error_from_body(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Cached holidays, fetched once on first use
    pub async fn load(&self) -> ApiResult<Vec<Holiday>> {
        let cached = self.cache.lock().expect("holiday cache poisoned").clone();
        if let Some(holidays) = cached {
            tracing::debug!("serving holidays from cache");
            return Ok(holidays);
        }

        let fetched = self.fetch().await?;
        *self.cache.lock().expect("holiday cache poisoned") = Some(fetched.clone());
        Ok(fetched)
    }

    /// Holidays on or after `today`, soonest first
    pub async fn upcoming_from(&self, today: NaiveDate) -> ApiResult<Vec<Holiday>> {
        Ok(Self::filter_upcoming(self.load().await?, today))
    }

    /// Holidays from today onward
    pub async fn upcoming(&self) -> ApiResult<Vec<Holiday>> {
        self.upcoming_from(chrono::Utc::now().date_naive()).await
    }

    /// Entries with unparseable dates are dropped
    fn filter_upcoming(holidays: Vec<Holiday>, today: NaiveDate) -> Vec<Holiday> {
        let mut upcoming: Vec<(NaiveDate, Holiday)> = holidays
            .into_iter()
            .filter_map(|holiday| {
                NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d")
                    .ok()
                    .map(|date| (date, holiday))
            })
            .filter(|(date, _)| *date >= today)
            .collect();

        upcoming.sort_by_key(|(date, _)| *date);
        upcoming.into_iter().map(|(_, holiday)| holiday).collect()
    }
}
