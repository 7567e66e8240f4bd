//! Client configuration

use std::time::Duration;

use crate::sync::ListOptions;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default trailing-edge debounce window for search input
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Default page size for list views
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Configuration for connecting to the HR API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Debounce window for search input, in milliseconds
    pub debounce_ms: u64,

    /// Page size for list views
    pub per_page: u32,
}

impl ClientConfig {
    /// Create a new configuration with default tuning
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the search debounce window
    pub fn with_debounce_ms(mut self, millis: u64) -> Self {
        self.debounce_ms = millis;
        self
    }

    /// Set the list page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// List tuning derived from this configuration
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            per_page: self.per_page,
            debounce: Duration::from_millis(self.debounce_ms),
            ..ListOptions::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
