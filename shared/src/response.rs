//! API response envelopes
//!
//! List endpoints wrap their rows in [`Page`]; failing endpoints answer
//! with a bare [`ErrorBody`].

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of pages for the current filter
    pub total_pages: u32,
}

/// One page of a list endpoint
///
/// ```json
/// {
///     "data": [ ... ],
///     "meta": { "totalPages": 3 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total_pages: u32) -> Self {
        Self {
            data,
            meta: PageMeta { total_pages },
        }
    }

    /// Wrap an unpaginated collection as a one-page response
    pub fn single(data: Vec<T>) -> Self {
        Self::new(data, 1)
    }
}

/// Error payload returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
