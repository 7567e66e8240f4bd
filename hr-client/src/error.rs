//! Client error type

use thiserror::Error;

/// The single error shape every failed API call produces.
///
/// Transport failures and server-reported failures both collapse into
/// one human-readable message; the server's `message` field wins when
/// the body carries one.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = ApiError::new("Employee not found");
        assert_eq!(err.to_string(), "Employee not found");
    }
}
