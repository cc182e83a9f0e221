//! Uniform outcome of a stations API call

use std::fmt;

/// Error code used when the remote error body carries no code
pub const UNKNOWN_ERROR: &str = "UNKNOWN";
/// Error code used when the request exceeded the configured timeout
pub const TIMEOUT_ERROR: &str = "TIMEOUT";
/// Error code used when the request never produced an HTTP response
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Error code used when a 2xx body could not be understood
pub const INVALID_RESPONSE_ERROR: &str = "INVALID_RESPONSE";

/// Why a stations API call did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// `None` when no HTTP response was received
    pub http_status: Option<u16>,
    pub error_code: String,
}

impl ApiFailure {
    pub fn http(status: u16, error_code: impl Into<String>) -> Self {
        Self {
            http_status: Some(status),
            error_code: error_code.into(),
        }
    }

    pub fn timeout() -> Self {
        Self {
            http_status: None,
            error_code: TIMEOUT_ERROR.to_string(),
        }
    }

    pub fn network() -> Self {
        Self {
            http_status: None,
            error_code: NETWORK_ERROR.to_string(),
        }
    }

    pub fn invalid_response(status: u16) -> Self {
        Self::http(status, INVALID_RESPONSE_ERROR)
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "{} (HTTP {})", self.error_code, status),
            None => write!(f, "{}", self.error_code),
        }
    }
}

/// Every stations API call resolves to exactly one of these variants;
/// transport errors never escape the client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => ApiResult::Success(f(data)),
            ApiResult::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(ApiFailure::http(409, "NO_BIKES").to_string(), "NO_BIKES (HTTP 409)");
        assert_eq!(ApiFailure::timeout().to_string(), "TIMEOUT");
    }

    #[test]
    fn test_map_keeps_failure() {
        let failed: ApiResult<u32> = ApiResult::Failure(ApiFailure::network());
        assert_eq!(failed.map(|n| n + 1), ApiResult::Failure(ApiFailure::network()));
        assert_eq!(ApiResult::Success(1).map(|n| n + 1), ApiResult::Success(2));
    }
}
