//! Failure taxonomy for character fetches.
//!
//! Every variant is recoverable: the browser shows `user_message()` with a
//! retry action and keeps running.

use catalog::locale;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching a page of characters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP 404: no records match the filters
    #[error("HTTP 404: Not Found")]
    NotFound,

    /// Any other non-2xx response
    #[error("HTTP {status}: {reason}")]
    ServerError { status: u16, reason: String },

    /// The request could not be sent or completed
    #[error("Failed to fetch: {0}")]
    NetworkError(String),

    /// Anything else, including a body that is not a character page
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Classify a non-2xx HTTP status
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound;
        }
        Self::ServerError {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Classify a bare error message.
    ///
    /// ## Algorithm
    /// 1. Mentions "404" -> NotFound
    /// 2. Mentions "Failed to fetch" -> NetworkError
    /// 3. Mentions "HTTP" -> ServerError (status parsed when present)
    /// 4. Otherwise Unknown
    pub fn from_message(message: &str) -> Self {
        if message.contains("404") {
            Self::NotFound
        } else if message.contains("Failed to fetch") {
            Self::NetworkError(message.to_string())
        } else if message.contains("HTTP") {
            let status = message
                .split("HTTP")
                .nth(1)
                .and_then(|rest| {
                    rest.trim_start()
                        .split(|c: char| !c.is_ascii_digit())
                        .next()
                        .and_then(|digits| digits.parse::<u16>().ok())
                })
                .unwrap_or(0);
            Self::ServerError {
                status,
                reason: message.to_string(),
            }
        } else {
            Self::Unknown(message.to_string())
        }
    }

    /// Returns a localized message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => locale::NOT_FOUND_MESSAGE.to_string(),
            Self::NetworkError(_) => locale::NETWORK_ERROR_MESSAGE.to_string(),
            Self::ServerError { .. } => locale::server_error_message(&self.to_string()),
            Self::Unknown(_) => locale::UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status);
        }
        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::NetworkError(err.to_string());
        }
        if err.is_decode() || err.is_body() {
            return Self::Unknown(err.to_string());
        }
        Self::from_message(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_is_not_found() {
        assert_eq!(FetchError::from_status(StatusCode::NOT_FOUND), FetchError::NotFound);
        assert_eq!(FetchError::from_message("HTTP 404: Not Found"), FetchError::NotFound);
    }

    #[test]
    fn test_failed_to_fetch_is_network_error() {
        let err = FetchError::from_message("TypeError: Failed to fetch");
        assert!(matches!(err, FetchError::NetworkError(_)));
        assert_eq!(err.user_message(), locale::NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_other_statuses_are_server_errors() {
        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err,
            FetchError::ServerError {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
        assert_eq!(
            err.user_message(),
            "Error del servidor: HTTP 500: Internal Server Error"
        );

        match FetchError::from_message("HTTP 503: Service Unavailable") {
            FetchError::ServerError { status, .. } => assert_eq!(status, 503),
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[test]
    fn test_unclassified_message_is_unknown() {
        let err = FetchError::from_message("unexpected end of JSON input");
        assert!(matches!(err, FetchError::Unknown(_)));
        assert_eq!(err.user_message(), locale::UNKNOWN_ERROR_MESSAGE);
    }
}
