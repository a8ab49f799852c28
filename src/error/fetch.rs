use thiserror::Error;

use crate::traits::HttpError;

/// Why the schedule could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Could not reach the endpoint
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport gave up waiting
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Endpoint is not a valid URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Server answered with a non-2xx status
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Body is not a conference document
    #[error("could not decode conference data: {0}")]
    Decode(String),

    #[error("fetch failed: {0}")]
    Other(String),
}

impl FetchError {
    /// Short explanation for the failure screen.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Connection(_) => {
                "Unable to reach the schedule server. Check your internet connection.".to_string()
            }
            FetchError::Timeout(_) => "The schedule server took too long to respond.".to_string(),
            FetchError::InvalidEndpoint(url) => format!("The schedule endpoint '{}' is not a valid URL.", url),
            FetchError::Status { status, .. } => match *status {
                404 => "The schedule was not found on the server.".to_string(),
                500..=599 => "The schedule server is having trouble. Try again later.".to_string(),
                _ => format!("The schedule server returned an error (HTTP {}).", status),
            },
            FetchError::Decode(_) => "The schedule server sent data this app cannot read.".to_string(),
            FetchError::Other(_) => "The schedule could not be loaded.".to_string(),
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(msg) => FetchError::Connection(msg),
            HttpError::Timeout(msg) => FetchError::Timeout(msg),
            HttpError::InvalidUrl(msg) => FetchError::InvalidEndpoint(msg),
            HttpError::Other(msg) => FetchError::Other(msg),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_error() {
        assert_eq!(
            FetchError::from(HttpError::ConnectionFailed("refused".into())),
            FetchError::Connection("refused".into())
        );
        assert_eq!(
            FetchError::from(HttpError::Timeout("slow".into())),
            FetchError::Timeout("slow".into())
        );
        assert_eq!(
            FetchError::from(HttpError::InvalidUrl("nope".into())),
            FetchError::InvalidEndpoint("nope".into())
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }

    #[test]
    fn test_display() {
        let err = FetchError::Status {
            status: 503,
            body: "down".into(),
        };
        assert_eq!(err.to_string(), "server returned HTTP 503");
    }

    #[test]
    fn test_user_message_by_status() {
        let not_found = FetchError::Status { status: 404, body: String::new() };
        assert!(not_found.user_message().contains("not found"));

        let server = FetchError::Status { status: 502, body: String::new() };
        assert!(server.user_message().contains("having trouble"));

        let teapot = FetchError::Status { status: 418, body: String::new() };
        assert!(teapot.user_message().contains("HTTP 418"));
    }
}
