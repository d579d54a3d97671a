use crate::api::error::ApiError;

/// Event severity, ordered ascending so thresholds compare directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: rate limiting and temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: the backend answered but rejected the request outright
            ApiError::Http { .. } => LogLevel::Error,

            // Critical: the backend answered with a body we cannot read
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn server_side_failures_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
    }

    #[test]
    fn rate_limiting_is_quiet() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
    }

    #[test]
    fn client_side_failures_and_bad_bodies_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);

        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }
}
