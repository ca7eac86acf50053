use std::fmt;

use thiserror::Error;

/// Coarse classification of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    /// No response was received (connect failure, timeout).
    Network,
    Server,
    /// The request completed but its body could not be understood.
    Unknown,
}

impl ErrorCategory {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Validation,
            _ => Self::Server,
        }
    }

    /// Message used when the server does not supply one.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Unauthorized => "Please log in to continue",
            Self::Forbidden => "You do not have permission to access this resource",
            Self::NotFound => "The requested resource was not found",
            Self::Validation => "Invalid request. Please check your input.",
            Self::Network => "Network error. Please check your internet connection.",
            Self::Server => "Server error occurred",
            Self::Unknown => "An unexpected error occurred",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized API failure.
///
/// `status` is the HTTP status, or 0 when no response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} error (status {status}): {message}")]
pub struct ApiError {
    pub category: ErrorCategory,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Build from an HTTP status and the server's message, if any.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let category = ErrorCategory::from_status(status);
        Self {
            category,
            status,
            message: message.unwrap_or_else(|| category.default_message().to_string()),
        }
    }

    #[must_use]
    pub fn network(detail: impl fmt::Display) -> Self {
        tracing::debug!(%detail, "request failed without a response");
        Self {
            category: ErrorCategory::Network,
            status: 0,
            message: ErrorCategory::Network.default_message().to_string(),
        }
    }

    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            category: ErrorCategory::Unknown,
            status: 500,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        self.category == ErrorCategory::Network
    }

    /// 401 or 403.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(
            self.category,
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden
        )
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Text suitable for showing to an end user.
    ///
    /// Server-side failures are replaced by a generic message; the detailed
    /// text stays available through `Display` for logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.category {
            ErrorCategory::Server => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::unknown(format!("could not decode response: {error}"));
        }
        if let Some(status) = error.status() {
            return Self::from_status(status.as_u16(), None);
        }
        if error.is_timeout() || error.is_connect() || error.is_request() {
            return Self::network(error);
        }
        Self::unknown(error.to_string())
    }
}
