//! Error types for the Raito SDK
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Paginated listings surface the same type through `ListItem::Error`.

use thiserror::Error;

/// The main error type for the Raito SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Undefined environment variable in config: {variable}")]
    UndefinedVariable { variable: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("OAuth2 error: {message}")]
    OAuth2 { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("GraphQL errors: {}", messages.join("; "))]
    Graphql { messages: Vec<String> },

    /// A transport failure wrapped once by a resource client
    #[error("client error: {0}")]
    Client(Box<Error>),

    // ============================================================================
    // Domain Errors
    // ============================================================================
    #[error("permission denied for {operation}: {message}")]
    PermissionDenied { operation: String, message: String },

    #[error("{resource} '{id}' not found: {message}")]
    NotFound {
        resource: String,
        id: String,
        message: String,
    },

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("protocol violation: {message}")]
    ProtocolViolation { message: String },

    #[error("unexpected response type '{type_name}' in {context}")]
    UnexpectedResponse { context: String, type_name: String },

    // ============================================================================
    // Lifecycle
    // ============================================================================
    #[error("operation cancelled")]
    Cancelled,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Coarse classification of an [`Error`]
///
/// Domain conditions keep their identity through wrapping, so callers can
/// branch on `kind()` without matching every transport variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, HTTP, decoding or GraphQL-level failure
    Transport,
    /// The caller may not perform the operation
    PermissionDenied,
    /// The addressed resource does not exist
    NotFound,
    /// The server broke the paging or response contract
    ProtocolViolation,
    /// A response variant the client does not know about
    Unexpected,
    /// Invalid configuration or credentials setup
    Config,
    /// The execution context was cancelled
    Cancelled,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Wrap a transport error the way resource clients report it
    ///
    /// Domain, protocol and cancellation errors pass through unwrapped.
    pub fn client(inner: Error) -> Self {
        match inner {
            Self::Client(_)
            | Self::Cancelled
            | Self::PermissionDenied { .. }
            | Self::NotFound { .. }
            | Self::ProtocolViolation { .. }
            | Self::UnexpectedResponse { .. } => inner,
            other => Self::Client(Box::new(other)),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(
        resource: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a protocol violation error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            message: message.into(),
        }
    }

    /// Create an unexpected response error
    pub fn unexpected(context: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            context: context.into(),
            type_name: type_name.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::UndefinedVariable { .. }
            | Error::YamlParse(_)
            | Error::Auth { .. }
            | Error::OAuth2 { .. }
            | Error::InvalidUrl(_)
            | Error::FileNotFound { .. } => ErrorKind::Config,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::ProtocolViolation { .. } => ErrorKind::ProtocolViolation,
            Error::UnexpectedResponse { .. } => ErrorKind::Unexpected,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::Client(inner) => inner.kind(),
            Error::JsonParse(_)
            | Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::RateLimited { .. }
            | Error::Timeout { .. }
            | Error::MaxRetriesExceeded { .. }
            | Error::Graphql { .. }
            | Error::Io(_)
            | Error::Other(_)
            | Error::Anyhow(_) => ErrorKind::Transport,
        }
    }

    /// Check if this error is retryable at the transport layer
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// HTTP statuses the transport retries: throttling, gateway errors and
/// the 52x origin errors some CDNs emit
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504 | 520..=524)
}

/// Result type alias for the Raito SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
