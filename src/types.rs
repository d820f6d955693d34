//! Common types used throughout the Raito SDK
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Sorting
// ============================================================================

/// Sort direction used by every `...OrderByInput`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for Sort {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(crate::Error::config(format!(
                "invalid sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

// ============================================================================
// Shared Error Payloads
// ============================================================================

/// `PermissionDeniedError` member of a response union
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionDeniedError {
    #[serde(default)]
    pub message: String,
}

/// `NotFoundError` member of a response union
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotFoundError {
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level accepted by the CLI and config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_serde() {
        let sort: Sort = serde_json::from_str("\"DESC\"").unwrap();
        assert_eq!(sort, Sort::Desc);

        let json = serde_json::to_string(&Sort::Asc).unwrap();
        assert_eq!(json, "\"ASC\"");
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("asc".parse::<Sort>().unwrap(), Sort::Asc);
        assert_eq!("DESC".parse::<Sort>().unwrap(), Sort::Desc);
        assert!("sideways".parse::<Sort>().is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::DEBUG, tracing::Level::from(LogLevel::Debug));
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_permission_denied_payload_defaults() {
        let payload: PermissionDeniedError = serde_json::from_str("{}").unwrap();
        assert!(payload.message.is_empty());
    }
}
