//! # Raito SDK
//!
//! A typed Rust client for the Raito Cloud GraphQL API, built around a
//! streaming cursor-pagination executor.
//!
//! ## Features
//!
//! - **Streaming Pagination**: Relay-style connections delivered item by item, one page in flight
//! - **Cancellation**: Every request and listing observes a [`Context`]
//! - **Multiple Auth Types**: API Key, Bearer, Basic, OAuth2 client credentials, custom headers
//! - **Resilient Transport**: Retries with backoff and client-side rate limiting
//! - **YAML Configuration**: With `${ENV_VAR}` interpolation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use raito_sdk::{Context, RaitoClient, SdkConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = RaitoClient::new(&SdkConfig::from_file("raito.yaml")?)?;
//!     let (ctx, _cancel) = Context::with_cancel();
//!
//!     let mut providers = client
//!         .access_provider()
//!         .list_access_providers(&ctx, Default::default());
//!     while let Some(item) = providers.next_item().await {
//!         println!("{}", item.into_result()?.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  RaitoClient → AccessProviderClient             │
//! │  create / update / delete / get     list / who list / what list │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │   GraphQL    │        Pagination         │       Context        │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ Operations   │ PageLoader / EdgeExtractor│ Cancel / Deadline    │
//! │ Error unions │ execute → ListStream      │                      │
//! └──────────────┴───────────────────────────┴──────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┐
//! │     HTTP     │           Auth            │
//! │ Retry / Rate │ API Key / OAuth2 / Basic  │
//! └──────────────┴───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cancellation-aware execution context
pub mod context;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// GraphQL transport
pub mod graphql;

/// Cursor pagination executor
pub mod pagination;

/// Resource clients
pub mod services;

/// SDK configuration
pub mod config;

/// Environment interpolation
pub mod template;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use client::RaitoClient;
pub use config::SdkConfig;
pub use context::{CancelGuard, CancelHandle, Context};
pub use pagination::{execute, ExecutionOutcome, ExecutionSummary, ListItem, ListStream, PageInfo};
pub use services::AccessProviderClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
