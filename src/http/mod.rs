//! HTTP transport
//!
//! The reqwest-based client every GraphQL request is sent through.
//!
//! # Features
//!
//! - **Automatic Retries**: 429, 5xx, timeouts and connect failures
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Optional [`crate::auth::Authenticator`] per client

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
