//! Authentication module
//!
//! Supports: API key header, Basic, Bearer, OAuth2 client credentials,
//! custom headers.
//!
//! The `Authenticator` applies the configured scheme to every request and
//! caches the OAuth2 access token between requests.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken};

#[cfg(test)]
mod tests;
