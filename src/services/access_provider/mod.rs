//! Access providers
//!
//! CRUD operations plus three paginated listings: all access providers, the
//! who list of one provider and its what (data object) list. Listings are
//! driven by [`crate::pagination::execute`] and request
//! [`crate::pagination::DEFAULT_PAGE_SIZE`] edges per page unless the client
//! was configured otherwise.

mod client;
mod queries;
mod types;

pub use client::AccessProviderClient;
pub use types::{
    AccessProvider, AccessProviderAction, AccessProviderFilterInput, AccessProviderInput,
    AccessProviderListOptions, AccessProviderOrderByInput, AccessProviderState,
    AccessProviderWhatListItem, AccessProviderWhatListOptions, AccessProviderWhoListItem,
    AccessProviderWhoListOptions, AccessProviderWhoOrderByInput, AccessWhatOrderByInput,
    DataObjectReference, WhoAndWhatType, WhoItem,
};
