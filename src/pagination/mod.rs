//! Pagination module
//!
//! Cursor pagination over Relay-style connections.
//!
//! # Overview
//!
//! A listing is described by two per-resource collaborators:
//!
//! - a [`PageLoader`] that fetches the page after a cursor, and
//! - an [`EdgeExtractor`] that narrows one edge into an optional item.
//!
//! [`execute`] drives them on a background task and hands the caller a
//! [`ListStream`] of [`ListItem`]s. Pages are fetched strictly in order, one
//! at a time, and only as fast as the consumer reads.

mod executor;
mod types;

pub use executor::{execute, ListStream};
pub use types::{
    EdgeExtractor, ExecutionOutcome, ExecutionSummary, ExtractedEdge, ListItem, Page, PageInfo,
    PageLoader, DEFAULT_PAGE_SIZE,
};
