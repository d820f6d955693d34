//! Pagination types and traits
//!
//! Defines the page/edge model and the two per-resource collaborator
//! contracts the executor is driven by.

use crate::context::Context;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Page size every resource client requests
pub const DEFAULT_PAGE_SIZE: u32 = 25;

// ============================================================================
// Page Model
// ============================================================================

/// Relay-style page info returned with every page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page exists
    #[serde(default)]
    pub has_next_page: bool,
    /// Cursor to request the next page with
    #[serde(default)]
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Page info for the final page
    pub fn last() -> Self {
        Self::default()
    }

    /// Page info pointing at a following page
    pub fn next(cursor: impl Into<String>) -> Self {
        Self {
            has_next_page: true,
            end_cursor: Some(cursor.into()),
        }
    }

    /// Cursor for the following page, `None` when this was the last page
    ///
    /// Reporting another page without a cursor is a protocol violation.
    pub fn next_cursor(&self) -> Result<Option<&str>> {
        if !self.has_next_page {
            return Ok(None);
        }
        match self.end_cursor.as_deref() {
            Some(cursor) => Ok(Some(cursor)),
            None => Err(Error::protocol(
                "page reported hasNextPage=true without an endCursor",
            )),
        }
    }
}

/// One fetched page: its info plus the ordered edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<E> {
    pub page_info: PageInfo,
    pub edges: Vec<E>,
}

impl<E> Page<E> {
    /// Create a page
    pub fn new(page_info: PageInfo, edges: Vec<E>) -> Self {
        Self { page_info, edges }
    }

    /// The final page of a listing
    pub fn last(edges: Vec<E>) -> Self {
        Self::new(PageInfo::last(), edges)
    }

    /// A page followed by another one at `cursor`
    pub fn with_next(cursor: impl Into<String>, edges: Vec<E>) -> Self {
        Self::new(PageInfo::next(cursor), edges)
    }
}

/// What an extractor produced for one edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEdge<T> {
    /// The edge's own cursor
    pub cursor: Option<String>,
    /// The narrowed node, absent when the edge carries no node
    pub item: Option<T>,
}

impl<T> ExtractedEdge<T> {
    /// An edge that yields an item
    pub fn item(cursor: Option<String>, item: T) -> Self {
        Self {
            cursor,
            item: Some(item),
        }
    }

    /// An edge whose node is absent; advances the cursor, emits nothing
    pub fn skip(cursor: Option<String>) -> Self {
        Self { cursor, item: None }
    }
}

// ============================================================================
// Stream Items
// ============================================================================

/// One element of a paginated listing: an item or the terminal error
#[derive(Debug)]
pub enum ListItem<T> {
    /// A listed resource
    Item(T),
    /// The error that ended the listing; always the last element
    Error(Error),
}

impl<T> ListItem<T> {
    /// Check if this carries an item
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Check if this carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the item, if any
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Error(_) => None,
        }
    }

    /// Borrow the error, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Item(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Item(item) => Ok(item),
            Self::Error(err) => Err(err),
        }
    }

    /// Map the item, leaving errors untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ListItem<U> {
        match self {
            Self::Item(item) => ListItem::Item(f(item)),
            Self::Error(err) => ListItem::Error(err),
        }
    }
}

impl<T> From<Result<T>> for ListItem<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(item) => Self::Item(item),
            Err(err) => Self::Error(err),
        }
    }
}

// ============================================================================
// Collaborator Contracts
// ============================================================================

/// Fetches one page of a resource listing
///
/// Called with `None` first and then with each `end_cursor` the previous
/// page returned. Never called concurrently with itself.
#[async_trait]
pub trait PageLoader: Send + 'static {
    /// The resource-specific edge type
    type Edge: Send + 'static;

    /// Perform one round trip for the page after `cursor`
    async fn load_page(&mut self, ctx: &Context, cursor: Option<String>)
        -> Result<Page<Self::Edge>>;
}

#[async_trait]
impl<F, Fut, E> PageLoader for F
where
    F: FnMut(Context, Option<String>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Page<E>>> + Send + 'static,
    E: Send + 'static,
{
    type Edge = E;

    async fn load_page(&mut self, ctx: &Context, cursor: Option<String>) -> Result<Page<E>> {
        (self)(ctx.clone(), cursor).await
    }
}

/// Narrows one edge into an optional typed item
///
/// A node of an unexpected shape must be reported as an error, not a panic.
pub trait EdgeExtractor<E>: Send + 'static {
    /// The typed item this listing yields
    type Item: Send + 'static;

    /// Extract the cursor and, when present, the item of `edge`
    fn extract(&mut self, edge: E) -> Result<ExtractedEdge<Self::Item>>;
}

impl<F, E, T> EdgeExtractor<E> for F
where
    F: FnMut(E) -> Result<ExtractedEdge<T>> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    fn extract(&mut self, edge: E) -> Result<ExtractedEdge<T>> {
        (self)(edge)
    }
}

// ============================================================================
// Execution Summary
// ============================================================================

/// Terminal state of one `execute` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The last page was drained
    Done,
    /// A loader, extractor or protocol error ended the listing
    Errored,
    /// The context was cancelled
    Cancelled,
    /// The consumer dropped the stream without cancelling
    Abandoned,
}

/// What the background worker did before it terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub outcome: ExecutionOutcome,
    /// Successful loader calls
    pub pages_fetched: usize,
    /// Items accepted by the consumer
    pub items_emitted: usize,
    /// Edges without a node
    pub edges_skipped: usize,
    /// Cursor of the last edge handed to the extractor
    pub last_cursor: Option<String>,
}

impl ExecutionSummary {
    pub(crate) fn new() -> Self {
        Self {
            outcome: ExecutionOutcome::Done,
            pages_fetched: 0,
            items_emitted: 0,
            edges_skipped: 0,
            last_cursor: None,
        }
    }
}
