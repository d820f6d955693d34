//! Relay connection wire shape shared by every paged resource

use crate::error::Result;
use crate::pagination::{ExtractedEdge, Page, PageInfo};
use serde::Deserialize;

/// `{ pageInfo, edges }` as returned inside a `PagedResult`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct Connection<N> {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<Edge<N>>,
}

impl<N> Connection<N> {
    pub fn into_page(self) -> Page<Edge<N>> {
        Page::new(self.page_info, self.edges)
    }
}

/// One edge; `node` is null for entries the caller may not see
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct Edge<N> {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub node: Option<N>,
}

impl<N> Edge<N> {
    /// Narrow the node with `narrow`; a null node is skipped
    pub fn extract<T>(self, narrow: impl FnOnce(N) -> Result<T>) -> Result<ExtractedEdge<T>> {
        match self.node {
            Some(node) => Ok(ExtractedEdge::item(self.cursor, narrow(node)?)),
            None => Ok(ExtractedEdge::skip(self.cursor)),
        }
    }
}
