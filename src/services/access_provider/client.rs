//! Access provider resource client

use super::queries::{
    CreateAccessProvider, CreateAccessProviderVariables, DeleteAccessProvider, GetAccessProvider,
    GetAccessProviderWhatDataObjectList, GetAccessProviderWhoList, IdVariables,
    ListAccessProviders, ListAccessProvidersVariables, UpdateAccessProvider,
    UpdateAccessProviderVariables, WhatListVariables, WhoListVariables,
};
use super::types::{
    AccessProvider, AccessProviderDeleteResult, AccessProviderInput, AccessProviderListOptions,
    AccessProviderLookup, AccessProviderNode, AccessProviderResult, AccessProviderWhatListItem,
    AccessProviderWhatListOptions, AccessProviderWhoListItem, AccessProviderWhoListOptions,
    AccessProviderWithWhatList, AccessProviderWithWhoList, PagedResult, WhatListNode,
    WhoListNode,
};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::graphql::{GraphqlClient, Tagged};
use crate::pagination::{execute, ExtractedEdge, ListStream, Page, DEFAULT_PAGE_SIZE};
use crate::services::connection::Edge;
use std::sync::Arc;

const RESOURCE: &str = "accessProvider";

/// Client for access providers
#[derive(Debug, Clone)]
pub struct AccessProviderClient {
    graphql: Arc<GraphqlClient>,
    page_size: u32,
}

impl AccessProviderClient {
    pub fn new(graphql: Arc<GraphqlClient>) -> Self {
        Self {
            graphql,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the number of edges requested per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Create an access provider
    pub async fn create_access_provider(
        &self,
        ctx: &Context,
        input: AccessProviderInput,
    ) -> Result<AccessProvider> {
        let data = self
            .graphql
            .execute::<CreateAccessProvider>(ctx, CreateAccessProviderVariables { ap: input })
            .await
            .map_err(Error::client)?;

        let Tagged { typename, inner } = data.create_access_provider;
        match inner {
            AccessProviderResult::AccessProvider(ap) => Ok(ap),
            AccessProviderResult::PermissionDeniedError(e) => {
                Err(Error::permission_denied("createAccessProvider", e.message))
            }
            AccessProviderResult::Unknown => {
                Err(Error::unexpected("createAccessProvider", typename))
            }
        }
    }

    /// Update an existing access provider
    pub async fn update_access_provider(
        &self,
        ctx: &Context,
        id: &str,
        input: AccessProviderInput,
    ) -> Result<AccessProvider> {
        let variables = UpdateAccessProviderVariables {
            id: id.to_string(),
            ap: input,
        };
        let data = self
            .graphql
            .execute::<UpdateAccessProvider>(ctx, variables)
            .await
            .map_err(Error::client)?;

        let Tagged { typename, inner } = data.update_access_provider;
        match inner {
            AccessProviderResult::AccessProvider(ap) => Ok(ap),
            AccessProviderResult::PermissionDeniedError(e) => {
                Err(Error::permission_denied("updateAccessProvider", e.message))
            }
            AccessProviderResult::Unknown => {
                Err(Error::unexpected("updateAccessProvider", typename))
            }
        }
    }

    /// Delete an access provider
    pub async fn delete_access_provider(&self, ctx: &Context, id: &str) -> Result<()> {
        let data = self
            .graphql
            .execute::<DeleteAccessProvider>(ctx, IdVariables { id: id.to_string() })
            .await
            .map_err(Error::client)?;

        let Tagged { typename, inner } = data.delete_access_provider;
        match inner {
            AccessProviderDeleteResult::AccessProviderDeleteResult { .. } => Ok(()),
            AccessProviderDeleteResult::PermissionDeniedError(e) => {
                Err(Error::permission_denied("deleteAccessProvider", e.message))
            }
            AccessProviderDeleteResult::NotFoundError(e) => {
                Err(Error::not_found(RESOURCE, id, e.message))
            }
            AccessProviderDeleteResult::Unknown => {
                Err(Error::unexpected("deleteAccessProvider", typename))
            }
        }
    }

    /// Fetch one access provider
    pub async fn get_access_provider(&self, ctx: &Context, id: &str) -> Result<AccessProvider> {
        let data = self
            .graphql
            .execute::<GetAccessProvider>(ctx, IdVariables { id: id.to_string() })
            .await
            .map_err(Error::client)?;

        let Tagged { typename, inner } = data.access_provider;
        match inner {
            AccessProviderLookup::AccessProvider(ap) => Ok(ap),
            AccessProviderLookup::NotFoundError(e) => Err(Error::not_found(RESOURCE, id, e.message)),
            AccessProviderLookup::PermissionDeniedError(e) => {
                Err(Error::permission_denied("getAccessProvider", e.message))
            }
            AccessProviderLookup::Unknown => {
                Err(Error::unexpected("getAccessProvider", typename))
            }
        }
    }

    /// Stream every access provider visible to the caller
    ///
    /// Cancel `ctx` (or drop the stream) to stop early.
    pub fn list_access_providers(
        &self,
        ctx: &Context,
        options: AccessProviderListOptions,
    ) -> ListStream<AccessProvider> {
        let graphql = Arc::clone(&self.graphql);
        let first = self.page_size;

        let loader = move |ctx: Context, after: Option<String>| {
            let variables = ListAccessProvidersVariables {
                after,
                first,
                filter: options.filter().cloned(),
                order: options.order().to_vec(),
            };
            load_access_providers(Arc::clone(&graphql), ctx, variables)
        };

        execute(ctx, loader, extract_access_provider)
    }

    /// Stream the who items of an access provider
    ///
    /// Cancel `ctx` (or drop the stream) to stop early.
    pub fn get_access_provider_who_list(
        &self,
        ctx: &Context,
        id: &str,
        options: AccessProviderWhoListOptions,
    ) -> ListStream<AccessProviderWhoListItem> {
        let graphql = Arc::clone(&self.graphql);
        let first = self.page_size;
        let id = id.to_string();

        let loader = move |ctx: Context, after: Option<String>| {
            let variables = WhoListVariables {
                id: id.clone(),
                after,
                first,
                order: options.order().to_vec(),
            };
            load_who_list(Arc::clone(&graphql), ctx, variables)
        };

        execute(ctx, loader, extract_who_item)
    }

    /// Stream the data objects an access provider grants access to
    ///
    /// Cancel `ctx` (or drop the stream) to stop early.
    pub fn get_access_provider_what_data_object_list(
        &self,
        ctx: &Context,
        id: &str,
        options: AccessProviderWhatListOptions,
    ) -> ListStream<AccessProviderWhatListItem> {
        let graphql = Arc::clone(&self.graphql);
        let first = self.page_size;
        let id = id.to_string();

        let loader = move |ctx: Context, after: Option<String>| {
            let variables = WhatListVariables {
                id: id.clone(),
                after,
                first,
                order: options.order().to_vec(),
            };
            load_what_list(Arc::clone(&graphql), ctx, variables)
        };

        execute(ctx, loader, extract_what_item)
    }
}

// ============================================================================
// Page Loaders
// ============================================================================

async fn load_access_providers(
    graphql: Arc<GraphqlClient>,
    ctx: Context,
    variables: ListAccessProvidersVariables,
) -> Result<Page<Edge<AccessProviderNode>>> {
    let data = graphql
        .execute::<ListAccessProviders>(&ctx, variables)
        .await
        .map_err(Error::client)?;

    let Tagged { typename, inner } = data.access_providers;
    match inner {
        PagedResult::PagedResult(connection) => Ok(connection.into_page()),
        PagedResult::PermissionDeniedError(e) => {
            Err(Error::permission_denied("listAccessProviders", e.message))
        }
        PagedResult::Unknown => Err(Error::unexpected("listAccessProviders", typename)),
    }
}

async fn load_who_list(
    graphql: Arc<GraphqlClient>,
    ctx: Context,
    variables: WhoListVariables,
) -> Result<Page<Edge<WhoListNode>>> {
    let id = variables.id.clone();
    let data = graphql
        .execute::<GetAccessProviderWhoList>(&ctx, variables)
        .await
        .map_err(Error::client)?;

    let Tagged { typename, inner } = data.access_provider;
    match inner {
        AccessProviderWithWhoList::AccessProvider { who_list } => match who_list.inner {
            PagedResult::PagedResult(connection) => Ok(connection.into_page()),
            PagedResult::PermissionDeniedError(e) => {
                Err(Error::permission_denied("accessProviderWhoList", e.message))
            }
            PagedResult::Unknown => Err(Error::unexpected(
                "accessProviderWhoList",
                who_list.typename,
            )),
        },
        AccessProviderWithWhoList::NotFoundError(e) => {
            Err(Error::not_found(RESOURCE, id, e.message))
        }
        AccessProviderWithWhoList::PermissionDeniedError(e) => {
            Err(Error::permission_denied(RESOURCE, e.message))
        }
        AccessProviderWithWhoList::Unknown => Err(Error::unexpected(RESOURCE, typename)),
    }
}

async fn load_what_list(
    graphql: Arc<GraphqlClient>,
    ctx: Context,
    variables: WhatListVariables,
) -> Result<Page<Edge<WhatListNode>>> {
    let id = variables.id.clone();
    let data = graphql
        .execute::<GetAccessProviderWhatDataObjectList>(&ctx, variables)
        .await
        .map_err(Error::client)?;

    let Tagged { typename, inner } = data.access_provider;
    match inner {
        AccessProviderWithWhatList::AccessProvider { what_data_objects } => {
            match what_data_objects.inner {
                PagedResult::PagedResult(connection) => Ok(connection.into_page()),
                PagedResult::PermissionDeniedError(e) => Err(Error::permission_denied(
                    "accessProviderWhatDataObjectList",
                    e.message,
                )),
                PagedResult::Unknown => Err(Error::unexpected(
                    "accessProviderWhatDataObjectList",
                    what_data_objects.typename,
                )),
            }
        }
        AccessProviderWithWhatList::NotFoundError(e) => {
            Err(Error::not_found(RESOURCE, id, e.message))
        }
        AccessProviderWithWhatList::PermissionDeniedError(e) => {
            Err(Error::permission_denied(RESOURCE, e.message))
        }
        AccessProviderWithWhatList::Unknown => Err(Error::unexpected(RESOURCE, typename)),
    }
}

// ============================================================================
// Edge Extractors
// ============================================================================

fn extract_access_provider(edge: Edge<AccessProviderNode>) -> Result<ExtractedEdge<AccessProvider>> {
    edge.extract(|node| match node {
        AccessProviderNode::AccessProvider(ap) => Ok(ap),
        AccessProviderNode::Unknown => Err(Error::protocol(
            "access provider listing returned a non-AccessProvider node",
        )),
    })
}

fn extract_who_item(edge: Edge<WhoListNode>) -> Result<ExtractedEdge<AccessProviderWhoListItem>> {
    edge.extract(|node| match node {
        WhoListNode::AccessWhoItem(item) => Ok(item),
        WhoListNode::Unknown => Err(Error::protocol(
            "who listing returned a non-AccessWhoItem node",
        )),
    })
}

fn extract_what_item(
    edge: Edge<WhatListNode>,
) -> Result<ExtractedEdge<AccessProviderWhatListItem>> {
    edge.extract(|node| match node {
        WhatListNode::AccessWhatItem(item) => Ok(item),
        WhatListNode::Unknown => Err(Error::protocol(
            "what listing returned a non-AccessWhatItem node",
        )),
    })
}
