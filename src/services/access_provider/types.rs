//! Access provider models, inputs and response unions

use crate::graphql::Tagged;
use crate::services::connection::Connection;
use crate::types::{NotFoundError, PermissionDeniedError, Sort};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Models
// ============================================================================

/// Lifecycle state of an access provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessProviderState {
    #[default]
    Active,
    Inactive,
    Deleted,
}

/// What an access provider does with its who and what
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AccessProviderAction {
    #[default]
    Grant,
    Mask,
    Filtered,
    Purpose,
    Deny,
}

/// How the who or what side of an access provider is maintained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WhoAndWhatType {
    #[default]
    Static,
    Dynamic,
}

/// An access provider as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProvider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub state: AccessProviderState,
    #[serde(default)]
    pub action: AccessProviderAction,
    /// Data source specific type, e.g. `role`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub naming_hint: Option<String>,
    #[serde(default)]
    pub not_internalizable: bool,
    #[serde(default)]
    pub who_type: WhoAndWhatType,
    #[serde(default)]
    pub what_type: WhoAndWhatType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Fields accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AccessProviderAction>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naming_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_type: Option<WhoAndWhatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_type: Option<WhoAndWhatType>,
}

/// The principal a who item grants access to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum WhoItem {
    #[serde(rename_all = "camelCase")]
    User {
        id: String,
        name: String,
        #[serde(default)]
        email: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Group {
        id: String,
        name: String,
        #[serde(default)]
        display_name: Option<String>,
    },
    /// Inheritance from another access provider
    AccessProvider { id: String, name: String },
    #[serde(other)]
    Unknown,
}

/// One entry of an access provider's who list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderWhoListItem {
    pub item: WhoItem,
    /// Promises are granted on request rather than up front
    #[serde(default)]
    pub promise_duration: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Reference to a data object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObjectReference {
    pub id: String,
    pub name: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of an access provider's what list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderWhatListItem {
    #[serde(default)]
    pub data_object: Option<DataObjectReference>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub global_permissions: Vec<String>,
}

// ============================================================================
// List Inputs
// ============================================================================

/// Ordering for `listAccessProviders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderOrderByInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Sort>,
}

/// Filter for `listAccessProviders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderFilterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AccessProviderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

/// Ordering for an access provider's who list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProviderWhoOrderByInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Sort>,
}

/// Ordering for an access provider's what list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessWhatOrderByInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<Sort>,
}

// ============================================================================
// List Options
// ============================================================================

/// Options for [`super::AccessProviderClient::list_access_providers`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessProviderListOptions {
    order: Vec<AccessProviderOrderByInput>,
    filter: Option<AccessProviderFilterInput>,
}

impl AccessProviderListOptions {
    /// Append sort keys; earlier keys take precedence
    #[must_use]
    pub fn with_order(mut self, order: impl IntoIterator<Item = AccessProviderOrderByInput>) -> Self {
        self.order.extend(order);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: AccessProviderFilterInput) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order(&self) -> &[AccessProviderOrderByInput] {
        &self.order
    }

    pub fn filter(&self) -> Option<&AccessProviderFilterInput> {
        self.filter.as_ref()
    }
}

/// Options for [`super::AccessProviderClient::get_access_provider_who_list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessProviderWhoListOptions {
    order: Vec<AccessProviderWhoOrderByInput>,
}

impl AccessProviderWhoListOptions {
    #[must_use]
    pub fn with_order(
        mut self,
        order: impl IntoIterator<Item = AccessProviderWhoOrderByInput>,
    ) -> Self {
        self.order.extend(order);
        self
    }

    pub fn order(&self) -> &[AccessProviderWhoOrderByInput] {
        &self.order
    }
}

/// Options for [`super::AccessProviderClient::get_access_provider_what_data_object_list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessProviderWhatListOptions {
    order: Vec<AccessWhatOrderByInput>,
}

impl AccessProviderWhatListOptions {
    #[must_use]
    pub fn with_order(mut self, order: impl IntoIterator<Item = AccessWhatOrderByInput>) -> Self {
        self.order.extend(order);
        self
    }

    pub fn order(&self) -> &[AccessWhatOrderByInput] {
        &self.order
    }
}

// ============================================================================
// Response Unions
// ============================================================================

/// Result of create and update mutations
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderResult {
    AccessProvider(AccessProvider),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}

/// Result of `accessProvider(id)`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderLookup {
    AccessProvider(AccessProvider),
    NotFoundError(NotFoundError),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}

/// Result of `deleteAccessProvider`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderDeleteResult {
    AccessProviderDeleteResult {
        #[serde(default)]
        success: bool,
    },
    NotFoundError(NotFoundError),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}

/// Node of an access provider listing
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderNode {
    AccessProvider(AccessProvider),
    #[serde(other)]
    Unknown,
}

/// Node of a who listing
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum WhoListNode {
    AccessWhoItem(AccessProviderWhoListItem),
    #[serde(other)]
    Unknown,
}

/// Node of a what listing
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum WhatListNode {
    AccessWhatItem(AccessProviderWhatListItem),
    #[serde(other)]
    Unknown,
}

/// A page of a listing, or why it could not be read
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub enum PagedResult<N> {
    PagedResult(Connection<N>),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}

/// Access provider wrapping a nested who list
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderWithWhoList {
    #[serde(rename_all = "camelCase")]
    AccessProvider {
        who_list: Tagged<PagedResult<WhoListNode>>,
    },
    NotFoundError(NotFoundError),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}

/// Access provider wrapping a nested what list
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum AccessProviderWithWhatList {
    #[serde(rename_all = "camelCase")]
    AccessProvider {
        what_data_objects: Tagged<PagedResult<WhatListNode>>,
    },
    NotFoundError(NotFoundError),
    PermissionDeniedError(PermissionDeniedError),
    #[serde(other)]
    Unknown,
}
