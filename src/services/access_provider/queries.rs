//! Access provider GraphQL operations

use super::types::{
    AccessProviderDeleteResult, AccessProviderFilterInput, AccessProviderInput,
    AccessProviderLookup, AccessProviderNode, AccessProviderOrderByInput, AccessProviderResult,
    AccessProviderWhoOrderByInput, AccessProviderWithWhatList, AccessProviderWithWhoList,
    AccessWhatOrderByInput, PagedResult,
};
use crate::graphql::{GraphqlOperation, Tagged};
use serde::{Deserialize, Serialize};

macro_rules! access_provider_fragment {
    () => {
        r"
fragment AccessProvider on AccessProvider {
  id
  name
  description
  state
  action
  type
  namingHint
  notInternalizable
  whoType
  whatType
  createdAt
  modifiedAt
}
"
    };
}

macro_rules! page_info_fragment {
    () => {
        r"
fragment PageInfo on PageInfo {
  hasNextPage
  endCursor
}
"
    };
}

// ============================================================================
// Mutations
// ============================================================================

pub struct CreateAccessProvider;

#[derive(Debug, Serialize)]
pub struct CreateAccessProviderVariables {
    pub ap: AccessProviderInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccessProviderData {
    pub create_access_provider: Tagged<AccessProviderResult>,
}

impl GraphqlOperation for CreateAccessProvider {
    type Variables = CreateAccessProviderVariables;
    type ResponseData = CreateAccessProviderData;

    const QUERY: &'static str = concat!(
        r"
mutation CreateAccessProvider($ap: AccessProviderInput!) {
  createAccessProvider(data: $ap) {
    __typename
    ... on AccessProvider { ...AccessProvider }
    ... on PermissionDeniedError { message }
  }
}
",
        access_provider_fragment!()
    );
    const OPERATION_NAME: &'static str = "CreateAccessProvider";
}

pub struct UpdateAccessProvider;

#[derive(Debug, Serialize)]
pub struct UpdateAccessProviderVariables {
    pub id: String,
    pub ap: AccessProviderInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccessProviderData {
    pub update_access_provider: Tagged<AccessProviderResult>,
}

impl GraphqlOperation for UpdateAccessProvider {
    type Variables = UpdateAccessProviderVariables;
    type ResponseData = UpdateAccessProviderData;

    const QUERY: &'static str = concat!(
        r"
mutation UpdateAccessProvider($id: ID!, $ap: AccessProviderInput!) {
  updateAccessProvider(id: $id, data: $ap) {
    __typename
    ... on AccessProvider { ...AccessProvider }
    ... on PermissionDeniedError { message }
  }
}
",
        access_provider_fragment!()
    );
    const OPERATION_NAME: &'static str = "UpdateAccessProvider";
}

pub struct DeleteAccessProvider;

#[derive(Debug, Serialize)]
pub struct IdVariables {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccessProviderData {
    pub delete_access_provider: Tagged<AccessProviderDeleteResult>,
}

impl GraphqlOperation for DeleteAccessProvider {
    type Variables = IdVariables;
    type ResponseData = DeleteAccessProviderData;

    const QUERY: &'static str = r"
mutation DeleteAccessProvider($id: ID!) {
  deleteAccessProvider(id: $id) {
    __typename
    ... on AccessProviderDeleteResult { success }
    ... on PermissionDeniedError { message }
    ... on NotFoundError { message }
  }
}
";
    const OPERATION_NAME: &'static str = "DeleteAccessProvider";
}

// ============================================================================
// Queries
// ============================================================================

pub struct GetAccessProvider;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccessProviderData {
    pub access_provider: Tagged<AccessProviderLookup>,
}

impl GraphqlOperation for GetAccessProvider {
    type Variables = IdVariables;
    type ResponseData = GetAccessProviderData;

    const QUERY: &'static str = concat!(
        r"
query GetAccessProvider($id: ID!) {
  accessProvider(id: $id) {
    __typename
    ... on AccessProvider { ...AccessProvider }
    ... on NotFoundError { message }
    ... on PermissionDeniedError { message }
  }
}
",
        access_provider_fragment!()
    );
    const OPERATION_NAME: &'static str = "GetAccessProvider";
}

pub struct ListAccessProviders;

#[derive(Debug, Clone, Serialize)]
pub struct ListAccessProvidersVariables {
    pub after: Option<String>,
    pub first: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<AccessProviderFilterInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<AccessProviderOrderByInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccessProvidersData {
    pub access_providers: Tagged<PagedResult<AccessProviderNode>>,
}

impl GraphqlOperation for ListAccessProviders {
    type Variables = ListAccessProvidersVariables;
    type ResponseData = ListAccessProvidersData;

    const QUERY: &'static str = concat!(
        r"
query ListAccessProviders($after: String, $first: Int, $filter: AccessProviderFilterInput, $order: [AccessProviderOrderByInput!]) {
  accessProviders(after: $after, first: $first, filter: $filter, order: $order) {
    __typename
    ... on PagedResult {
      pageInfo { ...PageInfo }
      edges {
        cursor
        node {
          __typename
          ... on AccessProvider { ...AccessProvider }
        }
      }
    }
    ... on PermissionDeniedError { message }
  }
}
",
        access_provider_fragment!(), page_info_fragment!()
    );
    const OPERATION_NAME: &'static str = "ListAccessProviders";
}

pub struct GetAccessProviderWhoList;

#[derive(Debug, Clone, Serialize)]
pub struct WhoListVariables {
    pub id: String,
    pub after: Option<String>,
    pub first: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<AccessProviderWhoOrderByInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccessProviderWhoListData {
    pub access_provider: Tagged<AccessProviderWithWhoList>,
}

impl GraphqlOperation for GetAccessProviderWhoList {
    type Variables = WhoListVariables;
    type ResponseData = GetAccessProviderWhoListData;

    const QUERY: &'static str = concat!(
        r"
query GetAccessProviderWhoList($id: ID!, $after: String, $first: Int, $order: [AccessProviderWhoOrderByInput!]) {
  accessProvider(id: $id) {
    __typename
    ... on AccessProvider {
      whoList(after: $after, first: $first, order: $order) {
        __typename
        ... on PagedResult {
          pageInfo { ...PageInfo }
          edges {
            cursor
            node {
              __typename
              ... on AccessWhoItem {
                promiseDuration
                expiresAt
                item {
                  __typename
                  ... on User { id name email }
                  ... on Group { id name displayName }
                  ... on AccessProvider { id name }
                }
              }
            }
          }
        }
        ... on PermissionDeniedError { message }
      }
    }
    ... on NotFoundError { message }
    ... on PermissionDeniedError { message }
  }
}
",
        page_info_fragment!()
    );
    const OPERATION_NAME: &'static str = "GetAccessProviderWhoList";
}

pub struct GetAccessProviderWhatDataObjectList;

#[derive(Debug, Clone, Serialize)]
pub struct WhatListVariables {
    pub id: String,
    pub after: Option<String>,
    pub first: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<AccessWhatOrderByInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccessProviderWhatDataObjectListData {
    pub access_provider: Tagged<AccessProviderWithWhatList>,
}

impl GraphqlOperation for GetAccessProviderWhatDataObjectList {
    type Variables = WhatListVariables;
    type ResponseData = GetAccessProviderWhatDataObjectListData;

    const QUERY: &'static str = concat!(
        r"
query GetAccessProviderWhatDataObjectList($id: ID!, $after: String, $first: Int, $order: [AccessWhatOrderByInput!]) {
  accessProvider(id: $id) {
    __typename
    ... on AccessProvider {
      whatDataObjects(after: $after, first: $first, order: $order) {
        __typename
        ... on PagedResult {
          pageInfo { ...PageInfo }
          edges {
            cursor
            node {
              __typename
              ... on AccessWhatItem {
                permissions
                globalPermissions
                dataObject { id name fullName type }
              }
            }
          }
        }
        ... on PermissionDeniedError { message }
      }
    }
    ... on NotFoundError { message }
    ... on PermissionDeniedError { message }
  }
}
",
        page_info_fragment!()
    );
    const OPERATION_NAME: &'static str = "GetAccessProviderWhatDataObjectList";
}
