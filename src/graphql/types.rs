//! GraphQL wire types

use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A typed GraphQL operation
///
/// One implementation per query or mutation the SDK sends.
pub trait GraphqlOperation {
    type Variables: Serialize + Send + Sync;
    type ResponseData: DeserializeOwned + Send;

    /// Document text
    const QUERY: &'static str;
    /// Name sent as `operationName`, also used in logs
    const OPERATION_NAME: &'static str;
}

/// Request body posted to the endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: V,
}

impl<V> GraphqlRequest<V> {
    pub fn new(query: &'static str, operation_name: &'static str, variables: V) -> Self {
        Self {
            query,
            operation_name,
            variables,
        }
    }

    /// Request for a typed operation
    pub fn for_operation<O>(variables: V) -> Self
    where
        O: GraphqlOperation<Variables = V>,
    {
        Self::new(O::QUERY, O::OPERATION_NAME, variables)
    }
}

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
    /// Response path the error applies to
    #[serde(default)]
    pub path: Vec<JsonValue>,
}

impl std::fmt::Display for GraphqlErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path: Vec<String> = self
            .path
            .iter()
            .map(|segment| match segment {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        write!(f, "{} (at {})", self.message, path.join("."))
    }
}

/// A union member together with the `__typename` it was decoded from
///
/// Lets a `#[serde(other)]` fallback still report which type the server sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub typename: String,
    pub inner: T,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Tagged<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        let typename = value
            .get("__typename")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();
        let inner = T::deserialize(value).map_err(serde::de::Error::custom)?;
        Ok(Self { typename, inner })
    }
}
