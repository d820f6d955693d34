//! GraphQL transport
//!
//! Typed operations ([`GraphqlOperation`]) are posted as
//! `{query, operationName, variables}` and their `{data, errors}` envelope is
//! unwrapped into `Result<data>`:
//!
//! - a non-empty `errors` array becomes [`crate::Error::Graphql`]
//! - a missing `data` member becomes [`crate::Error::ProtocolViolation`]

mod client;
mod types;

pub use client::GraphqlClient;
pub use types::{GraphqlErrorMessage, GraphqlOperation, GraphqlRequest, GraphqlResponse, Tagged};
