//! GraphQL client
//!
//! Posts operations to the Raito endpoint over [`HttpClient`] and unwraps the
//! `{data, errors}` envelope. Every request races the caller's [`Context`].

use super::types::{GraphqlOperation, GraphqlRequest, GraphqlResponse};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// GraphQL client over one endpoint
#[derive(Debug)]
pub struct GraphqlClient {
    http: HttpClient,
}

impl GraphqlClient {
    /// The HTTP client's base URL is the GraphQL endpoint
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Run a typed operation and return its data
    pub async fn execute<O>(&self, ctx: &Context, variables: O::Variables) -> Result<O::ResponseData>
    where
        O: GraphqlOperation,
    {
        let request = GraphqlRequest::for_operation::<O>(variables);
        self.query(ctx, &request).await
    }

    /// Send a request and return its data
    ///
    /// Fails with `Error::Cancelled` as soon as `ctx` fires; the HTTP request
    /// in flight is dropped.
    pub async fn query<V, T>(&self, ctx: &Context, request: &GraphqlRequest<V>) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!(operation = request.operation_name, "sending GraphQL request");
        let response: GraphqlResponse<T> = tokio::select! {
            biased;
            () = ctx.cancelled() => return Err(Error::Cancelled),
            response = self.http.post_json("", request) => response?,
        };

        into_data(request.operation_name, response)
    }
}

/// Unwrap the envelope: any error wins over partial data
fn into_data<T>(operation: &str, response: GraphqlResponse<T>) -> Result<T> {
    if !response.errors.is_empty() {
        return Err(Error::Graphql {
            messages: response.errors.iter().map(ToString::to_string).collect(),
        });
    }
    response
        .data
        .ok_or_else(|| Error::protocol(format!("{operation}: response carried no data")))
}
