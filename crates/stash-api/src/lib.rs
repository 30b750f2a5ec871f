//! Client for the Stash GraphQL API: typed operations, transport and performer lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;
pub mod http;
pub mod operations;

pub use client::StashClient;
pub use http::HttpTransport;
pub use operations::{
    FindPerformers, MetadataAutoTag, Operation, PerformerCreate, PerformerCreateInput,
    PerformerId,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("graphql error: {0}")]
    GraphQl(String),
}

/// Body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<V> {
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
    pub query: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[async_trait::async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Posts a JSON body and returns the parsed JSON reply.
    async fn post(&self, body: &serde_json::Value) -> Result<serde_json::Value, ApiError>;
}
