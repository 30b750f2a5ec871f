use crate::{ApiError, GraphqlTransport};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl GraphqlTransport for HttpTransport {
    async fn post(&self, body: &serde_json::Value) -> Result<serde_json::Value, ApiError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if resp.status() != StatusCode::OK {
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
