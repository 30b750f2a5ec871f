use crate::operations::{
    FindPerformers, FindPerformersVariables, MetadataAutoTag, MetadataAutoTagVariables,
    Operation, PerformerCreate, PerformerCreateInput, PerformerCreateVariables, PerformerId,
};
use crate::{ApiError, GraphqlResponse, GraphqlTransport, HttpTransport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends typed operations and collapses every failure into `None`.
#[derive(Clone)]
pub struct StashClient {
    transport: Arc<dyn GraphqlTransport>,
}

impl StashClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    pub fn http(endpoint: &str) -> Self {
        Self::new(Arc::new(HttpTransport::new(endpoint)))
    }

    pub async fn send<O: Operation>(&self, variables: O::Variables) -> Option<O::Data> {
        match self.try_send::<O>(variables).await {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(operation = O::NAME, error = %e, "graphql request failed");
                None
            }
        }
    }

    async fn try_send<O: Operation>(&self, variables: O::Variables) -> Result<O::Data, ApiError> {
        let body = serde_json::to_value(O::request(variables))
            .map_err(|e| ApiError::Request(e.to_string()))?;
        debug!(operation = O::NAME, "sending graphql request");
        let raw = self.transport.post(&body).await?;
        let parsed: GraphqlResponse<O::Data> =
            serde_json::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))?;
        match parsed.data {
            Some(data) => Ok(data),
            None => {
                let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
                Err(ApiError::GraphQl(if messages.is_empty() {
                    "response carried no data".to_string()
                } else {
                    messages.join("; ")
                }))
            }
        }
    }

    /// Looks up a performer by name. The first result of the name-sorted page wins.
    pub async fn find_performer(&self, name: &str) -> Option<PerformerId> {
        let data = self
            .send::<FindPerformers>(FindPerformersVariables::by_name(name))
            .await?;
        let found = data.find_performers;
        if found.count <= 0 {
            return None;
        }
        found.performers.into_iter().next().map(|p| p.id)
    }

    pub async fn create_performer(&self, name: &str) -> Option<PerformerId> {
        let data = self
            .send::<PerformerCreate>(PerformerCreateVariables {
                input: PerformerCreateInput::named(name),
            })
            .await?;
        data.performer_create.map(|p| p.id)
    }

    /// Queues an auto-tag job scoped to one performer. True if the server accepted it.
    pub async fn autotag_performer(&self, id: &PerformerId) -> bool {
        self.send::<MetadataAutoTag>(MetadataAutoTagVariables::for_performer(id))
            .await
            .is_some()
    }
}
