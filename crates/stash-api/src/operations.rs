//! The three GraphQL operations used against Stash, with typed variables and results.
//!
//! Query documents are kept verbatim in `graphql/` so the selection sets stay
//! compatible with the server schema; only `id` and `name` are read back.

use crate::GraphqlRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub trait Operation {
    const NAME: &'static str;
    const QUERY: &'static str;
    type Variables: Serialize + Send + Sync;
    type Data: DeserializeOwned;

    fn request(variables: Self::Variables) -> GraphqlRequest<Self::Variables> {
        GraphqlRequest {
            operation_name: Self::NAME,
            variables,
            query: Self::QUERY,
        }
    }
}

/// Server-assigned performer identifier. Treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PerformerId(String);

impl PerformerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PerformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PerformerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PerformerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // GraphQL IDs come back as strings, but accept bare integers too.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PerformerId(s),
            RawId::Number(n) => PerformerId(n.to_string()),
        })
    }
}

/// The subset of the `PerformerData` fragment this program reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformerSummary {
    pub id: PerformerId,
    #[serde(default)]
    pub name: String,
}

pub struct FindPerformers;

#[derive(Debug, Clone, Serialize)]
pub struct FindPerformersVariables {
    pub filter: FindFilter,
    pub performer_filter: PerformerFilter,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindFilter {
    pub q: String,
    pub page: u32,
    pub per_page: u32,
    pub sort: &'static str,
    pub direction: &'static str,
}

/// Always sent empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformerFilter {}

impl FindPerformersVariables {
    pub const PER_PAGE: u32 = 40;

    pub fn by_name(name: &str) -> Self {
        Self {
            filter: FindFilter {
                q: name.to_string(),
                page: 1,
                per_page: Self::PER_PAGE,
                sort: "name",
                direction: "ASC",
            },
            performer_filter: PerformerFilter::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindPerformersData {
    #[serde(rename = "findPerformers")]
    pub find_performers: FindPerformersResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindPerformersResult {
    pub count: i64,
    #[serde(default)]
    pub performers: Vec<PerformerSummary>,
}

impl Operation for FindPerformers {
    const NAME: &'static str = "FindPerformers";
    const QUERY: &'static str = include_str!("../graphql/find_performers.graphql");
    type Variables = FindPerformersVariables;
    type Data = FindPerformersData;
}

pub struct PerformerCreate;

#[derive(Debug, Clone, Serialize)]
pub struct PerformerCreateVariables {
    pub input: PerformerCreateInput,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformerCreateInput {
    pub name: String,
    pub disambiguation: String,
    pub alias_list: Vec<String>,
    pub gender: Option<String>,
    pub birthdate: String,
    pub death_date: String,
    pub country: String,
    pub ethnicity: String,
    pub hair_color: String,
    pub eye_color: String,
    pub height_cm: Option<i32>,
    pub weight: Option<i32>,
    pub measurements: String,
    pub fake_tits: String,
    pub penis_length: Option<f64>,
    pub circumcised: Option<String>,
    pub tattoos: String,
    pub piercings: String,
    pub career_length: String,
    pub url: String,
    pub twitter: String,
    pub instagram: String,
    pub details: String,
    pub tag_ids: Vec<String>,
    pub ignore_auto_tag: bool,
    pub stash_ids: Vec<StashIdInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StashIdInput {
    pub stash_id: String,
    pub endpoint: String,
}

impl PerformerCreateInput {
    /// A performer with only its name set.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformerCreateData {
    #[serde(rename = "performerCreate")]
    pub performer_create: Option<PerformerSummary>,
}

impl Operation for PerformerCreate {
    const NAME: &'static str = "PerformerCreate";
    const QUERY: &'static str = include_str!("../graphql/performer_create.graphql");
    type Variables = PerformerCreateVariables;
    type Data = PerformerCreateData;
}

pub struct MetadataAutoTag;

#[derive(Debug, Clone, Serialize)]
pub struct MetadataAutoTagVariables {
    pub input: AutoTagMetadataInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutoTagMetadataInput {
    pub performers: Vec<PerformerId>,
}

impl MetadataAutoTagVariables {
    pub fn for_performer(id: &PerformerId) -> Self {
        Self {
            input: AutoTagMetadataInput {
                performers: vec![id.clone()],
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataAutoTagData {
    /// Job id of the queued task.
    #[serde(rename = "metadataAutoTag")]
    pub job_id: Option<serde_json::Value>,
}

impl Operation for MetadataAutoTag {
    const NAME: &'static str = "MetadataAutoTag";
    const QUERY: &'static str = include_str!("../graphql/metadata_auto_tag.graphql");
    type Variables = MetadataAutoTagVariables;
    type Data = MetadataAutoTagData;
}
