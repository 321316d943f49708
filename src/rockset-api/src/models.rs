use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workspace is a top-level namespace grouping collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_count: Option<u64>,
}

/// Collection is a named container of documents within a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Batch of documents submitted for ingestion
#[derive(Debug, Clone, Serialize)]
pub struct AddDocumentsRequest {
    pub data: Vec<serde_json::Value>,
}

/// Per-document ingestion outcome returned by the add-documents call
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentStatus {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: IngestStatus,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngestStatus {
    Added,
    Replaced,
    Processing,
    Error,
    // The service may grow new states; don't fail deserialization on them
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for IngestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IngestStatus::Added => "ADDED",
            IngestStatus::Replaced => "REPLACED",
            IngestStatus::Processing => "PROCESSING",
            IngestStatus::Error => "ERROR",
            IngestStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// SQL query with optional bound parameters
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub sql: QueryRequestSql,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequestSql {
    pub query: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<QueryParameter>,
}

/// Named parameter referenced from the query text as `:name`
#[derive(Debug, Clone, Serialize)]
pub struct QueryParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: String,
}

impl QueryParameter {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: "string".to_string(),
            value: value.into(),
        }
    }
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            sql: QueryRequestSql {
                query: query.into(),
                parameters: Vec::new(),
            },
        }
    }

    pub fn with_param(mut self, param: QueryParameter) -> Self {
        self.sql.parameters.push(param);
        self
    }
}

/// Result rows are untyped; callers reinterpret them into their own shapes
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub stats: Option<QueryStats>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QueryStats {
    #[serde(default)]
    pub elapsed_time_ms: Option<u64>,
}
