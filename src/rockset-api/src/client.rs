use crate::models::{
    AddDocumentsRequest, Collection, CreateCollectionRequest, CreateWorkspaceRequest,
    DocumentStatus, QueryRequest, QueryResponse, Workspace,
};
use crate::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

/// Rockset REST API client
///
/// Holds the base URL and an HTTP client carrying the `ApiKey` authorization
/// header on every request. Read-only after construction.
#[derive(Debug)]
pub struct Client {
    base_url: String,
    client: HttpClient,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl Client {
    /// Create a client bound to the given API server and key
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("ApiKey {api_key}"))
            .map_err(|_| ApiError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch a workspace by name
    pub async fn get_workspace(&self, workspace: &str) -> Result<Workspace> {
        let url = format!("{}/v1/orgs/self/ws/{}", self.base_url, workspace);
        tracing::debug!(workspace, "fetching workspace");

        let response = self.client.get(&url).send().await?;
        let envelope: DataEnvelope<Workspace> = Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Create a workspace
    pub async fn create_workspace(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        let url = format!("{}/v1/orgs/self/ws", self.base_url);
        tracing::debug!(workspace = %request.name, "creating workspace");

        let response = self.client.post(&url).json(request).send().await?;
        let envelope: DataEnvelope<Workspace> = Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Fetch a collection by name within a workspace
    pub async fn get_collection(&self, workspace: &str, collection: &str) -> Result<Collection> {
        let url = format!(
            "{}/v1/orgs/self/ws/{}/collections/{}",
            self.base_url, workspace, collection
        );
        tracing::debug!(workspace, collection, "fetching collection");

        let response = self.client.get(&url).send().await?;
        let envelope: DataEnvelope<Collection> = Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Create a collection within a workspace
    pub async fn create_collection(
        &self,
        workspace: &str,
        request: &CreateCollectionRequest,
    ) -> Result<Collection> {
        let url = format!("{}/v1/orgs/self/ws/{}/collections", self.base_url, workspace);
        tracing::debug!(workspace, collection = %request.name, "creating collection");

        let response = self.client.post(&url).json(request).send().await?;
        let envelope: DataEnvelope<Collection> = Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Submit a batch of documents for ingestion, returning one status per document
    pub async fn add_documents<T: Serialize>(
        &self,
        workspace: &str,
        collection: &str,
        documents: &[T],
    ) -> Result<Vec<DocumentStatus>> {
        let url = format!(
            "{}/v1/orgs/self/ws/{}/collections/{}/docs",
            self.base_url, workspace, collection
        );
        tracing::debug!(workspace, collection, count = documents.len(), "adding documents");

        let data = documents
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let request = AddDocumentsRequest { data };

        let response = self.client.post(&url).json(&request).send().await?;
        let envelope: DataEnvelope<Vec<DocumentStatus>> =
            Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Run a SQL query
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let url = format!("{}/v1/orgs/self/queries", self.base_url);
        tracing::debug!(query = %request.sql.query, "running query");

        let response = self.client.post(&url).json(request).send().await?;
        let query_response: QueryResponse = Self::check(response).await?.json().await?;
        Ok(query_response)
    }

    /// Map non-2xx responses to `ApiError::Api`, preferring the message field
    /// of the service's JSON error body over the raw body text
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body);

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_header_api_key() {
        let err = Client::new("https://api.usw2a1.rockset.com", "bad\nkey").unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiKey));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = Client::new("https://api.usw2a1.rockset.com/", "key").unwrap();
        assert_eq!(client.base_url, "https://api.usw2a1.rockset.com");
    }
}
