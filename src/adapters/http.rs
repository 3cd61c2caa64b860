use crate::core::{ConfigProvider, DocumentList, DocumentSource};
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client for the remote document store's REST API.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    endpoint: String,
    project_id: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpDocumentStore {
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let store = Self::new(config.endpoint(), config.project_id())
            .with_timeout(Duration::from_secs(config.timeout_seconds()));
        match config.api_key() {
            Some(key) => store.with_api_key(key),
            None => store,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn documents_url(&self, database_id: &str, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, database_id, collection_id
        )
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentStore {
    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<DocumentList> {
        let url = self.documents_url(database_id, collection_id);
        tracing::debug!("Listing documents: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("Accept", "application/json")
            .timeout(self.timeout);

        if let Some(key) = &self.api_key {
            request = request.header("X-Appwrite-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Document store response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Listing documents failed with HTTP {}", status.as_u16());
            return Err(BoardError::FetchStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let list: DocumentList = serde_json::from_slice(&bytes)?;
        Ok(list)
    }
}
