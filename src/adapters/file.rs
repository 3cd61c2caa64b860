use crate::core::{DocumentList, DocumentSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads a saved "list documents" response from disk.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileDocumentStore {
    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<DocumentList> {
        tracing::debug!(
            "Reading {}/{} documents from {}",
            database_id,
            collection_id,
            self.path.display()
        );
        let data = tokio::fs::read(&self.path).await?;
        let list: DocumentList = serde_json::from_slice(&data)?;
        Ok(list)
    }
}
