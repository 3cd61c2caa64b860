use crate::domain::model::{ColumnDefinition, DocumentList};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetch side of the board query: lists every document of one collection.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn list_documents(&self, database_id: &str, collection_id: &str)
        -> Result<DocumentList>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn project_id(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn database_id(&self) -> &str;
    fn collection_id(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn query_key(&self) -> &str;
    fn columns(&self) -> &[ColumnDefinition];
}
