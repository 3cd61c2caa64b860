use crate::core::projector::project_documents;
use crate::core::{Board, ColumnDefinition, ConfigProvider, DocumentList, DocumentSource};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache key the raw deals list is stored under.
pub const DEALS_QUERY_KEY: &str = "deals";

/// Keyed cache of fetch results. Failed fetches are never stored.
pub struct QueryCache<V> {
    entries: RwLock<HashMap<String, Arc<V>>>,
}

impl<V: Send + Sync> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<V>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(key).await {
            tracing::debug!(key, "Query cache hit");
            return Ok(value);
        }

        tracing::debug!(key, "Query cache miss");
        self.refetch(key, fetch).await
    }

    /// Fetches unconditionally and replaces the entry on success. The lock is
    /// not held while the fetch is pending.
    pub async fn refetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let value = Arc::new(fetch().await?);
        self.entries
            .write()
            .await
            .insert(key.to_string(), Arc::clone(&value));
        Ok(value)
    }
}

impl<V: Send + Sync> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The deals board query: cached fetch of the deals collection plus the
/// board projection, re-run on every read.
pub struct BoardQuery<S: DocumentSource> {
    source: S,
    database_id: String,
    collection_id: String,
    query_key: String,
    columns: Vec<ColumnDefinition>,
    cache: QueryCache<DocumentList>,
}

impl<S: DocumentSource> BoardQuery<S> {
    pub fn new(
        source: S,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
        columns: Vec<ColumnDefinition>,
    ) -> Self {
        Self {
            source,
            database_id: database_id.into(),
            collection_id: collection_id.into(),
            query_key: DEALS_QUERY_KEY.to_string(),
            columns,
            cache: QueryCache::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(source: S, config: &C) -> Self {
        Self::new(
            source,
            config.database_id(),
            config.collection_id(),
            config.columns().to_vec(),
        )
        .with_query_key(config.query_key())
    }

    pub fn with_query_key(mut self, key: impl Into<String>) -> Self {
        self.query_key = key.into();
        self
    }

    pub fn query_key(&self) -> &str {
        &self.query_key
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Returns the board, fetching the deals only when nothing is cached.
    pub async fn board(&self) -> Result<Board> {
        let documents = self
            .cache
            .get_or_fetch(&self.query_key, || self.fetch())
            .await?;
        project_documents(&documents, &self.columns)
    }

    /// Fetches the deals again and returns the fresh board.
    pub async fn refetch(&self) -> Result<Board> {
        let documents = self.cache.refetch(&self.query_key, || self.fetch()).await?;
        project_documents(&documents, &self.columns)
    }

    async fn fetch(&self) -> Result<DocumentList> {
        let list = self
            .source
            .list_documents(&self.database_id, &self.collection_id)
            .await?;
        tracing::debug!(
            key = %self.query_key,
            documents = list.documents.len(),
            total = list.total,
            "Fetched deals"
        );
        Ok(list)
    }
}
