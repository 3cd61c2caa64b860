use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::config::columns::default_columns;
use crate::core::query::DEALS_QUERY_KEY;
use crate::core::{ColumnDefinition, ConfigProvider};
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub store: StoreConfig,
    pub query: Option<QueryConfig>,
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: Option<String>,
    pub database_id: String,
    pub collection_id: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub key: Option<String>,
}

impl BoardConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are
    /// left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("store.endpoint", &self.store.endpoint)?;
        validation::validate_non_empty_string("store.project_id", &self.store.project_id)?;
        validation::validate_non_empty_string("store.database_id", &self.store.database_id)?;
        validation::validate_non_empty_string("store.collection_id", &self.store.collection_id)?;

        if let Some(key) = &self.store.api_key {
            if key.contains("${") {
                return Err(BoardError::InvalidConfigValueError {
                    field: "store.api_key".to_string(),
                    value: key.clone(),
                    reason: "Unresolved environment variable".to_string(),
                });
            }
        }

        if let Some(timeout) = self.store.timeout_seconds {
            validation::validate_positive_number("store.timeout_seconds", timeout, 1)?;
        }

        validation::validate_non_empty_string("query.key", self.query_key())?;

        self.validate_columns()
    }

    /// Column checks only. Enough for projecting saved documents, where the
    /// store settings are never used.
    pub fn validate_columns(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::MissingConfigError {
                field: "columns".to_string(),
            });
        }

        for column in &self.columns {
            validation::validate_non_empty_string("columns.id", &column.id)?;
        }

        // Duplicates are tolerated: the first column with an id takes its deals.
        let duplicates = validation::find_duplicates(self.columns.iter().map(|c| c.id.as_str()));
        if !duplicates.is_empty() {
            tracing::warn!(
                "Duplicate column ids {:?}; deals go to the first column with each id",
                duplicates
            );
        }

        Ok(())
    }
}

impl ConfigProvider for BoardConfig {
    fn endpoint(&self) -> &str {
        &self.store.endpoint
    }

    fn project_id(&self) -> &str {
        &self.store.project_id
    }

    fn api_key(&self) -> Option<&str> {
        self.store.api_key.as_deref()
    }

    fn database_id(&self) -> &str {
        &self.store.database_id
    }

    fn collection_id(&self) -> &str {
        &self.store.collection_id
    }

    fn timeout_seconds(&self) -> u64 {
        self.store.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn query_key(&self) -> &str {
        self.query
            .as_ref()
            .and_then(|q| q.key.as_deref())
            .unwrap_or(DEALS_QUERY_KEY)
    }

    fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
