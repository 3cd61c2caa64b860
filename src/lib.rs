pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileDocumentStore, HttpDocumentStore};
pub use crate::config::toml_config::BoardConfig;
pub use crate::core::{
    projector::{project, project_documents},
    query::{BoardQuery, QueryCache, DEALS_QUERY_KEY},
    Board, BoardColumn, Card, ColumnDefinition, DealRecord, DocumentList,
};
pub use crate::utils::error::{BoardError, Result};
