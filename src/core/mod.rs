pub mod projector;
pub mod query;

pub use crate::domain::model::{
    Board, BoardColumn, Card, ColumnDefinition, Customer, DealRecord, DocumentList,
};
pub use crate::domain::ports::{ConfigProvider, DocumentSource};
pub use crate::utils::error::Result;
