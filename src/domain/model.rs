use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Customer document linked to a deal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl Customer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A deal document as stored in the deals collection.
///
/// Every field is optional and a value of the wrong type reads as absent:
/// a document only has to be well formed once it lands on a column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(rename = "$id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(rename = "$createdAt", default, deserialize_with = "lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub customers: Option<Customer>,
}

/// Response of a "list documents" call. Only `documents` is used.
///
/// Entries that are not objects are skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub total: u64,
    #[serde(deserialize_with = "documents")]
    pub documents: Vec<DealRecord>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn documents<'de, D>(deserializer: D) -> std::result::Result<Vec<DealRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|value| DealRecord::deserialize(value).ok())
        .collect())
}

/// One board column. Anything besides `id` and `name` (color, order, ...)
/// is kept in `metadata` and emitted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ColumnDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Display projection of a deal inside a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub price: f64,
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// Display name of the owning column, not the raw status code.
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    #[serde(flatten)]
    pub column: ColumnDefinition,
    pub items: Vec<Card>,
}

impl BoardColumn {
    pub fn empty(column: &ColumnDefinition) -> Self {
        Self {
            column: column.clone(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.column.id
    }

    pub fn name(&self) -> &str {
        &self.column.name
    }
}

pub type Board = Vec<BoardColumn>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_types_read_as_absent() {
        let deal: DealRecord = serde_json::from_value(serde_json::json!({
            "$id": "d2",
            "$createdAt": "yesterday",
            "status": 42,
            "name": ["not", "a", "name"],
            "price": "cheap",
            "customers": "Acme"
        }))
        .unwrap();

        assert_eq!(deal.id.as_deref(), Some("d2"));
        assert!(deal.created_at.is_none());
        assert!(deal.status.is_none());
        assert!(deal.name.is_none());
        assert!(deal.price.is_none());
        assert!(deal.customers.is_none());
    }

    #[test]
    fn test_document_list_keeps_valid_deals() {
        let list: DocumentList = serde_json::from_value(serde_json::json!({
            "total": 4,
            "documents": [
                { "$id": "d1", "status": "new", "name": "A", "price": 100,
                  "customers": { "name": "Acme" } },
                { "$id": "d2", "status": "lost", "name": "B" },
                null,
                "garbage"
            ]
        }))
        .unwrap();

        assert_eq!(list.total, 4);
        assert_eq!(list.documents.len(), 2);
        assert_eq!(list.documents[0].price, Some(100.0));
        assert_eq!(list.documents[0].customers, Some(Customer::named("Acme")));
        assert!(list.documents[1].price.is_none());
    }
}
