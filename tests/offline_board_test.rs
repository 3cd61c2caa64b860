use anyhow::Result;
use deal_board::config::columns::default_columns;
use deal_board::{BoardConfig, BoardQuery, FileDocumentStore};
use tempfile::TempDir;

/// Saved document list projected through the built-in pipeline columns
#[tokio::test]
async fn test_saved_documents_with_default_columns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("deals.json");

    let documents = serde_json::json!({
        "total": 4,
        "documents": [
            { "$id": "a", "status": "todo", "name": "Website", "price": 1200,
              "customers": { "name": "Acme" } },
            { "$id": "b", "status": "produced", "name": "Logo", "price": 300,
              "customers": { "name": "Globex" } },
            { "$id": "c", "status": "archived", "name": "Old", "price": 10 },
            { "$id": "d", "status": "todo", "name": "Landing", "price": 800.5,
              "customers": { "name": "Initech" } }
        ]
    });
    tokio::fs::write(&input_path, serde_json::to_vec(&documents)?).await?;

    let query = BoardQuery::new(
        FileDocumentStore::new(&input_path),
        "local",
        "deals",
        default_columns(),
    );
    let board = query.board().await?;

    assert_eq!(board.len(), default_columns().len());

    let incoming: Vec<&str> = board[0].items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(incoming, vec!["a", "d"]);
    assert!(board[0].items.iter().all(|c| c.state == "Incoming"));

    let produced = board.iter().find(|c| c.id() == "produced").unwrap();
    assert_eq!(produced.items.len(), 1);
    assert_eq!(produced.items[0].company_name, "Globex");

    let placed: usize = board.iter().map(|c| c.items.len()).sum();
    assert_eq!(placed, 3);

    Ok(())
}

/// Columns and their metadata come from the config file
#[tokio::test]
async fn test_saved_documents_with_configured_columns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("deals.json");
    let config_path = temp_dir.path().join("board.toml");

    tokio::fs::write(
        &input_path,
        r#"{"total":1,"documents":[{"$id":"x","status":"hot","name":"Big","price":5,"customers":{"name":"Hooli"}}]}"#,
    )
    .await?;
    tokio::fs::write(
        &config_path,
        r##"
[store]
endpoint = "https://cloud.appwrite.io/v1"
project_id = "crm-project"
database_id = "crm"
collection_id = "deals"

[[columns]]
id = "hot"
name = "Hot leads"
color = "#ef4444"
"##,
    )
    .await?;

    let config = BoardConfig::from_file(&config_path)?;
    let query = BoardQuery::from_config(FileDocumentStore::new(&input_path), &config);
    let board = query.board().await?;

    let json = serde_json::to_value(&board)?;
    assert_eq!(json[0]["id"], "hot");
    assert_eq!(json[0]["color"], "#ef4444");
    assert_eq!(json[0]["items"][0]["state"], "Hot leads");
    assert_eq!(json[0]["items"][0]["companyName"], "Hooli");

    Ok(())
}

/// Saved documents project with a config whose store credentials are unset
#[tokio::test]
async fn test_offline_columns_ignore_unresolved_credentials() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("deals.json");
    let config_path = temp_dir.path().join("board.toml");

    tokio::fs::write(
        &input_path,
        r#"{"total":2,"documents":[
            {"$id":"x","status":"todo","name":"Big","price":5,"customers":{"name":"Hooli"}},
            {"$id":"y","status":7,"name":"Odd"}
        ]}"#,
    )
    .await?;
    tokio::fs::write(
        &config_path,
        r#"
[store]
endpoint = "https://cloud.appwrite.io/v1"
project_id = "crm-project"
api_key = "${DEAL_BOARD_OFFLINE_TEST_UNSET_KEY}"
database_id = "crm"
collection_id = "deals"
"#,
    )
    .await?;

    let config = BoardConfig::from_file(&config_path)?;
    assert!(config.validate_columns().is_ok());

    let query = BoardQuery::from_config(FileDocumentStore::new(&input_path), &config);
    let board = query.board().await?;

    let placed: Vec<&str> = board
        .iter()
        .flat_map(|c| c.items.iter().map(|card| card.id.as_str()))
        .collect();
    assert_eq!(placed, vec!["x"]);

    Ok(())
}
