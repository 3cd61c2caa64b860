use clap::Parser;
use deal_board::config::columns::default_columns;
use deal_board::utils::error::ErrorSeverity;
use deal_board::utils::{logger, validation::Validate};
use deal_board::{
    Board, BoardConfig, BoardQuery, CliConfig, FileDocumentStore, HttpDocumentStore, Result,
};
use std::path::Path;

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting deal-board");
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Loading the board failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(args: &CliConfig) -> Result<()> {
    let board = match &args.input {
        Some(input) => load_offline(args, input).await?,
        None => load_remote(args).await?,
    };

    for column in &board {
        tracing::info!("📋 {}: {} cards", column.name(), column.items.len());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&board)?
    } else {
        serde_json::to_string(&board)?
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            tracing::info!("📁 Board saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn load_remote(args: &CliConfig) -> Result<Board> {
    tracing::info!("📁 Loading configuration from: {}", args.config);
    let mut config = BoardConfig::from_file(&args.config)?;

    if let Some(endpoint) = &args.endpoint {
        tracing::info!("🔧 Store endpoint overridden to: {}", endpoint);
        config.store.endpoint = endpoint.clone();
    }

    config.validate()?;

    let store = HttpDocumentStore::from_config(&config);
    BoardQuery::from_config(store, &config).board().await
}

/// Projects a saved document list. Columns come from the config file when
/// one exists, otherwise the built-in pipeline stages are used.
async fn load_offline(args: &CliConfig, input: &str) -> Result<Board> {
    tracing::info!("📂 Reading deals from: {}", input);
    let store = FileDocumentStore::new(input);

    if Path::new(&args.config).exists() {
        let config = BoardConfig::from_file(&args.config)?;
        config.validate_columns()?;
        return BoardQuery::from_config(store, &config).board().await;
    }

    tracing::debug!("No config at {}, using default columns", args.config);
    BoardQuery::new(store, "local", "deals", default_columns())
        .board()
        .await
}
