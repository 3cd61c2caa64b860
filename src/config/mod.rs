pub mod columns;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "deal-board")]
#[command(about = "Fetch deals and print them grouped as a kanban board")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "board.toml")]
    pub config: String,

    /// Read a saved document list instead of calling the store
    #[arg(long)]
    pub input: Option<String>,

    /// Write the board JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override store.endpoint from the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Pretty-print the board JSON
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
