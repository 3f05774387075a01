//! CLI module for contacts
//!
//! Provides command-line interface for the registry server.

pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};

/// Contacts registry - in-memory contact list REST API
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CONTACTS_CONFIG              Config file path (TOML)
    CONTACTS_HOST                Bind address (default: 0.0.0.0)
    CONTACTS_PORT                Listen port (default: 8080)
    CONTACTS_STORE_TIMEOUT_SECS  Store call timeout (default: 10)
    CONTACTS_SEED_FILE           JSON array of contacts loaded at startup
    CONTACTS_DEMO_SEED           Register demo contacts at startup
    CONTACTS_LOG_LEVEL           Log level (default: info, RUST_LOG wins)
    CONTACTS_LOG_FORMAT          Log format: text | json
    CONTACTS_URL                 Server URL used by `status`
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the registry server
    Serve(serve::ServeArgs),
    /// Query a running server's health endpoint
    Status(status::StatusArgs),
}
