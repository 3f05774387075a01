//! Contacts Registry Server Entry Point

use clap::Parser;
use contacts::cli::{serve, status, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::execute(args).await,
        Commands::Status(args) => status::execute(&args).await,
    }
}
