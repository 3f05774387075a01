//! status subcommand
//!
//! Queries the health endpoint of a running server.

use clap::Args;
use contacts_common::protocol::{ErrorResponse, HealthResponse};
use std::time::Duration;

/// Arguments for the status subcommand
#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:8080", env = "CONTACTS_URL")]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,
}

/// Execute the status command
pub async fn execute(args: &StatusArgs) -> Result<(), anyhow::Error> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let url = health_url(&args.url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if status.is_success() {
        let health: HealthResponse = response.json().await?;
        println!("{}", format_health(&args.url, &health));
        Ok(())
    } else {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => format!("{} ({})", body.error, body.code),
            Err(_) => status.to_string(),
        };
        anyhow::bail!("{} is unhealthy: {}", args.url, message)
    }
}

fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url.trim_end_matches('/'))
}

fn format_health(base_url: &str, health: &HealthResponse) -> String {
    format!(
        "URL\tSTATUS\tRECORDS\tSTARTED\n{}\t{:?}\t{}\t{}",
        base_url, health.status, health.records, health.started_at
    )
}
