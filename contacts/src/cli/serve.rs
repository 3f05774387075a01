//! serve サブコマンド
//!
//! 設定を解決してレジストリサーバーを起動します。

use clap::Args;
use contacts_common::config::ServerConfig;
use contacts_common::error::CommonError;
use std::path::PathBuf;
use tracing::info;

use crate::logging::{self, LogFormat};
use crate::{bootstrap, server};

/// serve サブコマンドの引数
///
/// 指定したフラグは設定ファイル・環境変数より優先される。
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Config file (TOML)
    #[arg(short, long, env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// JSON array of contacts to register at startup
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    /// Register the demo contacts at startup
    #[arg(long, default_value_t = false)]
    pub demo_seed: bool,

    /// Timeout for each store call, in seconds
    #[arg(long)]
    pub store_timeout_secs: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info", env = "CONTACTS_LOG_LEVEL")]
    pub log_level: String,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "CONTACTS_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl ServeArgs {
    /// フラグで設定を上書きする
    pub fn apply(&self, mut config: ServerConfig) -> Result<ServerConfig, CommonError> {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(seed_file) = &self.seed_file {
            config.seed_file = Some(seed_file.clone());
        }
        if self.demo_seed {
            config.demo_seed = true;
        }
        if let Some(secs) = self.store_timeout_secs {
            config.store_timeout_secs = secs;
        }
        config.validate()?;
        Ok(config)
    }

    /// 設定ファイル・環境変数・フラグから最終的な設定を得る
    pub fn resolve_config(&self) -> Result<ServerConfig, CommonError> {
        let config = ServerConfig::load(self.config.as_deref())?;
        self.apply(config)
    }
}

/// Execute the serve command
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    logging::init(&args.log_level, args.log_format)?;

    let config = args.resolve_config()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_addr = %config.bind_addr(),
        store_timeout_secs = config.store_timeout_secs,
        "Starting contacts registry"
    );

    let state = bootstrap::initialize(&config).await?;
    server::run(state, &config.bind_addr()).await?;
    Ok(())
}
