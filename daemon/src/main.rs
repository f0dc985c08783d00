//! quizd daemon — entry point for running the quiz service.

use clap::Parser;
use quizd_engine::SessionEngine;
use quizd_rpc::RpcServer;
use quizd_store::MemoryStore;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "quizd", about = "quizd quiz service daemon")]
struct Cli {
    /// Port for the HTTP API server.
    #[arg(long, env = "QUIZD_PORT")]
    port: Option<u16>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "QUIZD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Settings readable from a TOML config file.
#[derive(Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    port: Option<u16>,
    log_level: Option<String>,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Effective settings after layering: CLI flags and env vars override the
/// config file, which overrides the built-in defaults.
struct Settings {
    port: u16,
    log_level: String,
}

impl Settings {
    fn layered(cli_port: Option<u16>, cli_log_level: Option<String>, file: FileConfig) -> Self {
        Self {
            port: cli_port.or(file.port).unwrap_or(DEFAULT_PORT),
            log_level: cli_log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<FileConfig>(&contents)?
        }
        None => FileConfig::default(),
    };

    let settings = Settings::layered(cli.port, cli.log_level, file_config);
    quizd_utils::init_tracing(&settings.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    let port = settings.port;

    let engine = Arc::new(SessionEngine::new(MemoryStore::new()));
    let server = RpcServer::new(port, engine);

    tracing::info!("starting quizd on port {port}");
    server.start().await?;
    tracing::info!("quizd exited cleanly");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_cli_flags_override_config_file() {
        let file = FileConfig {
            port: Some(8080),
            log_level: Some("debug".into()),
        };
        let settings = Settings::layered(Some(4000), Some("info".into()), file);
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn config_file_fills_unset_flags() {
        let file = FileConfig {
            port: Some(8080),
            log_level: Some("debug".into()),
        };
        let settings = Settings::layered(None, None, file);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::layered(None, None, FileConfig::default());
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
    }
}
