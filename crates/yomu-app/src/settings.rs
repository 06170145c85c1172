use std::path::PathBuf;

use clap::Parser;
use yomu_config::Config;

#[derive(Parser, Debug)]
#[command(name = "yomu", about = "Japanese tokenize-and-translate service")]
pub struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    pub bind: Option<String>,

    /// Override the listen port
    #[arg(long)]
    pub port: Option<u16>,
}

/// Config file when given, environment otherwise; CLI flags win over both
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::new(),
    };

    if let Some(bind) = &cli.bind {
        config.server.bind_addr = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.base_path = yomu_config::server::normalize_base_path(&config.server.base_path);

    Ok(config)
}
