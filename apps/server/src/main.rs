use anyhow::Context;
use smint::domain::config::ApiConfig;
use smint::kernel::config::load_config;
use smint_logger::{LevelFilter, Logger};
use smint_server::Server;
use std::str::FromStr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let level = LevelFilter::from_str(&cfg.logger.level)
        .map_err(|_| anyhow::anyhow!("Invalid logger level: {}", cfg.logger.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let _log = match &cfg.logger.path {
        Some(path) => builder.path(path).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Server::builder().config(cfg).build().await?.run().await
}
