use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};
use tracing::info;

pub fn init() -> anyhow::Result<()> {
    init_with(&CONFIG.logging)
}

pub fn init_with(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let stdout_filter = cfg
        .stdout_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;

    let stdout_layer = fmt::layer().with_ansi(true).with_filter(stdout_filter);

    let file_layer = match &cfg.log_dir {
        Some(dir) => {
            let file_filter = cfg
                .file_level
                .parse::<tracing_subscriber::filter::LevelFilter>()?;
            let file_appender = tracing_appender::rolling::daily(dir, "teiid_batch.log");
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_filter(file_filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    info!("Logging initialized");
    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("teiid_batch=trace".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
