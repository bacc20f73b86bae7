use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Upper bounds enforced while decoding untrusted input.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    pub max_rows: usize,
    pub max_columns: usize,
    /// Rows times columns of a single batch.
    pub max_cells: usize,
    /// Largest single value payload (string, big-integer bytes, opaque object).
    pub max_value_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub stdout_level: String,
    pub file_level: String,
    /// Daily rolling log files are written here when set.
    pub log_dir: Option<String>,
}

pub const DEFAULT_MAX_ROWS: usize = 1 << 20;
pub const DEFAULT_MAX_COLUMNS: usize = 4096;
pub const DEFAULT_MAX_CELLS: usize = 1 << 22;
pub const DEFAULT_MAX_VALUE_BYTES: usize = 64 * 1024 * 1024;

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("TEIID_BATCH_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("codec.max_rows", DEFAULT_MAX_ROWS as u64)?
        .set_default("codec.max_columns", DEFAULT_MAX_COLUMNS as u64)?
        .set_default("codec.max_cells", DEFAULT_MAX_CELLS as u64)?
        .set_default("codec.max_value_bytes", DEFAULT_MAX_VALUE_BYTES as u64)?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
