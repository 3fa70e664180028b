use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::error::{NexError, Result};
use crate::models::reader_config::ReaderConfig;

pub const CONFIG_ENV_VAR: &str = "NEX_READER_CONFIG";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReaderConfig> {
    let file_path = path.as_ref();

    let data = fs::read_to_string(file_path)
        .map_err(|e| NexError::Config(format!("File read Error: {e} {}", file_path.display())))?;

    let config = parse_config(&data)?;
    info!("Reader config loaded from {}", file_path.display());

    Ok(config)
}

pub fn parse_config(data: &str) -> Result<ReaderConfig> {
    let config: ReaderConfig = serde_json::from_str(data)
        .map_err(|e| NexError::Config(format!("JSON Parse Error: {e}")))?;

    if config.buffer_capacity == 0 {
        return Err(NexError::Config("buffer_capacity must be > 0".to_string()));
    }

    Ok(config)
}

/// Config from the file named by `NEX_READER_CONFIG`, defaults when unset.
pub fn config_from_env() -> Result<ReaderConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config(path),
        None => {
            debug!("{} not set, using default reader config", CONFIG_ENV_VAR);
            Ok(ReaderConfig::default())
        }
    }
}
