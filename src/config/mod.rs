pub mod graph;
pub mod log;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;

pub use graph::GraphConfig;
pub use log::LoggingConfig;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::OpenFileError {
        path: path.display().to_string(),
        source,
    })?;
    let config: Config = toml::from_str(&config_str)?;
    config.graph.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[graph]\nmax_depth = 3\n").unwrap();
        assert_eq!(config.graph.max_depth, 3);
        assert_eq!(config.graph.smart_money_threshold_usd, 50_000.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config("/definitely/not/here/Config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::OpenFileError { .. }));
    }

    #[test]
    fn load_config_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("solviz-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[graph]\nestimated_sol_price_usd = 200.0\n[logging]\ndirectory = \"logs\"\n").unwrap();

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.graph.estimated_sol_price_usd, 200.0);
        assert_eq!(config.logging.directory.as_deref(), Some("logs"));
    }
}
