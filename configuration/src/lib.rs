use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub type AppConfig = LyricsSyncConfig;

const ENV_PREFIX: &str = "LYRICSYNC_SERVICE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsSyncConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub aligner: AlignerRuntimeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignerRuntimeConfig {
    #[serde(default = "default_aligner_command")]
    pub command: String,
    #[serde(default = "default_aligner_args")]
    pub args: Vec<String>,
    #[serde(default = "default_workspace_root")]
    pub workspace_root: String,
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for LyricsSyncConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            aligner: AlignerRuntimeConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AlignerRuntimeConfig {
    fn default() -> Self {
        Self {
            command: default_aligner_command(),
            args: default_aligner_args(),
            workspace_root: default_workspace_root(),
            default_language: default_language(),
        }
    }
}

/// Builds the configuration from defaults, then applies any
/// `LYRICSYNC_SERVICE_*` environment overrides.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    override_string(&mut config.server.host, "SERVER_HOST");
    override_parsed(&mut config.server.port, "SERVER_PORT")?;
    override_string(&mut config.logging.level, "LOGGING_LEVEL");
    override_string(&mut config.aligner.command, "ALIGNER_COMMAND");
    override_args(&mut config.aligner.args, "ALIGNER_ARGS");
    override_string(&mut config.aligner.workspace_root, "ALIGNER_WORKSPACE_ROOT");
    override_string(&mut config.aligner.default_language, "ALIGNER_DEFAULT_LANGUAGE");

    Ok(config)
}

pub fn setup_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}_{suffix}")
}

fn override_string(target: &mut String, suffix: &str) {
    if let Ok(value) = env::var(env_key(suffix)) {
        *target = value;
    }
}

fn override_args(target: &mut Vec<String>, suffix: &str) {
    if let Ok(value) = env::var(env_key(suffix)) {
        *target = value.split_whitespace().map(str::to_string).collect();
    }
}

fn override_parsed<T>(target: &mut T, suffix: &str) -> Result<(), ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let key = env_key(suffix);
    if let Ok(value) = env::var(&key) {
        *target = value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            key,
            message: err.to_string(),
        })?;
    }
    Ok(())
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_aligner_command() -> String {
    "python3".to_string()
}

fn default_aligner_args() -> Vec<String> {
    vec!["-m".to_string(), "aeneas.tools.execute_task".to_string()]
}

fn default_workspace_root() -> String {
    "temp_sync".to_string()
}

fn default_language() -> String {
    "spa".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_deterministic() {
        let cfg = LyricsSyncConfig::default();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.bind_address(), "0.0.0.0:8000");
        assert_eq!(cfg.aligner.command, "python3");
        assert_eq!(
            cfg.aligner.args,
            vec!["-m".to_string(), "aeneas.tools.execute_task".to_string()]
        );
        assert_eq!(cfg.aligner.workspace_root, "temp_sync");
        assert_eq!(cfg.aligner.default_language, "spa");
    }

    #[test]
    fn load_config_without_overrides_matches_defaults() {
        let cfg = load_config().expect("defaults load");
        assert_eq!(cfg.server.host, LyricsSyncConfig::default().server.host);
        assert_eq!(cfg.logging.level, "info");
    }
}
