use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "(gate) ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub show_intro: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: String,
}

/// State applied before the first prompt
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    pub preload: Option<PathBuf>,
    pub flight: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `GATE_SESSION__FLIGHT=AA311` sets `session.flight`
            .add_source(
                config::Environment::with_prefix("GATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        tracing::debug!(?config, %run_mode, "Loaded configuration");
        Ok(config)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("shell.prompt", DEFAULT_PROMPT)?
        .set_default("shell.show_intro", true)?
        .set_default("logging.filter", DEFAULT_LOG_FILTER)
}
