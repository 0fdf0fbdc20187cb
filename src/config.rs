use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;

const DEFAULT_CONFIG_FILE: &str = "vibe";
const ENV_PREFIX: &str = "VIBE";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Artificial pause before analysis starts, in milliseconds.
    pub analysis_delay_ms: u64,
    pub decode_timeout_ms: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 1500,
            decode_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layers defaults, an optional TOML file and `VIBE_*` environment variables.
    ///
    /// An explicit `path` must exist; without one, `vibe.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as `load`, reading overrides from `environment` instead of the
    /// process environment.
    pub fn load_with(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("analysis_delay_ms", defaults.analysis_delay_ms)?
            .set_default("decode_timeout_ms", defaults.decode_timeout_ms)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decode_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "decode_timeout_ms must be greater than 0".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::Message(format!("unknown log level: {}", self.log_level)))
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn decode_timeout(&self) -> Duration {
        Duration::from_millis(self.decode_timeout_ms)
    }
}
