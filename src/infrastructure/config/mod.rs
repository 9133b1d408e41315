use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::dataset::AnalysisConfig;
use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "app_profiles.toml";
pub const ENV_PREFIX: &str = "APP_PROFILES_";

/// Layers defaults, an optional TOML file, and `APP_PROFILES_*` env vars
pub struct ConfigService {
    config_file: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(CONFIG_FILE),
        }
    }

    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = path.as_ref().to_path_buf();
        self
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AnalysisConfig::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load `.env`, extract and validate the config
    pub fn load(&self) -> Result<AnalysisConfig> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(AppError::ConfigError(format!("Failed to load .env: {}", err)));
            }
        }

        let config: AnalysisConfig = self
            .figment()
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Load, then let `<apple.csv> <google.csv>` positional args override the paths
    pub fn load_with_args<I>(&self, args: I) -> Result<AnalysisConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let config = self.load()?;
        let config = apply_path_args(config, args)?;
        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_path_args<I>(mut config: AnalysisConfig, args: I) -> Result<AnalysisConfig>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [] => {}
        [apple, google] => {
            config.apple_path = PathBuf::from(apple);
            config.google_path = PathBuf::from(google);
        }
        _ => {
            return Err(AppError::ValidationError(
                "usage: app_profiles [<apple.csv> <google.csv>]".to_string(),
            ))
        }
    }
    Ok(config)
}
