use super::{composition::CompositionConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::MelodyforgeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `MELODYFORGE__EVOLUTION__POPULATION_SIZE=30`.
pub const ENV_PREFIX: &str = "MELODYFORGE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub composition: CompositionConfig,
}

impl AppConfig {
    /// Validate every section; configuration errors name the offending section.
    pub fn validate(&self) -> Result<(), MelodyforgeError> {
        validate_section(&self.evolution)?;
        validate_section(&self.composition)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), MelodyforgeError> {
    section.validate().map_err(|e| match e {
        MelodyforgeError::Configuration(msg) => {
            MelodyforgeError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Defaults, then an optional TOML file, then `MELODYFORGE__*` environment variables.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), MelodyforgeError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded layered configuration: {:?}", config);

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MelodyforgeError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MelodyforgeError> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `f` and keep the result only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), MelodyforgeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
