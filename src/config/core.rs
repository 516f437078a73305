//! Sampler configuration structure, builder and loaders.

use crate::core::constants::*;
use crate::core::error::{Result, SamplerError};
use crate::core::random::{rng_from_seed, SamplerRng};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default minimum number of discrete columns before the row index is built
/// in parallel.
pub const DEFAULT_PARALLEL_MIN_COLUMNS: usize = 4;

/// Configuration of a [`ConditionalSampler`](crate::sampler::ConditionalSampler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Replace category frequencies `f` by `ln(f + 1)` before normalizing
    pub log_frequency: bool,
    /// Seed for generators built with [`SamplerConfig::make_rng`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reject discrete blocks whose rows are not exactly one-hot
    pub strict_one_hot: bool,
    /// Build the row-by-category index on the rayon pool
    pub parallel_index: bool,
    /// Minimum number of discrete columns for a parallel index build
    pub parallel_min_columns: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            log_frequency: DEFAULT_LOG_FREQUENCY,
            seed: None,
            strict_one_hot: DEFAULT_STRICT_ONE_HOT,
            parallel_index: DEFAULT_PARALLEL_INDEX,
            parallel_min_columns: DEFAULT_PARALLEL_MIN_COLUMNS,
        }
    }
}

impl SamplerConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the given smoothing flag
    pub fn with_log_frequency(log_frequency: bool) -> Self {
        SamplerConfig {
            log_frequency,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.parallel_min_columns >= 1,
            SamplerError::invalid_parameter(
                "parallel_min_columns",
                self.parallel_min_columns.to_string(),
                "must be at least 1",
            )
        );
        Ok(())
    }

    /// Whether an index over `n_discrete_columns` columns is built in parallel
    pub fn use_parallel_index(&self, n_discrete_columns: usize) -> bool {
        self.parallel_index && n_discrete_columns >= self.parallel_min_columns
    }

    /// Build a random generator from the configured seed
    pub fn make_rng(&self) -> SamplerRng {
        rng_from_seed(self.seed)
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config: SamplerConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            Some("toml") => toml::from_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(crate::config_error!(
                    "Unsupported config file format. Use .json or .toml"
                ))
            }
        };

        config.validate()?;
        log::debug!("Loaded sampler configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| crate::config_error!("Failed to serialize to TOML: {}", e))?,
            _ => {
                return Err(crate::config_error!(
                    "Unsupported config file format. Use .json or .toml"
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn load_from_environment() -> Result<Self> {
        let mut config = SamplerConfig::default();
        config.apply_environment_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to this configuration
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        if let Some(val) = read_env_bool(ENV_LOG_FREQUENCY)? {
            self.log_frequency = val;
        }

        if let Ok(val) = std::env::var(ENV_SEED) {
            let seed = val
                .trim()
                .parse()
                .map_err(|_| crate::config_error!("Invalid {}: {}", ENV_SEED, val))?;
            self.seed = Some(seed);
        }

        if let Some(val) = read_env_bool(ENV_STRICT_ONE_HOT)? {
            self.strict_one_hot = val;
        }

        if let Some(val) = read_env_bool(ENV_PARALLEL_INDEX)? {
            self.parallel_index = val;
        }

        if let Ok(val) = std::env::var(ENV_PARALLEL_MIN_COLUMNS) {
            self.parallel_min_columns = val
                .trim()
                .parse()
                .map_err(|_| {
                    crate::config_error!("Invalid {}: {}", ENV_PARALLEL_MIN_COLUMNS, val)
                })?;
        }

        self.validate()
    }
}

fn read_env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(crate::config_error!("Invalid {}: {}", key, val)),
        },
        Err(_) => Ok(None),
    }
}

/// Builder for [`SamplerConfig`]
#[derive(Debug)]
pub struct SamplerConfigBuilder {
    config: SamplerConfig,
    validation_errors: Vec<String>,
}

impl SamplerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        SamplerConfigBuilder {
            config: SamplerConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Enable or disable log-frequency smoothing
    pub fn log_frequency(mut self, enabled: bool) -> Self {
        self.config.log_frequency = enabled;
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable strict one-hot validation
    pub fn strict_one_hot(mut self, enabled: bool) -> Self {
        self.config.strict_one_hot = enabled;
        self
    }

    /// Enable or disable the parallel index build
    pub fn parallel_index(mut self, enabled: bool) -> Self {
        self.config.parallel_index = enabled;
        self
    }

    /// Set the minimum column count for a parallel index build
    pub fn parallel_min_columns(mut self, columns: usize) -> Self {
        if columns == 0 {
            self.validation_errors
                .push("parallel_min_columns must be at least 1".to_string());
        }
        self.config.parallel_min_columns = columns;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SamplerConfig> {
        if !self.validation_errors.is_empty() {
            return Err(crate::config_error!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            ));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SamplerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
