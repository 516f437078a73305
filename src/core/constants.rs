//! Default values and environment keys used across the crate.

/// Log-frequency smoothing of category probabilities is enabled by default.
pub const DEFAULT_LOG_FREQUENCY: bool = true;

/// Strict one-hot validation of discrete blocks is disabled by default.
pub const DEFAULT_STRICT_ONE_HOT: bool = false;

/// Row-index construction fans out over discrete columns by default.
pub const DEFAULT_PARALLEL_INDEX: bool = true;

/// Environment variable overriding `log_frequency`.
pub const ENV_LOG_FREQUENCY: &str = "CONDSAMPLER_LOG_FREQUENCY";

/// Environment variable overriding `seed`.
pub const ENV_SEED: &str = "CONDSAMPLER_SEED";

/// Environment variable overriding `strict_one_hot`.
pub const ENV_STRICT_ONE_HOT: &str = "CONDSAMPLER_STRICT_ONE_HOT";

/// Environment variable overriding `parallel_index`.
pub const ENV_PARALLEL_INDEX: &str = "CONDSAMPLER_PARALLEL_INDEX";

/// Environment variable overriding `parallel_min_columns`.
pub const ENV_PARALLEL_MIN_COLUMNS: &str = "CONDSAMPLER_PARALLEL_MIN_COLUMNS";

/// Crate version string
pub const CONDSAMPLER_VERSION: &str = env!("CARGO_PKG_VERSION");
