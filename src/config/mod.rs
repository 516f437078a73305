//! Configuration management for the conditional sampler.
//!
//! A [`SamplerConfig`] can be built programmatically through
//! [`SamplerConfigBuilder`], loaded from a `.json`/`.toml` file, or taken
//! from `CONDSAMPLER_*` environment variables.

pub mod core;

pub use self::core::{SamplerConfig, SamplerConfigBuilder, DEFAULT_PARALLEL_MIN_COLUMNS};
