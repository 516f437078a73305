//! Core infrastructure shared by every other module.
//!
//! - [`types`]: span descriptors, activation tags and id aliases
//! - [`constants`]: defaults and environment keys
//! - [`error`]: the crate error type and `Result` alias
//! - [`random`]: construction of seeded random generators

pub mod constants;
pub mod error;
pub mod random;
pub mod types;

pub use constants::*;
pub use error::{Result, SamplerError};
pub use random::{rng_from_seed, SamplerRng};
pub use types::*;

use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/// Initialize the logging subsystem.
///
/// Defaults the filter to `info` when `RUST_LOG` is unset. Safe to call more
/// than once and alongside a logger installed by the host application.
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        // Another logger may already be installed by the caller.
        let _ = env_logger::Builder::from_env(env).try_init();
        log::debug!("condsampler {} logging initialized", CONDSAMPLER_VERSION);
    });
}
