//! # condsampler
//!
//! Conditional-vector and matched-row sampling for conditional tabular GANs.
//!
//! A conditional tabular generator learns "produce a row whose discrete
//! column C takes category V". Training it requires, at every step, a batch
//! of such conditions plus real rows that satisfy them. This crate builds the
//! indexes needed for that once, from the encoded training matrix and its
//! column layout, and then answers sampling requests without further
//! allocation beyond the returned batches.
//!
//! ## Quick Start
//!
//! ```rust
//! use condsampler::{ColumnLayout, ConditionalSampler, SamplerConfigBuilder, SpanInfo};
//! use ndarray::array;
//!
//! # fn main() -> condsampler::Result<()> {
//! // One continuous column followed by a two-category discrete column.
//! let data = array![
//!     [0.4f32, 1.0, 0.0],
//!     [-0.3, 0.0, 1.0],
//!     [0.9, 1.0, 0.0],
//! ];
//! let layout = ColumnLayout::new(vec![
//!     vec![SpanInfo::tanh(1)],
//!     vec![SpanInfo::softmax(2)],
//! ]);
//!
//! let config = SamplerConfigBuilder::new().log_frequency(true).seed(42).build()?;
//! let mut rng = config.make_rng();
//! let sampler = ConditionalSampler::new(data.view(), &layout, config)?;
//!
//! if let Some(condvec) = sampler.sample_condvec(&mut rng, 8) {
//!     let col = condvec.discrete_column_id.to_vec();
//!     let opt = condvec.category_id_in_col.to_vec();
//!     let rows = sampler.sample_data(&mut rng, 8, Some((col.as_slice(), opt.as_slice())))?;
//!     assert_eq!(rows.nrows(), 8);
//!     assert_eq!(condvec.cond.ncols(), sampler.dim_cond_vec());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error type, span descriptors, defaults and random generators
//! - [`config`]: [`SamplerConfig`] and its builder and loaders
//! - [`layout`]: [`ColumnLayout`] and the discrete-column classifier
//! - [`sampler`]: [`ConditionalSampler`] and its indexes

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

pub mod config;
pub mod core;
pub mod layout;
pub mod sampler;

pub use crate::core::{
    constants::*,
    error::{Result, SamplerError},
    random::{rng_from_seed, SamplerRng},
    types::*,
};

pub use config::{SamplerConfig, SamplerConfigBuilder};

pub use layout::{ColumnLayout, ColumnLayoutClassifier, DiscreteColumnSpan};

pub use sampler::{
    CategoryDistribution, CategoryRowIndex, CondVec, ConditionalSampler, SamplerSummary,
};

pub use crate::core::constants::CONDSAMPLER_VERSION as VERSION;

/// Initialize the library's logging.
///
/// Installs an `env_logger` logger honouring `RUST_LOG` (default `info`)
/// unless the application already installed one.
pub fn init() {
    crate::core::initialize_logging();
}
