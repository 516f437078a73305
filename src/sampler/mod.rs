//! Conditional sampler for conditional tabular GAN training and generation.
//!
//! A [`ConditionalSampler`] is built once from the encoded training matrix
//! and its [`ColumnLayout`]. During training it hands out random
//! conditioning vectors ([`ConditionalSampler::sample_condvec`]) together
//! with real rows that satisfy them ([`ConditionalSampler::sample_data`]);
//! during generation it produces conditioning vectors that follow the
//! empirical data ([`ConditionalSampler::sample_original_condvec`]) or a
//! fixed caller-chosen condition
//! ([`ConditionalSampler::generate_cond_from_condition_column_info`]).
//!
//! The sampler never mutates anything after construction. Every sampling
//! call borrows the sampler immutably and takes the caller's random
//! generator, so one sampler can serve several threads at once.

pub mod condvec;
pub mod data;
pub mod index;
pub mod probability;

pub use condvec::CondVec;
pub use index::CategoryRowIndex;
pub use probability::CategoryDistribution;

use crate::config::SamplerConfig;
use crate::core::error::{Result, SamplerError};
use crate::core::types::{CategoryId, DiscreteColumnId, MatrixElement, RowId};
use crate::layout::{ColumnLayout, DiscreteColumnSpan};

use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape summary of a constructed sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerSummary {
    /// Training rows
    pub n_rows: usize,
    /// Encoded matrix width
    pub matrix_width: usize,
    /// Columns in the layout, discrete or not
    pub n_columns: usize,
    /// Discrete columns
    pub n_discrete_columns: usize,
    /// Conditioning-vector width
    pub n_categories: usize,
    /// Widest discrete column
    pub max_category: usize,
    /// Whether log-frequency smoothing was applied
    pub log_frequency: bool,
}

impl fmt::Display for SamplerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows x {} encoded columns, {} of {} columns discrete, \
             cond width {} (max {} categories), log_frequency={}",
            self.n_rows,
            self.matrix_width,
            self.n_discrete_columns,
            self.n_columns,
            self.n_categories,
            self.max_category,
            self.log_frequency
        )
    }
}

/// Samples conditioning vectors and matching training rows.
///
/// `A` is the element type of the encoded matrix, which is borrowed for the
/// sampler's lifetime.
#[derive(Debug, Clone)]
pub struct ConditionalSampler<'a, A: MatrixElement = f32> {
    data: ArrayView2<'a, A>,
    n_columns: usize,
    spans: Vec<DiscreteColumnSpan>,
    distribution: CategoryDistribution,
    row_index: CategoryRowIndex,
    n_categories: usize,
    config: SamplerConfig,
}

impl<'a, A: MatrixElement> ConditionalSampler<'a, A> {
    /// Build the sampler.
    ///
    /// Fails with [`SamplerError::LayoutMismatch`] when the layout does not
    /// cover `data`'s columns exactly. A layout without discrete columns, a
    /// matrix without rows and a discrete column without active entries are
    /// all accepted; requests that need rows from them fail at call time.
    pub fn new(
        data: ArrayView2<'a, A>,
        layout: &ColumnLayout,
        config: SamplerConfig,
    ) -> Result<Self> {
        config.validate()?;

        let spans = layout.validate_width(data.ncols())?;
        let parallel = config.use_parallel_index(spans.len());
        let row_index = CategoryRowIndex::build(data, &spans, config.strict_one_hot, parallel)?;
        let distribution = CategoryDistribution::fit(data, &spans, config.log_frequency);
        let n_categories = spans.iter().map(|span| span.n_categories).sum();

        let sampler = ConditionalSampler {
            data,
            n_columns: layout.num_columns(),
            spans,
            distribution,
            row_index,
            n_categories,
            config,
        };

        for (id, span) in sampler.spans.iter().enumerate() {
            log::debug!(
                "Discrete column {} (layout column {}): {} categories, matrix offset {}, cond offset {}",
                id,
                span.column_index,
                span.n_categories,
                span.matrix_start,
                span.cond_start
            );
        }
        log::info!("Built conditional sampler: {}", sampler.summary());

        Ok(sampler)
    }

    /// Build the sampler with default settings and the given smoothing flag
    pub fn with_log_frequency(
        data: ArrayView2<'a, A>,
        layout: &ColumnLayout,
        log_frequency: bool,
    ) -> Result<Self> {
        Self::new(data, layout, SamplerConfig::with_log_frequency(log_frequency))
    }

    /// Total conditioning-vector width
    pub fn dim_cond_vec(&self) -> usize {
        self.n_categories
    }

    /// Number of discrete columns
    pub fn n_discrete_columns(&self) -> usize {
        self.spans.len()
    }

    /// Number of training rows
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// The borrowed training matrix
    pub fn data(&self) -> ArrayView2<'a, A> {
        self.data
    }

    /// Configuration the sampler was built with
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Offsets and widths of every discrete column
    pub fn discrete_columns(&self) -> &[DiscreteColumnSpan] {
        &self.spans
    }

    /// Row-by-category index
    pub fn row_index(&self) -> &CategoryRowIndex {
        &self.row_index
    }

    /// Padded `(n_discrete_columns, max_category)` probability matrix
    pub fn probability_matrix(&self) -> ArrayView2<'_, f64> {
        self.distribution.matrix()
    }

    /// Category probabilities of one discrete column over its true range
    pub fn category_probabilities(&self, column: DiscreteColumnId) -> Result<ArrayView1<'_, f64>> {
        self.distribution
            .probabilities(column)
            .ok_or_else(|| SamplerError::index_out_of_bounds(column, self.n_discrete_columns()))
    }

    /// Training rows whose discrete `column` takes `category`
    pub fn rows_for_category(
        &self,
        column: DiscreteColumnId,
        category: CategoryId,
    ) -> Result<&[RowId]> {
        let span = self.span(column)?;
        if category >= span.n_categories {
            return Err(SamplerError::index_out_of_bounds(category, span.n_categories));
        }
        self.row_index
            .rows(column, category)
            .ok_or_else(|| SamplerError::index_out_of_bounds(category, span.n_categories))
    }

    /// Shape summary
    pub fn summary(&self) -> SamplerSummary {
        SamplerSummary {
            n_rows: self.n_rows(),
            matrix_width: self.data.ncols(),
            n_columns: self.n_columns,
            n_discrete_columns: self.n_discrete_columns(),
            n_categories: self.n_categories,
            max_category: self.distribution.max_category(),
            log_frequency: self.config.log_frequency,
        }
    }

    fn span(&self, column: DiscreteColumnId) -> Result<&DiscreteColumnSpan> {
        self.spans
            .get(column)
            .ok_or_else(|| SamplerError::index_out_of_bounds(column, self.spans.len()))
    }
}
