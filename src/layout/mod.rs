//! Column-block layout of the encoded training matrix.
//!
//! The encoder that produces the training matrix also describes it: one entry
//! per original column, each an ordered list of [`SpanInfo`] sub-blocks. This
//! module wraps that description and exposes the discrete-column view the
//! sampler is built on.

pub mod classifier;

pub use classifier::{ColumnLayoutClassifier, DiscreteColumnSpan};

use crate::core::error::Result;
use crate::core::types::SpanInfo;

use serde::{Deserialize, Serialize};

/// Ordered per-column span lists describing an encoded matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout {
    columns: Vec<Vec<SpanInfo>>,
}

impl ColumnLayout {
    /// Wrap per-column span lists
    pub fn new(columns: Vec<Vec<SpanInfo>>) -> Self {
        ColumnLayout { columns }
    }

    /// Per-column span lists
    pub fn columns(&self) -> &[Vec<SpanInfo>] {
        &self.columns
    }

    /// Number of original columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Sum of every span width
    pub fn total_width(&self) -> usize {
        self.columns
            .iter()
            .map(|column| ColumnLayoutClassifier::column_width(column))
            .sum()
    }

    /// Number of discrete columns
    pub fn n_discrete_columns(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| ColumnLayoutClassifier::is_discrete_column(column))
            .count()
    }

    /// Spans of the discrete columns, without checking the total width
    pub fn discrete_spans(&self) -> Vec<DiscreteColumnSpan> {
        ColumnLayoutClassifier::walk(&self.columns).0
    }

    /// Spans of the discrete columns, failing with
    /// [`SamplerError::LayoutMismatch`](crate::SamplerError::LayoutMismatch)
    /// unless the layout covers exactly `matrix_width` columns
    pub fn validate_width(&self, matrix_width: usize) -> Result<Vec<DiscreteColumnSpan>> {
        ColumnLayoutClassifier::discrete_spans(&self.columns, matrix_width)
    }
}

impl From<Vec<Vec<SpanInfo>>> for ColumnLayout {
    fn from(columns: Vec<Vec<SpanInfo>>) -> Self {
        ColumnLayout::new(columns)
    }
}
