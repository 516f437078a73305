//! Discrete-column classification and span walking.

use crate::core::error::{Result, SamplerError};
use crate::core::types::{ActivationFn, SpanInfo};

use serde::{Deserialize, Serialize};

/// Position of one discrete column inside the encoded matrix and inside the
/// conditioning-vector space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteColumnSpan {
    /// Index of the column in the full layout (discrete and non-discrete)
    pub column_index: usize,
    /// First encoded-matrix column of the one-hot block
    pub matrix_start: usize,
    /// First position of this column's slice in the conditioning vector
    pub cond_start: usize,
    /// Width of the one-hot block
    pub n_categories: usize,
}

impl DiscreteColumnSpan {
    /// One past the last encoded-matrix column of the block
    pub fn matrix_end(&self) -> usize {
        self.matrix_start + self.n_categories
    }

    /// One past the last conditioning-vector position of the slice
    pub fn cond_end(&self) -> usize {
        self.cond_start + self.n_categories
    }
}

/// Classifies layout columns as discrete or non-discrete.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnLayoutClassifier;

impl ColumnLayoutClassifier {
    /// A column is discrete iff it is a single softmax span.
    pub fn is_discrete_column(spans: &[SpanInfo]) -> bool {
        matches!(
            spans,
            [SpanInfo {
                activation_fn: ActivationFn::Softmax,
                ..
            }]
        )
    }

    /// Total encoded width of one column
    pub fn column_width(spans: &[SpanInfo]) -> usize {
        spans.iter().map(|span| span.dim).sum()
    }

    /// Walk `columns` with a running matrix cursor and return every discrete
    /// column's span, together with the cursor's final position.
    ///
    /// Non-discrete columns only advance the cursor.
    pub fn walk(columns: &[Vec<SpanInfo>]) -> (Vec<DiscreteColumnSpan>, usize) {
        let mut spans = Vec::new();
        let mut st = 0;
        let mut cond_st = 0;

        for (column_index, column) in columns.iter().enumerate() {
            if Self::is_discrete_column(column) {
                let n_categories = column[0].dim;
                spans.push(DiscreteColumnSpan {
                    column_index,
                    matrix_start: st,
                    cond_start: cond_st,
                    n_categories,
                });
                st += n_categories;
                cond_st += n_categories;
            } else {
                st += Self::column_width(column);
            }
        }

        (spans, st)
    }

    /// Walk `columns` and check that they cover exactly `matrix_width`
    /// encoded columns.
    pub fn discrete_spans(
        columns: &[Vec<SpanInfo>],
        matrix_width: usize,
    ) -> Result<Vec<DiscreteColumnSpan>> {
        let (spans, st) = Self::walk(columns);
        crate::ensure!(
            st == matrix_width,
            SamplerError::layout_mismatch(st, matrix_width)
        );
        Ok(spans)
    }
}
