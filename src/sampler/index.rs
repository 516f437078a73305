//! Row-by-category index.
//!
//! For every discrete column and every category within it, the ascending list
//! of training rows whose one-hot block is non-zero at that category.

use crate::core::error::{Result, SamplerError};
use crate::core::types::{CategoryId, DiscreteColumnId, MatrixElement, RowId};
use crate::layout::DiscreteColumnSpan;

use ndarray::{s, ArrayView2};
use rayon::prelude::*;

/// Two-level index: discrete column, then category, then row ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRowIndex {
    rows: Vec<Vec<Vec<RowId>>>,
}

impl CategoryRowIndex {
    /// Scan `data` once per discrete column.
    ///
    /// With `strict` set, every row of every block must have exactly one
    /// non-zero entry.
    pub fn build<A: MatrixElement>(
        data: ArrayView2<'_, A>,
        spans: &[DiscreteColumnSpan],
        strict: bool,
        parallel: bool,
    ) -> Result<Self> {
        let rows = if parallel {
            spans
                .par_iter()
                .enumerate()
                .map(|(id, span)| Self::build_column(data, id, span, strict))
                .collect::<Result<Vec<_>>>()?
        } else {
            spans
                .iter()
                .enumerate()
                .map(|(id, span)| Self::build_column(data, id, span, strict))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(CategoryRowIndex { rows })
    }

    fn build_column<A: MatrixElement>(
        data: ArrayView2<'_, A>,
        discrete_column: DiscreteColumnId,
        span: &DiscreteColumnSpan,
        strict: bool,
    ) -> Result<Vec<Vec<RowId>>> {
        let block = data.slice(s![.., span.matrix_start..span.matrix_end()]);
        let mut by_category = vec![Vec::new(); span.n_categories];
        let mut irregular = 0usize;

        for (row, values) in block.outer_iter().enumerate() {
            let mut active = 0usize;
            for (category, value) in values.iter().enumerate() {
                if !value.is_zero() {
                    by_category[category].push(row);
                    active += 1;
                }
            }

            if active != 1 {
                if strict {
                    return Err(SamplerError::InvalidEncoding {
                        discrete_column,
                        row,
                        active,
                    });
                }
                irregular += 1;
            }
        }

        if irregular > 0 {
            log::warn!(
                "Discrete column {} (layout column {}): {} rows are not exactly one-hot",
                discrete_column,
                span.column_index,
                irregular
            );
        }

        Ok(by_category)
    }

    /// Number of indexed discrete columns
    pub fn n_columns(&self) -> usize {
        self.rows.len()
    }

    /// Rows whose `column` takes `category`
    pub fn rows(&self, column: DiscreteColumnId, category: CategoryId) -> Option<&[RowId]> {
        self.rows
            .get(column)
            .and_then(|by_category| by_category.get(category))
            .map(Vec::as_slice)
    }

    /// Whether the category sets of `column` are disjoint and cover
    /// `0..n_rows` exactly.
    pub fn is_partition(&self, column: DiscreteColumnId, n_rows: usize) -> bool {
        let Some(by_category) = self.rows.get(column) else {
            return false;
        };

        let mut seen = vec![false; n_rows];
        for &row in by_category.iter().flatten() {
            match seen.get_mut(row) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|hit| hit)
    }
}
