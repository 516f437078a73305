//! Conditioning-vector construction.

use super::ConditionalSampler;
use crate::core::error::{Result, SamplerError};
use crate::core::types::{CategoryId, ColumnIdInfo, DiscreteColumnId, MatrixElement};

use ndarray::{Array1, Array2};
use rand::Rng;

/// A batch of training-time conditions.
///
/// All four arrays are aligned by row: row `i` conditions on discrete column
/// `discrete_column_id[i]` taking category `category_id_in_col[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CondVec {
    /// `(batch, dim_cond_vec)` one-hot conditioning vectors
    pub cond: Array2<f32>,
    /// `(batch, n_discrete_columns)` one-hot selected column
    pub mask: Array2<f32>,
    /// `(batch,)` selected discrete column
    pub discrete_column_id: Array1<DiscreteColumnId>,
    /// `(batch,)` selected category within that column
    pub category_id_in_col: Array1<CategoryId>,
}

impl CondVec {
    /// Number of rows in the batch
    pub fn batch_size(&self) -> usize {
        self.cond.nrows()
    }

    /// Split into `(cond, mask, discrete_column_id, category_id_in_col)`
    pub fn into_parts(
        self,
    ) -> (
        Array2<f32>,
        Array2<f32>,
        Array1<DiscreteColumnId>,
        Array1<CategoryId>,
    ) {
        (
            self.cond,
            self.mask,
            self.discrete_column_id,
            self.category_id_in_col,
        )
    }
}

impl<'a, A: MatrixElement> ConditionalSampler<'a, A> {
    /// Random training-time conditions for a batch.
    ///
    /// Discrete columns are chosen uniformly, so every column is conditioned
    /// on equally often regardless of its cardinality. The category within
    /// the chosen column follows the column's (possibly log-smoothed)
    /// frequency distribution. Returns `None` when the layout has no
    /// discrete columns.
    pub fn sample_condvec<R: Rng + ?Sized>(&self, rng: &mut R, batch: usize) -> Option<CondVec> {
        let n_discrete = self.n_discrete_columns();
        if n_discrete == 0 {
            return None;
        }

        let discrete_column_id =
            Array1::from_iter((0..batch).map(|_| rng.gen_range(0..n_discrete)));
        let category_id_in_col = self.distribution.draw_batch(rng, discrete_column_id.view());

        let mut cond = Array2::zeros((batch, self.n_categories));
        let mut mask = Array2::zeros((batch, n_discrete));
        for (i, (&column, &category)) in discrete_column_id
            .iter()
            .zip(category_id_in_col.iter())
            .enumerate()
        {
            mask[[i, column]] = 1.0;
            cond[[i, self.spans[column].cond_start + category]] = 1.0;
        }

        debug_assert_eq!(cond.dim(), (batch, self.n_categories));
        debug_assert_eq!(mask.dim(), (batch, n_discrete));

        Some(CondVec {
            cond,
            mask,
            discrete_column_id,
            category_id_in_col,
        })
    }

    /// Generation-time conditions following the training data.
    ///
    /// Each row picks a random training row and a random discrete column and
    /// conditions on the category that row actually holds there. Returns
    /// `None` when the layout has no discrete columns or the training matrix
    /// has no rows to follow.
    pub fn sample_original_condvec<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        batch: usize,
    ) -> Option<Array2<f32>> {
        let n_discrete = self.n_discrete_columns();
        let n_rows = self.n_rows();
        if n_discrete == 0 || n_rows == 0 {
            return None;
        }

        let mut cond = Array2::zeros((batch, self.n_categories));
        for mut out in cond.outer_iter_mut() {
            let row = rng.gen_range(0..n_rows);
            let column = rng.gen_range(0..n_discrete);
            let span = &self.spans[column];
            let pick = self.decode_category(row, span.matrix_start, span.n_categories);
            out[span.cond_start + pick] = 1.0;
        }

        Some(cond)
    }

    /// Conditions every row of a batch on the same fixed column value.
    pub fn generate_cond_from_condition_column_info(
        &self,
        condition_info: ColumnIdInfo,
        batch_size: usize,
    ) -> Result<Array2<f32>> {
        let span = self.span(condition_info.discrete_column_id)?;
        if condition_info.value_id >= span.n_categories {
            return Err(SamplerError::index_out_of_bounds(
                condition_info.value_id,
                span.n_categories,
            ));
        }

        let mut vec = Array2::zeros((batch_size, self.n_categories));
        vec.column_mut(span.cond_start + condition_info.value_id)
            .fill(1.0);
        Ok(vec)
    }
}
