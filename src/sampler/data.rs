//! Retrieval of training rows matching sampled conditions.

use super::ConditionalSampler;
use crate::core::error::{Result, SamplerError};
use crate::core::types::{CategoryId, DiscreteColumnId, MatrixElement, RowId};

use ndarray::{s, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

impl<'a, A: MatrixElement> ConditionalSampler<'a, A> {
    /// Draw training rows, with replacement.
    ///
    /// Without a condition, returns `n` rows drawn uniformly from the whole
    /// matrix. With `Some((col, opt))`, `n` is ignored and row `i` of the
    /// result is drawn uniformly from the rows whose discrete column `col[i]`
    /// takes category `opt[i]`.
    ///
    /// Fails with [`SamplerError::EmptyCategory`] when a requested pair has
    /// no training rows.
    pub fn sample_data<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
        condition: Option<(&[DiscreteColumnId], &[CategoryId])>,
    ) -> Result<Array2<A>> {
        let idx: Vec<RowId> = match condition {
            None => {
                let n_rows = self.n_rows();
                if n_rows == 0 && n > 0 {
                    return Err(SamplerError::invalid_parameter(
                        "n",
                        n.to_string(),
                        "cannot draw rows from an empty training matrix",
                    ));
                }
                (0..n).map(|_| rng.gen_range(0..n_rows)).collect()
            }
            Some((col, opt)) => {
                crate::ensure!(
                    col.len() == opt.len(),
                    SamplerError::dimension_mismatch(
                        format!("{} category ids", col.len()),
                        format!("{} category ids", opt.len()),
                    )
                );

                col.iter()
                    .zip(opt)
                    .map(|(&c, &o)| {
                        self.rows_for_category(c, o)?
                            .choose(&mut *rng)
                            .copied()
                            .ok_or_else(|| SamplerError::empty_category(c, o))
                    })
                    .collect::<Result<_>>()?
            }
        };

        let rows = self.data.select(Axis(0), &idx);
        debug_assert_eq!(rows.dim(), (idx.len(), self.data.ncols()));
        Ok(rows)
    }

    /// Category that training row `row` holds in discrete `column`.
    ///
    /// Ties in the one-hot block resolve to the lowest category.
    pub fn category_of_row(&self, row: RowId, column: DiscreteColumnId) -> Result<CategoryId> {
        let span = self.span(column)?;
        if row >= self.n_rows() {
            return Err(SamplerError::index_out_of_bounds(row, self.n_rows()));
        }
        Ok(self.decode_category(row, span.matrix_start, span.n_categories))
    }

    pub(crate) fn decode_category(&self, row: RowId, matrix_start: usize, n: usize) -> CategoryId {
        let block = self.data.slice(s![row, matrix_start..matrix_start + n]);
        let mut best = 0;
        for (category, &value) in block.iter().enumerate() {
            if value > block[best] {
                best = category;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::rng_from_seed;
    use crate::core::types::SpanInfo;
    use crate::layout::ColumnLayout;
    use ndarray::array;

    fn scenario() -> (Array2<f32>, ColumnLayout) {
        let data = array![[1.0f32, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        let layout = ColumnLayout::new(vec![vec![SpanInfo::softmax(2)]]);
        (data, layout)
    }

    #[test]
    fn test_conditioned_rows_match() {
        let (data, layout) = scenario();
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();
        let mut rng = rng_from_seed(Some(17));

        let rows = sampler
            .sample_data(&mut rng, 2, Some((&[0usize, 0, 0][..], &[1usize, 0, 1][..])))
            .unwrap();
        assert_eq!(rows.dim(), (3, 2));
        assert_eq!(rows.row(0).to_vec(), vec![0.0, 1.0]);
        assert_eq!(rows.row(1).to_vec(), vec![1.0, 0.0]);
        assert_eq!(rows.row(2).to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_unconditioned_rows() {
        let (data, layout) = scenario();
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();
        let mut rng = rng_from_seed(Some(2));

        let rows = sampler.sample_data(&mut rng, 7, None).unwrap();
        assert_eq!(rows.dim(), (7, 2));
        for row in rows.outer_iter() {
            assert!(data.outer_iter().any(|r| r == row));
        }
    }

    #[test]
    fn test_empty_category_is_an_error() {
        let data = array![[1.0f32, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let layout = ColumnLayout::new(vec![vec![SpanInfo::softmax(3)]]);
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, true).unwrap();
        let mut rng = rng_from_seed(Some(2));

        let err = sampler
            .sample_data(&mut rng, 1, Some((&[0usize][..], &[2usize][..])))
            .unwrap_err();
        assert!(matches!(
            err,
            SamplerError::EmptyCategory {
                discrete_column: 0,
                category: 2
            }
        ));
    }

    #[test]
    fn test_request_validation() {
        let (data, layout) = scenario();
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();
        let mut rng = rng_from_seed(Some(2));

        assert!(matches!(
            sampler.sample_data(&mut rng, 2, Some((&[0usize, 0][..], &[1usize][..]))),
            Err(SamplerError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            sampler.sample_data(&mut rng, 1, Some((&[1usize][..], &[0usize][..]))),
            Err(SamplerError::IndexOutOfBounds { index: 1, length: 1 })
        ));
        assert!(matches!(
            sampler.sample_data(&mut rng, 1, Some((&[0usize][..], &[5usize][..]))),
            Err(SamplerError::IndexOutOfBounds { index: 5, length: 2 })
        ));
    }

    #[test]
    fn test_category_of_row() {
        let (data, layout) = scenario();
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();

        assert_eq!(sampler.category_of_row(0, 0).unwrap(), 0);
        assert_eq!(sampler.category_of_row(3, 0).unwrap(), 1);
        assert!(sampler.category_of_row(4, 0).is_err());
        assert!(sampler.category_of_row(0, 1).is_err());
    }
}
