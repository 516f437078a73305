//! Per-column category distributions and inverse-CDF draws.

use crate::core::types::{CategoryId, DiscreteColumnId, MatrixElement};
use crate::layout::DiscreteColumnSpan;

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;

/// Category probabilities of every discrete column.
///
/// Rows are padded with zeros up to the widest discrete column. The
/// cumulative rows are precomputed so a draw is a single bounded scan.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDistribution {
    probabilities: Array2<f64>,
    cumulative: Array2<f64>,
    n_categories: Vec<usize>,
    last_positive: Vec<CategoryId>,
}

impl CategoryDistribution {
    /// Estimate category frequencies from the one-hot blocks of `data`.
    ///
    /// With `log_frequency`, a frequency `f` is replaced by `ln(f + 1)`
    /// before normalizing. A column without any active entry keeps an
    /// all-zero row.
    pub fn fit<A: MatrixElement>(
        data: ArrayView2<'_, A>,
        spans: &[DiscreteColumnSpan],
        log_frequency: bool,
    ) -> Self {
        let max_category = spans.iter().map(|span| span.n_categories).max().unwrap_or(0);
        let mut probabilities = Array2::zeros((spans.len(), max_category));
        let mut cumulative = Array2::zeros((spans.len(), max_category));
        let mut n_categories = Vec::with_capacity(spans.len());
        let mut last_positive = Vec::with_capacity(spans.len());

        for (id, span) in spans.iter().enumerate() {
            let block = data.slice(s![.., span.matrix_start..span.matrix_end()]);
            let mut freq = block.fold_axis(Axis(0), 0.0f64, |acc, value| {
                *acc + value.to_f64().unwrap_or(0.0)
            });
            if log_frequency {
                freq.mapv_inplace(|f| (f + 1.0).ln());
            }

            let total = freq.sum();
            if total.is_finite() && total > 0.0 {
                freq /= total;
            } else {
                // No active entries: the row stays zero and draws resolve to
                // category 0, which has no rows to match.
                log::warn!(
                    "Discrete column {} (layout column {}) has no active categories",
                    id,
                    span.column_index
                );
                freq.fill(0.0);
            }

            probabilities
                .slice_mut(s![id, ..span.n_categories])
                .assign(&freq);

            let mut running = 0.0;
            for (category, p) in freq.iter().enumerate() {
                running += p;
                cumulative[[id, category]] = running;
            }
            // Flat tail over the padding so the row stays monotone.
            cumulative.slice_mut(s![id, span.n_categories..]).fill(running);

            let last = (0..span.n_categories)
                .rev()
                .find(|&category| freq[category] > 0.0)
                .unwrap_or(0);

            n_categories.push(span.n_categories);
            last_positive.push(last);
        }

        CategoryDistribution {
            probabilities,
            cumulative,
            n_categories,
            last_positive,
        }
    }

    /// Number of discrete columns
    pub fn n_columns(&self) -> usize {
        self.n_categories.len()
    }

    /// Widest discrete column, i.e. the padded row width
    pub fn max_category(&self) -> usize {
        self.probabilities.ncols()
    }

    /// Padded `(n_discrete_columns, max_category)` probability matrix
    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.probabilities.view()
    }

    /// Probabilities of `column` over its true category range
    pub fn probabilities(&self, column: DiscreteColumnId) -> Option<ArrayView1<'_, f64>> {
        let n = *self.n_categories.get(column)?;
        Some(self.probabilities.slice(s![column, ..n]))
    }

    /// Draw one category of `column`.
    ///
    /// Returns the first category whose cumulative probability exceeds a
    /// uniform draw. The scan never leaves the true category range, and a
    /// draw past the final cumulative value resolves to the last category
    /// with positive probability.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, column: DiscreteColumnId) -> CategoryId {
        let r: f64 = rng.gen();
        let n = self.n_categories[column];
        let cdf = self.cumulative.slice(s![column, ..n]);
        cdf.iter()
            .position(|&c| c > r)
            .unwrap_or(self.last_positive[column])
    }

    /// Draw one category per entry of `columns`
    pub fn draw_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        columns: ArrayView1<'_, DiscreteColumnId>,
    ) -> Array1<CategoryId> {
        columns.mapv(|column| self.draw(&mut *rng, column))
    }
}
