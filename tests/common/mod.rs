//! Common test utilities for condsampler integration tests.

#![allow(dead_code)]

use condsampler::*;
use ndarray::{s, Array2};
use rand::prelude::*;

/// One-hot encode `categories` into a `(len, n_categories)` block
pub fn one_hot(categories: &[usize], n_categories: usize) -> Array2<f32> {
    let mut block = Array2::zeros((categories.len(), n_categories));
    for (row, &category) in categories.iter().enumerate() {
        block[[row, category]] = 1.0;
    }
    block
}

/// Encoded matrix and layout of the four-row, two-category example
pub fn two_category_example() -> (Array2<f32>, ColumnLayout) {
    let data = one_hot(&[0, 1, 0, 1], 2);
    let layout = ColumnLayout::new(vec![vec![SpanInfo::softmax(2)]]);
    (data, layout)
}

/// A synthetic encoded table.
///
/// Every discrete column of cardinality `k` is preceded by a continuous
/// column encoded as a scalar plus a 2-mode softmax, so discrete and
/// non-discrete blocks interleave. Returns the matrix, its layout and the
/// true category of every row in every discrete column.
pub fn mixed_dataset(
    n_rows: usize,
    cardinalities: &[usize],
    seed: u64,
) -> (Array2<f32>, ColumnLayout, Vec<Vec<usize>>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let width: usize = cardinalities.iter().map(|k| k + 3).sum();
    let mut data = Array2::zeros((n_rows, width));
    let mut columns = Vec::new();
    let mut truth = Vec::new();

    let mut st = 0;
    for &k in cardinalities {
        // continuous: scalar + mode indicator
        columns.push(vec![SpanInfo::tanh(1), SpanInfo::softmax(2)]);
        for row in 0..n_rows {
            data[[row, st]] = rng.gen_range(-1.0..1.0);
            let mode = rng.gen_range(0..2);
            data[[row, st + 1 + mode]] = 1.0;
        }
        st += 3;

        // discrete
        columns.push(vec![SpanInfo::softmax(k)]);
        let categories: Vec<usize> = (0..n_rows).map(|_| rng.gen_range(0..k)).collect();
        data.slice_mut(s![.., st..st + k])
            .assign(&one_hot(&categories, k));
        truth.push(categories);
        st += k;
    }

    (data, ColumnLayout::new(columns), truth)
}

/// Deterministic generator for tests
pub fn test_rng(seed: u64) -> SamplerRng {
    rng_from_seed(Some(seed))
}
