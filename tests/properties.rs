//! Property tests over randomly shaped encoded tables.

use condsampler::*;
use ndarray::{s, Array2};
use proptest::prelude::*;

mod common;
use common::*;

fn table_shape() -> impl Strategy<Value = (usize, Vec<usize>, u64)> {
    (
        1usize..40,
        prop::collection::vec(1usize..6, 0..4),
        any::<u64>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn construction_succeeds_iff_widths_agree(
        n_rows in 0usize..40,
        cards in prop::collection::vec(1usize..6, 0..4),
        seed in any::<u64>(),
        blank_last in any::<bool>(),
        extra in 0usize..3,
    ) {
        let (mut data, layout, _) = mixed_dataset(n_rows, &cards, seed);
        if let (true, Some(&k)) = (blank_last, cards.last()) {
            let width = data.ncols();
            data.slice_mut(s![.., width - k..]).fill(0.0);
        }
        prop_assert!(ConditionalSampler::with_log_frequency(data.view(), &layout, true).is_ok());

        if extra > 0 {
            let wider = Array2::<f32>::zeros((n_rows, data.ncols() + extra));
            let result = ConditionalSampler::with_log_frequency(wider.view(), &layout, true);
            let is_layout_mismatch = matches!(result, Err(SamplerError::LayoutMismatch { .. }));
            prop_assert!(is_layout_mismatch);
        }
    }

    #[test]
    fn row_index_partitions_rows((n_rows, cards, seed) in table_shape()) {
        let (data, layout, truth) = mixed_dataset(n_rows, &cards, seed);
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();

        for (column, &k) in cards.iter().enumerate() {
            prop_assert!(sampler.row_index().is_partition(column, n_rows));
            for category in 0..k {
                let rows = sampler.rows_for_category(column, category).unwrap();
                for &row in rows {
                    prop_assert_eq!(truth[column][row], category);
                }
            }
        }
    }

    #[test]
    fn probabilities_are_normalized(
        (n_rows, cards, seed) in table_shape(),
        log_frequency in any::<bool>(),
    ) {
        let (data, layout, _) = mixed_dataset(n_rows, &cards, seed);
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, log_frequency).unwrap();

        for column in 0..sampler.n_discrete_columns() {
            let probs = sampler.category_probabilities(column).unwrap();
            prop_assert!(probs.iter().all(|&p| p >= 0.0));
            prop_assert!((probs.sum() - 1.0).abs() < 1e-9);

            let padded = sampler.probability_matrix();
            let n = sampler.discrete_columns()[column].n_categories;
            prop_assert!(padded.slice(s![column, n..]).iter().all(|&p| p == 0.0));
        }
    }

    #[test]
    fn condvec_rows_are_one_hot(
        (n_rows, cards, seed) in table_shape(),
        batch in 1usize..64,
    ) {
        let (data, layout, _) = mixed_dataset(n_rows, &cards, seed);
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, true).unwrap();
        let mut rng = test_rng(seed);

        match sampler.sample_condvec(&mut rng, batch) {
            None => prop_assert!(cards.is_empty()),
            Some(condvec) => {
                prop_assert_eq!(condvec.cond.dim(), (batch, sampler.dim_cond_vec()));
                prop_assert_eq!(condvec.mask.dim(), (batch, cards.len()));
                for i in 0..batch {
                    let column = condvec.discrete_column_id[i];
                    let category = condvec.category_id_in_col[i];
                    let span = sampler.discrete_columns()[column];
                    prop_assert_eq!(condvec.mask.row(i).sum(), 1.0);
                    prop_assert_eq!(condvec.mask[[i, column]], 1.0);
                    prop_assert_eq!(condvec.cond.row(i).sum(), 1.0);
                    prop_assert_eq!(condvec.cond[[i, span.cond_start + category]], 1.0);
                }
            }
        }
    }

    #[test]
    fn sampled_rows_satisfy_their_condition(
        (n_rows, cards, seed) in table_shape(),
        batch in 1usize..64,
    ) {
        let (data, layout, _) = mixed_dataset(n_rows, &cards, seed);
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, false).unwrap();
        let mut rng = test_rng(seed.wrapping_add(1));

        if let Some(condvec) = sampler.sample_condvec(&mut rng, batch) {
            let col = condvec.discrete_column_id.to_vec();
            let opt = condvec.category_id_in_col.to_vec();
            let rows = sampler
                .sample_data(&mut rng, batch, Some((col.as_slice(), opt.as_slice())))
                .unwrap();
            prop_assert_eq!(rows.nrows(), batch);

            for (i, row) in rows.outer_iter().enumerate() {
                let span = sampler.discrete_columns()[col[i]];
                let block = row.slice(s![span.matrix_start..span.matrix_end()]);
                let decoded = block
                    .iter()
                    .position(|&v| v != 0.0)
                    .unwrap();
                prop_assert_eq!(decoded, opt[i]);
            }
        }
    }

    #[test]
    fn no_discrete_columns_means_no_condition(
        n_rows in 1usize..20,
        n_continuous in 1usize..4,
        batch in 1usize..32,
    ) {
        let layout = ColumnLayout::new(vec![vec![SpanInfo::tanh(1)]; n_continuous]);
        let data = Array2::<f32>::zeros((n_rows, n_continuous));
        let sampler = ConditionalSampler::with_log_frequency(data.view(), &layout, true).unwrap();
        let mut rng = test_rng(batch as u64);

        prop_assert_eq!(sampler.dim_cond_vec(), 0);
        prop_assert!(sampler.sample_condvec(&mut rng, batch).is_none());
        prop_assert!(sampler.sample_original_condvec(&mut rng, batch).is_none());
    }
}
