//! Property-based tests for the weighted entropy histogram.
//!
//! These tests use proptest to generate arbitrary add/remove sequences and
//! verify the maintained statistic against a full recomputation.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use forest_entropy::{Log2Backend, WeightedEntropyHistogram};

/// One step of a generated update sequence.
#[derive(Debug, Clone, Copy)]
enum Op {
    Add(usize),
    Sub(usize),
}

fn arb_ops(bins: usize) -> impl Strategy<Value = Vec<Op>> {
    prop_vec(
        prop_oneof![
            3 => (0..bins).prop_map(Op::Add),
            2 => (0..bins).prop_map(Op::Sub),
        ],
        0..300,
    )
}

fn arb_case() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..12).prop_flat_map(|bins| (Just(bins), arb_ops(bins)))
}

fn arb_backend() -> impl Strategy<Value = Log2Backend> {
    prop_oneof![Just(Log2Backend::Fast), Just(Log2Backend::Exact)]
}

proptest! {
    #[test]
    fn invariants_hold_after_every_step((bins, ops) in arb_case(), backend in arb_backend()) {
        let mut hist = WeightedEntropyHistogram::with_backend(bins, backend);
        let mut shadow = vec![0usize; bins];

        for op in ops {
            match op {
                Op::Add(bin) => {
                    hist.add_one(bin).unwrap();
                    shadow[bin] += 1;
                }
                Op::Sub(bin) => {
                    let result = hist.sub_one(bin);
                    if shadow[bin] == 0 {
                        prop_assert!(result.is_err());
                    } else {
                        prop_assert!(result.is_ok());
                        shadow[bin] -= 1;
                    }
                }
            }

            prop_assert_eq!(hist.counts(), &shadow[..]);
            prop_assert_eq!(hist.mass(), shadow.iter().sum::<usize>());
            let drift = (hist.weighted_entropy() - hist.recomputed_weighted_entropy()).abs();
            prop_assert!(drift < 1e-7, "drift {}", drift);
            prop_assert!(hist.weighted_entropy() > -1e-2);
            prop_assert_eq!(
                hist.is_pure(),
                shadow.iter().filter(|&&c| c > 0).count() <= 1
            );
        }
    }

    #[test]
    fn add_then_sub_restores_counts_and_entropy(
        (bins, ops) in arb_case(),
        probe in 0usize..12,
    ) {
        let mut hist = WeightedEntropyHistogram::new(bins);
        for op in ops {
            if let Op::Add(bin) = op {
                hist.add_one(bin).unwrap();
            }
        }
        let bin = probe % bins;
        let counts = hist.counts().to_vec();
        let mass = hist.mass();
        let before = hist.weighted_entropy();

        hist.add_one(bin).unwrap();
        hist.sub_one(bin).unwrap();

        prop_assert_eq!(hist.counts(), &counts[..]);
        prop_assert_eq!(hist.mass(), mass);
        prop_assert!((hist.weighted_entropy() - before).abs() <= 1e-12 * before.abs().max(1.0));
    }

    #[test]
    fn single_class_has_zero_entropy(bins in 1usize..10, n in 0usize..500, seed in 0usize..10) {
        let mut hist = WeightedEntropyHistogram::new(bins);
        let bin = seed % bins;
        for _ in 0..n {
            hist.add_one(bin).unwrap();
        }
        prop_assert_eq!(hist.weighted_entropy(), 0.0);
        prop_assert!(hist.is_pure());
    }
}
