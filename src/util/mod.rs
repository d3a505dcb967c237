//! Stateless sequence helpers used around tree training.
//!
//! None of these share state with the histograms.

pub mod permutation;
pub mod sequence;

pub use self::permutation::{
    is_valid_permutation, permute, random_permutation, random_permutation_with,
};
pub use self::sequence::{arg_max, hamming_distance, trace_sequence};
