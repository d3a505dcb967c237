//! Permutations of `[0, n)` given as image lists: `perm[i]` is where `i` goes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ForestError, Result};
use crate::log_error;

/// Draws a uniformly random permutation of `[0, n)` from the thread RNG.
pub fn random_permutation(n: usize) -> Vec<usize> {
    random_permutation_with(n, &mut rand::thread_rng())
}

/// Draws a uniformly random permutation of `[0, n)` from `rng`.
pub fn random_permutation_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Returns true if every image lies in `[0, perm.len())` and none repeats.
pub fn is_valid_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &image in perm {
        match seen.get_mut(image) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Applies `perm` to `input`, returning `out` with `out[perm[i]] = input[i]`.
pub fn permute<T: Clone>(perm: &[usize], input: &[T]) -> Result<Vec<T>> {
    if perm.len() != input.len() {
        return Err(log_error!(ForestError::LengthMismatch {
            expected: perm.len(),
            actual: input.len(),
        }));
    }
    if !is_valid_permutation(perm) {
        return Err(log_error!(ForestError::InvalidArgument(
            "not a valid permutation".to_string()
        )));
    }

    let mut slots: Vec<Option<T>> = vec![None; input.len()];
    for (&image, value) in perm.iter().zip(input) {
        slots[image] = Some(value.clone());
    }
    Ok(slots.into_iter().flatten().collect())
}
