//! Class-label histogram with incrementally maintained weighted entropy.
//!
//! The weighted entropy of a histogram is `mass * H(p)` where `H` is the
//! Shannon entropy in bits of the normalized counts. It is kept as
//!
//! ```text
//! weighted_entropy = sum(contribution(count_i)) - contribution(mass)
//! contribution(n)  = -n * log2(n),  contribution(0) = 0
//! ```
//!
//! Each `add_one`/`sub_one` only touches the changed bin's term and the mass
//! term, so scoring a candidate split boundary costs O(1) regardless of the
//! number of classes. Because the statistic is mass-weighted, the values of
//! two disjoint histograms over the same classes add up to a comparable
//! split score.

use std::fmt;

use tracing::debug;

use crate::config::HistogramConfig;
use crate::entropy::fastlog::Log2Backend;
use crate::error::{ForestError, Result};
use crate::log_error;

/// Histogram over `bins` class labels tracking its weighted entropy.
#[derive(Debug)]
pub struct WeightedEntropyHistogram {
    counts: Vec<usize>,
    /// `contribution(counts[i])`, cached per bin
    contributions: Vec<f64>,
    mass: usize,
    /// `contribution(mass)`
    mass_contribution: f64,
    weighted_entropy: f64,
    backend: Log2Backend,
}

impl WeightedEntropyHistogram {
    /// Creates an empty histogram with `bins` classes using the fast `log2`.
    pub fn new(bins: usize) -> Self {
        Self::with_backend(bins, Log2Backend::default())
    }

    /// Creates an empty histogram with an explicit `log2` backend.
    pub fn with_backend(bins: usize, backend: Log2Backend) -> Self {
        Self {
            counts: vec![0; bins],
            contributions: vec![0.0; bins],
            mass: 0,
            mass_contribution: 0.0,
            weighted_entropy: 0.0,
            backend,
        }
    }

    /// Creates an empty histogram from a possibly negative bin count.
    ///
    /// Fails with [`ForestError::InvalidArgument`] if `bins` does not fit a
    /// `usize`.
    pub fn try_new<B>(bins: B) -> Result<Self>
    where
        B: TryInto<usize> + fmt::Display + Copy,
    {
        Ok(Self::new(checked_bins(bins)?))
    }

    /// Creates an empty histogram as described by `config`.
    pub fn from_config(config: &HistogramConfig) -> Self {
        Self::with_backend(config.bins, config.log2)
    }

    /// Builds a histogram by adding one observation per label.
    pub fn from_labels(labels: &[usize], bins: usize) -> Result<Self> {
        let mut hist = Self::new(bins);
        for &label in labels {
            hist.add_one(label)?;
        }
        Ok(hist)
    }

    /// Reallocates to `bins` classes and clears every bin.
    ///
    /// The histogram is cleared even when `bins` equals the current bin
    /// count. On failure nothing is changed.
    pub fn resize<B>(&mut self, bins: B) -> Result<()>
    where
        B: TryInto<usize> + fmt::Display + Copy,
    {
        let bins = checked_bins(bins)?;

        self.counts.clear();
        self.counts.resize(bins, 0);
        self.contributions.clear();
        self.contributions.resize(bins, 0.0);
        self.clear_totals();

        debug!(bins, "resized weighted entropy histogram");
        Ok(())
    }

    /// Sets all bins to zero without changing the bin count.
    pub fn reset(&mut self) {
        self.counts.fill(0);
        self.contributions.fill(0.0);
        self.clear_totals();
    }

    /// Adds one observation of class `bin`.
    #[inline]
    pub fn add_one(&mut self, bin: usize) -> Result<()> {
        let count = self.count_at(bin)?;
        self.apply(bin, count + 1, self.mass + 1);
        Ok(())
    }

    /// Removes one observation of class `bin`.
    ///
    /// Fails with [`ForestError::PreconditionViolation`] if the bin is empty.
    #[inline]
    pub fn sub_one(&mut self, bin: usize) -> Result<()> {
        let count = self.count_at(bin)?;
        if count == 0 {
            return Err(log_error!(ForestError::PreconditionViolation(format!(
                "cannot remove an observation from empty bin {bin}"
            ))));
        }
        self.apply(bin, count - 1, self.mass - 1);
        Ok(())
    }

    /// Moves bin `bin` to `count` and the mass to `mass`, updating the total
    /// from the old and new terms only.
    #[inline(always)]
    fn apply(&mut self, bin: usize, count: usize, mass: usize) {
        // Old terms must be read before anything is written.
        let old_bin = self.contributions[bin];
        let old_mass = self.mass_contribution;

        let new_bin = self.backend.contribution(count);
        let new_mass = self.backend.contribution(mass);

        self.counts[bin] = count;
        self.contributions[bin] = new_bin;
        self.mass = mass;
        self.mass_contribution = new_mass;
        self.weighted_entropy += (new_bin - old_bin) - (new_mass - old_mass);
    }

    fn clear_totals(&mut self) {
        self.mass = 0;
        self.mass_contribution = 0.0;
        self.weighted_entropy = 0.0;
    }

    /// Number of classes.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Observation count of class `bin`.
    #[inline]
    pub fn count_at(&self, bin: usize) -> Result<usize> {
        self.counts.get(bin).copied().ok_or_else(|| {
            log_error!(ForestError::IndexOutOfRange {
                index: bin,
                bins: self.bins(),
            })
        })
    }

    /// All per-class counts.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of observations.
    #[inline]
    pub fn mass(&self) -> usize {
        self.mass
    }

    /// Returns true if no observation has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mass == 0
    }

    /// Mass times the Shannon entropy (bits) of the class distribution.
    #[inline]
    pub fn weighted_entropy(&self) -> f64 {
        self.weighted_entropy
    }

    /// Shannon entropy (bits) of the class distribution, 0 when empty.
    #[inline]
    pub fn entropy(&self) -> f64 {
        if self.mass == 0 {
            return 0.0;
        }
        self.weighted_entropy / self.mass as f64
    }

    /// Returns true if at most one class has observations.
    ///
    /// Scans all bins.
    pub fn is_pure(&self) -> bool {
        self.counts.iter().filter(|&&count| count > 0).take(2).count() <= 1
    }

    /// The `log2` backend used for contributions.
    #[inline]
    pub fn backend(&self) -> Log2Backend {
        self.backend
    }

    /// Evaluates the weighted entropy from scratch over all bins.
    ///
    /// The maintained value is not replaced by this one. Comparing the two
    /// measures the drift accumulated by the incremental updates.
    pub fn recomputed_weighted_entropy(&self) -> f64 {
        let bins: f64 = self
            .counts
            .iter()
            .map(|&count| self.backend.contribution(count))
            .sum();
        bins - self.backend.contribution(self.mass)
    }
}

fn checked_bins<B>(bins: B) -> Result<usize>
where
    B: TryInto<usize> + fmt::Display + Copy,
{
    bins.try_into().map_err(|_| {
        log_error!(ForestError::InvalidArgument(format!(
            "bin count must be a non-negative size, got {bins}"
        )))
    })
}

impl Default for WeightedEntropyHistogram {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for WeightedEntropyHistogram {
    fn clone(&self) -> Self {
        Self {
            counts: self.counts.clone(),
            contributions: self.contributions.clone(),
            mass: self.mass,
            mass_contribution: self.mass_contribution,
            weighted_entropy: self.weighted_entropy,
            backend: self.backend,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.counts.clone_from(&source.counts);
        self.contributions.clone_from(&source.contributions);
        self.mass = source.mass;
        self.mass_contribution = source.mass_contribution;
        self.weighted_entropy = source.weighted_entropy;
        self.backend = source.backend;
    }
}
