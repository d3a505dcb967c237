//! Left/right histogram pair for sweeping a candidate split boundary.

use crate::entropy::histogram::WeightedEntropyHistogram;
use crate::error::Result;

/// Two histograms over the same classes, one per side of a split.
///
/// Samples move between the sides one at a time, and the weighted entropies
/// of the sides add up to the split score directly.
#[derive(Debug, Clone, Default)]
pub struct SplitHistograms {
    left: WeightedEntropyHistogram,
    right: WeightedEntropyHistogram,
}

impl SplitHistograms {
    /// Creates an empty pair over `bins` classes.
    pub fn new(bins: usize) -> Self {
        Self {
            left: WeightedEntropyHistogram::new(bins),
            right: WeightedEntropyHistogram::new(bins),
        }
    }

    /// Creates a pair with every label on the right side.
    pub fn from_labels(labels: &[usize], bins: usize) -> Result<Self> {
        Ok(Self {
            left: WeightedEntropyHistogram::new(bins),
            right: WeightedEntropyHistogram::from_labels(labels, bins)?,
        })
    }

    /// Moves one sample of class `label` from the right to the left side.
    pub fn move_left(&mut self, label: usize) -> Result<()> {
        Self::transfer(&mut self.right, &mut self.left, label)
    }

    /// Moves one sample of class `label` from the left to the right side.
    pub fn move_right(&mut self, label: usize) -> Result<()> {
        Self::transfer(&mut self.left, &mut self.right, label)
    }

    fn transfer(
        from: &mut WeightedEntropyHistogram,
        to: &mut WeightedEntropyHistogram,
        label: usize,
    ) -> Result<()> {
        // Undo the removal if the other side rejects the label.
        from.sub_one(label)?;
        if let Err(err) = to.add_one(label) {
            from.add_one(label)?;
            return Err(err);
        }
        Ok(())
    }

    /// Histogram of the samples left of the boundary.
    pub fn left(&self) -> &WeightedEntropyHistogram {
        &self.left
    }

    /// Histogram of the samples right of the boundary.
    pub fn right(&self) -> &WeightedEntropyHistogram {
        &self.right
    }

    /// Samples on both sides.
    pub fn mass(&self) -> usize {
        self.left.mass() + self.right.mass()
    }

    /// Sum of the weighted entropies of both sides. Lower is better.
    pub fn weighted_entropy(&self) -> f64 {
        self.left.weighted_entropy() + self.right.weighted_entropy()
    }

    /// Mass-weighted average entropy of the two sides, 0 when empty.
    pub fn impurity(&self) -> f64 {
        let mass = self.mass();
        if mass == 0 {
            return 0.0;
        }
        self.weighted_entropy() / mass as f64
    }
}
