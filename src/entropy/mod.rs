//! Incremental entropy bookkeeping for decision-tree split evaluation.
//!
//! This module provides:
//!
//! - Fast and exact `log2` backends and the per-bin contribution term
//! - A class histogram that keeps `mass * entropy` up to date in O(1) per
//!   added or removed observation
//! - A left/right histogram pair for sweeping split boundaries
//!
//! # Performance Considerations
//!
//! Split search queries the entropy after every moved sample, once per
//! candidate boundary per feature per node. Recomputing it over all classes
//! on every query dominates training time, so the histogram caches the
//! contribution of every bin and of the total mass and only updates the
//! two terms an observation changes.
//!
//! # Example
//!
//! ```
//! use forest_entropy::entropy::{SplitHistograms, WeightedEntropyHistogram};
//!
//! let mut hist = WeightedEntropyHistogram::from_labels(&[0, 0, 1, 2], 3).unwrap();
//! assert!((hist.weighted_entropy() - 6.0).abs() < 1e-2);
//! hist.sub_one(0).unwrap();
//!
//! let mut split = SplitHistograms::from_labels(&[0, 0, 1, 1], 2).unwrap();
//! split.move_left(0).unwrap();
//! split.move_left(0).unwrap();
//! assert!(split.weighted_entropy().abs() < 1e-9);
//! ```

pub mod fastlog;
pub mod histogram;
pub mod split;

pub use self::fastlog::{fast_log2, Log2Backend};
pub use self::histogram::WeightedEntropyHistogram;
pub use self::split::SplitHistograms;
