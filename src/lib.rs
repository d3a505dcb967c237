//! Weighted-entropy class histograms for decision-tree induction.
//!
//! [`WeightedEntropyHistogram`] keeps `mass * entropy` of a class
//! distribution current under single-observation updates, which is what
//! split evaluation queries after every moved sample.

pub mod config;
pub mod entropy;
pub mod error;
pub mod logging;
pub mod util;

pub use config::HistogramConfig;
pub use entropy::{fast_log2, Log2Backend, SplitHistograms, WeightedEntropyHistogram};
pub use error::{ForestError, Result};
