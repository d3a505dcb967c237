//! Configuration for histogram construction.
//!
//! Lets training code choose the class count and the `log2` backend from a
//! JSON document instead of hard-coding them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entropy::fastlog::Log2Backend;
use crate::error::Result;

/// Settings for [`WeightedEntropyHistogram`](crate::WeightedEntropyHistogram).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramConfig {
    /// Number of class bins (default: 0).
    pub bins: usize,
    /// Logarithm used for entropy contributions (default: fast).
    pub log2: Log2Backend,
}

impl HistogramConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading histogram config");
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
