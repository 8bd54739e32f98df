//! Converter configuration
//!
//! Fan-out bounds and extra kind mappings consumed by `UastConverter`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::conversion::NodeKind;

/// Children count above which a node's children are converted in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50;

/// Maximum number of conversion tasks executing at once
pub const DEFAULT_MAX_CONCURRENT: usize = 100;

/// Children count at or above which fan-out is never used
pub const DEFAULT_MAX_PARALLEL_CHILDREN: usize = 1000;

const MAX_CONCURRENT_LIMIT: usize = 4096;

/// Converter configuration
///
/// ```yaml
/// parallel_threshold: 20
/// max_concurrent: 4
/// mappings:
///   impl_item: Class
///   function_item: Function
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Fan-out when a node has strictly more children than this
    pub parallel_threshold: usize,

    /// Concurrency limit for fan-out tasks (1..=4096)
    pub max_concurrent: usize,

    /// Fan-out only when a node has strictly fewer children than this
    pub max_parallel_children: usize,

    /// Extra raw kind -> normalized kind rules, applied over the defaults
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, NodeKind>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            max_parallel_children: DEFAULT_MAX_PARALLEL_CHILDREN,
            mappings: BTreeMap::new(),
        }
    }
}

impl ConverterConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.parallel_threshold == 0 {
            return Err(ConfigError::range_with_hint(
                "parallel_threshold",
                self.parallel_threshold,
                1,
                usize::MAX,
                "Threshold must be positive",
            ));
        }

        if self.max_concurrent == 0 || self.max_concurrent > MAX_CONCURRENT_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_concurrent",
                self.max_concurrent,
                1,
                MAX_CONCURRENT_LIMIT,
                "Number of concurrent conversion tasks must be reasonable",
            ));
        }

        if self.max_parallel_children <= self.parallel_threshold {
            return Err(ConfigError::range_with_hint(
                "max_parallel_children",
                self.max_parallel_children,
                self.parallel_threshold.saturating_add(1),
                usize::MAX,
                "Upper fan-out bound must exceed parallel_threshold",
            ));
        }

        Ok(())
    }

    /// Builder: Set parallel_threshold
    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.parallel_threshold = v;
        self
    }

    /// Builder: Set max_concurrent
    pub fn max_concurrent(mut self, v: usize) -> Self {
        self.max_concurrent = v;
        self
    }

    /// Builder: Set max_parallel_children
    pub fn max_parallel_children(mut self, v: usize) -> Self {
        self.max_parallel_children = v;
        self
    }

    /// Builder: Add a mapping rule
    pub fn mapping(mut self, raw: impl Into<String>, kind: NodeKind) -> Self {
        self.mappings.insert(raw.into(), kind);
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Parse a `raw=Kind` mapping rule as given on the command line
pub fn parse_mapping_rule(rule: &str) -> ConfigResult<(String, NodeKind)> {
    let (raw, kind) = rule
        .split_once('=')
        .ok_or_else(|| ConfigError::Custom(format!("Mapping rule '{rule}' must look like raw=Kind")))?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::Custom(format!(
            "Mapping rule '{rule}' has an empty raw kind"
        )));
    }

    let kind = kind.trim();
    let parsed = kind.parse::<NodeKind>().map_err(|_| ConfigError::UnknownKind {
        raw: raw.to_string(),
        kind: kind.to_string(),
    })?;

    Ok((raw.to_string(), parsed))
}
