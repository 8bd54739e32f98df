//! Configuration
//!
//! Converter settings can be built in code, loaded from YAML, or
//! assembled from command-line flags.
//!
//! # Examples
//!
//! ```rust,ignore
//! use uast_ir::config::ConverterConfig;
//!
//! let config = ConverterConfig::default()
//!     .parallel_threshold(20)
//!     .max_concurrent(4)
//!     .mapping("impl_block", NodeKind::Class);
//! config.validate()?;
//!
//! let config = ConverterConfig::from_yaml_file("uast.yaml")?;
//! ```

pub mod converter_config;
pub mod error;

pub use converter_config::{
    parse_mapping_rule, ConverterConfig, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_PARALLEL_CHILDREN,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use error::{ConfigError, ConfigResult};
