//! CST -> UAST converter
//!
//! Every node decides for itself how to convert its children: wide nodes
//! (more than `parallel_threshold` but fewer than `max_parallel_children`
//! children) fan out onto a rayon pool with `max_concurrent` workers,
//! everything else is converted in order on the current thread.
//!
//! Sibling order is preserved either way. ID values are not: under fan-out
//! whichever task reaches a node first takes the next ID.

use std::sync::OnceLock;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use super::kind_mapper::KindMapper;
use crate::config::{ConfigResult, ConverterConfig};
use crate::errors::{Result, UastError};
use crate::features::conversion::domain::{infer_roles, NodeKind};
use crate::features::parsing::domain::CstNode;
use crate::features::uast::{Uast, UastNode, TS_TYPE_PROPERTY};
use crate::shared::models::{Location, Position};
use crate::shared::utils::id_generator::NodeIdGenerator;

/// Converts tree-sitter CSTs into UASTs
#[derive(Debug)]
pub struct UastConverter {
    mapper: KindMapper,
    ids: NodeIdGenerator,
    parallel_threshold: usize,
    max_concurrent: usize,
    max_parallel_children: usize,
    pool: OnceLock<Option<ThreadPool>>,
    #[cfg(test)]
    workers: parking_lot::Mutex<ahash::AHashSet<String>>,
}

impl Default for UastConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UastConverter {
    /// Converter with the default mapping rules and fan-out bounds
    pub fn new() -> Self {
        Self::with_config(&ConverterConfig::default())
    }

    /// Converter from an already validated config
    pub fn with_config(config: &ConverterConfig) -> Self {
        let mut mapper = KindMapper::new();
        mapper.extend(
            config
                .mappings
                .iter()
                .map(|(raw, kind)| (raw.clone(), *kind)),
        );

        Self {
            mapper,
            ids: NodeIdGenerator::new(),
            parallel_threshold: config.parallel_threshold,
            max_concurrent: config.max_concurrent,
            max_parallel_children: config.max_parallel_children,
            pool: OnceLock::new(),
            #[cfg(test)]
            workers: Default::default(),
        }
    }

    /// Validate `config`, then build a converter from it
    pub fn from_config(config: &ConverterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Set fan-out threshold and concurrency limit; zero leaves a value as is
    pub fn set_parallelization_params(&mut self, threshold: usize, max_concurrent: usize) {
        if threshold > 0 {
            self.parallel_threshold = threshold;
        }
        if max_concurrent > 0 && max_concurrent != self.max_concurrent {
            self.max_concurrent = max_concurrent;
            self.pool = OnceLock::new();
        }
    }

    /// Register or override a mapping rule for later conversions
    pub fn add_mapping_rule(&mut self, raw_kind: impl Into<String>, kind: NodeKind) {
        self.mapper.add_rule(raw_kind, kind);
    }

    pub fn mapper(&self) -> &KindMapper {
        &self.mapper
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// IDs issued over this converter's lifetime
    pub fn issued_ids(&self) -> u64 {
        self.ids.issued()
    }

    /// Convert a CST into a UAST
    ///
    /// Fails only when `root` is absent.
    pub fn convert<'a>(&self, root: impl Into<Option<&'a CstNode>>, language: &str) -> Result<Uast> {
        let root = root
            .into()
            .ok_or_else(|| UastError::invalid_input("root node cannot be empty"))?;

        let uast_root = self.convert_node(root);
        let uast = Uast::new(uast_root, language);

        info!(language, nodes = uast.node_count(), "converted CST to UAST");
        Ok(uast)
    }

    /// Convert one CST node and its subtree
    pub fn convert_node(&self, cst: &CstNode) -> UastNode {
        #[cfg(test)]
        self.record_worker();

        let kind = self.mapper.map_kind(&cst.kind);

        let mut node = UastNode::new(self.ids.next_id(), kind)
            .with_location(Location::new(
                Position::from_zero_based(cst.start_point.row, cst.start_point.column),
                Position::from_zero_based(cst.end_point.row, cst.end_point.column),
            ))
            .with_property(TS_TYPE_PROPERTY, cst.kind.clone())
            .with_roles(infer_roles(kind, &cst.kind));
        node.token = cst.text.clone();

        node.children = if self.should_fan_out(cst.children.len()) {
            self.convert_children_parallel(&cst.children)
        } else {
            self.convert_children_sequential(&cst.children)
        };

        node
    }

    fn should_fan_out(&self, child_count: usize) -> bool {
        child_count > self.parallel_threshold && child_count < self.max_parallel_children
    }

    fn convert_children_sequential(&self, children: &[Option<CstNode>]) -> Vec<UastNode> {
        children
            .iter()
            .flatten()
            .map(|child| self.convert_node(child))
            .collect()
    }

    /// One slot per input position, compacted after all tasks finish
    fn convert_children_parallel(&self, children: &[Option<CstNode>]) -> Vec<UastNode> {
        let Some(pool) = self.pool() else {
            return self.convert_children_sequential(children);
        };

        debug!(
            children = children.len(),
            max_concurrent = self.max_concurrent,
            "fanning out child conversion"
        );

        let slots: Vec<Option<UastNode>> = pool.install(|| {
            children
                .par_iter()
                .map(|child| child.as_ref().map(|c| self.convert_node(c)))
                .collect()
        });

        slots.into_iter().flatten().collect()
    }

    fn pool(&self) -> Option<&ThreadPool> {
        self.pool
            .get_or_init(|| {
                ThreadPoolBuilder::new()
                    .num_threads(self.max_concurrent)
                    .thread_name(|i| format!("uast-convert-{i}"))
                    .build()
                    .map_err(|e| {
                        warn!(error = %e, "conversion pool unavailable, converting sequentially")
                    })
                    .ok()
            })
            .as_ref()
    }

    #[cfg(test)]
    fn record_worker(&self) {
        if let Some(name) = std::thread::current().name() {
            if name.starts_with("uast-convert-") {
                self.workers.lock().insert(name.to_string());
            }
        }
    }
}
