//! UAST container
//!
//! Owns the root node and keeps two derived indices (by kind, by token).
//! Indices and metadata sit behind separate reader-writer locks, so
//! metadata writes never wait on index readers and vice versa.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::index::NodeIndex;
use super::node::UastNode;
use crate::errors::Result;
use crate::features::conversion::domain::NodeKind;
use crate::shared::utils::json;

/// Universal Abstract Syntax Tree
#[derive(Debug)]
pub struct Uast {
    root: UastNode,
    language: String,
    metadata: RwLock<BTreeMap<String, String>>,
    index: RwLock<NodeIndex>,
}

impl Uast {
    /// Wrap `root` and build the indices
    pub fn new(root: UastNode, language: impl Into<String>) -> Self {
        let index = NodeIndex::build(&root);
        Self {
            root,
            language: language.into(),
            metadata: RwLock::new(BTreeMap::new()),
            index: RwLock::new(index),
        }
    }

    pub fn root(&self) -> &UastNode {
        &self.root
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Rebuild both indices from the current tree
    pub fn rebuild_indices(&self) {
        let index = NodeIndex::build(&self.root);
        debug!(nodes = index.len(), tokens = index.token_count(), "rebuilt UAST indices");
        *self.index.write() = index;
    }

    /// Swap in a new tree; indices are rebuilt, metadata is kept
    pub fn replace_root(&mut self, root: UastNode) -> UastNode {
        let previous = std::mem::replace(&mut self.root, root);
        self.rebuild_indices();
        previous
    }

    /// All nodes of `kind`, in pre-order
    pub fn find_by_type(&self, kind: NodeKind) -> Vec<&UastNode> {
        let index = self.index.read();
        index
            .by_type(kind)
            .iter()
            .filter_map(|locator| self.root.descend(locator))
            .collect()
    }

    /// All nodes whose token equals `token`, in pre-order
    pub fn find_by_token(&self, token: &str) -> Vec<&UastNode> {
        let index = self.index.read();
        index
            .by_token(token)
            .iter()
            .filter_map(|locator| self.root.descend(locator))
            .collect()
    }

    /// Kinds that occur in the tree
    pub fn kinds(&self) -> Vec<NodeKind> {
        let mut kinds: Vec<NodeKind> = self.index.read().kinds().collect();
        kinds.sort();
        kinds
    }

    pub fn node_count(&self) -> usize {
        self.index.read().len()
    }

    /// Insert or overwrite a metadata entry
    pub fn add_metadata(&self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.write().insert(key.into(), value.into());
    }

    pub fn metadata_value(&self, key: &str) -> Option<String> {
        self.metadata.read().get(key).cloned()
    }

    /// Snapshot of the metadata, sorted by key
    pub fn metadata(&self) -> BTreeMap<String, String> {
        self.metadata.read().clone()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write pretty JSON to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Read a UAST written by `save`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(json::from_reader_unbounded(reader)?)
    }
}

#[derive(Serialize)]
struct UastRef<'a> {
    root: &'a UastNode,
    language: &'a str,
    #[serde(skip_serializing_if = "no_metadata")]
    metadata: &'a BTreeMap<String, String>,
}

fn no_metadata(metadata: &&BTreeMap<String, String>) -> bool {
    metadata.is_empty()
}

#[derive(Deserialize)]
struct UastOwned {
    root: UastNode,
    language: String,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

impl Serialize for Uast {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let metadata = self.metadata.read();
        UastRef {
            root: &self.root,
            language: &self.language,
            metadata: &*metadata,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Uast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let owned = UastOwned::deserialize(deserializer)?;
        let uast = Uast::new(owned.root, owned.language);
        *uast.metadata.write() = owned.metadata;
        Ok(uast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversion::domain::Role;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn sample() -> Uast {
        let root = UastNode::new("1", NodeKind::File)
            .with_child(
                UastNode::new("2", NodeKind::Function)
                    .with_token("hello")
                    .with_roles(vec![Role::Declaration, Role::Definition])
                    .with_child(UastNode::new("3", NodeKind::Identifier).with_token("name")),
            )
            .with_child(UastNode::new("4", NodeKind::Identifier).with_token("name"));
        Uast::new(root, "go")
    }

    #[test]
    fn test_find_by_type() {
        let uast = sample();
        let ids: Vec<&str> = uast
            .find_by_type(NodeKind::Identifier)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert!(uast.find_by_type(NodeKind::Loop).is_empty());
        assert_eq!(uast.node_count(), 4);
    }

    #[test]
    fn test_find_by_token() {
        let uast = sample();
        assert_eq!(uast.find_by_token("name").len(), 2);
        assert_eq!(uast.find_by_token("hello")[0].kind, NodeKind::Function);
        assert!(uast.find_by_token("missing").is_empty());
        assert!(uast.find_by_token("").is_empty());
    }

    #[test]
    fn test_results_are_independent_copies() {
        let uast = sample();
        let mut first = uast.find_by_type(NodeKind::Identifier);
        first.clear();
        assert_eq!(uast.find_by_type(NodeKind::Identifier).len(), 2);
    }

    #[test]
    fn test_metadata_overwrite() {
        let uast = sample();
        uast.add_metadata("filename", "a.go");
        uast.add_metadata("filename", "b.go");
        assert_eq!(uast.metadata_value("filename").as_deref(), Some("b.go"));
        assert_eq!(uast.metadata().len(), 1);
        assert!(uast.metadata_value("version").is_none());
    }

    #[test]
    fn test_replace_root_rebuilds() {
        let mut uast = sample();
        uast.add_metadata("k", "v");
        let old = uast.replace_root(UastNode::new("9", NodeKind::Package).with_token("main"));

        assert_eq!(old.id, "1");
        assert!(uast.find_by_type(NodeKind::Identifier).is_empty());
        assert_eq!(uast.find_by_token("main")[0].id, "9");
        assert_eq!(uast.kinds(), vec![NodeKind::Package]);
        assert_eq!(uast.metadata_value("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_json_shape() {
        let uast = sample();
        let json: serde_json::Value = serde_json::from_str(&uast.to_json(false).unwrap()).unwrap();
        assert_eq!(json["language"], "go");
        assert_eq!(json["root"]["type"], "File");
        assert!(json.get("metadata").is_none());

        uast.add_metadata("version", "1.0");
        let json: serde_json::Value = serde_json::from_str(&uast.to_json(true).unwrap()).unwrap();
        assert_eq!(json["metadata"]["version"], "1.0");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let uast = sample();
        uast.add_metadata("filename", "example.go");
        uast.save(&path).unwrap();

        let loaded = Uast::load(&path).unwrap();
        assert_eq!(loaded.root(), uast.root());
        assert_eq!(loaded.language(), "go");
        assert_eq!(loaded.metadata_value("filename").as_deref(), Some("example.go"));
        assert_eq!(loaded.find_by_token("name").len(), 2);
    }

    #[test]
    fn test_save_and_load_deep_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep.json");

        let root = (0..250).fold(
            UastNode::new("leaf", NodeKind::Identifier).with_token("bottom"),
            |inner, i| UastNode::new(i.to_string(), NodeKind::Statement).with_child(inner),
        );
        let uast = Uast::new(root, "go");
        uast.save(&path).unwrap();

        let loaded = Uast::load(&path).unwrap();
        assert_eq!(loaded.node_count(), 251);
        assert_eq!(loaded.find_by_token("bottom").len(), 1);
        assert_eq!(loaded.root(), uast.root());
    }

    #[test]
    fn test_concurrent_reads_and_metadata_writes() {
        let uast = Arc::new(sample());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let uast = Arc::clone(&uast);
                std::thread::spawn(move || {
                    for j in 0..200 {
                        uast.add_metadata(format!("k{i}"), j.to_string());
                        assert_eq!(uast.find_by_type(NodeKind::Identifier).len(), 2);
                        assert_eq!(uast.find_by_token("hello").len(), 1);
                        if j % 50 == 0 {
                            uast.rebuild_indices();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(uast.metadata().len(), 8);
        assert_eq!(uast.metadata_value("k3").as_deref(), Some("199"));
    }
}
