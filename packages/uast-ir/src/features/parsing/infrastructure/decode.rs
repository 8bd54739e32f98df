//! CST decoding from JSON exports

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::features::parsing::domain::CstNode;
use crate::shared::utils::json;

/// Decode a CST from a JSON reader
pub fn decode_cst<R: Read>(reader: R) -> Result<CstNode> {
    let root: CstNode = json::from_reader_unbounded(reader)?;
    Ok(root)
}

/// Load a CST from a JSON file
pub fn load_cst(path: impl AsRef<Path>) -> Result<CstNode> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let root = decode_cst(BufReader::new(file))?;
    debug!(path = %path.display(), nodes = root.node_count(), "loaded CST");
    Ok(root)
}

impl CstNode {
    pub fn from_json_str(json: &str) -> Result<CstNode> {
        Ok(json::from_str_unbounded(json)?)
    }
}
