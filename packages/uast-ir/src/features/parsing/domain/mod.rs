//! Parsing domain models

mod cst_node;

pub use cst_node::{CstNode, CstPoint};
