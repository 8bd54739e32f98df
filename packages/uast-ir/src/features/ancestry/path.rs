//! Path search and common-ancestor lookup

use std::ptr;

use ahash::AHashSet;

use crate::features::uast::UastNode;

/// Nodes from `root` down to and including `target`
///
/// Depth-first over `root`'s children. Each address is visited at most
/// once per search. Returns `None` when `target` is not reachable.
pub fn path_to<'a>(target: &UastNode, root: &'a UastNode) -> Option<Vec<&'a UastNode>> {
    let mut visited = AHashSet::new();
    let mut path = Vec::new();
    search(target, root, &mut visited, &mut path).then_some(path)
}

fn search<'a>(
    target: &UastNode,
    current: &'a UastNode,
    visited: &mut AHashSet<*const UastNode>,
    path: &mut Vec<&'a UastNode>,
) -> bool {
    if !visited.insert(current as *const UastNode) {
        return false;
    }

    path.push(current);
    if ptr::eq(current, target) {
        return true;
    }
    for child in &current.children {
        if search(target, child, visited, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Deepest node shared by the root-relative paths of `nodes`
///
/// A single input is returned as is, reachable or not. Nodes that cannot be
/// reached from `root` are ignored; if none can, the result is `None`.
pub fn common_ancestor<'a>(
    nodes: &[&'a UastNode],
    root: Option<&'a UastNode>,
) -> Option<&'a UastNode> {
    match nodes {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }
    let root = root?;

    let paths: Vec<Vec<&'a UastNode>> = nodes
        .iter()
        .filter_map(|node| path_to(node, root))
        .collect();
    let shortest = paths.iter().min_by_key(|path| path.len())?;

    shortest
        .iter()
        .enumerate()
        .take_while(|&(depth, candidate)| {
            paths
                .iter()
                .all(|path| path.get(depth).is_some_and(|node| ptr::eq(*node, *candidate)))
        })
        .last()
        .map(|(_, node)| *node)
}
