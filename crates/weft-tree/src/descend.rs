//! Standard recursion and criterion callables for the walk combinators.
//!
//! A recursion callable answers "which child nodes does the traversal
//! descend into", returning the concatenated elements of the child
//! sequences. Wrapper nodes (a path on a couplet's lhs, a group on its
//! rhs) are stepped over: their elements are returned, the wrappers
//! themselves are never offered to the criterion.

use crate::node::{NodeId, Value};
use crate::tree::Tree;
use crate::Class;

/// Descend into every recursive payload: sequence-valued nodes yield
/// their elements, couplets yield the elements of each sequence-valued
/// side (a dotted path on the lhs, a body or value group on the rhs).
pub fn recurse_most(tree: &Tree, w: NodeId) -> Vec<NodeId> {
    match &tree.node(w).value {
        Value::Seq(items) => items.clone(),
        Value::Couplet(c) => {
            let mut kids = Vec::new();
            if let Some(items) = tree.seq(c.lhs) {
                kids.extend_from_slice(items);
            }
            if let Some(items) = tree.seq(c.rhs) {
                kids.extend_from_slice(items);
            }
            kids
        }
        _ => Vec::new(),
    }
}

/// Descend only into sequence-valued payloads.
pub fn recurse_ws(tree: &Tree, w: NodeId) -> Vec<NodeId> {
    match &tree.node(w).value {
        Value::Seq(items) => items.clone(),
        _ => Vec::new(),
    }
}

/// Never descend.
pub fn recurse_none(_tree: &Tree, _w: NodeId) -> Vec<NodeId> {
    Vec::new()
}

/// Descend following the composition structure: sequence payloads and
/// sequence-valued couplet rhs (section bodies, modifier values), but
/// never into selector paths on a couplet's lhs.
pub fn recurse_composition(tree: &Tree, w: NodeId) -> Vec<NodeId> {
    match &tree.node(w).value {
        Value::Seq(items) => items.clone(),
        Value::Couplet(c) => tree.seq(c.rhs).map(|items| items.to_vec()).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Criterion: keep every node.
pub fn keep_all(_tree: &Tree, _w: NodeId) -> bool {
    true
}

/// Criterion: the node is a manifold declaration.
pub fn is_manifold(tree: &Tree, w: NodeId) -> bool {
    tree.class(w) == Class::Manifold
}

/// Criterion: the node is a type declaration.
pub fn is_type(tree: &Tree, w: NodeId) -> bool {
    tree.class(w) == Class::TypeDecl
}
