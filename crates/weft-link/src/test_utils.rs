//! Shared builders and accessors for linking tests.

use weft_tree::{Class, Manifold, NodeId, Op, Tree};

/// Hook/check/fail value: a group whose head is the group of
/// referenced manifold declarations.
pub fn slot_value(tree: &mut Tree, targets: Vec<NodeId>) -> NodeId {
    let head = tree.add_group(targets);
    tree.add_group(vec![head])
}

/// Modifier addressed by a bare name.
pub fn name_modifier(tree: &mut Tree, class: Class, name: &str, value: NodeId, op: Op) -> NodeId {
    let sel = tree.add_sel_name(name);
    tree.add_modifier(class, sel, value, op)
}

/// The record behind a manifold declaration node.
pub fn record(tree: &Tree, decl: NodeId) -> &Manifold {
    tree.manifold(tree.manifold_of(decl).expect("manifold declaration"))
}

/// Resolved function name of a manifold declaration.
pub fn function_of(tree: &Tree, decl: NodeId) -> Option<String> {
    let name = record(tree, decl).function?;
    Some(tree.resolve(name).to_owned())
}

/// Resolved language tag of a manifold declaration.
pub fn lang_of(tree: &Tree, decl: NodeId) -> Option<String> {
    let name = record(tree, decl).lang?;
    Some(tree.resolve(name).to_owned())
}

/// Uids behind a slot's elements, in order.
pub fn slot_uids(tree: &Tree, slot: Option<&[NodeId]>) -> Vec<u32> {
    slot.unwrap_or(&[])
        .iter()
        .filter_map(|&n| tree.uid_of(n))
        .map(|uid| uid.as_u32())
        .collect()
}
