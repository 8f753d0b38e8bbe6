//! Default function names, the first linking phase.

use weft_tree::{filter_mutate, is_manifold, recurse_most, rfilter, NodeId, Tree};

/// Give every reachable manifold whose function is still unset the
/// name of its own label. A manifold reachable along several paths is
/// the same record; the first visit wins.
pub(super) fn assign_default_functions(tree: &mut Tree) {
    filter_mutate(
        tree,
        |tree: &Tree| rfilter(tree, tree.roots(), recurse_most, is_manifold),
        |tree: &mut Tree, w| {
            let Some(mid) = tree.manifold_of(w) else {
                return;
            };
            if tree.manifold(mid).function.is_none() {
                set_default_function(tree, w);
            }
        },
    );
}

/// Overwrite the manifold's function with its own declared label name.
/// Also the restore path for an alias declaration without a value.
pub(super) fn set_default_function(tree: &mut Tree, w: NodeId) {
    let (Some(label), Some(mid)) = (tree.decl_label(w), tree.manifold_of(w)) else {
        return;
    };
    tree.manifold_mut(mid).function = Some(label.name);
}
