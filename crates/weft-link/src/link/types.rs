//! Type attachment, the second linking phase.

use weft_tree::{
    is_manifold, is_type, mutate_product, recurse_composition, recurse_none, rfilter, NodeId, Tree,
};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Pair every manifold (recursing through compositions) with every
/// top-level type declaration; when the names agree, attach the
/// declared term sequence to the manifold.
pub(super) fn bind_types(tree: &mut Tree, diag: &mut Diagnostics) {
    let manifolds = rfilter(tree, tree.roots(), recurse_composition, is_manifold);
    let types = rfilter(tree, tree.roots(), recurse_none, is_type);
    mutate_product(tree, &manifolds, &types, |tree: &mut Tree, mw, tw| {
        bind_type(tree, diag, mw, tw);
    });
}

/// Comparison is on the label's name only; qualifiers play no role
/// here. The first declaration wins, later ones are reported.
fn bind_type(tree: &mut Tree, diag: &mut Diagnostics, mw: NodeId, tw: NodeId) {
    let Some(m_label) = tree.decl_label(mw) else {
        return;
    };
    let name_matches = match tree.lhs(tw).and_then(|lhs| tree.text(lhs)) {
        Some(t_name) => tree.resolve(m_label.name) == t_name,
        None => false,
    };
    if !name_matches {
        return;
    }
    let Some(mid) = tree.manifold_of(mw) else {
        return;
    };
    let Some(terms) = tree
        .rhs(tw)
        .and_then(|rhs| tree.seq(rhs))
        .map(|terms| terms.to_vec())
    else {
        diag.warn(
            DiagnosticKind::ClassMismatch,
            "type declaration value is not a sequence",
        );
        return;
    };
    if tree.manifold(mid).ty.is_some() {
        let name = tree.resolve(m_label.name);
        diag.warn(
            DiagnosticKind::TypeRedeclaration,
            format!("redeclarations of '{name}' type"),
        );
    } else {
        tree.manifold_mut(mid).ty = Some(terms);
    }
}
