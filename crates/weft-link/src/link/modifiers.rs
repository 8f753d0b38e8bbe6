//! Modifier application, the third linking phase.
//!
//! Every modifier declaration reachable in the tree is distributed
//! over its selector list, then walked against the whole tree with
//! path-aware descent. Matching manifolds receive the modifier's
//! value under the couplet's operator.

use indexmap::IndexSet;

use weft_tree::{
    map_pmod, map_split, prmod, recurse_most, rfilter, Class, ManifoldId, NodeId, Op, Tree, Uid,
};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::defaults::set_default_function;
use super::selector::{
    basename_match, next_if_path, recurse_path, selector_labels, split_couplet, Selector,
};

pub(super) fn apply_modifiers(tree: &mut Tree, diag: &mut Diagnostics) {
    let declared = rfilter(tree, tree.roots(), recurse_most, |tree: &Tree, w| {
        tree.class(w).is_modifier()
    });
    let singles = map_split(tree, &declared, |tree, c| split_couplet(tree, c, diag));
    map_pmod(tree, &singles, |tree, &p| apply_one(tree, diag, p));
}

/// Walk one single-selector modifier couplet over the whole tree.
fn apply_one(tree: &mut Tree, diag: &mut Diagnostics, p: NodeId) {
    let Some(sel_node) = tree.lhs(p) else {
        diag.warn(DiagnosticKind::Structural, "modifier has no selector");
        return;
    };
    let Some(labels) = selector_labels(tree, sel_node, diag) else {
        return;
    };
    let selector = Selector::new(p, &labels);
    let roots = tree.roots().to_vec();
    prmod(
        tree,
        &roots,
        &selector,
        recurse_path,
        |tree: &mut Tree, w, sel| {
            if basename_match(tree, w, sel) {
                add_modifier(tree, diag, w, sel.decl());
            }
        },
        next_if_path,
    );
}

/// Apply the modifier couplet `p` to the matched manifold declaration
/// `w`, dispatching on the modifier's class.
fn add_modifier(tree: &mut Tree, diag: &mut Diagnostics, w: NodeId, p: NodeId) {
    let Some(mid) = tree.manifold_of(w) else {
        return;
    };
    let Some(couplet) = tree.couplet(p) else {
        return;
    };
    let rhs = couplet.rhs;
    let op = couplet.op;

    match tree.class(p) {
        Class::Alias => match tree.text(rhs).map(str::to_owned) {
            Some(function) => {
                let name = tree.intern(&function);
                tree.manifold_mut(mid).function = Some(name);
            }
            None => set_default_function(tree, w),
        },
        Class::Lang => {
            let lang = tree.text(rhs).unwrap_or("*").to_owned();
            let name = tree.intern(&lang);
            tree.manifold_mut(mid).lang = Some(name);
        }
        Class::Hook(index) => {
            let index = index as usize;
            let Some(slot) = tree.manifold(mid).hooks.get(index).cloned() else {
                diag.warn(
                    DiagnosticKind::ClassMismatch,
                    format!("hook index {index} out of range"),
                );
                return;
            };
            let updated = update_slot(tree, diag, slot, rhs, op);
            tree.manifold_mut(mid).hooks[index] = updated;
        }
        Class::Check => {
            let slot = tree.manifold(mid).check.clone();
            let updated = update_slot(tree, diag, slot, rhs, op);
            tree.manifold_mut(mid).check = updated;
        }
        Class::Fail => {
            let slot = tree.manifold(mid).fail.clone();
            let updated = update_slot(tree, diag, slot, rhs, op);
            tree.manifold_mut(mid).fail = updated;
        }
        Class::Arg => apply_arg(tree, diag, mid, rhs, op),
        Class::Cache => match tree.text(rhs).map(str::to_owned) {
            Some(value) => tree
                .manifold_mut(mid)
                .cache
                .get_or_insert_with(Vec::new)
                .push(value),
            None => tree.manifold_mut(mid).cache = None,
        },
        Class::Doc => match tree.text(rhs).map(str::to_owned) {
            Some(value) => tree
                .manifold_mut(mid)
                .doc
                .get_or_insert_with(Vec::new)
                .push(value),
            None => tree.manifold_mut(mid).doc = None,
        },
        // Non-modifier classes only reach here through developer
        // error; leave the record untouched.
        _ => {}
    }
}

/// Slot update shared by hooks, checks, and fails: a value without a
/// sequence clears the slot; otherwise the head of that sequence is
/// combined into the slot under the couplet's operator.
fn update_slot(
    tree: &Tree,
    diag: &mut Diagnostics,
    slot: Option<Vec<NodeId>>,
    rhs: NodeId,
    op: Op,
) -> Option<Vec<NodeId>> {
    let Some(elems) = tree.seq(rhs) else {
        return None;
    };
    let Some(&head) = elems.first() else {
        diag.warn(
            DiagnosticKind::Structural,
            "modifier value has no head sequence",
        );
        return slot;
    };
    Some(do_op(tree, diag, slot.unwrap_or_default(), head, op))
}

/// Combine a slot sequence with the sequence behind `q`: replace for
/// `=`, concatenate for `+`, subtract by manifold uid for `-`.
fn do_op(tree: &Tree, diag: &mut Diagnostics, ws: Vec<NodeId>, q: NodeId, op: Op) -> Vec<NodeId> {
    let Some(incoming) = tree.seq(q).map(|items| items.to_vec()) else {
        diag.warn(
            DiagnosticKind::ClassMismatch,
            "operator value is not a sequence",
        );
        return ws;
    };
    match op {
        Op::Assign => incoming,
        Op::Append => {
            let mut out = ws;
            out.extend(incoming);
            out
        }
        Op::Subtract => {
            let removed: IndexSet<Uid> = incoming
                .iter()
                .filter_map(|&r| {
                    let uid = tree.uid_of(r);
                    if uid.is_none() {
                        diag.warn(
                            DiagnosticKind::ClassMismatch,
                            "subtraction element is not a manifold",
                        );
                    }
                    uid
                })
                .collect();
            ws.into_iter()
                .filter(|&x| tree.uid_of(x).is_none_or(|uid| !removed.contains(&uid)))
                .collect()
        }
    }
}

/// Argument lists: `=` replaces with a singleton, `+` appends, a
/// value that is not a binding clears, and `-` has no meaning.
fn apply_arg(tree: &mut Tree, diag: &mut Diagnostics, mid: ManifoldId, rhs: NodeId, op: Op) {
    if tree.couplet(rhs).is_none() {
        tree.manifold_mut(mid).args = None;
        return;
    }
    match op {
        Op::Assign => tree.manifold_mut(mid).args = Some(vec![rhs]),
        Op::Append => tree
            .manifold_mut(mid)
            .args
            .get_or_insert_with(Vec::new)
            .push(rhs),
        Op::Subtract => diag.warn(
            DiagnosticKind::UnsupportedOp,
            "the '-' operator is not supported for arguments",
        ),
    }
}
