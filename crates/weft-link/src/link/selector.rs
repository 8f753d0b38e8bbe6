//! Selector cursors and path-aware descent.
//!
//! A modifier's selector is consumed as the walk descends: entering a
//! named section whose label equals the selector's next label strips
//! that label. A manifold is matched only when a single label remains
//! and it equals the manifold's own label. Nested-scope name
//! resolution falls out of this without any symbol table.

use weft_tree::{Class, Label, NodeId, Tree};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// The evolving left-hand side of a modifier couplet during a
/// path-aware walk: the declaration node plus the labels not yet
/// consumed by descent.
#[derive(Clone, Copy, Debug)]
pub struct Selector<'a> {
    decl: NodeId,
    rest: &'a [Label],
}

impl<'a> Selector<'a> {
    pub fn new(decl: NodeId, labels: &'a [Label]) -> Self {
        Self { decl, rest: labels }
    }

    /// The modifier couplet this selector came from.
    pub fn decl(&self) -> NodeId {
        self.decl
    }

    /// The next label to consume, if any remain.
    pub fn head(&self) -> Option<Label> {
        self.rest.first().copied()
    }

    /// How many labels remain unconsumed.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// The selector with its head label consumed.
    pub fn advanced(&self) -> Selector<'a> {
        if self.rest.is_empty() {
            *self
        } else {
            Selector {
                decl: self.decl,
                rest: &self.rest[1..],
            }
        }
    }
}

/// Extract the label sequence of an atomic selector node. Interns a
/// bare name into an unqualified label. A selector list is illegal
/// here; the caller reports and skips.
pub(super) fn selector_labels(
    tree: &mut Tree,
    sel: NodeId,
    diag: &mut Diagnostics,
) -> Option<Vec<Label>> {
    match tree.class(sel) {
        Class::SelLabel => tree.label(sel).map(|label| vec![label]),
        Class::SelName => {
            let name = tree.text(sel)?.to_owned();
            let name = tree.intern(&name);
            Some(vec![Label::new(name)])
        }
        Class::SelPath => {
            let elems = tree.seq(sel)?.to_vec();
            let labels: Vec<Label> = elems.iter().filter_map(|&e| tree.label(e)).collect();
            if labels.len() != elems.len() {
                diag.warn(
                    DiagnosticKind::ClassMismatch,
                    "path selector contains a non-label element",
                );
                return None;
            }
            if labels.is_empty() {
                diag.warn(DiagnosticKind::Structural, "path selector has no labels");
                return None;
            }
            Some(labels)
        }
        other => {
            diag.warn(
                DiagnosticKind::IllegalSelector,
                format!("cannot resolve a {other} selector against the tree"),
            );
            None
        }
    }
}

/// Path-aware descent: nests descend unconditionally; a named section
/// descends only when the selector's next label matches the section's
/// own label; nothing else descends.
pub fn recurse_path(tree: &Tree, w: NodeId, sel: &Selector<'_>) -> Vec<NodeId> {
    match tree.class(w) {
        Class::Nest => tree.seq(w).map(|items| items.to_vec()).unwrap_or_default(),
        Class::Section => {
            let matched = match (sel.head(), tree.decl_label(w)) {
                (Some(head), Some(label)) => head.matches(label),
                _ => false,
            };
            if matched {
                tree.rhs(w)
                    .and_then(|rhs| tree.seq(rhs))
                    .map(|items| items.to_vec())
                    .unwrap_or_default()
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

/// Consume one selector label at every descent.
pub fn next_always<'a>(_tree: &Tree, sel: &Selector<'a>, _w: NodeId) -> Selector<'a> {
    sel.advanced()
}

/// Reuse the selector unchanged at every depth.
pub fn next_never<'a>(_tree: &Tree, sel: &Selector<'a>, _w: NodeId) -> Selector<'a> {
    *sel
}

/// Consume one selector label when descending into a named section;
/// reuse the selector unchanged everywhere else.
pub fn next_if_path<'a>(tree: &Tree, sel: &Selector<'a>, w: NodeId) -> Selector<'a> {
    if tree.class(w) == Class::Section {
        sel.advanced()
    } else {
        *sel
    }
}

/// A manifold matches when exactly one label remains and it equals
/// the manifold's own label.
pub fn basename_match(tree: &Tree, w: NodeId, sel: &Selector<'_>) -> bool {
    if tree.class(w) != Class::Manifold || sel.remaining() != 1 {
        return false;
    }
    match (sel.head(), tree.decl_label(w)) {
        (Some(head), Some(label)) => head.matches(label),
        _ => false,
    }
}

/// Distribute a selector list over its couplet: one fresh couplet per
/// list element, each sharing the value node and operator. Atomic
/// selectors pass through unchanged.
pub(super) fn split_couplet(
    tree: &mut Tree,
    c: NodeId,
    diag: &mut Diagnostics,
) -> Vec<NodeId> {
    let Some(couplet) = tree.couplet(c) else {
        diag.warn(
            DiagnosticKind::ClassMismatch,
            "modifier node does not carry a couplet",
        );
        return Vec::new();
    };
    match tree.class(couplet.lhs) {
        Class::SelList => {
            let elems = tree
                .seq(couplet.lhs)
                .map(|items| items.to_vec())
                .unwrap_or_default();
            let class = tree.class(c);
            elems
                .into_iter()
                .map(|sel| tree.add_modifier(class, sel, couplet.rhs, couplet.op))
                .collect()
        }
        Class::SelPath | Class::SelLabel | Class::SelName => vec![c],
        other => {
            diag.warn(
                DiagnosticKind::IllegalSelector,
                format!("invalid {other} selector on a modifier"),
            );
            Vec::new()
        }
    }
}
