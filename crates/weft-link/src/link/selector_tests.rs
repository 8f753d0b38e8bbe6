//! Unit tests for selector cursors, path-aware descent, and list
//! distribution.

use weft_tree::{Class, Op, Tree};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::selector::{
    basename_match, next_always, next_if_path, next_never, recurse_path, selector_labels,
    split_couplet, Selector,
};

#[test]
fn cursor_consumes_labels_from_the_front() {
    let mut tree = Tree::new();
    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let anchor = tree.add_text("anchor");
    let labels = vec![a, b];
    let sel = Selector::new(anchor, &labels);

    assert_eq!(sel.remaining(), 2);
    assert_eq!(sel.head(), Some(a));

    let sel = sel.advanced();
    assert_eq!(sel.remaining(), 1);
    assert_eq!(sel.head(), Some(b));

    let sel = sel.advanced();
    assert_eq!(sel.remaining(), 0);
    assert_eq!(sel.head(), None);

    // Advancing an exhausted cursor stays exhausted.
    assert_eq!(sel.advanced().remaining(), 0);
}

#[test]
fn labels_from_each_selector_shape() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();

    let name = tree.add_sel_name("foo");
    let labels = selector_labels(&mut tree, name, &mut diag).unwrap();
    assert_eq!(labels.len(), 1);
    assert_eq!(tree.resolve(labels[0].name), "foo");
    assert!(labels[0].qualifier.is_none());

    let qualified = tree.make_qualified_label("foo", "r");
    let label_node = tree.add_sel_label(qualified);
    let labels = selector_labels(&mut tree, label_node, &mut diag).unwrap();
    assert_eq!(labels, vec![qualified]);

    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let path = tree.add_sel_path(&[a, b]);
    let labels = selector_labels(&mut tree, path, &mut diag).unwrap();
    assert_eq!(labels, vec![a, b]);

    assert!(diag.is_empty());
}

#[test]
fn selector_list_cannot_be_resolved_directly() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();
    let foo = tree.add_sel_name("foo");
    let list = tree.add_sel_list(vec![foo]);

    assert!(selector_labels(&mut tree, list, &mut diag).is_none());
    assert_eq!(diag.count_of(DiagnosticKind::IllegalSelector), 1);
}

#[test]
fn empty_path_selector_is_structural() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();
    let path = tree.add_sel_path(&[]);

    assert!(selector_labels(&mut tree, path, &mut diag).is_none());
    assert_eq!(diag.count_of(DiagnosticKind::Structural), 1);
}

#[test]
fn section_descent_requires_a_matching_head() {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let decl = tree.add_manifold(foo);
    let a = tree.make_label("a");
    let section = tree.add_section(a, vec![decl]);
    let anchor = tree.add_text("anchor");

    let matching = vec![a, foo];
    let sel = Selector::new(anchor, &matching);
    assert_eq!(recurse_path(&tree, section, &sel), vec![decl]);

    let b = tree.make_label("b");
    let missing = vec![b, foo];
    let sel = Selector::new(anchor, &missing);
    assert!(recurse_path(&tree, section, &sel).is_empty());
}

#[test]
fn nests_descend_unconditionally() {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let decl = tree.add_manifold(foo);
    let nest = tree.add_nest(vec![decl]);
    let anchor = tree.add_text("anchor");
    let labels = vec![foo];
    let sel = Selector::new(anchor, &labels);

    assert_eq!(recurse_path(&tree, nest, &sel), vec![decl]);
    // Manifolds are leaves for the path walk.
    assert!(recurse_path(&tree, decl, &sel).is_empty());
}

#[test]
fn next_if_path_consumes_only_at_sections() {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let decl = tree.add_manifold(foo);
    let a = tree.make_label("a");
    let section = tree.add_section(a, vec![decl]);
    let nest = tree.add_nest(Vec::new());
    let anchor = tree.add_text("anchor");
    let labels = vec![a, foo];
    let sel = Selector::new(anchor, &labels);

    assert_eq!(next_if_path(&tree, &sel, section).remaining(), 1);
    assert_eq!(next_if_path(&tree, &sel, nest).remaining(), 2);
    assert_eq!(next_if_path(&tree, &sel, decl).remaining(), 2);
}

#[test]
fn fixed_advance_policies() {
    let mut tree = Tree::new();
    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let nest = tree.add_nest(Vec::new());
    let anchor = tree.add_text("anchor");
    let labels = vec![a, b];
    let sel = Selector::new(anchor, &labels);

    assert_eq!(next_always(&tree, &sel, nest).remaining(), 1);
    assert_eq!(next_never(&tree, &sel, nest).remaining(), 2);
}

#[test]
fn basename_match_requires_a_single_matching_label() {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let decl = tree.add_manifold(foo);
    let a = tree.make_label("a");
    let anchor = tree.add_text("anchor");

    let single = vec![foo];
    assert!(basename_match(&tree, decl, &Selector::new(anchor, &single)));

    let two = vec![a, foo];
    assert!(!basename_match(&tree, decl, &Selector::new(anchor, &two)));

    let other = vec![a];
    assert!(!basename_match(&tree, decl, &Selector::new(anchor, &other)));

    // Only manifold declarations can match.
    assert!(!basename_match(&tree, anchor, &Selector::new(anchor, &single)));
}

#[test]
fn list_split_shares_value_and_operator() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();
    let foo = tree.add_sel_name("foo");
    let bar = tree.add_sel_name("bar");
    let list = tree.add_sel_list(vec![foo, bar]);
    let value = tree.add_text("c");
    let modifier = tree.add_modifier(Class::Lang, list, value, Op::Append);

    let split = split_couplet(&mut tree, modifier, &mut diag);

    assert_eq!(split.len(), 2);
    let lhs: Vec<_> = split.iter().map(|&c| tree.lhs(c).unwrap()).collect();
    assert_eq!(lhs, vec![foo, bar]);
    for &c in &split {
        assert_eq!(tree.class(c), Class::Lang);
        assert_eq!(tree.rhs(c), Some(value));
        assert_eq!(tree.op(c), Some(Op::Append));
    }
    assert!(diag.is_empty());
}

#[test]
fn atomic_selectors_pass_through_split() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();
    let sel = tree.add_sel_name("foo");
    let value = tree.add_text("py");
    let modifier = tree.add_modifier(Class::Lang, sel, value, Op::Assign);

    assert_eq!(split_couplet(&mut tree, modifier, &mut diag), vec![modifier]);
    assert!(diag.is_empty());
}

#[test]
fn invalid_selector_shape_warns_and_drops_the_couplet() {
    let mut tree = Tree::new();
    let mut diag = Diagnostics::new();
    let bogus = tree.add_group(Vec::new());
    let value = tree.add_text("py");
    let modifier = tree.add_modifier(Class::Lang, bogus, value, Op::Assign);

    assert!(split_couplet(&mut tree, modifier, &mut diag).is_empty());
    assert_eq!(diag.count_of(DiagnosticKind::IllegalSelector), 1);
}
