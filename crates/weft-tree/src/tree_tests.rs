//! Unit tests for tree construction, projections, and rendering.

use indoc::indoc;

use crate::{Class, Op, Tree, Uid, Value};

fn sample_tree() -> Tree {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let decl = tree.add_manifold(foo);
    tree.push_root(decl);
    tree
}

#[test]
fn manifold_declaration_shape() {
    let tree = sample_tree();
    let decl = tree.roots()[0];

    assert_eq!(tree.class(decl), Class::Manifold);
    let couplet = tree.couplet(decl).unwrap();
    assert_eq!(tree.class(couplet.lhs), Class::SelLabel);
    assert_eq!(tree.class(couplet.rhs), Class::Record);
    assert_eq!(couplet.op, Op::Assign);

    let label = tree.decl_label(decl).unwrap();
    assert_eq!(tree.resolve(label.name), "foo");

    let mid = tree.manifold_of(decl).unwrap();
    assert_eq!(tree.manifold(mid).uid(), Uid::from_raw(0));
    assert_eq!(tree.uid_of(decl), Some(Uid::from_raw(0)));
}

#[test]
fn uids_are_unique_and_stable() {
    let mut tree = Tree::new();
    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let first = tree.add_manifold(a);
    let second = tree.add_manifold(b);
    assert_ne!(tree.uid_of(first), tree.uid_of(second));
    assert_eq!(tree.uid_of(first), Some(Uid::from_raw(0)));
    assert_eq!(tree.uid_of(second), Some(Uid::from_raw(1)));
}

#[test]
fn projections_reject_other_shapes() {
    let mut tree = Tree::new();
    let text = tree.add_text("Int");
    let label = tree.make_label("x");
    let sel = tree.add_sel_label(label);

    assert_eq!(tree.text(text), Some("Int"));
    assert!(tree.label(text).is_none());
    assert!(tree.seq(text).is_none());
    assert!(tree.couplet(text).is_none());
    assert!(tree.manifold_ref(text).is_none());
    assert!(tree.label(sel).is_some());
    assert!(tree.text(sel).is_none());
}

#[test]
fn label_matching() {
    let mut tree = Tree::new();
    let plain = tree.make_label("f");
    let qualified = tree.make_qualified_label("f", "r");
    let other_qualifier = tree.make_qualified_label("f", "py");
    let other_name = tree.make_label("g");

    assert!(plain.matches(qualified));
    assert!(qualified.matches(plain));
    assert!(qualified.matches(qualified));
    assert!(!qualified.matches(other_qualifier));
    assert!(!plain.matches(other_name));
}

#[test]
fn interning_is_shared_across_labels() {
    let mut tree = Tree::new();
    let a = tree.make_label("same");
    let b = tree.make_label("same");
    assert_eq!(a.name, b.name);
}

#[test]
fn op_display() {
    assert_eq!(Op::Assign.to_string(), "=");
    assert_eq!(Op::Append.to_string(), "+");
    assert_eq!(Op::Subtract.to_string(), "-");
}

#[test]
fn sel_path_allocates_label_elements() {
    let mut tree = Tree::new();
    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let path = tree.add_sel_path(&[a, b]);

    assert_eq!(tree.class(path), Class::SelPath);
    let elems = tree.seq(path).unwrap();
    assert_eq!(elems.len(), 2);
    assert!(elems.iter().all(|&e| tree.class(e) == Class::SelLabel));
    assert_eq!(tree.render_selector(path), "a.b");
}

#[test]
fn render_nested_scopes() {
    let mut tree = Tree::new();
    let foo = tree.make_label("foo");
    let inner = tree.add_manifold(foo);
    let a = tree.make_label("a");
    let section = tree.add_section(a, vec![inner]);
    let bar = tree.make_label("bar");
    let outer = tree.add_manifold(bar);
    let nest = tree.add_nest(vec![section, outer]);
    tree.push_root(nest);

    assert_eq!(
        tree.render(),
        indoc! {"
            nest
              section a
                manifold foo #0
              manifold bar #1
        "}
    );
}

#[test]
fn render_shows_linked_fields() {
    let mut tree = sample_tree();
    let decl = tree.roots()[0];
    let function = tree.intern("foo_impl");
    let lang = tree.intern("py");
    let mid = tree.manifold_of(decl).unwrap();
    tree.manifold_mut(mid).function = Some(function);
    tree.manifold_mut(mid).lang = Some(lang);

    assert_eq!(tree.render(), "manifold foo #0 fn=foo_impl lang=py\n");
}

#[test]
fn render_modifier_declarations() {
    let mut tree = Tree::new();
    let sel = tree.add_sel_name("foo");
    let value = tree.add_text("py");
    let modifier = tree.add_modifier(Class::Lang, sel, value, Op::Assign);
    tree.push_root(modifier);

    assert_eq!(
        tree.render(),
        indoc! {r#"
            lang foo =
              text "py"
        "#}
    );
}

#[test]
fn render_selector_list() {
    let mut tree = Tree::new();
    let foo = tree.add_sel_name("foo");
    let a = tree.make_label("a");
    let b = tree.make_label("b");
    let path = tree.add_sel_path(&[a, b]);
    let list = tree.add_sel_list(vec![foo, path]);
    assert_eq!(tree.render_selector(list), "[foo, a.b]");
}

#[test]
fn alloc_accepts_matching_payload() {
    let mut tree = Tree::new();
    let id = tree.alloc(Class::Group, Value::Seq(Vec::new()));
    assert_eq!(tree.class(id), Class::Group);
    assert_eq!(tree.seq(id), Some(&[][..]));
}
