//! The arena that owns nodes, manifold records, and interned names.
//!
//! Construction happens at the parser boundary through the `add_*`
//! methods; the linking pass reads nodes through the typed projections
//! and writes only into manifold records. Structural nodes are never
//! edited after construction.

use crate::class::Class;
use crate::manifold::{Manifold, Uid, HOOK_SLOTS};
use crate::names::{Name, NameTable};
use crate::node::{Couplet, Label, ManifoldId, Node, NodeId, Op, Value};

#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    manifolds: Vec<Manifold>,
    names: NameTable,
    roots: Vec<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------

    pub fn intern(&mut self, s: &str) -> Name {
        self.names.intern(s)
    }

    /// Resolve an interned identifier.
    ///
    /// # Panics
    /// Panics if the handle was not created by this tree.
    pub fn resolve(&self, name: Name) -> &str {
        self.names.resolve(name)
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn make_label(&mut self, name: &str) -> Label {
        Label::new(self.names.intern(name))
    }

    pub fn make_qualified_label(&mut self, name: &str, qualifier: &str) -> Label {
        Label::qualified(self.names.intern(name), self.names.intern(qualifier))
    }

    // ------------------------------------------------------------------
    // Node construction (parser boundary)
    // ------------------------------------------------------------------

    /// Allocate a node. The payload shape must agree with the class.
    pub fn alloc(&mut self, class: Class, value: Value) -> NodeId {
        debug_assert_eq!(
            class.value_kind(),
            value.kind(),
            "payload shape must match class {class}"
        );
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node { class, value });
        id
    }

    pub fn add_text(&mut self, text: &str) -> NodeId {
        self.alloc(Class::Text, Value::Text(text.to_owned()))
    }

    pub fn add_group(&mut self, items: Vec<NodeId>) -> NodeId {
        self.alloc(Class::Group, Value::Seq(items))
    }

    pub fn add_nest(&mut self, items: Vec<NodeId>) -> NodeId {
        self.alloc(Class::Nest, Value::Seq(items))
    }

    pub fn add_sel_name(&mut self, name: &str) -> NodeId {
        self.alloc(Class::SelName, Value::Text(name.to_owned()))
    }

    pub fn add_sel_label(&mut self, label: Label) -> NodeId {
        self.alloc(Class::SelLabel, Value::Label(label))
    }

    pub fn add_sel_path(&mut self, labels: &[Label]) -> NodeId {
        let elems = labels
            .iter()
            .map(|&l| self.alloc(Class::SelLabel, Value::Label(l)))
            .collect();
        self.alloc(Class::SelPath, Value::Seq(elems))
    }

    pub fn add_sel_list(&mut self, selectors: Vec<NodeId>) -> NodeId {
        self.alloc(Class::SelList, Value::Seq(selectors))
    }

    /// Named scope: couplet of (label, body group).
    pub fn add_section(&mut self, label: Label, body: Vec<NodeId>) -> NodeId {
        let lhs = self.add_sel_label(label);
        let rhs = self.add_group(body);
        self.alloc(
            Class::Section,
            Value::Couplet(Couplet {
                lhs,
                rhs,
                op: Op::Assign,
            }),
        )
    }

    /// Manifold declaration. Allocates the record (with the next uid),
    /// its payload node, and the declaration couplet.
    pub fn add_manifold(&mut self, label: Label) -> NodeId {
        let uid = Uid::from_raw(self.manifolds.len() as u32);
        let mid = ManifoldId::from_raw(self.manifolds.len() as u32);
        self.manifolds.push(Manifold::new(uid));
        let lhs = self.add_sel_label(label);
        let rhs = self.alloc(Class::Record, Value::Manifold(mid));
        self.alloc(
            Class::Manifold,
            Value::Couplet(Couplet {
                lhs,
                rhs,
                op: Op::Assign,
            }),
        )
    }

    /// Type declaration: couplet of (name text, term group).
    pub fn add_type_decl(&mut self, name: &str, terms: Vec<NodeId>) -> NodeId {
        let lhs = self.add_text(name);
        let rhs = self.add_group(terms);
        self.alloc(
            Class::TypeDecl,
            Value::Couplet(Couplet {
                lhs,
                rhs,
                op: Op::Assign,
            }),
        )
    }

    /// Argument binding: couplet of (name text, value).
    pub fn add_binding(&mut self, name: &str, value: NodeId, op: Op) -> NodeId {
        let lhs = self.add_text(name);
        self.alloc(
            Class::Binding,
            Value::Couplet(Couplet {
                lhs,
                rhs: value,
                op,
            }),
        )
    }

    /// Modifier declaration: couplet of (selector, value).
    pub fn add_modifier(&mut self, class: Class, selector: NodeId, rhs: NodeId, op: Op) -> NodeId {
        debug_assert!(class.is_modifier(), "{class} is not a modifier class");
        if let Class::Hook(index) = class {
            debug_assert!(
                (index as usize) < HOOK_SLOTS,
                "hook index {index} out of range"
            );
        }
        self.alloc(
            class,
            Value::Couplet(Couplet {
                lhs: selector,
                rhs,
                op,
            }),
        )
    }

    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// # Panics
    /// Panics if the handle was not created by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn class(&self, id: NodeId) -> Class {
        self.node(id).class
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn label(&self, id: NodeId) -> Option<Label> {
        match self.node(id).value {
            Value::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn seq(&self, id: NodeId) -> Option<&[NodeId]> {
        match &self.node(id).value {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn couplet(&self, id: NodeId) -> Option<Couplet> {
        match self.node(id).value {
            Value::Couplet(c) => Some(c),
            _ => None,
        }
    }

    pub fn manifold_ref(&self, id: NodeId) -> Option<ManifoldId> {
        match self.node(id).value {
            Value::Manifold(mid) => Some(mid),
            _ => None,
        }
    }

    pub fn lhs(&self, id: NodeId) -> Option<NodeId> {
        self.couplet(id).map(|c| c.lhs)
    }

    pub fn rhs(&self, id: NodeId) -> Option<NodeId> {
        self.couplet(id).map(|c| c.rhs)
    }

    pub fn op(&self, id: NodeId) -> Option<Op> {
        self.couplet(id).map(|c| c.op)
    }

    /// The label on the lhs of a couplet node.
    pub fn decl_label(&self, id: NodeId) -> Option<Label> {
        self.lhs(id).and_then(|lhs| self.label(lhs))
    }

    // ------------------------------------------------------------------
    // Manifold access
    // ------------------------------------------------------------------

    /// # Panics
    /// Panics if the handle was not created by this tree.
    pub fn manifold(&self, id: ManifoldId) -> &Manifold {
        &self.manifolds[id.index()]
    }

    /// # Panics
    /// Panics if the handle was not created by this tree.
    pub fn manifold_mut(&mut self, id: ManifoldId) -> &mut Manifold {
        &mut self.manifolds[id.index()]
    }

    pub fn manifold_count(&self) -> usize {
        self.manifolds.len()
    }

    /// Resolve a `Manifold`-class declaration node to its record.
    pub fn manifold_of(&self, decl: NodeId) -> Option<ManifoldId> {
        self.rhs(decl).and_then(|rhs| self.manifold_ref(rhs))
    }

    /// Uid of the record behind a `Manifold`-class declaration node.
    pub fn uid_of(&self, decl: NodeId) -> Option<Uid> {
        self.manifold_of(decl).map(|mid| self.manifold(mid).uid())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Indented textual dump of the tree, one line per node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.render_node(root, 0, &mut out);
        }
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        use std::fmt::Write;

        for _ in 0..depth {
            out.push_str("  ");
        }
        let node = self.node(id);
        match node.class {
            Class::Nest | Class::Group => {
                let _ = writeln!(out, "{}", node.class);
                for &child in self.seq(id).unwrap_or(&[]) {
                    self.render_node(child, depth + 1, out);
                }
            }
            Class::Section => {
                let label = self.decl_label(id);
                let _ = writeln!(out, "section {}", self.render_label_opt(label));
                let body = self.rhs(id).and_then(|rhs| self.seq(rhs));
                for &child in body.unwrap_or(&[]) {
                    self.render_node(child, depth + 1, out);
                }
            }
            Class::Manifold => {
                let label = self.render_label_opt(self.decl_label(id));
                let _ = write!(out, "manifold {label}");
                if let Some(mid) = self.manifold_of(id) {
                    let m = self.manifold(mid);
                    let _ = write!(out, " #{}", m.uid().as_u32());
                    if let Some(function) = m.function {
                        let _ = write!(out, " fn={}", self.resolve(function));
                    }
                    if let Some(lang) = m.lang {
                        let _ = write!(out, " lang={}", self.resolve(lang));
                    }
                }
                out.push('\n');
            }
            Class::TypeDecl => {
                let name = self.lhs(id).and_then(|lhs| self.text(lhs)).unwrap_or("?");
                let _ = writeln!(out, "type {name}");
                let terms = self.rhs(id).and_then(|rhs| self.seq(rhs));
                for &child in terms.unwrap_or(&[]) {
                    self.render_node(child, depth + 1, out);
                }
            }
            Class::Alias
            | Class::Lang
            | Class::Cache
            | Class::Doc
            | Class::Check
            | Class::Fail
            | Class::Arg
            | Class::Hook(_) => {
                let selector = self
                    .lhs(id)
                    .map(|lhs| self.render_selector(lhs))
                    .unwrap_or_else(|| "?".to_owned());
                let op = self.op(id).map(|op| op.to_string()).unwrap_or_default();
                let _ = writeln!(out, "{} {selector} {op}", node.class);
                if let Some(rhs) = self.rhs(id) {
                    self.render_node(rhs, depth + 1, out);
                }
            }
            Class::Binding => {
                let name = self.lhs(id).and_then(|lhs| self.text(lhs)).unwrap_or("?");
                let op = self.op(id).map(|op| op.to_string()).unwrap_or_default();
                let _ = writeln!(out, "binding {name} {op}");
                if let Some(rhs) = self.rhs(id) {
                    self.render_node(rhs, depth + 1, out);
                }
            }
            Class::SelName | Class::SelLabel | Class::SelPath | Class::SelList => {
                let _ = writeln!(out, "{} {}", node.class, self.render_selector(id));
            }
            Class::Text => {
                let _ = writeln!(out, "text \"{}\"", self.text(id).unwrap_or(""));
            }
            Class::Record => {
                let uid = self
                    .manifold_ref(id)
                    .map(|mid| self.manifold(mid).uid().as_u32());
                match uid {
                    Some(uid) => {
                        let _ = writeln!(out, "record #{uid}");
                    }
                    None => {
                        let _ = writeln!(out, "record");
                    }
                }
            }
        }
    }

    fn render_label(&self, label: Label) -> String {
        match label.qualifier {
            Some(q) => format!("{}@{}", self.resolve(label.name), self.resolve(q)),
            None => self.resolve(label.name).to_owned(),
        }
    }

    fn render_label_opt(&self, label: Option<Label>) -> String {
        label
            .map(|l| self.render_label(l))
            .unwrap_or_else(|| "?".to_owned())
    }

    /// Inline rendering of a selector node.
    pub fn render_selector(&self, id: NodeId) -> String {
        match self.class(id) {
            Class::SelName => self.text(id).unwrap_or("?").to_owned(),
            Class::SelLabel => self.render_label_opt(self.label(id)),
            Class::SelPath => {
                let parts: Vec<_> = self
                    .seq(id)
                    .unwrap_or(&[])
                    .iter()
                    .map(|&elem| self.render_label_opt(self.label(elem)))
                    .collect();
                parts.join(".")
            }
            Class::SelList => {
                let parts: Vec<_> = self
                    .seq(id)
                    .unwrap_or(&[])
                    .iter()
                    .map(|&elem| self.render_selector(elem))
                    .collect();
                format!("[{}]", parts.join(", "))
            }
            _ => "?".to_owned(),
        }
    }
}
