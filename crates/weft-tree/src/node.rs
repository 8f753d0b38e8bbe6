//! Tree nodes: handles, labels, couplets, and the payload sum type.

use crate::class::{Class, ValueKind};
use crate::names::Name;

/// Handle to a node in a [`Tree`](crate::Tree) arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a manifold record in a [`Tree`](crate::Tree) arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ManifoldId(u32);

impl ManifoldId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A possibly-qualified identifier used for name comparison.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Label {
    pub name: Name,
    pub qualifier: Option<Name>,
}

impl Label {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            qualifier: None,
        }
    }

    pub fn qualified(name: Name, qualifier: Name) -> Self {
        Self {
            name,
            qualifier: Some(qualifier),
        }
    }

    /// Label comparison: names must agree; qualifiers constrain the
    /// match only when both sides carry one.
    pub fn matches(self, other: Label) -> bool {
        self.name == other.name
            && match (self.qualifier, other.qualifier) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

/// Couplet operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Op {
    /// `=` replace.
    Assign,
    /// `+` append.
    Append,
    /// `-` subtract.
    Subtract,
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Assign => write!(f, "="),
            Op::Append => write!(f, "+"),
            Op::Subtract => write!(f, "-"),
        }
    }
}

/// Two-sided payload: a selector on the left, a value on the right.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Couplet {
    pub lhs: NodeId,
    pub rhs: NodeId,
    pub op: Op,
}

/// Node payload. The shape is determined by the node's class
/// (see [`Class::value_kind`]).
#[derive(Clone, Debug)]
pub enum Value {
    Text(String),
    Label(Label),
    Seq(Vec<NodeId>),
    Couplet(Couplet),
    Manifold(ManifoldId),
}

impl Value {
    /// Payload shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Label(_) => ValueKind::Label,
            Value::Seq(_) => ValueKind::Seq,
            Value::Couplet(_) => ValueKind::Couplet,
            Value::Manifold(_) => ValueKind::Manifold,
        }
    }
}

/// A tagged tree node.
#[derive(Clone, Debug)]
pub struct Node {
    pub class: Class,
    pub value: Value,
}
