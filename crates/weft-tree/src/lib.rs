#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Scope-tree data structures for the Weft frontend.
//!
//! A Weft program is a tree of nested scopes containing manifolds
//! (function nodes) and modifier declarations. This crate provides:
//! - `class` / `node` - the tagged node model (classes, payloads, couplets)
//! - `names` - identifier interning with cheap `Name` handles
//! - `manifold` - the mutable manifold record that linking populates
//! - `tree` - the arena that owns nodes, records, and names
//! - `walk` - the traversal combinator family (filter, modify, product, cone)
//! - `descend` - standard recursion and criterion callables for `walk`
//!
//! The tree is built by a parser, mutated by the linking pass (which
//! writes only into manifold records), and read by code generation.
//! Sequences returned by the combinators share node identity with the
//! tree: they are new vectors of handles into the same arena.

mod class;
mod descend;
mod manifold;
mod names;
mod node;
mod tree;
mod walk;

#[cfg(test)]
mod tree_tests;

pub use class::{Class, ValueKind};
pub use descend::{
    is_manifold, is_type, keep_all, recurse_composition, recurse_most, recurse_none, recurse_ws,
};
pub use manifold::{HOOK_SLOTS, Manifold, Uid};
pub use names::{Name, NameTable};
pub use node::{Couplet, Label, ManifoldId, Node, NodeId, Op, Value};
pub use tree::Tree;
pub use walk::{
    cone, cone2, filter_mutate, flatten, map_pmod, map_split, mutate_all, mutate_product,
    mutate_product3, prfilter, prmod, rfilter,
};
