#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Manifold linking for the Weft frontend.
//!
//! The parser hands over a scope tree of manifold declarations and
//! modifier declarations; this crate binds every declared modifier to
//! the manifolds its selector names, producing the fully-resolved
//! manifold graph that code generation consumes:
//! - `link` - the three-phase pass (default names, types, modifiers)
//! - `diagnostics` - the advisory warning collection the pass emits into
//!
//! The pass is best-effort by design: a malformed declaration is
//! reported and skipped, never fatal.
//!
//! # Example
//!
//! ```
//! use weft_link::link_modifiers;
//! use weft_tree::Tree;
//!
//! let mut tree = Tree::new();
//! let label = tree.make_label("foo");
//! let decl = tree.add_manifold(label);
//! tree.push_root(decl);
//!
//! let diagnostics = link_modifiers(&mut tree);
//! assert!(diagnostics.is_empty());
//!
//! let record = tree.manifold(tree.manifold_of(decl).unwrap());
//! assert_eq!(tree.resolve(record.function.unwrap()), "foo");
//! ```

pub mod diagnostics;
pub mod link;

#[cfg(test)]
mod test_utils;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use link::{link_modifiers, Selector};
