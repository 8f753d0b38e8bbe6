//! The manifold linking pass.
//!
//! Three phases run strictly in order over the parsed scope tree:
//! 1. `defaults` - every manifold gets a function name from its label
//! 2. `types` - top-level type declarations attach to the manifolds
//!    carrying the declared name
//! 3. `modifiers` - every modifier declaration is applied to the
//!    manifolds matched by its selector, with dotted paths consumed by
//!    descent through named sections
//!
//! Each phase is a composition of the `weft_tree` walk combinators;
//! the pass writes only into manifold records and never edits the
//! scope structure.

mod defaults;
mod modifiers;
mod selector;
mod types;

#[cfg(test)]
mod selector_tests;

pub use selector::{
    basename_match, next_always, next_if_path, next_never, recurse_path, Selector,
};

use weft_tree::Tree;

use crate::diagnostics::Diagnostics;

/// Bind every declared modifier to the manifolds it names and return
/// the diagnostics collected along the way.
///
/// The pass is total: malformed declarations are reported as warnings
/// and skipped, and the tree is always left in a consumable state.
pub fn link_modifiers(tree: &mut Tree) -> Diagnostics {
    let mut diag = Diagnostics::new();
    defaults::assign_default_functions(tree);
    types::bind_types(tree, &mut diag);
    modifiers::apply_modifiers(tree, &mut diag);
    diag
}
