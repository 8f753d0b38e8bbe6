//! The traversal combinator family.
//!
//! Every walk over the scope tree goes through one of these
//! combinators, parameterised by pluggable callables:
//! - `recurse` - which child nodes to descend into
//! - `criterion` - which visited nodes to keep
//! - `next` - how the selector evolves when descending into a node
//! - `mutate` - the in-place effect applied to visited nodes
//!
//! Filter combinators return new vectors whose elements are handles
//! into the input tree: mutating through a returned handle mutates the
//! original. Modifier combinators take the tree mutably; their
//! callables may only write into manifold records, never edit the
//! scope structure.

use crate::node::NodeId;
use crate::tree::Tree;

/// Pre-order depth-first filter: every reachable node satisfying
/// `criterion`, in visit order.
pub fn rfilter<R, C>(tree: &Tree, seq: &[NodeId], recurse: R, criterion: C) -> Vec<NodeId>
where
    R: Fn(&Tree, NodeId) -> Vec<NodeId>,
    C: Fn(&Tree, NodeId) -> bool,
{
    let mut out = Vec::new();
    rfilter_into(tree, seq, &recurse, &criterion, &mut out);
    out
}

fn rfilter_into<R, C>(tree: &Tree, seq: &[NodeId], recurse: &R, criterion: &C, out: &mut Vec<NodeId>)
where
    R: Fn(&Tree, NodeId) -> Vec<NodeId>,
    C: Fn(&Tree, NodeId) -> bool,
{
    for &w in seq {
        if criterion(tree, w) {
            out.push(w);
        }
        let kids = recurse(tree, w);
        if !kids.is_empty() {
            rfilter_into(tree, &kids, recurse, criterion, out);
        }
    }
}

/// Flatten: every reachable node under `recurse`, in pre-order.
pub fn flatten<R>(tree: &Tree, seq: &[NodeId], recurse: R) -> Vec<NodeId>
where
    R: Fn(&Tree, NodeId) -> Vec<NodeId>,
{
    rfilter(tree, seq, recurse, crate::descend::keep_all)
}

/// Selector-aware pre-order filter. `recurse` and `criterion` may
/// consult the evolving selector; `next` produces the selector used
/// inside each node descended into.
pub fn prfilter<P, R, C, N>(
    tree: &Tree,
    seq: &[NodeId],
    p: &P,
    recurse: R,
    criterion: C,
    next: N,
) -> Vec<NodeId>
where
    R: Fn(&Tree, NodeId, &P) -> Vec<NodeId>,
    C: Fn(&Tree, NodeId, &P) -> bool,
    N: Fn(&Tree, &P, NodeId) -> P,
{
    let mut out = Vec::new();
    prfilter_into(tree, seq, p, &recurse, &criterion, &next, &mut out);
    out
}

fn prfilter_into<P, R, C, N>(
    tree: &Tree,
    seq: &[NodeId],
    p: &P,
    recurse: &R,
    criterion: &C,
    next: &N,
    out: &mut Vec<NodeId>,
) where
    R: Fn(&Tree, NodeId, &P) -> Vec<NodeId>,
    C: Fn(&Tree, NodeId, &P) -> bool,
    N: Fn(&Tree, &P, NodeId) -> P,
{
    for &w in seq {
        if criterion(tree, w, p) {
            out.push(w);
        }
        let kids = recurse(tree, w, p);
        if !kids.is_empty() {
            let down = next(tree, p, w);
            prfilter_into(tree, &kids, &down, recurse, criterion, next, out);
        }
    }
}

/// Selector-aware modifier walk: calls `mutate` at every visited node
/// (matching is the mutate callable's concern), descending by
/// `recurse` with the selector evolved through `next`.
pub fn prmod<P, R, M, N>(tree: &mut Tree, seq: &[NodeId], p: &P, recurse: R, mut mutate: M, next: N)
where
    R: Fn(&Tree, NodeId, &P) -> Vec<NodeId>,
    M: FnMut(&mut Tree, NodeId, &P),
    N: Fn(&Tree, &P, NodeId) -> P,
{
    prmod_into(tree, seq, p, &recurse, &mut mutate, &next);
}

fn prmod_into<P, R, M, N>(
    tree: &mut Tree,
    seq: &[NodeId],
    p: &P,
    recurse: &R,
    mutate: &mut M,
    next: &N,
) where
    R: Fn(&Tree, NodeId, &P) -> Vec<NodeId>,
    M: FnMut(&mut Tree, NodeId, &P),
    N: Fn(&Tree, &P, NodeId) -> P,
{
    for &w in seq {
        mutate(tree, w, p);
        let kids = recurse(tree, w, p);
        if !kids.is_empty() {
            let down = next(tree, p, w);
            prmod_into(tree, &kids, &down, recurse, mutate, next);
        }
    }
}

/// Invoke `pmod` once per selector.
pub fn map_pmod<P, F>(tree: &mut Tree, ps: &[P], mut pmod: F)
where
    F: FnMut(&mut Tree, &P),
{
    for p in ps {
        pmod(tree, p);
    }
}

/// Apply `split` to each node and concatenate the results. `split`
/// may allocate nodes, so the tree is taken mutably.
pub fn map_split<S>(tree: &mut Tree, seq: &[NodeId], mut split: S) -> Vec<NodeId>
where
    S: FnMut(&mut Tree, NodeId) -> Vec<NodeId>,
{
    let mut out = Vec::new();
    for &w in seq {
        out.extend(split(tree, w));
    }
    out
}

/// Call `mutate` on every node of `xs`.
pub fn mutate_all<M>(tree: &mut Tree, xs: &[NodeId], mut mutate: M)
where
    M: FnMut(&mut Tree, NodeId),
{
    for &x in xs {
        mutate(tree, x);
    }
}

/// Cartesian product modifier: `mutate` on every pair of `xs` x `ys`.
pub fn mutate_product<M>(tree: &mut Tree, xs: &[NodeId], ys: &[NodeId], mut mutate: M)
where
    M: FnMut(&mut Tree, NodeId, NodeId),
{
    for &x in xs {
        for &y in ys {
            mutate(tree, x, y);
        }
    }
}

/// Cartesian product modifier over three sequences.
pub fn mutate_product3<M>(
    tree: &mut Tree,
    xs: &[NodeId],
    ys: &[NodeId],
    zs: &[NodeId],
    mut mutate: M,
) where
    M: FnMut(&mut Tree, NodeId, NodeId, NodeId),
{
    for &x in xs {
        for &y in ys {
            for &z in zs {
                mutate(tree, x, y, z);
            }
        }
    }
}

/// Collect with `filter`, then `mutate` each collected node.
pub fn filter_mutate<F, M>(tree: &mut Tree, filter: F, mutate: M)
where
    F: Fn(&Tree) -> Vec<NodeId>,
    M: FnMut(&mut Tree, NodeId),
{
    let xs = filter(tree);
    mutate_all(tree, &xs, mutate);
}

/// Depth-1 cone: an outer filter, a per-element inner filter, then
/// `mutate` on every resulting pair.
pub fn cone<XF, YF, M>(tree: &mut Tree, xfilter: XF, yfilter: YF, mut mutate: M)
where
    XF: Fn(&Tree) -> Vec<NodeId>,
    YF: Fn(&Tree, NodeId) -> Vec<NodeId>,
    M: FnMut(&mut Tree, NodeId, NodeId),
{
    let xs = xfilter(tree);
    for &x in &xs {
        let ys = yfilter(tree, x);
        for &y in &ys {
            mutate(tree, x, y);
        }
    }
}

/// Depth-2 cone: each inner filter sees the outer elements it is
/// nested under.
pub fn cone2<XF, YF, ZF, M>(tree: &mut Tree, xfilter: XF, yfilter: YF, zfilter: ZF, mut mutate: M)
where
    XF: Fn(&Tree) -> Vec<NodeId>,
    YF: Fn(&Tree, NodeId) -> Vec<NodeId>,
    ZF: Fn(&Tree, NodeId, NodeId) -> Vec<NodeId>,
    M: FnMut(&mut Tree, NodeId, NodeId, NodeId),
{
    let xs = xfilter(tree);
    for &x in &xs {
        let ys = yfilter(tree, x);
        for &y in &ys {
            let zs = zfilter(tree, x, y);
            for &z in &zs {
                mutate(tree, x, y, z);
            }
        }
    }
}
