//! Balanced interval-tree boundary index (alternate strategy).
//!
//! One tree per orientation, keyed by interval start and augmented with the
//! subtree maximum of interval ends so stabbing queries can prune whole
//! subtrees. Nodes live in a contiguous arena and reference children by
//! index, so there is no recursive ownership. The tree is balanced by
//! construction (midpoint of the sorted interval list) and immutable after
//! `build`.
//!
//! External contract identical to `SortedIndex`; asymptotically better when
//! many edges share a few fixed coordinates.

use crate::grid::{Edge, Polygon};

use super::CrossingIndex;

#[derive(Clone, Debug)]
pub struct IntervalTreeIndex {
    horizontal: IntervalTree, // fixed = y, intervals on x
    vertical: IntervalTree,   // fixed = x, intervals on y
}

impl IntervalTreeIndex {
    pub fn build(poly: &Polygon) -> Self {
        Self::from_edges(poly.horizontal_edges(), poly.vertical_edges())
    }

    pub fn from_edges(horizontal: &[Edge], vertical: &[Edge]) -> Self {
        Self {
            horizontal: IntervalTree::build(horizontal),
            vertical: IntervalTree::build(vertical),
        }
    }
}

impl CrossingIndex for IntervalTreeIndex {
    #[inline]
    fn vertical_line_crossed(&self, x: i64, y_lo: i64, y_hi: i64) -> bool {
        self.horizontal.crossed(x, y_lo, y_hi)
    }

    #[inline]
    fn horizontal_line_crossed(&self, y: i64, x_lo: i64, x_hi: i64) -> bool {
        self.vertical.crossed(y, x_lo, x_hi)
    }
}

/// Arena node. `max_hi` is the maximum interval end in the node's subtree.
#[derive(Clone, Debug)]
struct Node {
    lo: i64,
    hi: i64,
    fixed: i64,
    max_hi: i64,
    left: Option<u32>,
    right: Option<u32>,
}

#[derive(Clone, Debug, Default)]
struct IntervalTree {
    nodes: Vec<Node>,
    root: Option<u32>,
}

impl IntervalTree {
    fn build(edges: &[Edge]) -> Self {
        let mut items: Vec<(i64, i64, i64)> =
            edges.iter().map(|e| (e.lo, e.hi, e.fixed)).collect();
        items.sort_unstable();
        let mut tree = Self {
            nodes: Vec::with_capacity(items.len()),
            root: None,
        };
        tree.root = tree.build_range(&items);
        tree
    }

    fn build_range(&mut self, items: &[(i64, i64, i64)]) -> Option<u32> {
        if items.is_empty() {
            return None;
        }
        let mid = items.len() / 2;
        let (lo, hi, fixed) = items[mid];
        let left = self.build_range(&items[..mid]);
        let right = self.build_range(&items[mid + 1..]);
        let mut max_hi = hi;
        if let Some(l) = left {
            max_hi = max_hi.max(self.nodes[l as usize].max_hi);
        }
        if let Some(r) = right {
            max_hi = max_hi.max(self.nodes[r as usize].max_hi);
        }
        let id = self.nodes.len() as u32;
        self.nodes.push(Node {
            lo,
            hi,
            fixed,
            max_hi,
            left,
            right,
        });
        Some(id)
    }

    /// Any interval strictly containing `c` whose fixed coordinate lies
    /// strictly inside `(lo, hi)`?
    fn crossed(&self, c: i64, lo: i64, hi: i64) -> bool {
        self.crossed_at(self.root, c, lo, hi)
    }

    fn crossed_at(&self, at: Option<u32>, c: i64, lo: i64, hi: i64) -> bool {
        let id = match at {
            Some(id) => id as usize,
            None => return false,
        };
        let n = &self.nodes[id];
        // Strict containment needs some end > c; prune on the subtree max.
        if n.max_hi <= c {
            return false;
        }
        if self.crossed_at(n.left, c, lo, hi) {
            return true;
        }
        if n.lo < c {
            if c < n.hi && lo < n.fixed && n.fixed < hi {
                return true;
            }
            return self.crossed_at(n.right, c, lo, hi);
        }
        // Keys in the right subtree start at or after n.lo >= c, so none can
        // strictly contain c.
        false
    }
}
