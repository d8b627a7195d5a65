//! Sorted-array boundary index (default strategy).
//!
//! Edges are grouped by their fixed coordinate; the distinct fixed
//! coordinates are kept sorted so a query selects the sub-range strictly
//! between the interval bounds by binary search, then scans the short
//! per-coordinate interval lists.

use std::collections::BTreeMap;

use crate::grid::{Edge, Polygon};

use super::CrossingIndex;

/// Immutable sorted-array index over both edge orientations.
#[derive(Clone, Debug)]
pub struct SortedIndex {
    horizontal: AxisTable, // fixed = y, intervals on x
    vertical: AxisTable,   // fixed = x, intervals on y
}

impl SortedIndex {
    pub fn build(poly: &Polygon) -> Self {
        Self::from_edges(poly.horizontal_edges(), poly.vertical_edges())
    }

    pub fn from_edges(horizontal: &[Edge], vertical: &[Edge]) -> Self {
        Self {
            horizontal: AxisTable::build(horizontal),
            vertical: AxisTable::build(vertical),
        }
    }
}

impl CrossingIndex for SortedIndex {
    #[inline]
    fn vertical_line_crossed(&self, x: i64, y_lo: i64, y_hi: i64) -> bool {
        self.horizontal.crossed(x, y_lo, y_hi)
    }

    #[inline]
    fn horizontal_line_crossed(&self, y: i64, x_lo: i64, x_hi: i64) -> bool {
        self.vertical.crossed(y, x_lo, x_hi)
    }
}

/// One orientation's edges: sorted distinct fixed coordinates plus, per
/// coordinate, the sorted list of covered intervals.
#[derive(Clone, Debug)]
struct AxisTable {
    keys: Vec<i64>,
    intervals: Vec<Vec<(i64, i64)>>,
}

impl AxisTable {
    fn build(edges: &[Edge]) -> Self {
        let mut by_key: BTreeMap<i64, Vec<(i64, i64)>> = BTreeMap::new();
        for e in edges {
            by_key.entry(e.fixed).or_default().push((e.lo, e.hi));
        }
        let mut keys = Vec::with_capacity(by_key.len());
        let mut intervals = Vec::with_capacity(by_key.len());
        for (k, mut list) in by_key {
            list.sort_unstable();
            keys.push(k);
            intervals.push(list);
        }
        Self { keys, intervals }
    }

    /// Any edge with fixed coordinate strictly inside `(lo, hi)` whose
    /// interval strictly contains `c`?
    fn crossed(&self, c: i64, lo: i64, hi: i64) -> bool {
        let start = self.keys.partition_point(|&k| k <= lo);
        let end = self.keys.partition_point(|&k| k < hi);
        // start > end when the open interval is empty; the range is then empty too.
        (start..end).any(|i| {
            self.intervals[i]
                .iter()
                .any(|&(s, e)| s < c && c < e)
        })
    }
}
