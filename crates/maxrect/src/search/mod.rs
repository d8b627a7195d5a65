//! Maximum-rectangle search: validity oracle + best-first candidate loop.
//!
//! Purpose
//! - Find the maximum-area axis-aligned rectangle whose opposite corners are
//!   two polygon vertices and which lies entirely inside the polygon.
//! - Candidates are visited in strictly decreasing area order, so the first
//!   one the oracle accepts is the answer; the loop never revisits or
//!   re-inserts.
//!
//! The oracle consults a read-only `CrossingIndex`; the search itself is
//! sequential because it must stop at the *first* acceptance in area order.
//! Callers wanting batched parallel evaluation can share the index across
//! threads (it is `Sync`) and resolve acceptance per area tier themselves.

mod best_first;
mod oracle;

pub use best_first::{Candidate, Placement};
pub use oracle::fits;

use crate::error::Error;
use crate::grid::Polygon;
use crate::index::{CrossingIndex, IntervalTreeIndex, SortedIndex};

/// Boundary-index strategy to build for a solve. Both produce identical
/// results; kept selectable for ablations and benchmarks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexStrategy {
    /// Static sorted-array index with binary search over fixed coordinates.
    #[default]
    SortedArray,
    /// Arena-allocated balanced interval tree.
    IntervalTree,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    pub strategy: IndexStrategy,
}

/// Solve with the default configuration.
pub fn solve(poly: &Polygon) -> Result<Placement, Error> {
    solve_cfg(poly, SearchCfg::default())
}

/// Solve with an explicit index strategy.
pub fn solve_cfg(poly: &Polygon, cfg: SearchCfg) -> Result<Placement, Error> {
    match cfg.strategy {
        IndexStrategy::SortedArray => {
            best_first::run(poly.vertices(), &SortedIndex::build(poly), |_, _| {})
        }
        IndexStrategy::IntervalTree => {
            best_first::run(poly.vertices(), &IntervalTreeIndex::build(poly), |_, _| {})
        }
    }
}

/// Solve against a caller-supplied index, with an observer invoked after
/// each candidate evaluation `(candidate, accepted)`.
///
/// This is the seam used by consistency tests (swapping index strategies
/// must never change the outcome) and by callers that pre-build an index or
/// want progress reporting without shared mutable state.
pub fn solve_with<I, F>(poly: &Polygon, index: &I, observe: F) -> Result<Placement, Error>
where
    I: CrossingIndex,
    F: FnMut(&Candidate, bool),
{
    best_first::run(poly.vertices(), index, observe)
}

#[cfg(test)]
mod tests;
