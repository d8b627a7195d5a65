//! Boundary index over polygon edges.
//!
//! Purpose
//! - Answer, for a fixed coordinate on one axis and an open interval on the
//!   other, whether any perpendicular polygon edge crosses strictly inside
//!   that interval at exactly that coordinate. This is the only question the
//!   validity oracle asks.
//! - Two interchangeable strategies behind one trait: a static sorted-array
//!   table (`SortedIndex`, the default) and an arena-allocated balanced
//!   interval tree (`IntervalTreeIndex`). Both are pure functions of the
//!   immutable edge set; queries never mutate, so either index may be shared
//!   read-only across threads.
//!
//! The strategy must never change outcomes, only performance; the tests in
//! this module cross-check both against a naive linear scan.

mod sorted;
mod tree;

pub use sorted::SortedIndex;
pub use tree::IntervalTreeIndex;

/// Boundary-crossing queries issued by the validity oracle.
///
/// `lo`/`hi` bound an *open* interval on the query line's own axis: only
/// perpendicular edges whose fixed coordinate lies strictly between them are
/// considered, and a crossing requires the edge's covered interval to
/// strictly contain the line's coordinate. Touching at an endpoint never
/// counts.
pub trait CrossingIndex {
    /// Does any horizontal edge cross the vertical line at `x` strictly
    /// inside `(y_lo, y_hi)`?
    fn vertical_line_crossed(&self, x: i64, y_lo: i64, y_hi: i64) -> bool;

    /// Does any vertical edge cross the horizontal line at `y` strictly
    /// inside `(x_lo, x_hi)`?
    fn horizontal_line_crossed(&self, y: i64, x_lo: i64, x_hi: i64) -> bool;
}
