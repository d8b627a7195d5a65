//! Validity oracle: does a vertex-cornered rectangle lie inside the polygon?

use crate::grid::Vertex;
use crate::index::CrossingIndex;

/// Decide whether the axis-aligned rectangle with opposite corners `a` and
/// `b` lies entirely within the polygon behind `index`, touching the
/// boundary only along shared vertices/edges, never crossing it.
///
/// The rectangle is valid iff none of eight boundary lines is crossed by a
/// perpendicular polygon edge strictly inside the rectangle's span on the
/// other axis:
///
/// - vertical lines at `min_x`, `min_x + 1`, `max_x - 1`, `max_x` over the
///   open interval `(min_y, max_y)`;
/// - horizontal lines at `min_y`, `min_y + 1`, `max_y - 1`, `max_y` over the
///   open interval `(min_x, max_x)`.
///
/// The one-unit inward offsets are part of the contract: a polygon edge can
/// run *along* a rectangle boundary line without strictly crossing it there,
/// while the grazed rectangle edge still lies partly outside the polygon.
/// The offset line catches exactly that case under the inclusive integer-grid
/// convention. Do not widen or drop the offsets.
///
/// Pure predicate: deterministic given `index` and the two corners, no side
/// effects.
pub fn fits<I: CrossingIndex>(index: &I, a: Vertex, b: Vertex) -> bool {
    let (min_x, max_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (min_y, max_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };

    let vertical_lines = [min_x, min_x + 1, max_x - 1, max_x];
    let horizontal_lines = [min_y, min_y + 1, max_y - 1, max_y];

    !vertical_lines
        .iter()
        .any(|&x| index.vertical_line_crossed(x, min_y, max_y))
        && !horizontal_lines
            .iter()
            .any(|&y| index.horizontal_line_crossed(y, min_x, max_x))
}
