//! Rectilinear polygon: ordered vertices, implicit closure, edge derivation.

use crate::error::Error;

use super::types::{Edge, Vertex};

/// Simple rectilinear polygon given by its boundary vertices in order
/// (clockwise or counter-clockwise; the search is orientation-agnostic).
///
/// Invariants, established at construction:
/// - at least 4 distinct vertices after dropping a duplicated closing vertex;
/// - every boundary edge, including the wrap from last back to first, is
///   horizontal or vertical.
///
/// Simplicity (no self-intersection) is an input contract and is not
/// verified; violating it surfaces later as `Error::NoValidRectangle`.
#[derive(Clone, Debug)]
pub struct Polygon {
    verts: Vec<Vertex>,
    horizontal: Vec<Edge>, // fixed = y, covers an x interval
    vertical: Vec<Edge>,   // fixed = x, covers a y interval
}

impl Polygon {
    /// Validate and close a boundary vertex list.
    ///
    /// A stored last vertex equal to the first is treated as an explicit
    /// closing and dropped; the wrap edge is always derived.
    pub fn new(mut verts: Vec<Vertex>) -> Result<Self, Error> {
        if verts.len() > 1 && verts.first() == verts.last() {
            verts.pop();
        }
        let mut distinct = verts.clone();
        distinct.sort_unstable_by_key(|v| (v.x, v.y));
        distinct.dedup();
        if distinct.len() < 4 {
            return Err(Error::InsufficientVertices {
                distinct: distinct.len(),
            });
        }
        let mut horizontal = Vec::with_capacity(verts.len() / 2 + 1);
        let mut vertical = Vec::with_capacity(verts.len() / 2 + 1);
        for (i, &a) in verts.iter().enumerate() {
            let b = verts[(i + 1) % verts.len()];
            if a.x == b.x {
                vertical.push(Edge::new(a.x, a.y, b.y));
            } else if a.y == b.y {
                horizontal.push(Edge::new(a.y, a.x, b.x));
            } else {
                return Err(Error::MalformedEdge {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                });
            }
        }
        Ok(Self {
            verts,
            horizontal,
            vertical,
        })
    }

    /// Boundary vertices in input order, closing vertex dropped.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    /// Horizontal boundary edges (fixed y).
    #[inline]
    pub fn horizontal_edges(&self) -> &[Edge] {
        &self.horizontal
    }

    /// Vertical boundary edges (fixed x).
    #[inline]
    pub fn vertical_edges(&self) -> &[Edge] {
        &self.vertical
    }
}
