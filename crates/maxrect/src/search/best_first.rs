//! Best-first search over vertex pairs ordered by candidate area.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::grid::{cell_area, Vertex};
use crate::index::CrossingIndex;

use super::oracle::fits;

/// An unordered pair of distinct polygon vertices, interpreted as opposite
/// corners of an axis-aligned rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub area: u64,
    pub corners: (Vertex, Vertex),
}

// Heap order is by area alone; equal-area candidates are interchangeable.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.area == other.area
    }
}
impl Eq for Candidate {}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area.cmp(&other.area)
    }
}

/// The accepted result: maximum inclusive-grid-cell area and the two polygon
/// vertices realizing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub area: u64,
    pub corners: (Vertex, Vertex),
}

/// One-shot extract-max loop: enumerate all pairs, heapify by area, and pop
/// until the oracle accepts. The first acceptance is optimal among
/// vertex-cornered rectangles because candidates leave the heap in
/// non-increasing area order.
///
/// `observe` is called after every oracle evaluation with the candidate and
/// its verdict; pass a no-op closure when progress is not needed.
pub(super) fn run<I, F>(verts: &[Vertex], index: &I, mut observe: F) -> Result<Placement, Error>
where
    I: CrossingIndex,
    F: FnMut(&Candidate, bool),
{
    let n = verts.len();
    let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, &a) in verts.iter().enumerate() {
        for &b in &verts[i + 1..] {
            candidates.push(Candidate {
                area: cell_area(a, b),
                corners: (a, b),
            });
        }
    }
    // O(n^2) heapify; no re-insertion or decrease-key afterwards.
    let mut heap = BinaryHeap::from(candidates);
    while let Some(cand) = heap.pop() {
        let accepted = fits(index, cand.corners.0, cand.corners.1);
        observe(&cand, accepted);
        if accepted {
            return Ok(Placement {
                area: cand.area,
                corners: cand.corners,
            });
        }
    }
    Err(Error::NoValidRectangle)
}
