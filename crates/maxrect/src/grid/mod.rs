//! Integer-grid data model: vertices, axis-aligned edges, rectilinear polygons.
//!
//! Purpose
//! - Hold the immutable inputs of the search: a validated `Polygon` with its
//!   edges already split by orientation, plus the shared `Vertex`/`Edge`
//!   types and the inclusive-grid-cell `cell_area` convention.
//! - `rand` provides a deterministic staircase-polygon sampler for tests and
//!   benchmarks.

pub mod polygon;
pub mod rand;
mod types;

pub use polygon::Polygon;
pub use types::{cell_area, Edge, Vertex};
