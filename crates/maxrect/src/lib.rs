//! Largest vertex-cornered rectangle inside a simple rectilinear polygon.
//!
//! Pipeline: a validated [`grid::Polygon`] feeds a boundary index built once
//! from its edges ([`index`]), which the validity oracle queries while the
//! best-first search walks vertex pairs in decreasing area order
//! ([`search`]). The first accepted candidate is the answer.
//!
//! Parsing raw text into vertices and formatting results are callers'
//! concerns (see the workspace `cli` crate); this crate performs no I/O.

pub mod error;
pub mod grid;
pub mod index;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use grid::{Polygon, Vertex};
pub use search::{solve, solve_cfg, solve_with, Placement, SearchCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::grid::rand::{
        draw_polygon_staircase, ColumnCount, ReplayToken, StaircaseCfg,
    };
    pub use crate::grid::{cell_area, Edge, Polygon, Vertex};
    pub use crate::index::{CrossingIndex, IntervalTreeIndex, SortedIndex};
    pub use crate::search::{
        fits, solve, solve_cfg, solve_with, Candidate, IndexStrategy, Placement, SearchCfg,
    };
}
