//! Error kinds surfaced by polygon construction and search.
//!
//! All three conditions are fatal and propagate to the caller as distinct,
//! catchable variants so callers can tell bad input from "no solution".
//! Nothing here is retried and no variant is ever masked by a best-guess
//! answer.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A consecutive vertex pair (including the closing wrap) shares neither
    /// an x nor a y coordinate.
    #[error("edge from {from:?} to {to:?} is not axis-aligned")]
    MalformedEdge { from: (i64, i64), to: (i64, i64) },

    /// Fewer than 4 distinct vertices remain after closing the boundary.
    #[error("polygon has {distinct} distinct vertices, need at least 4")]
    InsufficientVertices { distinct: usize },

    /// The candidate queue was exhausted with no acceptance. Indicates a
    /// contract violation in the input (e.g. a non-simple polygon).
    #[error("no vertex-cornered axis-aligned rectangle fits inside the polygon")]
    NoValidRectangle,
}
