//! Random rectilinear polygons (staircase model + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for simple rectilinear polygons
//!   used by cross-check tests and benchmarks. Parameterizable, reproducible,
//!   and returns a validated `Polygon` ready for index construction.
//!
//! Model
//! - A staircase (histogram) over the baseline `y = 0`: `k` columns with
//!   random integer widths and heights, adjacent heights forced distinct so
//!   every stored vertex is a genuine corner. The boundary is traced once,
//!   yielding `2k + 2` vertices and a simple polygon by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;

use super::polygon::Polygon;
use super::types::Vertex;

/// Column count distribution.
#[derive(Clone, Copy, Debug)]
pub enum ColumnCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl ColumnCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ColumnCount::Fixed(n) => n.max(1),
            ColumnCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Staircase sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StaircaseCfg {
    pub column_count: ColumnCount,
    /// Column widths are drawn from `1..=max_width`. Clamped to >= 1.
    pub max_width: i64,
    /// Column heights are drawn from `1..=max_height`, adjacent heights
    /// distinct. Clamped to >= 2 so resampling always terminates.
    pub max_height: i64,
}

impl Default for StaircaseCfg {
    fn default() -> Self {
        Self {
            column_count: ColumnCount::Fixed(12),
            max_width: 40,
            max_height: 40,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random staircase polygon.
///
/// The boundary runs along the baseline, up the right wall, leftwards across
/// the column tops, and down the left wall. Construction goes through
/// `Polygon::new`, so the usual invariants hold for the returned value.
pub fn draw_polygon_staircase(cfg: StaircaseCfg, tok: ReplayToken) -> Result<Polygon, Error> {
    let mut rng = tok.to_std_rng();
    let k = cfg.column_count.sample(&mut rng);
    let max_w = cfg.max_width.max(1);
    let max_h = cfg.max_height.max(2);

    // Column boundaries x_0 = 0 < x_1 < ... < x_k and per-column heights.
    let mut xs = Vec::with_capacity(k + 1);
    xs.push(0i64);
    let mut heights = Vec::with_capacity(k);
    let mut x = 0i64;
    let mut prev_h = 0i64;
    for _ in 0..k {
        x += rng.gen_range(1..=max_w);
        xs.push(x);
        let mut h = rng.gen_range(1..=max_h);
        while h == prev_h {
            h = rng.gen_range(1..=max_h);
        }
        heights.push(h);
        prev_h = h;
    }

    let w = xs[k];
    let mut verts = Vec::with_capacity(2 * k + 2);
    verts.push(Vertex::new(0, 0));
    verts.push(Vertex::new(w, 0));
    verts.push(Vertex::new(w, heights[k - 1]));
    for i in (1..k).rev() {
        verts.push(Vertex::new(xs[i], heights[i]));
        verts.push(Vertex::new(xs[i], heights[i - 1]));
    }
    verts.push(Vertex::new(0, heights[0]));
    Polygon::new(verts)
}
