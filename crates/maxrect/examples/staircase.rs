//! Sample a staircase polygon and report the largest vertex-cornered
//! rectangle under both index strategies.
//!
//! Usage:
//!   cargo run -p maxrect --example staircase -- [columns] [seed]

use maxrect::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let columns: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let cfg = StaircaseCfg {
        column_count: ColumnCount::Fixed(columns),
        ..StaircaseCfg::default()
    };
    let poly = match draw_polygon_staircase(cfg, ReplayToken { seed, index: 0 }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("sampling failed: {e}");
            return;
        }
    };
    println!("polygon: {} vertices", poly.vertices().len());

    for (name, strategy) in [
        ("sorted array", IndexStrategy::SortedArray),
        ("interval tree", IndexStrategy::IntervalTree),
    ] {
        match solve_cfg(&poly, SearchCfg { strategy }) {
            Ok(p) => {
                let (a, b) = p.corners;
                println!(
                    "{name}: area {} with corners ({}, {}) and ({}, {})",
                    p.area, a.x, a.y, b.x, b.y
                );
            }
            Err(e) => println!("{name}: {e}"),
        }
    }
}
