use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use maxrect::grid::rand::{draw_polygon_staircase, ColumnCount, ReplayToken, StaircaseCfg};
use maxrect::index::{IntervalTreeIndex, SortedIndex};
use maxrect::{solve_with, Placement, Polygon};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;

#[derive(Parser)]
#[command(name = "maxrect")]
#[command(about = "Largest vertex-cornered rectangle inside a rectilinear polygon")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an input file of `x,y` polygon vertices in boundary order
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = IndexArg::Sorted)]
        index: IndexArg,
    },
    /// Sample a random staircase polygon and write it in the input format
    Gen {
        #[arg(long, default_value_t = 12)]
        columns: usize,
        #[arg(long, default_value_t = 40)]
        max_width: i64,
        #[arg(long, default_value_t = 40)]
        max_height: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IndexArg {
    Sorted,
    Tree,
}

impl IndexArg {
    fn name(self) -> &'static str {
        match self {
            IndexArg::Sorted => "sorted",
            IndexArg::Tree => "tree",
        }
    }
}

#[derive(Serialize)]
struct SolveReport {
    max_area: u64,
    corners: [[i64; 2]; 2],
    vertices: usize,
    candidates_checked: u64,
    index: &'static str,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out, index } => run_solve(input, out, index),
        Action::Gen {
            columns,
            max_width,
            max_height,
            seed,
            out,
        } => run_gen(columns, max_width, max_height, seed, out),
    }
}

fn run_solve(input: PathBuf, out: Option<PathBuf>, index: IndexArg) -> Result<()> {
    let verts = parse::parse_vertices(&input)?;
    let poly = Polygon::new(verts)?;
    let start = Instant::now();
    let mut checked: u64 = 0;
    let observe = |_: &maxrect::search::Candidate, _: bool| checked += 1;
    let placement: Placement = match index {
        IndexArg::Sorted => solve_with(&poly, &SortedIndex::build(&poly), observe)?,
        IndexArg::Tree => solve_with(&poly, &IntervalTreeIndex::build(&poly), observe)?,
    };
    tracing::info!(
        area = placement.area,
        checked,
        elapsed_ms = start.elapsed().as_millis() as u64,
        index = index.name(),
        "solved"
    );

    let (a, b) = placement.corners;
    let report = SolveReport {
        max_area: placement.area,
        corners: [[a.x, a.y], [b.x, b.y]],
        vertices: poly.vertices().len(),
        candidates_checked: checked,
        index: index.name(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_gen(
    columns: usize,
    max_width: i64,
    max_height: i64,
    seed: u64,
    out: Option<PathBuf>,
) -> Result<()> {
    let cfg = StaircaseCfg {
        column_count: ColumnCount::Fixed(columns),
        max_width,
        max_height,
    };
    let poly = draw_polygon_staircase(cfg, ReplayToken { seed, index: 0 })?;
    let text: String = poly
        .vertices()
        .iter()
        .map(|v| format!("{},{}\n", v.x, v.y))
        .collect();
    tracing::info!(vertices = poly.vertices().len(), seed, "generated");
    match out {
        Some(path) => fs::write(&path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
