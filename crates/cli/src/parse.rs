//! Input parsing: `x,y` integer pairs, one vertex per line, boundary order.

use anyhow::{bail, Context, Result};
use maxrect::Vertex;
use std::fs;
use std::path::Path;

/// Read and parse a vertex file. Blank lines are skipped; anything else must
/// be two comma-separated integers.
pub fn parse_vertices(path: &Path) -> Result<Vec<Vertex>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_str(text: &str) -> Result<Vec<Vertex>> {
    let mut verts = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (x, y) = line
            .split_once(',')
            .with_context(|| format!("line {}: expected `x,y`, got `{line}`", i + 1))?;
        let x: i64 = x
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad x coordinate `{}`", i + 1, x.trim()))?;
        let y: i64 = y
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad y coordinate `{}`", i + 1, y.trim()))?;
        verts.push(Vertex::new(x, y));
    }
    if verts.is_empty() {
        bail!("no vertices found");
    }
    Ok(verts)
}
