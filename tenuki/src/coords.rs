use anyhow::{Context, Result};
use go_rules::Point;

/// Column letters in display order. `I` is skipped by Go convention.
pub const COLS: &str = "ABCDEFGHJKLMNOPQRST";

/// Parse coordinates like `C3` or `k10` into a point: a column letter
/// followed by the 1-indexed row number.
///
/// Whether the point fits a particular board is not checked here; the
/// rules engine rejects off-grid plays.
pub fn point_from_coords(coords: &str) -> Result<Point> {
    let coords = coords.trim();
    let mut chars = coords.chars();
    let col_letter = chars
        .next()
        .context("empty coordinates")?
        .to_ascii_uppercase();
    let col = COLS
        .find(col_letter)
        .with_context(|| format!("bad column letter in {coords:?}"))?;
    let row: i32 = chars
        .as_str()
        .parse()
        .with_context(|| format!("bad row number in {coords:?}"))?;

    Ok(Point::new(row, col as i32 + 1))
}

/// Format a point as coordinates, e.g. `D4`. The point must lie within
/// the lettered column range.
pub fn coords_from_point(point: Point) -> String {
    let col_letter = COLS.as_bytes()[(point.col - 1) as usize] as char;
    format!("{col_letter}{}", point.row)
}
