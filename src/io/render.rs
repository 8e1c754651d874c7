//! Plain-text grid rendering for terminal output

use crate::io::configuration::UNCOLLAPSED_GLYPH;
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::TileSet;

/// Label for a single cell: the tile name once collapsed, otherwise a glyph
pub fn cell_label<'a>(cell: &Cell, tileset: &'a TileSet) -> &'a str {
    cell.tile()
        .and_then(|tile| tileset.name_of(tile))
        .unwrap_or(UNCOLLAPSED_GLYPH)
}

/// Render the grid one row per line with columns padded to the widest name
pub fn render_grid(grid: &Grid, tileset: &TileSet) -> String {
    let column_width = tileset
        .iter()
        .map(|tile| tile.name.chars().count())
        .chain(std::iter::once(UNCOLLAPSED_GLYPH.len()))
        .max()
        .unwrap_or(1);

    let mut output = String::with_capacity(grid.len() * (column_width + 1));
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .filter_map(|x| grid.cell(x, y))
            .map(|cell| format!("{:<column_width$}", cell_label(cell, tileset)))
            .collect();
        output.push_str(row.join(" ").trim_end());
        output.push('\n');
    }
    output
}

/// Render remaining candidate counts, useful while a solve is in progress
pub fn render_entropy(grid: &Grid) -> String {
    let column_width = grid.tile_count().to_string().len();

    let mut output = String::new();
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .filter_map(|x| grid.cell(x, y))
            .map(|cell| format!("{:>column_width$}", cell.entropy()))
            .collect();
        output.push_str(&row.join(" "));
        output.push('\n');
    }
    output
}
