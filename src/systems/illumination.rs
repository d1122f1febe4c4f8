//! Illumination primitives
//!
//! A lit cell is painted bright with its 8 Moore neighbors in a dim glow.
//! Every write goes through `GridSurface::set_cell`, so neighbors that fall
//! off the grid are silently dropped.

use crate::domain::palette::{Color, BACKGROUND, BRIGHT, GLOW};
use crate::grid::GridSurface;

/// Moore neighborhood, row-major, center excluded
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[inline]
pub fn illuminate<G: GridSurface + ?Sized>(grid: &mut G, row: i32, col: i32, color: Color) {
    grid.set_cell(row, col, color);
}

#[inline]
pub fn reset<G: GridSurface + ?Sized>(grid: &mut G, row: i32, col: i32) {
    grid.set_cell(row, col, BACKGROUND);
}

/// Paint only the 8 neighbors of `(row, col)`
pub fn illuminate_adjacent<G: GridSurface + ?Sized>(grid: &mut G, row: i32, col: i32, color: Color) {
    for (dr, dc) in MOORE_OFFSETS {
        illuminate(grid, row.saturating_add(dr), col.saturating_add(dc), color);
    }
}

pub fn illuminate_with_glow<G: GridSurface + ?Sized>(grid: &mut G, row: i32, col: i32) {
    illuminate(grid, row, col, BRIGHT);
    illuminate_adjacent(grid, row, col, GLOW);
}

/// Reset a cell and its glow back to the background
pub fn clear_illumination<G: GridSurface + ?Sized>(grid: &mut G, row: i32, col: i32) {
    reset(grid, row, col);
    illuminate_adjacent(grid, row, col, BACKGROUND);
}
