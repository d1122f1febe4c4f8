//! Grid - the cell color buffer the host renders from
//!
//! One ABGR color per cell, row-major, plus per-cell dirty flags so the host
//! only repaints what changed since its last collection.
//!
//! Engines never see `PixelGrid` directly; they paint through the
//! `GridSurface` capability, which makes every out-of-range write a no-op.

use crate::domain::palette::{Color, BACKGROUND};

mod indexing;
mod cells;
mod dirty;
mod geometry;

pub use geometry::GridGeometry;

/// Paintable rows x columns of cells
pub trait GridSurface {
    /// (rows, columns)
    fn bounds(&self) -> (u32, u32);

    /// Set one cell; addresses outside the grid are ignored
    fn set_cell(&mut self, row: i32, col: i32, color: Color);

    #[inline]
    fn contains(&self, row: i32, col: i32) -> bool {
        let (rows, cols) = self.bounds();
        row >= 0 && col >= 0 && (row as u32) < rows && (col as u32) < cols
    }
}

/// Engine-owned grid surface
pub struct PixelGrid {
    rows: u32,
    cols: u32,
    size: usize,

    pub colors: Vec<Color>,
    dirty: Vec<bool>,
    dirty_list: Vec<u32>,
    // Cell writes since the last `take_write_count`
    writes: u32,
}

impl PixelGrid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            size,
            colors: vec![BACKGROUND; size],
            // A fresh grid has never been shown, so every cell starts dirty
            dirty: vec![true; size],
            dirty_list: Vec::with_capacity(size.min(4096)),
            writes: 0,
        }
    }

    pub fn from_geometry(geometry: GridGeometry) -> Self {
        Self::new(geometry.rows, geometry.cols)
    }

    /// Discard all cells; reallocates only when the size changes
    pub fn rebuild(&mut self, rows: u32, cols: u32) {
        if rows == self.rows && cols == self.cols {
            self.clear();
            self.mark_all_dirty();
            self.writes = 0;
            return;
        }
        *self = Self::new(rows, cols);
    }
}

impl GridSurface for PixelGrid {
    #[inline]
    fn bounds(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    #[inline]
    fn set_cell(&mut self, row: i32, col: i32, color: Color) {
        if !self.in_bounds(row, col) {
            return;
        }
        let idx = self.index(row as u32, col as u32);
        self.write_idx(idx, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::BRIGHT;

    #[test]
    fn new_grid_is_background() {
        let grid = PixelGrid::new(4, 6);
        assert_eq!(grid.bounds(), (4, 6));
        assert_eq!(grid.size(), 24);
        assert!(grid.colors.iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set_cell(-1, 0, BRIGHT);
        grid.set_cell(0, -1, BRIGHT);
        grid.set_cell(3, 0, BRIGHT);
        grid.set_cell(0, 3, BRIGHT);
        grid.set_cell(i32::MIN, i32::MAX, BRIGHT);
        assert!(grid.colors.iter().all(|&c| c == BACKGROUND));
        assert_eq!(grid.take_write_count(), 0);
    }

    #[test]
    fn in_range_write_lands_row_major() {
        let mut grid = PixelGrid::new(3, 4);
        grid.set_cell(1, 2, BRIGHT);
        assert_eq!(grid.colors[6], BRIGHT);
        assert_eq!(grid.color(1, 2), Some(BRIGHT));
        assert_eq!(grid.take_write_count(), 1);
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let grid = PixelGrid::new(0, 0);
        assert!(!grid.contains(0, 0));
        assert_eq!(grid.size(), 0);
    }

    #[test]
    fn rebuild_resets_size_and_colors() {
        let mut grid = PixelGrid::new(2, 2);
        grid.set_cell(0, 0, BRIGHT);
        grid.rebuild(5, 7);
        assert_eq!(grid.bounds(), (5, 7));
        assert_eq!(grid.colors.len(), 35);
        assert!(grid.colors.iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn same_size_rebuild_clears_in_place() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set_cell(1, 1, BRIGHT);
        grid.collect_dirty();
        grid.rebuild(3, 3);
        assert_eq!(grid.lit_cells(), 0);
        assert_eq!(grid.collect_dirty(), 9);
    }
}
