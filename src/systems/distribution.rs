//! Position distributor
//!
//! Spreads N burst centers over the grid by laying a roughly square lattice
//! of partitions across it and picking one jittered cell per partition.

use crate::core::random::RandomSource;

/// Default keep-out band along every grid edge, in cells
pub const DEFAULT_MARGIN: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPosition {
    pub row: i32,
    pub col: i32,
}

/// Partition lattice for N positions on a rows x cols grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub cell_height: u32,
    pub cell_width: u32,
}

impl Lattice {
    /// `None` when there is nothing to place or nowhere to place it
    pub fn new(rows: u32, cols: u32, count: u32) -> Option<Self> {
        if rows == 0 || cols == 0 || count == 0 {
            return None;
        }
        let aspect = count as f64 * cols as f64 / rows as f64;
        let grid_cols = (aspect.sqrt().ceil() as u32).max(1);
        let grid_rows = count.div_ceil(grid_cols);
        Some(Self {
            grid_rows,
            grid_cols,
            cell_height: rows / grid_rows,
            cell_width: cols / grid_cols,
        })
    }

    /// Lattice (row, col) that position `index` belongs to
    #[inline]
    pub fn partition(&self, index: u32) -> (u32, u32) {
        (index / self.grid_cols, index % self.grid_cols)
    }
}

/// One coordinate inside partition `part` of size `span` on an axis of
/// length `dimension`
fn pick_axis(
    part: u32,
    span: u32,
    dimension: u32,
    margin: u32,
    rng: &mut dyn RandomSource,
) -> i32 {
    let (part, span, dimension, margin) = (part as i64, span as i64, dimension as i64, margin as i64);

    let min = part * span + margin;
    let max = ((part + 1) * span - margin).min(dimension - margin);
    if max > min {
        let offset = (rng.next_f64() * (max - min) as f64).floor() as i64;
        return (min + offset.min(max - min - 1)) as i32;
    }

    // Partition too small for the margin, fall back to its center
    let low = margin;
    let high = dimension - margin - 1;
    if low > high {
        return (dimension / 2) as i32;
    }
    (part * span + span / 2).clamp(low, high) as i32
}

/// `count` burst centers, one per lattice partition, in partition order
pub fn generate_distributed_positions(
    rows: u32,
    cols: u32,
    count: u32,
    margin: u32,
    rng: &mut dyn RandomSource,
) -> Vec<CellPosition> {
    let Some(lattice) = Lattice::new(rows, cols, count) else {
        return Vec::new();
    };

    (0..count)
        .map(|i| {
            let (grid_row, grid_col) = lattice.partition(i);
            let row = pick_axis(grid_row, lattice.cell_height, rows, margin, rng);
            let col = pick_axis(grid_col, lattice.cell_width, cols, margin, rng);
            CellPosition { row, col }
        })
        .collect()
}
