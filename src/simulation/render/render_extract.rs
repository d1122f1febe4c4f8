use crate::domain::palette::{css_hex, BACKGROUND};

use super::StageCore;

pub(super) fn collect_dirty_cells(stage: &mut StageCore) -> usize {
    stage.grid.collect_dirty()
}

/// Gather colors for the last dirty collection (index-aligned with the dirty list)
pub(super) fn extract_dirty_colors(stage: &mut StageCore) -> *const u32 {
    let grid = &stage.grid;
    let buffer = &mut stage.render.dirty_colors;
    buffer.clear();
    buffer.extend(grid.dirty_list().iter().map(|&idx| grid.color_idx(idx as usize)));
    buffer.as_ptr()
}

pub(super) fn cell_css_color(stage: &StageCore, row: i32, col: i32) -> String {
    css_hex(stage.grid.color(row, col).unwrap_or(BACKGROUND))
}
