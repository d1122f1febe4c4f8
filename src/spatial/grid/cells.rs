use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl PixelGrid {
    // === Color access ===
    #[inline]
    pub fn color(&self, row: i32, col: i32) -> Option<Color> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.colors[self.index(row as u32, col as u32)])
    }

    #[inline]
    pub fn color_idx(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// Write a cell by index, marking it dirty only when the color changes
    #[inline]
    pub(super) fn write_idx(&mut self, idx: usize, color: Color) {
        self.writes = self.writes.saturating_add(1);
        if self.colors[idx] != color {
            self.colors[idx] = color;
            self.dirty[idx] = true;
        }
    }

    /// Writes since the previous call
    pub fn take_write_count(&mut self) -> u32 {
        std::mem::take(&mut self.writes)
    }

    /// Count cells not showing the background
    pub fn lit_cells(&self) -> usize {
        self.colors.iter().filter(|&&c| c != BACKGROUND).count()
    }

    /// Reset every cell to the background
    /// Parallel fill with Rayon when the feature is enabled
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.colors
                .par_iter_mut()
                .zip(self.dirty.par_iter_mut())
                .for_each(|(c, d)| {
                    if *c != BACKGROUND {
                        *c = BACKGROUND;
                        *d = true;
                    }
                });
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (c, d) in self.colors.iter_mut().zip(self.dirty.iter_mut()) {
                if *c != BACKGROUND {
                    *c = BACKGROUND;
                    *d = true;
                }
            }
        }
    }
}
