/// Grid dimensions derived from the host viewport
///
/// Cells are `pixel_size` wide with `gap` between them and a `gap` of padding
/// on every edge, so `n` cells span `n * pixel + (n - 1) * gap + 2 * gap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: u32,
    pub cols: u32,
}

impl GridGeometry {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn from_viewport(width: u32, height: u32, pixel_size: u32, gap: u32) -> Self {
        Self {
            rows: cells_along(height, pixel_size, gap),
            cols: cells_along(width, pixel_size, gap),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

fn cells_along(extent: u32, pixel_size: u32, gap: u32) -> u32 {
    let pitch = pixel_size as i64 + gap as i64;
    if pitch == 0 {
        return 0;
    }
    // (extent - 2 * gap + gap) / pitch
    let usable = extent as i64 - gap as i64;
    (usable / pitch).max(0) as u32
}
