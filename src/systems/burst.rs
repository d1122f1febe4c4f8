//! Phased burst engine
//!
//! A burst sits on one cell and walks a fixed schedule keyed only by its
//! frame counter:
//!
//! | frame   | phase | pattern                | fade          |
//! |---------|-------|------------------------|---------------|
//! | < 0     | -     | dormant (start delay)  | -             |
//! | 0..4    | Point | center                 | 1.0           |
//! | 4..8    | Cross | center + 4 orthogonal  | 1.0           |
//! | 8..12   | Full  | 3x3                    | 1.0           |
//! | 12..36  | Full  | 3x3                    | 1.0 -> 0.0    |
//! | >= 36   | -     | finished               | -             |

use crate::domain::palette::{faded_bright, faded_glow};
use crate::grid::GridSurface;

use super::illumination::{clear_illumination, illuminate, illuminate_adjacent};
use super::{Activity, Animation};

const CROSS_START: i32 = 4;
const FULL_START: i32 = 8;
const FADE_START: i32 = 12;
/// Frames spent fading, first and last included
pub const FADE_FRAMES: i32 = 24;
/// Painted frames in a burst's life
pub const BURST_LIFETIME: i32 = FADE_START + FADE_FRAMES;

const POINT_PATTERN: [(i32, i32); 1] = [(0, 0)];
const CROSS_PATTERN: [(i32, i32); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
const FULL_PATTERN: [(i32, i32); 9] = [
    (0, 0),
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstPhase {
    Point,
    Cross,
    Full,
}

impl BurstPhase {
    /// Phase painted on `frame`, `None` while dormant or finished
    pub fn for_frame(frame: i32) -> Option<BurstPhase> {
        match frame {
            f if f < 0 => None,
            f if f < CROSS_START => Some(BurstPhase::Point),
            f if f < FULL_START => Some(BurstPhase::Cross),
            f if f < BURST_LIFETIME => Some(BurstPhase::Full),
            _ => None,
        }
    }

    /// Cell offsets from the center, in paint order
    pub fn pattern(self) -> &'static [(i32, i32)] {
        match self {
            BurstPhase::Point => &POINT_PATTERN,
            BurstPhase::Cross => &CROSS_PATTERN,
            BurstPhase::Full => &FULL_PATTERN,
        }
    }
}

/// Fade intensity painted on `frame`, `None` while dormant or finished
///
/// Linear over the fade window so the first fade frame is 1.0 and the last
/// is exactly 0.0. Frame 35 therefore paints only background: the last
/// visible frame is 34 (`#333333`), and frame 35 just erases the burst.
pub fn fade_for_frame(frame: i32) -> Option<f64> {
    if !(0..BURST_LIFETIME).contains(&frame) {
        return None;
    }
    if frame < FADE_START {
        return Some(1.0);
    }
    let progress = (frame - FADE_START) as f64 / (FADE_FRAMES - 1) as f64;
    Some(1.0 - progress)
}

/// One in-place firework
#[derive(Clone, Debug)]
pub struct BurstEffect {
    center_row: i32,
    center_col: i32,
    phase: BurstPhase,
    frame_count: i32,
    fade_intensity: f64,
    active: bool,
}

impl BurstEffect {
    pub fn new(center_row: i32, center_col: i32) -> Self {
        Self {
            center_row,
            center_col,
            phase: BurstPhase::Point,
            frame_count: 0,
            fade_intensity: 1.0,
            active: true,
        }
    }

    /// Stay dormant for `frames` updates before the first paint
    pub fn with_delay(mut self, frames: u32) -> Self {
        self.frame_count = -(frames.min(i32::MAX as u32) as i32);
        self
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_row, self.center_col)
    }

    pub fn phase(&self) -> BurstPhase { self.phase }

    /// Frame the next update will paint
    pub fn frame_count(&self) -> i32 { self.frame_count }

    pub fn fade_intensity(&self) -> f64 { self.fade_intensity }

    #[inline]
    pub fn is_dormant(&self) -> bool {
        self.frame_count < 0
    }

    /// Clear every glow footprint a pattern cell could have left
    fn clear_pattern(&self, grid: &mut dyn GridSurface) {
        for (dr, dc) in FULL_PATTERN {
            clear_illumination(grid, self.center_row + dr, self.center_col + dc);
        }
    }

    fn paint_pattern(&self, grid: &mut dyn GridSurface) {
        let bright = faded_bright(self.fade_intensity);
        let glow = faded_glow(self.fade_intensity);
        for &(dr, dc) in self.phase.pattern() {
            let row = self.center_row + dr;
            let col = self.center_col + dc;
            illuminate(grid, row, col, bright);
            illuminate_adjacent(grid, row, col, glow);
        }
    }
}

impl Animation for BurstEffect {
    fn update(&mut self, grid: &mut dyn GridSurface) -> Activity {
        if !self.active {
            return Activity::Inactive;
        }

        if self.is_dormant() {
            self.frame_count += 1;
            return Activity::Active;
        }

        self.clear_pattern(grid);

        match (BurstPhase::for_frame(self.frame_count), fade_for_frame(self.frame_count)) {
            (Some(phase), Some(fade)) => {
                self.phase = phase;
                self.fade_intensity = fade;
            }
            _ => {
                self.active = false;
                return Activity::Inactive;
            }
        }

        self.paint_pattern(grid);
        self.frame_count += 1;
        Activity::Active
    }

    fn cleanup(&self, grid: &mut dyn GridSurface) {
        self.clear_pattern(grid);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
