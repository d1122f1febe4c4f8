//! Animation systems
//!
//! Two animation families share the grid: radiating sparks
//! (`trajectory`) and in-place bursts (`burst`). Both paint through
//! `illumination` and are driven frame by frame by a `FrameScheduler`.

pub mod illumination;
pub mod trajectory;
pub mod burst;
pub mod distribution;
pub mod scheduler;

use crate::grid::GridSurface;

pub use burst::{BurstEffect, BurstPhase};
pub use distribution::{generate_distributed_positions, CellPosition};
pub use scheduler::{FrameRequest, FrameScheduler};
pub use trajectory::{spawn_radiating_batch, TrajectoryParticle};

/// Outcome of one animation update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Active,
    Inactive,
}

impl Activity {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Activity::Active
    }
}

/// One frame-driven entity painting on a grid surface
pub trait Animation {
    /// Advance one frame
    fn update(&mut self, grid: &mut dyn GridSurface) -> Activity;

    /// Erase whatever this entity may still have on the grid
    fn cleanup(&self, grid: &mut dyn GridSurface);

    fn is_active(&self) -> bool;
}
