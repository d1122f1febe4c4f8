//! Stage - the explosion animation host
//!
//! `StageCore` owns the pixel grid and both animation families:
//! - radiating sparks, restarted by every trigger
//! - in-place bursts, single-flight (triggers are ignored while a batch runs)
//!
//! The host calls `tick()` once per animation frame and repaints from the
//! color buffer (or from the dirty list after `collect_dirty_cells()`).
//! Operations live in the submodules below; this file only orchestrates.

use crate::core::random::RandomSource;
use crate::domain::config::StageConfig;
use crate::grid::PixelGrid;
use crate::systems::{BurstEffect, FrameScheduler, TrajectoryParticle};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Stage;
pub use perf_stats::PerfStats;

use perf_timer::TickTimer;

/// Host-facing scratch buffers for repaints
pub(crate) struct RenderBuffers {
    // Colors of the last collected dirty cells, in dirty-list order
    pub(crate) dirty_colors: Vec<u32>,
}

pub struct StageCore {
    config: StageConfig,
    // Last viewport in CSS pixels; `None` when the grid was sized directly
    viewport: Option<(u32, u32)>,
    grid: PixelGrid,
    render: RenderBuffers,

    radiating: FrameScheduler<TrajectoryParticle>,
    bursts: FrameScheduler<BurstEffect>,
    rng: Box<dyn RandomSource>,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl StageCore {
    /// Stage sized to a viewport, using the default config
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        init::create_stage_core(viewport_width, viewport_height)
    }

    /// Same as `new` with a caller-supplied random source
    pub fn with_random(viewport_width: u32, viewport_height: u32, rng: Box<dyn RandomSource>) -> Self {
        init::create_stage_core_with_random(viewport_width, viewport_height, rng)
    }

    /// Stage with an explicit rows x cols grid and no viewport
    pub fn with_cells(rows: u32, cols: u32, rng: Box<dyn RandomSource>) -> Self {
        init::create_stage_core_with_cells(rows, cols, rng)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &StageConfig { &self.config }

    pub fn grid(&self) -> &PixelGrid { &self.grid }

    /// Replace the config from JSON; a viewport-sized grid is rebuilt
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Restart the radiating family from the grid center
    pub fn trigger_explosion(&mut self) -> bool {
        commands::trigger_explosion(self)
    }

    /// Start an in-place batch unless one is still running
    pub fn trigger_in_place_explosion(&mut self) -> bool {
        commands::trigger_in_place_explosion(self)
    }

    /// Clean up both families and stop their loops
    pub fn cancel_all(&mut self) {
        commands::cancel_all(self);
    }

    /// Rebuild the grid for a new viewport, discarding both families
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        commands::resize(self, viewport_width, viewport_height);
    }

    /// Rebuild the grid at an explicit size, discarding both families
    pub fn resize_cells(&mut self, rows: u32, cols: u32) {
        commands::resize_cells(self, rows, cols);
    }

    /// Run one animation frame; true while either family wants another
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    pub fn needs_frame(&self) -> bool {
        !self.radiating.is_idle() || !self.bursts.is_idle()
    }

    pub fn is_radiating(&self) -> bool { !self.radiating.is_idle() }

    pub fn is_bursting(&self) -> bool { !self.bursts.is_idle() }

    pub fn active_particles(&self) -> usize { self.radiating.len() }

    pub fn active_bursts(&self) -> usize { self.bursts.len() }

    pub fn particles(&self) -> &[TrajectoryParticle] { self.radiating.entities() }

    pub fn bursts(&self) -> &[BurstEffect] { self.bursts.entities() }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.grid.size()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.grid.size() * std::mem::size_of::<u32>()
    }

    /// Collect cells changed since the last call; returns the count
    pub fn collect_dirty_cells(&mut self) -> usize {
        render_extract::collect_dirty_cells(self)
    }

    pub fn dirty_list_ptr(&self) -> *const u32 {
        self.grid.dirty_list_ptr()
    }

    /// Copy the colors of the collected dirty cells into a transfer buffer
    pub fn extract_dirty_colors(&mut self) -> *const u32 {
        render_extract::extract_dirty_colors(self)
    }

    /// Force every cell into the next dirty collection
    pub fn mark_all_dirty(&mut self) {
        self.grid.mark_all_dirty();
    }

    /// CSS color of a cell, background for addresses off the grid
    pub fn cell_css_color(&self, row: i32, col: i32) -> String {
        render_extract::cell_css_color(self, row, col)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
