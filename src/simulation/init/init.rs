use crate::core::random::{RandomSource, XorShift32};
use crate::domain::config::StageConfig;
use crate::grid::{GridGeometry, PixelGrid};
use crate::systems::FrameScheduler;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::StageCore;

pub(super) fn create_stage_core(viewport_width: u32, viewport_height: u32) -> StageCore {
    create_stage_core_with_random(
        viewport_width,
        viewport_height,
        Box::new(XorShift32::from_entropy()),
    )
}

pub(super) fn create_stage_core_with_random(
    viewport_width: u32,
    viewport_height: u32,
    rng: Box<dyn RandomSource>,
) -> StageCore {
    let config = StageConfig::default();
    let geometry = GridGeometry::from_viewport(
        viewport_width,
        viewport_height,
        config.pixel_size,
        config.pixel_gap,
    );
    let mut stage = build(config, geometry, rng);
    stage.viewport = Some((viewport_width, viewport_height));
    stage
}

pub(super) fn create_stage_core_with_cells(rows: u32, cols: u32, rng: Box<dyn RandomSource>) -> StageCore {
    build(StageConfig::default(), GridGeometry::new(rows, cols), rng)
}

fn build(config: StageConfig, geometry: GridGeometry, rng: Box<dyn RandomSource>) -> StageCore {
    StageCore {
        config,
        viewport: None,
        grid: PixelGrid::from_geometry(geometry),
        render: RenderBuffers {
            dirty_colors: Vec::with_capacity(1024),
        },
        radiating: FrameScheduler::new(),
        bursts: FrameScheduler::new(),
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
