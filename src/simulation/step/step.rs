use super::{StageCore, TickTimer};

pub(super) fn tick(stage: &mut StageCore) -> bool {
    let perf_on = stage.perf_enabled;
    let tick_start = if perf_on { Some(TickTimer::start()) } else { None };

    let particles_updated = stage.radiating.tick(&mut stage.grid);
    let bursts_updated = stage.bursts.tick(&mut stage.grid);
    let cells_written = stage.grid.take_write_count();

    stage.frame = stage.frame.wrapping_add(1);

    if let Some(timer) = tick_start {
        let stats = &mut stage.perf_stats;
        stats.reset();
        stats.tick_ms = timer.elapsed_ms();
        stats.particles_updated = particles_updated as u32;
        stats.bursts_updated = bursts_updated as u32;
        stats.cells_written = cells_written;
        stats.active_particles = stage.radiating.len() as u32;
        stats.active_bursts = stage.bursts.len() as u32;
        stats.grid_size = stage.grid.size() as u32;
    }

    stage.needs_frame()
}
