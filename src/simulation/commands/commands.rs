use crate::grid::{GridGeometry, GridSurface};
use crate::systems::{generate_distributed_positions, spawn_radiating_batch, BurstEffect};

use super::StageCore;

pub(super) fn trigger_explosion(stage: &mut StageCore) -> bool {
    let (rows, cols) = stage.grid.bounds();
    if rows == 0 || cols == 0 {
        console_log!("explosion ignored: grid is empty");
        return false;
    }

    let batch = spawn_radiating_batch(
        rows,
        cols,
        stage.config.spark_speed,
        stage.config.random_sparks,
        stage.rng.as_mut(),
    );
    let sparks = batch.len();
    stage.radiating.start(batch, &mut stage.grid);
    console_log!("radiating explosion: {} sparks from ({}, {})", sparks, rows / 2, cols / 2);
    true
}

pub(super) fn trigger_in_place_explosion(stage: &mut StageCore) -> bool {
    if !stage.bursts.is_idle() {
        console_log!("in-place explosion ignored: {} bursts still running", stage.bursts.len());
        return false;
    }

    let (rows, cols) = stage.grid.bounds();
    let positions = generate_distributed_positions(
        rows,
        cols,
        stage.config.burst_count,
        stage.config.distribution_margin,
        stage.rng.as_mut(),
    );
    if positions.is_empty() {
        console_log!("in-place explosion ignored: grid is empty");
        return false;
    }

    let stagger = stage.config.burst_stagger_frames;
    let batch: Vec<BurstEffect> = positions
        .iter()
        .enumerate()
        .map(|(i, pos)| BurstEffect::new(pos.row, pos.col).with_delay((i as u32).saturating_mul(stagger)))
        .collect();

    let bursts = batch.len();
    stage.bursts.start(batch, &mut stage.grid);
    console_log!("in-place explosion: {} bursts", bursts);
    true
}

pub(super) fn cancel_all(stage: &mut StageCore) {
    stage.radiating.cancel(&mut stage.grid);
    stage.bursts.cancel(&mut stage.grid);
}

pub(super) fn resize(stage: &mut StageCore, viewport_width: u32, viewport_height: u32) {
    let geometry = GridGeometry::from_viewport(
        viewport_width,
        viewport_height,
        stage.config.pixel_size,
        stage.config.pixel_gap,
    );
    stage.viewport = Some((viewport_width, viewport_height));
    rebuild(stage, geometry);
}

pub(super) fn resize_cells(stage: &mut StageCore, rows: u32, cols: u32) {
    stage.viewport = None;
    rebuild(stage, GridGeometry::new(rows, cols));
}

fn rebuild(stage: &mut StageCore, geometry: GridGeometry) {
    // Pending frames die with the old grid; nothing is cleaned up on it
    stage.radiating.discard();
    stage.bursts.discard();
    stage.grid.rebuild(geometry.rows, geometry.cols);
    stage.render.dirty_colors.clear();
    if geometry.is_empty() {
        console_log!("grid rebuilt empty: viewport too small for a single cell");
    } else {
        console_log!("grid rebuilt: {} x {} cells", geometry.rows, geometry.cols);
    }
}
