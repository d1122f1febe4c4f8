use super::*;
use crate::core::random::XorShift32;
use crate::domain::palette::BACKGROUND;
use crate::grid::GridSurface;

fn seeded(rows: u32, cols: u32) -> StageCore {
    StageCore::with_cells(rows, cols, Box::new(XorShift32::new(0xC0FFEE)))
}

/// Tick until no family wants another frame; returns the ticks run
fn run_until_idle(stage: &mut StageCore, max_ticks: usize) -> usize {
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < max_ticks, "animation never finished");
        if !stage.tick() {
            return ticks;
        }
    }
}

/// Every lit cell must sit in the 3x3 footprint of a live spark.
/// The converse does not hold: a spark's clear can erase part of an
/// earlier spark's glow in the same frame.
fn assert_only_live_footprints(stage: &StageCore) {
    let positions: Vec<(i32, i32)> = stage.particles().iter().map(|p| p.rounded_position()).collect();
    let (rows, cols) = stage.grid.bounds();
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let covered = positions
                .iter()
                .any(|&(r, c)| (r - row).abs() <= 1 && (c - col).abs() <= 1);
            if stage.grid.color(row, col) != Some(BACKGROUND) {
                assert!(covered, "leftover at ({}, {})", row, col);
            }
        }
    }
}

#[test]
fn viewport_sets_grid_geometry() {
    let stage = StageCore::with_random(1024, 768, Box::new(XorShift32::new(1)));
    assert_eq!(stage.rows(), 95);
    assert_eq!(stage.cols(), 127);
    assert_eq!(stage.colors_len(), 95 * 127);
    assert!(!stage.needs_frame());
}

#[test]
fn explosion_starts_fourteen_sparks_and_paints_immediately() {
    let mut stage = seeded(95, 127);
    assert!(stage.trigger_explosion());
    assert_eq!(stage.active_particles(), 14);
    assert!(stage.needs_frame());
    assert!(stage.grid.lit_cells() > 0);
    assert_only_live_footprints(&stage);
}

#[test]
fn retrigger_replaces_the_batch_without_leftovers() {
    let mut stage = seeded(95, 127);
    stage.trigger_explosion();
    for _ in 0..8 {
        stage.tick();
    }

    assert!(stage.trigger_explosion());
    assert_eq!(stage.active_particles(), 14);
    for spark in stage.particles() {
        assert_eq!(spark.frame_count(), 1);
    }
    assert_only_live_footprints(&stage);
}

#[test]
fn radiating_batch_runs_to_a_clean_grid() {
    let mut stage = seeded(60, 80);
    stage.trigger_explosion();
    run_until_idle(&mut stage, 2_000);

    assert_eq!(stage.active_particles(), 0);
    assert!(!stage.is_radiating());
    assert_eq!(stage.grid.lit_cells(), 0);
}

#[test]
fn in_place_bursts_are_single_flight() {
    let mut stage = seeded(95, 127);
    assert!(stage.trigger_in_place_explosion());
    assert_eq!(stage.active_bursts(), 6);

    stage.tick();
    assert!(!stage.trigger_in_place_explosion());
    assert_eq!(stage.active_bursts(), 6);

    run_until_idle(&mut stage, 500);
    assert_eq!(stage.active_bursts(), 0);
    assert_eq!(stage.grid.lit_cells(), 0);
    assert!(stage.trigger_in_place_explosion());
}

#[test]
fn bursts_are_staggered_by_three_frames() {
    let mut stage = seeded(95, 127);
    stage.trigger_in_place_explosion();
    // First frame already ran: burst i sits at 1 - 3i
    let frames: Vec<i32> = stage.bursts().iter().map(|b| b.frame_count()).collect();
    assert_eq!(frames, vec![1, -2, -5, -8, -11, -14]);
}

#[test]
fn last_burst_finishes_after_its_delay_plus_lifetime() {
    let mut stage = seeded(95, 127);
    stage.trigger_in_place_explosion();
    let ticks = run_until_idle(&mut stage, 500);
    // Burst 5 waits 15 frames and finishes on its 37th update; the start ran one frame
    assert_eq!(ticks + 1, 15 + 37);
}

#[test]
fn burst_centers_respect_the_margin_on_a_small_grid() {
    let mut stage = seeded(12, 12);
    assert!(stage.trigger_in_place_explosion());
    for burst in stage.bursts() {
        let (row, col) = burst.center();
        assert!((5..7).contains(&row), "row {}", row);
        assert!((5..7).contains(&col), "col {}", col);
    }
}

#[test]
fn both_families_share_the_grid() {
    let mut stage = seeded(95, 127);
    stage.trigger_in_place_explosion();
    stage.trigger_explosion();
    assert!(stage.is_radiating() && stage.is_bursting());

    run_until_idle(&mut stage, 2_000);
    assert_eq!(stage.grid.lit_cells(), 0);
}

#[test]
fn resize_mid_animation_discards_everything() {
    let mut stage = StageCore::with_random(800, 600, Box::new(XorShift32::new(5)));
    stage.trigger_explosion();
    stage.trigger_in_place_explosion();
    stage.tick();

    stage.resize(400, 300);
    assert_eq!(stage.active_particles(), 0);
    assert_eq!(stage.active_bursts(), 0);
    assert!(!stage.needs_frame());
    assert_eq!(stage.rows(), 37);
    assert_eq!(stage.cols(), 49);
    assert_eq!(stage.grid.lit_cells(), 0);

    // A stale frame does nothing
    assert!(!stage.tick());
    assert_eq!(stage.grid.lit_cells(), 0);

    // Bursts are no longer busy after the resize
    assert!(stage.trigger_in_place_explosion());
}

#[test]
fn empty_grid_ignores_triggers() {
    let mut stage = seeded(0, 0);
    assert!(!stage.trigger_explosion());
    assert!(!stage.trigger_in_place_explosion());
    assert!(!stage.needs_frame());
    assert!(!stage.tick());

    let mut tiny = StageCore::with_random(4, 4, Box::new(XorShift32::new(3)));
    assert_eq!(tiny.rows(), 0);
    assert!(!tiny.trigger_explosion());
}

#[test]
fn cancel_all_cleans_the_grid() {
    let mut stage = seeded(50, 50);
    stage.trigger_explosion();
    stage.trigger_in_place_explosion();
    for _ in 0..10 {
        stage.tick();
    }
    stage.cancel_all();
    assert!(!stage.needs_frame());
    assert_eq!(stage.grid.lit_cells(), 0);
}

#[test]
fn idle_tick_only_advances_the_frame_counter() {
    let mut stage = seeded(10, 10);
    assert!(!stage.tick());
    assert!(!stage.tick());
    assert_eq!(stage.frame(), 2);
    assert_eq!(stage.grid.lit_cells(), 0);
}

#[test]
fn config_change_relayouts_viewport_grid() {
    let mut stage = StageCore::with_random(1024, 768, Box::new(XorShift32::new(9)));
    stage.trigger_explosion();

    stage
        .load_config_json(r#"{"pixelSize": 10, "pixelGap": 2}"#)
        .unwrap();
    assert_eq!(stage.config().pixel_size, 10);
    assert_eq!(stage.rows(), 63);
    assert_eq!(stage.cols(), 85);
    assert_eq!(stage.active_particles(), 0);
}

#[test]
fn config_without_layout_change_keeps_running_batch() {
    let mut stage = seeded(40, 40);
    stage.trigger_explosion();
    stage.load_config_json(r#"{"randomSparks": 2}"#).unwrap();
    assert_eq!(stage.active_particles(), 14);

    stage.trigger_explosion();
    assert_eq!(stage.active_particles(), 10);
}

#[test]
fn extreme_spark_speed_still_reaches_idle() {
    let mut stage = seeded(95, 127);
    assert!(stage.load_config_json(r#"{"sparkSpeed": 1.79e308}"#).is_err());
    assert_eq!(stage.config().spark_speed, 1.5);

    stage.load_config_json(r#"{"sparkSpeed": 64.0, "randomSparks": 256}"#).unwrap();
    stage.trigger_explosion();
    run_until_idle(&mut stage, 100);
    assert_eq!(stage.active_particles(), 0);
    assert_eq!(stage.grid.lit_cells(), 0);
}

#[test]
fn rejected_config_keeps_the_old_one() {
    let mut stage = seeded(40, 40);
    assert!(stage.load_config_json(r#"{"pixelSize": 0}"#).is_err());
    assert!(stage.load_config_json("not json").is_err());
    assert_eq!(stage.config(), &StageConfig::default());
    assert!(stage.config_json().contains("\"burstCount\":6"));
}

#[test]
fn dirty_cells_and_their_colors_line_up() {
    let mut stage = seeded(30, 30);
    // Fresh grid: everything pending
    assert_eq!(stage.collect_dirty_cells(), 900);
    assert_eq!(stage.collect_dirty_cells(), 0);

    stage.trigger_explosion();
    let count = stage.collect_dirty_cells();
    assert!(count > 0);
    stage.extract_dirty_colors();

    let list = stage.grid.dirty_list().to_vec();
    assert_eq!(stage.render.dirty_colors.len(), count);
    for (i, idx) in list.iter().enumerate() {
        assert_eq!(stage.render.dirty_colors[i], stage.grid.color_idx(*idx as usize));
    }
}

#[test]
fn css_colors_for_cells() {
    let mut stage = seeded(30, 30);
    assert_eq!(stage.cell_css_color(0, 0), "#191919");
    assert_eq!(stage.cell_css_color(-5, 99), "#191919");

    stage.trigger_in_place_explosion();
    let (row, col) = stage.bursts()[0].center();
    assert_eq!(stage.cell_css_color(row, col), "#eeeeee");
}

#[test]
fn perf_stats_track_the_last_tick() {
    let mut stage = seeded(60, 60);
    stage.enable_perf_metrics(true);
    stage.trigger_explosion();
    stage.tick();

    let stats = stage.get_perf_stats();
    assert_eq!(stats.particles_updated(), 14);
    assert_eq!(stats.bursts_updated(), 0);
    assert!(stats.cells_written() > 0);
    assert_eq!(stats.grid_size(), 3600);
    assert!(stats.tick_ms() >= 0.0);

    stage.enable_perf_metrics(false);
    assert_eq!(stage.get_perf_stats().particles_updated(), 0);
}
