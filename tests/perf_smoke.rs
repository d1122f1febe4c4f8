use pixelburst_engine::Stage;

#[test]
fn perf_smoke_tick() {
    let mut stage = Stage::with_seed(1280, 720, 7);
    stage.enable_perf_metrics(true);
    assert!(stage.trigger_explosion());
    assert!(stage.trigger_in_place_explosion());

    stage.tick();
    let stats = stage.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.particles_updated(), 14);
    assert_eq!(stats.bursts_updated(), 6);
    assert_eq!(stats.grid_size(), stage.rows() * stage.cols());
}

#[test]
fn perf_smoke_full_run() {
    let mut stage = Stage::with_seed(1920, 1080, 11);
    stage.trigger_explosion();
    stage.trigger_in_place_explosion();

    let mut frames = 0;
    while stage.tick() {
        frames += 1;
        assert!(frames < 5_000);
    }
    assert_eq!(stage.active_particles(), 0);
    assert_eq!(stage.active_bursts(), 0);
}
