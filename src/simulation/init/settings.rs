use crate::domain::config::StageConfig;

use super::perf_stats::PerfStats;
use super::StageCore;

pub(super) fn enable_perf_metrics(stage: &mut StageCore, enabled: bool) {
    stage.perf_enabled = enabled;
    if !enabled {
        stage.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(stage: &StageCore) -> PerfStats {
    stage.perf_stats.clone()
}

pub(super) fn load_config_json(stage: &mut StageCore, json: &str) -> Result<(), String> {
    let config = StageConfig::from_json(json)?;
    let relayout = config.pixel_size != stage.config.pixel_size
        || config.pixel_gap != stage.config.pixel_gap;
    stage.config = config;

    // Cell geometry changed, so the grid no longer matches the viewport
    if let (true, Some((width, height))) = (relayout, stage.viewport) {
        super::commands::resize(stage, width, height);
    }
    Ok(())
}

pub(super) fn config_json(stage: &StageCore) -> String {
    stage.config.to_json()
}
