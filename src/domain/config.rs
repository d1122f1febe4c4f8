use serde::{Deserialize, Serialize};

/// Largest accepted `sparkSpeed`; faster sparks cross any grid in one frame
pub const MAX_SPARK_SPEED: f64 = 64.0;
/// Largest accepted `randomSparks`
pub const MAX_RANDOM_SPARKS: u32 = 256;
/// Largest accepted `burstCount`
pub const MAX_BURST_COUNT: u32 = 64;

/// Stage tuning, loadable from JSON
///
/// Every key is optional; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StageConfig {
    /// Rendered cell edge in CSS pixels
    pub pixel_size: u32,
    /// Gap between cells (also the padding around the grid)
    pub pixel_gap: u32,
    /// Base speed multiplier for radiating sparks
    pub spark_speed: f64,
    /// Sparks at random angles added to the 8 compass sparks
    pub random_sparks: u32,
    /// Bursts per in-place batch
    pub burst_count: u32,
    /// Start delay between consecutive bursts, in frames
    pub burst_stagger_frames: u32,
    /// Inset from lattice and grid edges when placing bursts
    pub distribution_margin: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            pixel_size: 5,
            pixel_gap: 3,
            spark_speed: 1.5,
            random_sparks: 6,
            burst_count: 6,
            burst_stagger_frames: 3,
            distribution_margin: 5,
        }
    }
}

impl StageConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: StageConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pixel_size == 0 {
            return Err("pixelSize must be at least 1".to_string());
        }
        if !(self.spark_speed > 0.0 && self.spark_speed <= MAX_SPARK_SPEED) {
            return Err(format!(
                "sparkSpeed must be in (0, {}], got {}",
                MAX_SPARK_SPEED, self.spark_speed
            ));
        }
        if self.random_sparks > MAX_RANDOM_SPARKS {
            return Err(format!(
                "randomSparks must be at most {}, got {}",
                MAX_RANDOM_SPARKS, self.random_sparks
            ));
        }
        if self.burst_count == 0 || self.burst_count > MAX_BURST_COUNT {
            return Err(format!(
                "burstCount must be in 1..={}, got {}",
                MAX_BURST_COUNT, self.burst_count
            ));
        }
        Ok(())
    }
}
