use wasm_bindgen::prelude::*;

use crate::core::random::XorShift32;

use super::perf_stats::PerfStats;
use super::StageCore;

#[wasm_bindgen]
pub struct Stage {
    core: StageCore,
}

#[wasm_bindgen]
impl Stage {
    /// Create a stage covering a viewport (CSS pixels)
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            core: StageCore::new(viewport_width, viewport_height),
        }
    }

    /// Deterministic stage for replays and visual tests
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(viewport_width: u32, viewport_height: u32, seed: u32) -> Self {
        Self {
            core: StageCore::with_random(viewport_width, viewport_height, Box::new(XorShift32::new(seed))),
        }
    }

    /// Stage with an explicit cell grid, not tied to a viewport
    #[wasm_bindgen(js_name = withCells)]
    pub fn with_cells(rows: u32, cols: u32, seed: u32) -> Self {
        Self {
            core: StageCore::with_cells(rows, cols, Box::new(XorShift32::new(seed))),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> usize { self.core.active_particles() }

    #[wasm_bindgen(getter)]
    pub fn active_bursts(&self) -> usize { self.core.active_bursts() }

    #[wasm_bindgen(getter)]
    pub fn pixel_size(&self) -> u32 { self.core.config().pixel_size }

    #[wasm_bindgen(getter)]
    pub fn pixel_gap(&self) -> u32 { self.core.config().pixel_gap }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Radiating explosion from the grid center; restarts a running one
    pub fn trigger_explosion(&mut self) -> bool {
        self.core.trigger_explosion()
    }

    /// In-place firework batch; ignored while the previous batch runs
    pub fn trigger_in_place_explosion(&mut self) -> bool {
        self.core.trigger_in_place_explosion()
    }

    pub fn cancel_all(&mut self) {
        self.core.cancel_all();
    }

    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.core.resize(viewport_width, viewport_height);
    }

    pub fn resize_cells(&mut self, rows: u32, cols: u32) {
        self.core.resize_cells(rows, cols);
    }

    /// Advance one frame. Keep requesting frames while this returns true.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    pub fn needs_frame(&self) -> bool {
        self.core.needs_frame()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    /// Collect cells changed since the last call (cell indices, row-major)
    pub fn collect_dirty_cells(&mut self) -> usize {
        self.core.collect_dirty_cells()
    }

    pub fn get_dirty_list_ptr(&self) -> *const u32 {
        self.core.dirty_list_ptr()
    }

    /// Colors matching the dirty list, one per collected cell
    pub fn extract_dirty_colors(&mut self) -> *const u32 {
        self.core.extract_dirty_colors()
    }

    pub fn mark_all_dirty(&mut self) {
        self.core.mark_all_dirty();
    }

    /// `#rrggbb` for DOM-backed hosts
    pub fn cell_css_color(&self, row: i32, col: i32) -> String {
        self.core.cell_css_color(row, col)
    }
}

impl Stage {
    pub fn core(&self) -> &StageCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut StageCore {
        &mut self.core
    }
}
