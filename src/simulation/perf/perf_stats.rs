use wasm_bindgen::prelude::*;

/// Per-tick metrics snapshot
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) particles_updated: u32,
    pub(super) bursts_updated: u32,
    // Writes since the previous tick, including a trigger's first frame
    pub(super) cells_written: u32,
    pub(super) active_particles: u32,
    pub(super) active_bursts: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_updated(&self) -> u32 { self.particles_updated }
    #[wasm_bindgen(getter)]
    pub fn bursts_updated(&self) -> u32 { self.bursts_updated }
    #[wasm_bindgen(getter)]
    pub fn cells_written(&self) -> u32 { self.cells_written }
    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> u32 { self.active_particles }
    #[wasm_bindgen(getter)]
    pub fn active_bursts(&self) -> u32 { self.active_bursts }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
