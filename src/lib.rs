//! Pixelburst Engine - pixel-grid explosion animations in WASM
//!
//! Architecture:
//! - core/        - logging and random sources
//! - spatial/     - the cell color grid and its geometry
//! - domain/      - palette, config, animation selection
//! - systems/     - illumination, spark and burst engines, frame scheduling
//! - simulation/  - the stage that wires them together and its JS facade

// Macros first so every later module sees them
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

use domain::selection::{page_filename, PageHints};

// Thread pool initialization for the parallel grid fills
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Pixelburst engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Pick the animation family for a page from its path and title
#[wasm_bindgen]
pub fn select_animation(pathname: &str, title: &str) -> AnimationMode {
    let hints = PageHints::detect(page_filename(pathname), title);
    console_log!("Loading: {}", hints.label());
    hints.mode()
}

// Re-export main types
pub use domain::config::StageConfig;
pub use domain::selection::AnimationMode;
pub use simulation::{PerfStats, Stage, StageCore};
