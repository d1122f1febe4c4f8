//! Browser smoke test, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use pixelburst_engine::{init, select_animation, AnimationMode, Stage};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn stage_runs_in_the_browser() {
    init();
    let mut stage = Stage::with_seed(800, 600, 42);
    assert!(stage.trigger_explosion());
    assert!(stage.tick());
    assert!(stage.collect_dirty_cells() > 0);
    assert!(!stage.colors_ptr().is_null());
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    let mut stage = Stage::new(800, 600);
    assert!(stage.load_config("{\"pixelSize\": 0}".to_string()).is_err());
    assert_eq!(select_animation("/index2.html", ""), AnimationMode::InPlace);
}
