//! Tick timing on the host clock
//!
//! Both targets read a millisecond clock as `f64`: `Date.now()` in the
//! browser, and natively an `Instant` measured from the first reading.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Wall time of one stage tick
#[derive(Clone, Copy, Debug)]
pub(crate) struct TickTimer {
    started_ms: f64,
}

impl TickTimer {
    pub(crate) fn start() -> Self {
        Self { started_ms: now_ms() }
    }

    /// Milliseconds since `start`, never negative (Date.now can step back)
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}
