//! Random sources
//!
//! Spark speed and curvature, spark angles and burst jitter all draw from a
//! `RandomSource`. The stage owns one as a trait object so hosts and tests can
//! swap in a seeded or scripted source.

/// Uniform random numbers for the animation engines
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in [min, max)
    #[inline]
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

// Zero is a fixed point of xorshift, substitute the golden-ratio constant
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// Xorshift32 random number generator
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Seed from the host (Math.random on wasm, the clock natively)
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(12345)
    }
}
