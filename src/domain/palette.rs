//! Cell colors
//!
//! ABGR packed (little-endian bytes [RR,GG,BB,AA]) so the host can copy the
//! color buffer straight into ImageData. Every tone the engines use is a gray.

pub type Color = u32;

/// Opaque color from RGB channels
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Opaque gray with all channels at `level`
#[inline]
pub const fn gray(level: u8) -> Color {
    rgb(level, level, level)
}

/// Unlit cell (#191919)
pub const BACKGROUND: Color = gray(0x19);
/// Lit cell (#eeeeee)
pub const BRIGHT: Color = gray(0xee);
/// Moore neighbors of a lit cell (#3a3a3a)
pub const GLOW: Color = gray(0x3a);

// Lower bounds of the fade bins, brightest first. Anything above zero but
// below the last threshold lands in the final bin.
const FADE_THRESHOLDS: [f64; 9] = [0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1];

const BRIGHT_FADE: [Color; 10] = [
    gray(0xee),
    gray(0xdd),
    gray(0xcc),
    gray(0xbb),
    gray(0xaa),
    gray(0x99),
    gray(0x88),
    gray(0x77),
    gray(0x55),
    gray(0x33),
];

// Always darker than the bright tone of the same bin
const GLOW_FADE: [Color; 10] = [
    gray(0x3a),
    gray(0x35),
    gray(0x30),
    gray(0x2b),
    gray(0x26),
    gray(0x21),
    gray(0x1e),
    gray(0x1b),
    gray(0x1a),
    gray(0x19),
];

#[inline]
fn fade_bin(intensity: f64) -> Option<usize> {
    if !(intensity > 0.0) {
        return None;
    }
    let bin = FADE_THRESHOLDS
        .iter()
        .position(|&threshold| intensity >= threshold)
        .unwrap_or(FADE_THRESHOLDS.len());
    Some(bin)
}

/// Stepped bright tone for a fade intensity in [0, 1]
pub fn faded_bright(intensity: f64) -> Color {
    fade_bin(intensity).map_or(BACKGROUND, |bin| BRIGHT_FADE[bin])
}

/// Stepped glow tone for a fade intensity in [0, 1]
pub fn faded_glow(intensity: f64) -> Color {
    fade_bin(intensity).map_or(BACKGROUND, |bin| GLOW_FADE[bin])
}

/// (r, g, b) channels of a packed color
#[inline]
pub fn channels(color: Color) -> (u8, u8, u8) {
    (
        (color & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
    )
}

/// CSS hex string (`#rrggbb`) for DOM-backed hosts
pub fn css_hex(color: Color) -> String {
    let (r, g, b) = channels(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
