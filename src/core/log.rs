//! Console logging
//!
//! On wasm32 lines go to the browser console through web-sys.
//! Native builds (unit and integration tests) drop them.

/// Write one line to the host console
#[inline]
pub fn write_line(line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&line.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = line;
    }
}

/// Format and log a line
///
/// Usage:
/// ```rust
/// use pixelburst_engine::console_log;
///
/// let rows = 90;
/// console_log!("grid rebuilt: {} rows", rows);
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::write_line(&format!($($arg)*))
    };
}
