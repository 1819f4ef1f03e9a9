//! Formatting utilities for terminal output

/// Width of the divider printed after each word
pub const DIVIDER_WIDTH: usize = 10;

/// Divider line printed between attempts
#[must_use]
pub fn divider() -> String {
    "_".repeat(DIVIDER_WIDTH)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
