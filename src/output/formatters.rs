//! Formatting utilities for terminal output

/// Saturation used for list-position colors
const LIST_SATURATION: f64 = 0.7;

/// Brightness used for list-position colors
const LIST_BRIGHTNESS: f64 = 0.8;

/// Convert an HSV color to RGB bytes
///
/// Hue is in `[0, 1)` (wrapping), saturation and value in `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(1.0) * 6.0;
    let sector = hue.floor() as u32 % 6;
    let fraction = hue - hue.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Color for an item by its position in a list
///
/// Maps relative list position to hue, so the used-word list shades through
/// the spectrum from top to bottom.
#[must_use]
pub fn list_position_color(index: usize, total: usize) -> (u8, u8, u8) {
    let hue = if total > 1 {
        index as f64 / total as f64
    } else {
        0.0
    };
    hsv_to_rgb(hue, LIST_SATURATION, LIST_BRIGHTNESS)
}

/// Length badge shown next to an accepted word
#[must_use]
pub fn length_badge(len: usize) -> String {
    format!("({len})")
}

/// The score line shown under the used-word list
#[must_use]
pub fn score_line(root: &str, score: usize) -> String {
    format!("Score for root word \"{root}\": {score}")
}
