//! Render colors to strings.
//!
//! The canonical form is `rgba(R, G, B, A)`, which is also the form accepted
//! by [`crate::parse_color`]. Alpha is printed with the shortest
//! representation that reads back to the same value, so `1.0` renders as `1`
//! and `0.5` as `0.5`.

use std::fmt;

use crate::color::{Component, Hsla, Rgba};

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Format RGBA components into the canonical `rgba(R, G, B, A)` string.
pub fn format_rgba(red: u8, green: u8, blue: u8, alpha: Component) -> String {
    Rgba::new(red, green, blue, alpha).to_string()
}
