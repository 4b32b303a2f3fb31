//! huestep derives shades and tints from a base color by stepping its
//! lightness in the HSL notation, keeping hue, saturation and alpha.
//!
//! ```rust
//! use huestep::{generate_shades, generate_tints};
//!
//! assert_eq!(generate_shades("rgba(255, 0, 0, 0.5)", 1), ["rgba(204, 0, 0, 0.5)"]);
//! assert_eq!(generate_tints("rgb(255, 0, 0)", 1), ["rgba(255, 51, 51, 1)"]);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod format;
mod math;
mod palette;
mod parse;


pub use color::{Component, Hsla, Rgba};
pub use convert::{hsl_to_css, hsl_to_rgb, rgb_to_hsl};
pub use format::format_rgba;
pub use palette::{
    generate_palette, generate_shades, generate_tints, lightness_step, palette, shades, tints,
    Include, PaletteOptions, DEFAULT_STEP,
};
pub use parse::{parse, parse_color, try_parse, ParseError, Parsed};
