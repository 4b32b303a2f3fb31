//! The two color models used to build palettes: [`Rgba`] with 8-bit channels
//! and [`Hsla`] with hue in degrees and saturation/lightness in percent.

use crate::math::{clamp_percent, normalize_hue, to_channel};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all non-integer components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all non-integer components are stored
/// as.
pub type Component = f64;

huestep_macros::gen_model! {
    /// A color in the sRGB color space with 8-bit channels.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Rgba {
        /// The red channel, 0 to 255.
        red: u8,
        /// The green channel, 0 to 255.
        green: u8,
        /// The blue channel, 0 to 255.
        blue: u8,
    }
}

huestep_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Hsla {
        /// The hue in degrees, [0, 360).
        hue: Component,
        /// The saturation in percent, [0, 100].
        saturation: Component,
        /// The lightness in percent, [0, 100].
        lightness: Component,
    }
}

impl Rgba {
    /// Opaque black, also used when a color string could not be parsed.
    pub const BLACK: Rgba = Rgba {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        red: 255,
        green: 255,
        blue: 255,
        alpha: 1.0,
    };

    /// The alpha component quantized to an 8-bit channel, as stored in 8-bit
    /// RGBA pixel buffers.
    pub fn alpha_channel(&self) -> u8 {
        to_channel(self.alpha)
    }
}

impl Hsla {
    /// Return the color with the hue wrapped into [0, 360) and saturation and
    /// lightness clamped to [0, 100].
    pub fn normalized(self) -> Self {
        Self {
            hue: normalize_hue(self.hue),
            saturation: clamp_percent(self.saturation),
            lightness: clamp_percent(self.lightness),
            alpha: self.alpha,
        }
    }

    /// Return a copy of this color with the lightness replaced. The new value
    /// is clamped to [0, 100].
    pub fn with_lightness(self, lightness: Component) -> Self {
        Self {
            lightness: clamp_percent(lightness),
            ..self
        }
    }
}
