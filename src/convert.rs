//! Conversions between [`Rgba`] and [`Hsla`].
//!
//! Alpha is passed through untouched in both directions. Converting an 8-bit
//! color to HSL and back reproduces the original channels exactly.
//!
//! ```rust
//! use huestep::{hsl_to_rgb, rgb_to_hsl, Rgba};
//! let hsl = rgb_to_hsl(255, 0, 0, 0.5);
//! assert_eq!(hsl.components(), (0.0, 100.0, 50.0));
//! assert_eq!(hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness, hsl.alpha), Rgba::new(255, 0, 0, 0.5));
//! ```

use crate::{
    color::{Component, Hsla, Rgba},
    math::{clamp_percent, from_channel, normalize_hue, to_channel},
};

impl Rgba {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsla {
        rgb_to_hsl(self.red, self.green, self.blue, self.alpha)
    }
}

impl Hsla {
    /// Convert this color from the HSL notation to 8-bit RGB channels.
    pub fn to_rgba(&self) -> Rgba {
        hsl_to_rgb(self.hue, self.saturation, self.lightness, self.alpha)
    }
}

/// Convert 8-bit RGB channels to the HSL notation. Saturation and lightness
/// are returned in percent.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8, alpha: Component) -> Hsla {
    let (hue, saturation, lightness) =
        util::rgb_to_hsl(from_channel(red), from_channel(green), from_channel(blue));

    Hsla::new(hue, saturation * 100.0, lightness * 100.0, alpha)
}

/// Convert a color in the HSL notation to 8-bit RGB channels. The hue is
/// wrapped and saturation/lightness are clamped before converting.
///
/// Channels are rounded to the nearest integer with halves rounded away from
/// zero.
pub fn hsl_to_rgb(
    hue: Component,
    saturation: Component,
    lightness: Component,
    alpha: Component,
) -> Rgba {
    let (red, green, blue) = util::hsl_to_rgb(
        normalize_hue(hue),
        clamp_percent(saturation) / 100.0,
        clamp_percent(lightness) / 100.0,
    );

    Rgba::new(to_channel(red), to_channel(green), to_channel(blue), alpha)
}

/// Convert a color in the HSL notation straight to its canonical
/// `rgba(R, G, B, A)` string.
pub fn hsl_to_css(
    hue: Component,
    saturation: Component,
    lightness: Component,
    alpha: Component,
) -> String {
    hsl_to_rgb(hue, saturation, lightness, alpha).to_string()
}

mod util {
    use crate::color::Component;

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors have a hue of 0.
    fn rgb_to_hue_with_min_max(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (crate::math::normalize_hue(hue), min, max)
    }

    /// Convert from RGB in [0, 1] to hue in degrees and saturation and
    /// lightness in [0, 1].
    pub fn rgb_to_hsl(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component) {
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return (0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        (hue, saturation, lightness)
    }

    /// Convert from hue in [0, 360) and saturation and lightness in [0, 1] to
    /// RGB in [0, 1].
    pub fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> (Component, Component, Component) {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        (red + m, green + m, blue + m)
    }
}
