//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate between `from` and `to` using `t` as the progress
/// between them. `t == 1` yields `to` exactly.
pub fn lerp<T: Float>(from: T, to: T, t: T) -> T {
    from * (T::one() - t) + to * t
}

/// Wrap a hue in degrees into the range [0, 360). NaN is treated as 0.
pub fn normalize_hue(hue: Component) -> Component {
    if hue.is_nan() {
        return 0.0;
    }

    let hue = hue % 360.0;
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    // Adding 360 to a tiny negative value can round up to 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into [0, 100]. NaN is treated as 0.
pub fn clamp_percent(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        num_traits::clamp(value, 0.0, 100.0)
    }
}

/// Quantize a value in [0, 1] to an 8-bit channel, rounding half away from
/// zero. Values outside the range saturate.
pub fn to_channel(value: Component) -> u8 {
    let scaled = num_traits::clamp((value * 255.0).round(), 0.0, 255.0);
    num_traits::cast::<Component, u8>(scaled).unwrap_or(0)
}

/// Map an 8-bit channel to [0, 1].
pub fn from_channel(channel: u8) -> Component {
    Component::from(channel) / 255.0
}
