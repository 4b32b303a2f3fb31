//! Generate shades and tints of a base color by stepping its lightness in the
//! HSL notation. Hue, saturation and alpha are kept from the base color.
//!
//! Lightness moves by a fixed step (10 percentage points by default). When
//! the requested count would run past black or white with that step, the
//! step is shrunk so the most extreme variant lands exactly on the boundary
//! and every variant stays distinct.
//!
//! ```rust
//! use huestep::generate_shades;
//! let shades = generate_shades("rgb(255, 0, 0)", 2);
//! assert_eq!(shades, ["rgba(204, 0, 0, 1)", "rgba(153, 0, 0, 1)"]);
//! ```

use bitflags::bitflags;

use crate::{
    color::{Component, Hsla},
    math::lerp,
    parse::parse_color,
};

/// The default lightness step in percentage points.
pub const DEFAULT_STEP: Component = 10.0;

bitflags! {
    /// Selects which groups of colors make up a generated palette.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Include : u8 {
        /// Include the shades, darker than the base color.
        const SHADES = 1 << 0;
        /// Include the base color itself.
        const BASE = 1 << 1;
        /// Include the tints, lighter than the base color.
        const TINTS = 1 << 2;
    }
}

/// Options used when generating shades, tints and palettes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteOptions {
    /// The preferred lightness step in percentage points.
    pub step: Component,
    /// The groups of colors to include in a palette.
    pub include: Include,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            include: Include::all(),
        }
    }
}

/// Direction in which lightness is moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Toward black.
    Darken,
    /// Toward white.
    Lighten,
}

/// Calculate the lightness step for `count` variants when `available`
/// percentage points of lightness remain before reaching black or white.
///
/// Returns 0 when there is no room left or nothing to generate, the evenly
/// spread step when `step` would overshoot, and `step` otherwise.
///
/// A `step` that is not a positive number is replaced by [`DEFAULT_STEP`].
pub fn lightness_step(available: Component, count: usize, step: Component) -> Component {
    if count == 0 || available <= 0.0 {
        return 0.0;
    }

    let step = preferred_step(step);

    let count = count as Component;
    if count * step > available {
        available / count
    } else {
        step
    }
}

fn preferred_step(step: Component) -> Component {
    if step > 0.0 {
        step
    } else {
        DEFAULT_STEP
    }
}

fn variants(
    base: &Hsla,
    count: usize,
    options: &PaletteOptions,
    direction: Direction,
) -> Vec<Hsla> {
    let base = base.normalized();

    let (available, boundary) = match direction {
        Direction::Darken => (base.lightness, 0.0),
        Direction::Lighten => (100.0 - base.lightness, 100.0),
    };
    let step = lightness_step(available, count, options.step);
    let spread = step < preferred_step(options.step);

    tracing::debug!(?direction, count, lightness = base.lightness, step, "stepping lightness");

    (1..=count)
        .map(|i| {
            let lightness = if step == 0.0 {
                base.lightness
            } else if spread {
                // Interpolate so the last variant lands exactly on the boundary.
                lerp(base.lightness, boundary, i as Component / count as Component)
            } else {
                let offset = i as Component * step;
                match direction {
                    Direction::Darken => (base.lightness - offset).max(0.0),
                    Direction::Lighten => (base.lightness + offset).min(100.0),
                }
            };
            base.with_lightness(lightness)
        })
        .collect()
}

/// Generate `count` shades of `base`, ordered from the one closest to the
/// base to the darkest.
pub fn shades(base: &Hsla, count: usize, options: &PaletteOptions) -> Vec<Hsla> {
    variants(base, count, options, Direction::Darken)
}

/// Generate `count` tints of `base`, ordered from the one closest to the base
/// to the lightest.
pub fn tints(base: &Hsla, count: usize, options: &PaletteOptions) -> Vec<Hsla> {
    variants(base, count, options, Direction::Lighten)
}

/// Generate a palette ordered from darkest to lightest: the shades, the base
/// color and then the tints. Groups not selected by `options.include` are
/// left out.
pub fn palette(
    base: &Hsla,
    shade_count: usize,
    tint_count: usize,
    options: &PaletteOptions,
) -> Vec<Hsla> {
    let mut colors = Vec::new();

    if options.include.contains(Include::SHADES) {
        colors.extend(shades(base, shade_count, options).into_iter().rev());
    }
    if options.include.contains(Include::BASE) {
        colors.push(base.normalized());
    }
    if options.include.contains(Include::TINTS) {
        colors.extend(tints(base, tint_count, options));
    }

    colors
}

fn to_strings(colors: Vec<Hsla>) -> Vec<String> {
    colors
        .iter()
        .map(|color| color.to_rgba().to_string())
        .collect()
}

/// Generate `count` shades of the color string `color` as canonical
/// `rgba(R, G, B, A)` strings, closest to the base first.
///
/// A color that can not be parsed is treated as opaque black.
pub fn generate_shades(color: &str, count: usize) -> Vec<String> {
    let base = parse_color(Some(color)).to_hsl();
    to_strings(shades(&base, count, &PaletteOptions::default()))
}

/// Generate `count` tints of the color string `color` as canonical
/// `rgba(R, G, B, A)` strings, closest to the base first.
///
/// A color that can not be parsed is treated as opaque black.
pub fn generate_tints(color: &str, count: usize) -> Vec<String> {
    let base = parse_color(Some(color)).to_hsl();
    to_strings(tints(&base, count, &PaletteOptions::default()))
}

/// Generate a palette for the color string `color` as canonical
/// `rgba(R, G, B, A)` strings, darkest first.
///
/// A color that can not be parsed is treated as opaque black.
pub fn generate_palette(
    color: &str,
    shade_count: usize,
    tint_count: usize,
    options: &PaletteOptions,
) -> Vec<String> {
    let base = parse_color(Some(color)).to_hsl();
    to_strings(palette(&base, shade_count, tint_count, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Rgba, parse::try_parse};
    use proptest::prelude::*;

    fn lightness_of(color: &str) -> Component {
        try_parse(color).unwrap().to_hsl().lightness
    }

    #[test]
    fn step_selection() {
        assert_eq!(lightness_step(50.0, 3, 10.0), 10.0);
        assert_eq!(lightness_step(50.0, 5, 10.0), 10.0);
        assert_eq!(lightness_step(50.0, 10, 10.0), 5.0);
        assert_eq!(lightness_step(0.0, 5, 10.0), 0.0);
        assert_eq!(lightness_step(50.0, 0, 10.0), 0.0);
        assert_eq!(lightness_step(30.0, 4, 5.0), 5.0);
        assert_eq!(lightness_step(50.0, 2, 0.0), 10.0);
        assert_eq!(lightness_step(50.0, 2, -3.0), 10.0);
    }

    #[test]
    fn shade_and_tint_counts() {
        for n in 0..=10 {
            assert_eq!(generate_shades("rgb(10, 120, 200)", n).len(), n);
            assert_eq!(generate_tints("rgb(10, 120, 200)", n).len(), n);
        }
        assert!(generate_shades("rgb(10, 120, 200)", 0).is_empty());
    }

    #[test]
    fn shades_of_black_are_black() {
        let shades = generate_shades("rgba(0,0,0,1)", 5);
        assert_eq!(shades, vec!["rgba(0, 0, 0, 1)"; 5]);
    }

    #[test]
    fn tints_of_white_are_white() {
        let tints = generate_tints("rgba(255,255,255,1)", 3);
        assert_eq!(tints, vec!["rgba(255, 255, 255, 1)"; 3]);
    }

    #[test]
    fn adaptive_stepping_reaches_black_without_duplicates() {
        let base = Hsla::opaque(0.0, 100.0, 50.0);
        let shades = shades(&base, 10, &PaletteOptions::default());
        assert_eq!(shades.len(), 10);
        for (i, shade) in shades.iter().enumerate() {
            assert_component_eq!(shade.lightness, 50.0 - 5.0 * (i + 1) as Component);
        }
        assert_eq!(shades.last().unwrap().lightness, 0.0);

        let strings = generate_shades("rgba(255,0,0,1)", 10);
        let lightness: Vec<_> = strings.iter().map(|s| lightness_of(s)).collect();
        assert!(lightness.windows(2).all(|w| w[0] > w[1]), "{lightness:?}");
        assert_eq!(strings.last().unwrap(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn adaptive_stepping_reaches_white() {
        let base = Hsla::opaque(200.0, 50.0, 70.0);
        let tints = tints(&base, 6, &PaletteOptions::default());
        assert_component_eq!(tints[0].lightness, 75.0);
        assert_eq!(tints.last().unwrap().lightness, 100.0);
    }

    #[test]
    fn default_step_when_range_allows() {
        let shades = generate_shades("rgb(255, 0, 0)", 3);
        assert_eq!(
            shades,
            ["rgba(204, 0, 0, 1)", "rgba(153, 0, 0, 1)", "rgba(102, 0, 0, 1)"]
        );

        let tints = generate_tints("rgb(255, 0, 0)", 2);
        assert_eq!(tints, ["rgba(255, 51, 51, 1)", "rgba(255, 102, 102, 1)"]);
    }

    #[test]
    fn closest_shade_comes_first() {
        let base = lightness_of("rgb(40, 160, 90)");
        let shades = generate_shades("rgb(40, 160, 90)", 4);
        let first = lightness_of(&shades[0]);
        let last = lightness_of(&shades[3]);
        assert!((base - first).abs() < (base - last).abs());
    }

    #[test]
    fn hue_saturation_and_alpha_are_kept() {
        let base = Hsla::new(210.0, 40.0, 60.0, 0.5);
        let options = PaletteOptions::default();
        for variant in shades(&base, 3, &options)
            .into_iter()
            .chain(tints(&base, 3, &options))
        {
            assert_eq!(variant.hue, 210.0);
            assert_eq!(variant.saturation, 40.0);
            assert_eq!(variant.alpha, 0.5);
        }

        let shades = generate_shades("rgba(255, 0, 0, 0.5)", 1);
        assert_eq!(shades, ["rgba(204, 0, 0, 0.5)"]);
    }

    #[test]
    fn custom_step() {
        let options = PaletteOptions {
            step: 20.0,
            ..Default::default()
        };
        let base = Hsla::opaque(0.0, 0.0, 50.0);
        let lightness: Vec<_> = tints(&base, 2, &options)
            .iter()
            .map(|c| c.lightness)
            .collect();
        assert_eq!(lightness, [70.0, 90.0]);
    }

    #[test]
    fn unparseable_colors_are_treated_as_black() {
        assert_eq!(generate_shades("not-a-color", 2), vec!["rgba(0, 0, 0, 1)"; 2]);
        let tints = generate_tints("not-a-color", 10);
        assert_eq!(tints, generate_tints("rgb(0, 0, 0)", 10));
        assert_eq!(tints.last().unwrap(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn palette_is_ordered_darkest_to_lightest() {
        let colors = generate_palette("rgb(255, 0, 0)", 2, 2, &PaletteOptions::default());
        assert_eq!(
            colors,
            [
                "rgba(153, 0, 0, 1)",
                "rgba(204, 0, 0, 1)",
                "rgba(255, 0, 0, 1)",
                "rgba(255, 51, 51, 1)",
                "rgba(255, 102, 102, 1)",
            ]
        );

        let options = PaletteOptions {
            include: Include::SHADES | Include::TINTS,
            ..Default::default()
        };
        let colors = generate_palette("rgb(255, 0, 0)", 2, 1, &options);
        assert_eq!(
            colors,
            [
                "rgba(153, 0, 0, 1)",
                "rgba(204, 0, 0, 1)",
                "rgba(255, 51, 51, 1)",
            ]
        );

        let options = PaletteOptions {
            include: Include::BASE,
            ..Default::default()
        };
        assert_eq!(
            generate_palette("white", 3, 3, &options),
            ["rgba(255, 255, 255, 1)"]
        );
    }

    #[test]
    fn palette_lightness_never_decreases() {
        let base = try_parse("rgb(30, 90, 160)").unwrap().to_hsl();
        let colors = palette(&base, 10, 10, &PaletteOptions::default());
        assert_eq!(colors.len(), 21);
        assert!(colors.windows(2).all(|w| w[0].lightness < w[1].lightness));
        assert_eq!(colors[0].lightness, 0.0);
        assert_eq!(colors[20].lightness, 100.0);
        assert_eq!(colors[10].to_rgba(), Rgba::opaque(30, 90, 160));
    }

    proptest! {
        #[test]
        fn variants_are_monotonic_and_bounded(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            count in 0usize..=10,
        ) {
            let base = Rgba::opaque(r, g, b).to_hsl();
            let options = PaletteOptions::default();

            let shades = shades(&base, count, &options);
            prop_assert_eq!(shades.len(), count);
            prop_assert!(shades.windows(2).all(|w| w[0].lightness >= w[1].lightness));
            prop_assert!(shades.iter().all(|c| (0.0..=base.lightness).contains(&c.lightness)));

            let tints = tints(&base, count, &options);
            prop_assert_eq!(tints.len(), count);
            prop_assert!(tints.windows(2).all(|w| w[0].lightness <= w[1].lightness));
            prop_assert!(tints.iter().all(|c| (base.lightness..=100.0).contains(&c.lightness)));
        }
    }
}
