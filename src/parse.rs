//! Parse color strings into [`Rgba`].
//!
//! Accepted forms are the literal `white`, `rgb(R, G, B)` and
//! `rgba(R, G, B, A)` with any amount of whitespace around the parentheses
//! and commas. Channels are integers in [0, 255], alpha is a decimal in
//! [0, 1] and defaults to 1 when omitted.
//!
//! [`parse`] never fails: input that can not be parsed yields a
//! [`Parsed::Fallback`] holding the reason, and reads as opaque black.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::color::{Component, Rgba};

static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*([0-9]+(?:\.[0-9]+)?|\.[0-9]+)\s*)?\)\s*$",
    )
    .expect("Invalid rgba regex")
});

/// Reasons a color string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No input was given.
    #[error("no color given")]
    Missing,
    /// The input is not `white`, `rgb(...)` or `rgba(...)`.
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
    /// A red, green or blue channel is larger than 255.
    #[error("{channel} channel `{value}` is out of range")]
    ChannelOutOfRange {
        /// Name of the channel.
        channel: &'static str,
        /// The channel as written in the input.
        value: String,
    },
    /// The alpha value is larger than 1.
    #[error("alpha `{0}` is out of range")]
    AlphaOutOfRange(String),
}

/// The outcome of parsing a color string.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    /// The input was a valid color.
    Color(Rgba),
    /// The input could not be parsed and [`Rgba::BLACK`] stands in for it.
    Fallback(ParseError),
}

impl Parsed {
    /// The parsed color, or opaque black for a fallback.
    pub fn color(&self) -> Rgba {
        match self {
            Parsed::Color(color) => *color,
            Parsed::Fallback(_) => Rgba::BLACK,
        }
    }

    /// Returns true when the input could not be parsed.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }

    /// The reason for a fallback, if there was one.
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Parsed::Color(_) => None,
            Parsed::Fallback(err) => Some(err),
        }
    }

    /// Convert into a [`Result`], dropping the fallback color.
    pub fn into_result(self) -> Result<Rgba, ParseError> {
        match self {
            Parsed::Color(color) => Ok(color),
            Parsed::Fallback(err) => Err(err),
        }
    }
}

/// Parse a color string, falling back to opaque black when the input is
/// missing or malformed. A warning is logged for every fallback.
pub fn parse(input: Option<&str>) -> Parsed {
    let result = match input {
        Some(input) => try_parse(input),
        None => Err(ParseError::Missing),
    };

    match result {
        Ok(color) => Parsed::Color(color),
        Err(err) => {
            tracing::warn!(input = ?input, error = %err, "could not parse color, using black");
            Parsed::Fallback(err)
        }
    }
}

/// Parse a color string, always returning a color. Opaque black is returned
/// when the input is missing or malformed.
pub fn parse_color(input: Option<&str>) -> Rgba {
    parse(input).color()
}

/// Parse a color string, returning an error when the input is malformed.
pub fn try_parse(input: &str) -> Result<Rgba, ParseError> {
    if input.trim() == "white" {
        return Ok(Rgba::WHITE);
    }

    let captures = RGBA_REGEX
        .captures(input)
        .ok_or_else(|| ParseError::Unrecognized(input.to_owned()))?;

    let channel = |index: usize, name: &'static str| -> Result<u8, ParseError> {
        let value = &captures[index];
        value.parse().map_err(|_| ParseError::ChannelOutOfRange {
            channel: name,
            value: value.to_owned(),
        })
    };

    let red = channel(1, "red")?;
    let green = channel(2, "green")?;
    let blue = channel(3, "blue")?;

    let alpha = match captures.get(4) {
        Some(value) => {
            let value = value.as_str();
            match value.parse::<Component>() {
                Ok(alpha) if alpha <= 1.0 => alpha,
                _ => return Err(ParseError::AlphaOutOfRange(value.to_owned())),
            }
        }
        None => 1.0,
    };

    Ok(Rgba::new(red, green, blue, alpha))
}

impl FromStr for Rgba {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s)
    }
}
