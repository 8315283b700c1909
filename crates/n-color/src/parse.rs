// SPDX-License-Identifier: MIT
//
// Color string parsing — the formats a user may type into a color field.
//
// Two forms are accepted, nothing else:
//
//   #RRGGBB / RRGGBB           six hex digits, `#` optional, any case
//   rgb(R,G,B) / rgb(R, G, B)  1–3 decimal digits each, whitespace allowed
//                              only after the commas
//
// Shorthand hex, alpha suffixes, hsl() and named colors are rejected.
// rgb() components above 255 match the format and are clamped to 255.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::ColorValue;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([A-Fa-f0-9]{2})([A-Fa-f0-9]{2})([A-Fa-f0-9]{2})$")
        .unwrap_or_else(|e| unreachable!("hex pattern is static: {e}"))
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(([0-9]{1,3}),\s*([0-9]{1,3}),\s*([0-9]{1,3})\)$")
        .unwrap_or_else(|e| unreachable!("rgb pattern is static: {e}"))
});

/// A color string that matches neither accepted format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid color format: {0:?} (expected #RRGGBB or rgb(r, g, b))")]
    InvalidColorFormat(String),
}

/// Returns `true` if `s` is in one of the accepted color formats.
///
/// This is the acceptance predicate for text input: anything it rejects,
/// [`parse_color`] rejects too.
#[must_use]
pub fn is_valid_color(s: &str) -> bool {
    HEX_RE.is_match(s) || RGB_RE.is_match(s)
}

/// Parse `#RRGGBB`, `RRGGBB` or `rgb(r, g, b)` into an opaque [`ColorValue`].
///
/// # Errors
///
/// Returns [`ParseColorError::InvalidColorFormat`] if the string is in
/// neither format.
pub fn parse_color(s: &str) -> Result<ColorValue, ParseColorError> {
    if let Some(caps) = HEX_RE.captures(s) {
        let r = hex_byte(&caps[1]);
        let g = hex_byte(&caps[2]);
        let b = hex_byte(&caps[3]);
        return Ok(ColorValue::from_rgb8(r, g, b));
    }

    if let Some(caps) = RGB_RE.captures(s) {
        let r = decimal_byte(&caps[1]);
        let g = decimal_byte(&caps[2]);
        let b = decimal_byte(&caps[3]);
        return Ok(ColorValue::from_rgb8(r, g, b));
    }

    Err(ParseColorError::InvalidColorFormat(s.to_string()))
}

// The regexes only capture digits of the right width, so these conversions
// cannot fail on captured text.

fn hex_byte(digits: &str) -> u8 {
    u8::from_str_radix(digits, 16).unwrap_or(0)
}

fn decimal_byte(digits: &str) -> u8 {
    digits
        .parse::<u16>()
        .map_or(0, |n| u8::try_from(n.min(255)).unwrap_or(u8::MAX))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
