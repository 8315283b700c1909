//! The Nord palette — default contents of every slot.
//!
//! Polar Night for the dark slots, Snow Storm for the light ones, Frost and
//! Aurora for the accents. `color15` uses Frost `#8FBCBB` where `color7`
//! uses `#88C0D0`, so bright cyan is distinguishable from normal cyan.

use n_color::ColorValue;

use crate::slot::ColorName;

/// Nord's 8-bit RGB for `slot`.
#[must_use]
pub const fn nord_rgb(slot: ColorName) -> (u8, u8, u8) {
    match slot {
        ColorName::Background => (0x2E, 0x34, 0x40),
        ColorName::Foreground => (0xD8, 0xDE, 0xE9),
        ColorName::Color1 => (0x3B, 0x42, 0x52),
        ColorName::Color2 | ColorName::Color10 => (0xBF, 0x61, 0x6A),
        ColorName::Color3 | ColorName::Color11 => (0xA3, 0xBE, 0x8C),
        ColorName::Color4 | ColorName::Color12 => (0xEB, 0xCB, 0x8B),
        ColorName::Color5 | ColorName::Color13 => (0x81, 0xA1, 0xC1),
        ColorName::Color6 | ColorName::Color14 => (0xB4, 0x8E, 0xAD),
        ColorName::Color7 => (0x88, 0xC0, 0xD0),
        ColorName::Color8 => (0xE5, 0xE9, 0xF0),
        ColorName::Color9 => (0x4C, 0x56, 0x6A),
        ColorName::Color15 => (0x8F, 0xBC, 0xBB),
        ColorName::Color16 => (0xEC, 0xEF, 0xF4),
    }
}

/// Nord's color for `slot`.
#[must_use]
pub fn nord(slot: ColorName) -> ColorValue {
    let (r, g, b) = nord_rgb(slot);
    ColorValue::from_rgb8(r, g, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
