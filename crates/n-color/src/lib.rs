// SPDX-License-Identifier: MIT
//
// n-color — Color values for n-chroma.
//
// A picker widget speaks in pixels; a palette speaks in colors. This crate
// holds the pieces both sides agree on: the scalar helpers that turn a
// pointer position into a percent or an angle, the `ColorValue` that
// carries HSV and RGB channels side by side, and the text formats a user
// may type into a color field.
//
//   raw coordinate ──channel──▶ percent / degree ──color──▶ ColorValue
//                                                           ▲
//   "#BF616A" / "rgb(191, 97, 106)" ──────parse─────────────┘

// Single-char channel names (h, s, v, r, g, b, a) are the color-science norm.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod channel;
pub mod color;
pub mod parse;

pub use color::ColorValue;
pub use parse::{ParseColorError, is_valid_color};
