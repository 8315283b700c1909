//! Mode mapping — widget coordinates ⇄ [`ColorValue`].
//!
//! Both directions are pure functions of `(input, mode, size)`. The forward
//! direction is what a drag produces; the inverse positions the picker's
//! handles for a color that came from somewhere else (a palette slot, a
//! typed hex string).
//!
//! HSV modes scale through [`channel`]: percent axes map `[0, size]` to
//! `[0, 100]` unclamped, the hue axis maps `[0, size]` to `[0°, 360°]` after
//! clamping. RGB modes use coordinates as byte values directly and ignore
//! `size`; callers size RGB widgets to 255.

use n_color::ColorValue;
use n_color::channel::{as_degree, as_percent, from_degree, from_percent};

use crate::mode::{Coordinates, Mode};

/// Interpret a pointer position under `mode` as a color.
///
/// `size` is the widget extent; check untrusted sizes with
/// `n_chroma::config::validate_size` first.
///
/// # Panics
///
/// In debug builds, if `size` is not positive and finite.
#[must_use]
pub fn coordinates_to_color(coords: Coordinates, mode: Mode, size: f64) -> ColorValue {
    debug_assert!(size > 0.0 && size.is_finite(), "widget size must be positive, got {size}");
    let Coordinates { x, y, z } = coords;
    match mode {
        Mode::Hue => hsv(as_degree(z, size), as_percent(x, size), as_percent(y, size)),
        Mode::Saturation => hsv(as_degree(x, size), as_percent(z, size), as_percent(y, size)),
        Mode::Brightness => hsv(as_degree(x, size), as_percent(y, size), as_percent(z, size)),
        Mode::Red => ColorValue::rgb(z, y, x),
        Mode::Green => ColorValue::rgb(y, z, x),
        Mode::Blue => ColorValue::rgb(x, y, z),
    }
}

/// Place `color` in widget space under `mode`. Inverse of
/// [`coordinates_to_color`].
///
/// # Panics
///
/// In debug builds, if `size` is not positive and finite.
#[must_use]
pub fn color_to_coordinates(color: &ColorValue, mode: Mode, size: f64) -> Coordinates {
    debug_assert!(size > 0.0 && size.is_finite(), "widget size must be positive, got {size}");
    let h = from_degree(color.h(), size);
    let s = from_percent(color.s() / 100.0, size);
    let v = from_percent(color.v() / 100.0, size);
    match mode {
        Mode::Hue => Coordinates::new(s, v, h),
        Mode::Saturation => Coordinates::new(h, v, s),
        Mode::Brightness => Coordinates::new(h, s, v),
        Mode::Red => Coordinates::new(color.b(), color.g(), color.r()),
        Mode::Green => Coordinates::new(color.b(), color.r(), color.g()),
        Mode::Blue => Coordinates::new(color.r(), color.g(), color.b()),
    }
}

/// `h` in degrees, `s`/`v` as unit fractions.
#[inline]
fn hsv(h: f64, s: f64, v: f64) -> ColorValue {
    ColorValue::hsv(h, s * 100.0, v * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
