// SPDX-License-Identifier: MIT
//
// ColorValue — one color, two models.
//
// A picker shows HSV and RGB side by side, and either can be the one the
// user is dragging. ColorValue is built from exactly one authoritative
// model; the other is derived in the constructor, so the two are never out
// of sync. There are no setters: every edit produces a new value.
//
// Channel domains:
//
//   h  degrees  [0, 360]   (360 is kept as-is, not wrapped)
//   s  percent  [0, 100]
//   v  percent  [0, 100]
//   r  byte     [0, 255]
//   g  byte     [0, 255]
//   b  byte     [0, 255]
//   a  unit     [0, 1]
//
// RGB channels are stored as f64 so that a fractional pointer position in
// an RGB mode survives the trip back to coordinates. Colors derived from
// HSV are rounded to whole bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::clamp;
use crate::parse::{ParseColorError, parse_color};

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// A color carrying both HSV and RGB channels plus alpha.
///
/// # Examples
///
/// ```
/// use n_color::ColorValue;
///
/// let red = ColorValue::hsv(0.0, 100.0, 100.0);
/// assert_eq!(red.rgb8(), (255, 0, 0));
///
/// let frost = ColorValue::rgb(136.0, 192.0, 208.0);
/// assert_eq!(frost.to_hex(), "#88c0d0");
///
/// let aurora: ColorValue = "#BF616A".parse().unwrap();
/// assert_eq!(aurora.rgb8(), (191, 97, 106));
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Snapshot", into = "Snapshot")]
pub struct ColorValue {
    h: f64,
    s: f64,
    v: f64,
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl ColorValue {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Build from HSV; RGB is derived and rounded to whole bytes.
    ///
    /// - `h`: hue in degrees (stored unchanged; wrapped only for derivation)
    /// - `s`: saturation in percent
    /// - `v`: brightness in percent
    ///
    /// `s` and `v` are stored as given even when outside `[0, 100]`; the
    /// RGB derivation bounds them to that range.
    #[must_use]
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s / 100.0, v / 100.0);
        Self {
            h,
            s,
            v,
            r: (r * 255.0).round(),
            g: (g * 255.0).round(),
            b: (b * 255.0).round(),
            a: 1.0,
        }
    }

    /// Build from RGB byte-range channels; HSV is derived.
    ///
    /// Channels are stored unchanged so the value can be mapped back to
    /// the coordinates it came from. Derivation bounds them to `[0, 255]`.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        let (h, s, v) = rgb_to_hsv(
            clamp(r, 0.0, 255.0) / 255.0,
            clamp(g, 0.0, 255.0) / 255.0,
            clamp(b, 0.0, 255.0) / 255.0,
        );
        Self {
            h,
            s: s * 100.0,
            v: v * 100.0,
            r,
            g,
            b,
            a: 1.0,
        }
    }

    /// Build from 8-bit RGB.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Return a copy with the given alpha, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp(a, 0.0, 1.0),
            ..self
        }
    }

    /// Pure black, fully opaque.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Hue in degrees.
    #[inline]
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.h
    }

    /// Saturation in percent.
    #[inline]
    #[must_use]
    pub const fn s(&self) -> f64 {
        self.s
    }

    /// Brightness (value) in percent.
    #[inline]
    #[must_use]
    pub const fn v(&self) -> f64 {
        self.v
    }

    /// Red in byte range.
    #[inline]
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Green in byte range.
    #[inline]
    #[must_use]
    pub const fn g(&self) -> f64 {
        self.g
    }

    /// Blue in byte range.
    #[inline]
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Alpha in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Whether alpha is exactly 1.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// RGB rounded and bounded to bytes.
    #[must_use]
    pub fn rgb8(&self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// `#rrggbb`, lowercase. Alpha is not encoded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.rgb8();
        if self.is_opaque() {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a)
        }
    }
}

impl fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColorValue {{ hsv: ({:.2}, {:.2}, {:.2}), rgb: ({:.1}, {:.1}, {:.1}), a: {:.2} }}",
            self.h, self.s, self.v, self.r, self.g, self.b, self.a
        )
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        // Two values are the same color when they render the same bytes.
        self.rgb8() == other.rgb8() && (self.a - other.a).abs() < 1e-6
    }
}

impl Default for ColorValue {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for ColorValue {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

// ─── Serialized form ─────────────────────────────────────────────────────────

// RGB is authoritative on the wire: HSV is rebuilt on load so a hand-edited
// file cannot smuggle in mismatched channels.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

const fn opaque() -> f64 {
    1.0
}

impl From<Snapshot> for ColorValue {
    fn from(snap: Snapshot) -> Self {
        Self::rgb(snap.r, snap.g, snap.b).with_alpha(snap.a)
    }
}

impl From<ColorValue> for Snapshot {
    fn from(color: ColorValue) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

// ─── Model Conversion Functions ──────────────────────────────────────────────

/// HSV → RGB. `h` in degrees, `s`/`v`/output in `[0, 1]`.
///
/// `s` and `v` are bounded to `[0, 1]` and `h` is taken modulo 360.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = clamp(s, 0.0, 1.0);
    let v = clamp(v, 0.0, 1.0);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    // `sector` is in 0..6 after rem_euclid; 6 only via rounding, which
    // lands on the red arm like 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = sector as u8 % 6;
    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Inputs and `s`/`v` in `[0, 1]`, `h` in degrees `[0, 360)`.
///
/// Achromatic colors (all channels equal) report hue 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, v)
}

/// Byte-range float → u8 with rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(x: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    clamp(x.round(), 0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── HSV → RGB ────────────────────────────────────────────────────────

    #[test]
    fn primaries_from_hsv() {
        assert_eq!(ColorValue::hsv(0.0, 100.0, 100.0).rgb8(), (255, 0, 0));
        assert_eq!(ColorValue::hsv(120.0, 100.0, 100.0).rgb8(), (0, 255, 0));
        assert_eq!(ColorValue::hsv(240.0, 100.0, 100.0).rgb8(), (0, 0, 255));
        assert_eq!(ColorValue::hsv(60.0, 100.0, 100.0).rgb8(), (255, 255, 0));
        assert_eq!(ColorValue::hsv(180.0, 100.0, 100.0).rgb8(), (0, 255, 255));
        assert_eq!(ColorValue::hsv(300.0, 100.0, 100.0).rgb8(), (255, 0, 255));
    }

    #[test]
    fn hue_360_is_red() {
        let c = ColorValue::hsv(360.0, 100.0, 100.0);
        assert_eq!(c.rgb8(), (255, 0, 0));
        // The stored hue is not wrapped.
        assert!(approx_eq(c.h(), 360.0, 1e-12));
    }

    #[test]
    fn hsv_rgb_is_integral() {
        let c = ColorValue::hsv(217.3, 41.9, 77.7);
        for ch in [c.r(), c.g(), c.b()] {
            assert!(approx_eq(ch, ch.round(), 1e-12), "not integral: {ch}");
        }
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(ColorValue::hsv(200.0, 80.0, 0.0).rgb8(), (0, 0, 0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let (r, g, b) = ColorValue::hsv(200.0, 0.0, 50.0).rgb8();
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn out_of_range_percent_is_stored_but_bounded_for_rgb() {
        let c = ColorValue::hsv(0.0, 150.0, 100.0);
        assert!(approx_eq(c.s(), 150.0, 1e-12));
        assert_eq!(c.rgb8(), (255, 0, 0));
    }

    // ── RGB → HSV ────────────────────────────────────────────────────────

    #[test]
    fn nord_red_decomposes() {
        let c = ColorValue::from_rgb8(191, 97, 106);
        assert!(approx_eq(c.h(), 354.255, 0.01), "h = {}", c.h());
        assert!(approx_eq(c.s(), 49.215, 0.01), "s = {}", c.s());
        assert!(approx_eq(c.v(), 74.902, 0.01), "v = {}", c.v());
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let c = ColorValue::from_rgb8(128, 128, 128);
        assert!(approx_eq(c.h(), 0.0, 1e-12));
        assert!(approx_eq(c.s(), 0.0, 1e-12));
    }

    #[test]
    fn rgb_channels_pass_through_unrounded() {
        let c = ColorValue::rgb(10.25, 20.5, 30.75);
        assert!(approx_eq(c.r(), 10.25, 1e-12));
        assert!(approx_eq(c.g(), 20.5, 1e-12));
        assert!(approx_eq(c.b(), 30.75, 1e-12));
    }

    #[test]
    fn hsv_rgb_models_agree() {
        for (r, g, b) in [(191, 97, 106), (46, 52, 64), (163, 190, 140), (235, 203, 139)] {
            let from_rgb = ColorValue::from_rgb8(r, g, b);
            let from_hsv = ColorValue::hsv(from_rgb.h(), from_rgb.s(), from_rgb.v());
            assert_eq!(from_hsv.rgb8(), (r, g, b));
        }
    }

    // ── Output ───────────────────────────────────────────────────────────

    #[test]
    fn hex_and_rgb_strings() {
        let c = ColorValue::from_rgb8(46, 52, 64);
        assert_eq!(c.to_hex(), "#2e3440");
        assert_eq!(c.to_rgb_string(), "rgb(46, 52, 64)");
        assert_eq!(c.with_alpha(0.5).to_rgb_string(), "rgba(46, 52, 64, 0.5)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert!(approx_eq(ColorValue::BLACK.with_alpha(3.0).a(), 1.0, 1e-12));
        assert!(approx_eq(ColorValue::BLACK.with_alpha(-1.0).a(), 0.0, 1e-12));
    }

    #[test]
    fn serde_rebuilds_hsv_from_rgb() {
        let json = r#"{"r":191.0,"g":97.0,"b":106.0}"#;
        let c: ColorValue = serde_json::from_str(json).unwrap();
        assert_eq!(c.to_hex(), "#bf616a");
        assert!(approx_eq(c.a(), 1.0, 1e-12));
        assert!(approx_eq(c.v(), 74.902, 0.01));
    }
}
