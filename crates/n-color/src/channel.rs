// SPDX-License-Identifier: MIT
//
// Channel math — scalar conversions between widget space and color space.
//
// A widget has an extent `size` (pixels or abstract units). Pointer
// coordinates live in [0, size]. Color channels live in one of two
// domains:
//
//   percent  [0, 1]    saturation, brightness
//   degree   [0, 360]  hue
//
// Degree conversion clamps its input to the widget first, so a pointer
// dragged past the edge pins the hue to 0° or 360°. Percent conversion
// does NOT clamp: out-of-widget input yields values outside [0, 1] and the
// caller decides what that means.

/// Constrain `x` to `[lo, hi]` as `min(max(x, lo), hi)`.
///
/// Unlike [`f64::clamp`] this never panics when `lo > hi`; the upper bound
/// wins, matching the composition order.
#[inline]
#[must_use]
pub const fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Raw coordinate → percent, `raw / max`. Not clamped.
#[inline]
#[must_use]
pub fn as_percent(raw: f64, max: f64) -> f64 {
    raw / max
}

/// Percent → raw coordinate, `value * max`.
#[inline]
#[must_use]
pub fn from_percent(value: f64, max: f64) -> f64 {
    value * max
}

/// Raw coordinate → hue degrees.
///
/// The coordinate is clamped to `[0, size]` before scaling, so the result
/// always lies in `[0, 360]`. The upper bound is inclusive: a pointer at
/// the far edge yields exactly 360°, not a wrapped 0°.
#[inline]
#[must_use]
pub fn as_degree(raw: f64, size: f64) -> f64 {
    clamp(raw, 0.0, size) * 360.0 / size
}

/// Hue degrees → raw coordinate, `value / 360 * size`.
#[inline]
#[must_use]
pub fn from_degree(value: f64, size: f64) -> f64 {
    value / 360.0 * size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_bounds() {
        assert!(approx_eq(clamp(-5.0, 0.0, 10.0), 0.0));
        assert!(approx_eq(clamp(15.0, 0.0, 10.0), 10.0));
        assert!(approx_eq(clamp(7.5, 0.0, 10.0), 7.5));
    }

    #[test]
    fn clamp_inverted_bounds_prefers_hi() {
        assert!(approx_eq(clamp(5.0, 10.0, 0.0), 0.0));
    }

    #[test]
    fn percent_is_linear() {
        assert!(approx_eq(as_percent(50.0, 200.0), 0.25));
        assert!(approx_eq(from_percent(0.25, 200.0), 50.0));
    }

    #[test]
    fn percent_is_not_clamped() {
        // Out-of-widget input passes straight through.
        assert!(approx_eq(as_percent(300.0, 200.0), 1.5));
        assert!(approx_eq(as_percent(-20.0, 200.0), -0.1));
    }

    #[test]
    fn degree_scales_to_full_circle() {
        assert!(approx_eq(as_degree(0.0, 150.0), 0.0));
        assert!(approx_eq(as_degree(75.0, 150.0), 180.0));
        assert!(approx_eq(as_degree(150.0, 150.0), 360.0));
    }

    #[test]
    fn degree_clamps_input_not_output() {
        assert!(approx_eq(as_degree(9999.0, 360.0), 360.0));
        assert!(approx_eq(as_degree(-40.0, 360.0), 0.0));
    }

    #[test]
    fn degree_roundtrip() {
        for raw in [0.0, 1.0, 33.3, 99.9, 128.0, 255.0] {
            let back = from_degree(as_degree(raw, 255.0), 255.0);
            assert!((back - raw).abs() < 1e-9, "{raw} -> {back}");
        }
    }
}
