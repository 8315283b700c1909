//! Picker modes and widget coordinates.
//!
//! A picker widget is a square field plus a slider: three axes, one color.
//! The active [`Mode`] decides which color channel each axis drives:
//!
//! | Mode         | x (field)  | y (field)  | z (slider) |
//! |--------------|------------|------------|------------|
//! | `Hue`        | saturation | brightness | hue        |
//! | `Saturation` | hue        | brightness | saturation |
//! | `Brightness` | hue        | saturation | brightness |
//! | `Red`        | blue       | green      | red        |
//! | `Green`      | blue       | red        | green      |
//! | `Blue`       | red        | green      | blue       |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which channel the picker's slider drives.
///
/// Closed set: every `match` on a `Mode` is exhaustive, so a new mode can't
/// be added without the compiler pointing at each mapping that needs it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Hue,
    Saturation,
    Brightness,
    Red,
    Green,
    Blue,
}

/// The color model a mode drives directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Hue, saturation and brightness come from the coordinates.
    Hsv,
    /// Red, green and blue come from the coordinates.
    Rgb,
}

impl Mode {
    /// Every mode, in index order.
    pub const ALL: [Self; 6] = [
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    /// Stable numeric index (0–5), as used by widget front ends.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Hue => 0,
            Self::Saturation => 1,
            Self::Brightness => 2,
            Self::Red => 3,
            Self::Green => 4,
            Self::Blue => 5,
        }
    }

    /// Lowercase name, the same string serde uses.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// The color model whose channels this mode reads from coordinates.
    #[must_use]
    pub const fn model(self) -> Model {
        match self {
            Self::Hue | Self::Saturation | Self::Brightness => Model::Hsv,
            Self::Red | Self::Green | Self::Blue => Model::Rgb,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode index or name from outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown picker mode index {0} (expected 0-5)")]
    UnknownIndex(u8),
    #[error("unknown picker mode {0:?}")]
    UnknownName(String),
}

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ModeError::UnknownIndex(index))
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ModeError::UnknownName(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A pointer position in widget space.
///
/// `x`/`y` address the 2D field, `z` the slider. Each is expected in
/// `[0, size]` for the widget's size; values outside are tolerated and
/// handled per channel by the mode mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
