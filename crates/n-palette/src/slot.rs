//! Color slot names — the closed set of 18 entries in a terminal palette.
//!
//! `color1`–`color8` are the normal ANSI colors, `color9`–`color16` their
//! bright variants, plus the terminal `background` and `foreground`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PaletteError;

/// A named palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Color1,
    Color2,
    Color3,
    Color4,
    Color5,
    Color6,
    Color7,
    Color8,
    Color9,
    Color10,
    Color11,
    Color12,
    Color13,
    Color14,
    Color15,
    Color16,
    Background,
    Foreground,
}

impl ColorName {
    /// Number of slots.
    pub const COUNT: usize = 18;

    /// Every slot, in storage order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
        Self::Color5,
        Self::Color6,
        Self::Color7,
        Self::Color8,
        Self::Color9,
        Self::Color10,
        Self::Color11,
        Self::Color12,
        Self::Color13,
        Self::Color14,
        Self::Color15,
        Self::Color16,
        Self::Background,
        Self::Foreground,
    ];

    /// Position in [`ColorName::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Color1 => 0,
            Self::Color2 => 1,
            Self::Color3 => 2,
            Self::Color4 => 3,
            Self::Color5 => 4,
            Self::Color6 => 5,
            Self::Color7 => 6,
            Self::Color8 => 7,
            Self::Color9 => 8,
            Self::Color10 => 9,
            Self::Color11 => 10,
            Self::Color12 => 11,
            Self::Color13 => 12,
            Self::Color14 => 13,
            Self::Color15 => 14,
            Self::Color16 => 15,
            Self::Background => 16,
            Self::Foreground => 17,
        }
    }

    /// Slot key as used in snapshots and config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color1 => "color1",
            Self::Color2 => "color2",
            Self::Color3 => "color3",
            Self::Color4 => "color4",
            Self::Color5 => "color5",
            Self::Color6 => "color6",
            Self::Color7 => "color7",
            Self::Color8 => "color8",
            Self::Color9 => "color9",
            Self::Color10 => "color10",
            Self::Color11 => "color11",
            Self::Color12 => "color12",
            Self::Color13 => "color13",
            Self::Color14 => "color14",
            Self::Color15 => "color15",
            Self::Color16 => "color16",
            Self::Background => "background",
            Self::Foreground => "foreground",
        }
    }

    /// Human-readable label. Bright variants share their base color's name.
    #[must_use]
    pub const fn friendly_name(self) -> &'static str {
        match self {
            Self::Color1 | Self::Color9 => "Black",
            Self::Color2 | Self::Color10 => "Red",
            Self::Color3 | Self::Color11 => "Green",
            Self::Color4 | Self::Color12 => "Yellow",
            Self::Color5 | Self::Color13 => "Blue",
            Self::Color6 | Self::Color14 => "Magenta",
            Self::Color7 | Self::Color15 => "Cyan",
            Self::Color8 | Self::Color16 => "White",
            Self::Background => "Background",
            Self::Foreground => "Foreground",
        }
    }

    /// Whether this is one of the bright variants (`color9`–`color16`).
    #[must_use]
    pub const fn is_bright(self) -> bool {
        matches!(
            self,
            Self::Color9
                | Self::Color10
                | Self::Color11
                | Self::Color12
                | Self::Color13
                | Self::Color14
                | Self::Color15
                | Self::Color16
        )
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorName {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| PaletteError::UnknownSlot(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn index_matches_all_order() {
        for (i, slot) in ColorName::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn names_roundtrip() {
        for slot in ColorName::ALL {
            assert_eq!(slot.name().parse::<ColorName>().unwrap(), slot);
            assert_eq!(slot.to_string(), slot.name());
        }
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let err = "color17".parse::<ColorName>().unwrap_err();
        assert!(matches!(err, PaletteError::UnknownSlot(ref s) if s == "color17"));
        assert!("Color1".parse::<ColorName>().is_err());
    }

    #[test]
    fn serde_uses_slot_names() {
        assert_eq!(serde_json::to_string(&ColorName::Color12).unwrap(), "\"color12\"");
        assert_eq!(
            serde_json::from_str::<ColorName>("\"background\"").unwrap(),
            ColorName::Background
        );
    }

    #[test]
    fn friendly_names_repeat_for_bright_variants() {
        assert_eq!(ColorName::Color2.friendly_name(), "Red");
        assert_eq!(ColorName::Color10.friendly_name(), "Red");
        assert_eq!(ColorName::Color16.friendly_name(), "White");
        assert_eq!(ColorName::Foreground.friendly_name(), "Foreground");
        assert!(ColorName::Color10.is_bright());
        assert!(!ColorName::Color2.is_bright());
        assert!(!ColorName::Background.is_bright());
    }
}
