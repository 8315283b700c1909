//! Color selections — the 18-slot palette being edited.
//!
//! Every slot always holds a color. Construction fills them from
//! [`nord`](crate::nord); edits replace one slot at a time and a rejected
//! edit leaves the slot as it was.
//!
//! Snapshots map slot names to `#rrggbb` strings. They are what a front end
//! displays and what persistence stores.

use std::collections::BTreeMap;

use n_color::ColorValue;
use n_color::parse::parse_color;
use tracing::{debug, warn};

use crate::PaletteError;
use crate::nord::nord;
use crate::slot::ColorName;

/// Slot name → `#rrggbb`.
pub type Snapshot = BTreeMap<ColorName, String>;

/// The palette: one [`ColorValue`] per [`ColorName`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSelections {
    slots: [ColorValue; ColorName::COUNT],
}

impl ColorSelections {
    /// A palette holding the Nord defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: ColorName::ALL.map(nord),
        }
    }

    /// The color in `slot`.
    #[must_use]
    pub const fn get(&self, slot: ColorName) -> ColorValue {
        self.slots[slot.index()]
    }

    /// Replace `slot` with the color written in `input`.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB` and `rgb(r, g, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] if `input` is in neither
    /// format. The slot keeps its previous color.
    pub fn set(&mut self, slot: ColorName, input: &str) -> Result<(), PaletteError> {
        match parse_color(input) {
            Ok(color) => {
                self.set_value(slot, color);
                Ok(())
            }
            Err(source) => {
                warn!(%slot, input, "rejected color edit");
                Err(PaletteError::InvalidColor { slot, source })
            }
        }
    }

    /// Replace `slot` with an already-built color (e.g. from a drag).
    pub fn set_value(&mut self, slot: ColorName, color: ColorValue) {
        debug!(%slot, %color, "color slot updated");
        self.slots[slot.index()] = color;
    }

    /// Put `slot` back to its Nord default.
    pub fn reset(&mut self, slot: ColorName) {
        self.set_value(slot, nord(slot));
    }

    /// All slots with their colors, in [`ColorName::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorName, ColorValue)> + '_ {
        ColorName::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    // ─── Snapshots ───────────────────────────────────────────────────────

    /// Every slot as `#rrggbb`.
    #[must_use]
    pub fn serialize(&self) -> Snapshot {
        self.iter().map(|(slot, color)| (slot, color.to_hex())).collect()
    }

    /// Load colors from a snapshot.
    ///
    /// All entries are validated before any slot changes, so a bad entry
    /// leaves the whole palette untouched. Slots missing from the snapshot
    /// keep their current color.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] for the first entry that does
    /// not parse.
    pub fn deserialize(&mut self, snapshot: &Snapshot) -> Result<(), PaletteError> {
        let parsed = snapshot
            .iter()
            .map(|(&slot, input)| {
                parse_color(input)
                    .map(|color| (slot, color))
                    .map_err(|source| PaletteError::InvalidColor { slot, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (slot, color) in parsed {
            self.set_value(slot, color);
        }
        Ok(())
    }

    /// The snapshot as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Load colors from a JSON object of slot name → color string.
    ///
    /// Same all-or-nothing rule as [`ColorSelections::deserialize`].
    ///
    /// # Errors
    ///
    /// [`PaletteError::Json`] for malformed JSON, [`PaletteError::UnknownSlot`]
    /// for a key that isn't a slot name, [`PaletteError::InvalidColor`] for a
    /// bad color.
    pub fn load_json(&mut self, json: &str) -> Result<(), PaletteError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let snapshot = raw
            .into_iter()
            .map(|(key, value)| Ok((key.parse::<ColorName>()?, value)))
            .collect::<Result<Snapshot, PaletteError>>()?;
        self.deserialize(&snapshot)
    }
}

impl Default for ColorSelections {
    fn default() -> Self {
        Self::new()
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
    fn defaults_are_nord() {
        let colors = ColorSelections::new();
        assert_eq!(colors.get(ColorName::Color2).to_hex(), "#bf616a");
        assert_eq!(colors.get(ColorName::Background).to_hex(), "#2e3440");
        assert_eq!(colors.get(ColorName::Foreground).to_hex(), "#d8dee9");
    }

    #[test]
    fn set_accepts_all_formats() {
        let mut colors = ColorSelections::new();
        for input in ["#BF616A", "BF616A", "rgb(191, 97, 106)"] {
            colors.set_value(ColorName::Color5, ColorValue::BLACK);
            colors.set(ColorName::Color5, input).unwrap();
            assert_eq!(colors.get(ColorName::Color5).rgb8(), (191, 97, 106), "{input}");
        }
    }

    #[test]
    fn rejected_set_leaves_slot_unchanged() {
        let mut colors = ColorSelections::new();
        let before = colors.get(ColorName::Color3);
        for input in ["not-a-color", "#12345", "rgb(1,2)"] {
            let err = colors.set(ColorName::Color3, input).unwrap_err();
            assert!(
                matches!(err, PaletteError::InvalidColor { slot: ColorName::Color3, .. }),
                "{input}: {err}"
            );
            assert_eq!(colors.get(ColorName::Color3), before);
        }
    }

    #[test]
    fn set_touches_only_its_slot() {
        let mut colors = ColorSelections::new();
        colors.set(ColorName::Color1, "#000000").unwrap();
        let untouched = ColorSelections::new();
        for slot in ColorName::ALL.into_iter().skip(1) {
            assert_eq!(colors.get(slot), untouched.get(slot), "{slot}");
        }
    }

    #[test]
    fn reset_restores_default() {
        let mut colors = ColorSelections::new();
        colors.set(ColorName::Foreground, "#ffffff").unwrap();
        colors.reset(ColorName::Foreground);
        assert_eq!(colors.get(ColorName::Foreground).to_hex(), "#d8dee9");
    }

    #[test]
    fn serialize_covers_every_slot() {
        let snapshot = ColorSelections::new().serialize();
        assert_eq!(snapshot.len(), ColorName::COUNT);
        assert_eq!(snapshot[&ColorName::Color15], "#8fbcbb");
        assert_eq!(snapshot[&ColorName::Background], "#2e3440");
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let mut edited = ColorSelections::new();
        edited.set(ColorName::Color4, "rgb(1, 2, 3)").unwrap();
        edited.set(ColorName::Background, "#101010").unwrap();

        let mut restored = ColorSelections::new();
        restored.deserialize(&edited.serialize()).unwrap();
        assert_eq!(restored, edited);
    }

    #[test]
    fn deserialize_is_all_or_nothing() {
        let mut colors = ColorSelections::new();
        let mut snapshot = Snapshot::new();
        snapshot.insert(ColorName::Color1, "#ffffff".to_string());
        snapshot.insert(ColorName::Color2, "bogus".to_string());

        let err = colors.deserialize(&snapshot).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { slot: ColorName::Color2, .. }));
        assert_eq!(colors, ColorSelections::new());
    }

    #[test]
    fn deserialize_partial_keeps_missing_slots() {
        let mut colors = ColorSelections::new();
        let snapshot = Snapshot::from([(ColorName::Color8, "#123456".to_string())]);
        colors.deserialize(&snapshot).unwrap();
        assert_eq!(colors.get(ColorName::Color8).to_hex(), "#123456");
        assert_eq!(colors.get(ColorName::Color16).to_hex(), "#eceff4");
    }

    #[test]
    fn json_roundtrip() {
        let mut edited = ColorSelections::new();
        edited.set(ColorName::Color6, "#abcdef").unwrap();
        let json = edited.to_json().unwrap();
        assert!(json.contains("\"color6\": \"#abcdef\""), "{json}");

        let mut restored = ColorSelections::new();
        restored.load_json(&json).unwrap();
        assert_eq!(restored, edited);
    }

    #[test]
    fn json_unknown_slot_is_rejected() {
        let mut colors = ColorSelections::new();
        let err = colors.load_json(r##"{"color99": "#000000"}"##).unwrap_err();
        assert!(matches!(err, PaletteError::UnknownSlot(ref s) if s == "color99"));
    }

    #[test]
    fn json_malformed_is_rejected() {
        let mut colors = ColorSelections::new();
        assert!(matches!(colors.load_json("{"), Err(PaletteError::Json(_))));
    }
}
