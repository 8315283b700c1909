//! Picker session store — the glue between widget events and the palette.
//!
//! One `PickerStore` backs one picker: it owns the palette, remembers which
//! slot is being edited and in which mode, and turns pointer positions into
//! committed colors. Edits arrive one at a time through [`PickerStore::dispatch`]
//! or the direct methods; nothing here blocks or spawns.
//!
//! ```text
//! pointer (x, y, z) ──pick──▶ coordinates_to_color ──▶ ColorSelections[slot]
//!                                                          │
//!          coordinates() ◀── color_to_coordinates ◀────────┤
//!          surfaces()    ◀── style::surfaces     ◀────────┘
//! ```

use n_color::ColorValue;
use n_palette::{ColorName, ColorSelections};
use n_picker::{
    Coordinates, Mode, PickerSurfaces, color_to_coordinates, coordinates_to_color, surfaces,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Error;
use crate::config::{PickerConfig, validate_size};

/// A typed color edit: put `new_color` (as typed) into `color_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsPayload {
    pub color_name: ColorName,
    pub new_color: String,
}

/// Something the front end wants done.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace a slot from a typed color string.
    SetColor(ColorsPayload),
    /// Direct further picks at another slot.
    SelectSlot(ColorName),
    /// Switch picker mode.
    SetMode(Mode),
    /// The widget was resized.
    Resize(f64),
    /// Pointer moved to a position in the active mode.
    Pick(Coordinates),
}

/// State of one picker widget and the palette it edits.
#[derive(Debug, Clone)]
pub struct PickerStore {
    config: PickerConfig,
    colors: ColorSelections,
}

impl PickerStore {
    /// A store with the Nord palette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails validation.
    pub fn new(config: PickerConfig) -> Result<Self, Error> {
        Self::with_colors(config, ColorSelections::new())
    }

    /// A store over an existing palette (e.g. one loaded from disk).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails validation.
    pub fn with_colors(config: PickerConfig, colors: ColorSelections) -> Result<Self, Error> {
        config.validate()?;
        debug!(size = config.size, mode = %config.mode, slot = %config.slot, "picker store ready");
        Ok(Self { config, colors })
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// - [`Error::Palette`] if a `SetColor` string is rejected; the slot is
    ///   unchanged.
    /// - [`Error::Config`] if a `Resize` size is not positive and finite.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        trace!(?action, "dispatch");
        match action {
            Action::SetColor(ColorsPayload { color_name, new_color }) => {
                self.colors.set(color_name, &new_color)?;
            }
            Action::SelectSlot(slot) => self.config.slot = slot,
            Action::SetMode(mode) => self.config.mode = mode,
            Action::Resize(size) => {
                validate_size(size)?;
                self.config.size = size;
            }
            Action::Pick(coords) => {
                self.pick(coords);
            }
        }
        Ok(())
    }

    /// Switch mode by numeric index, as sent by front ends that number their
    /// modes 0–5.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mode`] for an index outside 0–5; the mode is unchanged.
    pub fn select_mode_index(&mut self, index: u8) -> Result<(), Error> {
        let mode = Mode::try_from(index)?;
        self.dispatch(Action::SetMode(mode))
    }

    /// Interpret `coords` in the active mode and commit the color to the
    /// active slot.
    pub fn pick(&mut self, coords: Coordinates) -> ColorValue {
        let color = coordinates_to_color(coords, self.config.mode, self.config.size);
        self.colors.set_value(self.config.slot, color);
        color
    }

    /// Where the active slot's color sits in the active mode.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        color_to_coordinates(&self.active_color(), self.config.mode, self.config.size)
    }

    /// Styles for repainting the picker around the active slot's color.
    #[must_use]
    pub fn surfaces(&self) -> PickerSurfaces {
        surfaces(self.config.mode, &self.active_color())
    }

    /// The color in `slot`.
    #[must_use]
    pub const fn color(&self, slot: ColorName) -> ColorValue {
        self.colors.get(slot)
    }

    /// The color in the slot being edited.
    #[must_use]
    pub const fn active_color(&self) -> ColorValue {
        self.colors.get(self.config.slot)
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorSelections {
        &self.colors
    }

    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_palette::PaletteError;
    use pretty_assertions::assert_eq;

    fn store() -> PickerStore {
        PickerStore::new(PickerConfig::default()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PickerConfig {
            size: 0.0,
            ..PickerConfig::default()
        };
        assert!(matches!(PickerStore::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn set_color_payload() {
        let mut store = store();
        store
            .dispatch(Action::SetColor(ColorsPayload {
                color_name: ColorName::Color4,
                new_color: "rgb(10, 20, 30)".to_string(),
            }))
            .unwrap();
        assert_eq!(store.color(ColorName::Color4).rgb8(), (10, 20, 30));
    }

    #[test]
    fn bad_payload_surfaces_error_and_keeps_slot() {
        let mut store = store();
        let err = store
            .dispatch(Action::SetColor(ColorsPayload {
                color_name: ColorName::Color4,
                new_color: "#12345".to_string(),
            }))
            .unwrap_err();
        assert!(matches!(err, Error::Palette(PaletteError::InvalidColor { .. })));
        assert_eq!(store.color(ColorName::Color4).to_hex(), "#ebcb8b");
    }

    #[test]
    fn payload_json_uses_camel_case() {
        let payload: ColorsPayload =
            serde_json::from_str(r##"{"colorName": "color2", "newColor": "#000000"}"##).unwrap();
        assert_eq!(payload.color_name, ColorName::Color2);
        assert_eq!(payload.new_color, "#000000");
    }

    #[test]
    fn pick_commits_to_active_slot() {
        let mut store = store();
        store.dispatch(Action::SelectSlot(ColorName::Color9)).unwrap();
        store.dispatch(Action::SetMode(Mode::Red)).unwrap();
        store.dispatch(Action::Pick(Coordinates::new(10.0, 20.0, 30.0))).unwrap();

        assert_eq!(store.color(ColorName::Color9).rgb8(), (30, 20, 10));
        // Other slots untouched.
        assert_eq!(store.color(ColorName::Color1).to_hex(), "#3b4252");
    }

    #[test]
    fn coordinates_follow_active_color() {
        let mut store = store();
        store.dispatch(Action::SetMode(Mode::Blue)).unwrap();
        let picked = Coordinates::new(40.0, 50.0, 60.0);
        store.pick(picked);
        assert_eq!(store.coordinates(), picked);
    }

    #[test]
    fn hue_mode_roundtrip_through_store() {
        let mut store = store();
        store.dispatch(Action::Resize(200.0)).unwrap();
        let picked = Coordinates::new(150.0, 100.0, 50.0);
        let color = store.pick(picked);
        assert!((color.h() - 90.0).abs() < 1e-9);
        let back = store.coordinates();
        assert!((back.x - picked.x).abs() < 1e-6);
        assert!((back.y - picked.y).abs() < 1e-6);
        assert!((back.z - picked.z).abs() < 1e-6);
    }

    #[test]
    fn resize_validates() {
        let mut store = store();
        assert!(matches!(store.dispatch(Action::Resize(-1.0)), Err(Error::Config(_))));
        assert!((store.config().size - 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mode_index_selection() {
        let mut store = store();
        store.select_mode_index(4).unwrap();
        assert_eq!(store.config().mode, Mode::Green);
        assert!(matches!(store.select_mode_index(9), Err(Error::Mode(_))));
        assert_eq!(store.config().mode, Mode::Green);
    }

    #[test]
    fn surfaces_track_mode_and_color() {
        let mut store = store();
        store.dispatch(Action::SetMode(Mode::Green)).unwrap();
        store.pick(Coordinates::new(10.0, 30.0, 20.0));
        let expected = surfaces(Mode::Green, &ColorValue::from_rgb8(30, 20, 10));
        assert_eq!(store.surfaces(), expected);
    }
}
