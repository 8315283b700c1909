//! Picker configuration — widget size, starting mode, starting slot.
//!
//! Loaded from JSON by front ends that persist user preferences; every
//! field is optional and falls back to [`PickerConfig::default`].
//!
//! | Field  | Type   | Default    |
//! |--------|--------|------------|
//! | `size` | number | `255`      |
//! | `mode` | string | `"hue"`    |
//! | `slot` | string | `"color1"` |

use n_palette::ColorName;
use n_picker::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default widget extent. With 255 an RGB-mode coordinate is its byte value.
pub const DEFAULT_SIZE: f64 = 255.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("picker size must be positive and finite, got {0}")]
    InvalidSize(f64),

    #[error("picker config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one picker widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Widget extent in pixels (or whatever unit pointer events use).
    pub size: f64,
    /// Mode the picker opens in.
    pub mode: Mode,
    /// Slot edits go to until another is selected.
    pub slot: ColorName,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode: Mode::Hue,
            slot: ColorName::Color1,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON or unknown fields,
    /// [`ConfigError::InvalidSize`] for a size that fails [`validate_size`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidSize`] if `size` is not positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)
    }
}

/// Widget sizes divide every channel conversion, so zero, negative and
/// non-finite sizes are rejected up front.
///
/// # Errors
///
/// [`ConfigError::InvalidSize`] if `size` is not positive and finite.
pub fn validate_size(size: f64) -> Result<(), ConfigError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize(size))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
