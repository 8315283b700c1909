//! # n-chroma — Color picker engine
//!
//! Maps pointer positions on a picker widget to colors and back, describes
//! how to paint the widget, and keeps the 18-slot terminal palette the
//! picker edits.
//!
//! # Architecture
//!
//! ```text
//! n-color:    channel math, ColorValue (HSV + RGB), color string parsing
//!     │
//!     ├──────────────────────┐
//!     ▼                      ▼
//! n-picker:   Mode,        n-palette:  ColorName slots, Nord defaults,
//!             coordinates ⇄ color,     ColorSelections (get/set/snapshot)
//!             surface styles
//!     │                      │
//!     └──────────┬───────────┘
//!                ▼
//! n-chroma:   PickerConfig, PickerStore (actions, pick, coordinates, surfaces)
//! ```
//!
//! Logging goes through `tracing`; install a subscriber in the host
//! application to see palette edits and dispatched actions.

pub mod config;
pub mod store;

use thiserror::Error;

pub use config::{ConfigError, PickerConfig};
pub use n_color::{self, ColorValue};
pub use n_palette::{self, ColorName, ColorSelections, PaletteError};
pub use n_picker::{self, Coordinates, Mode, ModeError};
pub use store::{Action, ColorsPayload, PickerStore};

/// Any failure from the picker engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mode(#[from] ModeError),
}
