//! # n-picker — Picker geometry for n-chroma
//!
//! Turns pointer positions on a picker widget into colors and back, and
//! describes how to paint the widget for the current color:
//!
//! - **[`mode`]** — the six picker [`Mode`]s and widget [`Coordinates`]
//! - **[`convert`]** — coordinates ⇄ [`ColorValue`](n_color::ColorValue) per mode
//! - **[`style`]** — background/gradient descriptors for each picker surface
//!
//! Everything here is a pure function of its arguments. No state is kept
//! between calls.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod convert;
pub mod mode;
pub mod style;

pub use convert::{color_to_coordinates, coordinates_to_color};
pub use mode::{Coordinates, Mode, ModeError, Model};
pub use style::{BackgroundStyle, PickerSurfaces, surfaces};
