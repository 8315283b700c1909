//! # n-palette — Named color slots for n-chroma
//!
//! A terminal color scheme is 18 colors: 16 ANSI slots plus background and
//! foreground. This crate holds them.
//!
//! - **[`slot`]** — the closed [`ColorName`] set, with friendly labels
//! - **[`nord`]** — the default palette every slot starts from
//! - **[`registry`]** — [`ColorSelections`], validated edits and snapshots

use n_color::ParseColorError;
use thiserror::Error;

pub mod nord;
pub mod registry;
pub mod slot;

pub use registry::{ColorSelections, Snapshot};
pub use slot::ColorName;

/// Errors from palette edits and snapshot loading.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string in neither accepted format. The slot is unchanged.
    #[error("{slot}: {source}")]
    InvalidColor {
        slot: ColorName,
        #[source]
        source: ParseColorError,
    },

    /// A slot name outside `color1`–`color16`, `background`, `foreground`.
    #[error("unknown color slot {0:?}")]
    UnknownSlot(String),

    #[error("palette json: {0}")]
    Json(#[from] serde_json::Error),
}
