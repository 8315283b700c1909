//! Picker surface styles — what to paint behind and over each widget.
//!
//! Every mode paints three surfaces:
//!
//! - **background** — the bottom layer of the 2D field
//! - **foreground** — a layer over it that carries the second field axis
//! - **slider** — the 1D strip for the mode's own channel
//!
//! The descriptors are plain data. [`fmt::Display`] renders them as CSS
//! declarations, which is what web front ends consume; other renderers
//! walk the fields directly.
//!
//! Channel arguments use [`ColorValue`] units: hue in degrees, saturation
//! and brightness in percent, RGB in bytes, opacity in `[0, 1]`.

use std::fmt;

use n_color::ColorValue;
use n_color::channel::clamp;

use crate::mode::Mode;

// ---------------------------------------------------------------------------
// Descriptor types
// ---------------------------------------------------------------------------

/// An 8-bit color with alpha, as it appears in a gradient stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
    /// White at zero alpha, so a gradient fading to it doesn't gray out.
    pub const CLEAR_WHITE: Self = Self::rgba(255, 255, 255, 0.0);
}

impl From<ColorValue> for Rgba {
    fn from(color: ColorValue) -> Self {
        let (r, g, b) = color.rgb8();
        Self::rgba(r, g, b, color.a())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        if a >= 1.0 {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {a})")
        }
    }
}

/// The edge a linear gradient runs toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ToTop,
    ToRight,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ToTop => "to top",
            Self::ToRight => "to right",
        })
    }
}

/// One stop of a gradient. `position` is a percentage along the gradient
/// line; `None` lets the renderer space stops evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgba,
    pub position: Option<f64>,
}

impl ColorStop {
    #[must_use]
    pub const fn new(color: Rgba) -> Self {
        Self { color, position: None }
    }

    #[must_use]
    pub const fn at(color: Rgba, position: f64) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            // Five decimals is finer than any display can resolve.
            Some(p) => write!(f, "{} {}%", self.color, (p * 1e5).round() / 1e5),
            None => write!(f, "{}", self.color),
        }
    }
}

/// A linear gradient from the opposite edge toward `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub direction: Direction,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    #[must_use]
    pub const fn new(direction: Direction, stops: Vec<ColorStop>) -> Self {
        Self { direction, stops }
    }

    /// Two-stop gradient from `from` to `to`.
    #[must_use]
    pub fn between(direction: Direction, from: Rgba, to: Rgba) -> Self {
        Self::new(direction, vec![ColorStop::new(from), ColorStop::new(to)])
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}", self.direction)?;
        for stop in &self.stops {
            write!(f, ", {stop}")?;
        }
        f.write_str(")")
    }
}

/// The primary paint of a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// A single flat color.
    Solid(Rgba),
    /// Gradients stacked top-first, like CSS background layers.
    Layers(Vec<LinearGradient>),
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Layers(layers) => {
                for (i, layer) in layers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{layer}")?;
                }
                Ok(())
            }
        }
    }
}

/// How a layer combines with what's beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Screen,
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Screen => "screen",
        })
    }
}

/// Everything needed to paint one picker surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    pub background: Background,
    /// Blend between this surface's own background layers.
    pub background_blend_mode: Option<BlendMode>,
    /// Blend between this surface and the surfaces below it.
    pub mix_blend_mode: Option<BlendMode>,
    pub opacity: Option<f64>,
}

impl BackgroundStyle {
    #[must_use]
    pub const fn new(background: Background) -> Self {
        Self {
            background,
            background_blend_mode: None,
            mix_blend_mode: None,
            opacity: None,
        }
    }

    #[must_use]
    pub const fn solid(color: Rgba) -> Self {
        Self::new(Background::Solid(color))
    }

    #[must_use]
    pub fn gradient(gradient: LinearGradient) -> Self {
        Self::new(Background::Layers(vec![gradient]))
    }

    #[must_use]
    pub const fn layers(layers: Vec<LinearGradient>) -> Self {
        Self::new(Background::Layers(layers))
    }

    /// Set opacity, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            opacity: Some(clamp(opacity, 0.0, 1.0)),
            ..self
        }
    }

    /// Blend both within the surface and against what's below.
    #[must_use]
    pub fn with_blend(self, mode: BlendMode) -> Self {
        Self {
            background_blend_mode: Some(mode),
            mix_blend_mode: Some(mode),
            ..self
        }
    }
}

impl fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "background: {};", self.background)?;
        if let Some(mode) = self.background_blend_mode {
            write!(f, " background-blend-mode: {mode};")?;
        }
        if let Some(mode) = self.mix_blend_mode {
            write!(f, " mix-blend-mode: {mode};")?;
        }
        if let Some(opacity) = self.opacity {
            write!(f, " opacity: {opacity};")?;
        }
        Ok(())
    }
}

/// The three surfaces of one picker in one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSurfaces {
    pub background: BackgroundStyle,
    pub foreground: BackgroundStyle,
    pub slider: BackgroundStyle,
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Fully saturated, fully bright color at `hue`.
fn pure_hue(hue: f64) -> Rgba {
    ColorValue::hsv(hue, 100.0, 100.0).into()
}

/// The hue wheel unrolled: red → yellow → green → cyan → blue → magenta → red,
/// one stop every 60°.
fn hue_wheel(direction: Direction) -> LinearGradient {
    let stops = (0..=6u8)
        .map(|i| {
            let i = f64::from(i);
            ColorStop::at(pure_hue(i * 60.0), i * 100.0 / 6.0)
        })
        .collect();
    LinearGradient::new(direction, stops)
}

// ---------------------------------------------------------------------------
// Hue
// ---------------------------------------------------------------------------

/// Hue field overlay: white fades in from the left (saturation), black from
/// the bottom (brightness).
#[must_use]
pub fn hue_foreground() -> BackgroundStyle {
    BackgroundStyle::layers(vec![
        LinearGradient::between(Direction::ToTop, Rgba::BLACK, Rgba::TRANSPARENT),
        LinearGradient::between(Direction::ToRight, Rgba::WHITE, Rgba::TRANSPARENT),
    ])
}

/// Hue field base: the pure color at `hue`.
#[must_use]
pub fn hue_background(hue: f64) -> BackgroundStyle {
    BackgroundStyle::solid(pure_hue(hue))
}

/// Hue slider: the full wheel, bottom to top.
#[must_use]
pub fn hue_slider() -> BackgroundStyle {
    BackgroundStyle::gradient(hue_wheel(Direction::ToTop))
}

// ---------------------------------------------------------------------------
// Saturation
// ---------------------------------------------------------------------------

/// Saturation field overlay: black at the bottom fading out upward.
#[must_use]
pub fn saturation_foreground() -> BackgroundStyle {
    BackgroundStyle::gradient(LinearGradient::new(
        Direction::ToTop,
        vec![
            ColorStop::at(Rgba::BLACK, 0.0),
            ColorStop::at(Rgba::CLEAR_WHITE, 100.0),
        ],
    ))
}

/// Saturation field base: the hue wheel left to right, faded by `opacity`
/// (the current saturation as a fraction).
#[must_use]
pub fn saturation_background(opacity: f64) -> BackgroundStyle {
    BackgroundStyle::gradient(hue_wheel(Direction::ToRight)).with_opacity(opacity)
}

/// Saturation slider: gray to fully saturated at the given hue and
/// brightness.
#[must_use]
pub fn saturation_slider(hue: f64, brightness: f64) -> BackgroundStyle {
    let bottom = ColorValue::hsv(hue, 0.0, brightness).into();
    let top = ColorValue::hsv(hue, 100.0, brightness).into();
    BackgroundStyle::gradient(LinearGradient::between(Direction::ToTop, bottom, top))
}

// ---------------------------------------------------------------------------
// Brightness
// ---------------------------------------------------------------------------

/// Brightness field overlay: flat black, more opaque as brightness drops.
#[must_use]
pub fn brightness_foreground(opacity: f64) -> BackgroundStyle {
    BackgroundStyle::solid(Rgba::BLACK).with_opacity(opacity)
}

/// Brightness field base: hue wheel left to right, washed toward white at
/// the bottom.
#[must_use]
pub fn brightness_background() -> BackgroundStyle {
    BackgroundStyle::layers(vec![
        LinearGradient::between(Direction::ToTop, Rgba::WHITE, Rgba::CLEAR_WHITE),
        hue_wheel(Direction::ToRight),
    ])
}

/// Brightness slider: black to full brightness at the given hue and
/// saturation.
#[must_use]
pub fn brightness_slider(hue: f64, saturation: f64) -> BackgroundStyle {
    let top = ColorValue::hsv(hue, saturation, 100.0).into();
    BackgroundStyle::gradient(LinearGradient::between(Direction::ToTop, Rgba::BLACK, top))
}

// ---------------------------------------------------------------------------
// Red / Green / Blue
// ---------------------------------------------------------------------------

// An RGB field is a solid base holding the slider channel, with the two
// other channels screened on top as transparent → primary ramps.

fn channel_foreground(right: Rgba, top: Rgba) -> BackgroundStyle {
    BackgroundStyle::layers(vec![
        LinearGradient::between(Direction::ToRight, Rgba::TRANSPARENT, right),
        LinearGradient::between(Direction::ToTop, Rgba::TRANSPARENT, top),
    ])
    .with_blend(BlendMode::Screen)
}

#[must_use]
pub fn red_background(red: u8) -> BackgroundStyle {
    BackgroundStyle::solid(Rgba::rgb(red, 0, 0))
}

/// Blue across, green up.
#[must_use]
pub fn red_foreground() -> BackgroundStyle {
    channel_foreground(Rgba::rgb(0, 0, 255), Rgba::rgb(0, 255, 0))
}

#[must_use]
pub fn red_slider(green: u8, blue: u8) -> BackgroundStyle {
    BackgroundStyle::gradient(LinearGradient::between(
        Direction::ToTop,
        Rgba::rgb(0, green, blue),
        Rgba::rgb(255, green, blue),
    ))
}

#[must_use]
pub fn green_background(green: u8) -> BackgroundStyle {
    BackgroundStyle::solid(Rgba::rgb(0, green, 0))
}

/// Blue across, red up.
#[must_use]
pub fn green_foreground() -> BackgroundStyle {
    channel_foreground(Rgba::rgb(0, 0, 255), Rgba::rgb(255, 0, 0))
}

#[must_use]
pub fn green_slider(red: u8, blue: u8) -> BackgroundStyle {
    BackgroundStyle::gradient(LinearGradient::between(
        Direction::ToTop,
        Rgba::rgb(red, 0, blue),
        Rgba::rgb(red, 255, blue),
    ))
}

#[must_use]
pub fn blue_background(blue: u8) -> BackgroundStyle {
    BackgroundStyle::solid(Rgba::rgb(0, 0, blue))
}

/// Red across, green up.
#[must_use]
pub fn blue_foreground() -> BackgroundStyle {
    channel_foreground(Rgba::rgb(255, 0, 0), Rgba::rgb(0, 255, 0))
}

#[must_use]
pub fn blue_slider(red: u8, green: u8) -> BackgroundStyle {
    BackgroundStyle::gradient(LinearGradient::between(
        Direction::ToTop,
        Rgba::rgb(red, green, 0),
        Rgba::rgb(red, green, 255),
    ))
}

// ---------------------------------------------------------------------------
// Per-mode bundle
// ---------------------------------------------------------------------------

/// The background, foreground and slider styles for `color` under `mode`.
#[must_use]
pub fn surfaces(mode: Mode, color: &ColorValue) -> PickerSurfaces {
    let (r, g, b) = color.rgb8();
    let (background, foreground, slider) = match mode {
        Mode::Hue => (hue_background(color.h()), hue_foreground(), hue_slider()),
        Mode::Saturation => (
            saturation_background(color.s() / 100.0),
            saturation_foreground(),
            saturation_slider(color.h(), color.v()),
        ),
        Mode::Brightness => (
            brightness_background(),
            brightness_foreground(1.0 - color.v() / 100.0),
            brightness_slider(color.h(), color.s()),
        ),
        Mode::Red => (red_background(r), red_foreground(), red_slider(g, b)),
        Mode::Green => (green_background(g), green_foreground(), green_slider(r, b)),
        Mode::Blue => (blue_background(b), blue_foreground(), blue_slider(r, g)),
    };
    PickerSurfaces {
        background,
        foreground,
        slider,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
