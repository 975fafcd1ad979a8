use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{MarkError, MarkResult};
use crate::render::font::FontSpec;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Converts 8-bit channels into the normalized representation.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    pub fn validate(self) -> MarkResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MarkError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern applied to a mark line's shaft.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed(SmallVec<[f64; 4]>),
}

impl LineStrokeStyle {
    #[must_use]
    pub fn dashed(segments: impl IntoIterator<Item = f64>) -> Self {
        Self::Dashed(segments.into_iter().collect())
    }

    /// Dash segments to hand the backend; empty means solid.
    #[must_use]
    pub fn segments(&self) -> &[f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed(segments) => segments,
        }
    }
}

/// Resolved drawing style for one mark line, carried by the primitive itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkLineStyle {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
}

impl MarkLineStyle {
    pub fn validate(&self) -> MarkResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(MarkError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        for segment in self.stroke_style.segments() {
            if !segment.is_finite() || *segment <= 0.0 {
                return Err(MarkError::InvalidData(
                    "dash segments must be finite and > 0".to_owned(),
                ));
            }
        }
        self.stroke_color.validate()?;
        self.fill_color.validate()
    }
}

/// Resolved text style for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Color,
}

impl TextStyle {
    pub fn validate(&self) -> MarkResult<()> {
        self.font.validate()?;
        self.color.validate()
    }
}

/// Measured pixel box of a rendered text string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one horizontal mark line at a fixed `y`.
///
/// `draw_arrow` asks the backend for the line's compound glyph (start dot and
/// arrowhead); geometry of that glyph is the backend's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkLinePrimitive {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub style: MarkLineStyle,
    pub draw_arrow: bool,
}

impl MarkLinePrimitive {
    #[must_use]
    pub fn new(x_start: f64, x_end: f64, y: f64, style: MarkLineStyle, draw_arrow: bool) -> Self {
        Self {
            x_start,
            x_end,
            y,
            style,
            draw_arrow,
        }
    }

    pub fn validate(&self) -> MarkResult<()> {
        if !self.x_start.is_finite() || !self.x_end.is_finite() || !self.y.is_finite() {
            return Err(MarkError::InvalidData(
                "mark line coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Draw command for one label in pixel space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: TextStyle,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style,
            h_align,
        }
    }

    pub fn validate(&self) -> MarkResult<()> {
        if self.text.is_empty() {
            return Err(MarkError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(MarkError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Draw command for one borderless filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64, fill: Color) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            fill,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn validate(self) -> MarkResult<()> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.right.is_finite()
            || !self.bottom.is_finite()
        {
            return Err(MarkError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.right < self.left || self.bottom < self.top {
            return Err(MarkError::InvalidData(
                "rect must have non-negative extent".to_owned(),
            ));
        }
        self.fill.validate()
    }
}
