mod font;
mod primitives;
mod recording;

pub use font::{DEFAULT_LABEL_FONT_SIZE, FontProvider, FontSpec, SystemFontProvider};
pub use primitives::{
    Color, LineStrokeStyle, MarkLinePrimitive, MarkLineStyle, RectPrimitive, TextExtent,
    TextHAlign, TextPrimitive, TextStyle,
};
pub use recording::{DrawCall, RecordingPainter};

use crate::error::MarkResult;

/// Contract implemented by any drawing surface mark lines paint onto.
///
/// Every primitive carries its fully resolved style, so a painter holds no
/// drawing state between calls and one annotation can never pick up
/// another's style.
pub trait Painter {
    /// Full canvas width in pixels; value labels anchor to the right edge.
    fn width(&self) -> f64;

    /// Measured pixel box of `text` rendered with `font`.
    fn measure_text(&self, text: &str, font: &FontSpec) -> TextExtent;

    fn draw_mark_line(&mut self, line: &MarkLinePrimitive) -> MarkResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> MarkResult<()>;

    fn fill_rect(&mut self, rect: &RectPrimitive) -> MarkResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoPainter;
