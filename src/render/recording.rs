use crate::error::MarkResult;
use crate::render::{
    FontSpec, MarkLinePrimitive, Painter, RectPrimitive, TextExtent, TextPrimitive,
};

/// One captured painter invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    MarkLine(MarkLinePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
}

/// Instrumented no-op painter used by tests and headless embedding.
///
/// It still validates every primitive so tests catch invalid geometry before
/// a real backend is introduced, and it records calls in invocation order so
/// tests can assert both geometry and z-order. Text metrics are fixed
/// (6 px per character, 12 px line height) to keep assertions deterministic.
#[derive(Debug)]
pub struct RecordingPainter {
    width: f64,
    calls: Vec<DrawCall>,
}

const CHAR_WIDTH_PX: f64 = 6.0;
const LINE_HEIGHT_PX: f64 = 12.0;

impl RecordingPainter {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn mark_lines(&self) -> impl Iterator<Item = &MarkLinePrimitive> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::MarkLine(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn width(&self) -> f64 {
        self.width
    }

    fn measure_text(&self, text: &str, _font: &FontSpec) -> TextExtent {
        TextExtent::new(text.chars().count() as f64 * CHAR_WIDTH_PX, LINE_HEIGHT_PX)
    }

    fn draw_mark_line(&mut self, line: &MarkLinePrimitive) -> MarkResult<()> {
        line.validate()?;
        self.calls.push(DrawCall::MarkLine(line.clone()));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> MarkResult<()> {
        text.validate()?;
        self.calls.push(DrawCall::Text(text.clone()));
        Ok(())
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> MarkResult<()> {
        rect.validate()?;
        self.calls.push(DrawCall::Rect(*rect));
        Ok(())
    }
}
