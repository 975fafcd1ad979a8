use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::error::{MarkError, MarkResult};
use crate::render::{
    Color, FontSpec, MarkLinePrimitive, Painter, RectPrimitive, TextExtent, TextHAlign,
    TextPrimitive,
};

const ARROW_WIDTH: f64 = 16.0;
const ARROW_HEIGHT: f64 = 10.0;
const DOT_RADIUS: f64 = 3.0;

/// Cairo + Pango + PangoCairo painter backend drawing onto an offscreen
/// image surface.
///
/// The mark-line glyph is compound: a filled start dot, the (optionally
/// dashed) shaft, and a filled arrowhead whose tip sits at the line's end
/// offset. Suppressing the arrow reduces the glyph to the bare shaft.
pub struct CairoPainter {
    surface: ImageSurface,
    context: Context,
    width: f64,
}

impl CairoPainter {
    pub fn new(width: i32, height: i32) -> MarkResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(MarkError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            width: f64::from(width),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    fn text_layout(&self, text: &str, font: &FontSpec) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("{} {}", font.family, font.size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl Painter for CairoPainter {
    fn width(&self) -> f64 {
        self.width
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> TextExtent {
        let layout = self.text_layout(text, font);
        let (text_width, text_height) = layout.pixel_size();
        TextExtent::new(f64::from(text_width), f64::from(text_height))
    }

    fn draw_mark_line(&mut self, line: &MarkLinePrimitive) -> MarkResult<()> {
        line.validate()?;
        let context = &self.context;

        if line.draw_arrow {
            apply_color(context, line.style.fill_color);
            context.new_sub_path();
            context.arc(line.x_start + DOT_RADIUS, line.y, DOT_RADIUS, 0.0, 2.0 * PI);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill mark line dot", err))?;
        }

        apply_color(context, line.style.stroke_color);
        context.set_line_width(line.style.stroke_width);
        context.set_dash(line.style.stroke_style.segments(), 0.0);
        context.move_to(line.x_start, line.y);
        context.line_to(line.x_end, line.y);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke mark line", err))?;
        context.set_dash(&[], 0.0);

        if line.draw_arrow {
            apply_color(context, line.style.fill_color);
            context.move_to(line.x_end - ARROW_WIDTH, line.y - ARROW_HEIGHT / 2.0);
            context.line_to(line.x_end, line.y);
            context.line_to(line.x_end - ARROW_WIDTH, line.y + ARROW_HEIGHT / 2.0);
            context.line_to(line.x_end - ARROW_WIDTH * 0.6, line.y);
            context.close_path();
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill arrowhead", err))?;
        }

        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> MarkResult<()> {
        text.validate()?;
        let layout = self.text_layout(&text.text, &text.style.font);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(&self.context, text.style.color);
        // `y` is the baseline; pango lays out from the top-left corner.
        self.context.move_to(x, text.y - f64::from(text_height));
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }

    fn fill_rect(&mut self, rect: &RectPrimitive) -> MarkResult<()> {
        rect.validate()?;
        apply_color(&self.context, rect.fill);
        self.context
            .rectangle(rect.left, rect.top, rect.width(), rect.height());
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> MarkError {
    MarkError::Backend(format!("{prefix}: {err}"))
}
