use tracing::{debug, warn};

use crate::core::{AxisPoint, CoordinateMapper, LayoutBox, SeriesSummary};
use crate::error::MarkResult;
use crate::render::{
    Color, FontProvider, FontSpec, LineStrokeStyle, MarkLinePrimitive, MarkLineStyle, Painter,
    RectPrimitive, SystemFontProvider, TextHAlign, TextPrimitive, TextStyle,
};

use super::format::{GroupedFormatter, ValueFormatter};
use super::spec::{AnnotationGroup, AnnotationKind, AnnotationSpec};

/// Inset applied to the line end so the arrowhead tip stays inside the canvas.
const ARROW_END_INSET: f64 = 2.0;
/// Dash pattern used unless a spec opts into a solid stroke.
const DASH_PATTERN: [f64; 2] = [4.0, 2.0];
const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// One series' worth of mark-line work: style defaults for fields the specs
/// leave unset, the series' annotation group and summary statistics, the
/// coordinate mapper bound to its value range, and its axis pixel points.
pub struct MarkLineRequest<'a> {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub font_color: Color,
    pub font: Option<FontSpec>,
    pub group: AnnotationGroup,
    pub summary: SeriesSummary,
    pub mapper: &'a dyn CoordinateMapper,
    pub points: &'a [AxisPoint],
}

impl<'a> MarkLineRequest<'a> {
    /// Builds a request whose fill/stroke/font defaults all start from the
    /// series color, the common styling for series-attached mark lines.
    #[must_use]
    pub fn new(
        series_color: Color,
        group: AnnotationGroup,
        summary: SeriesSummary,
        mapper: &'a dyn CoordinateMapper,
        points: &'a [AxisPoint],
    ) -> Self {
        Self {
            fill_color: series_color,
            stroke_color: series_color,
            font_color: series_color,
            font: None,
            group,
            summary,
            mapper,
            points,
        }
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }
}

/// Accumulates per-series render requests and paints every configured mark
/// line, label, and shaded band in one pass.
///
/// Requests paint in registration order and annotations within one group in
/// configured order; later paints overlap earlier ones. The renderer holds
/// no useful state once `render` returns.
pub struct MarkLineRenderer<'a, P: Painter> {
    painter: &'a mut P,
    font_provider: Box<dyn FontProvider + 'a>,
    formatter: Box<dyn ValueFormatter + 'a>,
    requests: Vec<MarkLineRequest<'a>>,
}

impl<'a, P: Painter> MarkLineRenderer<'a, P> {
    #[must_use]
    pub fn new(painter: &'a mut P) -> Self {
        Self {
            painter,
            font_provider: Box::new(SystemFontProvider::default()),
            formatter: Box::new(GroupedFormatter::default()),
            requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_font_provider(mut self, provider: impl FontProvider + 'a) -> Self {
        self.font_provider = Box::new(provider);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'a) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Registers one series' annotations. Never fails; configuration is
    /// validated upstream and rendering falls back defensively.
    pub fn add(&mut self, request: MarkLineRequest<'a>) {
        self.requests.push(request);
    }

    /// Paints every registered request and returns the claimed layout box.
    ///
    /// Mark lines draw into space already reserved by the axis/series
    /// layout, so a successful pass claims no space of its own. The only
    /// error the renderer originates is `FontUnavailable`, when a request
    /// carries no font and the provider cannot supply one; requests painted
    /// before the failing one stay painted.
    pub fn render(&mut self) -> MarkResult<LayoutBox> {
        let requests = std::mem::take(&mut self.requests);
        debug!(requests = requests.len(), "mark line render pass");

        for request in &requests {
            if request.group.is_empty() {
                continue;
            }

            let font = match &request.font {
                Some(font) => font.clone(),
                None => self.font_provider.default_font()?,
            };
            self.render_request(request, &font)?;
        }

        Ok(LayoutBox::ZERO)
    }

    fn render_request(&mut self, request: &MarkLineRequest<'a>, font: &FontSpec) -> MarkResult<()> {
        let width = self.painter.width();
        let band_height = request.mapper.band_height();
        let summary = request.summary;

        for spec in request.group.iter() {
            let style = resolve_style(spec, request);
            let font_color = spec.font_color.unwrap_or(request.font_color);

            let value = annotated_value(spec, summary);
            let y = request.mapper.offset(value);

            let end_inset = if spec.ignore_arrow {
                0.0
            } else {
                ARROW_END_INSET
            };
            let x_start = point_x(request.points, spec.start_index, 0.0);
            let x_end = point_x(request.points, spec.end_index, width);

            self.painter.draw_mark_line(&MarkLinePrimitive::new(
                x_start,
                x_end - end_inset,
                y,
                style,
                !spec.ignore_arrow,
            ))?;

            if !spec.hide_value {
                let text = self.formatter.format(value);
                let extent = self.painter.measure_text(&text, font);
                self.painter.draw_text(&TextPrimitive::new(
                    text,
                    width,
                    y + extent.height / 2.0 - 2.0,
                    TextStyle {
                        font: font.clone(),
                        color: font_color,
                    },
                    TextHAlign::Left,
                ))?;
            }

            // Band rectangles stay well-formed even when the value maps
            // outside the plotting band.
            let y_band = y.clamp(0.0, band_height);
            if let Some(above) = spec.above_color {
                self.painter
                    .fill_rect(&RectPrimitive::from_ltrb(0.0, 0.0, width, y_band, above))?;
            }
            if let Some(below) = spec.below_color {
                self.painter.fill_rect(&RectPrimitive::from_ltrb(
                    0.0,
                    y_band,
                    width,
                    band_height,
                    below,
                ))?;
            }
        }

        Ok(())
    }
}

fn resolve_style(spec: &AnnotationSpec, request: &MarkLineRequest<'_>) -> MarkLineStyle {
    let stroke_width = if spec.stroke_width != 0.0 {
        spec.stroke_width
    } else {
        DEFAULT_STROKE_WIDTH
    };
    let stroke_style = if spec.ignore_dashed {
        LineStrokeStyle::Solid
    } else {
        LineStrokeStyle::dashed(DASH_PATTERN)
    };

    MarkLineStyle {
        stroke_color: spec.stroke_color.unwrap_or(request.stroke_color),
        fill_color: spec.fill_color.unwrap_or(request.fill_color),
        stroke_width,
        stroke_style,
    }
}

fn annotated_value(spec: &AnnotationSpec, summary: SeriesSummary) -> f64 {
    match spec.kind {
        AnnotationKind::Maximum => summary.max,
        AnnotationKind::Minimum => summary.min,
        AnnotationKind::Custom => spec.custom_value,
        AnnotationKind::Average => summary.average,
        AnnotationKind::Other => {
            warn!("unrecognized annotation kind, using series average");
            summary.average
        }
    }
}

fn point_x(points: &[AxisPoint], index: usize, edge: f64) -> f64 {
    if index == 0 {
        return edge;
    }
    match points.get(index) {
        Some(point) => point.x,
        None => {
            warn!(
                index,
                points = points.len(),
                "axis point index out of range, using canvas edge"
            );
            edge
        }
    }
}
