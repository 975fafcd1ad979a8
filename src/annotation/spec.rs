use serde::{Deserialize, Serialize};

use crate::error::{MarkError, MarkResult};
use crate::render::Color;

/// How one annotation derives the value it marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Maximum,
    Minimum,
    #[default]
    Average,
    Custom,
    /// Unrecognized kind from external configuration; renders as Average.
    #[serde(other)]
    Other,
}

/// One configured mark line: a reference line at a data-derived or custom
/// value, an optional value label, and optional shaded above/below bands.
///
/// Color overrides are whole-color: an absent override inherits the
/// request-level default, a present one replaces all four channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationSpec {
    pub kind: AnnotationKind,
    /// Annotated value when `kind` is `Custom`; ignored otherwise.
    pub custom_value: f64,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub font_color: Option<Color>,
    /// 0 inherits the default width of 1.
    pub stroke_width: f64,
    pub hide_value: bool,
    pub ignore_dashed: bool,
    pub ignore_arrow: bool,
    /// Index of the axis point the line starts at; 0 selects the canvas left
    /// edge (index 0 is indistinguishable from unset).
    pub start_index: usize,
    /// Index of the axis point the line ends at; 0 selects the canvas right
    /// edge.
    pub end_index: usize,
    /// Shades the plotting band above the line when set.
    pub above_color: Option<Color>,
    /// Shades the plotting band below the line when set.
    pub below_color: Option<Color>,
}

impl Default for AnnotationSpec {
    fn default() -> Self {
        Self {
            kind: AnnotationKind::default(),
            custom_value: 0.0,
            fill_color: None,
            stroke_color: None,
            font_color: None,
            stroke_width: 0.0,
            hide_value: false,
            ignore_dashed: false,
            ignore_arrow: false,
            start_index: 0,
            end_index: 0,
            above_color: None,
            below_color: None,
        }
    }
}

impl AnnotationSpec {
    #[must_use]
    pub fn new(kind: AnnotationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Mark line at a caller-chosen value instead of a series statistic.
    #[must_use]
    pub fn custom(value: f64) -> Self {
        Self {
            kind: AnnotationKind::Custom,
            custom_value: value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_hidden_value(mut self) -> Self {
        self.hide_value = true;
        self
    }

    #[must_use]
    pub fn with_solid_stroke(mut self) -> Self {
        self.ignore_dashed = true;
        self
    }

    #[must_use]
    pub fn with_no_arrow(mut self) -> Self {
        self.ignore_arrow = true;
        self
    }

    #[must_use]
    pub fn with_span(mut self, start_index: usize, end_index: usize) -> Self {
        self.start_index = start_index;
        self.end_index = end_index;
        self
    }

    #[must_use]
    pub fn with_above_color(mut self, color: Color) -> Self {
        self.above_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_below_color(mut self, color: Color) -> Self {
        self.below_color = Some(color);
        self
    }
}

/// Ordered annotations of one series; insertion order is rendering order,
/// so later entries paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnnotationGroup {
    pub specs: Vec<AnnotationSpec>,
}

impl AnnotationGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One spec per statistic kind, the common mark-line shorthand.
    #[must_use]
    pub fn from_kinds(kinds: &[AnnotationKind]) -> Self {
        Self {
            specs: kinds.iter().map(|kind| AnnotationSpec::new(*kind)).collect(),
        }
    }

    #[must_use]
    pub fn with_spec(mut self, spec: AnnotationSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn push(&mut self, spec: AnnotationSpec) {
        self.specs.push(spec);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotationSpec> {
        self.specs.iter()
    }

    pub fn from_json_str(json: &str) -> MarkResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            MarkError::InvalidData(format!("failed to parse annotation group config: {err}"))
        })
    }
}
