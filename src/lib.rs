//! markline-rs: mark-line annotation rendering for charts.
//!
//! This crate paints reference lines, threshold value labels, and shaded
//! above/below bands on top of a chart series whose axis geometry is already
//! laid out. Drawing happens through a backend-agnostic `Painter` contract;
//! coordinate mapping, series statistics, value formatting, and font lookup
//! are collaborator interfaces supplied per render request.

pub mod annotation;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use annotation::{
    AnnotationGroup, AnnotationKind, AnnotationSpec, MarkLineRenderer, MarkLineRequest,
};
pub use error::{MarkError, MarkResult};
