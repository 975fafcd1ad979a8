mod format;
mod renderer;
mod spec;

pub use format::{GroupedFormatter, ValueFormatter};
pub use renderer::{MarkLineRenderer, MarkLineRequest};
pub use spec::{AnnotationGroup, AnnotationKind, AnnotationSpec};
