//! Rendering utilities for build logs and CI surfaces (Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod log_line;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use log_line::render_log_line;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
