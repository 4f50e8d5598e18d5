//! Rendering module for turning resolved directives into output formats.

mod json;
mod options;
mod result;
mod text;

pub use json::{to_json, to_json_post, JsonFormat};
pub use options::RenderOptions;
pub use result::LayoutStats;
pub use text::to_text;
