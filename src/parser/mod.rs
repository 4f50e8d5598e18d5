//! Post loading module.

mod options;
mod post_parser;

pub use options::{ErrorMode, ParseOptions};
pub use post_parser::PostParser;
