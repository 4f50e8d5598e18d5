//! Layout resolution module.

mod options;
mod resolver;

pub use options::LayoutOptions;
pub use resolver::LayoutResolver;
