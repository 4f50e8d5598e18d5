//! Content model types.
//!
//! Blocks come in from the authoring side, directives go out to the
//! presentation side. Nothing here is persisted by this crate.

mod block;
mod directive;
mod post;

pub use block::{BlockData, BlockType, ContentBlock, MediaSource};
pub use directive::{Alignment, Computed, RenderDirective, Variant};
pub use post::{Post, PostMetadata};
