//! # postlayout
//!
//! Rule-based presentation layout for blog post content blocks.
//!
//! Given the ordered blocks of a post (headings, paragraphs, images, videos,
//! audio, quotes, links), this library computes for each block a visual
//! variant and width class that a front end can map to concrete styling.
//!
//! ## Quick Start
//!
//! ```
//! use postlayout::{resolve, ContentBlock};
//!
//! let blocks = vec![
//!     ContentBlock::paragraph("p1", "We drove north at dawn."),
//!     ContentBlock::image("i1", "/media/road.jpg"),
//!     ContentBlock::image("i2", "/media/lake.jpg"),
//! ];
//!
//! let directives = resolve(&blocks);
//! assert_eq!(directives[1].computed.to_string(), "hero/full");
//! assert_eq!(directives[2].computed.to_string(), "inline/normal");
//! ```
//!
//! ## Features
//!
//! - **Manual overrides**: an author-set `variant` or `align` always wins
//! - **Hero media**: the first image or video is promoted once per post
//! - **Quote sizing**: short quotes become pullquotes
//! - **Total over bad input**: malformed block data degrades to the default
//! - **Batch resolution**: independent posts are resolved with Rayon

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutOptions, LayoutResolver};
pub use model::{
    Alignment, BlockData, BlockType, Computed, ContentBlock, MediaSource, Post, PostMetadata,
    RenderDirective, Variant,
};
pub use parser::{ErrorMode, ParseOptions, PostParser};
pub use render::{JsonFormat, LayoutStats, RenderOptions};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Resolve blocks into render directives with default options.
///
/// The output has the same length and order as `blocks`.
pub fn resolve(blocks: &[ContentBlock]) -> Vec<RenderDirective> {
    LayoutResolver::new().resolve(blocks)
}

/// Resolve blocks into render directives with custom options.
pub fn resolve_with_options(
    blocks: &[ContentBlock],
    options: &LayoutOptions,
) -> Vec<RenderDirective> {
    LayoutResolver::with_options(options.clone()).resolve(blocks)
}

/// Resolve many independent posts.
///
/// Each post gets its own pass, so hero promotion never leaks between
/// posts. When [`ParseOptions::parallel`] is set the posts are spread over
/// the Rayon pool; the output order always matches `posts`.
pub fn resolve_posts(
    posts: &[Post],
    options: &LayoutOptions,
    parse_options: &ParseOptions,
) -> Vec<Vec<RenderDirective>> {
    let resolver = LayoutResolver::with_options(options.clone());
    if parse_options.parallel {
        posts
            .par_iter()
            .map(|post| resolver.resolve(&post.blocks))
            .collect()
    } else {
        posts
            .iter()
            .map(|post| resolver.resolve(&post.blocks))
            .collect()
    }
}

/// Load a post from a JSON file.
///
/// # Example
///
/// ```no_run
/// use postlayout::parse_file;
///
/// let post = parse_file("post.json").unwrap();
/// println!("Blocks: {}", post.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Post> {
    PostParser::open(path)?.parse()
}

/// Load a post from a JSON file with custom options.
///
/// # Example
///
/// ```no_run
/// use postlayout::{parse_file_with_options, ParseOptions};
///
/// let post = parse_file_with_options("post.json", ParseOptions::new().lenient()).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Post> {
    PostParser::open_with_options(path, options)?.parse()
}

/// Load a post from a JSON string.
pub fn parse_str(source: &str) -> Result<Post> {
    parse_bytes(source.as_bytes())
}

/// Load a post from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Post> {
    PostParser::from_bytes(data)?.parse()
}

/// Load a post from JSON bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Post> {
    PostParser::from_bytes_with_options(data, options)?.parse()
}

/// Load a post from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Post> {
    PostParser::from_reader(reader)?.parse()
}

/// Builder for loading posts and resolving their layout.
///
/// # Example
///
/// ```no_run
/// use postlayout::Postlayout;
///
/// let json = Postlayout::new()
///     .lenient()
///     .with_stats()
///     .parse("post.json")?
///     .to_json()?;
/// # Ok::<(), postlayout::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Postlayout {
    parse_options: ParseOptions,
    layout_options: LayoutOptions,
    render_options: RenderOptions,
}

impl Postlayout {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set layout options.
    pub fn with_layout(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Set render options.
    pub fn with_render(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Include statistics in rendered output.
    pub fn with_stats(mut self) -> Self {
        self.render_options = self.render_options.with_stats(true);
        self
    }

    /// Include frontmatter in text output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Emit compact JSON.
    pub fn compact(mut self) -> Self {
        self.render_options = self.render_options.compact();
        self
    }

    /// Load a post file and resolve its layout.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<PostLayout> {
        let post = PostParser::open_with_options(path, self.parse_options.clone())?.parse()?;
        Ok(self.layout(post))
    }

    /// Load a post from a JSON string and resolve its layout.
    pub fn parse_str(self, source: &str) -> Result<PostLayout> {
        let post =
            PostParser::from_bytes_with_options(source.as_bytes(), self.parse_options.clone())?
                .parse()?;
        Ok(self.layout(post))
    }

    /// Resolve the layout of an already loaded post.
    pub fn layout(self, post: Post) -> PostLayout {
        let directives = LayoutResolver::with_options(self.layout_options).resolve(&post.blocks);
        PostLayout {
            post,
            directives,
            render_options: self.render_options,
        }
    }
}

/// A post together with its resolved directives.
pub struct PostLayout {
    /// The loaded post
    pub post: Post,
    directives: Vec<RenderDirective>,
    render_options: RenderOptions,
}

impl PostLayout {
    /// Resolved directives, one per block.
    pub fn directives(&self) -> &[RenderDirective] {
        &self.directives
    }

    /// Layout statistics.
    pub fn stats(&self) -> LayoutStats {
        LayoutStats::from_directives(&self.directives)
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json_post(&self.post, &self.directives, &self.render_options)
    }

    /// Convert to a plain text report.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.post, &self.directives, &self.render_options)
    }

    /// Take the directives.
    pub fn into_directives(self) -> Vec<RenderDirective> {
        self.directives
    }
}
