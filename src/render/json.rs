//! JSON rendering for resolved directives.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Post, PostMetadata, RenderDirective};

use super::{LayoutStats, RenderOptions};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct PostLayout<'a> {
    #[serde(flatten)]
    metadata: &'a PostMetadata,
    blocks: &'a [RenderDirective],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<LayoutStats>,
}

/// Convert a directive list to a JSON array.
pub fn to_json(directives: &[RenderDirective], format: JsonFormat) -> Result<String> {
    serialize(&directives, format)
}

/// Convert a post and its directives to a single JSON object.
///
/// The object carries the post metadata, the directives under `blocks`, and
/// a `stats` object when requested.
pub fn to_json_post(
    post: &Post,
    directives: &[RenderDirective],
    options: &RenderOptions,
) -> Result<String> {
    let layout = PostLayout {
        metadata: &post.metadata,
        blocks: directives,
        stats: options
            .include_stats
            .then(|| LayoutStats::from_directives(directives)),
    };
    serialize(&layout, options.json_format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutResolver;
    use crate::model::ContentBlock;

    fn sample_post() -> Post {
        let mut post = Post::new().with_title("Test");
        post.add_block(ContentBlock::image("i", "/a.jpg"));
        post
    }

    #[test]
    fn test_to_json_pretty() {
        let post = sample_post();
        let directives = LayoutResolver::new().resolve(&post.blocks);

        let json = to_json(&directives, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"hero\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let post = sample_post();
        let directives = LayoutResolver::new().resolve(&post.blocks);

        let json = to_json(&directives, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_to_json_post_with_stats() {
        let post = sample_post();
        let directives = LayoutResolver::new().resolve(&post.blocks);
        let options = RenderOptions::new().compact().with_stats(true);

        let json = to_json_post(&post, &directives, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Test");
        assert_eq!(value["blocks"][0]["computed"]["align"], "full");
        assert_eq!(value["stats"]["hero_count"], 1);
    }

    #[test]
    fn test_to_json_post_without_stats() {
        let post = sample_post();
        let directives = LayoutResolver::new().resolve(&post.blocks);

        let json = to_json_post(&post, &directives, &RenderOptions::default()).unwrap();
        assert!(!json.contains("\"stats\""));
    }
}
