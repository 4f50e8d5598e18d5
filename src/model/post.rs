//! Post-level types.

use super::ContentBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authored blog post: metadata plus its ordered body blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post metadata (title, slug, etc.)
    #[serde(flatten)]
    pub metadata: PostMetadata,

    /// Body blocks in document order
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Post {
    /// Create a new empty post.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untitled post from a block sequence.
    pub fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            metadata: PostMetadata::default(),
            blocks,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Append a block.
    pub fn add_block(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Number of body blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the post has no body blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Readable text of the post body.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(ContentBlock::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Post metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Post identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Post title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Last modification date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PostMetadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref slug) = self.slug {
            lines.push(format!("slug: \"{}\"", escape_yaml(slug)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self
                .tags
                .iter()
                .map(|t| format!("\"{}\"", escape_yaml(t)))
                .collect();
            lines.push(format!("tags: [{}]", tags.join(", ")));
        }
        if let Some(ref published) = self.published_at {
            lines.push(format!("published: {}", published.to_rfc3339()));
        }
        if let Some(ref updated) = self.updated_at {
            lines.push(format!("updated: {}", updated.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML double-quoted strings.
fn escape_yaml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
