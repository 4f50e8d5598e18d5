//! Content block types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of an authored content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Section heading (`{level, text}`)
    Heading,
    /// Body text (`{text}`)
    Paragraph,
    /// Still image (`{src | mediaId, caption?}`)
    Image,
    /// Video clip (`{src | mediaId, caption?}`)
    Video,
    /// Audio clip (`{src | mediaId, caption?}`)
    Audio,
    /// Quotation (`{text, author?}`)
    Quote,
    /// Outbound link (`{href, label}`)
    Link,
    /// Any tag this crate does not know about
    #[serde(other)]
    Unknown,
}

impl BlockType {
    /// Lowercase tag as it appears in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::Audio => "audio",
            BlockType::Quote => "quote",
            BlockType::Link => "link",
            BlockType::Unknown => "unknown",
        }
    }

    /// Parse a document tag, mapping anything unrecognised to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "heading" => BlockType::Heading,
            "paragraph" => BlockType::Paragraph,
            "image" => BlockType::Image,
            "video" => BlockType::Video,
            "audio" => BlockType::Audio,
            "quote" => BlockType::Quote,
            "link" => BlockType::Link,
            _ => BlockType::Unknown,
        }
    }

    /// Image or video: the kinds that can be promoted to hero.
    pub fn is_visual_media(&self) -> bool {
        matches!(self, BlockType::Image | BlockType::Video)
    }

    /// Any media kind, audio included.
    pub fn is_media(&self) -> bool {
        matches!(self, BlockType::Image | BlockType::Video | BlockType::Audio)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One authored unit of post content.
///
/// `data` is kept as raw JSON so that a block with a malformed payload can
/// still be carried through a layout pass. Use [`ContentBlock::payload`] for a
/// typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Opaque identifier, stable across edits
    #[serde(default)]
    pub id: String,

    /// Block kind
    #[serde(rename = "type")]
    pub block_type: BlockType,

    /// Type-specific payload
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,

    /// Manual variant override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Manual alignment override (normal, wide or full)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl ContentBlock {
    /// Create a block with an arbitrary payload.
    pub fn new(id: impl Into<String>, block_type: BlockType, data: Value) -> Self {
        Self {
            id: id.into(),
            block_type,
            data,
            variant: None,
            align: None,
        }
    }

    /// Create a heading block.
    pub fn heading(id: impl Into<String>, level: u8, text: impl Into<String>) -> Self {
        Self::new(
            id,
            BlockType::Heading,
            object([
                ("level", Value::from(level)),
                ("text", Value::String(text.into())),
            ]),
        )
    }

    /// Create a paragraph block.
    pub fn paragraph(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, BlockType::Paragraph, object([("text", Value::String(text.into()))]))
    }

    /// Create an image block pointing at a URL.
    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, BlockType::Image, object([("src", Value::String(src.into()))]))
    }

    /// Create a video block pointing at a URL.
    pub fn video(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, BlockType::Video, object([("src", Value::String(src.into()))]))
    }

    /// Create an audio block pointing at a URL.
    pub fn audio(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, BlockType::Audio, object([("src", Value::String(src.into()))]))
    }

    /// Create a quote block.
    pub fn quote(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, BlockType::Quote, object([("text", Value::String(text.into()))]))
    }

    /// Create a link block.
    pub fn link(id: impl Into<String>, href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            id,
            BlockType::Link,
            object([
                ("href", Value::String(href.into())),
                ("label", Value::String(label.into())),
            ]),
        )
    }

    /// Set the manual variant override.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the manual alignment override.
    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Build a placeholder for a block that could not be read.
    ///
    /// The result is always [`BlockType::Unknown`] with no overrides, so it
    /// resolves to `default/normal` and never claims hero or starts an image
    /// run. Only a readable `id` (numbers are stringified) and `data` are kept.
    pub fn from_value_lenient(value: &Value) -> Self {
        let id = match value.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            id,
            block_type: BlockType::Unknown,
            data: value.get("data").cloned().unwrap_or(Value::Null),
            variant: None,
            align: None,
        }
    }

    /// The manual variant, if set and non-empty.
    pub fn variant_override(&self) -> Option<&str> {
        self.variant.as_deref().filter(|v| !v.is_empty())
    }

    /// The manual alignment, if set and non-empty.
    pub fn align_override(&self) -> Option<&str> {
        self.align.as_deref().filter(|a| !a.is_empty())
    }

    /// Whether the author pinned this block's presentation.
    pub fn has_manual_override(&self) -> bool {
        self.variant_override().is_some() || self.align_override().is_some()
    }

    /// Typed view of the payload for this block's type.
    pub fn payload(&self) -> BlockData<'_> {
        let text = |key: &str| self.data.get(key).and_then(Value::as_str);

        match self.block_type {
            BlockType::Heading => BlockData::Heading {
                level: self.data.get("level").and_then(read_level),
                text: text("text"),
            },
            BlockType::Paragraph => BlockData::Paragraph { text: text("text") },
            BlockType::Image | BlockType::Video | BlockType::Audio => BlockData::Media {
                source: text("src")
                    .map(MediaSource::Url)
                    .or_else(|| text("mediaId").map(MediaSource::MediaId)),
                caption: text("caption"),
            },
            BlockType::Quote => BlockData::Quote {
                text: text("text"),
                author: text("author"),
            },
            BlockType::Link => BlockData::Link {
                href: text("href"),
                label: text("label"),
            },
            BlockType::Unknown => BlockData::Unknown,
        }
    }

    /// Heading level, when this is a heading with a numeric level.
    pub fn heading_level(&self) -> Option<u8> {
        match self.payload() {
            BlockData::Heading { level, .. } => level,
            _ => None,
        }
    }

    /// Quote text, when this is a quote whose text is a string.
    pub fn quote_text(&self) -> Option<&str> {
        match self.payload() {
            BlockData::Quote { text, .. } => text,
            _ => None,
        }
    }

    /// Readable text carried by the block, if any.
    pub fn plain_text(&self) -> Option<&str> {
        match self.payload() {
            BlockData::Heading { text, .. }
            | BlockData::Paragraph { text }
            | BlockData::Quote { text, .. } => text,
            BlockData::Media { caption, .. } => caption,
            BlockData::Link { label, .. } => label,
            BlockData::Unknown => None,
        }
    }
}

/// Borrowed, typed view of a block's `data`.
///
/// Every field is optional: a value of the wrong JSON type reads as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockData<'a> {
    /// Heading payload
    Heading {
        /// Level 1-3 (any integral number is accepted here)
        level: Option<u8>,
        /// Heading text
        text: Option<&'a str>,
    },
    /// Paragraph payload
    Paragraph {
        /// Body text
        text: Option<&'a str>,
    },
    /// Image, video or audio payload
    Media {
        /// Where the media lives
        source: Option<MediaSource<'a>>,
        /// Caption shown under the media
        caption: Option<&'a str>,
    },
    /// Quote payload
    Quote {
        /// Quoted text
        text: Option<&'a str>,
        /// Attribution
        author: Option<&'a str>,
    },
    /// Link payload
    Link {
        /// Target URL
        href: Option<&'a str>,
        /// Link label
        label: Option<&'a str>,
    },
    /// Payload of an unknown block type
    Unknown,
}

/// Location of a media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource<'a> {
    /// Direct URL (`src`)
    Url(&'a str),
    /// Reference into the media library (`mediaId`)
    MediaId(&'a str),
}

fn read_level(value: &Value) -> Option<u8> {
    let Value::Number(number) = value else {
        return None;
    };
    let level = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u8::MAX))
            .map(|f| f as u64)
    })?;
    u8::try_from(level).ok()
}

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    let map: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_type_tags() {
        assert_eq!(BlockType::from_tag("quote"), BlockType::Quote);
        assert_eq!(BlockType::from_tag("gallery"), BlockType::Unknown);
        assert_eq!(BlockType::Video.to_string(), "video");
        assert!(BlockType::Image.is_visual_media());
        assert!(!BlockType::Audio.is_visual_media());
        assert!(BlockType::Audio.is_media());
    }

    #[test]
    fn test_deserialize_unknown_type() {
        let block: ContentBlock =
            serde_json::from_value(json!({"id": "b1", "type": "embed"})).unwrap();
        assert_eq!(block.block_type, BlockType::Unknown);
        assert!(block.data.is_null());
    }

    #[test]
    fn test_heading_payload() {
        let block = ContentBlock::heading("h", 2, "Intro");
        assert_eq!(block.heading_level(), Some(2));
        assert_eq!(block.plain_text(), Some("Intro"));
    }

    #[test]
    fn test_heading_level_malformed() {
        let block = ContentBlock::new("h", BlockType::Heading, json!({"level": "one"}));
        assert_eq!(block.heading_level(), None);

        let block = ContentBlock::new("h", BlockType::Heading, json!({"level": 1.0}));
        assert_eq!(block.heading_level(), Some(1));

        let block = ContentBlock::new("h", BlockType::Heading, json!({"level": 1.5}));
        assert_eq!(block.heading_level(), None);

        let block = ContentBlock::new("h", BlockType::Heading, json!([1, 2]));
        assert_eq!(block.heading_level(), None);
    }

    #[test]
    fn test_quote_text_malformed() {
        let block = ContentBlock::new("q", BlockType::Quote, json!({"text": 42}));
        assert_eq!(block.quote_text(), None);
    }

    #[test]
    fn test_media_source() {
        let block = ContentBlock::new("m", BlockType::Video, json!({"mediaId": "abc"}));
        assert!(matches!(
            block.payload(),
            BlockData::Media {
                source: Some(MediaSource::MediaId("abc")),
                ..
            }
        ));
    }

    #[test]
    fn test_manual_override() {
        let plain = ContentBlock::image("i", "/a.jpg");
        assert!(!plain.has_manual_override());

        let empty = ContentBlock::image("i", "/a.jpg").with_variant("").with_align("");
        assert!(!empty.has_manual_override());

        let aligned = ContentBlock::image("i", "/a.jpg").with_align("wide");
        assert!(aligned.has_manual_override());
        assert_eq!(aligned.variant_override(), None);
    }

    #[test]
    fn test_from_value_lenient() {
        let value = json!({"id": 7, "type": 3, "variant": false, "align": "full", "data": {"x": 1}});
        let block = ContentBlock::from_value_lenient(&value);
        assert_eq!(block.id, "7");
        assert_eq!(block.block_type, BlockType::Unknown);
        assert_eq!(block.variant, None);
        assert_eq!(block.align, None);
        assert_eq!(block.data, json!({"x": 1}));

        let value = json!({"id": "i", "type": "image", "variant": 5, "data": {"src": "/a.jpg"}});
        let block = ContentBlock::from_value_lenient(&value);
        assert_eq!(block.block_type, BlockType::Unknown);
        assert!(!block.has_manual_override());
    }
}
