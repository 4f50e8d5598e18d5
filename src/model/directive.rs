//! Computed presentation directives.

use super::ContentBlock;
use serde::{Deserialize, Serialize};

/// Width/alignment class of a rendered block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Text column width (default)
    #[default]
    Normal,
    /// Wider than the text column
    Wide,
    /// Edge to edge
    Full,
}

impl Alignment {
    /// Lowercase name used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Normal => "normal",
            Alignment::Wide => "wide",
            Alignment::Full => "full",
        }
    }

    /// Parse an alignment name (ASCII case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        [Alignment::Normal, Alignment::Wide, Alignment::Full]
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual treatment of a rendered block.
///
/// Serialized as a plain string; author-supplied names that are not one of
/// the built-in treatments are kept as [`Variant::Custom`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Variant {
    /// No special treatment
    #[default]
    Default,
    /// The single prominent media block of a post
    Hero,
    /// Short, emphasized quotation
    Pullquote,
    /// Regular block quotation
    Quote,
    /// Image shown inline with a preceding image
    Inline,
    /// Lede-style heading near the top
    Deck,
    /// Author-defined treatment
    Custom(String),
}

impl Variant {
    /// Name used in documents.
    pub fn as_str(&self) -> &str {
        match self {
            Variant::Default => "default",
            Variant::Hero => "hero",
            Variant::Pullquote => "pullquote",
            Variant::Quote => "quote",
            Variant::Inline => "inline",
            Variant::Deck => "deck",
            Variant::Custom(name) => name.as_str(),
        }
    }

    /// Check if this is an author-defined variant.
    pub fn is_custom(&self) -> bool {
        matches!(self, Variant::Custom(_))
    }
}

impl From<&str> for Variant {
    fn from(name: &str) -> Self {
        match name {
            "default" => Variant::Default,
            "hero" => Variant::Hero,
            "pullquote" => Variant::Pullquote,
            "quote" => Variant::Quote,
            "inline" => Variant::Inline,
            "deck" => Variant::Deck,
            other => Variant::Custom(other.to_string()),
        }
    }
}

impl From<String> for Variant {
    fn from(name: String) -> Self {
        match Variant::from(name.as_str()) {
            Variant::Custom(_) => Variant::Custom(name),
            builtin => builtin,
        }
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Custom(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The presentation hint computed for one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Computed {
    /// Visual treatment
    pub variant: Variant,
    /// Width class
    pub align: Alignment,
}

impl Computed {
    /// Create a computed directive.
    pub fn new(variant: Variant, align: Alignment) -> Self {
        Self { variant, align }
    }
}

impl std::fmt::Display for Computed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.variant, self.align)
    }
}

/// A content block together with its computed presentation.
///
/// Produced fresh on every layout pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDirective {
    /// The source block, unchanged
    #[serde(flatten)]
    pub block: ContentBlock,

    /// Computed presentation
    pub computed: Computed,
}

impl RenderDirective {
    /// Attach a computed presentation to a block.
    pub fn new(block: ContentBlock, computed: Computed) -> Self {
        Self { block, computed }
    }

    /// Computed variant.
    pub fn variant(&self) -> &Variant {
        &self.computed.variant
    }

    /// Computed alignment.
    pub fn align(&self) -> Alignment {
        self.computed.align
    }
}
