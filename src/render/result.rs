//! Layout statistics.

use crate::model::{RenderDirective, Variant};
use serde::{Deserialize, Serialize};

/// Counts collected over one or more resolved posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of blocks
    pub block_count: u32,

    /// Blocks whose presentation was pinned by the author
    pub override_count: u32,

    /// Blocks shown as hero
    pub hero_count: u32,

    /// Blocks shown as pullquote
    pub pullquote_count: u32,

    /// Blocks shown as regular quote
    pub quote_count: u32,

    /// Images shown inline
    pub inline_count: u32,

    /// Headings shown as deck
    pub deck_count: u32,

    /// Blocks with default presentation
    pub default_count: u32,

    /// Blocks with an author-defined variant
    pub custom_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a directive list.
    pub fn from_directives(directives: &[RenderDirective]) -> Self {
        let mut stats = Self::new();
        for directive in directives {
            stats.record(directive);
        }
        stats
    }

    /// Count one directive.
    pub fn record(&mut self, directive: &RenderDirective) {
        self.block_count += 1;
        if directive.block.has_manual_override() {
            self.override_count += 1;
        }

        let counter = match directive.variant() {
            Variant::Default => &mut self.default_count,
            Variant::Hero => &mut self.hero_count,
            Variant::Pullquote => &mut self.pullquote_count,
            Variant::Quote => &mut self.quote_count,
            Variant::Inline => &mut self.inline_count,
            Variant::Deck => &mut self.deck_count,
            Variant::Custom(_) => &mut self.custom_count,
        };
        *counter += 1;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.block_count += other.block_count;
        self.override_count += other.override_count;
        self.hero_count += other.hero_count;
        self.pullquote_count += other.pullquote_count;
        self.quote_count += other.quote_count;
        self.inline_count += other.inline_count;
        self.deck_count += other.deck_count;
        self.default_count += other.default_count;
        self.custom_count += other.custom_count;
    }
}

impl std::fmt::Display for LayoutStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "blocks: {}, overrides: {}, hero: {}, pullquote: {}, quote: {}, inline: {}, deck: {}, default: {}, custom: {}",
            self.block_count,
            self.override_count,
            self.hero_count,
            self.pullquote_count,
            self.quote_count,
            self.inline_count,
            self.deck_count,
            self.default_count,
            self.custom_count
        )
    }
}
