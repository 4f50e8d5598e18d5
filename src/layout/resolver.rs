//! Block layout resolution.
//!
//! Assigns each content block a presentation variant and width class from
//! its position and content. Rules are tried in order and the first match
//! wins:
//!
//! 1. the first image or video becomes the `hero` (full width), once per pass
//! 2. quotes become a `pullquote` (wide) when short, a plain `quote` otherwise
//! 3. an image directly after another image is shown `inline`
//! 4. a level 1-2 heading among the first blocks becomes a `deck` (wide)
//! 5. anything else is `default`
//!
//! A block carrying an author-supplied `variant` or `align` skips all of the
//! above and keeps what the author chose.

use crate::model::{Alignment, BlockType, Computed, ContentBlock, RenderDirective, Variant};

use super::LayoutOptions;

/// State carried from one block to the next within a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PassState {
    hero_claimed: bool,
}

/// Resolves content blocks into render directives.
#[derive(Debug, Clone, Default)]
pub struct LayoutResolver {
    options: LayoutOptions,
}

impl LayoutResolver {
    /// Create a resolver with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Resolve every block into a directive, preserving order and length.
    pub fn resolve(&self, blocks: &[ContentBlock]) -> Vec<RenderDirective> {
        blocks
            .iter()
            .zip(self.compute(blocks))
            .map(|(block, computed)| RenderDirective::new(block.clone(), computed))
            .collect()
    }

    /// Compute only the presentation part, one entry per block.
    pub fn compute(&self, blocks: &[ContentBlock]) -> Vec<Computed> {
        let (state, computed) = blocks.iter().enumerate().fold(
            (PassState::default(), Vec::with_capacity(blocks.len())),
            |(state, mut out), (index, block)| {
                let previous = index.checked_sub(1).map(|i| &blocks[i]);
                let (computed, state) = self.classify(block, index, previous, state);
                out.push(computed);
                (state, out)
            },
        );

        log::debug!(
            "Resolved layout for {} blocks (hero claimed: {})",
            blocks.len(),
            state.hero_claimed
        );

        computed
    }

    fn classify(
        &self,
        block: &ContentBlock,
        index: usize,
        previous: Option<&ContentBlock>,
        state: PassState,
    ) -> (Computed, PassState) {
        if block.has_manual_override() {
            return (manual_directive(block), state);
        }

        if self.options.hero_media && !state.hero_claimed && block.block_type.is_visual_media() {
            return (
                Computed::new(Variant::Hero, Alignment::Full),
                PassState { hero_claimed: true },
            );
        }

        let computed = match block.block_type {
            BlockType::Quote => block
                .quote_text()
                .map(|text| self.size_quote(text))
                .unwrap_or_default(),
            BlockType::Image
                if previous.is_some_and(|prev| prev.block_type == BlockType::Image) =>
            {
                Computed::new(Variant::Inline, Alignment::Normal)
            }
            BlockType::Heading if index < self.options.deck_index_limit => {
                match block.heading_level() {
                    Some(level) if (1..=self.options.deck_max_level).contains(&level) => {
                        Computed::new(Variant::Deck, Alignment::Wide)
                    }
                    _ => Computed::default(),
                }
            }
            _ => Computed::default(),
        };

        (computed, state)
    }

    fn size_quote(&self, text: &str) -> Computed {
        // Unicode White_Space plus U+FEFF
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if trimmed.chars().count() <= self.options.pullquote_max_chars {
            Computed::new(Variant::Pullquote, Alignment::Wide)
        } else {
            Computed::new(Variant::Quote, Alignment::Normal)
        }
    }
}

/// Directive for a block the author pinned by hand.
fn manual_directive(block: &ContentBlock) -> Computed {
    let variant = block.variant_override().map(Variant::from).unwrap_or_default();
    let align = match block.align_override() {
        Some(name) => Alignment::parse(name).unwrap_or_else(|| {
            log::debug!(
                "Block {:?} has unrecognised align {:?}, using normal",
                block.id,
                name
            );
            Alignment::Normal
        }),
        None => Alignment::Normal,
    };
    Computed::new(variant, align)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn computed(blocks: &[ContentBlock]) -> Vec<String> {
        LayoutResolver::new()
            .compute(blocks)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(LayoutResolver::new().resolve(&[]).is_empty());
    }

    #[test]
    fn test_first_video_is_hero() {
        let blocks = vec![
            ContentBlock::paragraph("p", "Intro"),
            ContentBlock::video("v", "/clip.mp4"),
            ContentBlock::image("i", "/a.jpg"),
        ];
        assert_eq!(
            computed(&blocks),
            vec!["default/normal", "hero/full", "default/normal"]
        );
    }

    #[test]
    fn test_audio_is_never_hero() {
        let blocks = vec![
            ContentBlock::audio("a", "/song.mp3"),
            ContentBlock::image("i", "/a.jpg"),
        ];
        assert_eq!(computed(&blocks), vec!["default/normal", "hero/full"]);
    }

    #[test]
    fn test_inline_needs_direct_predecessor() {
        let blocks = vec![
            ContentBlock::image("i1", "/1.jpg"),
            ContentBlock::paragraph("p", "Between"),
            ContentBlock::image("i2", "/2.jpg"),
            ContentBlock::image("i3", "/3.jpg"),
        ];
        assert_eq!(
            computed(&blocks),
            vec!["hero/full", "default/normal", "default/normal", "inline/normal"]
        );
    }

    #[test]
    fn test_image_after_video_is_not_inline() {
        let blocks = vec![
            ContentBlock::video("v", "/clip.mp4"),
            ContentBlock::image("i", "/a.jpg"),
        ];
        assert_eq!(computed(&blocks), vec!["hero/full", "default/normal"]);
    }

    #[test]
    fn test_image_after_overridden_image_is_inline() {
        // Adjacency looks at the previous block's type only.
        let blocks = vec![
            ContentBlock::image("i1", "/1.jpg").with_variant("gallery"),
            ContentBlock::image("i2", "/2.jpg"),
            ContentBlock::image("i3", "/3.jpg"),
        ];
        assert_eq!(
            computed(&blocks),
            vec!["gallery/normal", "hero/full", "inline/normal"]
        );
    }

    #[test]
    fn test_deck_index_limit() {
        let blocks = vec![
            ContentBlock::paragraph("p1", "a"),
            ContentBlock::paragraph("p2", "b"),
            ContentBlock::heading("h1", 2, "Third"),
            ContentBlock::heading("h2", 1, "Fourth"),
        ];
        assert_eq!(
            computed(&blocks),
            vec!["default/normal", "default/normal", "deck/wide", "default/normal"]
        );
    }

    #[test]
    fn test_heading_level_zero_is_not_deck() {
        let blocks = vec![ContentBlock::heading("h", 0, "Zero")];
        assert_eq!(computed(&blocks), vec!["default/normal"]);
    }

    #[test]
    fn test_malformed_data_falls_back() {
        let blocks = vec![
            ContentBlock::new("h", BlockType::Heading, json!({"level": "1"})),
            ContentBlock::new("q", BlockType::Quote, json!({"text": ["not", "text"]})),
            ContentBlock::new("q2", BlockType::Quote, serde_json::Value::Null),
        ];
        assert_eq!(
            computed(&blocks),
            vec!["default/normal", "default/normal", "default/normal"]
        );
    }

    #[test]
    fn test_quote_trims_whitespace() {
        let text = format!("  {}\n\n", "x".repeat(140));
        let blocks = vec![ContentBlock::quote("q", text)];
        assert_eq!(computed(&blocks), vec!["pullquote/wide"]);
    }

    #[test]
    fn test_quote_trims_byte_order_mark() {
        let text = format!("\u{feff}{}\u{feff} ", "x".repeat(140));
        let blocks = vec![ContentBlock::quote("q", text)];
        assert_eq!(computed(&blocks), vec!["pullquote/wide"]);

        let inner = format!("{}\u{feff}{}", "x".repeat(70), "x".repeat(70));
        let blocks = vec![ContentBlock::quote("q", inner)];
        assert_eq!(computed(&blocks), vec!["quote/normal"]);
    }

    #[test]
    fn test_quote_counts_characters_not_bytes() {
        let blocks = vec![ContentBlock::quote("q", "é".repeat(140))];
        assert_eq!(computed(&blocks), vec!["pullquote/wide"]);
    }

    #[test]
    fn test_override_with_align_only() {
        let blocks = vec![ContentBlock::image("i", "/a.jpg").with_align("wide")];
        assert_eq!(computed(&blocks), vec!["default/wide"]);
    }

    #[test]
    fn test_override_with_unknown_align() {
        let blocks = vec![ContentBlock::quote("q", "Short").with_align("center")];
        assert_eq!(computed(&blocks), vec!["default/normal"]);
    }

    #[test]
    fn test_custom_options() {
        let resolver = LayoutResolver::with_options(
            LayoutOptions::new()
                .with_pullquote_max_chars(3)
                .with_deck_max_level(3)
                .without_hero(),
        );
        let blocks = vec![
            ContentBlock::heading("h", 3, "Sub"),
            ContentBlock::image("i", "/a.jpg"),
            ContentBlock::quote("q", "four"),
        ];
        let result: Vec<String> = resolver
            .compute(&blocks)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(result, vec!["deck/wide", "default/normal", "quote/normal"]);
    }

    #[test]
    fn test_resolve_does_not_mutate_input() {
        let blocks = vec![
            ContentBlock::image("i", "/a.jpg"),
            ContentBlock::quote("q", "Short"),
        ];
        let before = blocks.clone();
        let directives = LayoutResolver::new().resolve(&blocks);

        assert_eq!(blocks, before);
        assert_eq!(directives[0].block, blocks[0]);
        assert_eq!(directives[1].block, blocks[1]);
    }
}
