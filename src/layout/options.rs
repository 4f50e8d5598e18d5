//! Layout options and configuration.

/// Tunables for the layout heuristics.
///
/// The defaults are the thresholds the blog front end is designed around;
/// changing them is mostly useful for experiments and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Longest trimmed quote (in characters) still shown as a pullquote
    pub pullquote_max_chars: usize,

    /// Headings before this zero-based index may become a deck
    pub deck_index_limit: usize,

    /// Deepest heading level eligible for deck promotion
    pub deck_max_level: u8,

    /// Promote the first image/video to hero
    pub hero_media: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pullquote length threshold.
    pub fn with_pullquote_max_chars(mut self, chars: usize) -> Self {
        self.pullquote_max_chars = chars;
        self
    }

    /// Set how many leading blocks may hold a deck heading.
    pub fn with_deck_index_limit(mut self, limit: usize) -> Self {
        self.deck_index_limit = limit;
        self
    }

    /// Set the deepest heading level promoted to deck.
    pub fn with_deck_max_level(mut self, level: u8) -> Self {
        self.deck_max_level = level;
        self
    }

    /// Enable or disable hero promotion.
    pub fn with_hero_media(mut self, enabled: bool) -> Self {
        self.hero_media = enabled;
        self
    }

    /// Disable hero promotion.
    pub fn without_hero(self) -> Self {
        self.with_hero_media(false)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            pullquote_max_chars: 140,
            deck_index_limit: 3,
            deck_max_level: 2,
            hero_media: true,
        }
    }
}
