//! Rendering options and configuration.

use super::JsonFormat;

/// Options for rendering resolved directives.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// JSON output layout
    pub json_format: JsonFormat,

    /// Include YAML frontmatter with post metadata (text output)
    pub include_frontmatter: bool,

    /// Append layout statistics
    pub include_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Emit compact JSON.
    pub fn compact(self) -> Self {
        self.with_json_format(JsonFormat::Compact)
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable statistics.
    pub fn with_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .compact()
            .with_frontmatter(true)
            .with_stats(true);

        assert_eq!(options.json_format, JsonFormat::Compact);
        assert!(options.include_frontmatter);
        assert!(options.include_stats);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.json_format, JsonFormat::Pretty);
        assert!(!options.include_frontmatter);
        assert!(!options.include_stats);
    }
}
