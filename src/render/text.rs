//! Plain text layout report.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{Post, RenderDirective};

use super::{LayoutStats, RenderOptions};

/// Render a human-readable report, one line per block.
///
/// Columns are index, block type, `variant/align` and block id. Blocks whose
/// presentation was pinned by the author are marked with `*`.
pub fn to_text(
    post: &Post,
    directives: &[RenderDirective],
    options: &RenderOptions,
) -> Result<String> {
    let mut output = String::new();

    if options.include_frontmatter {
        output.push_str(&post.metadata.to_yaml_frontmatter());
    }

    for (index, directive) in directives.iter().enumerate() {
        let marker = if directive.block.has_manual_override() {
            " *"
        } else {
            ""
        };
        writeln!(
            output,
            "{:>4}  {:<9}  {:<18}  {}{}",
            index,
            directive.block.block_type.as_str(),
            directive.computed.to_string(),
            directive.block.id,
            marker
        )
        .map_err(|e| Error::Render(e.to_string()))?;
    }

    if options.include_stats {
        let stats = LayoutStats::from_directives(directives);
        writeln!(output, "\n{}", stats).map_err(|e| Error::Render(e.to_string()))?;
    }

    Ok(output.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutResolver;
    use crate::model::ContentBlock;

    #[test]
    fn test_to_text() {
        let mut post = Post::new().with_title("Gallery");
        post.add_block(ContentBlock::image("cover", "/a.jpg"));
        post.add_block(ContentBlock::image("second", "/b.jpg").with_align("wide"));
        let directives = LayoutResolver::new().resolve(&post.blocks);

        let text = to_text(&post, &directives, &RenderOptions::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("hero/full"));
        assert!(lines[0].ends_with("cover"));
        assert!(lines[1].contains("default/wide"));
        assert!(lines[1].ends_with("second *"));
    }

    #[test]
    fn test_to_text_with_frontmatter_and_stats() {
        let mut post = Post::new().with_title("Notes");
        post.add_block(ContentBlock::paragraph("p", "Body"));
        let directives = LayoutResolver::new().resolve(&post.blocks);
        let options = RenderOptions::new().with_frontmatter(true).with_stats(true);

        let text = to_text(&post, &directives, &options).unwrap();
        assert!(text.starts_with("---\ntitle: \"Notes\""));
        assert!(text.ends_with("custom: 0"));
    }
}
