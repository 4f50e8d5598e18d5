//! postlayout CLI - resolve blog post block layouts

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use postlayout::{
    parse_file_with_options, render, resolve_posts, LayoutOptions, LayoutStats, ParseOptions,
    Post, RenderDirective, RenderOptions,
};

#[derive(Parser)]
#[command(name = "postlayout")]
#[command(version)]
#[command(about = "Resolve presentation layout for blog post content blocks", long_about = None)]
struct Cli {
    /// Input post file (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve layout directives for one or more posts
    Resolve {
        /// Input post files (JSON)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input) or directory (stdout if not specified)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputMode,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Include layout statistics
        #[arg(long)]
        stats: bool,

        /// Include YAML frontmatter (text format)
        #[arg(short, long)]
        frontmatter: bool,

        /// Repair unreadable blocks instead of failing
        #[arg(long)]
        lenient: bool,

        /// Resolve posts one at a time
        #[arg(long)]
        no_parallel: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show aggregated layout statistics
    Stats {
        /// Input post files (JSON)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Repair unreadable blocks instead of failing
        #[arg(long)]
        lenient: bool,

        /// Resolve posts one at a time
        #[arg(long)]
        no_parallel: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Validate a post file in strict mode
    Check {
        /// Input post file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Layout heuristic tunables.
#[derive(Args, Clone)]
struct LayoutArgs {
    /// Longest quote (characters) shown as a pullquote
    #[arg(long, env = "POSTLAYOUT_PULLQUOTE_MAX", default_value_t = 140)]
    pullquote_max: usize,

    /// Headings before this index may become a deck
    #[arg(long, env = "POSTLAYOUT_DECK_LIMIT", default_value_t = 3)]
    deck_limit: usize,

    /// Do not promote the first image/video to hero
    #[arg(long)]
    no_hero: bool,
}

impl From<LayoutArgs> for LayoutOptions {
    fn from(args: LayoutArgs) -> Self {
        LayoutOptions::new()
            .with_pullquote_max_chars(args.pullquote_max)
            .with_deck_index_limit(args.deck_limit)
            .with_hero_media(!args.no_hero)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// JSON document with directives
    Json,
    /// Plain text report
    Text,
}

impl OutputMode {
    fn extension(self) -> &'static str {
        match self {
            OutputMode::Json => "layout.json",
            OutputMode::Text => "layout.txt",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Resolve {
            inputs,
            output,
            format,
            compact,
            stats,
            frontmatter,
            lenient,
            no_parallel,
            layout,
        }) => {
            let mut render_options = RenderOptions::new()
                .with_stats(stats)
                .with_frontmatter(frontmatter);
            if compact {
                render_options = render_options.compact();
            }
            cmd_resolve(
                &inputs,
                output.as_deref(),
                format,
                &render_options,
                parse_options(lenient, no_parallel),
                layout.into(),
            )
        }
        Some(Commands::Stats {
            inputs,
            lenient,
            no_parallel,
            layout,
        }) => cmd_stats(&inputs, parse_options(lenient, no_parallel), layout.into()),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: resolve a single file to stdout
            if let Some(input) = cli.input {
                cmd_resolve(
                    &[input],
                    None,
                    OutputMode::Json,
                    &RenderOptions::default(),
                    ParseOptions::default(),
                    LayoutOptions::default(),
                )
            } else {
                println!("{}", "Usage: postlayout <FILE>".yellow());
                println!("       postlayout --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(lenient: bool, no_parallel: bool) -> ParseOptions {
    let options = ParseOptions::new().with_parallel(!no_parallel);
    if lenient {
        options.lenient()
    } else {
        options
    }
}

/// Load every input, showing progress when there is more than one.
fn load_posts(
    inputs: &[PathBuf],
    options: &ParseOptions,
) -> Result<Vec<Post>, Box<dyn std::error::Error>> {
    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut posts = Vec::with_capacity(inputs.len());
    for input in inputs {
        pb.set_message(input.display().to_string());
        let post = parse_file_with_options(input, options.clone())
            .map_err(|e| format!("{}: {}", input.display(), e))?;
        posts.push(post);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(posts)
}

fn render_post(
    post: &Post,
    directives: &[RenderDirective],
    format: OutputMode,
    options: &RenderOptions,
) -> postlayout::Result<String> {
    match format {
        OutputMode::Json => render::to_json_post(post, directives, options),
        OutputMode::Text => render::to_text(post, directives, options),
    }
}

fn cmd_resolve(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: OutputMode,
    render_options: &RenderOptions,
    parse_options: ParseOptions,
    layout_options: LayoutOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let posts = load_posts(inputs, &parse_options)?;
    log::debug!("Resolving {} post(s) with {:?}", posts.len(), layout_options);
    let layouts = resolve_posts(&posts, &layout_options, &parse_options);

    // Single input: write to the given file or stdout
    if let ([input], [post], [directives]) = (inputs, posts.as_slice(), layouts.as_slice()) {
        let rendered = render_post(post, directives, format, render_options)?;
        match output {
            Some(path) if !path.is_dir() => {
                fs::write(path, &rendered)?;
                println!("{} {}", "Saved to".green(), path.display());
            }
            Some(dir) => {
                let path = dir.join(output_name(input, format));
                fs::write(&path, &rendered)?;
                println!("{} {}", "Saved to".green(), path.display());
            }
            None => println!("{}", rendered),
        }
        return Ok(());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let names = output_names(inputs, format);

    println!("{}", "Output files:".green().bold());
    let last = inputs.len().saturating_sub(1);
    for (i, ((name, post), directives)) in names.iter().zip(&posts).zip(&layouts).enumerate() {
        let rendered = render_post(post, directives, format, render_options)?;
        fs::write(output_dir.join(name), &rendered)?;

        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(())
}

fn output_name(input: &Path, format: OutputMode) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}.{}", stem, format.extension())
}

/// Output file names for a batch, one per input.
///
/// Inputs sharing a file stem (`a/post.json`, `b/post.json`) get a numeric
/// suffix (`post.layout.json`, `post-2.layout.json`) so no output is
/// overwritten.
fn output_names(inputs: &[PathBuf], format: OutputMode) -> Vec<String> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = output_name(input, format);
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{}-{}.{}", stem, n, format.extension());
                n += 1;
            }
            if n > 2 {
                log::warn!("{} written as {} to avoid a name clash", input.display(), name);
            }
            name
        })
        .collect()
}

fn cmd_stats(
    inputs: &[PathBuf],
    parse_options: ParseOptions,
    layout_options: LayoutOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let posts = load_posts(inputs, &parse_options)?;
    let layouts = resolve_posts(&posts, &layout_options, &parse_options);

    let mut total = LayoutStats::new();
    for directives in &layouts {
        total.merge(&LayoutStats::from_directives(directives));
    }

    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Posts".bold(), posts.len());
    println!("{}: {}", "Blocks".bold(), total.block_count);
    println!("{}: {}", "Overrides".bold(), total.override_count);
    println!("{}: {}", "Hero".bold(), total.hero_count);
    println!("{}: {}", "Pullquote".bold(), total.pullquote_count);
    println!("{}: {}", "Quote".bold(), total.quote_count);
    println!("{}: {}", "Inline".bold(), total.inline_count);
    println!("{}: {}", "Deck".bold(), total.deck_count);
    println!("{}: {}", "Default".bold(), total.default_count);
    println!("{}: {}", "Custom".bold(), total.custom_count);

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let post = parse_file_with_options(input, ParseOptions::new())?;

    println!("{} {}", "OK".green().bold(), input.display());
    if let Some(ref title) = post.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Blocks".bold(), post.block_count());

    let unknown = post
        .blocks
        .iter()
        .filter(|b| b.block_type == postlayout::BlockType::Unknown)
        .count();
    if unknown > 0 {
        println!(
            "{}: {} block(s) of unknown type",
            "Warning".yellow().bold(),
            unknown
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "postlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Blog post block layout resolver");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name(Path::new("posts/autumn.json"), OutputMode::Json),
            "autumn.layout.json"
        );
        assert_eq!(
            output_name(Path::new("autumn.json"), OutputMode::Text),
            "autumn.layout.txt"
        );
    }

    #[test]
    fn test_output_names_unique_stems() {
        let inputs = vec![PathBuf::from("a.json"), PathBuf::from("b.json")];
        assert_eq!(
            output_names(&inputs, OutputMode::Json),
            vec!["a.layout.json", "b.layout.json"]
        );
    }

    #[test]
    fn test_output_names_shared_stem() {
        let inputs = vec![
            PathBuf::from("a/post.json"),
            PathBuf::from("b/post.json"),
            PathBuf::from("post-2.json"),
            PathBuf::from("c/post.json"),
        ];
        let names = output_names(&inputs, OutputMode::Json);
        assert_eq!(
            names,
            vec![
                "post.layout.json",
                "post-2.layout.json",
                "post-2-2.layout.json",
                "post-3.layout.json",
            ]
        );
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), inputs.len());
    }

    #[test]
    fn test_parse_options_flags() {
        assert!(parse_options(false, false).parallel);
        assert!(!parse_options(false, true).parallel);
        assert!(parse_options(true, true).is_lenient());
    }
}
