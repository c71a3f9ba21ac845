//! pdfoutline CLI - PDF bookmark tree inspection tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use pdfoutline::render::{paragraphs_to_json, to_json, to_text};
use pdfoutline::{BuildOptions, JsonFormat, LopdfSource, OutlineSource, ParagraphTree};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Inspect PDF bookmarks as a tree of page spans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full paragraph tree
    Tree {
        #[command(flatten)]
        build: BuildArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List every bookmark in depth-first order
    Flatten {
        #[command(flatten)]
        build: BuildArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the bookmarks at one nesting level
    Level {
        #[command(flatten)]
        build: BuildArgs,

        /// Nesting level (0 = top-level bookmarks)
        #[arg(short, long)]
        level: i32,

        /// Also emit the text preceding each branch's first sub-entry
        #[arg(short, long)]
        inter_level_text: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show outline statistics
    Info {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct BuildArgs {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Drop cyclic, overly deep or broken outline branches instead of failing
    #[arg(long)]
    lenient: bool,

    /// Maximum outline nesting depth
    #[arg(long, default_value_t = pdfoutline::builder::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl BuildArgs {
    fn options(&self) -> BuildOptions {
        let options = BuildOptions::new().with_max_depth(self.max_depth);
        if self.lenient {
            options.lenient()
        } else {
            options
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

impl OutputArgs {
    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tree { build, output } => cmd_tree(&build, &output),
        Commands::Flatten { build, output } => cmd_flatten(&build, &output),
        Commands::Level {
            build,
            level,
            inter_level_text,
            output,
        } => cmd_level(&build, level, inter_level_text, &output),
        Commands::Info { build } => cmd_info(&build),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_tree(args: &BuildArgs) -> Result<ParagraphTree, Box<dyn std::error::Error>> {
    let tree = pdfoutline::build_file_with_options(&args.input, args.options())?;
    log::info!(
        "Built {} paragraphs from {}",
        tree.len() - 1,
        args.input.display()
    );
    Ok(tree)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_tree(build: &BuildArgs, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tree = build_tree(build)?;

    let content = if output.json {
        to_json(&tree, output.format())?
    } else {
        to_text(&tree)
    };

    write_output(&content, output.output.as_deref())
}

fn cmd_flatten(build: &BuildArgs, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tree = build_tree(build)?;
    let paragraphs = tree.flatten();

    let content = if output.json {
        paragraphs_to_json(&paragraphs, output.format())?
    } else {
        paragraphs
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(&content, output.output.as_deref())
}

fn cmd_level(
    build: &BuildArgs,
    level: i32,
    inter_level_text: bool,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = build_tree(build)?;
    let paragraphs = tree.paragraphs_by_level(level, inter_level_text);

    if paragraphs.is_empty() {
        log::warn!("No bookmarks found at level {}", level);
    }

    let content = if output.json {
        paragraphs_to_json(&paragraphs, output.format())?
    } else {
        paragraphs
            .iter()
            .map(|p| {
                format!(
                    "{} [{}..{}]",
                    p.title(),
                    p.start_page_number(),
                    p.end_page_number()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(&content, output.output.as_deref())
}

fn cmd_info(build: &BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = LopdfSource::open(&build.input)?;
    let tree = pdfoutline::build_with_options(&source, build.options())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), build.input.display());
    println!("{}: PDF {}", "Format".bold(), source.version());
    println!("{}: {}", "Pages".bold(), source.page_count());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if source.is_encrypted() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Outline Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let bookmarks = tree.flatten();
    let top_level = tree.root().children().len();

    println!("{}: {}", "Bookmarks".bold(), bookmarks.len());
    println!("{}: {}", "Top-level".bold(), top_level);
    println!("{}: {}", "Depth".bold(), tree.max_level() + 1);

    let unresolved = tree.unresolved_count();
    if unresolved > 0 {
        println!(
            "{}: {}",
            "Unresolved pages".bold(),
            unresolved.to_string().yellow()
        );
    } else {
        println!("{}: {}", "Unresolved pages".bold(), 0);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF bookmark tree inspection tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/pdfoutline".dimmed()
    );
    println!("License: MIT");
}
