//! Command-line interface for kiln
//!
//! Usage:
//!   kiln build [--config `<path>`] [--content `<dir>`] ...  - Build the site
//!   kiln render `<file>`                                 - Print one page's HTML fragment
//!   kiln blocks `<file>`                                 - Print the block kinds of a file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kiln_site::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version, about = "Build a static site from Markdown pages")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into the output directory
    Build(BuildArgs),

    /// Print the HTML fragment of a Markdown file
    Render {
        /// Input Markdown file
        input: PathBuf,
    },

    /// Print the kind of every block in a Markdown file
    Blocks {
        /// Input Markdown file
        input: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (cleared before building)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template file
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Prefix for root-relative links, e.g. `/my-site/`
    #[arg(long)]
    base_path: Option<String>,
}

impl BuildArgs {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = Config::load_from_path(&self.config)?;

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build(args) => {
            let config = args.into_config()?;
            let pages = kiln_site::build(&config).context("Site build failed")?;
            println!(
                "Built {} pages into {}",
                pages.len(),
                config.output_dir.display()
            );
        }
        Command::Render { input } => {
            let markdown = read_input(&input)?;
            let html = kiln::markdown_to_html(&markdown)
                .with_context(|| format!("Failed to compile {}", input.display()))?;
            println!("{}", html);
        }
        Command::Blocks { input } => {
            let markdown = read_input(&input)?;
            for block in kiln::block::blocks(&markdown) {
                let first_line = block.text.lines().next().unwrap_or_default();
                println!("{:<15} {}", block.kind.as_str(), first_line);
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
