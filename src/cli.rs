use clap::{ArgAction, Parser};
use doc_tree::config::Config;
use doc_tree::pipeline::BuildOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a document tree and search index for a docs folder")]
pub struct Cli {
    /// Document root directory (default: data)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Tree output file (default: path.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Search index output file (default: search.json)
    #[arg(short, long)]
    pub search_output: Option<PathBuf>,

    /// Merge with the existing tree file, keeping manual ordering
    #[arg(short, long)]
    pub merge: bool,

    /// Also build the search index
    #[arg(short, long)]
    pub index: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Configuration file (default: platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Command-line values win over file and environment settings
    pub fn apply(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.scan.root_dir = root.clone();
        }
        if let Some(output) = &self.output {
            config.output.tree_file = output.clone();
        }
        if let Some(output) = &self.search_output {
            config.output.search_file = output.clone();
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            merge: self.merge,
            index: self.index,
            pretty: self.pretty,
        }
    }
}

/// Ask for merge and index choices when the tool was started without flags
pub fn prompt_options<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<BuildOptions> {
    let merge = ask_yes_no(input, output, "Merge with the existing tree file?")?;
    let index = ask_yes_no(input, output, "Also build the search index?")?;
    Ok(BuildOptions {
        merge,
        index,
        pretty: false,
    })
}

fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
