//! End-to-end run: scan, optionally merge, normalize, write, optionally index

use crate::config::Config;
use crate::indexer::{SearchIndexBuilder, TreeScanner};
use crate::merge::{MergeReport, merge_trees};
use crate::paths::normalize_tree;
use crate::tree_file::{load_tree, save_json};
use crate::types::{DocumentNode, TreeStats};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// What a single run should do besides writing the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Merge into the tree file already on disk instead of replacing it
    pub merge: bool,
    /// Also write the search index
    pub index: bool,
    /// Pretty-print JSON (also enabled by `output.pretty`)
    pub pretty: bool,
}

/// Outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub stats: TreeStats,
    /// Present when the run merged with an existing tree
    pub merge: Option<MergeReport>,
    pub tree_file: PathBuf,
    /// Present when the search index was written
    pub search_file: Option<PathBuf>,
    pub records_written: usize,
    pub duration_ms: u64,
}

/// Scan the corpus and, when asked, merge with the existing tree file
///
/// The returned tree is path-normalized. A missing or unreadable tree file
/// falls back to the fresh scan.
pub fn build_tree(config: &Config, merge: bool) -> Result<(DocumentNode, Option<MergeReport>)> {
    let root = &config.scan.root_dir;
    let mut fresh = TreeScanner::new(root, &config.scan)
        .scan()
        .context("Failed to scan document root")?;
    normalize_tree(&mut fresh);

    if !merge {
        return Ok((fresh, None));
    }

    let existing = match load_tree(&config.output.tree_file) {
        Ok(Some(mut tree)) => {
            normalize_tree(&mut tree);
            Some(tree)
        }
        Ok(None) => {
            tracing::info!("No existing tree to merge, using fresh scan");
            None
        }
        Err(e) => {
            tracing::warn!("Ignoring existing tree: {}", e);
            None
        }
    };

    let (mut merged, report) = merge_trees(existing, fresh, root);
    normalize_tree(&mut merged);
    Ok((merged, Some(report)))
}

/// Run the whole pipeline and write its outputs
pub fn run(config: &Config, options: &BuildOptions) -> Result<BuildSummary> {
    let start = Instant::now();
    let pretty = options.pretty || config.output.pretty;

    tracing::info!("Scanning directory: {}", config.scan.root_dir.display());
    let (tree, merge) = build_tree(config, options.merge)?;

    save_json(&config.output.tree_file, &tree, pretty)
        .context("Failed to write document tree")?;
    tracing::info!("Wrote document tree: {}", config.output.tree_file.display());

    let mut search_file = None;
    let mut records_written = 0;
    if options.index {
        let records = SearchIndexBuilder::new(&config.scan.root_dir, &config.extract).build(&tree);
        save_json(&config.output.search_file, records.as_slice(), pretty)
            .context("Failed to write search index")?;
        tracing::info!(
            "Wrote search index: {} ({} records)",
            config.output.search_file.display(),
            records.len()
        );
        records_written = records.len();
        search_file = Some(config.output.search_file.clone());
    }

    let stats = tree.stats();
    tracing::info!(
        "Statistics: {} documents, {} directories",
        stats.files,
        stats.directories
    );

    Ok(BuildSummary {
        stats,
        merge,
        tree_file: config.output.tree_file.clone(),
        search_file,
        records_written,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
