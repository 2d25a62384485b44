//! # doc-tree - Navigation Tree and Search Index for Static Documentation
//!
//! Scans a directory of Markdown and HTML documents into a hierarchical table
//! of contents, merges repeated scans into a previously written tree without
//! disturbing manual curation, and builds a flat keyword search index.
//!
//! ## Pipeline
//!
//! ```text
//! root dir ──► TreeScanner ──► merge_trees (optional, with path.json) ──► normalize_tree
//!                                                                             │
//!                                        path.json ◄──────────────────────────┤
//!                                                                             ▼
//!                                      search.json ◄── SearchIndexBuilder (optional)
//! ```
//!
//! ## Modules
//!
//! - [`indexer`]: Directory scanning, title/content extraction, keywords, search records
//! - [`merge`]: Path-keyed reconciliation of a fresh scan against a persisted tree
//! - [`paths`]: Path normalization and platform config locations
//! - [`tree_file`]: Reading and writing the JSON outputs
//! - [`pipeline`]: One complete run over a corpus
//! - [`config`]: Configuration management with environment variable support
//! - [`types`]: Tree nodes and search records
//! - [`error`]: Error types
//!
//! ## Usage Example
//!
//! ```no_run
//! use doc_tree::config::Config;
//! use doc_tree::pipeline::{BuildOptions, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::new()?;
//!     let options = BuildOptions {
//!         merge: true,
//!         index: true,
//!         pretty: false,
//!     };
//!     let summary = run(&config, &options)?;
//!     println!("{} documents", summary.stats.files);
//!     Ok(())
//! }
//! ```

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Directory scanning, content extraction, and search indexing
pub mod indexer;

/// Incremental merging of scanned trees
pub mod merge;

/// Path normalization and utility functions
pub mod paths;

/// End-to-end scan, merge, and index runs
pub mod pipeline;

/// Persisted tree and search index files
pub mod tree_file;

/// Document tree and search record types
pub mod types;
