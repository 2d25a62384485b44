//! Flat search index over a document tree

use super::extract::{excerpt, extract_content};
use super::keywords::extract_keywords;
use crate::config::ExtractConfig;
use crate::types::{DocumentNode, SearchRecord};
use std::path::{Path, PathBuf};

pub struct SearchIndexBuilder<'a> {
    root: PathBuf,
    config: &'a ExtractConfig,
}

impl<'a> SearchIndexBuilder<'a> {
    pub fn new(root: impl AsRef<Path>, config: &'a ExtractConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Emit one record per index document and leaf document, depth first
    ///
    /// Documents referenced by the tree but missing on disk are skipped.
    pub fn build(&self, tree: &DocumentNode) -> Vec<SearchRecord> {
        let mut records = Vec::new();
        self.visit(tree, &mut records);
        tracing::info!("Built search index with {} records", records.len());
        records
    }

    fn visit(&self, node: &DocumentNode, records: &mut Vec<SearchRecord>) {
        if let Some(index) = &node.index {
            self.push_record(&index.title, &index.path, records);
        }

        for child in &node.children {
            if child.is_leaf() {
                self.push_record(&child.title, &child.path, records);
            } else {
                self.visit(child, records);
            }
        }
    }

    fn push_record(&self, title: &str, path: &str, records: &mut Vec<SearchRecord>) {
        let file = self.root.join(path);
        if !file.is_file() {
            tracing::debug!("Skipping missing document: {}", path);
            return;
        }

        let text = extract_content(&file, self.config.content_max_chars);
        let keywords = extract_keywords(&text, self.config.max_keywords);

        records.push(SearchRecord {
            title: title.to_string(),
            path: path.to_string(),
            content: excerpt(&text, self.config.excerpt_chars),
            keywords,
        });
    }
}
