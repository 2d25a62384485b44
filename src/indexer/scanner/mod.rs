//! Directory scanning into a navigation tree

use super::extract::{extract_title, file_stem_title};
use crate::config::ScanConfig;
use crate::error::{DocTreeError, ScanError};
use crate::paths::relative_join;
use crate::types::{DocumentNode, IndexRef};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct TreeScanner<'a> {
    pub(crate) root: PathBuf,
    config: &'a ScanConfig,
}

/// Entries of one directory, in filesystem enumeration order
#[derive(Debug, Default)]
struct Listing {
    documents: Vec<String>,
    directories: Vec<String>,
}

impl<'a> TreeScanner<'a> {
    pub fn new(root: impl AsRef<Path>, config: &'a ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Scan the whole corpus
    ///
    /// Fails only when the root itself is missing or not a directory; any
    /// subtree that cannot be read comes back as an empty node instead.
    pub fn scan(&self) -> Result<DocumentNode, DocTreeError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.display().to_string()).into());
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.display().to_string()).into());
        }

        tracing::info!("Scanning document root: {}", self.root.display());
        Ok(self.scan_dir(""))
    }

    /// Scan one directory, given by its root-relative path, recursively
    ///
    /// Symlinked subdirectories are followed unless they resolve to a
    /// directory already on the current descent path.
    pub fn scan_dir(&self, relative_path: &str) -> DocumentNode {
        let mut ancestors = Vec::new();
        if let Ok(canonical) = fs::canonicalize(self.absolute(relative_path)) {
            ancestors.push(canonical);
        }
        self.scan_dir_within(relative_path, &mut ancestors)
    }

    fn scan_dir_within(&self, relative_path: &str, ancestors: &mut Vec<PathBuf>) -> DocumentNode {
        let directory = self.absolute(relative_path);
        let title = if relative_path.is_empty() {
            self.config.home_title.clone()
        } else {
            directory
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| relative_path.to_string())
        };
        let mut node = DocumentNode::directory(title, relative_path);

        let Listing {
            mut documents,
            mut directories,
        } = match self.list(&directory) {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!("{}", e);
                return node;
            }
        };

        // First index page in enumeration order wins
        let index_name = documents
            .iter()
            .find(|name| self.config.is_index_page(name))
            .cloned();

        if let Some(name) = &index_name {
            node.index = Some(IndexRef::new(
                self.document_title(&directory.join(name), name),
                relative_join(relative_path, name),
            ));
        }

        documents.sort();
        directories.sort();

        for name in documents
            .iter()
            .filter(|name| Some(*name) != index_name.as_ref())
        {
            node.children.push(DocumentNode::file(
                self.document_title(&directory.join(name), name),
                relative_join(relative_path, name),
            ));
        }

        for name in &directories {
            let child_path = relative_join(relative_path, name);
            let canonical = match fs::canonicalize(directory.join(name)) {
                Ok(canonical) => canonical,
                Err(e) => {
                    tracing::debug!("Skipping unresolvable directory {}: {}", child_path, e);
                    continue;
                }
            };
            if ancestors.contains(&canonical) {
                tracing::debug!(
                    "Skipping directory loop: {} -> {}",
                    child_path,
                    canonical.display()
                );
                continue;
            }

            ancestors.push(canonical);
            let child = self.scan_dir_within(&child_path, ancestors);
            ancestors.pop();

            if child.has_content() {
                node.children.push(child);
            } else {
                tracing::debug!("Pruning empty directory: {}", child.path);
            }
        }

        node
    }

    fn absolute(&self, relative_path: &str) -> PathBuf {
        if relative_path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative_path)
        }
    }

    /// Classify the immediate entries of a directory
    fn list(&self, directory: &Path) -> Result<Listing, ScanError> {
        let mut listing = Listing::default();

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Depth 0 means the directory itself could not be opened
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::ReadDirFailed {
                        dir: directory.display().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = entry.file_type();

            if file_type.is_file() && self.config.is_supported(&name) {
                listing.documents.push(name);
            } else if file_type.is_dir() && !name.starts_with('.') {
                listing.directories.push(name);
            } else {
                tracing::trace!("Ignoring entry: {:?}", entry.path());
            }
        }

        Ok(listing)
    }

    /// Extracted title, or the filename without extension
    fn document_title(&self, path: &Path, file_name: &str) -> String {
        extract_title(path).unwrap_or_else(|| file_stem_title(file_name))
    }
}
