//! Reconciliation of a fresh scan against a previously persisted tree
//!
//! Entries are matched by normalized path. Whatever ordering and extra fields
//! the persisted tree carries survive; entries gone from disk are dropped and
//! new entries are appended after the known ones, in scan order.

use crate::types::{DocumentNode, IndexRef};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Paths touched by a merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// New entries appended from the fresh scan
    pub added: Vec<String>,
    /// Persisted entries dropped because they no longer exist on disk
    pub removed: Vec<String>,
    /// Persisted entries missing from the scan but still on disk
    pub retained: Vec<String>,
}

impl MergeReport {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Merge `fresh` into `existing`
///
/// With no existing tree the fresh scan is returned unchanged. `root` is the
/// corpus directory, consulted for entries the fresh scan did not produce.
pub fn merge_trees(
    existing: Option<DocumentNode>,
    fresh: DocumentNode,
    root: &Path,
) -> (DocumentNode, MergeReport) {
    let mut report = MergeReport::default();

    let merged = match existing {
        Some(existing) => merge_node(existing, fresh, root, &mut report),
        None => fresh,
    };

    for path in &report.removed {
        tracing::info!("Removed stale entry: {}", path);
    }
    tracing::debug!(
        "Merge finished: {} added, {} removed, {} retained",
        report.added.len(),
        report.removed.len(),
        report.retained.len()
    );

    (merged, report)
}

fn merge_node(
    existing: DocumentNode,
    fresh: DocumentNode,
    root: &Path,
    report: &mut MergeReport,
) -> DocumentNode {
    let DocumentNode {
        children: fresh_children,
        index: fresh_index,
        ..
    } = fresh;

    let mut merged = existing;
    merged.index = resolve_index(merged.index.take(), fresh_index, root, report);

    let fresh_order: Vec<String> = fresh_children.iter().map(|c| c.path.clone()).collect();
    let mut fresh_by_path: HashMap<String, DocumentNode> = fresh_children
        .into_iter()
        .map(|child| (child.path.clone(), child))
        .collect();

    let existing_children = std::mem::take(&mut merged.children);
    let mut seen = HashSet::with_capacity(existing_children.len());
    let mut children = Vec::with_capacity(existing_children.len() + fresh_by_path.len());

    for child in existing_children {
        if !seen.insert(child.path.clone()) {
            tracing::warn!("Dropping duplicate entry in existing tree: {}", child.path);
            continue;
        }

        match fresh_by_path.remove(&child.path) {
            Some(fresh_child) if !child.is_leaf() || !fresh_child.is_leaf() => {
                children.push(merge_node(child, fresh_child, root, report));
            }
            Some(fresh_child) => {
                // Position and extra fields stay, the title follows the content
                let mut kept = child;
                kept.title = fresh_child.title;
                children.push(kept);
            }
            None if root.join(&child.path).exists() => {
                tracing::debug!("Keeping entry missing from scan: {}", child.path);
                report.retained.push(child.path.clone());
                children.push(child);
            }
            None => report.removed.push(child.path),
        }
    }

    for path in fresh_order {
        if let Some(child) = fresh_by_path.remove(&path) {
            report.added.push(path);
            children.push(child);
        }
    }

    merged.children = children;
    merged
}

/// Keep the persisted index unless the scan found one at a different path
///
/// An unchanged index path keeps the persisted title even if the document's
/// heading changed. A persisted index the scan no longer reports survives
/// only while its file is still on disk.
fn resolve_index(
    existing: Option<IndexRef>,
    fresh: Option<IndexRef>,
    root: &Path,
    report: &mut MergeReport,
) -> Option<IndexRef> {
    match (existing, fresh) {
        (Some(existing), Some(fresh)) if existing.path == fresh.path => Some(existing),
        (_, Some(fresh)) => Some(fresh),
        (Some(existing), None) if root.join(&existing.path).is_file() => {
            report.retained.push(existing.path.clone());
            Some(existing)
        }
        (Some(existing), None) => {
            report.removed.push(existing.path);
            None
        }
        (None, None) => None,
    }
}
