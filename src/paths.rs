/// Path normalization for persisted trees, plus platform config locations
///
/// Every path written to the tree or search index uses forward slashes,
/// whatever the host separator is.
use crate::types::DocumentNode;
use std::path::PathBuf;

/// Replace host path separators with forward slashes
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Join a root-relative directory path and an entry name with `/`
///
/// The root itself is the empty string, so its children carry bare names.
pub fn relative_join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}

/// Normalize every node path and index path in the tree, in place
pub fn normalize_tree(node: &mut DocumentNode) {
    node.path = normalize_path(&node.path);

    if let Some(index) = node.index.as_mut() {
        index.path = normalize_path(&index.path);
    }

    for child in &mut node.children {
        normalize_tree(child);
    }
}

/// Platform-agnostic config locations
pub struct PlatformPaths;

impl PlatformPaths {
    /// Get the appropriate config directory for the current platform
    ///
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    /// - elsewhere: the platform config dir, or "." when unknown
    pub fn config_dir() -> PathBuf {
        if cfg!(any(target_os = "windows", target_os = "macos")) {
            dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
        } else {
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
                .unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Returns: {config_dir}/doc-tree
    pub fn project_config_dir() -> PathBuf {
        Self::config_dir().join("doc-tree")
    }

    /// Returns: {config_dir}/doc-tree/config.toml
    pub fn default_config_path() -> PathBuf {
        Self::project_config_dir().join("config.toml")
    }
}
