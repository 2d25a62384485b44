use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Reference from a directory to its designated index document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRef {
    /// Title extracted from the index document (or its filename)
    pub title: String,
    /// Root-relative path of the index document
    pub path: String,
}

impl IndexRef {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// One file or directory in the navigation tree
///
/// A node with no children and no index is a leaf document; anything else is
/// a directory. Fields this crate does not know about (manual `order` hints
/// and the like) are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentNode {
    /// Display name, never empty
    pub title: String,
    /// Root-relative, forward-slash path; empty only for the root
    #[serde(default)]
    pub path: String,
    /// Ordered children; empty for leaf documents
    #[serde(default)]
    pub children: Vec<DocumentNode>,
    /// Index document of a directory
    #[serde(default)]
    pub index: Option<IndexRef>,
    /// Opaque fields carried over from a persisted tree
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentNode {
    /// Create a leaf document node
    pub fn file(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: Vec::new(),
            index: None,
            extra: Map::new(),
        }
    }

    /// Create an empty directory node; children and index are filled in later
    pub fn directory(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::file(title, path)
    }

    /// True for document files: no children and no index
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.index.is_none()
    }

    /// True when the node carries something worth persisting as a directory
    pub fn has_content(&self) -> bool {
        !self.children.is_empty() || self.index.is_some()
    }

    /// Leaf documents never carry an `index` key; directories and the root do
    fn emits_index(&self) -> bool {
        !self.is_leaf() || self.path.is_empty()
    }

    /// Count documents and directories in this subtree
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            files: 0,
            directories: 1,
        };
        self.accumulate_stats(&mut stats);
        stats
    }

    fn accumulate_stats(&self, stats: &mut TreeStats) {
        if self.index.is_some() {
            stats.files += 1;
        }

        for child in &self.children {
            if child.is_leaf() {
                stats.files += 1;
            } else {
                stats.directories += 1;
                child.accumulate_stats(stats);
            }
        }
    }
}

impl Serialize for DocumentNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let emit_index = self.emits_index();
        let len = 3 + usize::from(emit_index) + self.extra.len();

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("path", &self.path)?;
        map.serialize_entry("children", &self.children)?;
        if emit_index {
            map.serialize_entry("index", &self.index)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A flattened, searchable view of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Title copied from the tree
    pub title: String,
    /// Root-relative path copied from the tree
    pub path: String,
    /// Plain-text excerpt, capped with a `...` marker when cut
    pub content: String,
    /// Distinct terms, most frequent first
    pub keywords: Vec<String>,
}

/// Document and directory counts for a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Index documents plus leaf documents
    pub files: usize,
    /// The root plus every nested directory
    pub directories: usize,
}
