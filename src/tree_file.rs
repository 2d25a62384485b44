use crate::error::{DocTreeError, TreeFileError};
use crate::types::DocumentNode;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a previously written tree file
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn load_tree(path: &Path) -> Result<Option<DocumentNode>, DocTreeError> {
    if !path.exists() {
        tracing::debug!("Tree file not found: {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| TreeFileError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let tree: DocumentNode =
        serde_json::from_str(&content).map_err(|e| TreeFileError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    tracing::info!(
        "Loaded existing tree with {} top-level entries",
        tree.children.len()
    );
    Ok(Some(tree))
}

/// Write any serializable value as JSON, compact or 2-space indented
pub fn save_json<T>(path: &Path, value: &T, pretty: bool) -> Result<(), DocTreeError>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| TreeFileError::WriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    let content = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| TreeFileError::SerializeFailed(e.to_string()))?;

    fs::write(path, content).map_err(|e| TreeFileError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
