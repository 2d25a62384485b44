//! Best-effort title and plain-text extraction for Markdown and HTML documents
//!
//! The text-level functions are pure and never fail. The file-level wrappers
//! catch read errors at the single-file boundary, log them, and hand back an
//! empty result so the caller can fall back to the filename.

use crate::error::ExtractError;
use regex::Regex;
use scraper::{Html, Node};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("fenced code regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]*`").expect("inline code regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("image regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("link regex"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("html tag regex"));
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").expect("heading regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Markup dialect of a document, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Markdown,
    Html,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// First `# ` or `## ` heading line, trimmed
pub fn markdown_title(text: &str) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        let heading = line
            .strip_prefix("# ")
            .or_else(|| line.strip_prefix("## "));

        if let Some(heading) = heading {
            let heading = heading.trim();
            return (!heading.is_empty()).then(|| heading.to_string());
        }
    }
    None
}

/// Text of the first `<title>` pair, else of the first `<h1>` pair
pub fn html_title(text: &str) -> Option<String> {
    tag_text(text, "<title>", "</title>").or_else(|| tag_text(text, "<h1>", "</h1>"))
}

fn tag_text(text: &str, open: &str, close: &str) -> Option<String> {
    let start = text.find(open)? + open.len();
    let end = start + text[start..].find(close)?;
    let inner = text[start..end].trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

/// Plain text of a Markdown document, collapsed to single spaces
pub fn markdown_content(text: &str, max_chars: usize) -> String {
    let text = FENCED_CODE.replace_all(text, " ");
    let text = INLINE_CODE.replace_all(&text, " ");
    // Images go before links so `![alt](src)` never leaves a stray `!alt`
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, " ");
    let text = HEADING_MARKER.replace_all(&text, "");

    truncate_chars(collapse_whitespace(&text).as_str(), max_chars)
}

/// Visible text of an HTML document, `<script>` and `<style>` bodies dropped
pub fn html_content(text: &str, max_chars: usize) -> String {
    let document = Html::parse_document(text);
    let mut parts = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => matches!(element.name(), "script" | "style"),
            _ => false,
        });
        if hidden {
            continue;
        }

        let fragment = fragment.trim();
        if !fragment.is_empty() {
            parts.push(fragment);
        }
    }

    truncate_chars(collapse_whitespace(&parts.join(" ")).as_str(), max_chars)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Keep at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Cap an excerpt at `cap` characters, marking the cut with `...`
pub fn excerpt(text: &str, cap: usize) -> String {
    if text.chars().count() > cap {
        format!("{}...", truncate_chars(text, cap))
    } else {
        text.to_string()
    }
}

/// Filename without its extension, used when a document has no heading
pub fn file_stem_title(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| file_name.to_string())
}

fn read_document(path: &Path) -> Result<(DocumentKind, String), ExtractError> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| ExtractError::UnsupportedExtension(path.display().to_string()))?;

    let text = fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok((kind, text))
}

/// Extract a document title, `None` when there is no heading or the read fails
pub fn extract_title(path: &Path) -> Option<String> {
    match read_document(path) {
        Ok((DocumentKind::Markdown, text)) => markdown_title(&text),
        Ok((DocumentKind::Html, text)) => html_title(&text),
        Err(e) => {
            tracing::warn!("Title extraction skipped: {}", e);
            None
        }
    }
}

/// Extract a plain-text excerpt, empty when the read fails
pub fn extract_content(path: &Path, max_chars: usize) -> String {
    match read_document(path) {
        Ok((DocumentKind::Markdown, text)) => markdown_content(&text, max_chars),
        Ok((DocumentKind::Html, text)) => html_content(&text, max_chars),
        Err(e) => {
            tracing::warn!("Content extraction skipped: {}", e);
            String::new()
        }
    }
}
