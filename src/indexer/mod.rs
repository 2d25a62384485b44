//! Corpus scanning, content extraction, and search indexing
//!
//! Walks the document root into a navigation tree, pulls titles and plain
//! text out of Markdown and HTML files, and flattens a tree into search
//! records with frequency-ranked keywords.

pub mod extract;
pub mod keywords;
mod scanner;
mod search_index;

pub use extract::{extract_content, extract_title};
pub use keywords::extract_keywords;
pub use scanner::TreeScanner;
pub use search_index::SearchIndexBuilder;
