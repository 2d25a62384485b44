/// Configuration system for doc-tree
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
///
/// The resolved value is immutable and passed by reference to every component.
use crate::error::{ConfigError, DocTreeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Corpus scanning configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Title, content and keyword extraction configuration
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Output file configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Document root directory
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Exact basenames that mark a directory's index document
    #[serde(default = "default_index_pages")]
    pub index_pages: Vec<String>,

    /// Document extensions, lower-case with a leading dot
    #[serde(default = "default_supported_extensions")]
    pub supported_extensions: Vec<String>,

    /// Title of the tree root
    #[serde(default = "default_home_title")]
    pub home_title: String,
}

/// Title, content and keyword extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Characters of plain text pulled from each document before indexing
    #[serde(default = "default_content_max_chars")]
    pub content_max_chars: usize,

    /// Characters kept in a search record's `content` field
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    /// Keywords kept per search record
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Persisted document tree
    #[serde(default = "default_tree_file")]
    pub tree_file: PathBuf,

    /// Persisted search index
    #[serde(default = "default_search_file")]
    pub search_file: PathBuf,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

// Default value functions
fn default_root_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_index_pages() -> Vec<String> {
    vec![
        "README.md".to_string(),
        "README.html".to_string(),
        "index.md".to_string(),
        "index.html".to_string(),
    ]
}

fn default_supported_extensions() -> Vec<String> {
    vec![".md".to_string(), ".html".to_string()]
}

fn default_home_title() -> String {
    "首页".to_string()
}

fn default_content_max_chars() -> usize {
    5000
}

fn default_excerpt_chars() -> usize {
    200
}

fn default_max_keywords() -> usize {
    10
}

fn default_tree_file() -> PathBuf {
    PathBuf::from("path.json")
}

fn default_search_file() -> PathBuf {
    PathBuf::from("search.json")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            index_pages: default_index_pages(),
            supported_extensions: default_supported_extensions(),
            home_title: default_home_title(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            content_max_chars: default_content_max_chars(),
            excerpt_chars: default_excerpt_chars(),
            max_keywords: default_max_keywords(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tree_file: default_tree_file(),
            search_file: default_search_file(),
            pretty: false,
        }
    }
}

impl ScanConfig {
    /// Check a filename's extension against the supported set, ignoring case
    pub fn is_supported(&self, file_name: &str) -> bool {
        let Some(dot) = file_name.rfind('.') else {
            return false;
        };
        // "README" has no extension, ".md" alone is a hidden file with no stem
        if dot == 0 {
            return false;
        }
        let ext = file_name[dot..].to_lowercase();
        self.supported_extensions.iter().any(|e| e.to_lowercase() == ext)
    }

    /// Index filenames match case-sensitively on the exact basename
    pub fn is_index_page(&self, file_name: &str) -> bool {
        self.index_pages.iter().any(|page| page == file_name)
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, DocTreeError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or create default
    pub fn load_or_default() -> Result<Self, DocTreeError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), DocTreeError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), DocTreeError> {
        if self.scan.supported_extensions.is_empty() {
            return Err(invalid("scan.supported_extensions", "must not be empty"));
        }

        if let Some(ext) = self
            .scan
            .supported_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(invalid(
                "scan.supported_extensions",
                format!("'{}' must look like '.md'", ext),
            ));
        }

        if self.scan.index_pages.is_empty() {
            return Err(invalid("scan.index_pages", "must not be empty"));
        }

        if self.scan.index_pages.iter().any(|page| page.is_empty()) {
            return Err(invalid("scan.index_pages", "must not contain empty names"));
        }

        if self.scan.home_title.trim().is_empty() {
            return Err(invalid("scan.home_title", "must not be empty"));
        }

        if self.extract.content_max_chars == 0 {
            return Err(invalid("extract.content_max_chars", "must be greater than 0"));
        }

        if self.extract.excerpt_chars == 0 {
            return Err(invalid("extract.excerpt_chars", "must be greater than 0"));
        }

        if self.extract.max_keywords == 0 {
            return Err(invalid("extract.max_keywords", "must be greater than 0"));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("DOC_TREE_ROOT") {
            self.scan.root_dir = PathBuf::from(root);
        }

        if let Ok(output) = std::env::var("DOC_TREE_OUTPUT") {
            self.output.tree_file = PathBuf::from(output);
        }

        if let Ok(output) = std::env::var("DOC_TREE_SEARCH_OUTPUT") {
            self.output.search_file = PathBuf::from(output);
        }

        if let Ok(pretty) = std::env::var("DOC_TREE_PRETTY")
            && let Ok(pretty) = pretty.parse()
        {
            self.output.pretty = pretty;
        }

        if let Ok(max) = std::env::var("DOC_TREE_MAX_KEYWORDS")
            && let Ok(max) = max.parse()
        {
            self.extract.max_keywords = max;
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, DocTreeError> {
        let mut config = Self::load_or_default()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> DocTreeError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests;
