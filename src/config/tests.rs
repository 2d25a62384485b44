use super::*;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.scan.root_dir, PathBuf::from("data"));
    assert_eq!(
        config.scan.index_pages,
        vec!["README.md", "README.html", "index.md", "index.html"]
    );
    assert_eq!(config.scan.supported_extensions, vec![".md", ".html"]);
    assert_eq!(config.scan.home_title, "首页");
    assert_eq!(config.extract.excerpt_chars, 200);
    assert_eq!(config.extract.max_keywords, 10);
    assert_eq!(config.output.tree_file, PathBuf::from("path.json"));
    assert_eq!(config.output.search_file, PathBuf::from("search.json"));
    assert!(!config.output.pretty);
}

#[test]
fn test_validate_valid_config() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_empty_extensions() {
    let mut config = Config::default();
    config.scan.supported_extensions.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("scan.supported_extensions"));
}

#[test]
fn test_validate_extension_without_dot() {
    let mut config = Config::default();
    config.scan.supported_extensions = vec!["md".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_empty_index_pages() {
    let mut config = Config::default();
    config.scan.index_pages.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("scan.index_pages"));

    config.scan.index_pages = vec![String::new()];
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_zero_keywords() {
    let mut config = Config::default();
    config.extract.max_keywords = 0;
    let err = config.validate().unwrap_err();
    assert!(err.is_user_error());
    assert!(err.to_string().contains("extract.max_keywords"));
}

#[test]
fn test_validate_zero_excerpt() {
    let mut config = Config::default();
    config.extract.excerpt_chars = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_is_supported_case_insensitive() {
    let scan = ScanConfig::default();
    assert!(scan.is_supported("setup.md"));
    assert!(scan.is_supported("Setup.MD"));
    assert!(scan.is_supported("page.Html"));
    assert!(!scan.is_supported("notes.txt"));
    assert!(!scan.is_supported("Makefile"));
    assert!(!scan.is_supported(".md"));
}

#[test]
fn test_is_index_page_case_sensitive() {
    let scan = ScanConfig::default();
    assert!(scan.is_index_page("README.md"));
    assert!(scan.is_index_page("index.html"));
    assert!(!scan.is_index_page("readme.md"));
    assert!(!scan.is_index_page("INDEX.md"));
}

#[test]
fn test_from_file_partial_toml() {
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(
        temp.path(),
        r#"
[scan]
root_dir = "docs"

[extract]
max_keywords = 5
"#,
    )
    .unwrap();

    let config = Config::from_file(temp.path()).unwrap();
    assert_eq!(config.scan.root_dir, PathBuf::from("docs"));
    assert_eq!(config.scan.index_pages.len(), 4);
    assert_eq!(config.extract.max_keywords, 5);
    assert_eq!(config.extract.excerpt_chars, 200);
    assert_eq!(config.output.tree_file, PathBuf::from("path.json"));
}

#[test]
fn test_from_file_invalid_toml() {
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "[scan\nroot_dir = ").unwrap();
    let err = Config::from_file(temp.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML"));
}

#[test]
fn test_from_file_missing() {
    let err = Config::from_file(Path::new("/nonexistent/doc-tree/config.toml")).unwrap_err();
    assert!(matches!(
        err,
        DocTreeError::Config(ConfigError::FileNotFound(_))
    ));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.scan.root_dir = PathBuf::from("site/docs");
    config.output.pretty = true;
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.scan.root_dir, PathBuf::from("site/docs"));
    assert!(loaded.output.pretty);
}
