/// End-to-end runs over a temporary documentation corpus
use anyhow::Result;
use doc_tree::config::Config;
use doc_tree::pipeline::{BuildOptions, build_tree, run};
use doc_tree::types::{DocumentNode, SearchRecord};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config_for(docs: &Path, out: &Path) -> Config {
    let mut config = Config::default();
    config.scan.root_dir = docs.to_path_buf();
    config.output.tree_file = out.join("path.json");
    config.output.search_file = out.join("search.json");
    config
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_docs_home_scenario_tree_file() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "README.md", "# Docs Home\n");
    write(docs.path(), "guide/index.md", "## Guide\n");
    write(docs.path(), "guide/setup.md", "Plain text only.\n");

    let config = config_for(docs.path(), out.path());
    let summary = run(&config, &BuildOptions::default())?;

    assert_eq!(summary.stats.files, 3);
    assert_eq!(summary.stats.directories, 2);
    assert!(summary.merge.is_none());
    assert!(summary.search_file.is_none());
    assert!(!out.path().join("search.json").exists());

    assert_eq!(
        read_json(&config.output.tree_file),
        json!({
            "title": "首页",
            "path": "",
            "children": [
                {
                    "title": "guide",
                    "path": "guide",
                    "children": [
                        {"title": "setup", "path": "guide/setup.md", "children": []}
                    ],
                    "index": {"title": "Guide", "path": "guide/index.md"}
                }
            ],
            "index": {"title": "Docs Home", "path": "README.md"}
        })
    );
    Ok(())
}

#[test]
fn test_search_index_written() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "README.md", "# Docs Home\n\nDocs for the docs site.");
    write(
        docs.path(),
        "api/reference.html",
        "<html><head><title>Reference</title><style>p{}</style></head>\
         <body><p>Endpoint endpoint list</p></body></html>",
    );

    let config = config_for(docs.path(), out.path());
    let options = BuildOptions {
        index: true,
        ..BuildOptions::default()
    };
    let summary = run(&config, &options)?;
    assert_eq!(summary.records_written, 2);

    let records: Vec<SearchRecord> =
        serde_json::from_str(&fs::read_to_string(&config.output.search_file)?)?;
    assert_eq!(records[0].path, "README.md");
    assert_eq!(records[0].keywords[0], "docs");
    assert_eq!(records[1].path, "api/reference.html");
    assert_eq!(records[1].content, "Reference Endpoint endpoint list");
    assert_eq!(records[1].keywords[0], "endpoint");
    Ok(())
}

#[test]
fn test_merge_preserves_manual_curation() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "a.md", "# A");
    write(docs.path(), "b.md", "# B");
    write(docs.path(), "old.md", "# Old");

    let config = config_for(docs.path(), out.path());
    run(&config, &BuildOptions::default())?;

    // Hand-edit the tree: reverse the order and add an ordering hint
    let mut tree = read_json(&config.output.tree_file);
    let children = tree["children"].as_array_mut().unwrap();
    children.reverse();
    children[0]["order"] = json!(1);
    fs::write(&config.output.tree_file, serde_json::to_string(&tree)?)?;

    fs::remove_file(docs.path().join("old.md"))?;
    write(docs.path(), "c.md", "# C");

    let options = BuildOptions {
        merge: true,
        ..BuildOptions::default()
    };
    let summary = run(&config, &options)?;
    let report = summary.merge.unwrap();
    assert_eq!(report.added, vec!["c.md"]);
    assert_eq!(report.removed, vec!["old.md"]);

    let merged: DocumentNode = serde_json::from_value(read_json(&config.output.tree_file))?;
    let paths: Vec<&str> = merged.children.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, vec!["b.md", "a.md", "c.md"]);
    Ok(())
}

#[test]
fn test_merge_twice_is_stable() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "README.md", "# Home");
    write(docs.path(), "one/page.md", "# Page");
    write(docs.path(), "two/README.html", "<title>Two</title>");

    let config = config_for(docs.path(), out.path());
    let options = BuildOptions {
        merge: true,
        pretty: true,
        ..BuildOptions::default()
    };

    run(&config, &options)?;
    let first = fs::read_to_string(&config.output.tree_file)?;
    run(&config, &options)?;
    let second = fs::read_to_string(&config.output.tree_file)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_merge_with_corrupt_tree_falls_back_to_scan() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "a.md", "# A");

    let config = config_for(docs.path(), out.path());
    fs::write(&config.output.tree_file, "not json at all")?;

    let (tree, report) = build_tree(&config, true)?;
    assert_eq!(tree.children, vec![DocumentNode::file("A", "a.md")]);
    assert_eq!(report.unwrap().added, Vec::<String>::new());
    Ok(())
}

#[test]
fn test_merge_normalizes_backslash_paths() -> Result<()> {
    let docs = TempDir::new()?;
    let out = TempDir::new()?;
    write(docs.path(), "guide/setup.md", "# Setup");
    write(docs.path(), "guide/intro.md", "# Intro");

    let config = config_for(docs.path(), out.path());
    let prior = json!({
        "title": "首页",
        "path": "",
        "children": [
            {
                "title": "guide",
                "path": "guide",
                "children": [
                    {"title": "Setup", "path": "guide\\setup.md", "children": []}
                ],
                "index": null
            }
        ],
        "index": null
    });
    fs::write(&config.output.tree_file, prior.to_string())?;

    let (tree, report) = build_tree(&config, true)?;
    let guide = &tree.children[0];
    let paths: Vec<&str> = guide.children.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, vec!["guide/setup.md", "guide/intro.md"]);
    assert_eq!(report.unwrap().added, vec!["guide/intro.md"]);
    Ok(())
}

#[test]
fn test_missing_root_is_fatal_and_writes_nothing() {
    let out = TempDir::new().unwrap();
    let config = config_for(&out.path().join("no-such-docs"), out.path());

    let err = run(&config, &BuildOptions::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));
    assert!(!config.output.tree_file.exists());
}
