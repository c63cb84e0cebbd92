/// Rule set loading tests
/// JSON files, feed directories, and validation warnings
use shieldsentry::rules::RuleSet;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shieldsentry_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn test_load_single_json_file() {
    let dir = scratch_dir("single");
    let path = dir.join("rules.json");
    fs::write(
        &path,
        r#"{
            "domains": ["lnkedin.com"],
            "keywords": ["wire transfer"],
            "patterns": ["cutt.ly"]
        }"#,
    )
    .unwrap();

    let rules = RuleSet::from_json_file(path.to_str().unwrap()).expect("file should load");
    assert_eq!(rules.domains, vec!["lnkedin.com"]);
    assert_eq!(rules.keywords, vec!["wire transfer"]);
    assert_eq!(rules.patterns, vec!["cutt.ly"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_partial_file_defaults_missing_lists() {
    let dir = scratch_dir("partial");
    let path = dir.join("domains_only.json");
    fs::write(&path, r#"{"domains": ["tw1tter.com"]}"#).unwrap();

    let rules = RuleSet::from_json_file(path.to_str().unwrap()).expect("file should load");
    assert_eq!(rules.domains.len(), 1);
    assert!(rules.keywords.is_empty());
    assert!(rules.patterns.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = RuleSet::from_json_file("/nonexistent/rules.json").unwrap_err();
    assert!(err.contains("Failed to read"));
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = scratch_dir("invalid");
    let path = dir.join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let err = RuleSet::from_json_file(path.to_str().unwrap()).unwrap_err();
    assert!(err.contains("Failed to parse"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_dir_merges_in_name_order_and_dedups() {
    let dir = scratch_dir("feed");
    fs::write(
        dir.join("01_base.json"),
        r#"{"domains": ["paypa1.com"], "patterns": ["bit.ly"]}"#,
    )
    .unwrap();
    fs::write(
        dir.join("02_feed.json"),
        r#"{"domains": ["PAYPA1.COM", "g00gle.com"], "patterns": ["tinyurl.com"]}"#,
    )
    .unwrap();
    // Non-JSON files are ignored
    fs::write(dir.join("notes.txt"), "not rules").unwrap();

    let rules = RuleSet::load_dir(dir.to_str().unwrap()).expect("directory should load");
    assert_eq!(rules.domains, vec!["paypa1.com", "g00gle.com"]);
    assert_eq!(rules.patterns, vec!["bit.ly", "tinyurl.com"]);
    assert!(rules.keywords.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_dir_without_rule_files_is_an_error() {
    let dir = scratch_dir("empty_feed");
    fs::write(dir.join("readme.md"), "no rules here").unwrap();

    let err = RuleSet::load_dir(dir.to_str().unwrap()).unwrap_err();
    assert!(err.contains("No .json rule files"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_validation_warnings_surface_bad_feed_entries() {
    let dir = scratch_dir("warnings");
    fs::write(
        dir.join("feed.json"),
        r#"{"domains": ["ok.com", "nodot"], "keywords": [""], "patterns": ["has space"]}"#,
    )
    .unwrap();

    let rules = RuleSet::load_dir(dir.to_str().unwrap()).expect("directory should load");
    let warnings = rules.validate();
    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().any(|w| w.contains("nodot")));

    let _ = fs::remove_dir_all(&dir);
}
