// tests/unit_dataset.rs
//! Loading dataset files from disk.

use anyhow::Result;
use std::fs;
use std::path::Path;
use twitterverse_core::dataset::load_dataset;
use twitterverse_core::graph::validate;
use twitterverse_core::TwitterverseError;

#[test]
fn test_load_fixture() -> Result<()> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/celebrities.txt");
    let graph = load_dataset(&path)?;
    let names: Vec<&str> = graph.usernames().collect();
    assert_eq!(names, vec!["tomCruise", "PerezHilton", "katieH", "NicoleKidman"]);

    let nicole = graph.require("NicoleKidman")?;
    assert_eq!(nicole.website, "");
    assert!(nicole.bio.contains("Halloween!"));
    assert!(nicole.bio.ends_with("have fun tonight"));

    let report = validate(&graph);
    assert!(report.is_clean());
    assert_eq!(report.follow_edges, 5);
    Ok(())
}

#[test]
fn test_missing_file_reports_path() -> Result<()> {
    let d = tempfile::tempdir()?;
    let path = d.path().join("absent.txt");
    match load_dataset(&path) {
        Err(TwitterverseError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_truncated_file() -> Result<()> {
    let d = tempfile::tempdir()?;
    let path = d.path().join("cut.txt");
    fs::write(&path, "a\nA\nsomewhere\nweb\nbio\nENDBIO\nb\n")?;
    let err = load_dataset(&path).err().map(|e| e.to_string()).unwrap_or_default();
    assert!(err.contains("line 8"), "{err}");
    Ok(())
}
