// tests/integration_cli.rs
//! `followers` and `check` handlers run against dataset files on disk.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use twitterverse_core::cli::handlers::{handle_check, handle_followers};
use twitterverse_core::exit::TwitterverseExit;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/celebrities.txt")
}

#[test]
fn test_followers_known_user() -> Result<()> {
    assert_eq!(handle_followers(&fixture(), "katieH")?, TwitterverseExit::Success);
    Ok(())
}

#[test]
fn test_followers_unknown_user_still_succeeds() -> Result<()> {
    assert_eq!(handle_followers(&fixture(), "ghost")?, TwitterverseExit::Success);
    Ok(())
}

#[test]
fn test_check_text_and_json() -> Result<()> {
    assert_eq!(handle_check(&fixture(), false)?, TwitterverseExit::Success);
    assert_eq!(handle_check(&fixture(), true)?, TwitterverseExit::Success);
    Ok(())
}

#[test]
fn test_check_with_warnings_succeeds() -> Result<()> {
    let dir = TempDir::new()?;
    let data = dir.path().join("data.txt");
    fs::write(&data, "a\nA\n\n\nENDBIO\nghost\na\nEND\n")?;
    assert_eq!(handle_check(&data, false)?, TwitterverseExit::Success);
    Ok(())
}

#[test]
fn test_missing_dataset_is_generic_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.txt");

    let err = handle_followers(&missing, "katieH")
        .err()
        .ok_or_else(|| anyhow::anyhow!("followers should fail"))?;
    assert_eq!(TwitterverseExit::from_error(&err), TwitterverseExit::Error);

    let err = handle_check(&missing, true)
        .err()
        .ok_or_else(|| anyhow::anyhow!("check should fail"))?;
    assert_eq!(TwitterverseExit::from_error(&err), TwitterverseExit::Error);
    Ok(())
}

#[test]
fn test_malformed_dataset_is_invalid_input() -> Result<()> {
    let dir = TempDir::new()?;
    let data = dir.path().join("data.txt");
    fs::write(&data, "a\nA\nhere\nweb\nno end\n")?;
    let err = handle_check(&data, false)
        .err()
        .ok_or_else(|| anyhow::anyhow!("check should fail"))?;
    assert_eq!(TwitterverseExit::from_error(&err), TwitterverseExit::InvalidInput);
    Ok(())
}
