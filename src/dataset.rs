// src/dataset.rs
//! Reader for the line-oriented dataset format.
//!
//! Each record is:
//!
//! ```text
//! username
//! display name
//! location
//! website
//! bio line 1
//! bio line 2
//! ENDBIO
//! followed-username
//! followed-username
//! END
//! ```
//!
//! Records may be separated by blank lines. End of input ends the dataset.

use crate::error::{Result, TwitterverseError};
use crate::graph::{Twitterverse, User};
use std::fs;
use std::path::Path;

const END_BIO: &str = "ENDBIO";
const END_FOLLOWING: &str = "END";

/// Reads and parses a dataset file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or any error from [`parse_dataset`].
pub fn load_dataset(path: &Path) -> Result<Twitterverse> {
    let content = fs::read_to_string(path).map_err(|source| TwitterverseError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let graph = parse_dataset(&content)?;
    log::info!("Loaded {} users from {}", graph.len(), path.display());
    Ok(graph)
}

/// Parses dataset text into a graph.
///
/// # Errors
/// Returns `DatasetParse` for truncated records and `DuplicateUser` when a
/// username appears twice.
pub fn parse_dataset(input: &str) -> Result<Twitterverse> {
    let mut cursor = LineCursor::new(input);
    let mut graph = Twitterverse::new();

    while let Some((line_no, username)) = cursor.next_non_blank() {
        let user = parse_record(&mut cursor, username.trim())?;
        log::debug!(
            "Parsed user '{}' (line {line_no}, following {})",
            user.username,
            user.following.len()
        );
        graph.insert(user, line_no)?;
    }

    Ok(graph)
}

fn parse_record(cursor: &mut LineCursor<'_>, username: &str) -> Result<User> {
    let name = cursor.require(username, "name")?.trim();
    let location = cursor.require(username, "location")?.trim();
    let website = cursor.require(username, "website")?.trim();
    let bio = parse_bio(cursor, username)?;
    let following = parse_following(cursor, username)?;

    Ok(User {
        username: username.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        website: website.to_string(),
        bio,
        following,
    })
}

fn parse_bio(cursor: &mut LineCursor<'_>, username: &str) -> Result<String> {
    let mut lines = Vec::new();
    loop {
        match cursor.advance() {
            Some((_, line)) if line.trim() == END_BIO => return Ok(lines.join("\n")),
            Some((_, line)) => lines.push(line),
            None => return Err(cursor.eof_error(username, END_BIO)),
        }
    }
}

fn parse_following(cursor: &mut LineCursor<'_>, username: &str) -> Result<Vec<String>> {
    let mut following = Vec::new();
    loop {
        match cursor.advance() {
            Some((_, line)) => {
                let trimmed = line.trim();
                if trimmed == END_FOLLOWING {
                    return Ok(following);
                }
                if !trimmed.is_empty() {
                    following.push(trimmed.to_string());
                }
            }
            None => return Err(cursor.eof_error(username, END_FOLLOWING)),
        }
    }
}

/// Line iterator that remembers the last 1-based line number it handed out.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line_no: 0,
        }
    }

    fn advance(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some((self.line_no, line))
    }

    fn next_non_blank(&mut self) -> Option<(usize, &'a str)> {
        loop {
            let (line_no, line) = self.advance()?;
            if !line.trim().is_empty() {
                return Some((line_no, line));
            }
        }
    }

    fn require(&mut self, username: &str, field: &str) -> Result<&'a str> {
        self.advance().map(|(_, line)| line).ok_or_else(|| TwitterverseError::DatasetParse {
            line: self.line_no + 1,
            message: format!("record for '{username}' ends before its {field} line"),
        })
    }

    fn eof_error(&self, username: &str, terminator: &str) -> TwitterverseError {
        TwitterverseError::DatasetParse {
            line: self.line_no + 1,
            message: format!("record for '{username}' is missing its {terminator} line"),
        }
    }
}
