// src/query/parser.rs
use super::{Filter, FilterSpec, Operation, PresentSpec, Query, SearchSpec};
use crate::error::{Result, TwitterverseError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Search,
    Filter,
    Present,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "SEARCH" => Some(Self::Search),
            "FILTER" => Some(Self::Filter),
            "PRESENT" => Some(Self::Present),
            _ => None,
        }
    }

    fn can_enter(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Preamble, Self::Search)
                | (Self::Search, Self::Filter | Self::Present)
                | (Self::Filter, Self::Present)
        )
    }
}

/// Reads and parses a query file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or any error from [`parse_query_with_defaults`].
pub fn load_query(path: &Path, defaults: PresentSpec) -> Result<Query> {
    let content = fs::read_to_string(path).map_err(|source| TwitterverseError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_query_with_defaults(&content, defaults)
}

/// Parses a query, using `username` sort and `short` format when the
/// PRESENT section leaves them out.
///
/// # Errors
/// See [`parse_query_with_defaults`].
pub fn parse_query(input: &str) -> Result<Query> {
    parse_query_with_defaults(input, PresentSpec::default())
}

/// Parses a query made of `SEARCH`, `FILTER` and `PRESENT` sections.
///
/// # Errors
/// Returns `QueryParse` for structural problems (missing SEARCH, unknown
/// operation, stray lines) and `MalformedSpec` for unknown sort or format values.
pub fn parse_query_with_defaults(input: &str, defaults: PresentSpec) -> Result<Query> {
    let mut builder = QueryBuilder::new(defaults);
    let mut last_line = 0;

    for (idx, raw) in input.lines().enumerate() {
        last_line = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        builder.feed(line, last_line)?;
    }

    builder.finish(last_line + 1)
}

struct QueryBuilder {
    section: Section,
    username: Option<String>,
    operations: Vec<Operation>,
    filter: FilterSpec,
    present: PresentSpec,
}

impl QueryBuilder {
    fn new(defaults: PresentSpec) -> Self {
        Self {
            section: Section::Preamble,
            username: None,
            operations: Vec::new(),
            filter: FilterSpec::new(),
            present: defaults,
        }
    }

    fn feed(&mut self, line: &str, line_no: usize) -> Result<()> {
        if let Some(next) = Section::from_header(line) {
            return self.enter(next, line_no);
        }
        match self.section {
            Section::Preamble => Err(parse_error(
                line_no,
                format!("expected SEARCH, found '{line}'"),
            )),
            Section::Search => self.search_line(line, line_no),
            Section::Filter => {
                self.filter_line(line, line_no);
                Ok(())
            }
            Section::Present => self.present_line(line, line_no),
        }
    }

    fn enter(&mut self, next: Section, line_no: usize) -> Result<()> {
        if !self.section.can_enter(next) {
            return Err(parse_error(
                line_no,
                format!("section {next:?} is out of order or repeated"),
            ));
        }
        if self.section == Section::Search && self.username.is_none() {
            return Err(parse_error(line_no, "SEARCH section has no username"));
        }
        self.section = next;
        Ok(())
    }

    fn search_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        if self.username.is_none() {
            self.username = Some(line.to_string());
            return Ok(());
        }
        let op = line
            .parse::<Operation>()
            .map_err(|_| parse_error(line_no, format!("unknown search operation '{line}'")))?;
        self.operations.push(op);
        Ok(())
    }

    fn filter_line(&mut self, line: &str, line_no: usize) {
        let (name, arg) = split_entry(line);
        if Filter::from_entry(name, arg).is_none() {
            log::warn!("Ignoring unknown filter '{name}' on line {line_no}");
        }
        self.filter.insert(name, arg);
    }

    fn present_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let (key, value) = split_entry(line);
        if value.is_empty() {
            return Err(parse_error(line_no, format!("'{key}' needs a value")));
        }
        match key {
            "sort-by" => self.present.sort_by = value.parse()?,
            "format" => self.present.format = value.parse()?,
            other => {
                return Err(parse_error(
                    line_no,
                    format!("unknown presentation setting '{other}'"),
                ))
            }
        }
        Ok(())
    }

    fn finish(self, eof_line: usize) -> Result<Query> {
        if self.section == Section::Preamble {
            return Err(parse_error(eof_line, "query has no SEARCH section"));
        }
        let username = self
            .username
            .ok_or_else(|| parse_error(eof_line, "SEARCH section has no username"))?;

        Ok(Query {
            search: SearchSpec::new(username, self.operations),
            filter: self.filter,
            present: self.present,
        })
    }
}

/// Splits `name rest of line` at the first run of whitespace.
fn split_entry(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> TwitterverseError {
    TwitterverseError::QueryParse {
        line,
        message: message.into(),
    }
}
