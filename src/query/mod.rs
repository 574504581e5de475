// src/query/mod.rs
//! Query specifications: what to search, how to filter, how to present.

pub mod parser;

pub use parser::{load_query, parse_query, parse_query_with_defaults};

use crate::error::{Result, TwitterverseError};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One traversal step of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Users who follow each candidate.
    Followers,
    /// Users each candidate follows.
    Following,
}

impl FromStr for Operation {
    type Err = TwitterverseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "followers" => Ok(Self::Followers),
            "following" => Ok(Self::Following),
            other => Err(TwitterverseError::MalformedSpec {
                field: "operation",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Followers => "followers",
            Self::Following => "following",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSpec {
    pub username: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl SearchSpec {
    #[must_use]
    pub fn new(username: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            username: username.into(),
            operations,
        }
    }
}

/// A recognized filter with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Keep candidates who follow this user.
    Following(String),
    /// Keep candidates this user follows.
    Follower(String),
    /// Case-insensitive substring of the display name.
    NameIncludes(String),
    /// Case-insensitive substring of the location.
    LocationIncludes(String),
}

impl Filter {
    /// Interprets a `name -> argument` entry; `None` for names we do not know.
    #[must_use]
    pub fn from_entry(name: &str, arg: &str) -> Option<Self> {
        let arg = arg.to_string();
        match name {
            "following" => Some(Self::Following(arg)),
            "follower" => Some(Self::Follower(arg)),
            "name-includes" => Some(Self::NameIncludes(arg)),
            "location-includes" => Some(Self::LocationIncludes(arg)),
            _ => None,
        }
    }
}

/// Filter name -> argument, in the order names were first given.
///
/// Setting a name that is already present replaces its argument. Serialized
/// as a map in that same order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    entries: Vec<(String, String)>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, arg: impl Into<String>) {
        let name = name.into();
        let arg = arg.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = arg,
            None => self.entries.push((name, arg)),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, arg: impl Into<String>) -> Self {
        self.insert(name, arg);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for FilterSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for FilterSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FilterSpecVisitor;

        impl<'de> Visitor<'de> for FilterSpecVisitor {
            type Value = FilterSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of filter name to argument")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<FilterSpec, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut spec = FilterSpec::new();
                while let Some((name, arg)) = map.next_entry::<String, String>()? {
                    spec.insert(name, arg);
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_map(FilterSpecVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Username,
    Name,
    Popularity,
}

impl FromStr for SortKey {
    type Err = TwitterverseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "username" => Ok(Self::Username),
            "name" => Ok(Self::Name),
            "popularity" => Ok(Self::Popularity),
            other => Err(TwitterverseError::MalformedSpec {
                field: "sort-by",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Short,
    Long,
}

impl FromStr for Format {
    type Err = TwitterverseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(TwitterverseError::MalformedSpec {
                field: "format",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresentSpec {
    #[serde(default, rename = "sort-by", alias = "sort_by")]
    pub sort_by: SortKey,
    #[serde(default)]
    pub format: Format,
}

impl PresentSpec {
    #[must_use]
    pub fn new(sort_by: SortKey, format: Format) -> Self {
        Self { sort_by, format }
    }
}

/// A complete query file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    pub search: SearchSpec,
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub present: PresentSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_spec_replaces_existing() {
        let spec = FilterSpec::new()
            .with("following", "a")
            .with("name-includes", "x")
            .with("following", "b");
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("following"), Some("b"));
        let names: Vec<&str> = spec.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["following", "name-includes"]);
    }

    #[test]
    fn test_filter_spec_serializes_as_ordered_map() -> anyhow::Result<()> {
        let spec = FilterSpec::new()
            .with("name-includes", "x")
            .with("following", "a");
        let json = serde_json::to_string(&spec)?;
        assert_eq!(json, r#"{"name-includes":"x","following":"a"}"#);

        let back: FilterSpec = serde_json::from_str(&json)?;
        assert_eq!(back, spec);
        Ok(())
    }

    #[test]
    fn test_query_filter_from_toml_table() -> anyhow::Result<()> {
        let query: Query = toml::from_str(
            "[search]\nusername = \"tomCruise\"\n\n[filter]\nfollower = \"katieH\"\n",
        )?;
        assert_eq!(query.filter.get("follower"), Some("katieH"));
        assert_eq!(query.filter.len(), 1);
        Ok(())
    }

    #[test]
    fn test_unknown_filter_name() {
        assert_eq!(Filter::from_entry("bio-includes", "x"), None);
        assert_eq!(
            Filter::from_entry("follower", "tom"),
            Some(Filter::Follower("tom".into()))
        );
    }

    #[test]
    fn test_sort_key_rejects_unknown() {
        assert!(matches!(
            "age".parse::<SortKey>(),
            Err(TwitterverseError::MalformedSpec { field: "sort-by", .. })
        ));
        assert!(matches!("popularity".parse::<SortKey>(), Ok(SortKey::Popularity)));
    }

    #[test]
    fn test_format_rejects_unknown() {
        assert!(matches!(
            "medium".parse::<Format>(),
            Err(TwitterverseError::MalformedSpec { field: "format", .. })
        ));
    }
}
