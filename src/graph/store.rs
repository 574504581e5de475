// src/graph/store.rs
//! User profiles and the username-keyed store that holds them.

use crate::error::{Result, TwitterverseError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single profile from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    /// Raw bio text; may span several lines.
    #[serde(default)]
    pub bio: String,
    /// Usernames this user follows, in file order. Entries are opaque and
    /// may name users that have no profile.
    #[serde(default)]
    pub following: Vec<String>,
}

impl User {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    #[must_use]
    pub fn following<I, S>(mut self, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.following = usernames.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn follows(&self, username: &str) -> bool {
        self.following.iter().any(|f| f == username)
    }
}

/// The whole dataset: username -> profile.
///
/// Users are kept in insertion order so every scan over the graph (and
/// therefore every derived follower list) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Twitterverse {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl Twitterverse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from profiles, rejecting repeated usernames.
    ///
    /// There are no source lines here, so a `DuplicateUser` error carries the
    /// 1-based position of the repeated profile in `users` as its `line`.
    ///
    /// # Errors
    /// Returns `DuplicateUser` if two profiles share a username.
    pub fn from_users<I>(users: I) -> Result<Self>
    where
        I: IntoIterator<Item = User>,
    {
        let mut graph = Self::new();
        for (position, user) in users.into_iter().enumerate() {
            graph.insert(user, position + 1)?;
        }
        Ok(graph)
    }

    /// Adds a profile. `line` is reported back if the username is taken.
    ///
    /// # Errors
    /// Returns `DuplicateUser` if the username is already present.
    pub fn insert(&mut self, user: User, line: usize) -> Result<()> {
        if self.contains(&user.username) {
            return Err(TwitterverseError::DuplicateUser {
                username: user.username,
                line,
            });
        }
        self.push(user);
        Ok(())
    }

    fn push(&mut self, user: User) {
        self.index.insert(user.username.clone(), self.users.len());
        self.users.push(user);
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&User> {
        self.index.get(username).map(|&i| &self.users[i])
    }

    /// Looks up a profile that must exist.
    ///
    /// # Errors
    /// Returns `UnknownUser` if there is no profile for `username`.
    pub fn require(&self, username: &str) -> Result<&User> {
        self.get(username)
            .ok_or_else(|| TwitterverseError::UnknownUser(username.to_string()))
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.index.contains_key(username)
    }

    /// Profiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|u| u.username.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<'a> IntoIterator for &'a Twitterverse {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_insertion_order_is_kept() -> Result<()> {
        let graph = Twitterverse::from_users([User::new("zed"), User::new("amy"), User::new("kim")])?;
        let names: Vec<&str> = graph.usernames().collect();
        assert_eq!(names, vec!["zed", "amy", "kim"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Twitterverse::from_users([User::new("a"), User::new("a")]);
        assert!(matches!(
            result,
            Err(TwitterverseError::DuplicateUser { ref username, line: 2 }) if username == "a"
        ));
    }

    #[test]
    fn test_duplicate_reports_input_position() {
        let result =
            Twitterverse::from_users([User::new("a"), User::new("b"), User::new("c"), User::new("b")]);
        assert!(matches!(
            result,
            Err(TwitterverseError::DuplicateUser { ref username, line: 4 }) if username == "b"
        ));
    }

    #[test]
    fn test_require_unknown() {
        let graph = Twitterverse::new();
        assert!(matches!(
            graph.require("ghost"),
            Err(TwitterverseError::UnknownUser(ref u)) if u == "ghost"
        ));
    }

    #[test]
    fn test_usernames_are_case_sensitive() -> Result<()> {
        let graph = Twitterverse::from_users([User::new("Alice"), User::new("alice")])?;
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("Alice"));
        assert!(!graph.contains("ALICE"));
        Ok(())
    }
}
