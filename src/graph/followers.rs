// src/graph/followers.rs
//! "Who follows X" queries.

use super::store::Twitterverse;
use std::collections::{HashMap, HashSet};

/// Returns every user whose following list contains `username`, in graph order.
///
/// Unknown usernames are not an error; they simply have no followers.
#[must_use]
pub fn all_followers(graph: &Twitterverse, username: &str) -> Vec<String> {
    graph
        .iter()
        .filter(|user| user.follows(username))
        .map(|user| user.username.clone())
        .collect()
}

/// Reverse adjacency built in a single pass over the graph.
///
/// `followers(x)` yields the same names in the same order as
/// [`all_followers`], without rescanning the graph per lookup.
#[derive(Debug, Clone, Default)]
pub struct FollowerIndex {
    followers: HashMap<String, Vec<String>>,
}

impl FollowerIndex {
    #[must_use]
    pub fn build(graph: &Twitterverse) -> Self {
        let mut followers: HashMap<String, Vec<String>> = HashMap::new();
        for user in graph {
            // A name repeated in one following list still counts once.
            let mut seen = HashSet::new();
            for target in &user.following {
                if seen.insert(target.as_str()) {
                    followers
                        .entry(target.clone())
                        .or_default()
                        .push(user.username.clone());
                }
            }
        }
        log::debug!(
            "Built follower index: {} users, {} followed names",
            graph.len(),
            followers.len()
        );
        Self { followers }
    }

    #[must_use]
    pub fn followers(&self, username: &str) -> &[String] {
        self.followers.get(username).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn follower_count(&self, username: &str) -> usize {
        self.followers(username).len()
    }
}
