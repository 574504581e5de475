// src/present/sort.rs
//! Result ordering. Every comparator is total, so a stable sort gives a
//! fully deterministic order.

use crate::error::Result;
use crate::graph::{FollowerIndex, Twitterverse};
use crate::query::SortKey;
use std::cmp::Ordering;

/// Compares two usernames using data from the graph.
pub type Comparator = fn(&SortContext<'_>, &str, &str) -> Ordering;

/// Graph data a comparator may consult.
pub struct SortContext<'g> {
    graph: &'g Twitterverse,
    index: Option<FollowerIndex>,
}

impl<'g> SortContext<'g> {
    #[must_use]
    pub fn new(graph: &'g Twitterverse) -> Self {
        Self { graph, index: None }
    }

    /// Precomputes follower counts so popularity comparisons do not rescan the graph.
    #[must_use]
    pub fn with_follower_index(graph: &'g Twitterverse) -> Self {
        Self {
            graph,
            index: Some(FollowerIndex::build(graph)),
        }
    }

    fn name(&self, username: &str) -> &'g str {
        self.graph.get(username).map_or("", |u| u.name.as_str())
    }

    fn follower_count(&self, username: &str) -> usize {
        match &self.index {
            Some(index) => index.follower_count(username),
            None => crate::graph::all_followers(self.graph, username).len(),
        }
    }
}

/// Alphabetical by username.
#[must_use]
pub fn username_first(_ctx: &SortContext<'_>, a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Alphabetical by display name, then by username.
#[must_use]
pub fn name_first(ctx: &SortContext<'_>, a: &str, b: &str) -> Ordering {
    ctx.name(a)
        .cmp(ctx.name(b))
        .then_with(|| username_first(ctx, a, b))
}

/// More followers first, then by username.
#[must_use]
pub fn more_popular(ctx: &SortContext<'_>, a: &str, b: &str) -> Ordering {
    ctx.follower_count(b)
        .cmp(&ctx.follower_count(a))
        .then_with(|| username_first(ctx, a, b))
}

impl SortKey {
    #[must_use]
    pub fn comparator(self) -> Comparator {
        match self {
            Self::Username => username_first,
            Self::Name => name_first,
            Self::Popularity => more_popular,
        }
    }
}

/// Returns a sorted copy of `usernames`; the input is left untouched.
///
/// # Errors
/// Returns `UnknownUser` when sorting by name and a username has no profile.
pub fn sort_usernames(
    graph: &Twitterverse,
    usernames: &[String],
    key: SortKey,
) -> Result<Vec<String>> {
    let ctx = match key {
        SortKey::Name => {
            for username in usernames {
                graph.require(username)?;
            }
            SortContext::new(graph)
        }
        SortKey::Popularity => SortContext::with_follower_index(graph),
        SortKey::Username => SortContext::new(graph),
    };

    let cmp = key.comparator();
    let mut sorted = usernames.to_vec();
    sorted.sort_by(|a, b| cmp(&ctx, a, b));
    Ok(sorted)
}
