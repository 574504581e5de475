// src/search.rs
//! Follower/following expansion from a starting user.

use crate::error::Result;
use crate::graph::{FollowerIndex, Twitterverse};
use crate::query::{Operation, SearchSpec};
use std::collections::HashSet;

/// Ordered, duplicate-free list of usernames built up by appends.
#[derive(Debug, Default)]
struct ResultList {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ResultList {
    fn push(&mut self, username: &str) {
        if self.seen.insert(username.to_string()) {
            self.order.push(username.to_string());
        }
    }

    fn extend<'a>(&mut self, usernames: impl IntoIterator<Item = &'a String>) {
        for name in usernames {
            self.push(name);
        }
    }
}

/// Runs the search described by `spec`.
///
/// While the accumulated list is empty an operation expands the starting
/// user. Once it holds names, each operation expands every name in the
/// list, including names appended earlier in the same step. The starting
/// user is only included if the traversal reaches it again.
///
/// # Errors
/// Returns `UnknownUser` if there is at least one operation and the
/// starting user is not in the graph.
pub fn get_search_results(graph: &Twitterverse, spec: &SearchSpec) -> Result<Vec<String>> {
    if spec.operations.is_empty() {
        return Ok(Vec::new());
    }
    let start = graph.require(&spec.username)?;

    let index = spec
        .operations
        .contains(&Operation::Followers)
        .then(|| FollowerIndex::build(graph));
    let expander = Expander { graph, index: index.as_ref() };

    let mut results = ResultList::default();
    for &op in &spec.operations {
        if results.order.is_empty() {
            expander.expand(op, &start.username, &mut results);
        } else {
            let mut cursor = 0;
            while cursor < results.order.len() {
                let candidate = results.order[cursor].clone();
                expander.expand(op, &candidate, &mut results);
                cursor += 1;
            }
        }
        log::debug!("After '{op}': {} users", results.order.len());
    }

    Ok(results.order)
}

struct Expander<'g> {
    graph: &'g Twitterverse,
    index: Option<&'g FollowerIndex>,
}

impl Expander<'_> {
    fn expand(&self, op: Operation, username: &str, results: &mut ResultList) {
        match op {
            Operation::Following => {
                // Names without a profile are opaque and lead nowhere.
                if let Some(user) = self.graph.get(username) {
                    results.extend(&user.following);
                }
            }
            Operation::Followers => {
                if let Some(index) = self.index {
                    results.extend(index.followers(username));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TwitterverseError;
    use crate::graph::User;
    use anyhow::Result;

    fn celebrities() -> Result<Twitterverse> {
        Ok(Twitterverse::from_users([
            User::new("NicoleKidman"),
            User::new("katieH"),
            User::new("PerezHilton").following(["tomCruise", "katieH", "NicoleKidman"]),
            User::new("tomCruise").following(["katieH", "NicoleKidman"]),
        ])?)
    }

    fn search(graph: &Twitterverse, start: &str, ops: &[Operation]) -> Result<Vec<String>> {
        Ok(get_search_results(graph, &SearchSpec::new(start, ops.to_vec()))?)
    }

    #[test]
    fn test_following() -> Result<()> {
        let graph = celebrities()?;
        assert_eq!(
            search(&graph, "tomCruise", &[Operation::Following])?,
            vec!["katieH", "NicoleKidman"]
        );
        Ok(())
    }

    #[test]
    fn test_followers_then_following() -> Result<()> {
        let graph = celebrities()?;
        assert_eq!(
            search(&graph, "tomCruise", &[Operation::Followers, Operation::Following])?,
            vec!["PerezHilton", "tomCruise", "katieH", "NicoleKidman"]
        );
        Ok(())
    }

    #[test]
    fn test_followers_twice() -> Result<()> {
        let graph = celebrities()?;
        assert_eq!(
            search(&graph, "tomCruise", &[Operation::Followers, Operation::Followers])?,
            vec!["PerezHilton"]
        );
        Ok(())
    }

    #[test]
    fn test_no_operations_is_empty_even_for_unknown_user() -> Result<()> {
        let graph = celebrities()?;
        assert!(search(&graph, "tomCruise", &[])?.is_empty());
        assert!(search(&graph, "ghost", &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_start_fails() -> Result<()> {
        let graph = celebrities()?;
        let err = get_search_results(&graph, &SearchSpec::new("ghost", vec![Operation::Following]));
        assert!(matches!(err, Err(TwitterverseError::UnknownUser(ref u)) if u == "ghost"));
        Ok(())
    }

    #[test]
    fn test_dangling_following_is_opaque() -> Result<()> {
        let graph = Twitterverse::from_users([User::new("a").following(["ghost", "b", "ghost"]), User::new("b")])?;
        assert_eq!(
            search(&graph, "a", &[Operation::Following, Operation::Following])?,
            vec!["ghost", "b"]
        );
        Ok(())
    }

    #[test]
    fn test_empty_first_step_retries_from_start() -> Result<()> {
        // "loner" follows nobody, so the second step still starts from "loner".
        let graph = Twitterverse::from_users([
            User::new("loner"),
            User::new("fan").following(["loner"]),
        ])?;
        assert_eq!(
            search(&graph, "loner", &[Operation::Following, Operation::Followers])?,
            vec!["fan"]
        );
        Ok(())
    }

    #[test]
    fn test_step_expands_names_added_in_same_step() -> Result<()> {
        let graph = Twitterverse::from_users([
            User::new("a").following(["b"]),
            User::new("b").following(["c"]),
            User::new("c").following(["d"]),
            User::new("d"),
        ])?;
        assert_eq!(
            search(&graph, "a", &[Operation::Following, Operation::Following])?,
            vec!["b", "c", "d"]
        );
        Ok(())
    }

    #[test]
    fn test_start_user_can_reappear() -> Result<()> {
        let graph = Twitterverse::from_users([
            User::new("a").following(["b"]),
            User::new("b").following(["a"]),
        ])?;
        assert_eq!(
            search(&graph, "a", &[Operation::Following, Operation::Following])?,
            vec!["b", "a"]
        );
        Ok(())
    }
}
