// src/graph/validation.rs
//! Consistency checks over a loaded dataset.
//!
//! None of these conditions stop a query from running; they are reported so
//! that a dataset author can spot typos in following lists.

use super::store::Twitterverse;
use serde::Serialize;
use std::collections::HashSet;

/// A following entry that names a user with no profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingFollow {
    pub follower: String,
    pub target: String,
}

/// Findings collected by [`validate`].
#[derive(Debug, Default, Serialize)]
pub struct DatasetReport {
    pub users: usize,
    pub follow_edges: usize,
    pub dangling: Vec<DanglingFollow>,
    pub self_follows: Vec<String>,
    /// `(user, repeated target)` pairs.
    pub repeated_follows: Vec<(String, String)>,
}

impl DatasetReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.self_follows.is_empty() && self.repeated_follows.is_empty()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.dangling.len() + self.self_follows.len() + self.repeated_follows.len()
    }
}

/// Scans every following list once.
#[must_use]
pub fn validate(graph: &Twitterverse) -> DatasetReport {
    let mut report = DatasetReport {
        users: graph.len(),
        ..DatasetReport::default()
    };

    for user in graph {
        let mut seen = HashSet::new();
        for target in &user.following {
            report.follow_edges += 1;
            if !seen.insert(target.as_str()) {
                report
                    .repeated_follows
                    .push((user.username.clone(), target.clone()));
                continue;
            }
            if target == &user.username {
                report.self_follows.push(user.username.clone());
            }
            if !graph.contains(target) {
                report.dangling.push(DanglingFollow {
                    follower: user.username.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::User;
    use anyhow::Result;

    #[test]
    fn test_clean_dataset() -> Result<()> {
        let graph = Twitterverse::from_users([User::new("a").following(["b"]), User::new("b")])?;
        let report = validate(&graph);
        assert!(report.is_clean());
        assert_eq!(report.users, 2);
        assert_eq!(report.follow_edges, 1);
        Ok(())
    }

    #[test]
    fn test_findings() -> Result<()> {
        let graph = Twitterverse::from_users([
            User::new("a").following(["a", "ghost", "ghost"]),
            User::new("b"),
        ])?;
        let report = validate(&graph);
        assert_eq!(report.self_follows, vec!["a"]);
        assert_eq!(
            report.dangling,
            vec![DanglingFollow {
                follower: "a".into(),
                target: "ghost".into()
            }]
        );
        assert_eq!(report.repeated_follows, vec![("a".to_string(), "ghost".to_string())]);
        assert_eq!(report.warning_count(), 3);
        Ok(())
    }
}
