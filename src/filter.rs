// src/filter.rs
//! Narrows a candidate list with the filters of a query.
//!
//! Every recognized filter is evaluated on its own against the full
//! candidate list. A candidate survives only if it passes all of them.

use crate::error::Result;
use crate::graph::{all_followers, Twitterverse};
use crate::query::{Filter, FilterSpec};
use std::collections::HashSet;

/// Returns the candidates that satisfy every filter in `spec`, in their
/// original order. Unrecognized filter names are skipped.
///
/// # Errors
/// Returns `UnknownUser` if a `following`/`follower` argument is not in the
/// graph, or if a substring filter meets a candidate with no profile.
pub fn get_filter_results(
    graph: &Twitterverse,
    usernames: &[String],
    spec: &FilterSpec,
) -> Result<Vec<String>> {
    let mut pass_sets = Vec::new();
    for (name, arg) in spec.iter() {
        let Some(filter) = Filter::from_entry(name, arg) else {
            log::debug!("Skipping unrecognized filter '{name}'");
            continue;
        };
        let passed = pass_set(graph, usernames, &filter)?;
        log::debug!("Filter {filter:?} keeps {} of {}", passed.len(), usernames.len());
        pass_sets.push(passed);
    }

    Ok(usernames
        .iter()
        .filter(|u| pass_sets.iter().all(|set| set.contains(u.as_str())))
        .cloned()
        .collect())
}

fn pass_set<'a>(
    graph: &Twitterverse,
    usernames: &'a [String],
    filter: &Filter,
) -> Result<HashSet<&'a str>> {
    let mut passed = HashSet::new();
    match filter {
        Filter::Following(target) => {
            graph.require(target)?;
            let followers: HashSet<String> = all_followers(graph, target).into_iter().collect();
            passed.extend(
                usernames
                    .iter()
                    .filter(|u| followers.contains(u.as_str()))
                    .map(String::as_str),
            );
        }
        Filter::Follower(source) => {
            let source = graph.require(source)?;
            passed.extend(
                usernames
                    .iter()
                    .filter(|u| source.follows(u))
                    .map(String::as_str),
            );
        }
        Filter::NameIncludes(needle) => {
            let needle = needle.to_lowercase();
            for candidate in usernames {
                if graph.require(candidate)?.name.to_lowercase().contains(&needle) {
                    passed.insert(candidate.as_str());
                }
            }
        }
        Filter::LocationIncludes(needle) => {
            let needle = needle.to_lowercase();
            for candidate in usernames {
                if graph.require(candidate)?.location.to_lowercase().contains(&needle) {
                    passed.insert(candidate.as_str());
                }
            }
        }
    }
    Ok(passed)
}
