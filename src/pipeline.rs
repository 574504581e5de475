// src/pipeline.rs
//! Search, then filter, then present.

use crate::error::Result;
use crate::filter::get_filter_results;
use crate::graph::Twitterverse;
use crate::present::{get_present_string, sort_usernames};
use crate::query::Query;
use crate::search::get_search_results;

/// Runs search and filter, returning the surviving usernames unsorted.
///
/// # Errors
/// Propagates errors from the search and filter stages.
pub fn select(graph: &Twitterverse, query: &Query) -> Result<Vec<String>> {
    let found = get_search_results(graph, &query.search)?;
    log::info!(
        "Search from '{}' found {} users",
        query.search.username,
        found.len()
    );
    let kept = get_filter_results(graph, &found, &query.filter)?;
    log::info!("Filters kept {} of {} users", kept.len(), found.len());
    Ok(kept)
}

/// Runs the whole query and returns the rendered output.
///
/// # Errors
/// Propagates errors from any stage.
pub fn run_query(graph: &Twitterverse, query: &Query) -> Result<String> {
    let selected = select(graph, query)?;
    get_present_string(graph, &selected, &query.present)
}

/// Runs search and filter, then sorts by the query's key.
///
/// # Errors
/// Propagates errors from any stage.
pub fn run_query_sorted(graph: &Twitterverse, query: &Query) -> Result<Vec<String>> {
    let selected = select(graph, query)?;
    sort_usernames(graph, &selected, query.present.sort_by)
}
