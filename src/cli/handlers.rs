// src/cli/handlers.rs
use crate::config::Config;
use crate::dataset;
use crate::exit::TwitterverseExit;
use crate::graph::{self, Twitterverse, User};
use crate::pipeline;
use crate::present::render_short;
use crate::query::{self, Query};
use crate::reporting;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a Query,
    results: Vec<User>,
}

fn load_graph(data: &Path) -> Result<Twitterverse> {
    dataset::load_dataset(data).with_context(|| format!("Failed to load dataset {}", data.display()))
}

fn load_query(path: &Path, config: &Config) -> Result<Query> {
    query::load_query(path, config.present)
        .with_context(|| format!("Failed to load query {}", path.display()))
}

/// Runs a query file and returns what `query` prints.
///
/// # Errors
/// Returns error if either file fails to load or the query fails.
pub fn render_query(data: &Path, query_path: &Path, config: &Config, json: bool) -> Result<String> {
    let graph = load_graph(data)?;
    let query = load_query(query_path, config)?;

    if json {
        let results = pipeline::run_query_sorted(&graph, &query)?
            .into_iter()
            .map(|name| graph.get(&name).cloned().unwrap_or_else(|| User::new(name)))
            .collect();
        let out = JsonOutput { query: &query, results };
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(pipeline::run_query(&graph, &query)?)
}

/// Handles the query command.
///
/// # Errors
/// Returns error if loading or running the query fails.
pub fn handle_query(data: &Path, query_path: &Path, config: &Config, json: bool) -> Result<TwitterverseExit> {
    let output = render_query(data, query_path, config, json)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(TwitterverseExit::Success)
}

/// Handles the followers command.
///
/// # Errors
/// Returns error if the dataset fails to load.
pub fn handle_followers(data: &Path, username: &str) -> Result<TwitterverseExit> {
    let graph = load_graph(data)?;
    if !graph.contains(username) {
        log::warn!("'{username}' has no profile in {}", data.display());
    }
    println!("{}", render_short(&graph::all_followers(&graph, username)));
    Ok(TwitterverseExit::Success)
}

/// Handles the check command.
///
/// # Errors
/// Returns error if the dataset fails to load or the report cannot be written.
pub fn handle_check(data: &Path, json: bool) -> Result<TwitterverseExit> {
    let graph = load_graph(data)?;
    let report = graph::validate(&graph);
    if json {
        reporting::print_report_json(&report)?;
    } else {
        reporting::print_report(&report)?;
    }
    Ok(TwitterverseExit::Success)
}
