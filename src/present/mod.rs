// src/present/mod.rs
//! Sorting and rendering of the final result list.

pub mod render;
pub mod sort;

pub use render::{render_long, render_short};
pub use sort::{more_popular, name_first, sort_usernames, username_first, Comparator, SortContext};

use crate::error::Result;
use crate::graph::Twitterverse;
use crate::query::{Format, PresentSpec};

/// Sorts `usernames` by `spec.sort_by` and renders them in `spec.format`.
///
/// # Errors
/// Returns `UnknownUser` if the chosen sort or format needs a profile that
/// the graph does not have.
pub fn get_present_string(
    graph: &Twitterverse,
    usernames: &[String],
    spec: &PresentSpec,
) -> Result<String> {
    let sorted = sort_usernames(graph, usernames, spec.sort_by)?;
    match spec.format {
        Format::Short => Ok(render_short(&sorted)),
        Format::Long => render_long(graph, &sorted),
    }
}
