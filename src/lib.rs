pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit;
pub mod filter;
pub mod graph;
pub mod pipeline;
pub mod present;
pub mod query;
pub mod reporting;
pub mod search;

pub use error::{Result, TwitterverseError};
pub use filter::get_filter_results;
pub use graph::{all_followers, FollowerIndex, Twitterverse, User};
pub use present::get_present_string;
pub use query::{FilterSpec, Format, Operation, PresentSpec, Query, SearchSpec, SortKey};
pub use search::get_search_results;
