// src/graph/mod.rs
//! The in-memory social graph and the queries derived from it.

pub mod followers;
pub mod store;
pub mod validation;

pub use followers::{all_followers, FollowerIndex};
pub use store::{Twitterverse, User};
pub use validation::{validate, DatasetReport};
