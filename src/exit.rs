// src/exit.rs
//! Standardized process exit codes for `twitterverse`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::TwitterverseError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TwitterverseExit {
    /// Query ran to completion.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (dataset/query parse error, malformed spec value).
    InvalidInput = 2,
    /// A username named by the query or required for presentation is not in the dataset.
    UnknownUser = 3,
}

impl TwitterverseExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Classifies an error chain by the first library error found in it.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let found = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<TwitterverseError>());
        match found {
            Some(TwitterverseError::UnknownUser(_)) => Self::UnknownUser,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for TwitterverseExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
