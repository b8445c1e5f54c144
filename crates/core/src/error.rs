//! # Error Types
//!
//! Failures surfaced by the coordination engine. None of these are fatal to
//! the process; callers recover by retrying with valid input.

use thiserror::Error;

use crate::state::SessionError;

/// Errors produced by coordination operations
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// The operation needs a current initiative and none has been created
    #[error("no active initiative - create one first")]
    NoActiveInitiative,

    /// Writing the session record failed
    #[error(transparent)]
    Session(#[from] SessionError),
}
