//! Orchestration between the views and the customer directory.
//!
//! Services own the user-facing outcome of every directory call: each
//! failure is logged and mapped to a [`ServiceError`] carrying the message
//! the view should display.

use thiserror::Error;

use crate::directory::errors::DirectoryError;

pub mod customer;
pub mod list;
pub mod toggle;

/// User-facing failure raised by a service operation.
///
/// Variants that originate from a directory call carry the display message:
/// the server-supplied one when the failure envelope had it, otherwise the
/// operation's fixed fallback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    FetchFailed(String),

    #[error("{0}")]
    DeleteFailed(String),

    #[error("{0}")]
    SubmitFailed(String),

    #[error("{0}")]
    UpdateFailed(String),

    /// A guarded transition was attempted while its precondition did not
    /// hold. Nothing was sent to the directory.
    #[error("Operation not allowed in the current state")]
    InvariantViolation,

    /// The form did not pass its submit rules; the payload never left the
    /// client.
    #[error("{0}")]
    ValidationFailed(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// The message to render next to the affected control.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// One-shot notification raised after a mutation, consumed by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(message) | Flash::Error(message) => message,
        }
    }
}

/// Picks the display message for a failed directory call: the server's
/// message when present, the operation fallback otherwise.
pub(crate) fn display_message(err: &DirectoryError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}
