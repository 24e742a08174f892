//! Centralized error types for the adapter SDK
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Domain validation failures, surfaced before any adapter logic runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("no releases specified")]
    NoReleases,

    #[error("instance group '{group}' must have at least 1 instance")]
    InstanceCountTooLow { group: String },

    #[error("instance group '{group}' must list at least one network")]
    NoNetworks { group: String },
}

/// Command-line protocol failures: bad command token or wrong argument arity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no subcommand given")]
    MissingCommand,

    #[error("unknown subcommand: {command}")]
    Unknown { command: String },

    #[error("{command} expects {expected} positional arguments, got {actual}")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Binding failures an adapter reports back to the orchestrator
///
/// The dispatcher propagates these opaquely; the named variants exist so the
/// orchestrator side can distinguish "already exists" and "not found" from
/// generic adapter failures.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("binding '{binding_id}' already exists")]
    AlreadyExists { binding_id: String },

    #[error("binding '{binding_id}' not found")]
    NotFound { binding_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
