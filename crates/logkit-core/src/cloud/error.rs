//! Cloud client error types

use thiserror::Error;

/// Reasons the cloud backend cannot be used
///
/// Every variant means the same thing to a logger: fall back to the console.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// Built without the `cloud` feature
    #[error("Cloud logging backend is not available in this build")]
    BackendUnavailable,

    #[error("Cloud logging requires a project identifier")]
    MissingProject,

    #[error("Cloud logging requires credentials")]
    MissingCredentials,

    /// The credentials refused to authorize
    #[error("{kind} credentials rejected: {reason}")]
    Rejected { kind: String, reason: String },
}

impl CloudError {
    pub fn rejected(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}

pub type CloudResult<T> = Result<T, CloudError>;
