//! Credentials marker trait

use std::fmt::Debug;
use std::sync::Arc;

use thiserror::Error;

/// Errors a credentials value can report when asked to authorize
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Credentials revoked: {0}")]
    Revoked(String),

    #[error("Credentials error: {0}")]
    Other(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Opaque proof of identity for a cloud backend
///
/// There are no required methods. Consumers treat a value as an opaque token and
/// only forward it to the backend client.
pub trait Credentials: Debug + Send + Sync {
    /// Short label for diagnostics
    fn kind(&self) -> &str {
        "opaque"
    }

    /// Check the credentials are usable
    fn authorize(&self) -> AuthResult<()> {
        Ok(())
    }
}

/// Type alias for shared credentials
pub type SharedCredentials = Arc<dyn Credentials>;
