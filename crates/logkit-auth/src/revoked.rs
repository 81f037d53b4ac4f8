//! Credentials that always refuse to authorize

use super::traits::{Credentials, AuthError, AuthResult};

/// Credentials whose authorization always fails
///
/// Useful for driving the "authentication error" path of a backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedCredentials {
    reason: String,
}

impl Default for RevokedCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl RevokedCredentials {
    /// Create revoked credentials with a generic reason
    pub fn new() -> Self {
        Self::with_reason("credentials have been revoked")
    }

    /// Create revoked credentials with a custom reason
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Credentials for RevokedCredentials {
    fn kind(&self) -> &str {
        "revoked"
    }

    fn authorize(&self) -> AuthResult<()> {
        Err(AuthError::Revoked(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoked_credentials() {
        let credentials = RevokedCredentials::with_reason("token expired");
        assert_eq!(credentials.kind(), "revoked");
        assert_eq!(credentials.reason(), "token expired");
        assert_eq!(
            credentials.authorize(),
            Err(AuthError::Revoked("token expired".to_string()))
        );
    }
}
