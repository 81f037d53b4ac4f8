//! Anonymous credentials

use super::traits::Credentials;

/// Stand-in credentials that carry no identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnonymousCredentials;

impl AnonymousCredentials {
    /// Create anonymous credentials
    pub fn new() -> Self {
        Self
    }
}

impl Credentials for AnonymousCredentials {
    fn kind(&self) -> &str {
        "anonymous"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::SharedCredentials;

    #[test]
    fn test_anonymous_credentials() {
        let credentials: SharedCredentials = Arc::new(AnonymousCredentials::new());
        assert_eq!(credentials.kind(), "anonymous");
        assert_eq!(credentials.authorize(), Ok(()));
    }
}
