//! Cloud client construction

use std::fmt;

use logkit_auth::SharedCredentials;

use super::error::{CloudError, CloudResult};
use crate::format::CloudFormatter;
use crate::handler::{BoxedStream, Handler, StreamHandler};

/// A connected cloud logging client
pub struct CloudClient {
    project: String,
    credentials: SharedCredentials,
}

impl CloudClient {
    /// Connect to the cloud backend
    ///
    /// Fails when the backend is compiled out, when `project` is missing or
    /// blank, when `credentials` are missing, or when they refuse to authorize.
    pub fn connect(
        project: Option<&str>,
        credentials: Option<&SharedCredentials>,
    ) -> CloudResult<Self> {
        if !cfg!(feature = "cloud") {
            return Err(CloudError::BackendUnavailable);
        }

        let project = project
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(CloudError::MissingProject)?;
        let credentials = credentials.ok_or(CloudError::MissingCredentials)?;

        credentials
            .authorize()
            .map_err(|e| CloudError::rejected(credentials.kind(), e.to_string()))?;

        Ok(Self {
            project: project.to_string(),
            credentials: credentials.clone(),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn credentials(&self) -> &SharedCredentials {
        &self.credentials
    }

    fn formatter(&self) -> CloudFormatter {
        CloudFormatter::new(&self.project, self.credentials.kind())
    }

    /// Handler writing structured entries to standard output
    pub fn handler(&self) -> Handler {
        Handler::Cloud(StreamHandler::stdout(self.formatter()))
    }

    /// Handler writing structured entries to the given stream
    pub fn handler_with_stream(&self, stream: BoxedStream) -> Handler {
        Handler::Cloud(StreamHandler::new(self.formatter(), stream))
    }
}

impl fmt::Debug for CloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudClient")
            .field("project", &self.project)
            .field("credentials", &self.credentials.kind())
            .finish()
    }
}

#[cfg(all(test, feature = "cloud"))]
mod tests {
    use super::*;
    use std::sync::Arc;
    use logkit_auth::{AnonymousCredentials, RevokedCredentials};
    use crate::handler::HandlerKind;

    fn anonymous() -> SharedCredentials {
        Arc::new(AnonymousCredentials::new())
    }

    #[test]
    fn test_connect_success() {
        let credentials = anonymous();
        let client = CloudClient::connect(Some("my-project"), Some(&credentials)).unwrap();

        assert_eq!(client.project(), "my-project");
        assert_eq!(client.credentials().kind(), "anonymous");
        assert_eq!(client.handler().kind(), HandlerKind::Cloud);
    }

    #[test]
    fn test_connect_missing_project() {
        let credentials = anonymous();
        assert_eq!(
            CloudClient::connect(None, Some(&credentials)).unwrap_err(),
            CloudError::MissingProject
        );
        assert_eq!(
            CloudClient::connect(Some("  "), Some(&credentials)).unwrap_err(),
            CloudError::MissingProject
        );
    }

    #[test]
    fn test_connect_missing_credentials() {
        assert_eq!(
            CloudClient::connect(Some("my-project"), None).unwrap_err(),
            CloudError::MissingCredentials
        );
    }

    #[test]
    fn test_connect_rejected_credentials() {
        let credentials: SharedCredentials = Arc::new(RevokedCredentials::with_reason("expired"));
        let err = CloudClient::connect(Some("my-project"), Some(&credentials)).unwrap_err();

        assert_eq!(err, CloudError::rejected("revoked", "Credentials revoked: expired"));
        assert_eq!(err.to_string(), "revoked credentials rejected: Credentials revoked: expired");
    }
}
