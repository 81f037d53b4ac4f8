//! Logkit Auth
//!
//! Minimal stand-in for a cloud credentials library. It only provides the
//! `Credentials` type slot the logger accepts plus a couple of concrete
//! credentials for tests. It performs no real authentication.
//!
//! ```rust
//! use std::sync::Arc;
//! use logkit_auth::{AnonymousCredentials, Credentials, SharedCredentials};
//!
//! let credentials: SharedCredentials = Arc::new(AnonymousCredentials::new());
//! assert_eq!(credentials.kind(), "anonymous");
//! assert!(credentials.authorize().is_ok());
//! ```

mod traits;
mod anonymous;
mod revoked;

pub use traits::{Credentials, SharedCredentials, AuthError, AuthResult};
pub use anonymous::AnonymousCredentials;
pub use revoked::RevokedCredentials;
