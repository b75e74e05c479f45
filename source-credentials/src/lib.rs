//! # source-credentials
//!
//! Validation and normalization of the credentials a build service uses to
//! reach source providers.
//!
//! Three providers are supported:
//!
//! - GitHub: a personal access token **or** a connection ARN, never both.
//! - GitHub Enterprise: a personal access token.
//! - Bitbucket: a username and an application password.
//!
//! Every accepted input becomes the same [`SourceCredentialRecord`] shape,
//! which is handed to a [`CredentialEmitter`].
//!
//! ## Quick Start
//!
//! ```rust
//! use source_credentials::{AuthType, CredentialInput, GitHubCredentialInput, ServerType};
//!
//! let input = CredentialInput::from(GitHubCredentialInput::with_connection_arn(
//!     "arn:aws:codeconnections:us-east-1:123456789012:connection/abc-123",
//! ));
//!
//! let record = input.validate().unwrap();
//! assert_eq!(record.server_type(), ServerType::Github);
//! assert_eq!(record.auth_type(), AuthType::CodeConnections);
//! ```
//!
//! At most one credential per server type may exist in an account and region.
//! That constraint belongs to the emitter; this crate does not detect
//! duplicates.

pub mod config;
pub mod emitter;
pub mod error;
pub mod input;
pub mod providers;
pub mod record;
pub mod secret;

pub use config::{InputFormat, InputParseError, load_inputs};
pub use emitter::{CredentialEmitter, register};
pub use error::{RegisterError, ValidationError};
pub use input::{
    BitBucketCredentialInput, CredentialInput, GitHubCredentialInput,
    GitHubEnterpriseCredentialInput, InputShapeError,
};
pub use providers::{validate_bitbucket, validate_github, validate_github_enterprise};
pub use record::{AuthType, ServerType, SourceCredentialRecord, UnknownVariant};
pub use secret::Secret;
pub use source_credentials_arn::{ConnectionArn, ConnectionArnError, ConnectionService};
