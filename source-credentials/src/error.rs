//! Error types for credential validation.

use source_credentials_arn::{
    CONNECTION_ARN_FORMAT, ConnectionArnError, LEGACY_CONNECTION_ARN_FORMAT,
};
use thiserror::Error;

/// Why an input was rejected.
///
/// All variants are detected before a record is built; there is no fallback
/// credential. The caller must fix the input and validate again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// No authentication mechanism was supplied.
    #[error("either accessToken or connectionArn must be provided")]
    MissingCredential,

    /// More than one mutually exclusive mechanism was supplied.
    #[error("cannot provide both accessToken and connectionArn")]
    ConflictingCredentials,

    /// The connection ARN does not match either accepted format.
    #[error(
        "invalid connectionArn '{arn}': expected {} (legacy) or {}",
        LEGACY_CONNECTION_ARN_FORMAT,
        CONNECTION_ARN_FORMAT
    )]
    MalformedConnectionArn {
        /// The rejected string.
        arn: String,
    },
}

impl ValidationError {
    /// Short stable name of the variant, suitable for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::ConflictingCredentials => "ConflictingCredentials",
            Self::MalformedConnectionArn { .. } => "MalformedConnectionArn",
        }
    }
}

impl From<ConnectionArnError> for ValidationError {
    fn from(err: ConnectionArnError) -> Self {
        match err {
            ConnectionArnError::Malformed { arn } => Self::MalformedConnectionArn { arn },
        }
    }
}

/// Failure of [`crate::emitter::register`].
#[derive(Debug, Error)]
pub enum RegisterError<E> {
    /// The input was rejected; the emitter was not called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The emitter refused the validated record.
    #[error("failed to emit source credential: {0}")]
    Emit(E),
}
