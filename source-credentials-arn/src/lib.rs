//! Connection ARN parsing and validation primitives.
//!
//! This crate is the single source of truth for the connection identifier
//! formats accepted by the `source-credentials` validators. Both the legacy
//! `codestar-connections` service name and the current `codeconnections`
//! service name are accepted.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Accepted connection ARN format using the legacy service name.
pub const LEGACY_CONNECTION_ARN_FORMAT: &str =
    "arn:<partition>:codestar-connections:<region>:<account>:connection/<id>";

/// Accepted connection ARN format using the current service name.
pub const CONNECTION_ARN_FORMAT: &str =
    "arn:<partition>:codeconnections:<region>:<account>:connection/<id>";

/// Anchored pattern for a connection ARN.
///
/// Partition, region and account are any non-empty colon-free text; their
/// real-world shape (e.g. a 12 digit account) is deliberately not checked.
static CONNECTION_ARN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^arn:",
        r"(?P<partition>[^:]+):",
        r"(?P<service>codestar-connections|codeconnections):",
        r"(?P<region>[^:]+):",
        r"(?P<account>[^:]+):",
        r"connection/(?P<id>[a-zA-Z0-9-]+)$",
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid connection ARN regex: {err}"),
    }
});

/// Errors from connection ARN validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionArnError {
    /// The string does not match either accepted format.
    #[error(
        "Invalid connection ARN '{arn}': expected {} (legacy) or {}",
        LEGACY_CONNECTION_ARN_FORMAT,
        CONNECTION_ARN_FORMAT
    )]
    Malformed {
        /// The raw string that failed validation.
        arn: String,
    },
}

/// Service name embedded in a connection ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionService {
    /// `codestar-connections`, the name used before the service was renamed.
    CodeStarConnections,
    /// `codeconnections`.
    CodeConnections,
}

impl ConnectionService {
    /// The literal as it appears in the ARN.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeStarConnections => "codestar-connections",
            Self::CodeConnections => "codeconnections",
        }
    }

    /// Whether this is the legacy service name.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::CodeStarConnections)
    }
}

impl fmt::Display for ConnectionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connection ARN that passed validation, split into its segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionArn {
    raw: String,
    /// Partition segment (e.g. `aws`, `aws-cn`).
    pub partition: String,
    /// Service name segment.
    pub service: ConnectionService,
    /// Region segment.
    pub region: String,
    /// Account segment.
    pub account: String,
    /// Resource id following `connection/`.
    pub connection_id: String,
}

impl ConnectionArn {
    /// The full ARN string exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the parsed value and return the original string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for ConnectionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for ConnectionArn {
    type Err = ConnectionArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_connection_arn(s)
    }
}

/// Quick check whether `arn` is a well-formed connection ARN.
#[inline]
#[must_use]
pub fn is_valid_connection_arn(arn: &str) -> bool {
    CONNECTION_ARN_PATTERN.is_match(arn)
}

/// Validate a connection ARN and split it into segments.
///
/// The match is anchored and case-sensitive. The input is not trimmed, so
/// surrounding whitespace makes it invalid.
///
/// # Errors
/// Returns [`ConnectionArnError::Malformed`] if `arn` matches neither the
/// legacy nor the current format.
pub fn validate_connection_arn(arn: &str) -> Result<ConnectionArn, ConnectionArnError> {
    let malformed = || ConnectionArnError::Malformed {
        arn: arn.to_owned(),
    };

    let caps = CONNECTION_ARN_PATTERN.captures(arn).ok_or_else(malformed)?;

    let service = match &caps["service"] {
        "codestar-connections" => ConnectionService::CodeStarConnections,
        "codeconnections" => ConnectionService::CodeConnections,
        _ => return Err(malformed()),
    };

    Ok(ConnectionArn {
        raw: arn.to_owned(),
        partition: caps["partition"].to_owned(),
        service,
        region: caps["region"].to_owned(),
        account: caps["account"].to_owned(),
        connection_id: caps["id"].to_owned(),
    })
}
