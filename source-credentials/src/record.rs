//! The normalized credential record handed to the resource emitter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::secret::REDACTED;

/// Source provider a credential authenticates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerType {
    /// GitHub-compatible API.
    Github,
    /// GitHub Enterprise instance.
    GithubEnterprise,
    /// Bitbucket-compatible API.
    Bitbucket,
}

/// Authentication scheme carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    /// Long-lived token issued by the provider.
    PersonalAccessToken,
    /// Reference to a pre-established connection, stored as its ARN.
    #[serde(rename = "CODECONNECTIONS")]
    CodeConnections,
    /// Username plus application password.
    BasicAuth,
}

/// Returned when parsing an unknown wire literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected literal.
    pub value: String,
}

impl ServerType {
    /// Every server type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Github, Self::GithubEnterprise, Self::Bitbucket];

    /// Wire literal, e.g. `GITHUB_ENTERPRISE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "GITHUB",
            Self::GithubEnterprise => "GITHUB_ENTERPRISE",
            Self::Bitbucket => "BITBUCKET",
        }
    }
}

impl AuthType {
    /// Every auth type, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::PersonalAccessToken,
        Self::CodeConnections,
        Self::BasicAuth,
    ];

    /// Wire literal, e.g. `BASIC_AUTH`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PersonalAccessToken => "PERSONAL_ACCESS_TOKEN",
            Self::CodeConnections => "CODECONNECTIONS",
            Self::BasicAuth => "BASIC_AUTH",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "server type",
                value: s.to_owned(),
            })
    }
}

impl FromStr for AuthType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "auth type",
                value: s.to_owned(),
            })
    }
}

/// A validated, normalized source credential.
///
/// Only the validators in [`crate::providers`] construct records, and a
/// record cannot be changed afterwards. `token` holds the access token, the
/// connection ARN or the application password depending on `auth_type`;
/// `username` is set for [`AuthType::BasicAuth`] only.
///
/// Serializes as `{"serverType", "authType", "token", "username"}` with absent
/// fields omitted. `Debug` redacts `token` and `username`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCredentialRecord {
    server_type: ServerType,
    auth_type: AuthType,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

impl SourceCredentialRecord {
    pub(crate) fn personal_access_token(server_type: ServerType, token: String) -> Self {
        Self {
            server_type,
            auth_type: AuthType::PersonalAccessToken,
            token: Some(token),
            username: None,
        }
    }

    pub(crate) fn code_connections(connection_arn: String) -> Self {
        Self {
            server_type: ServerType::Github,
            auth_type: AuthType::CodeConnections,
            token: Some(connection_arn),
            username: None,
        }
    }

    pub(crate) fn basic_auth(server_type: ServerType, username: String, password: String) -> Self {
        Self {
            server_type,
            auth_type: AuthType::BasicAuth,
            token: Some(password),
            username: Some(username),
        }
    }

    #[must_use]
    pub const fn server_type(&self) -> ServerType {
        self.server_type
    }

    #[must_use]
    pub const fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

impl fmt::Debug for SourceCredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceCredentialRecord")
            .field("server_type", &self.server_type)
            .field("auth_type", &self.auth_type)
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .field("username", &self.username.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_personal_access_token() {
        let record =
            SourceCredentialRecord::personal_access_token(ServerType::Github, "tok".to_owned());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "serverType": "GITHUB",
                "authType": "PERSONAL_ACCESS_TOKEN",
                "token": "tok",
            })
        );
    }

    #[test]
    fn test_serialize_basic_auth() {
        let record = SourceCredentialRecord::basic_auth(
            ServerType::Bitbucket,
            "u".to_owned(),
            "p".to_owned(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "serverType": "BITBUCKET",
                "authType": "BASIC_AUTH",
                "token": "p",
                "username": "u",
            })
        );
    }

    #[test]
    fn test_serialize_code_connections_literal() {
        let record = SourceCredentialRecord::code_connections("arn".to_owned());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["authType"], "CODECONNECTIONS");
        assert_eq!(json["serverType"], "GITHUB");
    }

    #[test]
    fn test_serde_literals_match_display() {
        for server_type in ServerType::ALL {
            let json = serde_json::to_value(server_type).unwrap();
            assert_eq!(json, server_type.to_string());
        }
        for auth_type in AuthType::ALL {
            let json = serde_json::to_value(auth_type).unwrap();
            assert_eq!(json, auth_type.to_string());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "GITHUB_ENTERPRISE".parse::<ServerType>().unwrap(),
            ServerType::GithubEnterprise
        );
        assert_eq!(
            "CODECONNECTIONS".parse::<AuthType>().unwrap(),
            AuthType::CodeConnections
        );
        let err = "github".parse::<ServerType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown server type 'github'");
    }

    #[test]
    fn test_debug_redacts_token_and_username() {
        let record = SourceCredentialRecord::basic_auth(
            ServerType::Bitbucket,
            "alice".to_owned(),
            "app-password".to_owned(),
        );
        let debug = format!("{record:?}");
        assert!(!debug.contains("alice"), "got: {debug}");
        assert!(!debug.contains("app-password"), "got: {debug}");
        assert!(debug.contains("Bitbucket"), "got: {debug}");
    }
}
