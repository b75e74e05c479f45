//! Provider-specific credential inputs.
//!
//! Field names on the wire are `accessToken`, `connectionArn`, `username` and
//! `password`. [`CredentialInput`] is selected by a `provider` field.

use serde::Deserialize;
use thiserror::Error;

use crate::error::ValidationError;
use crate::providers;
use crate::record::{ServerType, SourceCredentialRecord};
use crate::secret::Secret;

/// GitHub credential: a personal access token or a connection ARN, never both.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GitHubCredentialInput {
    /// Personal access token.
    #[serde(default)]
    pub access_token: Option<Secret>,
    /// ARN of a `codeconnections` (or legacy `codestar-connections`) connection.
    #[serde(default)]
    pub connection_arn: Option<String>,
}

impl GitHubCredentialInput {
    #[must_use]
    pub fn with_access_token(token: impl Into<Secret>) -> Self {
        Self {
            access_token: Some(token.into()),
            connection_arn: None,
        }
    }

    #[must_use]
    pub fn with_connection_arn(arn: impl Into<String>) -> Self {
        Self {
            access_token: None,
            connection_arn: Some(arn.into()),
        }
    }
}

/// GitHub Enterprise credential. Only personal access tokens are supported.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GitHubEnterpriseCredentialInput {
    /// Personal access token.
    pub access_token: Secret,
}

impl GitHubEnterpriseCredentialInput {
    #[must_use]
    pub fn new(access_token: impl Into<Secret>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

/// Bitbucket credential: username plus application password.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BitBucketCredentialInput {
    /// Bitbucket username.
    pub username: Secret,
    /// Application password.
    pub password: Secret,
}

impl BitBucketCredentialInput {
    #[must_use]
    pub fn new(username: impl Into<Secret>, password: impl Into<Secret>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A credential input for any supported provider.
///
/// Deserializes from one flat object with a `provider` field (`github`,
/// `github-enterprise` or `bitbucket`) next to that provider's fields. Every
/// field is read straight from the source document, so YAML scalars such as
/// `password: 007` keep their exact text.
#[derive(Debug, Deserialize)]
#[serde(try_from = "FlatCredentialInput")]
pub enum CredentialInput {
    GitHub(GitHubCredentialInput),
    GitHubEnterprise(GitHubEnterpriseCredentialInput),
    BitBucket(BitBucketCredentialInput),
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum Provider {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "github-enterprise")]
    GitHubEnterprise,
    #[serde(rename = "bitbucket")]
    BitBucket,
}

impl Provider {
    const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitHubEnterprise => "github-enterprise",
            Self::BitBucket => "bitbucket",
        }
    }
}

/// Wire shape of [`CredentialInput`] before the provider's fields are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FlatCredentialInput {
    provider: Provider,
    #[serde(default)]
    access_token: Option<Secret>,
    #[serde(default)]
    connection_arn: Option<String>,
    #[serde(default)]
    username: Option<Secret>,
    #[serde(default)]
    password: Option<Secret>,
}

/// A field is missing or not accepted for the selected provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputShapeError {
    #[error("missing field `{field}` for provider `{provider}`")]
    MissingField {
        provider: &'static str,
        field: &'static str,
    },

    #[error("field `{field}` is not accepted for provider `{provider}`")]
    UnexpectedField {
        provider: &'static str,
        field: &'static str,
    },
}

fn required<T>(
    value: Option<T>,
    provider: Provider,
    field: &'static str,
) -> Result<T, InputShapeError> {
    value.ok_or(InputShapeError::MissingField {
        provider: provider.as_str(),
        field,
    })
}

fn reject_present(
    fields: &[(&'static str, bool)],
    provider: Provider,
) -> Result<(), InputShapeError> {
    match fields.iter().find(|(_, present)| *present) {
        Some(&(field, _)) => Err(InputShapeError::UnexpectedField {
            provider: provider.as_str(),
            field,
        }),
        None => Ok(()),
    }
}

impl TryFrom<FlatCredentialInput> for CredentialInput {
    type Error = InputShapeError;

    fn try_from(flat: FlatCredentialInput) -> Result<Self, Self::Error> {
        let provider = flat.provider;
        match provider {
            Provider::GitHub => {
                reject_present(
                    &[
                        ("username", flat.username.is_some()),
                        ("password", flat.password.is_some()),
                    ],
                    provider,
                )?;
                Ok(Self::GitHub(GitHubCredentialInput {
                    access_token: flat.access_token,
                    connection_arn: flat.connection_arn,
                }))
            }
            Provider::GitHubEnterprise => {
                reject_present(
                    &[
                        ("connectionArn", flat.connection_arn.is_some()),
                        ("username", flat.username.is_some()),
                        ("password", flat.password.is_some()),
                    ],
                    provider,
                )?;
                Ok(Self::GitHubEnterprise(GitHubEnterpriseCredentialInput {
                    access_token: required(flat.access_token, provider, "accessToken")?,
                }))
            }
            Provider::BitBucket => {
                reject_present(
                    &[
                        ("accessToken", flat.access_token.is_some()),
                        ("connectionArn", flat.connection_arn.is_some()),
                    ],
                    provider,
                )?;
                Ok(Self::BitBucket(BitBucketCredentialInput {
                    username: required(flat.username, provider, "username")?,
                    password: required(flat.password, provider, "password")?,
                }))
            }
        }
    }
}

impl CredentialInput {
    /// The provider this input targets. Does not validate.
    #[must_use]
    pub const fn server_type(&self) -> ServerType {
        match self {
            Self::GitHub(_) => ServerType::Github,
            Self::GitHubEnterprise(_) => ServerType::GithubEnterprise,
            Self::BitBucket(_) => ServerType::Bitbucket,
        }
    }

    /// Validate the input and build its normalized record.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if a GitHub input is missing a credential,
    /// supplies both kinds, or carries a malformed connection ARN. The other
    /// providers cannot fail.
    pub fn validate(&self) -> Result<SourceCredentialRecord, ValidationError> {
        match self {
            Self::GitHub(input) => providers::validate_github(input),
            Self::GitHubEnterprise(input) => Ok(providers::validate_github_enterprise(input)),
            Self::BitBucket(input) => Ok(providers::validate_bitbucket(input)),
        }
    }
}

impl From<GitHubCredentialInput> for CredentialInput {
    fn from(input: GitHubCredentialInput) -> Self {
        Self::GitHub(input)
    }
}

impl From<GitHubEnterpriseCredentialInput> for CredentialInput {
    fn from(input: GitHubEnterpriseCredentialInput) -> Self {
        Self::GitHubEnterprise(input)
    }
}

impl From<BitBucketCredentialInput> for CredentialInput {
    fn from(input: BitBucketCredentialInput) -> Self {
        Self::BitBucket(input)
    }
}
