use source_credentials_arn::validate_connection_arn;
use tracing::debug;

use crate::error::ValidationError;
use crate::input::GitHubCredentialInput;
use crate::record::{ServerType, SourceCredentialRecord};

/// Validate a GitHub credential.
///
/// Exactly one of `access_token` and `connection_arn` must be set. A
/// connection ARN must use the `codeconnections` or legacy
/// `codestar-connections` format; it becomes the record token as-is.
///
/// # Errors
/// - [`ValidationError::MissingCredential`] if neither field is set.
/// - [`ValidationError::ConflictingCredentials`] if both are set.
/// - [`ValidationError::MalformedConnectionArn`] if the ARN does not match.
pub fn validate_github(
    input: &GitHubCredentialInput,
) -> Result<SourceCredentialRecord, ValidationError> {
    let record = match (&input.access_token, &input.connection_arn) {
        (None, None) => Err(ValidationError::MissingCredential),
        (Some(_), Some(_)) => Err(ValidationError::ConflictingCredentials),
        (None, Some(arn)) => validate_connection_arn(arn)
            .map(|arn| SourceCredentialRecord::code_connections(arn.into_string()))
            .map_err(ValidationError::from),
        (Some(token), None) => Ok(SourceCredentialRecord::personal_access_token(
            ServerType::Github,
            token.reveal().to_owned(),
        )),
    };

    match &record {
        Ok(r) => debug!(
            server_type = %r.server_type(),
            auth_type = %r.auth_type(),
            "validated source credential"
        ),
        Err(e) => debug!(
            server_type = %ServerType::Github,
            error = e.kind(),
            "rejected source credential"
        ),
    }

    record
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::record::AuthType;
    use crate::secret::Secret;

    const ARN: &str =
        "arn:aws:codeconnections:us-east-1:123456789012:connection/12345678-abcd-12ab-34cdef5678gh";

    #[test]
    fn test_neither_set() {
        let err = validate_github(&GitHubCredentialInput::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingCredential);
    }

    #[test]
    fn test_both_set() {
        let input = GitHubCredentialInput {
            access_token: Some(Secret::new("tok1")),
            connection_arn: Some(ARN.to_owned()),
        };
        let err = validate_github(&input).unwrap_err();
        assert_eq!(err, ValidationError::ConflictingCredentials);
    }

    #[test]
    fn test_both_set_with_malformed_arn_reports_conflict() {
        let input = GitHubCredentialInput {
            access_token: Some(Secret::new("tok1")),
            connection_arn: Some("not-an-arn".to_owned()),
        };
        let err = validate_github(&input).unwrap_err();
        assert_eq!(err, ValidationError::ConflictingCredentials);
    }

    #[test]
    fn test_connection_arn() {
        let record = validate_github(&GitHubCredentialInput::with_connection_arn(ARN)).unwrap();
        assert_eq!(record.server_type(), ServerType::Github);
        assert_eq!(record.auth_type(), AuthType::CodeConnections);
        assert_eq!(record.token(), Some(ARN));
        assert_eq!(record.username(), None);
    }

    #[test]
    fn test_legacy_connection_arn() {
        let arn = "arn:aws:codestar-connections:us-west-2:123456789012:connection/abc-123";
        let record = validate_github(&GitHubCredentialInput::with_connection_arn(arn)).unwrap();
        assert_eq!(record.auth_type(), AuthType::CodeConnections);
        assert_eq!(record.token(), Some(arn));
    }

    #[test]
    fn test_malformed_arn() {
        let err =
            validate_github(&GitHubCredentialInput::with_connection_arn("not-an-arn")).unwrap_err();
        assert_eq!(err.kind(), "MalformedConnectionArn");
    }

    #[test]
    fn test_empty_arn_is_malformed_not_missing() {
        let err = validate_github(&GitHubCredentialInput::with_connection_arn("")).unwrap_err();
        assert_eq!(err.kind(), "MalformedConnectionArn");
    }

    #[test]
    fn test_access_token() {
        let record = validate_github(&GitHubCredentialInput::with_access_token("tok")).unwrap();
        assert_eq!(record.server_type(), ServerType::Github);
        assert_eq!(record.auth_type(), AuthType::PersonalAccessToken);
        assert_eq!(record.token(), Some("tok"));
        assert_eq!(record.username(), None);
    }

    #[test]
    fn test_empty_access_token_is_accepted() {
        // Token content is opaque; only presence is checked.
        let record = validate_github(&GitHubCredentialInput::with_access_token("")).unwrap();
        assert_eq!(record.token(), Some(""));
    }
}
