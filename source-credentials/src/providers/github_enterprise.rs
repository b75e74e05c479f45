use tracing::debug;

use crate::input::GitHubEnterpriseCredentialInput;
use crate::record::{ServerType, SourceCredentialRecord};

/// Validate a GitHub Enterprise credential.
///
/// The token is mandatory by type, so this cannot fail.
#[must_use]
pub fn validate_github_enterprise(
    input: &GitHubEnterpriseCredentialInput,
) -> SourceCredentialRecord {
    let record = SourceCredentialRecord::personal_access_token(
        ServerType::GithubEnterprise,
        input.access_token.reveal().to_owned(),
    );
    debug!(
        server_type = %record.server_type(),
        auth_type = %record.auth_type(),
        "validated source credential"
    );
    record
}
