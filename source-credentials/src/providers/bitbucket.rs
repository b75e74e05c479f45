use tracing::debug;

use crate::input::BitBucketCredentialInput;
use crate::record::{ServerType, SourceCredentialRecord};

/// Validate a Bitbucket credential.
///
/// Username and application password are copied as-is; their content is not
/// checked.
#[must_use]
pub fn validate_bitbucket(input: &BitBucketCredentialInput) -> SourceCredentialRecord {
    let record = SourceCredentialRecord::basic_auth(
        ServerType::Bitbucket,
        input.username.reveal().to_owned(),
        input.password.reveal().to_owned(),
    );
    debug!(
        server_type = %record.server_type(),
        auth_type = %record.auth_type(),
        "validated source credential"
    );
    record
}
