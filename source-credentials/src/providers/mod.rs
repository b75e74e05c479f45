//! One validator per source provider.
//!
//! Each validator is a pure function from a borrowed input to a normalized
//! [`SourceCredentialRecord`](crate::record::SourceCredentialRecord). Only the
//! GitHub validator has a failure path.

mod bitbucket;
mod github;
mod github_enterprise;

pub use bitbucket::validate_bitbucket;
pub use github::validate_github;
pub use github_enterprise::validate_github_enterprise;
