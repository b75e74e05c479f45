//! Secret material must never reach log output.

use std::io;
use std::sync::{Arc, Mutex};

use source_credentials::{
    BitBucketCredentialInput, CredentialInput, GitHubCredentialInput,
    GitHubEnterpriseCredentialInput, SourceCredentialRecord, register,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_validation_logs_without_secrets() {
    let logs = capture_logs(|| {
        let inputs = [
            CredentialInput::from(GitHubCredentialInput::with_access_token("ghp_SECRET_ONE")),
            CredentialInput::from(GitHubEnterpriseCredentialInput::new("ghe_SECRET_TWO")),
            CredentialInput::from(BitBucketCredentialInput::new("USER_THREE", "PASS_FOUR")),
        ];
        let mut emitted: Vec<SourceCredentialRecord> = Vec::new();
        for input in &inputs {
            register(input, &mut emitted).unwrap();
        }
        tracing::debug!(?inputs, ?emitted, "debug formatting of inputs and records");
    });

    assert!(logs.contains("validated source credential"), "got: {logs}");
    assert!(logs.contains("GITHUB_ENTERPRISE"), "got: {logs}");
    for secret in ["ghp_SECRET_ONE", "ghe_SECRET_TWO", "USER_THREE", "PASS_FOUR"] {
        assert!(!logs.contains(secret), "{secret} leaked into logs: {logs}");
    }
}

#[test]
fn test_rejection_is_logged_with_error_kind() {
    let logs = capture_logs(|| {
        let input = CredentialInput::from(GitHubCredentialInput {
            access_token: Some("ghp_CONFLICT".into()),
            connection_arn: Some("arn:aws:codeconnections:us-east-1:1:connection/a".to_owned()),
        });
        assert!(input.validate().is_err());
    });

    assert!(logs.contains("rejected source credential"), "got: {logs}");
    assert!(logs.contains("ConflictingCredentials"), "got: {logs}");
    assert!(!logs.contains("ghp_CONFLICT"), "got: {logs}");
}
