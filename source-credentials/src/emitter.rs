//! Hand-off of validated records to the resource emitter.
//!
//! The emitter turns a [`SourceCredentialRecord`] into a persisted credential
//! resource. It owns the one-credential-per-server-type constraint; nothing
//! here tracks which records were already emitted.

use tracing::debug;

use crate::error::RegisterError;
use crate::input::CredentialInput;
use crate::record::SourceCredentialRecord;

/// Receives finished, normalized records.
pub trait CredentialEmitter {
    /// Error returned when the emitter refuses a record.
    type Error;

    /// Take ownership of a validated record.
    ///
    /// # Errors
    /// Implementation defined.
    fn emit(&mut self, record: SourceCredentialRecord) -> Result<(), Self::Error>;
}

/// Collects emitted records in memory.
impl CredentialEmitter for Vec<SourceCredentialRecord> {
    type Error = std::convert::Infallible;

    fn emit(&mut self, record: SourceCredentialRecord) -> Result<(), Self::Error> {
        self.push(record);
        Ok(())
    }
}

/// Validate `input` and pass the resulting record to `emitter`.
///
/// The emitter is only called when validation succeeds.
///
/// # Errors
/// Returns [`RegisterError::Validation`] if the input is rejected, or
/// [`RegisterError::Emit`] if the emitter fails.
pub fn register<E>(
    input: &CredentialInput,
    emitter: &mut E,
) -> Result<(), RegisterError<E::Error>>
where
    E: CredentialEmitter + ?Sized,
{
    let record = input.validate()?;
    let server_type = record.server_type();
    emitter.emit(record).map_err(RegisterError::Emit)?;
    debug!(server_type = %server_type, "emitted source credential");
    Ok(())
}
