//! Opaque holder for sensitive text.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

/// Placeholder printed instead of secret material.
pub const REDACTED: &str = "[REDACTED]";

/// Sensitive text such as a personal access token or an application password.
///
/// The raw value is reachable only through [`Secret::reveal`]. `Debug` prints
/// a redaction marker, and the type implements neither `Display` nor
/// `Serialize`. The backing buffer is zeroized on drop.
pub struct Secret(SecretString);

impl Secret {
    /// Wrap a raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Extract the raw value.
    ///
    /// Validators call this exactly once per field, to copy the value into
    /// the output record.
    #[must_use]
    pub fn reveal(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&REDACTED).finish()
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
