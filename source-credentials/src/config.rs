//! Loading credential inputs from configuration documents.
//!
//! JSON and YAML are accepted. A document holds either one input object or a
//! list of them. Both formats deserialize directly into [`CredentialInput`],
//! so YAML scalars keep their exact text. Loading never validates; call
//! [`CredentialInput::validate`] on each result.

use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::input::CredentialInput;

/// Largest configuration file `load_inputs` will read (1 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 1_048_576;

/// Failure to parse a configuration document.
#[derive(Debug, Error)]
pub enum InputParseError {
    #[error("invalid JSON credential input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML credential input: {0}")]
    Yaml(String),
}

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

/// Map a path's extension to an [`InputFormat`].
#[must_use]
pub fn input_format_for(path: &Path) -> Option<InputFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(InputFormat::Json),
        Some("yaml" | "yml") => Some(InputFormat::Yaml),
        _ => None,
    }
}

impl CredentialInput {
    /// Parse a single input from JSON.
    ///
    /// # Errors
    /// Returns [`InputParseError::Json`] on malformed JSON or an unknown shape.
    pub fn from_json_str(content: &str) -> Result<Self, InputParseError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a single input from YAML.
    ///
    /// # Errors
    /// Returns [`InputParseError::Yaml`] on malformed YAML or an unknown shape.
    pub fn from_yaml_str(content: &str) -> Result<Self, InputParseError> {
        from_yaml(content)
    }
}

fn from_yaml<T>(content: &str) -> Result<T, InputParseError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_saphyr::from_str::<T>(content).map_err(|e| InputParseError::Yaml(e.to_string()))
}

/// One input object or a list of them.
struct InputDocument(Vec<CredentialInput>);

struct InputDocumentVisitor;

impl<'de> Visitor<'de> for InputDocumentVisitor {
    type Value = InputDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a credential input object or a list of them")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut inputs = Vec::new();
        while let Some(input) = seq.next_element::<CredentialInput>()? {
            inputs.push(input);
        }
        Ok(InputDocument(inputs))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        CredentialInput::deserialize(MapAccessDeserializer::new(map))
            .map(|input| InputDocument(vec![input]))
    }
}

impl<'de> Deserialize<'de> for InputDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(InputDocumentVisitor)
    }
}

fn parse_document(
    content: &str,
    format: InputFormat,
) -> Result<Vec<CredentialInput>, InputParseError> {
    let document: InputDocument = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => from_yaml(content)?,
    };
    Ok(document.0)
}

/// Read a file with a bounded streaming read, enforcing `max_file_size`.
///
/// The size check and the read are the same operation, so a file that grows
/// after being opened, or a special file reporting size 0, is still capped.
fn read_file_bounded(path: &Path, max_file_size: u64) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Cannot read credential input file {}", path.display()))?;

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .with_context(|| format!("Cannot read credential input file {}", path.display()))?;

    if buffer.len() as u64 > max_file_size {
        anyhow::bail!(
            "Credential input file exceeds maximum size of {max_file_size} bytes: {}",
            path.display()
        );
    }

    String::from_utf8(buffer)
        .with_context(|| format!("Credential input file is not valid UTF-8: {}", path.display()))
}

/// Read all credential inputs from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns an error if the extension is not supported, the file cannot be
/// read, it exceeds [`MAX_INPUT_FILE_SIZE`], or its content does not parse.
pub fn load_inputs(path: &Path) -> anyhow::Result<Vec<CredentialInput>> {
    let Some(format) = input_format_for(path) else {
        anyhow::bail!(
            "Unsupported credential input file (expected .json, .yaml or .yml): {}",
            path.display()
        );
    };

    let content = read_file_bounded(path, MAX_INPUT_FILE_SIZE)?;

    let inputs = parse_document(&content, format)
        .with_context(|| format!("Cannot parse credential input file {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = inputs.len(), "loaded credential inputs");
    Ok(inputs)
}
