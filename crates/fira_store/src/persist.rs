//! Lexicon snapshot persistence using `MessagePack`.
//!
//! The whole lexicon is written as one snapshot file. Uses named
//! serialization to preserve struct field names across versions.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use fira_foundation::{Error, Result};

use crate::store::Lexicon;

/// Serializes a lexicon to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(lexicon: &Lexicon) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(lexicon).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a lexicon from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Lexicon> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a lexicon snapshot, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(lexicon)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })
}

/// Loads a lexicon snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    from_bytes(&bytes)
}
