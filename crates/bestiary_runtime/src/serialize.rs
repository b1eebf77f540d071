//! Persistence using `MessagePack`.
//!
//! Stat blocks, parseable values, and resource lists are written with
//! named fields, so a stored [`Parseable`](crate::Parseable) keeps its raw
//! input, cached result, and version tags across a round trip.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bestiary_foundation::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes a value to `MessagePack` bytes with named fields.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(value).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a value from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes do not decode to a `T`.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a value to a file, replacing any existing contents.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(value)?;
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))
}

/// Loads a value from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode to a `T`.
pub fn load_from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
