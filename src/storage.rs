//! JSON persistence for rendered animations.
//!
//! A stored rendering is a single self-contained document:
//!
//! ```json
//! {
//!   "frames": [
//!     { "asciiText": "...", "delayCentiseconds": 5, "width": 80, "height": 27 }
//!   ],
//!   "loopCount": 0
//! }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::animation::AnimationRecord;

/// File extension for stored renderings.
pub const EXTENSION: &str = "json";

/// Errors that can occur when storing or loading a rendering.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rendering document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rendering document: {0}")]
    Invalid(String),

    #[error("failed to write '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Serialize a record to JSON bytes.
pub fn encode(record: &AnimationRecord) -> Result<Vec<u8>, StorageError> {
    validate(record)?;
    Ok(serde_json::to_vec(record)?)
}

/// Parse a record from JSON bytes, rejecting documents that cannot be played.
pub fn decode(bytes: &[u8]) -> Result<AnimationRecord, StorageError> {
    let record: AnimationRecord = serde_json::from_slice(bytes)?;
    validate(&record)?;
    Ok(record)
}

fn validate(record: &AnimationRecord) -> Result<(), StorageError> {
    if record.frames.is_empty() {
        return Err(StorageError::Invalid("no frames".to_string()));
    }
    for (i, frame) in record.frames.iter().enumerate() {
        if frame.width == 0 || frame.height == 0 {
            return Err(StorageError::Invalid(format!(
                "frame {} has zero size ({}x{})",
                i, frame.width, frame.height
            )));
        }
    }
    Ok(())
}

/// Append `.json` unless the path already carries it.
///
/// `out` becomes `out.json`, `out.txt` becomes `out.txt.json`.
pub fn with_extension(path: &Path) -> PathBuf {
    let has_ext = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION));
    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(EXTENSION);
        PathBuf::from(name)
    }
}

/// Write a record to `path` (with the extension fixed up).
///
/// The document is written to a temporary file next to the target and
/// renamed into place, so a failure never leaves a partial file behind.
/// Returns the path actually written.
pub fn save(path: &Path, record: &AnimationRecord) -> Result<PathBuf, StorageError> {
    let path = with_extension(path);
    let bytes = encode(record)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.clone(),
        source,
    };

    let mut file = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(&path).map_err(|source| StorageError::Persist {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "Saved {} frames ({} bytes) to {}",
        record.frames.len(),
        bytes.len(),
        path.display()
    );
    Ok(path)
}

/// Read a stored record from `path`.
pub fn load(path: &Path) -> Result<AnimationRecord, StorageError> {
    let bytes = std::fs::read(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = decode(&bytes)?;
    log::debug!("Loaded {} frames from {}", record.frames.len(), path.display());
    Ok(record)
}
