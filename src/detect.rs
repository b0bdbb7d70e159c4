//! Input format detection
//!
//! Every check opens its own handle, so detection never disturbs a reader the
//! caller holds. I/O failures count as "not this format".

use crate::node::MOZLZ4_MAGIC;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Classification of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Firefox `.jsonlz4` backup (mozLz4 magic)
    CompressedExport,
    /// Any well-formed JSON document
    PlainText,
    Unrecognized,
}

impl Format {
    pub fn describe(self) -> &'static str {
        match self {
            Format::CompressedExport => "Firefox jsonlz4 bookmark backup",
            Format::PlainText => "JSON bookmark file",
            Format::Unrecognized => "unrecognized file",
        }
    }
}

/// Classify the file at `path`
pub fn detect(path: &Path) -> Format {
    let format = if is_compressed_export(path) {
        Format::CompressedExport
    } else if is_plain_text(path) {
        Format::PlainText
    } else {
        Format::Unrecognized
    };
    tracing::debug!(path = %path.display(), ?format, "detected input format");
    format
}

/// True if the buffer starts with the mozLz4 magic
pub fn has_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(MOZLZ4_MAGIC)
}

/// True if the file exists and its first six bytes are `mozLz4`
pub fn is_compressed_export(path: &Path) -> bool {
    let Ok(file) = fs::File::open(path) else {
        return false;
    };

    let mut header = Vec::with_capacity(MOZLZ4_MAGIC.len());
    match file.take(MOZLZ4_MAGIC.len() as u64).read_to_end(&mut header) {
        Ok(_) => has_signature(&header),
        Err(_) => false,
    }
}

/// True if the whole file parses as a JSON document of any shape
pub fn is_plain_text(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => serde_json::from_slice::<serde_json::Value>(&bytes).is_ok(),
        Err(_) => false,
    }
}
