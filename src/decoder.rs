//! Bookmark backup decoders

use crate::config::LoaderConfig;
use crate::detect::has_signature;
use crate::error::{BookmarkError, DecompressFailure, Result};
use crate::node::{Node, MOZLZ4_HEADER_LEN};
use std::fs;
use std::path::Path;

// Offset of the little-endian decompressed size Firefox writes into the header
const DECLARED_SIZE_OFFSET: usize = 8;

/// Decodes mozLz4 and plain JSON bookmark data into a [`Node`] tree
pub struct Decoder {
    config: LoaderConfig,
}

impl Decoder {
    /// Create a new decoder with the default 10 MiB ceiling
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Decode an in-memory mozLz4 export. `path` is only used in errors.
    ///
    /// The first 12 bytes are skipped without inspection; the rest must be a
    /// single LZ4 block whose output fits the configured ceiling.
    pub fn decode_compressed(&self, bytes: &[u8], path: &Path) -> Result<Node> {
        if bytes.len() < MOZLZ4_HEADER_LEN {
            return Err(BookmarkError::Decompression {
                path: path.to_path_buf(),
                source: DecompressFailure::Truncated(bytes.len()),
            });
        }

        let (header, payload) = bytes.split_at(MOZLZ4_HEADER_LEN);
        if has_signature(header) {
            tracing::debug!(
                declared = Self::declared_size(header),
                compressed = payload.len(),
                "mozLz4 header"
            );
        }

        let mut buffer = vec![0u8; self.config.max_decompressed_size];
        let n = lz4_flex::block::decompress_into(payload, &mut buffer).map_err(|source| {
            BookmarkError::Decompression {
                path: path.to_path_buf(),
                source: source.into(),
            }
        })?;
        tracing::debug!(decompressed = n, "inflated bookmark payload");

        Self::parse(&buffer[..n], path)
    }

    /// Decode an in-memory JSON document. `path` is only used in errors.
    pub fn decode_text(&self, bytes: &[u8], path: &Path) -> Result<Node> {
        Self::parse(bytes, path)
    }

    /// Read and decode a `.jsonlz4` file
    pub fn load_compressed(&self, path: &Path) -> Result<Node> {
        let bytes = read_file(path)?;
        self.decode_compressed(&bytes, path)
    }

    /// Read and decode a plain JSON file
    pub fn load_text(&self, path: &Path) -> Result<Node> {
        let bytes = read_file(path)?;
        self.decode_text(&bytes, path)
    }

    fn parse(bytes: &[u8], path: &Path) -> Result<Node> {
        serde_json::from_slice(bytes).map_err(|source| BookmarkError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Size Firefox recorded in the header. Informational only.
    fn declared_size(header: &[u8]) -> Option<u32> {
        let raw = header.get(DECLARED_SIZE_OFFSET..DECLARED_SIZE_OFFSET + 4)?;
        Some(u32::from_le_bytes(raw.try_into().ok()?))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| BookmarkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
