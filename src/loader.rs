//! Format-detecting tree loader

use crate::config::LoaderConfig;
use crate::decoder::Decoder;
use crate::detect::{detect, Format};
use crate::error::{BookmarkError, Result};
use crate::node::Node;
use std::io;
use std::path::Path;

/// Loads a bookmark tree from a file of either supported format
pub struct Loader {
    decoder: Decoder,
}

impl Loader {
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            decoder: Decoder::with_config(config),
        }
    }

    /// Detect the format of `path` and decode it.
    ///
    /// A mozLz4 signature always selects the compressed decoder, even when
    /// the payload later fails to inflate; there is no fallback to JSON.
    pub fn load(&self, path: &Path) -> Result<Node> {
        Ok(self.load_with_format(path)?.1)
    }

    /// Like [`Loader::load`], also reporting which format was found
    pub fn load_with_format(&self, path: &Path) -> Result<(Format, Node)> {
        if !path.exists() {
            return Err(BookmarkError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }

        let format = detect(path);
        let node = self.load_as(path, format)?;
        Ok((format, node))
    }

    /// Decode `path` with the decoder for an already detected `format`
    pub fn load_as(&self, path: &Path, format: Format) -> Result<Node> {
        let node = match format {
            Format::CompressedExport => self.decoder.load_compressed(path)?,
            Format::PlainText => self.decoder.load_text(path)?,
            Format::Unrecognized => {
                return Err(BookmarkError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::info!(
            path = %path.display(),
            format = format.describe(),
            bookmarks = node.bookmark_count(),
            "loaded bookmark tree"
        );
        Ok(node)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a bookmark tree with default settings
pub fn load(path: impl AsRef<Path>) -> Result<Node> {
    Loader::new().load(path.as_ref())
}
