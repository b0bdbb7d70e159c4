//! Loader and renderer settings

use crate::node::DEFAULT_MAX_DECOMPRESSED;

/// Width of one indent level in the generated HTML
pub const INDENT_WIDTH: usize = 4;
/// Root heading used when the root folder has no title
pub const DEFAULT_ROOT_TITLE: &str = "Bookmarks Menu";

/// Configuration for loading bookmark files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Size of the decompression buffer. Exports that inflate past this fail
    /// with a decompression error; the buffer is never grown.
    pub max_decompressed_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED,
        }
    }
}

impl LoaderConfig {
    pub fn with_max_decompressed_size(mut self, size: usize) -> Self {
        self.max_decompressed_size = size;
        self
    }
}

/// Configuration for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per depth level
    pub indent_width: usize,
    /// `<H1>` text when the root title is empty
    pub default_title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
            default_title: DEFAULT_ROOT_TITLE.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}
