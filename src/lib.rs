//! # ff-bookmarks
//!
//! Convert Firefox bookmark backups to the Netscape bookmark HTML format that
//! every browser can import.
//!
//! ## Input formats
//!
//! Firefox keeps automatic backups as `.jsonlz4` files:
//!
//! ```text
//! bytes 0..6    "mozLz4"
//! bytes 6..12   reserved / decompressed size (not used)
//! bytes 12..    one LZ4 block holding the JSON tree
//! ```
//!
//! Manual "Backup..." exports are plain `.json` with the same tree. Both are
//! accepted; the format is detected from the content, not the file name.
//!
//! ## Tree shape
//!
//! A node with a `children` key is a folder, even when the list is empty. A
//! node without one is a bookmark if it has a non-empty `uri` and is ignored
//! otherwise. Nodes with `typeCode` 3 are separators and are dropped.
//!
//! ## Example
//!
//! ```no_run
//! use ff_bookmarks::{load, Renderer};
//!
//! let tree = load("bookmarks-2025-06-11.jsonlz4")?;
//! Renderer::new().render_to_file(&tree, "bookmarks.html".as_ref())?;
//! # Ok::<(), ff_bookmarks::BookmarkError>(())
//! ```
//!
//! ## Limits
//!
//! Compressed exports are inflated into a fixed buffer (10 MiB by default, see
//! [`LoaderConfig`]). Larger exports fail with a decompression error.

pub mod config;
pub mod decoder;
pub mod detect;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod node;
pub mod render;

pub use config::{LoaderConfig, RenderConfig};
pub use decoder::Decoder;
pub use detect::{detect, Format};
pub use encoder::Encoder;
pub use error::{BookmarkError, DecompressFailure, Result};
pub use loader::{load, Loader};
pub use node::{Annotation, Node, NodeShape};
pub use render::Renderer;
