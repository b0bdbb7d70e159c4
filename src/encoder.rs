//! Bookmark tree encoder

use crate::error::{BookmarkError, Result};
use crate::node::{Node, MOZLZ4_HEADER_LEN, MOZLZ4_MAGIC};
use std::fs;
use std::path::Path;

/// Encodes a tree back into Firefox's backup formats
pub struct Encoder {
    pretty: bool,
}

impl Encoder {
    /// Create a new encoder producing compact JSON
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indent the JSON output
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Encode a tree as JSON text
    pub fn to_json(&self, node: &Node) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(node)
        } else {
            serde_json::to_string(node)
        };
        json.map_err(BookmarkError::Encode)
    }

    /// Encode a tree as a `.jsonlz4` backup
    ///
    /// Layout: `mozLz4`, two zero bytes, the JSON length as little-endian u32,
    /// then one LZ4 block.
    pub fn to_compressed(&self, node: &Node) -> Result<Vec<u8>> {
        let json = self.to_json(node)?;
        let len = u32::try_from(json.len()).map_err(|_| BookmarkError::TooLarge { len: json.len() })?;

        let block = lz4_flex::block::compress(json.as_bytes());
        let mut output = Vec::with_capacity(MOZLZ4_HEADER_LEN + block.len());
        output.extend_from_slice(MOZLZ4_MAGIC);
        output.extend_from_slice(&[0, 0]);
        output.extend_from_slice(&len.to_le_bytes());
        output.extend_from_slice(&block);
        Ok(output)
    }

    /// Encode a tree to a file, compressed if the path ends in `.jsonlz4`
    pub fn encode_to_file(&self, node: &Node, path: &Path) -> Result<()> {
        let bytes = if path.extension().is_some_and(|ext| ext == "jsonlz4") {
            self.to_compressed(node)?
        } else {
            self.to_json(node)?.into_bytes()
        };
        fs::write(path, bytes).map_err(|source| BookmarkError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::node::Annotation;

    fn sample() -> Node {
        Node::folder(
            "Root",
            vec![
                Node::bookmark("Site", "https://x.test").with_dates(1_000_000, 2_000_000),
                Node::separator(),
                Node::folder("Empty", vec![]),
                Node::bookmark("", "https://bare.test")
                    .with_annotation(Annotation::description("About")),
            ],
        )
    }

    #[test]
    fn test_to_json_keys() {
        let json = Encoder::new().to_json(&sample()).unwrap();
        assert!(json.starts_with(r#"{"title":"Root","children":["#));
        assert!(json.contains(r#""dateAdded":1000000,"lastModified":2000000"#));
        assert!(json.contains(r#"{"typeCode":3}"#));
        assert!(json.contains(r#"{"title":"Empty","children":[]}"#));
        assert!(json.contains(r#""annos":[{"name":"bookmarkProperties/description","value":"About"}]"#));
    }

    #[test]
    fn test_pretty_json() {
        let json = Encoder::new().pretty().to_json(&Node::folder("Root", vec![])).unwrap();
        assert!(json.contains("\n  \"title\": \"Root\""));
    }

    #[test]
    fn test_to_compressed_header() {
        let bytes = Encoder::new().to_compressed(&sample()).unwrap();
        let json_len = Encoder::new().to_json(&sample()).unwrap().len() as u32;

        assert_eq!(&bytes[..6], b"mozLz4");
        assert_eq!(&bytes[6..8], &[0, 0]);
        assert_eq!(&bytes[8..12], &json_len.to_le_bytes());
        assert!(bytes.len() > MOZLZ4_HEADER_LEN);
    }

    #[test]
    fn test_compressed_decodes_to_same_tree() {
        let bytes = Encoder::new().to_compressed(&sample()).unwrap();
        let decoded = Decoder::new().decode_compressed(&bytes, Path::new("x.jsonlz4")).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_encode_to_file_picks_format() {
        let dir = tempfile::tempdir().unwrap();
        let compressed = dir.path().join("b.jsonlz4");
        let plain = dir.path().join("b.json");

        Encoder::new().encode_to_file(&sample(), &compressed).unwrap();
        Encoder::new().encode_to_file(&sample(), &plain).unwrap();

        assert!(fs::read(&compressed).unwrap().starts_with(b"mozLz4"));
        assert!(fs::read_to_string(&plain).unwrap().starts_with('{'));
    }

    #[test]
    fn test_encode_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("b.jsonlz4");

        match Encoder::new().encode_to_file(&sample(), &path).unwrap_err() {
            BookmarkError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_large_message() {
        let err = BookmarkError::TooLarge { len: 5_000_000_000 };
        assert_eq!(err.to_string(), "bookmark tree too large for mozLz4: 5000000000 bytes");
    }
}
