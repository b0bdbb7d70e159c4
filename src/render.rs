//! Netscape bookmark HTML renderer

use crate::config::RenderConfig;
use crate::error::{BookmarkError, Result};
use crate::node::{Node, NodeShape};
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const DOCUMENT_PREAMBLE: [&str; 6] = [
    "<!DOCTYPE NETSCAPE-Bookmark-file-1>",
    "<!-- This is an automatically generated file.",
    "    It will be read and overwritten.",
    "    DO NOT EDIT! -->",
    r#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">"#,
    "<TITLE>Bookmarks</TITLE>",
];
const LIST_OPEN: &str = "<DL><p>";
const LIST_CLOSE: &str = "</DL><p>";

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Escape `&`, `<`, `>`, `"` and `'` for use in text or a quoted attribute
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Convert a microsecond timestamp to whole seconds, `None` when unset
pub fn format_timestamp(micros: i64) -> Option<i64> {
    (micros != 0).then(|| micros.div_euclid(MICROS_PER_SECOND))
}

/// ` ADD_DATE="…"` and ` LAST_MODIFIED="…"`, each omitted when zero
pub fn date_attributes(node: &Node) -> String {
    let mut attributes = String::new();
    if let Some(seconds) = format_timestamp(node.date_added) {
        attributes.push_str(&format!(r#" ADD_DATE="{}""#, seconds));
    }
    if let Some(seconds) = format_timestamp(node.last_modified) {
        attributes.push_str(&format!(r#" LAST_MODIFIED="{}""#, seconds));
    }
    attributes
}

/// Writes lines prefixed with `indent_width × depth` spaces
pub struct IndentWriter<W: Write> {
    inner: W,
    indent_width: usize,
}

impl<W: Write> IndentWriter<W> {
    pub fn new(inner: W, indent_width: usize) -> Self {
        Self { inner, indent_width }
    }

    pub fn write_line(&mut self, depth: usize, text: &str) -> io::Result<()> {
        let indentation = " ".repeat(self.indent_width * depth);
        writeln!(self.inner, "{}{}", indentation, text)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Renders a bookmark tree as a Netscape bookmark file
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a tree to a string
    pub fn render(&self, root: &Node) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_to_writer(root, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| BookmarkError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Render a tree to a writer, buffered and flushed once at the end
    pub fn render_to_writer<W: Write>(&self, root: &Node, writer: W) -> Result<()> {
        let mut out = IndentWriter::new(BufWriter::new(writer), self.config.indent_width);
        let rendered = self.render_node(&mut out, root, 0);
        let flushed = out.into_inner().flush();
        rendered.and(flushed).map_err(BookmarkError::Write)
    }

    /// Render a tree to a newly created file
    pub fn render_to_file(&self, root: &Node, path: &Path) -> Result<()> {
        let file = fs::File::create(path).map_err(|source| BookmarkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.render_to_writer(root, file)
    }

    fn render_node<W: Write>(&self, out: &mut IndentWriter<W>, node: &Node, depth: usize) -> io::Result<()> {
        if node.is_separator() {
            return Ok(());
        }

        match &node.shape {
            NodeShape::Container(children) => {
                if depth == 0 {
                    self.write_header(out, &node.title)?;
                } else {
                    self.write_folder(out, node, depth)?;
                }
                for child in children {
                    self.render_node(out, child, depth + 1)?;
                }
                out.write_line(depth, LIST_CLOSE)
            }
            NodeShape::Bookmark(uri) => self.write_bookmark(out, node, uri, depth),
            NodeShape::Inert => Ok(()),
        }
    }

    fn write_header<W: Write>(&self, out: &mut IndentWriter<W>, title: &str) -> io::Result<()> {
        let title: &str = if title.is_empty() { &self.config.default_title } else { title };
        for line in DOCUMENT_PREAMBLE {
            out.write_line(0, line)?;
        }
        out.write_line(0, &format!("<H1>{}</H1>", escape(title)))?;
        out.write_line(0, LIST_OPEN)
    }

    fn write_folder<W: Write>(&self, out: &mut IndentWriter<W>, node: &Node, depth: usize) -> io::Result<()> {
        out.write_line(
            depth,
            &format!("<DT><H3{}>{}</H3>", date_attributes(node), escape(&node.title)),
        )?;
        out.write_line(depth, LIST_OPEN)
    }

    fn write_bookmark<W: Write>(
        &self,
        out: &mut IndentWriter<W>,
        node: &Node,
        uri: &str,
        depth: usize,
    ) -> io::Result<()> {
        let label: &str = if node.title.is_empty() { uri } else { &node.title };
        out.write_line(
            depth,
            &format!(
                r#"<DT><A HREF="{}"{}>{}</A>"#,
                escape(uri),
                date_attributes(node),
                escape(label)
            ),
        )?;

        for description in node.descriptions() {
            out.write_line(depth, &format!("<DD>{}", escape(description)))?;
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
