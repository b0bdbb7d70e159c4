//! Bookmark tree data structures

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// mozLz4 container constants
pub const MOZLZ4_MAGIC: &[u8; 6] = b"mozLz4";
pub const MOZLZ4_HEADER_LEN: usize = 12; // magic (6) + reserved (2) + decompressed size (4)
pub const DEFAULT_MAX_DECOMPRESSED: usize = 10 * 1024 * 1024;

// Tree constants
pub const SEPARATOR_TYPE_CODE: i64 = 3;
pub const DESCRIPTION_ANNOTATION: &str = "bookmarkProperties/description";

/// A name/value metadata pair attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ObjectOnly<WireAnnotation>")]
pub struct Annotation {
    pub name: String,
    /// Firefox stores some values as numbers; they are kept in string form
    pub value: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a `bookmarkProperties/description` annotation
    pub fn description(value: impl Into<String>) -> Self {
        Self::new(DESCRIPTION_ANNOTATION, value)
    }

    pub fn is_description(&self) -> bool {
        self.name == DESCRIPTION_ANNOTATION
    }
}

/// What a node is, decided once when the tree is decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeShape {
    /// A folder. The `children` key was present, possibly as `[]`
    Container(Vec<Node>),
    /// A leaf with a non-empty target URI
    Bookmark(String),
    /// No children and no URI; renders nothing
    Inert,
}

/// One element of a bookmark tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ObjectOnly<WireNode>", into = "WireNode")]
pub struct Node {
    /// Display text, empty when unset
    pub title: String,
    /// Microseconds since the epoch, zero when unset
    pub date_added: i64,
    /// Microseconds since the epoch, zero when unset
    pub last_modified: i64,
    /// Firefox item type code; `3` marks a separator
    pub type_code: i64,
    pub annotations: Vec<Annotation>,
    pub shape: NodeShape,
}

impl Node {
    /// Create a folder with the given children
    pub fn folder(title: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_shape(title, NodeShape::Container(children))
    }

    /// Create a bookmark leaf. An empty URI yields an inert node
    pub fn bookmark(title: impl Into<String>, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let shape = if uri.is_empty() {
            NodeShape::Inert
        } else {
            NodeShape::Bookmark(uri)
        };
        Self::with_shape(title, shape)
    }

    /// Create a separator node
    pub fn separator() -> Self {
        let mut node = Self::with_shape("", NodeShape::Inert);
        node.type_code = SEPARATOR_TYPE_CODE;
        node
    }

    fn with_shape(title: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            title: title.into(),
            date_added: 0,
            last_modified: 0,
            type_code: 0,
            annotations: Vec::new(),
            shape,
        }
    }

    /// Set both timestamps (microseconds)
    pub fn with_dates(mut self, date_added: i64, last_modified: i64) -> Self {
        self.date_added = date_added;
        self.last_modified = last_modified;
        self
    }

    pub fn with_type_code(mut self, type_code: i64) -> Self {
        self.type_code = type_code;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_separator(&self) -> bool {
        self.type_code == SEPARATOR_TYPE_CODE
    }

    pub fn is_container(&self) -> bool {
        matches!(self.shape, NodeShape::Container(_))
    }

    /// Children of a container, `None` for leaves
    pub fn children(&self) -> Option<&[Node]> {
        match &self.shape {
            NodeShape::Container(children) => Some(children),
            _ => None,
        }
    }

    /// Target URI of a bookmark leaf
    pub fn uri(&self) -> Option<&str> {
        match &self.shape {
            NodeShape::Bookmark(uri) => Some(uri),
            _ => None,
        }
    }

    /// Values of every description annotation, in order
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.annotations
            .iter()
            .filter(|anno| anno.is_description())
            .map(|anno| anno.value.as_str())
    }

    /// Count bookmark leaves in this subtree, separators excluded
    pub fn bookmark_count(&self) -> usize {
        if self.is_separator() {
            return 0;
        }
        match &self.shape {
            NodeShape::Container(children) => children.iter().map(Node::bookmark_count).sum(),
            NodeShape::Bookmark(_) => 1,
            NodeShape::Inert => 0,
        }
    }
}

/// On-disk JSON shape of a node. `null` and absent keys are equivalent.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_added: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    annos: Option<Vec<Annotation>>,
}

#[derive(Debug, Deserialize)]
struct WireAnnotation {
    name: String,
    #[serde(deserialize_with = "scalar_as_string")]
    value: String,
}

/// Deserializes `T` only from a JSON object.
///
/// Derived struct impls also accept a sequence and fill fields by position,
/// so `[]` or `["Root", null, []]` would otherwise decode as a node.
struct ObjectOnly<T>(T);

impl<'de, T: DeserializeOwned> Deserialize<'de> for ObjectOnly<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        T::deserialize(serde_json::Value::Object(map))
            .map(ObjectOnly)
            .map_err(serde::de::Error::custom)
    }
}

impl From<ObjectOnly<WireAnnotation>> for Annotation {
    fn from(ObjectOnly(wire): ObjectOnly<WireAnnotation>) -> Self {
        Self::new(wire.name, wire.value)
    }
}

impl From<ObjectOnly<WireNode>> for Node {
    fn from(ObjectOnly(wire): ObjectOnly<WireNode>) -> Self {
        let uri = wire.uri.unwrap_or_default();
        let shape = match wire.children {
            Some(children) => NodeShape::Container(children),
            None if !uri.is_empty() => NodeShape::Bookmark(uri),
            None => NodeShape::Inert,
        };

        Self {
            title: wire.title.unwrap_or_default(),
            date_added: wire.date_added.unwrap_or(0),
            last_modified: wire.last_modified.unwrap_or(0),
            type_code: wire.type_code.unwrap_or(0),
            annotations: wire.annos.unwrap_or_default(),
            shape,
        }
    }
}

impl From<Node> for WireNode {
    fn from(node: Node) -> Self {
        let (uri, children) = match node.shape {
            NodeShape::Container(children) => (None, Some(children)),
            NodeShape::Bookmark(uri) => (Some(uri), None),
            NodeShape::Inert => (None, None),
        };

        Self {
            title: Some(node.title).filter(|t| !t.is_empty()),
            uri,
            children,
            date_added: Some(node.date_added).filter(|&t| t != 0),
            last_modified: Some(node.last_modified).filter(|&t| t != 0),
            type_code: Some(node.type_code).filter(|&c| c != 0),
            annos: Some(node.annotations).filter(|a| !a.is_empty()),
        }
    }
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "annotation value must be a scalar, got {}",
            other
        ))),
    }
}
