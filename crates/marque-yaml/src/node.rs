//! The tagged YAML node tree.

/// Tag for null scalars.
pub const NULL_TAG: &str = "!!null";
/// Tag for boolean scalars.
pub const BOOL_TAG: &str = "!!bool";
/// Tag for integer scalars.
pub const INT_TAG: &str = "!!int";
/// Tag for floating-point scalars.
pub const FLOAT_TAG: &str = "!!float";
/// Tag for string scalars.
pub const STR_TAG: &str = "!!str";
/// Tag for sequences.
pub const SEQ_TAG: &str = "!!seq";
/// Tag for mappings.
pub const MAP_TAG: &str = "!!map";

/// One element of a YAML document tree.
///
/// Every node carries a `tag` string identifying its semantic type: one of
/// the standard tags (`!!str`, `!!map`, ...) or a custom tag such as
/// `!include`. The tag drives both default type interpretation and custom-tag
/// dispatch in `marque-transform`.
///
/// Mappings are an **ordered association list** of key/value pairs, not a
/// hash map: key order is preserved exactly as written, and duplicate keys
/// are structurally permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A scalar leaf. `value` is the raw textual representation.
    Scalar {
        /// Semantic type tag (e.g. `!!str`, `!!bool`, `!include`).
        tag: String,
        /// Raw scalar text as written in the source.
        value: String,
    },

    /// An ordered sequence of child nodes.
    Sequence {
        /// Semantic type tag (normally `!!seq`).
        tag: String,
        /// Sequence elements in document order.
        items: Vec<Node>,
    },

    /// An ordered mapping of key nodes to value nodes.
    Mapping {
        /// Semantic type tag (normally `!!map`).
        tag: String,
        /// Key/value pairs in document order. Duplicate keys are kept.
        entries: Vec<(Node, Node)>,
    },
}

impl Node {
    /// Create a scalar node with an explicit tag.
    pub fn scalar(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Scalar {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Create a `!!str` scalar node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::scalar(STR_TAG, value)
    }

    /// Create a `!!null` scalar node.
    pub fn null() -> Self {
        Node::scalar(NULL_TAG, "")
    }

    /// Create a `!!seq` sequence node.
    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence {
            tag: SEQ_TAG.to_string(),
            items,
        }
    }

    /// Create a `!!map` mapping node.
    pub fn mapping(entries: Vec<(Node, Node)>) -> Self {
        Node::Mapping {
            tag: MAP_TAG.to_string(),
            entries,
        }
    }

    /// The node's tag string.
    pub fn tag(&self) -> &str {
        match self {
            Node::Scalar { tag, .. }
            | Node::Sequence { tag, .. }
            | Node::Mapping { tag, .. } => tag,
        }
    }

    /// Check if this is a scalar node.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar { .. })
    }

    /// Check if this is a sequence node.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence { .. })
    }

    /// Check if this is a mapping node.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping { .. })
    }

    /// Check if this is a `!!null` scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar { tag, .. } if tag == NULL_TAG)
    }

    /// The raw scalar text, whatever the tag, if this is a scalar.
    pub fn scalar_value(&self) -> Option<&str> {
        match self {
            Node::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The scalar text if this is a `!!str` scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar { tag, value } if tag == STR_TAG => Some(value),
            _ => None,
        }
    }

    /// The boolean value if this is a `!!bool` scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar { tag, value } if tag == BOOL_TAG => parse_bool(value),
            _ => None,
        }
    }

    /// The integer value if this is a `!!int` scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Scalar { tag, value } if tag == INT_TAG => value.parse().ok(),
            _ => None,
        }
    }

    /// The floating-point value if this is a `!!float` or `!!int` scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Scalar { tag, value } if tag == FLOAT_TAG || tag == INT_TAG => {
                value.parse().ok()
            }
            _ => None,
        }
    }

    /// Sequence elements if this is a sequence.
    pub fn items(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Key/value pairs if this is a mapping.
    pub fn entries(&self) -> Option<&[(Node, Node)]> {
        match self {
            Node::Mapping { entries, .. } => Some(entries),
            _ => None,
        }
    }

    /// Get a mapping value by key (scalar text comparison).
    ///
    /// Searches entries in document order and returns the value of the first
    /// entry whose key is a scalar with the given text. Returns `None` if
    /// this is not a mapping or the key is not present.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping { entries, .. } => entries.iter().find_map(|(k, v)| {
                if k.scalar_value() == Some(key) {
                    Some(v)
                } else {
                    None
                }
            }),
            _ => None,
        }
    }

    /// Number of children: sequence length, mapping entry count, 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Node::Scalar { .. } => 0,
            Node::Sequence { items, .. } => items.len(),
            Node::Mapping { entries, .. } => entries.len(),
        }
    }

    /// Check if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse YAML 1.1 boolean words.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Some(true),
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => Some(false),
        _ => None,
    }
}
