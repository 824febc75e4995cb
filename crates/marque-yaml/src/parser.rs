//! YAML parser that builds tagged [`Node`] trees.

use crate::node::{parse_bool, BOOL_TAG, FLOAT_TAG, INT_TAG, MAP_TAG, NULL_TAG, SEQ_TAG, STR_TAG};
use crate::{Error, Node, Result};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse YAML from a string, producing a [`Node`] tree.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is kept.
///
/// # Example
///
/// ```rust
/// use marque_yaml::parse;
///
/// let doc = parse("title: My Document").unwrap();
/// assert!(doc.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the input holds no document.
pub fn parse(content: &str) -> Result<Node> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = NodeBuilder::new();

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(Error::from)?;

    builder.result()
}

/// Parse YAML from a string with an associated filename.
///
/// The filename is attached to any error for better reporting; the parsed
/// tree is the same as with [`parse`].
///
/// # Example
///
/// ```rust
/// use marque_yaml::parse_file;
///
/// let doc = parse_file("title: My Document", "config.yaml").unwrap();
/// assert!(doc.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the input holds no document.
pub fn parse_file(content: &str, filename: &str) -> Result<Node> {
    parse(content).map_err(|err| err.in_file(filename))
}

/// Builder that implements MarkedEventReceiver to construct Node trees.
struct NodeBuilder {
    /// Stack of nodes being constructed.
    stack: Vec<BuildNode>,

    /// The completed root node.
    root: Option<Node>,
}

/// A node being constructed during parsing.
enum BuildNode {
    /// Building a sequence.
    Sequence { tag: String, items: Vec<Node> },

    /// Building a mapping. The value slot of the last entry is `None` while
    /// its key has been seen but its value has not.
    Mapping {
        tag: String,
        entries: Vec<(Node, Option<Node>)>,
    },
}

impl NodeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    fn result(self) -> Result<Node> {
        self.root.ok_or(Error::EmptyDocument)
    }

    fn push_complete(&mut self, node: Node) {
        let Some(parent) = self.stack.last_mut() else {
            // This is the root
            self.root = Some(node);
            return;
        };

        match parent {
            BuildNode::Sequence { items, .. } => {
                items.push(node);
            }
            BuildNode::Mapping { entries, .. } => {
                if let Some((_, value)) = entries.last_mut() {
                    if value.is_none() {
                        *value = Some(node);
                    } else {
                        // This is a new key
                        entries.push((node, None));
                    }
                } else {
                    // First key
                    entries.push((node, None));
                }
            }
        }
    }
}

impl MarkedEventReceiver for NodeBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        match ev {
            Event::Nothing => {}

            Event::StreamStart => {}
            Event::StreamEnd => {}
            Event::DocumentStart => {}
            Event::DocumentEnd => {}

            Event::Scalar(value, style, _anchor_id, tag) => {
                let tag = match tag {
                    Some(t) => display_tag(&t),
                    None if style == TScalarStyle::Plain => {
                        resolve_plain_scalar_tag(&value).to_string()
                    }
                    // Quoted and block scalars are always strings.
                    None => STR_TAG.to_string(),
                };
                self.push_complete(Node::Scalar { tag, value });
            }

            Event::SequenceStart(_anchor_id, tag) => {
                self.stack.push(BuildNode::Sequence {
                    tag: tag.map_or_else(|| SEQ_TAG.to_string(), |t| display_tag(&t)),
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let build_node = self.stack.pop().expect("SequenceEnd without SequenceStart");

                if let BuildNode::Sequence { tag, items } = build_node {
                    self.push_complete(Node::Sequence { tag, items });
                } else {
                    panic!("Expected Sequence build node");
                }
            }

            Event::MappingStart(_anchor_id, tag) => {
                self.stack.push(BuildNode::Mapping {
                    tag: tag.map_or_else(|| MAP_TAG.to_string(), |t| display_tag(&t)),
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                let build_node = self.stack.pop().expect("MappingEnd without MappingStart");

                if let BuildNode::Mapping { tag, entries } = build_node {
                    let entries = entries
                        .into_iter()
                        .map(|(key, value)| {
                            (key, value.expect("Mapping entry without value"))
                        })
                        .collect();
                    self.push_complete(Node::Mapping { tag, entries });
                } else {
                    panic!("Expected Mapping build node");
                }
            }

            Event::Alias(_anchor_id) => {
                // Aliases are not supported; they parse to null.
                self.push_complete(Node::null());
            }
        }
    }
}

/// Render a `yaml-rust2` tag in the shorthand form nodes carry.
///
/// Core-schema tags come out as `!!str`, `!!map`, ...; custom tags keep their
/// handle, so `!include` stays `!include`.
fn display_tag(tag: &Tag) -> String {
    if tag.handle == "tag:yaml.org,2002:" {
        format!("!!{}", tag.suffix)
    } else {
        format!("{}{}", tag.handle, tag.suffix)
    }
}

/// Resolve the default tag of an untagged plain scalar.
///
/// This follows core-schema type inference: integers, floats, booleans,
/// null, and finally strings.
fn resolve_plain_scalar_tag(value: &str) -> &'static str {
    if value.parse::<i64>().is_ok() {
        return INT_TAG;
    }

    if value.parse::<f64>().is_ok() {
        return FLOAT_TAG;
    }

    if parse_bool(value).is_some() {
        return BOOL_TAG;
    }

    match value {
        "null" | "Null" | "NULL" | "~" | "" => NULL_TAG,
        _ => STR_TAG,
    }
}
