//! Shape normalization for YAML node trees.
//!
//! Terse, human-friendly YAML leans on shorthands: a bare scalar where a
//! mapping is expected, a singleton mapping standing in for a named record,
//! an omitted value. The functions in this module rewrite those shorthands
//! into one canonical shape so that a decoder never has to special-case them.
//!
//! Every function consumes a [`Node`] and returns one. When the input does
//! not match the function's precondition shape it is returned unchanged.
//! A mismatch is never an error, so the functions can be chained freely and
//! speculatively. All of them preserve mapping order.

use marque_yaml::Node;

/// Wrap a scalar as a mapping with the scalar as its sole key and a null
/// value: `x` becomes `{x: null}`. Non-scalars are returned unchanged.
pub fn scalar_to_map(node: Node) -> Node {
    if node.is_scalar() {
        Node::mapping(vec![(node, Node::null())])
    } else {
        node
    }
}

/// Wrap a scalar as a mapping under the given key: `x` becomes `{key: x}`.
/// Non-scalars are returned unchanged.
///
/// # Example
///
/// ```rust
/// use marque_transform::scalar_to_map_val;
/// use marque_yaml::Node;
///
/// let node = scalar_to_map_val(Node::string("~/x"), "path");
/// assert_eq!(node.get("path").and_then(Node::as_str), Some("~/x"));
/// ```
pub fn scalar_to_map_val(node: Node, key: &str) -> Node {
    if node.is_scalar() {
        Node::mapping(vec![(Node::string(key), node)])
    } else {
        node
    }
}

/// Wrap a scalar as a single-element sequence. Non-scalars are returned
/// unchanged; see [`ensure_list`] for the variant that wraps anything that
/// is not already a sequence.
pub fn scalar_to_list(node: Node) -> Node {
    if node.is_scalar() {
        Node::sequence(vec![node])
    } else {
        node
    }
}

/// Wrap a sequence as a mapping under the given key: `[..]` becomes
/// `{key: [..]}`. Non-sequences are returned unchanged.
pub fn list_to_map_val(node: Node, key: &str) -> Node {
    if node.is_sequence() {
        Node::mapping(vec![(Node::string(key), node)])
    } else {
        node
    }
}

/// Return sequences unchanged and wrap anything else as a single-element
/// sequence.
pub fn ensure_list(node: Node) -> Node {
    if node.is_sequence() {
        node
    } else {
        Node::sequence(vec![node])
    }
}

/// Recursively inline nested sequences into the parent sequence, so
/// `[a, [b, [c]], d]` becomes `[a, b, c, d]`. Non-sequences are returned
/// unchanged.
pub fn ensure_flat_list(node: Node) -> Node {
    match node {
        Node::Sequence { tag, items } => {
            let mut flat = Vec::with_capacity(items.len());
            flatten_into(items, &mut flat);
            Node::Sequence { tag, items: flat }
        }
        other => other,
    }
}

fn flatten_into(items: Vec<Node>, out: &mut Vec<Node>) {
    for item in items {
        match item {
            Node::Sequence { items, .. } => flatten_into(items, out),
            other => out.push(other),
        }
    }
}

/// Make a leaf addressable as a map of maps.
///
/// Mappings pass through unchanged. A null scalar (a key whose value was
/// omitted) becomes an empty mapping, and any other scalar `s` becomes
/// `{s: {}}`. Sequences are returned unchanged.
pub fn ensure_map_map(node: Node) -> Node {
    if node.is_mapping() {
        return node;
    }
    if node.is_null() {
        return Node::mapping(Vec::new());
    }
    if node.is_scalar() {
        return Node::mapping(vec![(node, Node::mapping(Vec::new()))]);
    }
    node
}

/// Promote the sole top-level key of a singleton mapping into a field of its
/// nested mapping value: `{k: {a: b}}` becomes `{a: b, key_key: k}`.
///
/// The input is returned unchanged unless it is a mapping with exactly one
/// entry whose value is itself a mapping.
pub fn map_key_into_value_map(node: Node, key_key: &str) -> Node {
    match node {
        Node::Mapping { tag, mut entries } if entries.len() == 1 => match entries.pop() {
            Some((
                outer_key,
                Node::Mapping {
                    tag: inner_tag,
                    entries: mut inner,
                },
            )) => {
                inner.push((Node::string(key_key), outer_key));
                Node::Mapping {
                    tag: inner_tag,
                    entries: inner,
                }
            }
            Some(pair) => {
                entries.push(pair);
                Node::Mapping { tag, entries }
            }
            None => Node::Mapping { tag, entries },
        },
        other => other,
    }
}

/// Split the sole entry of a singleton mapping into named key and value
/// fields: `{k: v}` becomes `{key_key: k, val_key: v}`.
///
/// The input is returned unchanged unless it is a mapping with exactly one
/// entry.
pub fn map_split_key_val(node: Node, key_key: &str, val_key: &str) -> Node {
    match node {
        Node::Mapping { tag, mut entries } if entries.len() == 1 => match entries.pop() {
            Some((key, value)) => Node::Mapping {
                tag,
                entries: vec![
                    (Node::string(key_key), key),
                    (Node::string(val_key), value),
                ],
            },
            None => Node::Mapping { tag, entries },
        },
        other => other,
    }
}

/// Explode a mapping into a sequence of single-entry mappings, preserving
/// entry order: `{a: 1, b: 2}` becomes `[{a: 1}, {b: 2}]`. Non-mappings are
/// returned unchanged.
pub fn map_to_slice_map(node: Node) -> Node {
    match node {
        Node::Mapping { entries, .. } => Node::sequence(
            entries
                .into_iter()
                .map(|(key, value)| Node::mapping(vec![(key, value)]))
                .collect(),
        ),
        other => other,
    }
}

/// True iff the node is a mapping in which every key and every value is a
/// scalar.
pub fn is_scalar_map(node: &Node) -> bool {
    match node.entries() {
        Some(entries) => entries
            .iter()
            .all(|(key, value)| key.is_scalar() && value.is_scalar()),
        None => false,
    }
}

/// The ordered key strings of a mapping, or an empty list for anything else.
/// Non-scalar keys contribute an empty string.
pub fn map_keys(node: &Node) -> Vec<String> {
    match node.entries() {
        Some(entries) => entries
            .iter()
            .map(|(key, _)| key.scalar_value().unwrap_or_default().to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// The boolean value of a scalar whose tag denotes a YAML boolean.
///
/// Returns `None` for anything that is not explicitly a boolean, letting
/// callers branch on "was this a bool" without failing on other input.
pub fn parse_bool_node(node: &Node) -> Option<bool> {
    node.as_bool()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marque_yaml::parse;

    #[test]
    fn test_scalar_to_map() {
        let node = scalar_to_map(Node::string("x"));
        assert!(node.is_mapping());
        assert_eq!(node.len(), 1);
        assert!(node.get("x").unwrap().is_null());

        // Non-scalars pass through.
        let seq = Node::sequence(vec![Node::string("x")]);
        assert_eq!(scalar_to_map(seq.clone()), seq);
    }

    #[test]
    fn test_scalar_to_map_val() {
        let node = scalar_to_map_val(Node::string("~/x"), "path");
        assert_eq!(node.get("path").and_then(Node::as_str), Some("~/x"));

        let map = Node::mapping(vec![]);
        assert_eq!(scalar_to_map_val(map.clone(), "path"), map);
    }

    #[test]
    fn test_scalar_to_list() {
        let node = scalar_to_list(Node::string("a"));
        assert!(node.is_sequence());
        assert_eq!(node.items().unwrap()[0].as_str(), Some("a"));
    }

    #[test]
    fn test_list_to_map_val() {
        let seq = Node::sequence(vec![Node::string("a"), Node::string("b")]);
        let node = list_to_map_val(seq, "items");
        assert!(node.is_mapping());
        assert_eq!(node.get("items").unwrap().len(), 2);

        let scalar = Node::string("a");
        assert_eq!(list_to_map_val(scalar.clone(), "items"), scalar);
    }

    #[test]
    fn test_ensure_list_identities() {
        // Non-sequences get wrapped, the original node unchanged inside.
        for node in [Node::string("a"), Node::null(), Node::mapping(vec![])] {
            let wrapped = ensure_list(node.clone());
            assert!(wrapped.is_sequence());
            assert_eq!(wrapped.items().unwrap(), &[node]);
        }

        // Sequences are returned as-is.
        let seq = Node::sequence(vec![Node::string("a")]);
        assert_eq!(ensure_list(seq.clone()), seq);
    }

    #[test]
    fn test_ensure_flat_list() {
        let doc = parse("[a, [b, [c, d]], e]").unwrap();
        let flat = ensure_flat_list(doc);
        let values: Vec<_> = flat
            .items()
            .unwrap()
            .iter()
            .map(|n| n.as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_ensure_map_map() {
        let map = parse("a: 1").unwrap();
        assert_eq!(ensure_map_map(map.clone()), map);

        let from_null = ensure_map_map(Node::null());
        assert!(from_null.is_mapping());
        assert!(from_null.is_empty());

        let from_scalar = ensure_map_map(Node::string("dev"));
        assert!(from_scalar.is_mapping());
        let inner = from_scalar.get("dev").unwrap();
        assert!(inner.is_mapping());
        assert!(inner.is_empty());
    }

    #[test]
    fn test_map_key_into_value_map() {
        let doc = parse("~/x:\n  key2: val2").unwrap();
        let node = map_key_into_value_map(doc, "path");

        assert_eq!(node.len(), 2);
        let entries = node.entries().unwrap();
        assert_eq!(entries[0].0.scalar_value(), Some("key2"));
        assert_eq!(entries[1].0.scalar_value(), Some("path"));
        assert_eq!(entries[1].1.scalar_value(), Some("~/x"));
    }

    #[test]
    fn test_map_key_into_value_map_mismatch() {
        // Two entries: not a singleton, pass through.
        let doc = parse("a:\n  x: 1\nb:\n  y: 2").unwrap();
        assert_eq!(map_key_into_value_map(doc.clone(), "path"), doc);

        // Singleton whose value is a scalar: pass through.
        let doc = parse("a: 1").unwrap();
        assert_eq!(map_key_into_value_map(doc.clone(), "path"), doc);
    }

    #[test]
    fn test_map_split_key_val() {
        let doc = parse("host: 8080").unwrap();
        let node = map_split_key_val(doc, "name", "port");

        assert_eq!(node.len(), 2);
        assert_eq!(node.get("name").and_then(Node::as_str), Some("host"));
        assert_eq!(node.get("port").and_then(Node::as_i64), Some(8080));
    }

    #[test]
    fn test_map_to_slice_map_round_trip() {
        let doc = parse("b: 1\na: 2\nc: 3").unwrap();
        let original = doc.entries().unwrap().to_vec();

        let slices = map_to_slice_map(doc);
        assert!(slices.is_sequence());

        // Re-flattening the single-pair maps reconstructs the original
        // entries and their order exactly.
        let mut rebuilt = Vec::new();
        for item in slices.items().unwrap() {
            rebuilt.extend(item.entries().unwrap().iter().cloned());
        }
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_is_scalar_map() {
        assert!(is_scalar_map(&parse("a: 1\nb: 2").unwrap()));
        assert!(!is_scalar_map(&parse("a:\n  c: 1").unwrap()));
        assert!(!is_scalar_map(&parse("[a, b]").unwrap()));
        assert!(!is_scalar_map(&Node::string("a")));
    }

    #[test]
    fn test_map_keys() {
        assert_eq!(
            map_keys(&parse("b: 1\na: 2").unwrap()),
            vec!["b".to_string(), "a".to_string()]
        );
        assert!(map_keys(&Node::string("a")).is_empty());
    }

    #[test]
    fn test_parse_bool_node() {
        assert_eq!(parse_bool_node(&parse("true").unwrap()), Some(true));
        assert_eq!(parse_bool_node(&parse("off").unwrap()), Some(false));
        assert_eq!(parse_bool_node(&parse("hello").unwrap()), None);
        // Quoted booleans are strings, not booleans.
        assert_eq!(parse_bool_node(&parse("\"true\"").unwrap()), None);
    }
}
