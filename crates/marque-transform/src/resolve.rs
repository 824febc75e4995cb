//! Generic custom-tag resolution over a node tree.

use crate::Result;
use marque_yaml::Node;

/// Recursively search a node tree for a custom tag and resolve each match
/// in place.
///
/// The traversal is depth-first pre-order, so matches are resolved in
/// document order (top to bottom, left to right). The order is observable
/// when the resolver has side effects such as reading files. At a matching
/// node the resolver is invoked and the traversal does **not** descend into
/// whatever it grafted there; the resolver owns the replacement content.
/// Sequences are searched element by element, mappings by their value nodes
/// only; keys are never resolution targets.
///
/// The resolver mutates the matched node through the `&mut Node` it is
/// handed, typically by overwriting it outright (`*node = replacement`).
/// Its first error aborts the whole traversal; nodes resolved before the
/// failure keep their replacements.
///
/// # Example
///
/// ```rust
/// use marque_transform::resolve_tag;
/// use marque_yaml::{parse, Node};
///
/// let mut doc = parse("greeting: !upper hello").unwrap();
/// resolve_tag(&mut doc, "!upper", &mut |node| {
///     let text = node.scalar_value().unwrap_or_default().to_uppercase();
///     *node = Node::string(text);
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(doc.get("greeting").and_then(Node::as_str), Some("HELLO"));
/// ```
pub fn resolve_tag<F>(node: &mut Node, tag: &str, resolver: &mut F) -> Result<()>
where
    F: FnMut(&mut Node) -> Result<()>,
{
    if node.tag() == tag {
        return resolver(node);
    }

    match node {
        Node::Sequence { items, .. } => {
            for item in items {
                resolve_tag(item, tag, resolver)?;
            }
        }
        Node::Mapping { entries, .. } => {
            // Only the values can carry substitutable content.
            for (_, value) in entries {
                resolve_tag(value, tag, resolver)?;
            }
        }
        Node::Scalar { .. } => {}
    }

    Ok(())
}
