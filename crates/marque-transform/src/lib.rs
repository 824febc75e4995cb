//! # marque-transform
//!
//! Structural transformations over [`marque_yaml::Node`] trees: a shape
//! normalization algebra, a generic custom-tag resolution engine, and the
//! `!include` / `!include_dir_named` resolvers built on it.
//!
//! The intended flow: parse a document with `marque-yaml`, resolve custom
//! tags in place, reshape subtrees into a canonical form, then hand the tree
//! to whatever binds it to typed data.
//!
//! ```rust,no_run
//! use marque_transform::{ensure_list, resolve_includes};
//!
//! let mut doc = marque_yaml::parse("servers: !include servers.yaml").unwrap();
//! resolve_includes(&mut doc).unwrap();
//! let servers = ensure_list(doc.get("servers").unwrap().clone());
//! ```
//!
//! ## Design
//!
//! Shape functions consume and return nodes; the caller substitutes the
//! result where it wants the change to stick, and a function whose
//! precondition does not hold returns its input unchanged. Tag resolution
//! instead mutates in place through `&mut Node`, so a graft is visible at
//! exactly the position the engine reached without re-wiring the parent.
//! Passes run to completion or abort on the first error; replacements made
//! before a failure are kept, never rolled back.

mod error;
mod include;
mod resolve;
mod shape;

pub use error::{Error, Result};
pub use include::{
    INCLUDE_DIR_NAMED_TAG, INCLUDE_TAG, load_fragment, resolve_dir_includes, resolve_includes,
};
pub use resolve::resolve_tag;
pub use shape::{
    ensure_flat_list, ensure_list, ensure_map_map, is_scalar_map, list_to_map_val,
    map_key_into_value_map, map_keys, map_split_key_val, map_to_slice_map, parse_bool_node,
    scalar_to_list, scalar_to_map, scalar_to_map_val,
};
