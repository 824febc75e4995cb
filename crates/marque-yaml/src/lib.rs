//! # marque-yaml
//!
//! YAML parsing into a tagged, order-preserving node tree.
//!
//! This crate provides [`Node`], a generic YAML document tree in which every
//! node carries its YAML tag (`!!str`, `!!map`, or a custom tag such as
//! `!include`). Mappings are stored as an ordered association list, so key
//! order survives parsing and duplicate keys are kept rather than collapsed.
//! Both properties matter for the structural transformations built on top of
//! this crate in `marque-transform`.
//!
//! ## Design
//!
//! Uses the **owned data approach**: the parser builds an owned `Node` tree
//! directly from `yaml-rust2` parser events. There are no lifetime parameters
//! and no back-references from a node to its parent; traversal is strictly
//! top-down, and transformations that must be visible through an existing
//! reference take `&mut Node` and overwrite the pointee.
//!
//! ## Example
//!
//! ```rust
//! use marque_yaml::parse;
//!
//! let doc = parse("title: My Document").unwrap();
//! assert!(doc.is_mapping());
//! assert_eq!(doc.get("title").and_then(|n| n.as_str()), Some("My Document"));
//! ```

mod error;
mod node;
mod parser;

pub use error::{Error, Result};
pub use node::{
    BOOL_TAG, FLOAT_TAG, INT_TAG, MAP_TAG, NULL_TAG, Node, SEQ_TAG, STR_TAG,
};
pub use parser::{parse, parse_file};
