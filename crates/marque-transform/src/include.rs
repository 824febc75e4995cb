//! File-inclusion tags: `!include` and `!include_dir_named`.
//!
//! Both resolvers are one-shot full-tree passes over the tag-resolution
//! engine. Paths are taken verbatim from the tagged scalar, relative to the
//! process working directory. Any read, walk, or parse failure aborts the
//! whole pass; tag nodes already replaced stay replaced.

use crate::{resolve_tag, Error, Result};
use marque_yaml::Node;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Tag replaced by the content of a single file.
pub const INCLUDE_TAG: &str = "!include";

/// Tag replaced by a mapping of file name to file content for a directory.
pub const INCLUDE_DIR_NAMED_TAG: &str = "!include_dir_named";

/// Read and parse a file into a standalone node tree.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`] if
/// its content is not valid YAML; both carry the offending path.
pub fn load_fragment(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    marque_yaml::parse(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve every `!include <path>` tag in the tree.
///
/// Each tagged scalar names a file; the file is loaded, parsed, and grafted
/// in place of the tag node.
///
/// # Example
///
/// Given `common.yaml` containing `port: 8080`, the document
///
/// ```yaml
/// server: !include common.yaml
/// ```
///
/// resolves to `server: {port: 8080}`.
pub fn resolve_includes(root: &mut Node) -> Result<()> {
    resolve_tag(root, INCLUDE_TAG, &mut |node| {
        let path = tag_path(node, INCLUDE_TAG)?;
        tracing::debug!(path = %path.display(), "resolving include");
        *node = load_fragment(&path)?;
        Ok(())
    })
}

/// Resolve every `!include_dir_named <path>` tag in the tree.
///
/// Each tagged scalar names a directory. The directory is enumerated
/// non-recursively, sub-directories are skipped, and the tag node is
/// replaced by a mapping of file name (without extension) to parsed file
/// content. Entries appear in filesystem enumeration order, which is not
/// sorted and must not be relied upon.
pub fn resolve_dir_includes(root: &mut Node) -> Result<()> {
    resolve_tag(root, INCLUDE_DIR_NAMED_TAG, &mut |node| {
        let dir = tag_path(node, INCLUDE_DIR_NAMED_TAG)?;
        tracing::debug!(path = %dir.display(), "resolving directory include");

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| Error::Walk {
                path: dir.clone(),
                source,
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            let fragment = load_fragment(entry.path())?;
            entries.push((Node::string(name), fragment));
        }

        *node = Node::mapping(entries);
        Ok(())
    })
}

/// The filesystem path named by an include tag node.
fn tag_path(node: &Node, tag: &str) -> Result<PathBuf> {
    match node.scalar_value() {
        Some(value) => Ok(PathBuf::from(value)),
        None => Err(Error::resolver(format!(
            "{tag} tag must be attached to a scalar path"
        ))),
    }
}
