//! End-to-end tests for the parse → resolve → reshape pipeline.

use marque_transform::{
    ensure_list, ensure_map_map, map_to_slice_map, resolve_dir_includes, resolve_includes,
};
use marque_yaml::{Node, parse};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_pipeline() {
    let dir = TempDir::new().unwrap();

    // A directory of host definitions plus a shared defaults file.
    let hosts = dir.path().join("hosts");
    fs::create_dir(&hosts).unwrap();
    fs::write(hosts.join("alpha.yaml"), "addr: 10.0.0.1\n").unwrap();
    fs::write(hosts.join("beta.yaml"), "addr: 10.0.0.2\n").unwrap();
    fs::write(dir.path().join("defaults.yaml"), "retries: 3\n").unwrap();

    let source = format!(
        "defaults: !include {}\nhosts: !include_dir_named {}\n",
        dir.path().join("defaults.yaml").display(),
        hosts.display(),
    );

    let mut doc = parse(&source).unwrap();
    resolve_includes(&mut doc).unwrap();
    resolve_dir_includes(&mut doc).unwrap();

    let defaults = doc.get("defaults").unwrap();
    assert_eq!(defaults.get("retries").and_then(Node::as_i64), Some(3));

    let hosts = doc.get("hosts").unwrap();
    assert_eq!(hosts.len(), 2);
    assert_eq!(
        hosts.get("alpha").unwrap().get("addr").and_then(Node::as_str),
        Some("10.0.0.1")
    );
    assert_eq!(
        hosts.get("beta").unwrap().get("addr").and_then(Node::as_str),
        Some("10.0.0.2")
    );

    // Reshape the resolved tree: one single-entry map per host, wrapped in a
    // list either way.
    let per_host = ensure_list(map_to_slice_map(hosts.clone()));
    assert!(per_host.is_sequence());
    assert_eq!(per_host.len(), 2);
    for item in per_host.items().unwrap() {
        assert!(item.is_mapping());
        assert_eq!(item.len(), 1);
    }
}

#[test]
fn test_terse_document_normalizes_like_a_full_one() {
    // `a` with no value and bare scalar `b` both end up addressable maps.
    let doc = parse("a:\nb: dev").unwrap();

    let a = ensure_map_map(doc.get("a").unwrap().clone());
    assert!(a.is_mapping());
    assert!(a.is_empty());

    let b = ensure_map_map(doc.get("b").unwrap().clone());
    assert!(b.get("dev").unwrap().is_mapping());
}

#[test]
fn test_failed_include_pass_leaves_prior_grafts() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.yaml");
    fs::write(&good, "ok: true\n").unwrap();
    let missing = dir.path().join("missing.yaml");

    let mut doc = parse(&format!(
        "first: !include {}\nsecond: !include {}\n",
        good.display(),
        missing.display(),
    ))
    .unwrap();

    assert!(resolve_includes(&mut doc).is_err());

    // No rollback: the first include already resolved.
    let first = doc.get("first").unwrap();
    assert_eq!(first.get("ok").and_then(Node::as_bool), Some(true));
    assert_eq!(doc.get("second").unwrap().tag(), "!include");
}
