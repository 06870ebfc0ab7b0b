//! Path resolution over the node graph.

use super::error::{FsError, Result};
use super::node::Node;

/// Resolve a slash-delimited path against `root`.
///
/// Empty segments are ignored, so leading, trailing and doubled slashes
/// are harmless; the empty path (and `"/"`) resolves to `root` itself.
/// Resolution walks the node graph calling `children()` at each step and
/// performs no caching: repeated calls redo the full walk against the
/// backend.
pub async fn resolve(root: &Node, path: &str) -> Result<Node> {
    let mut current = root.clone();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let dir = match current {
            Node::Dir(dir) => dir,
            Node::File(_) => return Err(FsError::NotADirectory),
        };
        let mut children = dir.children().await?;
        current = children.remove(segment).ok_or(FsError::NotFound)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::{EntryMode, MemoryBackend, TreeEntry};
    use crate::namespace::build_root;

    fn fixture() -> Arc<MemoryBackend> {
        let backend = MemoryBackend::new();
        backend.add_blob("blob-readme", b"# hello\n");
        backend.add_tree(
            "tree-docs",
            vec![TreeEntry {
                name: "guide.md".to_string(),
                mode: EntryMode::Regular,
                object: "blob-readme".to_string(),
            }],
        );
        backend.add_tree(
            "tree-main",
            vec![
                TreeEntry {
                    name: "README".to_string(),
                    mode: EntryMode::Regular,
                    object: "blob-readme".to_string(),
                },
                TreeEntry {
                    name: "docs".to_string(),
                    mode: EntryMode::Directory,
                    object: "tree-docs".to_string(),
                },
            ],
        );
        backend.add_commit("commit-main", "tree-main");
        backend.add_reference("refs/heads/main", "commit-main");
        Arc::new(backend)
    }

    #[tokio::test]
    async fn test_empty_path_resolves_to_root() {
        let root = build_root(fixture()).await.unwrap();
        let node = resolve(&root, "").await.unwrap();
        assert!(matches!(node, Node::Dir(_)));
        let node = resolve(&root, "/").await.unwrap();
        assert!(matches!(node, Node::Dir(_)));
    }

    #[tokio::test]
    async fn test_resolves_deep_path() {
        let root = build_root(fixture()).await.unwrap();
        let node = resolve(&root, "refs/heads/main/docs/guide.md").await.unwrap();
        match node {
            Node::File(file) => assert_eq!(file.size(), 8),
            Node::Dir(_) => panic!("expected a file node"),
        }
    }

    #[tokio::test]
    async fn test_extra_slashes_are_ignored() {
        let root = build_root(fixture()).await.unwrap();
        let node = resolve(&root, "/refs//heads/main/").await.unwrap();
        assert!(matches!(node, Node::Dir(_)));
    }

    #[tokio::test]
    async fn test_missing_segment_is_not_found() {
        let root = build_root(fixture()).await.unwrap();
        let result = resolve(&root, "refs/heads/nope").await;
        assert!(matches!(result, Err(FsError::NotFound)));
    }

    #[tokio::test]
    async fn test_descending_through_file_is_not_a_directory() {
        let root = build_root(fixture()).await.unwrap();
        let result = resolve(&root, "refs/heads/main/README/deeper").await;
        assert!(matches!(result, Err(FsError::NotADirectory)));
    }
}
