use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::repo_backend::{
    BackendError, BlobInfo, ObjectId, Reference, RepoBackend, Result, TreeEntry,
};

/// An in-memory implementation of `RepoBackend`, intended primarily for testing.
///
/// Objects are registered up front with the `add_*` methods and served
/// from `RwLock`-guarded tables afterwards.
pub struct MemoryBackend {
    references: RwLock<Vec<Reference>>,
    commits: RwLock<HashMap<ObjectId, ObjectId>>,
    trees: RwLock<HashMap<ObjectId, Vec<TreeEntry>>>,
    blobs: RwLock<HashMap<ObjectId, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self {
            references: RwLock::new(Vec::new()),
            commits: RwLock::new(HashMap::new()),
            trees: RwLock::new(HashMap::new()),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Register a reference.
    pub fn add_reference(&self, name: &str, target: &str) {
        self.references.write().unwrap().push(Reference {
            name: name.to_string(),
            target: target.to_string(),
        });
    }

    /// Register a commit pointing at its root tree.
    pub fn add_commit(&self, commit: &str, tree: &str) {
        self.commits
            .write()
            .unwrap()
            .insert(commit.to_string(), tree.to_string());
    }

    /// Register a tree with its entries.
    pub fn add_tree(&self, tree: &str, entries: Vec<TreeEntry>) {
        self.trees.write().unwrap().insert(tree.to_string(), entries);
    }

    /// Register a blob.
    pub fn add_blob(&self, blob: &str, data: &[u8]) {
        self.blobs
            .write()
            .unwrap()
            .insert(blob.to_string(), data.to_vec());
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoBackend for MemoryBackend {
    async fn list_references(&self) -> Result<Vec<Reference>> {
        Ok(self.references.read().unwrap().clone())
    }

    async fn commit_tree(&self, target: &ObjectId) -> Result<ObjectId> {
        self.commits
            .read()
            .unwrap()
            .get(target)
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    async fn tree_entries(&self, tree: &ObjectId) -> Result<Vec<TreeEntry>> {
        self.trees
            .read()
            .unwrap()
            .get(tree)
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    async fn blob_info(&self, blob: &ObjectId) -> Result<BlobInfo> {
        let blobs = self.blobs.read().unwrap();
        let data = blobs.get(blob).ok_or(BackendError::NotFound)?;
        Ok(BlobInfo {
            size: data.len() as u64,
            binary: data.contains(&0),
        })
    }

    async fn read_blob(&self, blob: &ObjectId) -> Result<Vec<u8>> {
        self.blobs
            .read()
            .unwrap()
            .get(blob)
            .cloned()
            .ok_or(BackendError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::EntryMode;

    #[tokio::test]
    async fn test_blob_roundtrip() {
        let backend = MemoryBackend::new();
        backend.add_blob("blob1", b"hello world");

        let info = backend.blob_info(&"blob1".to_string()).await.unwrap();
        assert_eq!(info.size, 11);
        assert!(!info.binary);

        let data = backend.read_blob(&"blob1".to_string()).await.unwrap();
        assert_eq!(data, b"hello world");
    }

    #[tokio::test]
    async fn test_binary_classification() {
        let backend = MemoryBackend::new();
        backend.add_blob("blob1", b"\x7fELF\x00\x01");

        let info = backend.blob_info(&"blob1".to_string()).await.unwrap();
        assert!(info.binary);
    }

    #[tokio::test]
    async fn test_read_nonexistent_object() {
        let backend = MemoryBackend::new();

        let result = backend.read_blob(&"nonexistent".to_string()).await;
        assert!(matches!(result, Err(BackendError::NotFound)));

        let result = backend.commit_tree(&"nonexistent".to_string()).await;
        assert!(matches!(result, Err(BackendError::NotFound)));
    }

    #[tokio::test]
    async fn test_references_and_trees() {
        let backend = MemoryBackend::new();
        backend.add_reference("refs/heads/main", "commit1");
        backend.add_commit("commit1", "tree1");
        backend.add_tree(
            "tree1",
            vec![TreeEntry {
                name: "README".to_string(),
                mode: EntryMode::Regular,
                object: "blob1".to_string(),
            }],
        );

        let refs = backend.list_references().await.unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "refs/heads/main");

        let tree = backend.commit_tree(&"commit1".to_string()).await.unwrap();
        assert_eq!(tree, "tree1");

        let entries = backend.tree_entries(&tree).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[0].mode, EntryMode::Regular);
    }
}
