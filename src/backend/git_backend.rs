//! Git repository backend backed by libgit2.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use git2::{ErrorCode, ObjectType, Oid, Repository};

use super::repo_backend::{
    BackendError, BlobInfo, EntryMode, ObjectId, Reference, RepoBackend, Result, TreeEntry,
    ZERO_OBJECT_ID,
};

/// A read-only backend over a local git repository (plain or bare).
///
/// libgit2 repository handles are not `Sync`, so the handle sits behind a
/// mutex and every operation holds the lock for the duration of a single
/// synchronous libgit2 call.
pub struct GitBackend {
    repo: Mutex<Repository>,
    root: PathBuf,
}

impl GitBackend {
    /// Open an existing git repository.
    ///
    /// The path may point at a working directory containing `.git`, or at
    /// a bare repository.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root: PathBuf = path.into();
        let repo = Repository::open(&root)?;
        Ok(Self {
            repo: Mutex::new(repo),
            root,
        })
    }

    /// Path the repository was opened from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn lock(&self) -> Result<MutexGuard<'_, Repository>> {
        self.repo
            .lock()
            .map_err(|_| BackendError::Other("repository lock poisoned".to_string()))
    }
}

impl From<git2::Error> for BackendError {
    fn from(e: git2::Error) -> Self {
        if e.code() == ErrorCode::NotFound {
            BackendError::NotFound
        } else {
            BackendError::Other(format!("git error: {}", e.message()))
        }
    }
}

fn parse_oid(id: &ObjectId) -> Result<Oid> {
    Oid::from_str(id).map_err(|e| BackendError::Other(format!("invalid object id '{}': {}", id, e)))
}

/// Map a raw git filemode to an [`EntryMode`].
///
/// The group-writable blob mode written by some ancient tools is folded
/// into `Regular`.
fn entry_mode(raw: i32) -> EntryMode {
    match raw {
        0o040000 => EntryMode::Directory,
        0o100644 | 0o100664 => EntryMode::Regular,
        0o100755 => EntryMode::Executable,
        0o120000 => EntryMode::Symlink,
        0o160000 => EntryMode::Submodule,
        _ => EntryMode::Other,
    }
}

#[async_trait]
impl RepoBackend for GitBackend {
    async fn list_references(&self) -> Result<Vec<Reference>> {
        let repo = self.lock()?;

        let mut references = Vec::new();
        for reference in repo.references()? {
            let reference = reference?;
            // Names that are not valid UTF-8 cannot appear in the namespace.
            let Some(name) = reference.name() else {
                continue;
            };
            let target = reference
                .target()
                .map(|oid| oid.to_string())
                .unwrap_or_else(|| ZERO_OBJECT_ID.to_string());
            references.push(Reference {
                name: name.to_string(),
                target,
            });
        }
        Ok(references)
    }

    async fn commit_tree(&self, target: &ObjectId) -> Result<ObjectId> {
        let repo = self.lock()?;
        let object = repo.find_object(parse_oid(target)?, None)?;
        let tree = object.peel(ObjectType::Tree)?;
        Ok(tree.id().to_string())
    }

    async fn tree_entries(&self, tree: &ObjectId) -> Result<Vec<TreeEntry>> {
        let repo = self.lock()?;
        let tree = repo.find_tree(parse_oid(tree)?)?;

        let mut entries = Vec::with_capacity(tree.len());
        for entry in tree.iter() {
            let Some(name) = entry.name() else {
                continue;
            };
            entries.push(TreeEntry {
                name: name.to_string(),
                mode: entry_mode(entry.filemode()),
                object: entry.id().to_string(),
            });
        }
        Ok(entries)
    }

    async fn blob_info(&self, blob: &ObjectId) -> Result<BlobInfo> {
        let repo = self.lock()?;
        let blob = repo.find_blob(parse_oid(blob)?)?;
        Ok(BlobInfo {
            size: blob.size() as u64,
            binary: blob.is_binary(),
        })
    }

    async fn read_blob(&self, blob: &ObjectId) -> Result<Vec<u8>> {
        let repo = self.lock()?;
        let blob = repo.find_blob(parse_oid(blob)?)?;
        Ok(blob.content().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::is_zero_id;
    use git2::Signature;
    use tempfile::TempDir;

    /// Build a scratch repository with:
    /// - `refs/heads/main`: README + scripts/run.sh (executable)
    /// - `refs/heads/dev/feature-x`: README only
    fn setup_repo() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let readme = repo.blob(b"# hello\n").unwrap();
        let script = repo.blob(b"#!/bin/sh\necho hi\n").unwrap();

        let mut scripts = repo.treebuilder(None).unwrap();
        scripts.insert("run.sh", script, 0o100755).unwrap();
        let scripts_id = scripts.write().unwrap();

        let mut root = repo.treebuilder(None).unwrap();
        root.insert("README", readme, 0o100644).unwrap();
        root.insert("scripts", scripts_id, 0o040000).unwrap();
        let root_id = root.write().unwrap();

        let tree = repo.find_tree(root_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.commit(Some("refs/heads/main"), &sig, &sig, "init", &tree, &[])
            .unwrap();

        let mut feature = repo.treebuilder(None).unwrap();
        feature.insert("README", readme, 0o100644).unwrap();
        let feature_tree = repo.find_tree(feature.write().unwrap()).unwrap();
        let feature_commit = repo
            .commit(None, &sig, &sig, "feature", &feature_tree, &[])
            .unwrap();
        repo.reference("refs/heads/dev/feature-x", feature_commit, false, "test")
            .unwrap();

        dir
    }

    #[tokio::test]
    async fn test_list_references() {
        let dir = setup_repo();
        let backend = GitBackend::open(dir.path()).unwrap();

        let refs = backend.list_references().await.unwrap();
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"refs/heads/main"));
        assert!(names.contains(&"refs/heads/dev/feature-x"));
        for r in &refs {
            assert!(!is_zero_id(&r.target));
        }
    }

    #[tokio::test]
    async fn test_commit_tree_and_entries() {
        let dir = setup_repo();
        let backend = GitBackend::open(dir.path()).unwrap();

        let refs = backend.list_references().await.unwrap();
        let main = refs.iter().find(|r| r.name == "refs/heads/main").unwrap();

        let tree = backend.commit_tree(&main.target).await.unwrap();
        let entries = backend.tree_entries(&tree).await.unwrap();
        assert_eq!(entries.len(), 2);

        let readme = entries.iter().find(|e| e.name == "README").unwrap();
        assert_eq!(readme.mode, EntryMode::Regular);

        let scripts = entries.iter().find(|e| e.name == "scripts").unwrap();
        assert_eq!(scripts.mode, EntryMode::Directory);

        let nested = backend.tree_entries(&scripts.object).await.unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].name, "run.sh");
        assert_eq!(nested[0].mode, EntryMode::Executable);
    }

    #[tokio::test]
    async fn test_blob_roundtrip() {
        let dir = setup_repo();
        let backend = GitBackend::open(dir.path()).unwrap();

        let refs = backend.list_references().await.unwrap();
        let main = refs.iter().find(|r| r.name == "refs/heads/main").unwrap();
        let tree = backend.commit_tree(&main.target).await.unwrap();
        let entries = backend.tree_entries(&tree).await.unwrap();
        let readme = entries.iter().find(|e| e.name == "README").unwrap();

        let info = backend.blob_info(&readme.object).await.unwrap();
        assert_eq!(info.size, 8);
        assert!(!info.binary);

        let data = backend.read_blob(&readme.object).await.unwrap();
        assert_eq!(data, b"# hello\n");
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let dir = setup_repo();
        let backend = GitBackend::open(dir.path()).unwrap();

        let missing = "d95f3ad14dee633a758d2e331151e950dd13e4ed".to_string();
        let result = backend.commit_tree(&missing).await;
        assert!(matches!(result, Err(BackendError::NotFound)));
    }

    #[tokio::test]
    async fn test_open_missing_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = GitBackend::open(dir.path().join("nope"));
        assert!(result.is_err());
    }
}
