use std::sync::Arc;

use tracing::debug;

use crate::backend::RepoBackend;
use crate::namespace::{build_root, resolve, FsError, Node};

use super::types::{
    Attributes, EntryKind, ListEntry, Status, DIR_PERMISSIONS, EXECUTABLE_PERMISSIONS,
    FILE_PERMISSIONS,
};

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, Status>;

/// A read-only filesystem view of a repository's references and content
/// trees.
///
/// The root namespace is built once at construction from the backend's
/// reference list and never rebuilt; the view is immutable afterwards and
/// safe to share across concurrent callers without locking. Content trees
/// are projected lazily per operation.
pub struct ViewFs {
    root: Node,
}

impl ViewFs {
    /// Build the view from the backend's current reference list.
    ///
    /// Fails if reference enumeration fails or a reference name is
    /// malformed.
    pub async fn new(backend: Arc<dyn RepoBackend>) -> std::result::Result<Self, FsError> {
        let root = build_root(backend).await?;
        Ok(Self { root })
    }

    /// Root node of the namespace.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the attributes of the node at `path`.
    pub async fn get_attributes(&self, path: &str) -> Result<Attributes> {
        let node = resolve(&self.root, path).await.map_err(status)?;
        Ok(match node {
            Node::Dir(_) => Attributes {
                kind: EntryKind::Dir,
                permissions: DIR_PERMISSIONS,
                size: None,
            },
            Node::File(file) => Attributes {
                kind: EntryKind::File,
                permissions: file_permissions(file.executable()),
                size: Some(file.size()),
            },
        })
    }

    /// List the directory at `path`.
    ///
    /// One entry per supported child; listing order carries no guarantee.
    pub async fn list_directory(&self, path: &str) -> Result<Vec<ListEntry>> {
        let node = resolve(&self.root, path).await.map_err(status)?;
        let dir = match node {
            Node::Dir(dir) => dir,
            Node::File(_) => return Err(Status::NotADirectory),
        };
        let children = dir.children().await.map_err(status)?;

        Ok(children
            .into_iter()
            .map(|(name, child)| match child {
                Node::Dir(_) => ListEntry {
                    name,
                    kind: EntryKind::Dir,
                    permissions: DIR_PERMISSIONS,
                    size: None,
                },
                Node::File(file) => ListEntry {
                    name,
                    kind: EntryKind::File,
                    permissions: file_permissions(file.executable()),
                    size: Some(file.size()),
                },
            })
            .collect())
    }

    /// Read the full contents of the file at `path`.
    pub async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let node = resolve(&self.root, path).await.map_err(status)?;
        let file = match node {
            Node::File(file) => file,
            Node::Dir(_) => return Err(Status::NotAFile),
        };
        file.read().await.map_err(status)
    }

    /// Read up to `size` bytes starting at `offset` from the file at
    /// `path`.
    ///
    /// The whole file is read from the backend and sliced; requests
    /// reaching past the end of the file yield a short or empty result.
    pub async fn read_file_at(&self, path: &str, offset: u64, size: usize) -> Result<Vec<u8>> {
        let data = self.read_file(path).await?;
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
        let end = start.saturating_add(size).min(data.len());
        Ok(data[start..end].to_vec())
    }
}

/// Translate an internal error into an outward status.
///
/// Expected errors map one-to-one without logging; unexpected causes are
/// logged here and collapse into the generic I/O failure status.
fn status(err: FsError) -> Status {
    match err {
        FsError::NotFound => Status::NotFound,
        FsError::NotADirectory => Status::NotADirectory,
        FsError::NotAFile => Status::NotAFile,
        FsError::Unexpected(cause) => {
            debug!(error = %cause, "unexpected filesystem error");
            Status::IoFailure
        }
    }
}

fn file_permissions(executable: bool) -> u32 {
    if executable {
        FILE_PERMISSIONS | EXECUTABLE_PERMISSIONS
    } else {
        FILE_PERMISSIONS
    }
}
