//! Node types for the virtual namespace.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::backend::{ObjectId, RepoBackend};

use super::error::Result;
use super::ref_tree::RefTreeNode;
use super::tree_node::TreeNode;

/// A node in the virtual namespace: a directory or a file.
///
/// The set of kinds is closed; every consumption site matches
/// exhaustively, so adding a kind is a compile-time-checked change.
#[derive(Clone)]
pub enum Node {
    /// A directory.
    Dir(DirNode),
    /// A regular or executable file.
    File(FileNode),
}

/// A directory node.
#[derive(Clone)]
pub enum DirNode {
    /// Part of the reference namespace built from reference names.
    Refs(RefTreeNode),
    /// A projected content tree.
    Tree(TreeNode),
}

impl DirNode {
    /// Enumerate this directory's children.
    ///
    /// The mapping is recomputed from the backend on every call; nothing
    /// is cached across calls.
    pub async fn children(&self) -> Result<BTreeMap<String, Node>> {
        match self {
            DirNode::Refs(node) => node.children().await,
            DirNode::Tree(node) => node.children().await,
        }
    }
}

/// A file node wrapping one blob.
#[derive(Clone)]
pub struct FileNode {
    backend: Arc<dyn RepoBackend>,
    blob: ObjectId,
    size: u64,
    executable: bool,
    binary: bool,
}

impl FileNode {
    pub(super) fn new(
        backend: Arc<dyn RepoBackend>,
        blob: ObjectId,
        size: u64,
        executable: bool,
        binary: bool,
    ) -> Self {
        Self {
            backend,
            blob,
            size,
            executable,
            binary,
        }
    }

    /// Object ID of the wrapped blob.
    pub fn blob_id(&self) -> &ObjectId {
        &self.blob
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the source mode carries the executable bit.
    pub fn executable(&self) -> bool {
        self.executable
    }

    /// Whether the content looks binary rather than text.
    pub fn binary(&self) -> bool {
        self.binary
    }

    /// Read the file's full contents from the backend.
    pub async fn read(&self) -> Result<Vec<u8>> {
        Ok(self.backend.read_blob(&self.blob).await?)
    }
}
