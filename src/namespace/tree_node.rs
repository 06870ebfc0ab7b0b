//! Content tree projection.
//!
//! Wraps one content-tree handle and lazily expands its entries into
//! directory and file nodes. Symlink, submodule and unrecognized entries
//! have no counterpart in the projected namespace and are skipped with a
//! diagnostic; a backend failure fails the whole expansion, never leaving
//! a partial result.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::backend::{EntryMode, ObjectId, RepoBackend};

use super::error::Result;
use super::node::{DirNode, FileNode, Node};

/// A directory node projecting one content tree.
#[derive(Clone)]
pub struct TreeNode {
    backend: Arc<dyn RepoBackend>,
    tree: ObjectId,
}

impl TreeNode {
    pub(super) fn new(backend: Arc<dyn RepoBackend>, tree: ObjectId) -> Self {
        Self { backend, tree }
    }

    /// Object ID of the projected tree.
    pub fn tree_id(&self) -> &ObjectId {
        &self.tree
    }

    pub(super) async fn children(&self) -> Result<BTreeMap<String, Node>> {
        let entries = self.backend.tree_entries(&self.tree).await?;

        let mut children = BTreeMap::new();
        for entry in entries {
            match entry.mode {
                EntryMode::Directory => {
                    children.insert(
                        entry.name,
                        Node::Dir(DirNode::Tree(TreeNode::new(
                            Arc::clone(&self.backend),
                            entry.object,
                        ))),
                    );
                }
                EntryMode::Regular | EntryMode::Executable => {
                    let info = self.backend.blob_info(&entry.object).await?;
                    let executable = entry.mode == EntryMode::Executable;
                    children.insert(
                        entry.name,
                        Node::File(FileNode::new(
                            Arc::clone(&self.backend),
                            entry.object,
                            info.size,
                            executable,
                            info.binary,
                        )),
                    );
                }
                EntryMode::Symlink | EntryMode::Submodule | EntryMode::Other => {
                    debug!(name = %entry.name, mode = ?entry.mode, "skipping unsupported tree entry");
                }
            }
        }
        Ok(children)
    }
}
