//! Reference namespace construction.
//!
//! Groups slash-delimited reference names into a nested directory shape.
//! A segment may resolve to a terminal reference (whose content tree is
//! projected beneath it) or to a group of longer names, never both: a
//! clash is a construction fault for that directory, not a case to
//! disambiguate.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::backend::{is_zero_id, ObjectId, RepoBackend};

use super::error::{Result, UnexpectedError};
use super::node::{DirNode, Node};
use super::tree_node::TreeNode;

/// Build the root namespace node from the backend's reference list.
///
/// References whose target is the zero sentinel (symbolic references,
/// unborn branches) denote no resolvable content and are skipped. A
/// reference with an empty name fails the build.
pub async fn build_root(backend: Arc<dyn RepoBackend>) -> Result<Node> {
    let references = backend.list_references().await?;

    let mut root = RefTreeNode {
        backend: Arc::clone(&backend),
        entries: Vec::new(),
    };
    for reference in references {
        if reference.name.is_empty() {
            return Err(UnexpectedError::MalformedReferenceName(reference.name).into());
        }
        if is_zero_id(&reference.target) {
            debug!(name = %reference.name, "skipping unresolvable reference");
            continue;
        }
        let name_parts = reference.name.split('/').map(str::to_string).collect();
        root.entries.push(RefTreeEntry {
            name: reference.name,
            name_parts,
            target: reference.target,
        });
    }

    Ok(Node::Dir(DirNode::Refs(root)))
}

/// One reference as seen from a node: its full name, the segments
/// remaining below the node, and its target.
#[derive(Clone)]
struct RefTreeEntry {
    name: String,
    name_parts: Vec<String>,
    target: ObjectId,
}

/// An interior node of the reference namespace, holding the references
/// that share this node's path prefix.
#[derive(Clone)]
pub struct RefTreeNode {
    backend: Arc<dyn RepoBackend>,
    entries: Vec<RefTreeEntry>,
}

impl RefTreeNode {
    pub(super) async fn children(&self) -> Result<BTreeMap<String, Node>> {
        let mut children: BTreeMap<String, Node> = BTreeMap::new();

        for entry in &self.entries {
            match entry.name_parts.len() {
                0 => {
                    return Err(
                        UnexpectedError::MalformedReferenceName(entry.name.clone()).into(),
                    );
                }

                1 => {
                    let segment = &entry.name_parts[0];
                    if children.contains_key(segment) {
                        return Err(
                            UnexpectedError::ReferenceNameConflict(entry.name.clone()).into()
                        );
                    }
                    let tree = self.backend.commit_tree(&entry.target).await?;
                    children.insert(
                        segment.clone(),
                        Node::Dir(DirNode::Tree(TreeNode::new(
                            Arc::clone(&self.backend),
                            tree,
                        ))),
                    );
                }

                _ => {
                    let segment = entry.name_parts[0].clone();
                    let child = children.entry(segment).or_insert_with(|| {
                        Node::Dir(DirNode::Refs(RefTreeNode {
                            backend: Arc::clone(&self.backend),
                            entries: Vec::new(),
                        }))
                    });
                    match child {
                        Node::Dir(DirNode::Refs(group)) => {
                            group.entries.push(RefTreeEntry {
                                name: entry.name.clone(),
                                name_parts: entry.name_parts[1..].to_vec(),
                                target: entry.target.clone(),
                            });
                        }
                        _ => {
                            return Err(UnexpectedError::ReferenceNameConflict(
                                entry.name.clone(),
                            )
                            .into());
                        }
                    }
                }
            }
        }

        Ok(children)
    }
}
