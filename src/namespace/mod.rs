//! Virtual namespace over a repository's references and content trees.
//!
//! The namespace has two layers. The upper layer is built once from the
//! repository's reference list: slash-delimited reference names form a
//! nested directory shape, so `refs/heads/feature/login` appears at that
//! path. The lower layer projects the content tree of the commit each
//! reference points to, expanded lazily as paths are resolved. Nothing is
//! cached: every traversal re-derives structure from the backend, so the
//! namespace always reflects what the backend currently serves.

mod error;
mod node;
mod ref_tree;
mod resolve;
mod tree_node;

pub use error::{FsError, Result, UnexpectedError};
pub use node::{DirNode, FileNode, Node};
pub use ref_tree::{build_root, RefTreeNode};
pub use resolve::resolve;
pub use tree_node::TreeNode;
