//! gitfs-rs - Browse a git repository's full history as a read-only
//! filesystem namespace.
//!
//! Every reference in a repository appears as a nested directory path (a
//! branch `refs/heads/feature/login` becomes the directory
//! `refs/heads/feature/login/`), and the content tree of the commit each
//! reference points to is projected lazily beneath it. The namespace is
//! built once per [`viewfs::ViewFs`] and is permanently read-only.

pub mod backend;
pub mod cli;
pub mod logging;
pub mod namespace;
pub mod viewfs;

pub use backend::{GitBackend, MemoryBackend, RepoBackend};
pub use namespace::{FsError, Node};
pub use viewfs::{Attributes, ListEntry, Status, ViewFs};
