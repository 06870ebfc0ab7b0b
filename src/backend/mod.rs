//! Repository backends.
//!
//! [`RepoBackend`] is the read capability set the namespace engine
//! consumes: reference enumeration, commit-to-tree resolution, tree
//! enumeration and blob access. [`GitBackend`] implements it over a local
//! git repository; [`MemoryBackend`] is an in-memory implementation for
//! tests.

mod git_backend;
mod memory_backend;
mod repo_backend;

pub use git_backend::GitBackend;
pub use memory_backend::MemoryBackend;
pub use repo_backend::{
    is_zero_id, BackendError, BlobInfo, EntryMode, ObjectId, Reference, RepoBackend, Result,
    TreeEntry, ZERO_OBJECT_ID,
};
