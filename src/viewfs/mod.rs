//! Read-only filesystem view over a repository backend.
//!
//! [`ViewFs`] is the boundary a virtual-filesystem host talks to: three
//! idempotent, side-effect-free operations over slash-delimited paths,
//! answering with attribute, listing and content values or with a
//! [`Status`] code.

mod types;
mod view_fs;

pub use types::{
    Attributes, EntryKind, ListEntry, Status, DIR_PERMISSIONS, EXECUTABLE_PERMISSIONS,
    FILE_PERMISSIONS,
};
pub use view_fs::{Result, ViewFs};
