//! Attribute, listing and status types exposed by the filesystem view.

use serde::Serialize;

/// Directory permission bits: read and traverse, never write.
pub const DIR_PERMISSIONS: u32 = 0o555;

/// File permission bits: read-only.
pub const FILE_PERMISSIONS: u32 = 0o444;

/// Execute bits added for executable files.
pub const EXECUTABLE_PERMISSIONS: u32 = 0o111;

/// Kind of a namespace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// Attributes of a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attributes {
    /// Entry kind.
    pub kind: EntryKind,
    /// Unix-style permission bits.
    pub permissions: u32,
    /// File size in bytes; `None` for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// One entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Entry name.
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Unix-style permission bits.
    pub permissions: u32,
    /// File size in bytes; `None` for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Outward status codes for view operations.
///
/// The first three mirror expected resolution failures one-to-one.
/// `IoFailure` is the single status every unexpected fault collapses into
/// after being logged; absence and fault are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The path does not exist.
    NotFound,
    /// The path (or a non-final segment of it) is not a directory.
    NotADirectory,
    /// The path is not a file.
    NotAFile,
    /// An unexpected backend or namespace fault.
    IoFailure,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotFound => write!(f, "not found"),
            Status::NotADirectory => write!(f, "not a directory"),
            Status::NotAFile => write!(f, "not a file"),
            Status::IoFailure => write!(f, "I/O failure"),
        }
    }
}

impl std::error::Error for Status {}
