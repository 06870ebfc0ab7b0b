use async_trait::async_trait;

/// Object ID is a hash digest represented as a lowercase hexadecimal string.
pub type ObjectId = String;

/// The all-zero object ID reported as the target of references that do not
/// point at a resolvable object (symbolic references, unborn branches).
pub const ZERO_OBJECT_ID: &str = "0000000000000000000000000000000000000000";

/// Whether `id` is the zero sentinel (or empty, which denotes the same).
pub fn is_zero_id(id: &str) -> bool {
    id.is_empty() || id.bytes().all(|b| b == b'0')
}

/// A named reference pointing at a commit (or annotated tag) object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Full slash-delimited reference name, e.g. `refs/heads/main`.
    pub name: String,
    /// Object ID the reference points to; the zero sentinel when the
    /// reference resolves to no object.
    pub target: ObjectId,
}

/// Entry-type tag carried by a content-tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// A nested tree.
    Directory,
    /// A regular file blob.
    Regular,
    /// An executable file blob.
    Executable,
    /// A symbolic link.
    Symlink,
    /// A submodule (commit reference inside a tree).
    Submodule,
    /// Any mode not covered above.
    Other,
}

/// A single entry in a content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Entry name, unique within its tree.
    pub name: String,
    /// Entry-type tag.
    pub mode: EntryMode,
    /// Object ID of the nested tree or blob.
    pub object: ObjectId,
}

/// Metadata about a blob object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobInfo {
    /// Blob length in bytes.
    pub size: u64,
    /// Whether the blob content looks binary rather than text.
    pub binary: bool,
}

/// Error type for backend operations.
#[derive(Debug)]
pub enum BackendError {
    /// The object was not found.
    NotFound,
    /// An I/O error occurred.
    Io(std::io::Error),
    /// A custom error message.
    Other(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NotFound => write!(f, "not found"),
            BackendError::Io(e) => write!(f, "I/O error: {}", e),
            BackendError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(e: std::io::Error) -> Self {
        BackendError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Read-only view of a version-control object store.
///
/// Implementations must be safe for concurrent reads; the namespace engine
/// shares one backend across all in-flight resolutions without additional
/// locking.
#[async_trait]
pub trait RepoBackend: Send + Sync {
    /// Enumerate all references in the repository.
    async fn list_references(&self) -> Result<Vec<Reference>>;

    /// Resolve a reference target to the content tree it denotes.
    ///
    /// Accepts commit IDs and annotated tag IDs, peeling either to its
    /// root tree.
    async fn commit_tree(&self, target: &ObjectId) -> Result<ObjectId>;

    /// Enumerate the entries of a content tree.
    async fn tree_entries(&self, tree: &ObjectId) -> Result<Vec<TreeEntry>>;

    /// Get the size and binary/text classification of a blob.
    async fn blob_info(&self, blob: &ObjectId) -> Result<BlobInfo>;

    /// Read a blob's full contents.
    async fn read_blob(&self, blob: &ObjectId) -> Result<Vec<u8>>;
}
