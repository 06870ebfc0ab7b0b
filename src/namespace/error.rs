use thiserror::Error;

use crate::backend::BackendError;

/// Error type for namespace construction and resolution.
///
/// The expected variants are normal consequences of a bad path or absent
/// content; they carry no cause and are never logged. [`FsError::Unexpected`]
/// wraps an underlying fault and is surfaced to callers unchanged, to be
/// reported as a generic I/O failure at the protocol boundary rather than
/// masked as absence.
#[derive(Debug, Error)]
pub enum FsError {
    /// The path does not exist in the namespace.
    #[error("not found")]
    NotFound,

    /// A non-final path segment resolved to a file.
    #[error("not a directory")]
    NotADirectory,

    /// The path resolved to a directory where a file was required.
    #[error("not a file")]
    NotAFile,

    /// An unexpected failure carrying its underlying cause.
    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
}

impl FsError {
    /// True for errors that are normal consequences of a bad path or
    /// absent content, false for faults.
    pub fn is_expected(&self) -> bool {
        !matches!(self, FsError::Unexpected(_))
    }
}

/// Causes of unexpected namespace failures.
#[derive(Debug, Error)]
pub enum UnexpectedError {
    /// The repository backend failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// A reference name produced no usable path segments.
    #[error("malformed reference name: {0:?}")]
    MalformedReferenceName(String),

    /// A path segment is used both by a terminal reference and as a prefix
    /// of longer reference names.
    #[error("conflicting reference name: {0}")]
    ReferenceNameConflict(String),
}

impl From<BackendError> for FsError {
    fn from(e: BackendError) -> Self {
        FsError::Unexpected(UnexpectedError::Backend(e))
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_classification() {
        assert!(FsError::NotFound.is_expected());
        assert!(FsError::NotADirectory.is_expected());
        assert!(FsError::NotAFile.is_expected());

        let err: FsError = BackendError::NotFound.into();
        assert!(!err.is_expected());

        let err: FsError = UnexpectedError::ReferenceNameConflict("feature".to_string()).into();
        assert!(!err.is_expected());
    }
}
