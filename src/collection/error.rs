use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a reading could not be taken. These never leave the collection module;
/// they are only logged before being folded into an absent reading.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The source file could not be read.
    #[error("unable to read '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    /// The source was read, but its contents did not make sense.
    #[error("malformed contents, {0}")]
    Malformed(String),

    /// The platform does not provide this data.
    #[error("not supported on this platform")]
    Unsupported,
}

impl CollectionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed<R: Into<String>>(reason: R) -> Self {
        Self::Malformed(reason.into())
    }
}

/// A [`Result`] with the error type being a [`CollectionError`].
pub(crate) type CollectionResult<T> = Result<T, CollectionError>;
