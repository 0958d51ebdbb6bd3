use std::io;

use thiserror::Error;

/// Broad category of a [`PaintFileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The first line is not the file-start token.
    HeaderMismatch,
    /// Any other grammar violation: unexpected token, out-of-order or
    /// duplicate field, unterminated block, trailing content.
    Structure,
    /// The underlying reader or writer failed.
    Io,
}

/// Failure while reading or writing a paint save file.
///
/// Parse failures carry the 1-based number of the line being processed when
/// the problem was detected.
#[derive(Debug, Error)]
pub enum PaintFileError {
    #[error("line {line}: {message}")]
    HeaderMismatch { line: usize, message: String },

    #[error("line {line}: {message}")]
    Structure { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PaintFileError {
    pub(crate) fn header(line: usize, message: impl Into<String>) -> Self {
        PaintFileError::HeaderMismatch { line, message: message.into() }
    }

    pub(crate) fn structure(line: usize, message: impl Into<String>) -> Self {
        PaintFileError::Structure { line, message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PaintFileError::HeaderMismatch { .. } => ErrorKind::HeaderMismatch,
            PaintFileError::Structure { .. } => ErrorKind::Structure,
            PaintFileError::Io(_) => ErrorKind::Io,
        }
    }

    /// Line number of a parse failure; `None` for I/O errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            PaintFileError::HeaderMismatch { line, .. }
            | PaintFileError::Structure { line, .. } => Some(*line),
            PaintFileError::Io(_) => None,
        }
    }
}
