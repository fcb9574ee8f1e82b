use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to any other error
    /// category in this enum.
    Internal,

    /// The user provided invalid input or performed an action that is
    /// unsupported or impossible to complete.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input length is not a multiple of the block size (4 bytes or 5 characters).
    InvalidLength,
    /// Text contained a character outside the Z85 alphabet.
    InvalidCharacter,
    /// Hexadecimal input could not be parsed into bytes.
    HexParse,
    /// No input could be obtained from arguments or standard input.
    InputUnavailable,
    /// The command line was used incorrectly.
    Usage,
    /// Interaction with stdin/stdout or other I/O failed.
    Io,
}

impl ErrorKind {
    /// Process exit status used by the command-line tool for this kind.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::InvalidLength => 3,
            ErrorKind::InvalidCharacter => 4,
            ErrorKind::HexParse => 5,
            ErrorKind::InputUnavailable => 6,
            ErrorKind::Io => 7,
        }
    }
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct Z85Error {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl Z85Error {
    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }

    /// Nonzero process exit status for this error. Errors without a kind exit with 1.
    pub fn exit_code(&self) -> i32 {
        self.kind.map_or(1, ErrorKind::exit_code)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Z85Error>;
