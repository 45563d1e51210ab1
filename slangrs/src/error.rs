//! Error types for slangrs operations

use std::fmt;
use thiserror::Error;

/// `SlangResult` status codes
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub i32);

impl Status {
    /// Success
    pub const OK: Status = Status(slangc::SLANG_OK);
    /// Generic failure
    pub const FAIL: Status = Status(slangc::SLANG_FAIL);
    /// Invalid argument
    pub const INVALID_ARG: Status = Status(slangc::SLANG_E_INVALID_ARG);
    /// Item not found
    pub const NOT_FOUND: Status = Status(slangc::SLANG_E_NOT_FOUND);
    /// The Slang library could not be loaded
    pub const NOT_AVAILABLE: Status = Status(slangc::SLANG_E_NOT_AVAILABLE);

    /// Returns true if the result indicates success
    #[inline]
    pub fn is_success(&self) -> bool {
        slangc::succeeded(self.0)
    }

    /// Returns true if the result indicates an error
    #[inline]
    pub fn is_error(&self) -> bool {
        slangc::failed(self.0)
    }

    /// Returns the raw `SlangResult` value
    #[inline]
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Facility part of a failing status
    #[inline]
    pub fn facility(&self) -> i32 {
        (self.0 >> 16) & 0x7fff
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status(0x{:08x})", self.0 as u32)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0 as u32)
    }
}

impl From<i32> for Status {
    fn from(result: i32) -> Self {
        Status(result)
    }
}

/// Error type for slangrs operations
#[derive(Error, Debug)]
pub enum Error {
    /// The Slang shared library could not be loaded
    #[error("Slang is not available: {0}")]
    Unavailable(&'static slangc::SlangcError),

    /// Global session creation failed
    #[error("Global session creation failed (status: {status})")]
    GlobalSession {
        /// The status code
        status: Status,
    },

    /// Session creation failed
    #[error("Session creation failed (status: {status})")]
    Session {
        /// The status code
        status: Status,
    },

    /// Loading a module from source failed
    #[error("Compilation failed: {message}")]
    Compilation {
        /// The status code
        status: Status,
        /// Diagnostics from the compiler
        message: String,
    },

    /// No entry point with the requested name
    #[error("Entry point not found: {name} (status: {status})")]
    EntryPointNotFound {
        /// The requested name
        name: String,
        /// The status code
        status: Status,
    },

    /// Composing components failed
    #[error("Composition failed: {message}")]
    Composition {
        /// The status code
        status: Status,
        /// Diagnostics from the compiler
        message: String,
    },

    /// Linking failed
    #[error("Linking failed: {message}")]
    Link {
        /// The status code
        status: Status,
        /// Diagnostics from the compiler
        message: String,
    },

    /// Target code generation failed
    #[error("Code generation failed: {message}")]
    CodeGeneration {
        /// The status code
        status: Status,
        /// Diagnostics from the compiler
        message: String,
    },

    /// A reflection query failed
    #[error("Reflection failed: {message}")]
    Reflection {
        /// The status code
        status: Status,
        /// Diagnostics from the compiler, if any
        message: String,
    },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// UTF-8 encoding error
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// The status code reported by Slang, if this error carries one
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Unavailable(_) => Some(Status::NOT_AVAILABLE),
            Error::GlobalSession { status }
            | Error::Session { status }
            | Error::Compilation { status, .. }
            | Error::EntryPointNotFound { status, .. }
            | Error::Composition { status, .. }
            | Error::Link { status, .. }
            | Error::CodeGeneration { status, .. }
            | Error::Reflection { status, .. } => Some(*status),
            Error::InvalidParameter(_) | Error::Utf8(_) => None,
        }
    }
}

/// Result type for slangrs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Builds a diagnostics message, falling back to the status when Slang gave none.
pub(crate) fn message(diagnostics: Option<String>, status: Status) -> String {
    diagnostics
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("Unknown error (status: {})", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_classification() {
        assert!(Status::OK.is_success());
        assert!(!Status::OK.is_error());
        assert!(Status::FAIL.is_error());
        assert!(Status::NOT_AVAILABLE.is_error());
        assert_eq!(Status::NOT_AVAILABLE.facility(), slangc::SLANG_FACILITY_CORE);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::FAIL.to_string(), "0x80004005");
        assert_eq!(format!("{:?}", Status::OK), "Status(0x00000000)");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            message(Some("  \n".to_string()), Status::FAIL),
            "Unknown error (status: 0x80004005)"
        );
        assert_eq!(message(Some("bad".to_string()), Status::FAIL), "bad");

        let err = Error::Link {
            status: Status::FAIL,
            message: "unresolved".to_string(),
        };
        assert_eq!(err.to_string(), "Linking failed: unresolved");
        assert_eq!(err.status(), Some(Status::FAIL));
    }
}
