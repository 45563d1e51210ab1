//! Flat C ABI over the Slang shader compiler
//!
//! Slang exposes its compilation model (global sessions, sessions, modules,
//! entry points, component types, blobs) as C++ virtual interfaces and its
//! reflection model as C++ classes backed by `spReflection*` C functions.
//! This crate re-exports both as plain `extern "C"` functions over opaque
//! handles so that any language with a C FFI can drive the compiler.
//!
//! Every export reinterprets its handles as the wrapped library's objects,
//! forwards to the one corresponding Slang operation and reinterprets the
//! result back. Nothing is validated, cached or copied. The Slang shared
//! library is located and loaded on first use (see [`loader`]).
//! It must be Slang [`loader::MIN_SLANG_VERSION`] or newer; an older library
//! is rejected and the exports behave as if none were installed.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::useless_conversion)]
#![allow(unsafe_op_in_unsafe_fn)]

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug-logs")]
        log::trace!($($arg)*)
    };
}

macro_rules! debug_log_return {
    ($tag:literal, $fmt:literal, $expr:expr) => {{
        #[cfg(feature = "debug-logs")]
        {
            let result = $expr;
            log::trace!(concat!($tag, " -> ", $fmt), result);
            result
        }
        #[cfg(not(feature = "debug-logs"))]
        {
            $expr
        }
    }};
}

pub mod com;
pub mod handle;
pub mod loader;
pub mod reflection;
mod session;
pub mod types;

pub use handle::Handle;
pub use loader::{MIN_SLANG_VERSION, is_available, library};
pub use reflection::*;
pub use session::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlangcError {
    #[error("Slang library not found (tried: {})", .tried.join(", "))]
    LibraryNotFound { tried: Vec<String> },
    #[error("Failed to load {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: libloading::Error,
    },
    #[error("Symbol not found: {name} (Slang {} or newer is required)", crate::loader::MIN_SLANG_VERSION)]
    SymbolNotFound {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },
}

pub type Result<T> = std::result::Result<T, SlangcError>;
