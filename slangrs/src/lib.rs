//! Safe, ergonomic Rust API for the Slang shader compiler
//!
//! This crate layers RAII wrappers, builders, iterators and Rust enums over
//! the flat C ABI exported by `slangc`.
//!
//! # Example
//!
//! ```no_run
//! use slangrs::{compile, CompileTarget};
//!
//! let source = r#"
//!     RWStructuredBuffer<float> output;
//!
//!     [shader("compute")]
//!     [numthreads(64, 1, 1)]
//!     void main(uint3 id : SV_DispatchThreadID) {
//!         output[id.x] = float(id.x);
//!     }
//! "#;
//!
//! let spirv = compile(source, "main", CompileTarget::Spirv).unwrap();
//! let words = spirv.to_words().unwrap();
//! assert_eq!(words[0], 0x0723_0203);
//! ```

mod blob;
mod builder;
mod compile;
mod error;
mod flags;
pub mod reflect;
mod session;
mod target;

pub use blob::Blob;
pub use builder::{Define, FloatingPointMode, LineDirectiveMode, MatrixLayout, SessionBuilder, TargetBuilder};
pub use compile::{CompileBuilder, CompileResult, compile};
pub use error::{Error, Result, Status};
pub use flags::TargetFlags;
pub use reflect::ProgramLayout;
pub use session::{Component, ComponentType, EntryPoint, GlobalSession, Metadata, Module, Session};
pub use target::CompileTarget;

use std::ffi::CString;

/// Copies `value` into a NUL-terminated string.
pub(crate) fn to_cstring(value: &str, what: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::InvalidParameter(format!("{} contains a null byte", what)))
}

/// Returns true if the Slang shared library can be loaded.
pub fn is_available() -> bool {
    slangc::is_available()
}
