//! Reflection exports
//!
//! One submodule per Slang reflection class. Most exports are a single
//! `spReflection*` call; the ones Slang implements as inline C++ helpers
//! (`unwrapArray`, `getTotalArrayElementCount`, anything reached through
//! `getVariable()` or `getType()`) compose the same calls in the same order.
//!
//! Without a loaded library every export returns zero, `false` or null.

use crate::handle::Handle;

/// The value a reflection export returns when Slang is not loaded.
pub(crate) trait Fallback {
    fn fallback() -> Self;
}

macro_rules! zero_fallback {
    ($($ty:ty),*) => {
        $(impl Fallback for $ty {
            #[inline]
            fn fallback() -> Self {
                0 as $ty
            }
        })*
    };
}

zero_fallback!(u32, i32, u64, i64, usize, f32);

impl Fallback for bool {
    fn fallback() -> Self {
        false
    }
}

impl Fallback for () {
    fn fallback() -> Self {}
}

impl<T> Fallback for *const T {
    fn fallback() -> Self {
        std::ptr::null()
    }
}

impl<T> Fallback for Handle<T> {
    fn fallback() -> Self {
        Handle::null()
    }
}

/// Runs `$body` with the loaded import table bound to `$api`, converting the
/// result into the export's return type.
macro_rules! forward {
    ($api:ident => $body:expr) => {
        match $crate::loader::api() {
            Some($api) => ($body).into(),
            None => $crate::reflection::Fallback::fallback(),
        }
    };
}

mod attribute;
mod entry_point;
mod function;
mod program_layout;
mod type_layout;
mod type_parameter;
mod type_reflection;
mod variable;
mod variable_layout;

pub use attribute::*;
pub use entry_point::*;
pub use function::*;
pub use program_layout::*;
pub use type_layout::*;
pub use type_parameter::*;
pub use type_reflection::*;
pub use variable::*;
pub use variable_layout::*;
