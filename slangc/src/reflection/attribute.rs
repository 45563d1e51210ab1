//! User attributes, e.g. `[MyAttr(1, "x")]` on a declaration

use std::ffi::c_char;

use crate::handle::Handle;
use crate::loader;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getName(attribute: Handle<Attribute>) -> *const c_char {
    forward!(api => (api.spReflectionUserAttribute_GetName)(attribute.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getArgumentCount(attribute: Handle<Attribute>) -> u32 {
    forward!(api => (api.spReflectionUserAttribute_GetArgumentCount)(attribute.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getArgumentType(
    attribute: Handle<Attribute>,
    index: u32,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionUserAttribute_GetArgumentType)(attribute.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getArgumentValueInt(
    attribute: Handle<Attribute>,
    index: u32,
    value: *mut i32,
) -> SlangResult {
    match loader::api() {
        Some(api) => (api.spReflectionUserAttribute_GetArgumentValueInt)(attribute.as_raw(), index, value),
        None => SLANG_E_NOT_AVAILABLE,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getArgumentValueFloat(
    attribute: Handle<Attribute>,
    index: u32,
    value: *mut f32,
) -> SlangResult {
    match loader::api() {
        Some(api) => (api.spReflectionUserAttribute_GetArgumentValueFloat)(attribute.as_raw(), index, value),
        None => SLANG_E_NOT_AVAILABLE,
    }
}

/// String argument; exactly `*outSize` bytes are valid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AttributeReflection_getArgumentValueString(
    attribute: Handle<Attribute>,
    index: u32,
    outSize: *mut usize,
) -> *const c_char {
    forward!(api => (api.spReflectionUserAttribute_GetArgumentValueString)(attribute.as_raw(), index, outSize))
}
