use std::ffi::c_char;

use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeParameterReflection_getName(
    parameter: Handle<TypeParameterReflection>,
) -> *const c_char {
    forward!(api => (api.spReflectionTypeParameter_GetName)(parameter.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeParameterReflection_getIndex(parameter: Handle<TypeParameterReflection>) -> u32 {
    forward!(api => (api.spReflectionTypeParameter_GetIndex)(parameter.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeParameterReflection_getConstraintCount(
    parameter: Handle<TypeParameterReflection>,
) -> u32 {
    forward!(api => (api.spReflectionTypeParameter_GetConstraintCount)(parameter.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeParameterReflection_getConstraintByIndex(
    parameter: Handle<TypeParameterReflection>,
    index: u32,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionTypeParameter_GetConstraintByIndex)(parameter.as_raw(), index))
}
