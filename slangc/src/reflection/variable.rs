use std::ffi::c_char;

use crate::com::IGlobalSession;
use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getName(variable: Handle<VariableReflection>) -> *const c_char {
    forward!(api => (api.spReflectionVariable_GetName)(variable.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getType(
    variable: Handle<VariableReflection>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionVariable_GetType)(variable.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_findModifier(
    variable: Handle<VariableReflection>,
    id: ModifierIDIntegral,
) -> Handle<Modifier> {
    forward!(api => (api.spReflectionVariable_FindModifier)(variable.as_raw(), id))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getUserAttributeCount(
    variable: Handle<VariableReflection>,
) -> u32 {
    forward!(api => (api.spReflectionVariable_GetUserAttributeCount)(variable.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getUserAttributeByIndex(
    variable: Handle<VariableReflection>,
    index: u32,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionVariable_GetUserAttribute)(variable.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_findAttributeByName(
    variable: Handle<VariableReflection>,
    inSession: Handle<IGlobalSession>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionVariable_FindUserAttributeByName)(
        variable.as_raw(),
        inSession.as_raw(),
        name,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_findUserAttributeByName(
    variable: Handle<VariableReflection>,
    inSession: Handle<IGlobalSession>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionVariable_FindUserAttributeByName)(
        variable.as_raw(),
        inSession.as_raw(),
        name,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_hasDefaultValue(variable: Handle<VariableReflection>) -> bool {
    forward!(api => (api.spReflectionVariable_HasDefaultValue)(variable.as_raw()))
}

/// Integer default value of the variable, as Slang's status.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getDefaultValue(
    variable: Handle<VariableReflection>,
    value: *mut i64,
) -> SlangResult {
    match crate::loader::api() {
        Some(api) => (api.spReflectionVariable_GetDefaultValueInt)(variable.as_raw(), value),
        None => SLANG_E_NOT_AVAILABLE,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_getGenericContainer(
    variable: Handle<VariableReflection>,
) -> Handle<GenericReflection> {
    forward!(api => (api.spReflectionVariable_GetGenericContainer)(variable.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableReflection_applySpecializations(
    variable: Handle<VariableReflection>,
    inGeneric: Handle<GenericReflection>,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflectionVariable_applySpecializations)(variable.as_raw(), inGeneric.as_raw()))
}
