use std::ffi::c_char;

use crate::com::IGlobalSession;
use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getName(function: Handle<FunctionReflection>) -> *const c_char {
    forward!(api => (api.spReflectionFunction_GetName)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getReturnType(
    function: Handle<FunctionReflection>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionFunction_GetResultType)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getParameterCount(function: Handle<FunctionReflection>) -> u32 {
    forward!(api => (api.spReflectionFunction_GetParameterCount)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getParameterByIndex(
    function: Handle<FunctionReflection>,
    index: u32,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflectionFunction_GetParameter)(function.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getUserAttributeCount(function: Handle<FunctionReflection>) -> u32 {
    forward!(api => (api.spReflectionFunction_GetUserAttributeCount)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getUserAttributeByIndex(
    function: Handle<FunctionReflection>,
    index: u32,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionFunction_GetUserAttribute)(function.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_findAttributeByName(
    function: Handle<FunctionReflection>,
    inSession: Handle<IGlobalSession>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionFunction_FindUserAttributeByName)(
        function.as_raw(),
        inSession.as_raw(),
        name,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_findUserAttributeByName(
    function: Handle<FunctionReflection>,
    inSession: Handle<IGlobalSession>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionFunction_FindUserAttributeByName)(
        function.as_raw(),
        inSession.as_raw(),
        name,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_findModifier(
    function: Handle<FunctionReflection>,
    id: ModifierIDIntegral,
) -> Handle<Modifier> {
    forward!(api => (api.spReflectionFunction_FindModifier)(function.as_raw(), id))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getGenericContainer(
    function: Handle<FunctionReflection>,
) -> Handle<GenericReflection> {
    forward!(api => (api.spReflectionFunction_GetGenericContainer)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_applySpecializations(
    function: Handle<FunctionReflection>,
    inGeneric: Handle<GenericReflection>,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflectionFunction_applySpecializations)(function.as_raw(), inGeneric.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_specializeWithArgTypes(
    function: Handle<FunctionReflection>,
    argCount: u32,
    inTypes: *const Handle<TypeReflection>,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflectionFunction_specializeWithArgTypes)(
        function.as_raw(),
        argCount as SlangInt,
        inTypes.cast(),
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_isOverloaded(function: Handle<FunctionReflection>) -> bool {
    forward!(api => (api.spReflectionFunction_isOverloaded)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getOverloadCount(function: Handle<FunctionReflection>) -> u32 {
    forward!(api => (api.spReflectionFunction_getOverloadCount)(function.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn FunctionReflection_getOverload(
    function: Handle<FunctionReflection>,
    index: u32,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflectionFunction_getOverload)(function.as_raw(), index))
}
