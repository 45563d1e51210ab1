use std::ffi::c_char;

use crate::com::IBlob;
use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getParameterCount(layout: Handle<ProgramLayout>) -> u32 {
    forward!(api => (api.spReflection_GetParameterCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getTypeParameterCount(layout: Handle<ProgramLayout>) -> u32 {
    forward!(api => (api.spReflection_GetTypeParameterCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getTypeParameterByIndex(
    layout: Handle<ProgramLayout>,
    index: u32,
) -> Handle<TypeParameterReflection> {
    forward!(api => (api.spReflection_GetTypeParameterByIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findTypeParameter(
    layout: Handle<ProgramLayout>,
    name: *const c_char,
) -> Handle<TypeParameterReflection> {
    forward!(api => (api.spReflection_FindTypeParameter)(layout.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getParameterByIndex(
    layout: Handle<ProgramLayout>,
    index: u32,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflection_GetParameterByIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getEntryPointCount(layout: Handle<ProgramLayout>) -> SlangUInt {
    forward!(api => (api.spReflection_getEntryPointCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getEntryPointByIndex(
    layout: Handle<ProgramLayout>,
    index: SlangUInt,
) -> Handle<EntryPointReflection> {
    forward!(api => (api.spReflection_getEntryPointByIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getGlobalConstantBufferBinding(
    layout: Handle<ProgramLayout>,
) -> SlangUInt {
    forward!(api => (api.spReflection_getGlobalConstantBufferBinding)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getGlobalConstantBufferSize(layout: Handle<ProgramLayout>) -> usize {
    forward!(api => (api.spReflection_getGlobalConstantBufferSize)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findTypeByName(
    layout: Handle<ProgramLayout>,
    name: *const c_char,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflection_FindTypeByName)(layout.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findFunctionByName(
    layout: Handle<ProgramLayout>,
    name: *const c_char,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflection_FindFunctionByName)(layout.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findFunctionByNameInType(
    layout: Handle<ProgramLayout>,
    inType: Handle<TypeReflection>,
    name: *const c_char,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflection_FindFunctionByNameInType)(layout.as_raw(), inType.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findVarByNameInType(
    layout: Handle<ProgramLayout>,
    inType: Handle<TypeReflection>,
    name: *const c_char,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflection_FindVarByNameInType)(layout.as_raw(), inType.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getTypeLayout(
    layout: Handle<ProgramLayout>,
    inType: Handle<TypeReflection>,
    layoutRules: SlangLayoutRulesIntegral,
) -> Handle<TypeLayoutReflection> {
    forward!(api => (api.spReflection_GetTypeLayout)(layout.as_raw(), inType.as_raw(), layoutRules))
}

/// Looks an entry point up by name in the program's reflection data.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_findEntryPointReflectionByName(
    layout: Handle<ProgramLayout>,
    name: *const c_char,
) -> Handle<EntryPointReflection> {
    forward!(api => (api.spReflection_findEntryPointByName)(layout.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_specializeType(
    layout: Handle<ProgramLayout>,
    inType: Handle<TypeReflection>,
    specializationArgCount: SlangInt,
    specializationArgs: *const Handle<TypeReflection>,
    outDiagnostics: *mut Handle<IBlob>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflection_specializeType)(
        layout.as_raw(),
        inType.as_raw(),
        specializationArgCount,
        specializationArgs.cast(),
        outDiagnostics.cast(),
    ))
}

/// `inSpecializationArgTypes[i]` says which member of
/// `inSpecializationArgVals[i]` is live.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_specializeGeneric(
    layout: Handle<ProgramLayout>,
    inGeneric: Handle<GenericReflection>,
    specializationArgCount: SlangInt,
    inSpecializationArgTypes: *const GenericArgTypeIntegral,
    inSpecializationArgVals: *const GenericArgReflection,
    outDiagnostics: *mut Handle<IBlob>,
) -> Handle<GenericReflection> {
    forward!(api => (api.spReflection_specializeGeneric)(
        layout.as_raw(),
        inGeneric.as_raw(),
        specializationArgCount,
        inSpecializationArgTypes,
        inSpecializationArgVals,
        outDiagnostics.cast(),
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_isSubType(
    layout: Handle<ProgramLayout>,
    inSubType: Handle<TypeReflection>,
    inSuperType: Handle<TypeReflection>,
) -> bool {
    forward!(api => (api.spReflection_isSubType)(layout.as_raw(), inSubType.as_raw(), inSuperType.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getHashedStringCount(layout: Handle<ProgramLayout>) -> SlangUInt {
    forward!(api => (api.spReflection_getHashedStringCount)(layout.as_raw()))
}

/// Writes the length, excluding the terminating NUL, to `outCount`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getHashedString(
    layout: Handle<ProgramLayout>,
    index: SlangUInt,
    outCount: *mut usize,
) -> *const c_char {
    forward!(api => (api.spReflection_getHashedString)(layout.as_raw(), index, outCount))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getGlobalParamsTypeLayout(
    layout: Handle<ProgramLayout>,
) -> Handle<TypeLayoutReflection> {
    forward!(api => (api.spReflection_getGlobalParamsTypeLayout)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn ProgramLayout_getGlobalParamsVarLayout(
    layout: Handle<ProgramLayout>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflection_getGlobalParamsVarLayout)(layout.as_raw()))
}
