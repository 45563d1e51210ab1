use std::ffi::c_char;

use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getName(entryPoint: Handle<EntryPointReflection>) -> *const c_char {
    forward!(api => (api.spReflectionEntryPoint_getName)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getNameOverride(
    entryPoint: Handle<EntryPointReflection>,
) -> *const c_char {
    forward!(api => (api.spReflectionEntryPoint_getNameOverride)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getParameterCount(entryPoint: Handle<EntryPointReflection>) -> u32 {
    forward!(api => (api.spReflectionEntryPoint_getParameterCount)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getFunction(
    entryPoint: Handle<EntryPointReflection>,
) -> Handle<FunctionReflection> {
    forward!(api => (api.spReflectionEntryPoint_getFunction)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getParameterByIndex(
    entryPoint: Handle<EntryPointReflection>,
    index: u32,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionEntryPoint_getParameterByIndex)(entryPoint.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getStage(
    entryPoint: Handle<EntryPointReflection>,
) -> SlangStageIntegral {
    forward!(api => (api.spReflectionEntryPoint_getStage)(entryPoint.as_raw()))
}

/// Writes `axisCount` thread-group dimensions to `outSizeAlongAxis`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getComputeThreadGroupSize(
    entryPoint: Handle<EntryPointReflection>,
    axisCount: SlangUInt,
    outSizeAlongAxis: *mut SlangUInt,
) {
    forward!(api => (api.spReflectionEntryPoint_getComputeThreadGroupSize)(
        entryPoint.as_raw(),
        axisCount,
        outSizeAlongAxis,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getComputeWaveSize(
    entryPoint: Handle<EntryPointReflection>,
    outWaveSize: *mut SlangUInt,
) {
    forward!(api => (api.spReflectionEntryPoint_getComputeWaveSize)(entryPoint.as_raw(), outWaveSize))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_usesAnySampleRateInput(
    entryPoint: Handle<EntryPointReflection>,
) -> bool {
    forward!(api => (api.spReflectionEntryPoint_usesAnySampleRateInput)(entryPoint.as_raw()) != 0)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getVarLayout(
    entryPoint: Handle<EntryPointReflection>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionEntryPoint_getVarLayout)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getTypeLayout(
    entryPoint: Handle<EntryPointReflection>,
) -> Handle<TypeLayoutReflection> {
    forward!(api => {
        let var_layout = (api.spReflectionEntryPoint_getVarLayout)(entryPoint.as_raw());
        (api.spReflectionVariableLayout_GetTypeLayout)(var_layout)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_getResultVarLayout(
    entryPoint: Handle<EntryPointReflection>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionEntryPoint_getResultVarLayout)(entryPoint.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EntryPointReflection_hasDefaultConstantBuffer(
    entryPoint: Handle<EntryPointReflection>,
) -> bool {
    forward!(api => (api.spReflectionEntryPoint_hasDefaultConstantBuffer)(entryPoint.as_raw()) != 0)
}
