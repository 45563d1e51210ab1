use std::ffi::c_char;

use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getVariable(
    layout: Handle<VariableLayoutReflection>,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflectionVariableLayout_GetVariable)(layout.as_raw()))
}

/// Name of the underlying variable, or null when there is none.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getName(
    layout: Handle<VariableLayoutReflection>,
) -> *const c_char {
    forward!(api => {
        let variable = (api.spReflectionVariableLayout_GetVariable)(layout.as_raw());
        if variable.is_null() {
            std::ptr::null()
        } else {
            (api.spReflectionVariable_GetName)(variable)
        }
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_findModifier(
    layout: Handle<VariableLayoutReflection>,
    id: ModifierIDIntegral,
) -> Handle<Modifier> {
    forward!(api => {
        let variable = (api.spReflectionVariableLayout_GetVariable)(layout.as_raw());
        (api.spReflectionVariable_FindModifier)(variable, id)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getTypeLayout(
    layout: Handle<VariableLayoutReflection>,
) -> Handle<TypeLayoutReflection> {
    forward!(api => (api.spReflectionVariableLayout_GetTypeLayout)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getCategory(
    layout: Handle<VariableLayoutReflection>,
) -> ParameterCategoryIntegral {
    forward!(api => {
        let type_layout = (api.spReflectionVariableLayout_GetTypeLayout)(layout.as_raw());
        (api.spReflectionTypeLayout_GetParameterCategory)(type_layout)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getCategoryCount(
    layout: Handle<VariableLayoutReflection>,
) -> u32 {
    forward!(api => {
        let type_layout = (api.spReflectionVariableLayout_GetTypeLayout)(layout.as_raw());
        (api.spReflectionTypeLayout_GetCategoryCount)(type_layout)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getCategoryByIndex(
    layout: Handle<VariableLayoutReflection>,
    index: u32,
) -> ParameterCategoryIntegral {
    forward!(api => {
        let type_layout = (api.spReflectionVariableLayout_GetTypeLayout)(layout.as_raw());
        (api.spReflectionTypeLayout_GetCategoryByIndex)(type_layout, index)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getOffset(
    layout: Handle<VariableLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> usize {
    forward!(api => (api.spReflectionVariableLayout_GetOffset)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getType(
    layout: Handle<VariableLayoutReflection>,
) -> Handle<TypeReflection> {
    forward!(api => {
        let variable = (api.spReflectionVariableLayout_GetVariable)(layout.as_raw());
        (api.spReflectionVariable_GetType)(variable)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getBindingIndex(
    layout: Handle<VariableLayoutReflection>,
) -> u32 {
    forward!(api => (api.spReflectionParameter_GetBindingIndex)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getBindingSpace(
    layout: Handle<VariableLayoutReflection>,
) -> u32 {
    forward!(api => (api.spReflectionParameter_GetBindingSpace)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getBindingSpaceByCategory(
    layout: Handle<VariableLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> usize {
    forward!(api => (api.spReflectionVariableLayout_GetSpace)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getImageFormat(
    layout: Handle<VariableLayoutReflection>,
) -> SlangImageFormatIntegral {
    forward!(api => (api.spReflectionVariableLayout_GetImageFormat)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getSemanticName(
    layout: Handle<VariableLayoutReflection>,
) -> *const c_char {
    forward!(api => (api.spReflectionVariableLayout_GetSemanticName)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getSemanticIndex(
    layout: Handle<VariableLayoutReflection>,
) -> usize {
    forward!(api => (api.spReflectionVariableLayout_GetSemanticIndex)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn VariableLayoutReflection_getSlangStage(
    layout: Handle<VariableLayoutReflection>,
) -> SlangStageIntegral {
    forward!(api => (api.spReflectionVariableLayout_getStage)(layout.as_raw()))
}
