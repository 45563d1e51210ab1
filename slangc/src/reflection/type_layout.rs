use std::ffi::{CStr, c_char};

use super::type_reflection::{is_array, strip_arrays, total_array_element_count};
use crate::handle::Handle;
use crate::types::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getType(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionTypeLayout_GetType)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getKind(
    layout: Handle<TypeLayoutReflection>,
) -> SlangTypeKindIntegral {
    forward!(api => (api.spReflectionTypeLayout_getKind)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getSize(
    layout: Handle<TypeLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> usize {
    forward!(api => (api.spReflectionTypeLayout_GetSize)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getStride(
    layout: Handle<TypeLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> usize {
    forward!(api => (api.spReflectionTypeLayout_GetStride)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getAlignment(
    layout: Handle<TypeLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> i32 {
    forward!(api => (api.spReflectionTypeLayout_getAlignment)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getFieldCount(layout: Handle<TypeLayoutReflection>) -> u32 {
    forward!(api => {
        let ty = (api.spReflectionTypeLayout_GetType)(layout.as_raw());
        (api.spReflectionType_GetFieldCount)(ty)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getFieldByIndex(
    layout: Handle<TypeLayoutReflection>,
    index: u32,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_GetFieldByIndex)(layout.as_raw(), index))
}

/// Index of the field called `name`, or -1.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_findFieldIndexByName(
    layout: Handle<TypeLayoutReflection>,
    name: *const c_char,
) -> SlangInt {
    forward!(api => {
        let len = if name.is_null() { 0 } else { CStr::from_ptr(name).to_bytes().len() };
        (api.spReflectionTypeLayout_findFieldIndexByName)(layout.as_raw(), name, name.wrapping_add(len))
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getExplicitCounter(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_GetExplicitCounter)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_isArray(layout: Handle<TypeLayoutReflection>) -> bool {
    forward!(api => is_array(api, (api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

/// Strips every array level, following element type layouts.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_unwrapArray(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<TypeLayoutReflection> {
    forward!(api => strip_arrays(
        layout.as_raw(),
        |layout| unsafe { is_array(api, (api.spReflectionTypeLayout_GetType)(layout)) },
        |layout| unsafe { (api.spReflectionTypeLayout_GetElementTypeLayout)(layout) },
    ))
}

/// Element count of an array type, resolved against `reflection` when the
/// count depends on a specialization constant.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getElementCount(
    layout: Handle<TypeLayoutReflection>,
    reflection: Handle<ShaderReflection>,
) -> usize {
    forward!(api => {
        let ty = (api.spReflectionTypeLayout_GetType)(layout.as_raw());
        (api.spReflectionType_GetSpecializedElementCount)(ty, reflection.as_raw())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getTotalElementCount(
    layout: Handle<TypeLayoutReflection>,
) -> usize {
    forward!(api => total_array_element_count(api, (api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getElementStride(
    layout: Handle<TypeLayoutReflection>,
    category: ParameterCategoryIntegral,
) -> usize {
    forward!(api => (api.spReflectionTypeLayout_GetElementStride)(layout.as_raw(), category))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getElementTypeLayout(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<TypeLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_GetElementTypeLayout)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getElementVarLayout(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_GetElementVarLayout)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getContainerVarLayout(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_getContainerVarLayout)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getParameterCategory(
    layout: Handle<TypeLayoutReflection>,
) -> ParameterCategoryIntegral {
    forward!(api => (api.spReflectionTypeLayout_GetParameterCategory)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getCategoryCount(layout: Handle<TypeLayoutReflection>) -> u32 {
    forward!(api => (api.spReflectionTypeLayout_GetCategoryCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getCategoryByIndex(
    layout: Handle<TypeLayoutReflection>,
    index: u32,
) -> ParameterCategoryIntegral {
    forward!(api => (api.spReflectionTypeLayout_GetCategoryByIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getRowCount(layout: Handle<TypeLayoutReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetRowCount)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getColumnCount(layout: Handle<TypeLayoutReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetColumnCount)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getScalarType(
    layout: Handle<TypeLayoutReflection>,
) -> SlangScalarTypeIntegral {
    forward!(api => (api.spReflectionType_GetScalarType)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getResourceResultType(
    layout: Handle<TypeLayoutReflection>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionType_GetResourceResultType)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getResourceShape(
    layout: Handle<TypeLayoutReflection>,
) -> SlangResourceShapeIntegral {
    forward!(api => (api.spReflectionType_GetResourceShape)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getResourceAccess(
    layout: Handle<TypeLayoutReflection>,
) -> SlangResourceAccessIntegral {
    forward!(api => (api.spReflectionType_GetResourceAccess)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getName(layout: Handle<TypeLayoutReflection>) -> *const c_char {
    forward!(api => (api.spReflectionType_GetName)((api.spReflectionTypeLayout_GetType)(layout.as_raw())))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getMatrixLayoutMode(
    layout: Handle<TypeLayoutReflection>,
) -> SlangMatrixLayoutModeIntegral {
    forward!(api => (api.spReflectionTypeLayout_GetMatrixLayoutMode)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getGenericParamIndex(layout: Handle<TypeLayoutReflection>) -> i32 {
    forward!(api => (api.spReflectionTypeLayout_getGenericParamIndex)(layout.as_raw()))
}

// Binding ranges

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeCount(
    layout: Handle<TypeLayoutReflection>,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeType(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangBindingTypeIntegral {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeType)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_isBindingRangeSpecializable(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> bool {
    forward!(api => (api.spReflectionTypeLayout_isBindingRangeSpecializable)(layout.as_raw(), index) != 0)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeBindingCount(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeBindingCount)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getFieldBindingRangeOffset(
    layout: Handle<TypeLayoutReflection>,
    fieldIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getFieldBindingRangeOffset)(layout.as_raw(), fieldIndex))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getExplicitCounterBindingRangeOffset(
    layout: Handle<TypeLayoutReflection>,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getExplicitCounterBindingRangeOffset)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeLeafTypeLayout(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> Handle<TypeLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeLeafTypeLayout)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeLeafVariable(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeLeafVariable)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeImageFormat(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangImageFormatIntegral {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeImageFormat)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeDescriptorSetIndex(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeDescriptorSetIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeFirstDescriptorRangeIndex(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeFirstDescriptorRangeIndex)(layout.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getBindingRangeDescriptorRangeCount(
    layout: Handle<TypeLayoutReflection>,
    index: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getBindingRangeDescriptorRangeCount)(layout.as_raw(), index))
}

// Descriptor sets

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetCount(
    layout: Handle<TypeLayoutReflection>,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetSpaceOffset(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetSpaceOffset)(layout.as_raw(), setIndex))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetDescriptorRangeCount(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetDescriptorRangeCount)(layout.as_raw(), setIndex))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetDescriptorRangeIndexOffset(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
    rangeIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetDescriptorRangeIndexOffset)(
        layout.as_raw(),
        setIndex,
        rangeIndex,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetDescriptorRangeDescriptorCount(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
    rangeIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetDescriptorRangeDescriptorCount)(
        layout.as_raw(),
        setIndex,
        rangeIndex,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetDescriptorRangeType(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
    rangeIndex: SlangInt,
) -> SlangBindingTypeIntegral {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetDescriptorRangeType)(
        layout.as_raw(),
        setIndex,
        rangeIndex,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getDescriptorSetDescriptorRangeCategory(
    layout: Handle<TypeLayoutReflection>,
    setIndex: SlangInt,
    rangeIndex: SlangInt,
) -> ParameterCategoryIntegral {
    forward!(api => (api.spReflectionTypeLayout_getDescriptorSetDescriptorRangeCategory)(
        layout.as_raw(),
        setIndex,
        rangeIndex,
    ))
}

// Sub-object ranges

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getSubObjectRangeCount(
    layout: Handle<TypeLayoutReflection>,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getSubObjectRangeCount)(layout.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getSubObjectRangeBindingRangeIndex(
    layout: Handle<TypeLayoutReflection>,
    subObjectRangeIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getSubObjectRangeBindingRangeIndex)(
        layout.as_raw(),
        subObjectRangeIndex,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getSubObjectRangeSpaceOffset(
    layout: Handle<TypeLayoutReflection>,
    subObjectRangeIndex: SlangInt,
) -> SlangInt {
    forward!(api => (api.spReflectionTypeLayout_getSubObjectRangeSpaceOffset)(
        layout.as_raw(),
        subObjectRangeIndex,
    ))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeLayoutReflection_getSubObjectRangeOffset(
    layout: Handle<TypeLayoutReflection>,
    subObjectRangeIndex: SlangInt,
) -> Handle<VariableLayoutReflection> {
    forward!(api => (api.spReflectionTypeLayout_getSubObjectRangeOffset)(
        layout.as_raw(),
        subObjectRangeIndex,
    ))
}
