use std::ffi::c_char;

use crate::handle::Handle;
use crate::loader::SlangApi;
use crate::types::*;

pub(crate) unsafe fn is_array(api: &SlangApi, ty: *mut TypeReflection) -> bool {
    (api.spReflectionType_GetKind)(ty) == SLANG_TYPE_KIND_ARRAY
}

/// Follows `element` from `node` for as long as `is_array` holds.
pub(crate) fn strip_arrays<T: Copy>(node: T, is_array: impl Fn(T) -> bool, element: impl Fn(T) -> T) -> T {
    let mut node = node;
    while is_array(node) {
        node = element(node);
    }
    node
}

/// Product of `count` over every array level below `node`, 0 for a non-array.
///
/// Unbounded arrays report `usize::MAX`; the product wraps the way Slang's
/// own helper does.
pub(crate) fn array_element_product<T: Copy>(
    node: T,
    is_array: impl Fn(T) -> bool,
    element: impl Fn(T) -> T,
    count: impl Fn(T) -> usize,
) -> usize {
    if !is_array(node) {
        return 0;
    }
    let mut result: usize = 1;
    let mut node = node;
    while is_array(node) {
        result = result.wrapping_mul(count(node));
        node = element(node);
    }
    result
}

/// Strips every array level.
pub(crate) unsafe fn unwrap_array(api: &SlangApi, ty: *mut TypeReflection) -> *mut TypeReflection {
    strip_arrays(
        ty,
        |ty| unsafe { is_array(api, ty) },
        |ty| unsafe { (api.spReflectionType_GetElementType)(ty) },
    )
}

pub(crate) unsafe fn total_array_element_count(api: &SlangApi, ty: *mut TypeReflection) -> usize {
    array_element_product(
        ty,
        |ty| unsafe { is_array(api, ty) },
        |ty| unsafe { (api.spReflectionType_GetElementType)(ty) },
        |ty| unsafe { (api.spReflectionType_GetElementCount)(ty) },
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getKind(ty: Handle<TypeReflection>) -> SlangTypeKindIntegral {
    forward!(api => (api.spReflectionType_GetKind)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getFieldCount(ty: Handle<TypeReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetFieldCount)(ty.as_raw()))
}

/// Fields of a type carry no layout, so this yields a variable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getFieldByIndex(
    ty: Handle<TypeReflection>,
    index: u32,
) -> Handle<VariableReflection> {
    forward!(api => (api.spReflectionType_GetFieldByIndex)(ty.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_isArray(ty: Handle<TypeReflection>) -> bool {
    forward!(api => is_array(api, ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_unwrapArray(ty: Handle<TypeReflection>) -> Handle<TypeReflection> {
    forward!(api => unwrap_array(api, ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getElementCount(ty: Handle<TypeReflection>) -> usize {
    forward!(api => (api.spReflectionType_GetElementCount)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getTotalArrayElementCount(ty: Handle<TypeReflection>) -> usize {
    forward!(api => total_array_element_count(api, ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getElementType(ty: Handle<TypeReflection>) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionType_GetElementType)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getRowCount(ty: Handle<TypeReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetRowCount)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getColumnCount(ty: Handle<TypeReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetColumnCount)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getScalarType(ty: Handle<TypeReflection>) -> SlangScalarTypeIntegral {
    forward!(api => (api.spReflectionType_GetScalarType)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getResourceResultType(
    ty: Handle<TypeReflection>,
) -> Handle<TypeReflection> {
    forward!(api => (api.spReflectionType_GetResourceResultType)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getResourceShape(
    ty: Handle<TypeReflection>,
) -> SlangResourceShapeIntegral {
    forward!(api => (api.spReflectionType_GetResourceShape)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getResourceAccess(
    ty: Handle<TypeReflection>,
) -> SlangResourceAccessIntegral {
    forward!(api => (api.spReflectionType_GetResourceAccess)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getName(ty: Handle<TypeReflection>) -> *const c_char {
    forward!(api => (api.spReflectionType_GetName)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getUserAttributeCount(ty: Handle<TypeReflection>) -> u32 {
    forward!(api => (api.spReflectionType_GetUserAttributeCount)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getUserAttributeByIndex(
    ty: Handle<TypeReflection>,
    index: u32,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionType_GetUserAttribute)(ty.as_raw(), index))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_findUserAttributeByName(
    ty: Handle<TypeReflection>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionType_FindUserAttributeByName)(ty.as_raw(), name))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_findAttributeByName(
    ty: Handle<TypeReflection>,
    name: *const c_char,
) -> Handle<Attribute> {
    forward!(api => (api.spReflectionType_FindUserAttributeByName)(ty.as_raw(), name))
}

/// Exported under its historical, misspelled name.
/// [`TypeReflection_getGenericContainer`] is the same function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getGenericCountainer(
    ty: Handle<TypeReflection>,
) -> Handle<GenericReflection> {
    forward!(api => (api.spReflectionType_GetGenericContainer)(ty.as_raw()))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn TypeReflection_getGenericContainer(
    ty: Handle<TypeReflection>,
) -> Handle<GenericReflection> {
    forward!(api => (api.spReflectionType_GetGenericContainer)(ty.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// `float[2][3]` as a chain of levels: two arrays, then the scalar.
    struct Level {
        kind: SlangTypeKindIntegral,
        count: usize,
        element: usize,
    }

    const FLOAT_2_3: [Level; 3] = [
        Level { kind: SLANG_TYPE_KIND_ARRAY, count: 2, element: 1 },
        Level { kind: SLANG_TYPE_KIND_ARRAY, count: 3, element: 2 },
        Level { kind: SLANG_TYPE_KIND_SCALAR, count: 0, element: 2 },
    ];

    fn product(levels: &[Level], start: usize) -> usize {
        array_element_product(
            start,
            |i| levels[i].kind == SLANG_TYPE_KIND_ARRAY,
            |i| levels[i].element,
            |i| levels[i].count,
        )
    }

    #[test]
    fn test_total_element_count_multiplies_every_level() {
        assert_eq!(product(&FLOAT_2_3, 0), 6);
        assert_eq!(product(&FLOAT_2_3, 1), 3);
    }

    #[test]
    fn test_total_element_count_of_non_array_is_zero() {
        assert_eq!(product(&FLOAT_2_3, 2), 0);
    }

    #[test]
    fn test_total_element_count_wraps_for_unbounded_arrays() {
        let unbounded = [
            Level { kind: SLANG_TYPE_KIND_ARRAY, count: usize::MAX, element: 1 },
            Level { kind: SLANG_TYPE_KIND_ARRAY, count: 2, element: 2 },
            Level { kind: SLANG_TYPE_KIND_SCALAR, count: 0, element: 2 },
        ];
        assert_eq!(product(&unbounded, 0), usize::MAX.wrapping_mul(2));
    }

    #[test]
    fn test_strip_arrays_stops_at_first_non_array() {
        let visited = RefCell::new(Vec::new());
        let leaf = strip_arrays(
            0usize,
            |i| {
                visited.borrow_mut().push(i);
                FLOAT_2_3[i].kind == SLANG_TYPE_KIND_ARRAY
            },
            |i| FLOAT_2_3[i].element,
        );
        assert_eq!(leaf, 2);
        assert_eq!(visited.into_inner(), vec![0, 1, 2]);

        // A non-array comes back unchanged
        assert_eq!(strip_arrays(2usize, |i| FLOAT_2_3[i].kind == SLANG_TYPE_KIND_ARRAY, |i| FLOAT_2_3[i].element), 2);
    }
}
