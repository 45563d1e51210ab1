//! Locating and loading the Slang shared library
//!
//! The library is searched for, in order:
//!
//! 1. `SLANG_LIBRARY_PATH`, naming the library file itself
//! 2. `$SLANG_DIR/lib` and `$SLANG_DIR/bin` (the layout of a Slang release)
//! 3. the directory of the running executable
//! 4. the platform's dynamic loader search path
//!
//! The first candidate that loads and exports every required symbol wins.
//! The outcome, success or failure, is cached for the life of the process.
//!
//! # Slang version
//!
//! The import table and the COM mirrors follow the `slang.h` of Slang
//! [`MIN_SLANG_VERSION`], the revision that declares
//! `CompilerOptionName::UseMSVCStyleBitfieldPacking`. Every symbol in
//! [`SlangApi::SYMBOLS`] must be exported. A library missing any one of
//! them is rejected as a whole; older releases lack `spReflectionFunction_getOverload` and
//! `spReflectionVariable_GetDefaultValueInt`, for instance. With no usable
//! library, `createGlobalSession` and the status-returning reflection
//! exports report `SLANG_E_NOT_AVAILABLE` and the rest return zero or null.

use std::ffi::{OsStr, OsString, c_char};
use std::path::PathBuf;
use std::sync::OnceLock;

use libloading::Library;
use slangc_proc::import_table;

use crate::com::{IBlob, IGlobalSession};
use crate::types::*;
use crate::{Result, SlangcError};

type Program = ProgramLayout;
type Type = TypeReflection;
type TypeLayout = TypeLayoutReflection;
type Variable = VariableReflection;
type VariableLayout = VariableLayoutReflection;
type EntryPoint = EntryPointReflection;
type TypeParameter = TypeParameterReflection;
type Function = FunctionReflection;
type Generic = GenericReflection;

import_table! {
    /// Entry points resolved from the Slang shared library.
    pub struct SlangApi {
        fn slang_createGlobalSession(apiVersion: SlangInt, outGlobalSession: *mut *mut IGlobalSession) -> SlangResult;

        fn spReflection_GetParameterCount(reflection: *mut Program) -> u32;
        fn spReflection_GetTypeParameterCount(reflection: *mut Program) -> u32;
        fn spReflection_GetTypeParameterByIndex(reflection: *mut Program, index: u32) -> *mut TypeParameter;
        fn spReflection_FindTypeParameter(reflection: *mut Program, name: *const c_char) -> *mut TypeParameter;
        fn spReflection_GetParameterByIndex(reflection: *mut Program, index: u32) -> *mut VariableLayout;
        fn spReflection_getEntryPointCount(reflection: *mut Program) -> SlangUInt;
        fn spReflection_getEntryPointByIndex(reflection: *mut Program, index: SlangUInt) -> *mut EntryPoint;
        fn spReflection_findEntryPointByName(reflection: *mut Program, name: *const c_char) -> *mut EntryPoint;
        fn spReflection_getGlobalConstantBufferBinding(reflection: *mut Program) -> SlangUInt;
        fn spReflection_getGlobalConstantBufferSize(reflection: *mut Program) -> usize;
        fn spReflection_FindTypeByName(reflection: *mut Program, name: *const c_char) -> *mut Type;
        fn spReflection_FindFunctionByName(reflection: *mut Program, name: *const c_char) -> *mut Function;
        fn spReflection_FindFunctionByNameInType(reflection: *mut Program, ty: *mut Type, name: *const c_char) -> *mut Function;
        fn spReflection_FindVarByNameInType(reflection: *mut Program, ty: *mut Type, name: *const c_char) -> *mut Variable;
        fn spReflection_GetTypeLayout(reflection: *mut Program, ty: *mut Type, rules: SlangLayoutRulesIntegral) -> *mut TypeLayout;
        fn spReflection_specializeType(
            reflection: *mut Program,
            ty: *mut Type,
            argCount: SlangInt,
            args: *const *mut Type,
            outDiagnostics: *mut *mut IBlob,
        ) -> *mut Type;
        fn spReflection_specializeGeneric(
            reflection: *mut Program,
            generic: *mut Generic,
            argCount: SlangInt,
            argTypes: *const GenericArgTypeIntegral,
            args: *const GenericArgReflection,
            outDiagnostics: *mut *mut IBlob,
        ) -> *mut Generic;
        fn spReflection_isSubType(reflection: *mut Program, subType: *mut Type, superType: *mut Type) -> bool;
        fn spReflection_getHashedStringCount(reflection: *mut Program) -> SlangUInt;
        fn spReflection_getHashedString(reflection: *mut Program, index: SlangUInt, outCount: *mut usize) -> *const c_char;
        fn spReflection_getGlobalParamsTypeLayout(reflection: *mut Program) -> *mut TypeLayout;
        fn spReflection_getGlobalParamsVarLayout(reflection: *mut Program) -> *mut VariableLayout;

        fn spReflectionVariableLayout_GetVariable(layout: *mut VariableLayout) -> *mut Variable;
        fn spReflectionVariableLayout_GetTypeLayout(layout: *mut VariableLayout) -> *mut TypeLayout;
        fn spReflectionVariableLayout_GetOffset(layout: *mut VariableLayout, category: ParameterCategoryIntegral) -> usize;
        fn spReflectionVariableLayout_GetSpace(layout: *mut VariableLayout, category: ParameterCategoryIntegral) -> usize;
        fn spReflectionVariableLayout_GetImageFormat(layout: *mut VariableLayout) -> SlangImageFormatIntegral;
        fn spReflectionVariableLayout_GetSemanticName(layout: *mut VariableLayout) -> *const c_char;
        fn spReflectionVariableLayout_GetSemanticIndex(layout: *mut VariableLayout) -> usize;
        fn spReflectionVariableLayout_getStage(layout: *mut VariableLayout) -> SlangStageIntegral;
        fn spReflectionParameter_GetBindingIndex(layout: *mut VariableLayout) -> u32;
        fn spReflectionParameter_GetBindingSpace(layout: *mut VariableLayout) -> u32;

        fn spReflectionType_GetKind(ty: *mut Type) -> SlangTypeKindIntegral;
        fn spReflectionType_GetFieldCount(ty: *mut Type) -> u32;
        fn spReflectionType_GetFieldByIndex(ty: *mut Type, index: u32) -> *mut Variable;
        fn spReflectionType_GetElementCount(ty: *mut Type) -> usize;
        fn spReflectionType_GetSpecializedElementCount(ty: *mut Type, reflection: *mut Program) -> usize;
        fn spReflectionType_GetElementType(ty: *mut Type) -> *mut Type;
        fn spReflectionType_GetRowCount(ty: *mut Type) -> u32;
        fn spReflectionType_GetColumnCount(ty: *mut Type) -> u32;
        fn spReflectionType_GetScalarType(ty: *mut Type) -> SlangScalarTypeIntegral;
        fn spReflectionType_GetResourceResultType(ty: *mut Type) -> *mut Type;
        fn spReflectionType_GetResourceShape(ty: *mut Type) -> SlangResourceShapeIntegral;
        fn spReflectionType_GetResourceAccess(ty: *mut Type) -> SlangResourceAccessIntegral;
        fn spReflectionType_GetName(ty: *mut Type) -> *const c_char;
        fn spReflectionType_GetUserAttributeCount(ty: *mut Type) -> u32;
        fn spReflectionType_GetUserAttribute(ty: *mut Type, index: u32) -> *mut Attribute;
        fn spReflectionType_FindUserAttributeByName(ty: *mut Type, name: *const c_char) -> *mut Attribute;
        fn spReflectionType_GetGenericContainer(ty: *mut Type) -> *mut Generic;

        fn spReflectionVariable_GetName(var: *mut Variable) -> *const c_char;
        fn spReflectionVariable_GetType(var: *mut Variable) -> *mut Type;
        fn spReflectionVariable_FindModifier(var: *mut Variable, id: ModifierIDIntegral) -> *mut Modifier;
        fn spReflectionVariable_GetUserAttributeCount(var: *mut Variable) -> u32;
        fn spReflectionVariable_GetUserAttribute(var: *mut Variable, index: u32) -> *mut Attribute;
        fn spReflectionVariable_FindUserAttributeByName(
            var: *mut Variable,
            globalSession: *mut IGlobalSession,
            name: *const c_char,
        ) -> *mut Attribute;
        fn spReflectionVariable_HasDefaultValue(var: *mut Variable) -> bool;
        fn spReflectionVariable_GetDefaultValueInt(var: *mut Variable, value: *mut i64) -> SlangResult;
        fn spReflectionVariable_GetGenericContainer(var: *mut Variable) -> *mut Generic;
        fn spReflectionVariable_applySpecializations(var: *mut Variable, generic: *mut Generic) -> *mut Variable;

        fn spReflectionTypeLayout_GetType(layout: *mut TypeLayout) -> *mut Type;
        fn spReflectionTypeLayout_getKind(layout: *mut TypeLayout) -> SlangTypeKindIntegral;
        fn spReflectionTypeLayout_GetSize(layout: *mut TypeLayout, category: ParameterCategoryIntegral) -> usize;
        fn spReflectionTypeLayout_GetStride(layout: *mut TypeLayout, category: ParameterCategoryIntegral) -> usize;
        fn spReflectionTypeLayout_getAlignment(layout: *mut TypeLayout, category: ParameterCategoryIntegral) -> i32;
        fn spReflectionTypeLayout_GetFieldByIndex(layout: *mut TypeLayout, index: u32) -> *mut VariableLayout;
        fn spReflectionTypeLayout_findFieldIndexByName(
            layout: *mut TypeLayout,
            nameBegin: *const c_char,
            nameEnd: *const c_char,
        ) -> SlangInt;
        fn spReflectionTypeLayout_GetExplicitCounter(layout: *mut TypeLayout) -> *mut VariableLayout;
        fn spReflectionTypeLayout_GetElementStride(layout: *mut TypeLayout, category: ParameterCategoryIntegral) -> usize;
        fn spReflectionTypeLayout_GetElementTypeLayout(layout: *mut TypeLayout) -> *mut TypeLayout;
        fn spReflectionTypeLayout_GetElementVarLayout(layout: *mut TypeLayout) -> *mut VariableLayout;
        fn spReflectionTypeLayout_getContainerVarLayout(layout: *mut TypeLayout) -> *mut VariableLayout;
        fn spReflectionTypeLayout_GetParameterCategory(layout: *mut TypeLayout) -> ParameterCategoryIntegral;
        fn spReflectionTypeLayout_GetCategoryCount(layout: *mut TypeLayout) -> u32;
        fn spReflectionTypeLayout_GetCategoryByIndex(layout: *mut TypeLayout, index: u32) -> ParameterCategoryIntegral;
        fn spReflectionTypeLayout_GetMatrixLayoutMode(layout: *mut TypeLayout) -> SlangMatrixLayoutModeIntegral;
        fn spReflectionTypeLayout_getGenericParamIndex(layout: *mut TypeLayout) -> i32;
        fn spReflectionTypeLayout_getBindingRangeCount(layout: *mut TypeLayout) -> SlangInt;
        fn spReflectionTypeLayout_getBindingRangeType(layout: *mut TypeLayout, index: SlangInt) -> SlangBindingTypeIntegral;
        fn spReflectionTypeLayout_isBindingRangeSpecializable(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getBindingRangeBindingCount(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getFieldBindingRangeOffset(layout: *mut TypeLayout, fieldIndex: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getExplicitCounterBindingRangeOffset(layout: *mut TypeLayout) -> SlangInt;
        fn spReflectionTypeLayout_getBindingRangeLeafTypeLayout(layout: *mut TypeLayout, index: SlangInt) -> *mut TypeLayout;
        fn spReflectionTypeLayout_getBindingRangeLeafVariable(layout: *mut TypeLayout, index: SlangInt) -> *mut Variable;
        fn spReflectionTypeLayout_getBindingRangeImageFormat(layout: *mut TypeLayout, index: SlangInt) -> SlangImageFormatIntegral;
        fn spReflectionTypeLayout_getBindingRangeDescriptorSetIndex(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getBindingRangeFirstDescriptorRangeIndex(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getBindingRangeDescriptorRangeCount(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetCount(layout: *mut TypeLayout) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetSpaceOffset(layout: *mut TypeLayout, setIndex: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetDescriptorRangeCount(layout: *mut TypeLayout, setIndex: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetDescriptorRangeIndexOffset(
            layout: *mut TypeLayout,
            setIndex: SlangInt,
            rangeIndex: SlangInt,
        ) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetDescriptorRangeDescriptorCount(
            layout: *mut TypeLayout,
            setIndex: SlangInt,
            rangeIndex: SlangInt,
        ) -> SlangInt;
        fn spReflectionTypeLayout_getDescriptorSetDescriptorRangeType(
            layout: *mut TypeLayout,
            setIndex: SlangInt,
            rangeIndex: SlangInt,
        ) -> SlangBindingTypeIntegral;
        fn spReflectionTypeLayout_getDescriptorSetDescriptorRangeCategory(
            layout: *mut TypeLayout,
            setIndex: SlangInt,
            rangeIndex: SlangInt,
        ) -> ParameterCategoryIntegral;
        fn spReflectionTypeLayout_getSubObjectRangeCount(layout: *mut TypeLayout) -> SlangInt;
        fn spReflectionTypeLayout_getSubObjectRangeBindingRangeIndex(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getSubObjectRangeSpaceOffset(layout: *mut TypeLayout, index: SlangInt) -> SlangInt;
        fn spReflectionTypeLayout_getSubObjectRangeOffset(layout: *mut TypeLayout, index: SlangInt) -> *mut VariableLayout;

        fn spReflectionEntryPoint_getName(entryPoint: *mut EntryPoint) -> *const c_char;
        fn spReflectionEntryPoint_getNameOverride(entryPoint: *mut EntryPoint) -> *const c_char;
        fn spReflectionEntryPoint_getParameterCount(entryPoint: *mut EntryPoint) -> u32;
        fn spReflectionEntryPoint_getFunction(entryPoint: *mut EntryPoint) -> *mut Function;
        fn spReflectionEntryPoint_getParameterByIndex(entryPoint: *mut EntryPoint, index: u32) -> *mut VariableLayout;
        fn spReflectionEntryPoint_getStage(entryPoint: *mut EntryPoint) -> SlangStageIntegral;
        fn spReflectionEntryPoint_getComputeThreadGroupSize(
            entryPoint: *mut EntryPoint,
            axisCount: SlangUInt,
            outSizeAlongAxis: *mut SlangUInt,
        );
        fn spReflectionEntryPoint_getComputeWaveSize(entryPoint: *mut EntryPoint, outWaveSize: *mut SlangUInt);
        fn spReflectionEntryPoint_usesAnySampleRateInput(entryPoint: *mut EntryPoint) -> i32;
        fn spReflectionEntryPoint_getVarLayout(entryPoint: *mut EntryPoint) -> *mut VariableLayout;
        fn spReflectionEntryPoint_getResultVarLayout(entryPoint: *mut EntryPoint) -> *mut VariableLayout;
        fn spReflectionEntryPoint_hasDefaultConstantBuffer(entryPoint: *mut EntryPoint) -> i32;

        fn spReflectionTypeParameter_GetName(parameter: *mut TypeParameter) -> *const c_char;
        fn spReflectionTypeParameter_GetIndex(parameter: *mut TypeParameter) -> u32;
        fn spReflectionTypeParameter_GetConstraintCount(parameter: *mut TypeParameter) -> u32;
        fn spReflectionTypeParameter_GetConstraintByIndex(parameter: *mut TypeParameter, index: u32) -> *mut Type;

        fn spReflectionUserAttribute_GetName(attribute: *mut Attribute) -> *const c_char;
        fn spReflectionUserAttribute_GetArgumentCount(attribute: *mut Attribute) -> u32;
        fn spReflectionUserAttribute_GetArgumentType(attribute: *mut Attribute, index: u32) -> *mut Type;
        fn spReflectionUserAttribute_GetArgumentValueInt(attribute: *mut Attribute, index: u32, value: *mut i32) -> SlangResult;
        fn spReflectionUserAttribute_GetArgumentValueFloat(attribute: *mut Attribute, index: u32, value: *mut f32) -> SlangResult;
        fn spReflectionUserAttribute_GetArgumentValueString(
            attribute: *mut Attribute,
            index: u32,
            outSize: *mut usize,
        ) -> *const c_char;

        fn spReflectionFunction_GetName(function: *mut Function) -> *const c_char;
        fn spReflectionFunction_GetResultType(function: *mut Function) -> *mut Type;
        fn spReflectionFunction_GetParameterCount(function: *mut Function) -> u32;
        fn spReflectionFunction_GetParameter(function: *mut Function, index: u32) -> *mut Variable;
        fn spReflectionFunction_GetUserAttributeCount(function: *mut Function) -> u32;
        fn spReflectionFunction_GetUserAttribute(function: *mut Function, index: u32) -> *mut Attribute;
        fn spReflectionFunction_FindUserAttributeByName(
            function: *mut Function,
            globalSession: *mut IGlobalSession,
            name: *const c_char,
        ) -> *mut Attribute;
        fn spReflectionFunction_FindModifier(function: *mut Function, id: ModifierIDIntegral) -> *mut Modifier;
        fn spReflectionFunction_GetGenericContainer(function: *mut Function) -> *mut Generic;
        fn spReflectionFunction_applySpecializations(function: *mut Function, generic: *mut Generic) -> *mut Function;
        fn spReflectionFunction_specializeWithArgTypes(
            function: *mut Function,
            argTypeCount: SlangInt,
            argTypes: *const *mut Type,
        ) -> *mut Function;
        fn spReflectionFunction_isOverloaded(function: *mut Function) -> bool;
        fn spReflectionFunction_getOverloadCount(function: *mut Function) -> u32;
        fn spReflectionFunction_getOverload(function: *mut Function, index: u32) -> *mut Function;
    }
}

/// Oldest Slang release whose exports and vtables match this crate.
pub const MIN_SLANG_VERSION: &str = "2025.6";

static STATE: OnceLock<Result<SlangApi>> = OnceLock::new();

const LIBRARY_PATH_VAR: &str = "SLANG_LIBRARY_PATH";
const SDK_DIR_VAR: &str = "SLANG_DIR";

/// File names the library ships under, newest first.
fn library_names() -> [OsString; 2] {
    [
        libloading::library_filename("slang-compiler"),
        libloading::library_filename("slang"),
    ]
}

/// Every location tried, in order, given the environment.
fn candidates(
    library_path: Option<OsString>,
    sdk_dir: Option<OsString>,
    exe_dir: Option<PathBuf>,
) -> Vec<OsString> {
    let names = library_names();
    let mut paths = Vec::new();

    if let Some(path) = library_path.filter(|p| !p.is_empty()) {
        paths.push(path);
    }
    if let Some(dir) = sdk_dir.filter(|d| !d.is_empty()) {
        let dir = PathBuf::from(dir);
        for sub in ["lib", "bin"] {
            for name in &names {
                paths.push(dir.join(sub).join(name).into_os_string());
            }
        }
    }
    if let Some(dir) = exe_dir {
        for name in &names {
            paths.push(dir.join(name).into_os_string());
        }
    }
    paths.extend(names);
    paths
}

fn open(path: &OsStr) -> Result<SlangApi> {
    let library = unsafe { Library::new(path) }.map_err(|source| SlangcError::LoadError {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;
    unsafe { SlangApi::from_library(library) }
}

fn load() -> Result<SlangApi> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    let paths = candidates(
        std::env::var_os(LIBRARY_PATH_VAR),
        std::env::var_os(SDK_DIR_VAR),
        exe_dir,
    );

    let mut tried = Vec::with_capacity(paths.len());
    for path in &paths {
        match open(path) {
            Ok(api) => {
                log::debug!("loaded Slang from {}", path.to_string_lossy());
                return Ok(api);
            }
            // Loaded, but not a Slang build this crate understands.
            Err(err @ SlangcError::SymbolNotFound { .. }) => {
                log::warn!("{}: {}", path.to_string_lossy(), err);
                return Err(err);
            }
            Err(err) => {
                log::debug!("{}", err);
                tried.push(path.to_string_lossy().into_owned());
            }
        }
    }

    let err = SlangcError::LibraryNotFound { tried };
    log::warn!("{}", err);
    Err(err)
}

/// The loaded library, or why it could not be loaded.
pub fn library() -> std::result::Result<&'static SlangApi, &'static SlangcError> {
    STATE.get_or_init(load).as_ref()
}

/// The loaded library, if any.
#[inline]
pub fn api() -> Option<&'static SlangApi> {
    library().ok()
}

/// Whether the Slang library could be loaded.
pub fn is_available() -> bool {
    api().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let paths = candidates(
            Some(OsString::from("/opt/custom/libslang.so")),
            Some(OsString::from("/opt/slang")),
            Some(PathBuf::from("/usr/local/bin")),
        );
        let names = library_names();

        assert_eq!(paths[0], OsString::from("/opt/custom/libslang.so"));
        assert_eq!(
            paths[1],
            PathBuf::from("/opt/slang/lib").join(&names[0]).into_os_string()
        );
        assert_eq!(
            paths[3],
            PathBuf::from("/opt/slang/bin").join(&names[0]).into_os_string()
        );
        assert_eq!(
            paths[5],
            PathBuf::from("/usr/local/bin").join(&names[0]).into_os_string()
        );
        assert_eq!(&paths[7..], &names[..]);
    }

    #[test]
    fn test_empty_environment_is_ignored() {
        let paths = candidates(Some(OsString::new()), Some(OsString::new()), None);
        assert_eq!(paths, library_names().to_vec());
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(SlangApi::SYMBOLS[0], "slang_createGlobalSession");
        assert!(SlangApi::SYMBOLS.iter().all(|s| !s.is_empty()));
        assert!(SlangApi::SYMBOLS.contains(&"spReflectionTypeLayout_findFieldIndexByName"));
        assert!(SlangApi::SYMBOLS.contains(&"spReflectionFunction_getOverload"));
        assert!(SlangApi::SYMBOLS.contains(&"spReflectionVariable_GetDefaultValueInt"));
    }

    #[test]
    fn test_missing_symbol_names_minimum_version() {
        let err = SlangcError::SymbolNotFound {
            name: "spReflectionFunction_getOverload",
            source: libloading::Error::IncompatibleSize,
        };
        let message = err.to_string();
        assert!(message.contains("spReflectionFunction_getOverload"), "{}", message);
        assert!(message.contains(MIN_SLANG_VERSION), "{}", message);
    }
}
