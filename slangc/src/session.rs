//! Session and compilation exports
//!
//! Each export reinterprets its handles as the Slang interface they name and
//! makes one virtual call. Only `createGlobalSession` needs the loaded
//! library; everything else dispatches through the object's own vtable.

use std::ffi::{CStr, c_char, c_void};

use crate::com::*;
use crate::handle::Handle;
use crate::loader;
use crate::types::*;

const MODULE_NAME: &CStr = c"shader_module";
const MODULE_PATH: &CStr = c"shader.slang";

#[cfg(feature = "debug-logs")]
unsafe fn dump_session_desc(desc: *const SessionDesc) {
    if desc.is_null() {
        log::trace!("  session desc = null");
        return;
    }
    let session = &*desc;
    log::trace!("  session @{:p}", desc);
    log::trace!("    structureSize            = {}", session.structureSize);
    log::trace!("    targets                  = {:p}", session.targets);
    log::trace!("    targetCount              = {}", session.targetCount);
    log::trace!("    flags                    = 0x{:x}", session.flags);
    log::trace!("    defaultMatrixLayoutMode  = {}", session.defaultMatrixLayoutMode);
    log::trace!("    searchPaths              = {:p}", session.searchPaths);
    log::trace!("    searchPathCount          = {}", session.searchPathCount);
    log::trace!("    preprocessorMacros       = {:p}", session.preprocessorMacros);
    log::trace!("    preprocessorMacroCount   = {}", session.preprocessorMacroCount);
    log::trace!("    fileSystem               = {:p}", session.fileSystem);
    log::trace!("    enableEffectAnnotations  = {}", session.enableEffectAnnotations);
    log::trace!("    allowGLSLSyntax          = {}", session.allowGLSLSyntax);
    log::trace!("    compilerOptionEntries    = {:p}", session.compilerOptionEntries);
    log::trace!("    compilerOptionEntryCount = {}", session.compilerOptionEntryCount);
    log::trace!("    skipSPIRVValidation      = {}", session.skipSPIRVValidation);

    if session.targets.is_null() {
        return;
    }
    for index in 0..session.targetCount.max(0) as usize {
        let target = &*session.targets.add(index);
        log::trace!("  targets[{}] @{:p}", index, target);
        log::trace!("    structureSize               = {}", target.structureSize);
        log::trace!("    format                      = {}", target.format);
        log::trace!("    profile                     = {}", target.profile);
        log::trace!("    flags                       = 0x{:x}", target.flags);
        log::trace!("    floatingPointMode           = {}", target.floatingPointMode);
        log::trace!("    lineDirectiveMode           = {}", target.lineDirectiveMode);
        log::trace!("    forceGLSLScalarBufferLayout = {}", target.forceGLSLScalarBufferLayout);
        log::trace!("    compilerOptionEntries       = {:p}", target.compilerOptionEntries);
        log::trace!("    compilerOptionEntryCount    = {}", target.compilerOptionEntryCount);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn createGlobalSession(
    outGlobalSession: *mut Handle<IGlobalSession>,
) -> SlangResult {
    debug_log!("[SESSION] createGlobalSession(out={:?})", outGlobalSession);
    match loader::api() {
        Some(api) => debug_log_return!(
            "[SESSION] createGlobalSession",
            "0x{:08x}",
            (api.slang_createGlobalSession)(SLANG_API_VERSION, outGlobalSession.cast())
        ),
        None => SLANG_E_NOT_AVAILABLE,
    }
}

/// The descriptor is handed to Slang as-is; it is not copied or validated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn createSession(
    inGlobalSession: Handle<IGlobalSession>,
    inSessionDesc: *const SessionDesc,
    outSession: *mut Handle<ISession>,
) -> SlangResult {
    debug_log!(
        "[SESSION] createSession(global={:?}, desc={:?})",
        inGlobalSession,
        inSessionDesc
    );
    #[cfg(feature = "debug-logs")]
    dump_session_desc(inSessionDesc);

    debug_log_return!(
        "[SESSION] createSession",
        "0x{:08x}",
        IGlobalSession::createSession(inGlobalSession.as_raw(), inSessionDesc, outSession.cast())
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn findProfile(
    inGlobalSession: Handle<IGlobalSession>,
    profile: *const c_char,
) -> SlangProfileIDIntegral {
    debug_log_return!(
        "[SESSION] findProfile",
        "{}",
        IGlobalSession::findProfile(inGlobalSession.as_raw(), profile)
    )
}

/// Compiles `sourceBuffer` as a module named `shader_module` at the virtual
/// path `shader.slang`. Succeeds exactly when a module comes back.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn loadModuleFromSourceString(
    inSession: Handle<ISession>,
    sourceBuffer: *const c_char,
    outModule: *mut Handle<IModule>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log!("[SESSION] loadModuleFromSourceString(session={:?})", inSession);
    let module = ISession::loadModuleFromSourceString(
        inSession.as_raw(),
        MODULE_NAME.as_ptr(),
        MODULE_PATH.as_ptr(),
        sourceBuffer,
        outDiagnostics.cast(),
    );
    *outModule = Handle::from_raw(module);
    debug_log!("[SESSION] loadModuleFromSourceString -> {:?}", module);

    if module.is_null() { SLANG_FAIL } else { SLANG_OK }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn findEntryPointByName(
    inModule: Handle<IModule>,
    name: *const c_char,
    outEntryPoint: *mut Handle<IEntryPoint>,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] findEntryPointByName",
        "0x{:08x}",
        IModule::findEntryPointByName(inModule.as_raw(), name, outEntryPoint.cast())
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn createCompositeComponent(
    inSession: Handle<ISession>,
    inComponentTypes: *const Handle<IComponentType>,
    componentTypeCount: SlangInt,
    outComposite: *mut Handle<IComponentType>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log!(
        "[SESSION] createCompositeComponent(session={:?}, count={})",
        inSession,
        componentTypeCount
    );
    debug_log_return!(
        "[SESSION] createCompositeComponent",
        "0x{:08x}",
        ISession::createCompositeComponentType(
            inSession.as_raw(),
            inComponentTypes.cast(),
            componentTypeCount,
            outComposite.cast(),
            outDiagnostics.cast(),
        )
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn linkProgram(
    inCompiledProgram: Handle<IComponentType>,
    outLinkedProgram: *mut Handle<IComponentType>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] linkProgram",
        "0x{:08x}",
        IComponentType::link(
            inCompiledProgram.as_raw(),
            outLinkedProgram.cast(),
            outDiagnostics.cast()
        )
    )
}

/// Succeeds exactly when a layout comes back.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getLayout(
    inProgram: Handle<IComponentType>,
    targetIndex: SlangInt,
    outLayout: *mut Handle<ProgramLayout>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    let layout =
        IComponentType::getLayout(inProgram.as_raw(), targetIndex, outDiagnostics.cast());
    *outLayout = Handle::from_raw(layout);
    debug_log!("[SESSION] getLayout(target={}) -> {:?}", targetIndex, layout);

    if layout.is_null() { SLANG_FAIL } else { SLANG_OK }
}

/// Code for the whole program on the session's first target.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getTargetCode(
    linkedProgram: Handle<IComponentType>,
    outOutput: *mut Handle<IBlob>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] getTargetCode",
        "0x{:08x}",
        IComponentType::getTargetCode(
            linkedProgram.as_raw(),
            0,
            outOutput.cast(),
            outDiagnostics.cast()
        )
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn getEntryPointCode(
    linkedProgram: Handle<IComponentType>,
    entryPointIndex: SlangInt,
    targetIndex: SlangInt,
    outCode: *mut Handle<IBlob>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] getEntryPointCode",
        "0x{:08x}",
        IComponentType::getEntryPointCode(
            linkedProgram.as_raw(),
            entryPointIndex,
            targetIndex,
            outCode.cast(),
            outDiagnostics.cast()
        )
    )
}

/// Exposes a blob's bytes. Fails, with null/0 outputs, for a null blob;
/// fails, with whatever the blob reported, when either the pointer or the
/// size is zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getBlobSlice(
    inBlob: Handle<IBlob>,
    pointer: *mut *const c_void,
    size: *mut usize,
) -> SlangResult {
    if inBlob.is_null() {
        *pointer = std::ptr::null();
        *size = 0;
        return SLANG_FAIL;
    }
    let blob = inBlob.as_raw();
    *pointer = IBlob::getBufferPointer(blob);
    *size = IBlob::getBufferSize(blob);
    debug_log!("[SESSION] getBlobSlice -> ({:?}, {})", *pointer, *size);

    if !(*pointer).is_null() && *size != 0 {
        SLANG_OK
    } else {
        SLANG_FAIL
    }
}

/// Drops one reference. Returns the remaining count, or 0 for a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn release(unknown: Handle<ISlangUnknown>) -> u32 {
    if unknown.is_null() {
        return 0;
    }
    debug_log_return!(
        "[SESSION] release",
        "{}",
        ISlangUnknown::release(unknown.as_raw())
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn IComponentType_getEntryPointMetadata(
    componentType: Handle<IComponentType>,
    entryPointIndex: usize,
    targetIndex: usize,
    outMetadata: *mut Handle<IMetadata>,
    outDiagnostics: *mut Handle<IBlob>,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] IComponentType_getEntryPointMetadata",
        "0x{:08x}",
        IComponentType::getEntryPointMetadata(
            componentType.as_raw(),
            entryPointIndex as SlangInt,
            targetIndex as SlangInt,
            outMetadata.cast(),
            outDiagnostics.cast()
        )
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn IMetadata_isParameterLocationUsed(
    inMetadata: Handle<IMetadata>,
    category: ParameterCategoryIntegral,
    spaceIndex: SlangUInt,
    registerIndex: SlangUInt,
    outUsed: *mut bool,
) -> SlangResult {
    debug_log_return!(
        "[SESSION] IMetadata_isParameterLocationUsed",
        "0x{:08x}",
        IMetadata::isParameterLocationUsed(
            inMetadata.as_raw(),
            category,
            spaceIndex,
            registerIndex,
            outUsed
        )
    )
}
