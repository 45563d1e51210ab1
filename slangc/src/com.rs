//! `#[repr(C)]` mirrors of the Slang COM interfaces the façade calls into
//!
//! Slot order follows `slang.h`. Slots the façade never calls are kept as
//! `reserved` placeholders so that later slots land at the right offset.

use std::ffi::{c_char, c_void};

use slangc_proc::com_interface;

use crate::types::*;

com_interface! {
    /// Root of every Slang interface.
    ISlangUnknown {
        fn queryInterface(uuid: *const SlangUUID, outObject: *mut *mut c_void) -> SlangResult;
        fn addRef() -> u32;
        fn release() -> u32;
    }
}

com_interface! {
    ISlangCastable: ISlangUnknown {
        fn castAs() => reserved;
    }
}

com_interface! {
    /// Immutable byte buffer returned for code and diagnostics.
    IBlob: ISlangUnknown {
        fn getBufferPointer() -> *const c_void;
        fn getBufferSize() -> usize;
    }
}

com_interface! {
    /// Process-wide compiler instance.
    IGlobalSession: ISlangUnknown {
        fn createSession(desc: *const SessionDesc, outSession: *mut *mut ISession) -> SlangResult;
        fn findProfile(name: *const c_char) -> SlangProfileIDIntegral;
    }
}

com_interface! {
    /// A scope for loading modules against a fixed set of targets.
    ISession: ISlangUnknown {
        fn getGlobalSession() => reserved;
        fn loadModule() => reserved;
        fn loadModuleFromSource() => reserved;
        fn createCompositeComponentType(
            componentTypes: *const *mut IComponentType,
            componentTypeCount: SlangInt,
            outCompositeComponentType: *mut *mut IComponentType,
            outDiagnostics: *mut *mut IBlob,
        ) -> SlangResult;
        fn specializeType() => reserved;
        fn getTypeLayout() => reserved;
        fn getContainerType() => reserved;
        fn getDynamicType() => reserved;
        fn getTypeRTTIMangledName() => reserved;
        fn getTypeConformanceWitnessMangledName() => reserved;
        fn getTypeConformanceWitnessSequentialID() => reserved;
        fn createCompileRequest() => reserved;
        fn createTypeConformanceComponentType() => reserved;
        fn loadModuleFromIRBlob() => reserved;
        fn getLoadedModuleCount() => reserved;
        fn getLoadedModule() => reserved;
        fn isBinaryModuleUpToDate() => reserved;
        fn loadModuleFromSourceString(
            moduleName: *const c_char,
            path: *const c_char,
            string: *const c_char,
            outDiagnostics: *mut *mut IBlob,
        ) -> *mut IModule;
    }
}

com_interface! {
    /// Anything that can be composed, linked and asked for code.
    IComponentType: ISlangUnknown {
        fn getSession() => reserved;
        fn getLayout(targetIndex: SlangInt, outDiagnostics: *mut *mut IBlob) -> *mut ProgramLayout;
        fn getSpecializationParamCount() => reserved;
        fn getEntryPointCode(
            entryPointIndex: SlangInt,
            targetIndex: SlangInt,
            outCode: *mut *mut IBlob,
            outDiagnostics: *mut *mut IBlob,
        ) -> SlangResult;
        fn getResultAsFileSystem() => reserved;
        fn getEntryPointHash() => reserved;
        fn specialize() => reserved;
        fn link(outLinkedComponentType: *mut *mut IComponentType, outDiagnostics: *mut *mut IBlob) -> SlangResult;
        fn getEntryPointHostCallable() => reserved;
        fn renameEntryPoint() => reserved;
        fn linkWithOptions() => reserved;
        fn getTargetCode(targetIndex: SlangInt, outCode: *mut *mut IBlob, outDiagnostics: *mut *mut IBlob) -> SlangResult;
        fn getTargetMetadata() => reserved;
        fn getEntryPointMetadata(
            entryPointIndex: SlangInt,
            targetIndex: SlangInt,
            outMetadata: *mut *mut IMetadata,
            outDiagnostics: *mut *mut IBlob,
        ) -> SlangResult;
    }
}

com_interface! {
    IModule: IComponentType {
        fn findEntryPointByName(name: *const c_char, outEntryPoint: *mut *mut IEntryPoint) -> SlangResult;
    }
}

com_interface! {
    IEntryPoint: IComponentType {}
}

com_interface! {
    /// Post-compilation facts about an entry point on one target.
    IMetadata: ISlangCastable {
        fn isParameterLocationUsed(
            category: ParameterCategoryIntegral,
            spaceIndex: SlangUInt,
            registerIndex: SlangUInt,
            outUsed: *mut bool,
        ) -> SlangResult;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    const SLOT: usize = size_of::<usize>();

    #[test]
    fn test_vtable_slots() {
        assert_eq!(size_of::<ISlangUnknownVtbl>(), 3 * SLOT);
        assert_eq!(offset_of!(IBlobVtbl, getBufferSize), 4 * SLOT);
        assert_eq!(offset_of!(IGlobalSessionVtbl, findProfile), 4 * SLOT);
        assert_eq!(offset_of!(ISessionVtbl, createCompositeComponentType), 6 * SLOT);
        assert_eq!(offset_of!(ISessionVtbl, loadModuleFromSourceString), 20 * SLOT);
        assert_eq!(offset_of!(IComponentTypeVtbl, getLayout), 4 * SLOT);
        assert_eq!(offset_of!(IComponentTypeVtbl, getEntryPointCode), 6 * SLOT);
        assert_eq!(offset_of!(IComponentTypeVtbl, link), 10 * SLOT);
        assert_eq!(offset_of!(IComponentTypeVtbl, getTargetCode), 14 * SLOT);
        assert_eq!(offset_of!(IComponentTypeVtbl, getEntryPointMetadata), 16 * SLOT);
        assert_eq!(offset_of!(IModuleVtbl, findEntryPointByName), 17 * SLOT);
        assert_eq!(size_of::<IEntryPointVtbl>(), 17 * SLOT);
        assert_eq!(offset_of!(IMetadataVtbl, isParameterLocationUsed), 4 * SLOT);
    }
}
