//! Sessions, modules and component types

use crate::blob::Blob;
use crate::error::message;
use crate::reflect::{ParameterCategory, ProgramLayout};
use crate::{Error, Result, SessionBuilder, Status, to_cstring};
use slangc::com::{IComponentType, IEntryPoint, IGlobalSession, IMetadata, IModule, ISession, ISlangUnknown};
use slangc::{Handle, SlangInt, SlangUInt};
use std::marker::PhantomData;

unsafe fn add_ref<T>(handle: Handle<T>) {
    unsafe {
        ISlangUnknown::addRef(handle.cast::<ISlangUnknown>().as_raw());
    }
}

unsafe fn release<T>(handle: Handle<T>) {
    unsafe {
        slangc::release(handle.cast());
    }
}

/// Top-level Slang compiler instance
///
/// Creating one is expensive (it loads the core module), so create it once
/// and share it. Cloning adds a reference to the same instance.
pub struct GlobalSession {
    handle: Handle<IGlobalSession>,
}

impl GlobalSession {
    /// Loads the Slang library (on first use) and creates a global session.
    pub fn new() -> Result<Self> {
        slangc::library().map_err(Error::Unavailable)?;

        let mut handle = Handle::null();
        let status = Status(unsafe { slangc::createGlobalSession(&mut handle) });
        if status.is_error() || handle.is_null() {
            return Err(Error::GlobalSession { status });
        }
        log::debug!("created global session {:?}", handle);
        Ok(GlobalSession { handle })
    }

    /// Looks up a profile by name, e.g. "sm_6_0" or "spirv_1_5".
    pub fn find_profile(&self, name: &str) -> Option<u32> {
        let name = std::ffi::CString::new(name).ok()?;
        let id = unsafe { slangc::findProfile(self.handle, name.as_ptr()) };
        (id != slangc::SLANG_PROFILE_UNKNOWN).then_some(id)
    }

    /// Creates a session configured by `builder`.
    pub fn create_session(&self, builder: &SessionBuilder) -> Result<Session> {
        builder.build(self)
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<IGlobalSession> {
        self.handle
    }
}

impl Clone for GlobalSession {
    fn clone(&self) -> Self {
        unsafe { add_ref(self.handle) };
        GlobalSession { handle: self.handle }
    }
}

impl Drop for GlobalSession {
    fn drop(&mut self) {
        unsafe { release(self.handle) };
    }
}

impl std::fmt::Debug for GlobalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GlobalSession").field(&self.handle).finish()
    }
}

/// A compilation scope with a fixed set of targets, search paths and defines
pub struct Session {
    handle: Handle<ISession>,
    global: GlobalSession,
}

impl Session {
    /// # Safety
    /// `handle` must be a live ISession whose reference is handed over.
    pub(crate) unsafe fn from_handle(handle: Handle<ISession>, global: GlobalSession) -> Self {
        Session { handle, global }
    }

    /// Compiles `source` into a module.
    ///
    /// The module is owned by the session and lives as long as it does.
    /// Slang caches modules by name and every module loaded through this
    /// call gets the same name, so load one module per session.
    pub fn load_module(&self, source: &str) -> Result<Module<'_>> {
        let source = to_cstring(source, "source")?;
        let mut handle = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe {
            slangc::loadModuleFromSourceString(self.handle, source.as_ptr(), &mut handle, &mut diagnostics)
        });
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };

        if status.is_error() || handle.is_null() {
            return Err(Error::Compilation {
                status,
                message: message(diagnostics, status),
            });
        }
        if let Some(warnings) = &diagnostics {
            log::warn!("{}", warnings);
        }
        Ok(Module {
            handle,
            warnings: diagnostics,
            _session: PhantomData,
        })
    }

    /// Combines components, in order, into one component type.
    pub fn compose(&self, components: &[&dyn Component]) -> Result<ComponentType<'_>> {
        let handles: Vec<Handle<IComponentType>> = components.iter().map(|c| c.component_handle()).collect();
        let mut handle = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe {
            slangc::createCompositeComponent(
                self.handle,
                handles.as_ptr(),
                handles.len() as SlangInt,
                &mut handle,
                &mut diagnostics,
            )
        });
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };

        if status.is_error() || handle.is_null() {
            return Err(Error::Composition {
                status,
                message: message(diagnostics, status),
            });
        }
        Ok(ComponentType {
            handle,
            warnings: diagnostics,
            _session: PhantomData,
        })
    }

    /// The global session this session was created from.
    pub fn global_session(&self) -> &GlobalSession {
        &self.global
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<ISession> {
        self.handle
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe { release(self.handle) };
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Session").field(&self.handle).finish()
    }
}

/// Anything that can take part in a composite: modules, entry points and
/// other component types.
pub trait Component {
    /// The object viewed as an IComponentType.
    fn component_handle(&self) -> Handle<IComponentType>;
}

/// A compiled module, borrowed from its session
#[derive(Debug)]
pub struct Module<'s> {
    handle: Handle<IModule>,
    warnings: Option<String>,
    _session: PhantomData<&'s Session>,
}

impl<'s> Module<'s> {
    /// Looks up an entry point marked with `[shader("...")]`.
    pub fn find_entry_point(&self, name: &str) -> Result<EntryPoint<'s>> {
        let c_name = to_cstring(name, "entry point name")?;
        let mut handle = Handle::null();
        let status = Status(unsafe { slangc::findEntryPointByName(self.handle, c_name.as_ptr(), &mut handle) });
        if status.is_error() || handle.is_null() {
            return Err(Error::EntryPointNotFound {
                name: name.to_string(),
                status,
            });
        }
        Ok(EntryPoint {
            handle,
            _session: PhantomData,
        })
    }

    /// Warnings reported while compiling the module.
    pub fn warnings(&self) -> Option<&str> {
        self.warnings.as_deref()
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<IModule> {
        self.handle
    }
}

impl Component for Module<'_> {
    fn component_handle(&self) -> Handle<IComponentType> {
        self.handle.cast()
    }
}

/// An entry point of a module
#[derive(Debug)]
pub struct EntryPoint<'s> {
    handle: Handle<IEntryPoint>,
    _session: PhantomData<&'s Session>,
}

impl EntryPoint<'_> {
    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<IEntryPoint> {
        self.handle
    }
}

impl Component for EntryPoint<'_> {
    fn component_handle(&self) -> Handle<IComponentType> {
        self.handle.cast()
    }
}

impl Drop for EntryPoint<'_> {
    fn drop(&mut self) {
        unsafe { release(self.handle) };
    }
}

/// A composite or linked program
#[derive(Debug)]
pub struct ComponentType<'s> {
    handle: Handle<IComponentType>,
    warnings: Option<String>,
    _session: PhantomData<&'s Session>,
}

impl<'s> ComponentType<'s> {
    /// Resolves all cross-module references.
    pub fn link(&self) -> Result<ComponentType<'s>> {
        let mut handle = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe { slangc::linkProgram(self.handle, &mut handle, &mut diagnostics) });
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };

        if status.is_error() || handle.is_null() {
            return Err(Error::Link {
                status,
                message: message(diagnostics, status),
            });
        }
        Ok(ComponentType {
            handle,
            warnings: diagnostics,
            _session: PhantomData,
        })
    }

    /// Code for the whole program on the session's first target.
    pub fn target_code(&self) -> Result<Blob> {
        let mut code = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe { slangc::getTargetCode(self.handle, &mut code, &mut diagnostics) });
        self.code_result(status, code, diagnostics)
    }

    /// Code for one entry point on one target.
    pub fn entry_point_code(&self, entry_point: usize, target: usize) -> Result<Blob> {
        let mut code = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe {
            slangc::getEntryPointCode(
                self.handle,
                entry_point as SlangInt,
                target as SlangInt,
                &mut code,
                &mut diagnostics,
            )
        });
        self.code_result(status, code, diagnostics)
    }

    fn code_result(
        &self,
        status: Status,
        code: Handle<slangc::com::IBlob>,
        diagnostics: Handle<slangc::com::IBlob>,
    ) -> Result<Blob> {
        let code = unsafe { Blob::from_handle(code) };
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };
        match code {
            Some(code) if status.is_success() => {
                if let Some(warnings) = diagnostics {
                    log::warn!("{}", warnings);
                }
                Ok(code)
            }
            _ => Err(Error::CodeGeneration {
                status,
                message: message(diagnostics, status),
            }),
        }
    }

    /// Parameter layout for one target.
    ///
    /// The layout is owned by this component type.
    pub fn layout(&self, target: usize) -> Result<ProgramLayout<'_>> {
        let mut layout = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe { slangc::getLayout(self.handle, target as SlangInt, &mut layout, &mut diagnostics) });
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };

        if status.is_error() || layout.is_null() {
            return Err(Error::Reflection {
                status,
                message: message(diagnostics, status),
            });
        }
        Ok(unsafe { ProgramLayout::from_handle(layout) })
    }

    /// Which parameter locations one entry point actually uses.
    pub fn entry_point_metadata(&self, entry_point: usize, target: usize) -> Result<Metadata> {
        let mut handle = Handle::null();
        let mut diagnostics = Handle::null();
        let status = Status(unsafe {
            slangc::IComponentType_getEntryPointMetadata(self.handle, entry_point, target, &mut handle, &mut diagnostics)
        });
        let diagnostics = unsafe { Blob::take_diagnostics(diagnostics) };

        if status.is_error() || handle.is_null() {
            return Err(Error::Reflection {
                status,
                message: message(diagnostics, status),
            });
        }
        Ok(Metadata { handle })
    }

    /// Warnings reported while composing or linking.
    pub fn warnings(&self) -> Option<&str> {
        self.warnings.as_deref()
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<IComponentType> {
        self.handle
    }
}

impl Component for ComponentType<'_> {
    fn component_handle(&self) -> Handle<IComponentType> {
        self.handle
    }
}

impl Drop for ComponentType<'_> {
    fn drop(&mut self) {
        unsafe { release(self.handle) };
    }
}

/// Per-entry-point usage information
#[derive(Debug)]
pub struct Metadata {
    handle: Handle<IMetadata>,
}

impl Metadata {
    /// Whether the entry point touches the given binding location.
    pub fn is_parameter_location_used(
        &self,
        category: ParameterCategory,
        space: u64,
        register: u64,
    ) -> Result<bool> {
        let mut used = false;
        let status = Status(unsafe {
            slangc::IMetadata_isParameterLocationUsed(
                self.handle,
                category.as_raw(),
                space as SlangUInt,
                register as SlangUInt,
                &mut used,
            )
        });
        if status.is_error() {
            return Err(Error::Reflection {
                status,
                message: format!("no usage information for {:?} {} space {}", category, register, space),
            });
        }
        Ok(used)
    }
}

impl Drop for Metadata {
    fn drop(&mut self) {
        unsafe { release(self.handle) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompileTarget;
    use crate::reflect::{ResourceAccess, Stage, TypeKind};
    use pretty_assertions::assert_eq;

    const SHADER: &str = r#"
        struct Params {
            float scale;
            uint count;
        };

        ConstantBuffer<Params> params;
        StructuredBuffer<float> input;
        RWStructuredBuffer<float> output;

        [shader("compute")]
        [numthreads(64, 1, 1)]
        void main(uint3 id : SV_DispatchThreadID) {
            if (id.x < params.count)
                output[id.x] = input[id.x] * params.scale;
        }
    "#;

    fn session(global: &GlobalSession) -> Session {
        SessionBuilder::new()
            .target(CompileTarget::Spirv)
            .build(global)
            .unwrap()
    }

    #[test]
    fn test_global_session_clone_shares_handle() {
        if !crate::is_available() {
            return;
        }
        let global = GlobalSession::new().unwrap();
        let other = global.clone();
        assert_eq!(global.as_handle(), other.as_handle());
        drop(global);
        assert!(other.find_profile("spirv_1_5").is_some());
        assert_eq!(other.find_profile("no_such_profile"), None);
    }

    #[test]
    fn test_pipeline_and_reflection() {
        if !crate::is_available() {
            return;
        }
        let global = GlobalSession::new().unwrap();
        let session = session(&global);
        let module = session.load_module(SHADER).unwrap();
        let entry = module.find_entry_point("main").unwrap();
        let program = session.compose(&[&module, &entry]).unwrap().link().unwrap();

        let code = program.entry_point_code(0, 0).unwrap();
        assert!(!code.is_empty());

        let layout = program.layout(0).unwrap();
        let names: Vec<_> = layout.parameters().map(|p| p.name().unwrap_or("")).collect();
        assert_eq!(names, vec!["params", "input", "output"]);

        let params = layout.parameter(0).unwrap().type_layout().unwrap();
        assert_eq!(params.kind(), TypeKind::ConstantBuffer);
        let fields = params.element_type_layout().unwrap();
        assert_eq!(fields.field_count(), 2);
        assert_eq!(fields.find_field_index("count"), Some(1));
        assert_eq!(fields.find_field_index("missing"), None);
        let count = fields.field(1).unwrap();
        assert_eq!(count.offset(ParameterCategory::Uniform), 4);

        let output = layout.parameter(2).unwrap().ty().unwrap();
        assert_eq!(output.resource_access(), ResourceAccess::ReadWrite);

        assert_eq!(layout.entry_point_count(), 1);
        let main = layout.find_entry_point("main").unwrap();
        assert_eq!(main.stage(), Stage::Compute);
        assert_eq!(main.compute_thread_group_size(), [64, 1, 1]);
    }

    #[test]
    fn test_metadata_reports_used_bindings() {
        if !crate::is_available() {
            return;
        }
        let global = GlobalSession::new().unwrap();
        let session = session(&global);
        let module = session.load_module(SHADER).unwrap();
        let entry = module.find_entry_point("main").unwrap();
        let program = session.compose(&[&module, &entry]).unwrap().link().unwrap();

        let layout = program.layout(0).unwrap();
        let output = layout.parameter(2).unwrap();
        let metadata = program.entry_point_metadata(0, 0).unwrap();
        let used = metadata
            .is_parameter_location_used(
                ParameterCategory::DescriptorTableSlot,
                output.binding_space_for(ParameterCategory::DescriptorTableSlot) as u64,
                output.offset(ParameterCategory::DescriptorTableSlot) as u64,
            )
            .unwrap();
        assert!(used);
    }

    #[test]
    fn test_load_module_failure() {
        if !crate::is_available() {
            return;
        }
        let global = GlobalSession::new().unwrap();
        let session = session(&global);
        let err = session.load_module("this is not slang").unwrap_err();
        assert!(matches!(err, Error::Compilation { .. }));
        assert!(err.status().is_some_and(|s| s.is_error()));
    }
}
