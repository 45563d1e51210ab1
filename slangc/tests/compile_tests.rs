//! Integration tests for slangc
//!
//! These tests need the Slang shared library (`slang-compiler` or `slang`).
//! Point `SLANG_LIBRARY_PATH` or `SLANG_DIR` at an SDK, or put the library next
//! to the test binary. Without it every test prints a notice and passes.

#![allow(unsafe_op_in_unsafe_fn)]

use slangc::com::*;
use slangc::*;
use std::ffi::{CStr, c_void};
use std::ptr;

/// Helper to get blob data
unsafe fn get_blob_data(blob: Handle<IBlob>) -> Vec<u8> {
    let mut data: *const c_void = ptr::null();
    let mut size = 0usize;
    if getBlobSlice(blob, &mut data, &mut size) != SLANG_OK {
        return Vec::new();
    }
    std::slice::from_raw_parts(data as *const u8, size).to_vec()
}

/// Helper to release any Slang object
unsafe fn release_object<T>(object: Handle<T>) {
    release(object.cast());
}

/// Helper to get the diagnostics text from a blob
unsafe fn get_error_message(blob: Handle<IBlob>) -> String {
    String::from_utf8_lossy(&get_blob_data(blob)).to_string()
}

unsafe fn name_of(name: *const std::ffi::c_char) -> String {
    if name.is_null() {
        return String::new();
    }
    CStr::from_ptr(name).to_string_lossy().into_owned()
}

fn slang_available() -> bool {
    match library() {
        Ok(_) => true,
        Err(err) => {
            println!("Skipping: {}", err);
            false
        }
    }
}

// Compute shader with one of each common resource kind
const COMPUTE_SHADER: &[u8] = b"
struct Params {
    float scale;
    uint count;
};

ConstantBuffer<Params> params;
StructuredBuffer<float> input;
RWStructuredBuffer<float> output;

[shader(\"compute\")]
[numthreads(64, 1, 1)]
void main(uint3 tid : SV_DispatchThreadID) {
    if (tid.x < params.count)
        output[tid.x] = input[tid.x] * params.scale;
}
\0";

// Shader with a type error
const BAD_SHADER: &[u8] = b"
[shader(\"compute\")]
[numthreads(1, 1, 1)]
void main() {
    float4 x = undefined_function();
}
\0";

// Nested uniform array plus an arrayed texture binding
const ARRAY_SHADER: &[u8] = b"
struct Weights {
    float arr[2][3];
    float bias;
};

ConstantBuffer<Weights> weights;
Texture2D textures[4];
SamplerState linearSampler;
RWStructuredBuffer<float> output;

[shader(\"compute\")]
[numthreads(1, 1, 1)]
void main(uint3 tid : SV_DispatchThreadID) {
    float sampled = textures[tid.x % 4].SampleLevel(linearSampler, float2(0, 0), 0).x;
    output[tid.x] = weights.arr[1][2] * weights.bias + sampled;
}
\0";

const SPIRV_MAGIC: u32 = 0x0723_0203;

/// A global session plus a session targeting SPIR-V 1.5.
struct Compiler {
    global: Handle<IGlobalSession>,
    session: Handle<ISession>,
}

impl Compiler {
    unsafe fn new() -> Self {
        let mut global = Handle::null();
        let result = createGlobalSession(&mut global);
        assert_eq!(result, SLANG_OK, "createGlobalSession failed: 0x{:08x}", result);
        assert!(!global.is_null());

        let profile = findProfile(global, c"spirv_1_5".as_ptr());
        assert_ne!(profile, SLANG_PROFILE_UNKNOWN, "spirv_1_5 should be a known profile");

        let target = TargetDesc {
            format: SLANG_SPIRV,
            profile,
            ..Default::default()
        };
        let desc = SessionDesc {
            targets: &target,
            targetCount: 1,
            ..Default::default()
        };

        let mut session = Handle::null();
        let result = createSession(global, &desc, &mut session);
        assert_eq!(result, SLANG_OK, "createSession failed: 0x{:08x}", result);

        Compiler { global, session }
    }

    /// Loads, composes with `main` and links. Panics with diagnostics on failure.
    ///
    /// The module stays owned by the session; only the entry point and the
    /// linked program are the caller's to release.
    unsafe fn link(&self, source: &[u8]) -> (Handle<IModule>, Handle<IEntryPoint>, Handle<IComponentType>) {
        let mut module = Handle::null();
        let mut diagnostics = Handle::null();
        let result = loadModuleFromSourceString(
            self.session,
            source.as_ptr() as *const _,
            &mut module,
            &mut diagnostics,
        );
        if result != SLANG_OK {
            let err_msg = get_error_message(diagnostics);
            release_object(diagnostics);
            panic!("loadModuleFromSourceString failed: {}", err_msg);
        }
        release_object(diagnostics);

        let mut entry_point = Handle::null();
        let result = findEntryPointByName(module, c"main".as_ptr(), &mut entry_point);
        assert_eq!(result, SLANG_OK, "findEntryPointByName failed: 0x{:08x}", result);

        let components = [module.cast::<IComponentType>(), entry_point.cast()];
        let mut composite = Handle::null();
        let mut diagnostics = Handle::null();
        let result = createCompositeComponent(
            self.session,
            components.as_ptr(),
            components.len() as SlangInt,
            &mut composite,
            &mut diagnostics,
        );
        if result != SLANG_OK {
            let err_msg = get_error_message(diagnostics);
            release_object(diagnostics);
            panic!("createCompositeComponent failed: {}", err_msg);
        }
        release_object(diagnostics);

        let mut linked = Handle::null();
        let mut diagnostics = Handle::null();
        let result = linkProgram(composite, &mut linked, &mut diagnostics);
        if result != SLANG_OK {
            let err_msg = get_error_message(diagnostics);
            release_object(diagnostics);
            panic!("linkProgram failed: {}", err_msg);
        }
        release_object(diagnostics);
        release_object(composite);

        (module, entry_point, linked)
    }
}

impl Drop for Compiler {
    fn drop(&mut self) {
        unsafe {
            release_object(self.session);
            release_object(self.global);
        }
    }
}

#[test]
fn test_compile_compute_shader_to_spirv() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (module, entry_point, linked) = compiler.link(COMPUTE_SHADER);

        let mut code = Handle::null();
        let mut diagnostics = Handle::null();
        let result = getTargetCode(linked, &mut code, &mut diagnostics);
        if result != SLANG_OK {
            let err_msg = get_error_message(diagnostics);
            release_object(diagnostics);
            panic!("getTargetCode failed: {}", err_msg);
        }

        let bytecode = get_blob_data(code);
        assert!(bytecode.len() >= 20, "SPIR-V should at least hold a header");
        assert_eq!(bytecode.len() % 4, 0, "SPIR-V is a stream of words");
        let magic = u32::from_le_bytes([bytecode[0], bytecode[1], bytecode[2], bytecode[3]]);
        assert_eq!(magic, SPIRV_MAGIC);

        println!("Compute shader compiled successfully: {} bytes", bytecode.len());

        release_object(code);
        release_object(diagnostics);
        release_object(linked);
        release_object(entry_point);
    }
}

#[test]
fn test_entry_point_code() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (module, entry_point, linked) = compiler.link(COMPUTE_SHADER);

        let mut code = Handle::null();
        let result = getEntryPointCode(linked, 0, 0, &mut code, ptr::null_mut());
        assert_eq!(result, SLANG_OK, "getEntryPointCode failed: 0x{:08x}", result);

        let bytecode = get_blob_data(code);
        assert!(!bytecode.is_empty());
        println!("Entry point code: {} bytes", bytecode.len());

        release_object(code);
        release_object(linked);
        release_object(entry_point);
    }
}

#[test]
fn test_compile_error_reports_diagnostics() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();

        let mut module = Handle::null();
        let mut diagnostics = Handle::null();
        let result = loadModuleFromSourceString(
            compiler.session,
            BAD_SHADER.as_ptr() as *const _,
            &mut module,
            &mut diagnostics,
        );

        assert_eq!(result, SLANG_FAIL);
        assert!(module.is_null());

        let err_msg = get_error_message(diagnostics);
        assert!(
            err_msg.contains("undefined_function"),
            "diagnostics should name the bad identifier: {}",
            err_msg
        );
        println!("Got expected error: {}", err_msg.lines().next().unwrap_or(""));

        release_object(diagnostics);
    }
}

#[test]
fn test_missing_entry_point() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (module, entry_point, linked) = compiler.link(COMPUTE_SHADER);

        let mut missing = Handle::null();
        let result = findEntryPointByName(module, c"not_there".as_ptr(), &mut missing);
        assert!(failed(result), "unexpected success for a missing entry point");

        release_object(linked);
        release_object(entry_point);
    }
}

#[test]
fn test_reflect_compute_shader() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (module, entry_point, linked) = compiler.link(COMPUTE_SHADER);

        let mut layout = Handle::null();
        let mut diagnostics = Handle::null();
        let result = getLayout(linked, 0, &mut layout, &mut diagnostics);
        assert_eq!(result, SLANG_OK, "getLayout failed: {}", get_error_message(diagnostics));
        release_object(diagnostics);

        // Global parameters, in declaration order
        assert_eq!(ProgramLayout_getParameterCount(layout), 3);
        let names: Vec<String> = (0..3)
            .map(|i| name_of(VariableLayoutReflection_getName(ProgramLayout_getParameterByIndex(layout, i))))
            .collect();
        assert_eq!(names, ["params", "input", "output"]);

        let params = ProgramLayout_getParameterByIndex(layout, 0);
        let params_type = VariableLayoutReflection_getType(params);
        assert_eq!(TypeReflection_getKind(params_type), SLANG_TYPE_KIND_CONSTANT_BUFFER);

        // Fields of the constant buffer's element type
        let element_layout = TypeLayoutReflection_getElementTypeLayout(VariableLayoutReflection_getTypeLayout(params));
        assert_eq!(TypeLayoutReflection_getFieldCount(element_layout), 2);
        let scale = TypeLayoutReflection_getFieldByIndex(element_layout, 0);
        let count = TypeLayoutReflection_getFieldByIndex(element_layout, 1);
        assert_eq!(name_of(VariableLayoutReflection_getName(scale)), "scale");
        assert_eq!(name_of(VariableLayoutReflection_getName(count)), "count");
        assert_eq!(
            VariableLayoutReflection_getOffset(count, SLANG_PARAMETER_CATEGORY_UNIFORM),
            4
        );
        assert_eq!(
            TypeLayoutReflection_findFieldIndexByName(element_layout, c"count".as_ptr()),
            1
        );

        let output = ProgramLayout_getParameterByIndex(layout, 2);
        let output_type = VariableLayoutReflection_getType(output);
        assert_eq!(TypeReflection_getKind(output_type), SLANG_TYPE_KIND_RESOURCE);
        assert_eq!(
            TypeReflection_getResourceAccess(output_type),
            SLANG_RESOURCE_ACCESS_READ_WRITE
        );

        // Entry point
        assert_eq!(ProgramLayout_getEntryPointCount(layout), 1);
        let main = ProgramLayout_getEntryPointByIndex(layout, 0);
        assert_eq!(name_of(EntryPointReflection_getName(main)), "main");
        assert_eq!(EntryPointReflection_getStage(main), SLANG_STAGE_COMPUTE);
        assert_eq!(ProgramLayout_findEntryPointReflectionByName(layout, c"main".as_ptr()), main);

        let mut sizes = [0 as SlangUInt; 3];
        EntryPointReflection_getComputeThreadGroupSize(main, 3, sizes.as_mut_ptr());
        assert_eq!(sizes, [64, 1, 1]);

        println!("Reflected {} parameters and entry point `main`", names.len());

        release_object(linked);
        release_object(entry_point);
    }
}

#[test]
fn test_entry_point_metadata_reports_used_bindings() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (module, entry_point, linked) = compiler.link(COMPUTE_SHADER);

        let mut metadata = Handle::null();
        let result = IComponentType_getEntryPointMetadata(linked, 0, 0, &mut metadata, ptr::null_mut());
        assert_eq!(result, SLANG_OK, "getEntryPointMetadata failed: 0x{:08x}", result);
        assert!(!metadata.is_null());

        // Nothing is bound this far out
        let mut used = true;
        let result = IMetadata_isParameterLocationUsed(
            metadata,
            SLANG_PARAMETER_CATEGORY_DESCRIPTOR_TABLE_SLOT,
            0,
            1000,
            &mut used,
        );
        assert_eq!(result, SLANG_OK);
        assert!(!used);

        release_object(metadata);
        release_object(linked);
        release_object(entry_point);
    }
}

#[test]
fn test_reflect_nested_arrays_and_binding_ranges() {
    if !slang_available() {
        return;
    }

    unsafe {
        let compiler = Compiler::new();
        let (_module, entry_point, linked) = compiler.link(ARRAY_SHADER);

        let mut layout = Handle::null();
        let mut diagnostics = Handle::null();
        let result = getLayout(linked, 0, &mut layout, &mut diagnostics);
        assert_eq!(result, SLANG_OK, "getLayout failed: {}", get_error_message(diagnostics));
        release_object(diagnostics);

        // weights.arr is float[2][3]
        let weights = ProgramLayout_getParameterByIndex(layout, 0);
        assert_eq!(name_of(VariableLayoutReflection_getName(weights)), "weights");
        let element_layout = TypeLayoutReflection_getElementTypeLayout(VariableLayoutReflection_getTypeLayout(weights));
        let arr = TypeLayoutReflection_getFieldByIndex(element_layout, 0);
        assert_eq!(name_of(VariableLayoutReflection_getName(arr)), "arr");

        let arr_type = VariableLayoutReflection_getType(arr);
        assert!(TypeReflection_isArray(arr_type));
        assert_eq!(TypeReflection_getTotalArrayElementCount(arr_type), 6);

        let leaf = TypeReflection_unwrapArray(arr_type);
        assert!(!leaf.is_null());
        assert!(!TypeReflection_isArray(leaf));
        assert_eq!(TypeReflection_getKind(leaf), SLANG_TYPE_KIND_SCALAR);
        assert_eq!(TypeReflection_getScalarType(leaf), SLANG_SCALAR_TYPE_FLOAT32);

        // The layout side walks the same levels
        let arr_layout = VariableLayoutReflection_getTypeLayout(arr);
        assert!(TypeLayoutReflection_isArray(arr_layout));
        assert_eq!(TypeLayoutReflection_getTotalElementCount(arr_layout), 6);
        let leaf_layout = TypeLayoutReflection_unwrapArray(arr_layout);
        assert_eq!(TypeLayoutReflection_getKind(leaf_layout), SLANG_TYPE_KIND_SCALAR);
        assert_eq!(TypeLayoutReflection_getSize(leaf_layout, SLANG_PARAMETER_CATEGORY_UNIFORM), 4);

        // A non-array has nothing to count
        let bias = TypeLayoutReflection_getFieldByIndex(element_layout, 1);
        assert_eq!(TypeReflection_getTotalArrayElementCount(VariableLayoutReflection_getType(bias)), 0);

        // Every binding range reports a type and at least one binding
        let globals = ProgramLayout_getGlobalParamsTypeLayout(layout);
        let range_count = TypeLayoutReflection_getBindingRangeCount(globals);
        assert!(range_count > 0);
        let ranges: Vec<(SlangBindingTypeIntegral, SlangInt)> = (0..range_count)
            .map(|i| {
                (
                    TypeLayoutReflection_getBindingRangeType(globals, i),
                    TypeLayoutReflection_getBindingRangeBindingCount(globals, i),
                )
            })
            .filter(|&(binding_type, count)| binding_type != SLANG_BINDING_TYPE_UNKNOWN && count >= 1)
            .collect();
        assert_eq!(ranges.len() as SlangInt, range_count, "ranges: {:?}", ranges);
        assert!(
            ranges.iter().any(|&(_, count)| count == 4),
            "textures[4] should be one range of four bindings: {:?}",
            ranges
        );
        for i in 0..range_count {
            assert!(!TypeLayoutReflection_getBindingRangeLeafTypeLayout(globals, i).is_null());
        }

        release_object(linked);
        release_object(entry_point);
    }
}
