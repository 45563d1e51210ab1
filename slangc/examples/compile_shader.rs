//! Example: Compile a Slang compute shader to SPIR-V through the C ABI
//!
//! Run with: cargo run --example compile_shader
//!
//! Make sure the Slang library can be found: set SLANG_LIBRARY_PATH or
//! SLANG_DIR, or place the library next to the binary.

#![allow(unsafe_op_in_unsafe_fn)]

use slangc::com::*;
use slangc::*;
use std::ffi::{CStr, c_void};
use std::ptr;

const SHADER_SOURCE: &str = r#"
// Scales every element of a buffer
struct Params {
    float scale;
    uint count;
};

ConstantBuffer<Params> params;
RWStructuredBuffer<float> data;

[shader("compute")]
[numthreads(64, 1, 1)]
void main(uint3 tid : SV_DispatchThreadID) {
    if (tid.x < params.count)
        data[tid.x] *= params.scale;
}
"#;

unsafe fn print_diagnostics(stage: &str, result: SlangResult, diagnostics: Handle<IBlob>) {
    eprintln!("{} FAILED (SlangResult: 0x{:08x})", stage, result as u32);

    let mut data: *const c_void = ptr::null();
    let mut size = 0usize;
    if getBlobSlice(diagnostics, &mut data, &mut size) == SLANG_OK {
        let message = std::slice::from_raw_parts(data as *const u8, size);
        eprintln!("\nDiagnostics:");
        eprintln!("{}", String::from_utf8_lossy(message));
    }
    release(diagnostics.cast());
}

fn main() {
    println!("Slang Shader Compiler Example");
    println!("=============================\n");

    let source = format!("{}\0", SHADER_SOURCE);

    println!("Shader source ({} bytes):", source.len());
    println!("----------------------------------------");
    for (i, line) in SHADER_SOURCE.lines().enumerate() {
        println!("{:3}: {}", i + 1, line);
    }
    println!("----------------------------------------\n");

    unsafe {
        let mut global = Handle::null();
        let result = createGlobalSession(&mut global);
        if result != SLANG_OK {
            eprintln!("Could not create a global session (SlangResult: 0x{:08x})", result as u32);
            if let Err(err) = library() {
                eprintln!("{}", err);
            }
            std::process::exit(1);
        }

        let profile = findProfile(global, c"spirv_1_5".as_ptr());
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
        if result != SLANG_OK {
            eprintln!("createSession FAILED (SlangResult: 0x{:08x})", result as u32);
            std::process::exit(1);
        }

        println!("Compiling shader...");
        println!("  Entry point: main");
        println!("  Target: SPIR-V (profile spirv_1_5 = {})\n", profile);

        let mut module = Handle::null();
        let mut diagnostics = Handle::null();
        let result = loadModuleFromSourceString(session, source.as_ptr() as *const _, &mut module, &mut diagnostics);
        if result != SLANG_OK {
            print_diagnostics("Loading", result, diagnostics);
            std::process::exit(1);
        }

        let mut entry_point = Handle::null();
        let result = findEntryPointByName(module, c"main".as_ptr(), &mut entry_point);
        if result != SLANG_OK {
            eprintln!("Entry point `main` not found (SlangResult: 0x{:08x})", result as u32);
            std::process::exit(1);
        }

        let components = [module.cast::<IComponentType>(), entry_point.cast()];
        let mut composite = Handle::null();
        let mut diagnostics = Handle::null();
        let result = createCompositeComponent(
            session,
            components.as_ptr(),
            components.len() as SlangInt,
            &mut composite,
            &mut diagnostics,
        );
        if result != SLANG_OK {
            print_diagnostics("Composing", result, diagnostics);
            std::process::exit(1);
        }

        let mut linked = Handle::null();
        let mut diagnostics = Handle::null();
        let result = linkProgram(composite, &mut linked, &mut diagnostics);
        if result != SLANG_OK {
            print_diagnostics("Linking", result, diagnostics);
            std::process::exit(1);
        }

        let mut code = Handle::null();
        let mut diagnostics = Handle::null();
        let result = getTargetCode(linked, &mut code, &mut diagnostics);
        if result != SLANG_OK {
            print_diagnostics("Code generation", result, diagnostics);
            std::process::exit(1);
        }

        let mut data: *const c_void = ptr::null();
        let mut size = 0usize;
        if getBlobSlice(code, &mut data, &mut size) != SLANG_OK {
            eprintln!("Compilation produced no code");
            std::process::exit(1);
        }
        let bytecode = std::slice::from_raw_parts(data as *const u8, size);

        println!("Compilation SUCCEEDED!");
        println!("  SPIR-V size: {} bytes ({} words)", size, size / 4);
        println!("\nFirst 32 bytes of SPIR-V:");
        for (i, chunk) in bytecode[..size.min(32)].chunks(16).enumerate() {
            print!("  {:04x}: ", i * 16);
            for byte in chunk {
                print!("{:02x} ", byte);
            }
            println!();
        }

        let mut layout = Handle::null();
        if getLayout(linked, 0, &mut layout, ptr::null_mut()) == SLANG_OK {
            println!("\nParameters:");
            for i in 0..ProgramLayout_getParameterCount(layout) {
                let parameter = ProgramLayout_getParameterByIndex(layout, i);
                let name = VariableLayoutReflection_getName(parameter);
                let name = if name.is_null() {
                    "<unnamed>".into()
                } else {
                    CStr::from_ptr(name).to_string_lossy()
                };
                println!(
                    "  {} (binding {}, space {})",
                    name,
                    VariableLayoutReflection_getBindingIndex(parameter),
                    VariableLayoutReflection_getBindingSpace(parameter)
                );
            }
        }

        release(code.cast());
        release(linked.cast());
        release(composite.cast());
        release(entry_point.cast());
        release(session.cast());
        release(global.cast());
    }
}
