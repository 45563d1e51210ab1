//! One-shot compilation API

use crate::{
    Blob, CompileTarget, Define, GlobalSession, MatrixLayout, Result, SessionBuilder, TargetBuilder, TargetFlags,
};

/// Result of a successful compilation
#[derive(Debug)]
pub struct CompileResult {
    /// The generated target code
    pub code: Blob,
    /// Any warning messages from the compiler (if present)
    pub warnings: Option<String>,
}

/// Builder for single-entry-point compilation with fluent API
///
/// Runs the whole pipeline: session, module, entry point, composite, link
/// and target code.
///
/// # Example
/// ```no_run
/// use slangrs::{CompileBuilder, CompileTarget};
///
/// let source = r#"
///     [shader("fragment")]
///     float4 main() : SV_Target { return float4(1, 0, 0, 1); }
/// "#;
///
/// let result = CompileBuilder::new(source, "main", CompileTarget::Spirv)
///     .profile("spirv_1_6")
///     .define("DEBUG", "1")
///     .search_path("shaders")
///     .compile()
///     .unwrap();
/// ```
pub struct CompileBuilder<'a> {
    source: &'a str,
    entry_point: String,
    target: TargetBuilder,
    search_paths: Vec<String>,
    defines: Vec<Define>,
    matrix_layout: MatrixLayout,
    global: Option<&'a GlobalSession>,
}

impl<'a> CompileBuilder<'a> {
    /// Creates a new compile builder with the required parameters.
    ///
    /// # Arguments
    /// * `source` - The Slang source code
    /// * `entry_point` - The name of a `[shader("...")]` function
    /// * `target` - The output format
    pub fn new(source: &'a str, entry_point: &str, target: CompileTarget) -> Self {
        CompileBuilder {
            source,
            entry_point: entry_point.to_string(),
            target: TargetBuilder::new(target),
            search_paths: Vec::new(),
            defines: Vec::new(),
            matrix_layout: MatrixLayout::default(),
            global: None,
        }
    }

    /// Reuses an existing global session instead of creating one.
    pub fn global_session(mut self, global: &'a GlobalSession) -> Self {
        self.global = Some(global);
        self
    }

    /// Sets the profile by name.
    pub fn profile(mut self, profile: &str) -> Self {
        self.target = self.target.profile(profile);
        self
    }

    /// Sets target flags (replaces any existing flags).
    pub fn flags(mut self, flags: TargetFlags) -> Self {
        self.target = self.target.flags(flags);
        self
    }

    /// Adds a preprocessor define.
    pub fn define(mut self, name: &str, value: &str) -> Self {
        self.defines.push(Define::new(name, value));
        self
    }

    /// Adds a preprocessor define flag (empty value).
    pub fn define_flag(mut self, name: &str) -> Self {
        self.defines.push(Define::flag(name));
        self
    }

    /// Adds multiple preprocessor defines from an iterator.
    pub fn defines<I>(mut self, defines: I) -> Self
    where
        I: IntoIterator<Item = Define>,
    {
        self.defines.extend(defines);
        self
    }

    /// Adds an `#include` / `import` search path.
    pub fn search_path(mut self, path: &str) -> Self {
        self.search_paths.push(path.to_string());
        self
    }

    /// Sets the matrix layout to column-major.
    pub fn column_major_matrices(mut self) -> Self {
        self.matrix_layout = MatrixLayout::ColumnMajor;
        self
    }

    /// Compiles the entry point.
    ///
    /// Returns the generated code and any warnings collected along the way.
    pub fn compile(self) -> Result<CompileResult> {
        let owned;
        let global = match self.global {
            Some(global) => global,
            None => {
                owned = GlobalSession::new()?;
                &owned
            }
        };

        let session = self
            .search_paths
            .iter()
            .fold(SessionBuilder::new().target(self.target), |builder, path| {
                builder.search_path(path)
            })
            .defines(self.defines)
            .matrix_layout(self.matrix_layout)
            .build(global)?;

        let module = session.load_module(self.source)?;
        let entry_point = module.find_entry_point(&self.entry_point)?;
        let composite = session.compose(&[&module, &entry_point])?;
        let program = composite.link()?;
        let code = program.target_code()?;

        let warnings: Vec<&str> = [module.warnings(), composite.warnings(), program.warnings()]
            .into_iter()
            .flatten()
            .collect();
        let warnings = (!warnings.is_empty()).then(|| warnings.join("\n"));

        log::debug!("compiled '{}': {} bytes", self.entry_point, code.len());
        Ok(CompileResult { code, warnings })
    }
}

/// Convenience function for simple compilation.
///
/// # Example
/// ```no_run
/// use slangrs::{compile, CompileTarget};
///
/// let source = r#"
///     [shader("fragment")]
///     float4 main() : SV_Target { return float4(1, 0, 0, 1); }
/// "#;
/// let spirv = compile(source, "main", CompileTarget::Spirv).unwrap();
/// ```
pub fn compile(source: &str, entry_point: &str, target: CompileTarget) -> Result<Blob> {
    CompileBuilder::new(source, entry_point, target)
        .compile()
        .map(|r| r.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SPIRV_MAGIC: u32 = 0x0723_0203;

    const COMPUTE: &str = r#"
        RWStructuredBuffer<float> output;

        [shader("compute")]
        [numthreads(8, 1, 1)]
        void main(uint3 id : SV_DispatchThreadID) {
        #ifdef DOUBLE
            output[id.x] = float(id.x) * 2.0;
        #else
            output[id.x] = float(id.x);
        #endif
        }
    "#;

    #[test]
    fn test_compile_simple_shader() {
        if !crate::is_available() {
            return;
        }
        let spirv = compile(COMPUTE, "main", CompileTarget::Spirv).unwrap();
        let words = spirv.to_words().expect("SPIR-V is a whole number of words");
        assert_eq!(words[0], SPIRV_MAGIC, "Output should start with SPIR-V magic");
    }

    #[test]
    fn test_compile_with_defines() {
        if !crate::is_available() {
            return;
        }
        let plain = CompileBuilder::new(COMPUTE, "main", CompileTarget::Hlsl)
            .compile()
            .unwrap();
        let doubled = CompileBuilder::new(COMPUTE, "main", CompileTarget::Hlsl)
            .define("DOUBLE", "1")
            .compile()
            .unwrap();
        assert!(plain.code.as_str().is_ok(), "HLSL output is text");
        assert_ne!(plain.code.as_bytes(), doubled.code.as_bytes());
    }

    #[test]
    fn test_compile_error() {
        if !crate::is_available() {
            return;
        }
        let result = compile("void main() { undefined_function(); }", "main", CompileTarget::Spirv);
        match result {
            Err(Error::Compilation { status, message }) => {
                assert!(status.is_error());
                assert!(message.contains("undefined_function"), "diagnostics: {}", message);
            }
            other => panic!("expected a compilation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_entry_point() {
        if !crate::is_available() {
            return;
        }
        let result = compile(COMPUTE, "does_not_exist", CompileTarget::Spirv);
        assert!(matches!(result, Err(Error::EntryPointNotFound { ref name, .. }) if name == "does_not_exist"));
    }

    #[test]
    fn test_unknown_profile() {
        if !crate::is_available() {
            return;
        }
        let result = CompileBuilder::new(COMPUTE, "main", CompileTarget::Spirv)
            .profile("not_a_profile")
            .compile();
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
