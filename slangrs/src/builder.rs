//! Session and target configuration

use crate::{CompileTarget, Error, GlobalSession, Result, Session, Status, TargetFlags, to_cstring};
use slangc::{Handle, PreprocessorMacroDesc, SessionDesc, TargetDesc, createSession};
use std::ffi::{CString, c_char};

/// A preprocessor macro definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl Define {
    /// Creates a new preprocessor define
    ///
    /// # Example
    /// ```
    /// use slangrs::Define;
    /// let define = Define::new("DEBUG", "1");
    /// ```
    pub fn new(name: &str, value: &str) -> Self {
        Define {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a define with an empty value
    pub fn flag(name: &str) -> Self {
        Self::new(name, "")
    }

    /// Parses `NAME` or `NAME=VALUE`
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((name, value)) => Self::new(name, value),
            None => Self::flag(text),
        }
    }
}

/// Default matrix layout for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    /// Row-major (Slang's default)
    #[default]
    RowMajor,
    /// Column-major
    ColumnMajor,
}

impl MatrixLayout {
    fn as_raw(&self) -> slangc::SlangMatrixLayoutModeIntegral {
        match self {
            MatrixLayout::RowMajor => slangc::SLANG_MATRIX_LAYOUT_ROW_MAJOR,
            MatrixLayout::ColumnMajor => slangc::SLANG_MATRIX_LAYOUT_COLUMN_MAJOR,
        }
    }
}

/// Floating-point optimization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatingPointMode {
    /// Compiler default
    #[default]
    Default,
    /// Allow reassociation and similar optimizations
    Fast,
    /// Strict IEEE behavior
    Precise,
}

impl FloatingPointMode {
    fn as_raw(&self) -> slangc::SlangFloatingPointModeIntegral {
        match self {
            FloatingPointMode::Default => slangc::SLANG_FLOATING_POINT_MODE_DEFAULT,
            FloatingPointMode::Fast => slangc::SLANG_FLOATING_POINT_MODE_FAST,
            FloatingPointMode::Precise => slangc::SLANG_FLOATING_POINT_MODE_PRECISE,
        }
    }
}

/// `#line` directive emission in textual output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDirectiveMode {
    /// Compiler default
    #[default]
    Default,
    /// Never emit
    None,
    /// C-style `#line`
    Standard,
    /// GLSL-style `#line` with file indices
    Glsl,
}

impl LineDirectiveMode {
    fn as_raw(&self) -> slangc::SlangLineDirectiveModeIntegral {
        match self {
            LineDirectiveMode::Default => slangc::SLANG_LINE_DIRECTIVE_MODE_DEFAULT,
            LineDirectiveMode::None => slangc::SLANG_LINE_DIRECTIVE_MODE_NONE,
            LineDirectiveMode::Standard => slangc::SLANG_LINE_DIRECTIVE_MODE_STANDARD,
            LineDirectiveMode::Glsl => slangc::SLANG_LINE_DIRECTIVE_MODE_GLSL,
        }
    }
}

/// One code generation target of a session
///
/// # Example
/// ```
/// use slangrs::{CompileTarget, TargetBuilder, TargetFlags};
///
/// let target = TargetBuilder::new(CompileTarget::Spirv)
///     .profile("spirv_1_6")
///     .flags(TargetFlags::GENERATE_SPIRV_DIRECTLY);
/// ```
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    format: CompileTarget,
    profile: Option<String>,
    flags: TargetFlags,
    floating_point_mode: FloatingPointMode,
    line_directive_mode: LineDirectiveMode,
    force_glsl_scalar_buffer_layout: bool,
}

impl TargetBuilder {
    /// Creates a target with the default profile for `format`.
    pub fn new(format: CompileTarget) -> Self {
        TargetBuilder {
            format,
            profile: None,
            flags: TargetFlags::default(),
            floating_point_mode: FloatingPointMode::default(),
            line_directive_mode: LineDirectiveMode::default(),
            force_glsl_scalar_buffer_layout: false,
        }
    }

    /// Sets the profile by name (e.g. "spirv_1_5", "sm_6_0").
    pub fn profile(mut self, profile: &str) -> Self {
        self.profile = Some(profile.to_string());
        self
    }

    /// Sets target flags (replaces any existing flags).
    pub fn flags(mut self, flags: TargetFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds target flags (bitwise OR with existing).
    pub fn with_flags(mut self, flags: TargetFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Sets the floating-point mode.
    pub fn floating_point_mode(mut self, mode: FloatingPointMode) -> Self {
        self.floating_point_mode = mode;
        self
    }

    /// Sets the line directive mode.
    pub fn line_directive_mode(mut self, mode: LineDirectiveMode) -> Self {
        self.line_directive_mode = mode;
        self
    }

    /// Uses scalar layout for GLSL buffers.
    pub fn force_glsl_scalar_buffer_layout(mut self, force: bool) -> Self {
        self.force_glsl_scalar_buffer_layout = force;
        self
    }

    /// Returns the output format.
    pub fn format(&self) -> CompileTarget {
        self.format
    }

    /// Resolves the profile name and fills in a raw descriptor.
    fn to_desc(&self, global: &GlobalSession) -> Result<TargetDesc> {
        let profile = match (&self.profile, self.format.default_profile()) {
            (Some(name), _) => global
                .find_profile(name)
                .ok_or_else(|| Error::InvalidParameter(format!("unknown profile: {}", name)))?,
            (None, Some(name)) => global.find_profile(name).unwrap_or(slangc::SLANG_PROFILE_UNKNOWN),
            (None, None) => slangc::SLANG_PROFILE_UNKNOWN,
        };

        Ok(TargetDesc {
            format: self.format.as_raw(),
            profile,
            flags: self.flags.bits(),
            floatingPointMode: self.floating_point_mode.as_raw(),
            lineDirectiveMode: self.line_directive_mode.as_raw(),
            forceGLSLScalarBufferLayout: self.force_glsl_scalar_buffer_layout,
            ..Default::default()
        })
    }
}

impl From<CompileTarget> for TargetBuilder {
    fn from(format: CompileTarget) -> Self {
        TargetBuilder::new(format)
    }
}

/// Builder for a compilation session with fluent API
///
/// # Example
/// ```no_run
/// use slangrs::{CompileTarget, GlobalSession, SessionBuilder};
///
/// let global = GlobalSession::new().unwrap();
/// let session = SessionBuilder::new()
///     .target(CompileTarget::Spirv)
///     .search_path("shaders")
///     .define("USE_FOG", "1")
///     .build(&global)
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    targets: Vec<TargetBuilder>,
    search_paths: Vec<String>,
    defines: Vec<Define>,
    matrix_layout: MatrixLayout,
    allow_glsl_syntax: bool,
    enable_effect_annotations: bool,
    skip_spirv_validation: bool,
}

impl SessionBuilder {
    /// Creates an empty session configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a code generation target.
    pub fn target(mut self, target: impl Into<TargetBuilder>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Adds an `#include` / `import` search path.
    pub fn search_path(mut self, path: &str) -> Self {
        self.search_paths.push(path.to_string());
        self
    }

    /// Adds a preprocessor define.
    pub fn define(mut self, name: &str, value: &str) -> Self {
        self.defines.push(Define::new(name, value));
        self
    }

    /// Adds a pre-built Define.
    pub fn with_define(mut self, define: Define) -> Self {
        self.defines.push(define);
        self
    }

    /// Adds multiple defines from an iterator.
    pub fn defines<I>(mut self, defines: I) -> Self
    where
        I: IntoIterator<Item = Define>,
    {
        self.defines.extend(defines);
        self
    }

    /// Sets the default matrix layout.
    pub fn matrix_layout(mut self, layout: MatrixLayout) -> Self {
        self.matrix_layout = layout;
        self
    }

    /// Accepts GLSL syntax in source files.
    pub fn allow_glsl_syntax(mut self, allow: bool) -> Self {
        self.allow_glsl_syntax = allow;
        self
    }

    /// Parses D3D effect annotations.
    pub fn enable_effect_annotations(mut self, enable: bool) -> Self {
        self.enable_effect_annotations = enable;
        self
    }

    /// Skips SPIR-V validation of the output.
    pub fn skip_spirv_validation(mut self, skip: bool) -> Self {
        self.skip_spirv_validation = skip;
        self
    }

    /// Creates the session.
    ///
    /// Every string is copied to a NUL-terminated buffer that lives until
    /// `createSession` returns.
    pub fn build(&self, global: &GlobalSession) -> Result<Session> {
        let targets = self
            .targets
            .iter()
            .map(|t| t.to_desc(global))
            .collect::<Result<Vec<_>>>()?;

        let search_paths = self
            .search_paths
            .iter()
            .map(|p| to_cstring(p, "search path"))
            .collect::<Result<Vec<CString>>>()?;
        let search_path_ptrs: Vec<*const c_char> = search_paths.iter().map(|p| p.as_ptr()).collect();

        let macro_strings = self
            .defines
            .iter()
            .map(|d| Ok((to_cstring(&d.name, "define name")?, to_cstring(&d.value, "define value")?)))
            .collect::<Result<Vec<(CString, CString)>>>()?;
        let macros: Vec<PreprocessorMacroDesc> = macro_strings
            .iter()
            .map(|(name, value)| PreprocessorMacroDesc {
                name: name.as_ptr(),
                value: value.as_ptr(),
            })
            .collect();

        let desc = SessionDesc {
            targets: targets.as_ptr(),
            targetCount: targets.len() as slangc::SlangInt,
            defaultMatrixLayoutMode: self.matrix_layout.as_raw(),
            searchPaths: search_path_ptrs.as_ptr(),
            searchPathCount: search_path_ptrs.len() as slangc::SlangInt,
            preprocessorMacros: macros.as_ptr(),
            preprocessorMacroCount: macros.len() as slangc::SlangInt,
            enableEffectAnnotations: self.enable_effect_annotations,
            allowGLSLSyntax: self.allow_glsl_syntax,
            skipSPIRVValidation: self.skip_spirv_validation,
            ..Default::default()
        };

        let mut handle = Handle::null();
        let status = Status(unsafe { createSession(global.as_handle(), &desc, &mut handle) });
        if status.is_error() || handle.is_null() {
            return Err(Error::Session { status });
        }
        Ok(unsafe { Session::from_handle(handle, global.clone()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_define_parse() {
        assert_eq!(Define::parse("DEBUG=1"), Define::new("DEBUG", "1"));
        assert_eq!(Define::parse("FAST"), Define::flag("FAST"));
        assert_eq!(Define::parse("EXPR=a=b"), Define::new("EXPR", "a=b"));
    }

    #[test]
    fn test_target_builder_defaults() {
        let target = TargetBuilder::new(CompileTarget::Spirv);
        assert_eq!(target.format(), CompileTarget::Spirv);
        assert_eq!(target.flags, TargetFlags::default());
        assert_eq!(target.profile, None);

        let target = target.profile("spirv_1_6").with_flags(TargetFlags::DUMP_IR);
        assert_eq!(target.profile.as_deref(), Some("spirv_1_6"));
        assert!(target.flags.contains(TargetFlags::GENERATE_SPIRV_DIRECTLY | TargetFlags::DUMP_IR));
    }

    #[test]
    fn test_raw_modes() {
        assert_eq!(MatrixLayout::default().as_raw(), slangc::SessionDesc::default().defaultMatrixLayoutMode);
        assert_eq!(MatrixLayout::ColumnMajor.as_raw(), slangc::SLANG_MATRIX_LAYOUT_COLUMN_MAJOR);
        assert_eq!(FloatingPointMode::Precise.as_raw(), 2);
        assert_eq!(LineDirectiveMode::None.as_raw(), 1);
    }

    #[test]
    fn test_session_builder_collects() {
        let builder = SessionBuilder::new()
            .target(CompileTarget::Spirv)
            .target(TargetBuilder::new(CompileTarget::Hlsl).profile("sm_6_0"))
            .search_path("shaders")
            .define("A", "1")
            .defines([Define::flag("B")]);
        assert_eq!(builder.targets.len(), 2);
        assert_eq!(builder.search_paths, vec!["shaders".to_string()]);
        assert_eq!(builder.defines, vec![Define::new("A", "1"), Define::flag("B")]);
    }
}
