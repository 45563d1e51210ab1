//! Compile targets (output formats)

use std::fmt;
use std::str::FromStr;

/// Code generation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileTarget {
    /// GLSL source
    Glsl,
    /// HLSL source
    Hlsl,
    /// SPIR-V binary
    Spirv,
    /// SPIR-V assembly
    SpirvAsm,
    /// DirectX shader bytecode
    Dxbc,
    /// DXBC assembly
    DxbcAsm,
    /// DirectX intermediate language
    Dxil,
    /// DXIL assembly
    DxilAsm,
    /// C source
    CSource,
    /// C++ source
    CppSource,
    /// CUDA source
    CudaSource,
    /// PTX
    Ptx,
    /// Metal shading language source
    Metal,
    /// Metal library
    MetalLib,
    /// Metal library assembly
    MetalLibAsm,
    /// WebGPU shading language source
    Wgsl,
}

impl CompileTarget {
    /// Every supported target, in `SlangCompileTarget` order.
    pub const ALL: [CompileTarget; 16] = [
        CompileTarget::Glsl,
        CompileTarget::Hlsl,
        CompileTarget::Spirv,
        CompileTarget::SpirvAsm,
        CompileTarget::Dxbc,
        CompileTarget::DxbcAsm,
        CompileTarget::Dxil,
        CompileTarget::DxilAsm,
        CompileTarget::CSource,
        CompileTarget::CppSource,
        CompileTarget::CudaSource,
        CompileTarget::Ptx,
        CompileTarget::Metal,
        CompileTarget::MetalLib,
        CompileTarget::MetalLibAsm,
        CompileTarget::Wgsl,
    ];

    /// Returns the `SlangCompileTarget` value
    pub fn as_raw(&self) -> slangc::SlangCompileTargetIntegral {
        match self {
            CompileTarget::Glsl => slangc::SLANG_GLSL,
            CompileTarget::Hlsl => slangc::SLANG_HLSL,
            CompileTarget::Spirv => slangc::SLANG_SPIRV,
            CompileTarget::SpirvAsm => slangc::SLANG_SPIRV_ASM,
            CompileTarget::Dxbc => slangc::SLANG_DXBC,
            CompileTarget::DxbcAsm => slangc::SLANG_DXBC_ASM,
            CompileTarget::Dxil => slangc::SLANG_DXIL,
            CompileTarget::DxilAsm => slangc::SLANG_DXIL_ASM,
            CompileTarget::CSource => slangc::SLANG_C_SOURCE,
            CompileTarget::CppSource => slangc::SLANG_CPP_SOURCE,
            CompileTarget::CudaSource => slangc::SLANG_CUDA_SOURCE,
            CompileTarget::Ptx => slangc::SLANG_PTX,
            CompileTarget::Metal => slangc::SLANG_METAL,
            CompileTarget::MetalLib => slangc::SLANG_METAL_LIB,
            CompileTarget::MetalLibAsm => slangc::SLANG_METAL_LIB_ASM,
            CompileTarget::Wgsl => slangc::SLANG_WGSL,
        }
    }

    /// Returns the command-line name (as used by `slangc -target`)
    pub fn name(&self) -> &'static str {
        match self {
            CompileTarget::Glsl => "glsl",
            CompileTarget::Hlsl => "hlsl",
            CompileTarget::Spirv => "spirv",
            CompileTarget::SpirvAsm => "spirv-asm",
            CompileTarget::Dxbc => "dxbc",
            CompileTarget::DxbcAsm => "dxbc-asm",
            CompileTarget::Dxil => "dxil",
            CompileTarget::DxilAsm => "dxil-asm",
            CompileTarget::CSource => "c",
            CompileTarget::CppSource => "cpp",
            CompileTarget::CudaSource => "cuda",
            CompileTarget::Ptx => "ptx",
            CompileTarget::Metal => "metal",
            CompileTarget::MetalLib => "metallib",
            CompileTarget::MetalLibAsm => "metallib-asm",
            CompileTarget::Wgsl => "wgsl",
        }
    }

    /// Profile used when none is given
    pub fn default_profile(&self) -> Option<&'static str> {
        match self {
            CompileTarget::Spirv | CompileTarget::SpirvAsm => Some("spirv_1_5"),
            CompileTarget::Glsl => Some("glsl_450"),
            CompileTarget::Dxbc | CompileTarget::DxbcAsm => Some("sm_5_0"),
            CompileTarget::Dxil | CompileTarget::DxilAsm => Some("sm_6_0"),
            CompileTarget::Hlsl => Some("sm_5_0"),
            _ => None,
        }
    }

    /// Returns true if the output is text rather than binary
    pub fn is_text(&self) -> bool {
        !matches!(
            self,
            CompileTarget::Spirv | CompileTarget::Dxbc | CompileTarget::Dxil | CompileTarget::MetalLib
        )
    }

    /// Conventional file extension for the output
    pub fn extension(&self) -> &'static str {
        match self {
            CompileTarget::Glsl => "glsl",
            CompileTarget::Hlsl => "hlsl",
            CompileTarget::Spirv => "spv",
            CompileTarget::SpirvAsm => "spvasm",
            CompileTarget::Dxbc => "dxbc",
            CompileTarget::Dxil => "dxil",
            CompileTarget::DxbcAsm | CompileTarget::DxilAsm => "asm",
            CompileTarget::CSource => "c",
            CompileTarget::CppSource => "cpp",
            CompileTarget::CudaSource => "cu",
            CompileTarget::Ptx => "ptx",
            CompileTarget::Metal => "metal",
            CompileTarget::MetalLib => "metallib",
            CompileTarget::MetalLibAsm => "metallib-asm",
            CompileTarget::Wgsl => "wgsl",
        }
    }
}

impl TryFrom<slangc::SlangCompileTargetIntegral> for CompileTarget {
    type Error = crate::Error;

    fn try_from(value: slangc::SlangCompileTargetIntegral) -> crate::Result<Self> {
        CompileTarget::ALL
            .into_iter()
            .find(|t| t.as_raw() == value)
            .ok_or_else(|| crate::Error::InvalidParameter(format!("unsupported compile target {}", value)))
    }
}

impl FromStr for CompileTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let lower = s.to_ascii_lowercase();
        let lower = match lower.as_str() {
            "spv" => "spirv",
            "spirv-assembly" => "spirv-asm",
            "msl" => "metal",
            other => other,
        };
        CompileTarget::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| crate::Error::InvalidParameter(format!("unknown target: {}", s)))
    }
}

impl fmt::Display for CompileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_names() {
        assert_eq!(CompileTarget::Spirv.name(), "spirv");
        assert_eq!("SPIRV".parse::<CompileTarget>().unwrap(), CompileTarget::Spirv);
        assert_eq!("spv".parse::<CompileTarget>().unwrap(), CompileTarget::Spirv);
        assert_eq!("dxil-asm".parse::<CompileTarget>().unwrap(), CompileTarget::DxilAsm);
        assert!("vs_5_0".parse::<CompileTarget>().is_err());
    }

    #[test]
    fn test_target_values() {
        assert_eq!(CompileTarget::Spirv.as_raw(), 6);
        assert_eq!(CompileTarget::Wgsl.as_raw(), 28);
        for target in CompileTarget::ALL {
            assert_eq!(CompileTarget::try_from(target.as_raw()).unwrap(), target);
            assert_eq!(target.name().parse::<CompileTarget>().unwrap(), target);
        }
        assert!(CompileTarget::try_from(slangc::SLANG_HOST_VM).is_err());
    }

    #[test]
    fn test_text_targets() {
        assert!(!CompileTarget::Spirv.is_text());
        assert!(CompileTarget::SpirvAsm.is_text());
        assert!(CompileTarget::Hlsl.is_text());
    }
}
