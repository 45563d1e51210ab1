//! Target flags

use bitflags::bitflags;

bitflags! {
    /// SLANG_TARGET_FLAG_* bits for a code generation target
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TargetFlags: u32 {
        /// Map parameter blocks to register spaces (D3D12) or descriptor sets
        const PARAMETER_BLOCKS_USE_REGISTER_SPACES = slangc::SLANG_TARGET_FLAG_PARAMETER_BLOCKS_USE_REGISTER_SPACES;

        /// Emit code for every entry point in one output
        const GENERATE_WHOLE_PROGRAM = slangc::SLANG_TARGET_FLAG_GENERATE_WHOLE_PROGRAM;

        /// Dump intermediate representation while compiling
        const DUMP_IR = slangc::SLANG_TARGET_FLAG_DUMP_IR;

        /// Emit SPIR-V directly instead of going through GLSL
        const GENERATE_SPIRV_DIRECTLY = slangc::SLANG_TARGET_FLAG_GENERATE_SPIRV_DIRECTLY;
    }
}

impl Default for TargetFlags {
    fn default() -> Self {
        TargetFlags::from_bits_retain(slangc::K_DEFAULT_TARGET_FLAGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generates_spirv_directly() {
        let flags = TargetFlags::default();
        assert!(flags.contains(TargetFlags::GENERATE_SPIRV_DIRECTLY));
        assert!(!flags.contains(TargetFlags::DUMP_IR));
        assert_eq!(flags.bits(), slangc::TargetDesc::default().flags);
    }

    #[test]
    fn test_flags_combine() {
        let flags = TargetFlags::GENERATE_WHOLE_PROGRAM | TargetFlags::PARAMETER_BLOCKS_USE_REGISTER_SPACES;
        assert_eq!(flags.bits(), (1 << 8) | (1 << 4));
    }
}
