//! Parameter categories and binding types

/// The kind of resource a parameter consumes (what it is bound by)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ParameterCategory {
    /// No resources
    None = 0,
    /// More than one category
    Mixed = 1,
    /// Constant buffer register (`b`)
    ConstantBuffer = 2,
    /// Shader resource register (`t`)
    ShaderResource = 3,
    /// Unordered access register (`u`)
    UnorderedAccess = 4,
    /// Varying input (vertex attributes, interpolants)
    VaryingInput = 5,
    /// Varying output
    VaryingOutput = 6,
    /// Sampler register (`s`)
    SamplerState = 7,
    /// Bytes of uniform data
    Uniform = 8,
    /// Vulkan descriptor binding
    DescriptorTableSlot = 9,
    /// Specialization constant id
    SpecializationConstant = 10,
    /// Push constant range
    PushConstantBuffer = 11,
    /// Register space / descriptor set
    RegisterSpace = 12,
    /// Generic type parameter slot
    Generic = 13,
    /// Ray payload
    RayPayload = 14,
    /// Hit attributes
    HitAttributes = 15,
    /// Callable payload
    CallablePayload = 16,
    /// Shader record
    ShaderRecord = 17,
    /// Existential type parameter
    ExistentialTypeParam = 18,
    /// Existential object parameter
    ExistentialObjectParam = 19,
    /// Register space of a sub-element
    SubElementRegisterSpace = 20,
    /// Subpass input attachment
    Subpass = 21,
    /// Metal argument buffer element
    MetalArgumentBufferElement = 22,
    /// Metal `[[attribute]]`
    MetalAttribute = 23,
    /// Metal payload
    MetalPayload = 24,
}

impl ParameterCategory {
    /// Returns the `SlangParameterCategory` value
    pub fn as_raw(&self) -> slangc::ParameterCategoryIntegral {
        *self as u32
    }

    /// Short name, as printed in binding listings
    pub fn name(&self) -> &'static str {
        match self {
            ParameterCategory::None => "none",
            ParameterCategory::Mixed => "mixed",
            ParameterCategory::ConstantBuffer => "constant-buffer",
            ParameterCategory::ShaderResource => "shader-resource",
            ParameterCategory::UnorderedAccess => "unordered-access",
            ParameterCategory::VaryingInput => "varying-input",
            ParameterCategory::VaryingOutput => "varying-output",
            ParameterCategory::SamplerState => "sampler-state",
            ParameterCategory::Uniform => "uniform",
            ParameterCategory::DescriptorTableSlot => "descriptor-table-slot",
            ParameterCategory::SpecializationConstant => "specialization-constant",
            ParameterCategory::PushConstantBuffer => "push-constant-buffer",
            ParameterCategory::RegisterSpace => "register-space",
            ParameterCategory::Generic => "generic",
            ParameterCategory::RayPayload => "ray-payload",
            ParameterCategory::HitAttributes => "hit-attributes",
            ParameterCategory::CallablePayload => "callable-payload",
            ParameterCategory::ShaderRecord => "shader-record",
            ParameterCategory::ExistentialTypeParam => "existential-type-param",
            ParameterCategory::ExistentialObjectParam => "existential-object-param",
            ParameterCategory::SubElementRegisterSpace => "sub-element-register-space",
            ParameterCategory::Subpass => "subpass",
            ParameterCategory::MetalArgumentBufferElement => "metal-argument-buffer-element",
            ParameterCategory::MetalAttribute => "metal-attribute",
            ParameterCategory::MetalPayload => "metal-payload",
        }
    }
}

impl From<u32> for ParameterCategory {
    fn from(value: u32) -> Self {
        if value < slangc::SLANG_PARAMETER_CATEGORY_COUNT {
            // Discriminants are contiguous from 0
            unsafe { std::mem::transmute::<u32, ParameterCategory>(value) }
        } else {
            ParameterCategory::None
        }
    }
}

impl std::fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor kind of a binding range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingType {
    /// Unknown
    Unknown,
    /// Sampler
    Sampler,
    /// Texture
    Texture,
    /// Constant buffer
    ConstantBuffer,
    /// Parameter block
    ParameterBlock,
    /// Typed buffer
    TypedBuffer,
    /// Raw (byte address or structured) buffer
    RawBuffer,
    /// Combined texture and sampler
    CombinedTextureSampler,
    /// Input render target (subpass input)
    InputRenderTarget,
    /// Inline uniform data
    InlineUniformData,
    /// Ray tracing acceleration structure
    RayTracingAccelerationStructure,
    /// Varying input
    VaryingInput,
    /// Varying output
    VaryingOutput,
    /// Existential value
    ExistentialValue,
    /// Push constant
    PushConstant,
    /// Read-write texture
    MutableTexture,
    /// Read-write typed buffer
    MutableTypedBuffer,
    /// Read-write raw buffer
    MutableRawBuffer,
}

impl BindingType {
    /// Returns true for read-write bindings
    pub fn is_mutable(&self) -> bool {
        matches!(
            self,
            BindingType::MutableTexture | BindingType::MutableTypedBuffer | BindingType::MutableRawBuffer
        )
    }
}

impl From<u32> for BindingType {
    fn from(value: u32) -> Self {
        match value {
            slangc::SLANG_BINDING_TYPE_SAMPLER => BindingType::Sampler,
            slangc::SLANG_BINDING_TYPE_TEXTURE => BindingType::Texture,
            slangc::SLANG_BINDING_TYPE_CONSTANT_BUFFER => BindingType::ConstantBuffer,
            slangc::SLANG_BINDING_TYPE_PARAMETER_BLOCK => BindingType::ParameterBlock,
            slangc::SLANG_BINDING_TYPE_TYPED_BUFFER => BindingType::TypedBuffer,
            slangc::SLANG_BINDING_TYPE_RAW_BUFFER => BindingType::RawBuffer,
            slangc::SLANG_BINDING_TYPE_COMBINED_TEXTURE_SAMPLER => BindingType::CombinedTextureSampler,
            slangc::SLANG_BINDING_TYPE_INPUT_RENDER_TARGET => BindingType::InputRenderTarget,
            slangc::SLANG_BINDING_TYPE_INLINE_UNIFORM_DATA => BindingType::InlineUniformData,
            slangc::SLANG_BINDING_TYPE_RAY_TRACING_ACCELERATION_STRUCTURE => {
                BindingType::RayTracingAccelerationStructure
            }
            slangc::SLANG_BINDING_TYPE_VARYING_INPUT => BindingType::VaryingInput,
            slangc::SLANG_BINDING_TYPE_VARYING_OUTPUT => BindingType::VaryingOutput,
            slangc::SLANG_BINDING_TYPE_EXISTENTIAL_VALUE => BindingType::ExistentialValue,
            slangc::SLANG_BINDING_TYPE_PUSH_CONSTANT => BindingType::PushConstant,
            slangc::SLANG_BINDING_TYPE_MUTABLE_TEXTURE => BindingType::MutableTexture,
            slangc::SLANG_BINDING_TYPE_MUTABLE_TYPED_BUFFER => BindingType::MutableTypedBuffer,
            slangc::SLANG_BINDING_TYPE_MUTABLE_RAW_BUFFER => BindingType::MutableRawBuffer,
            _ => BindingType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_category_round_trip() {
        for raw in 0..slangc::SLANG_PARAMETER_CATEGORY_COUNT {
            assert_eq!(ParameterCategory::from(raw).as_raw(), raw);
        }
        assert_eq!(ParameterCategory::from(999), ParameterCategory::None);
        assert_eq!(ParameterCategory::from(8), ParameterCategory::Uniform);
        assert_eq!(ParameterCategory::DescriptorTableSlot.to_string(), "descriptor-table-slot");
    }

    #[test]
    fn test_binding_type() {
        assert_eq!(BindingType::from(0x106), BindingType::MutableRawBuffer);
        assert!(BindingType::from(0x106).is_mutable());
        assert_eq!(BindingType::from(2), BindingType::Texture);
        assert!(!BindingType::Texture.is_mutable());
        assert_eq!(BindingType::from(0xdead), BindingType::Unknown);
    }
}
