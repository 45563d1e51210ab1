//! Scalar aliases, status codes, enum constants and descriptor structures
//!
//! Field-for-field redeclarations of the Slang C types that cross the ABI.
//! Enumerations are kept as fixed-width integers plus constants so that any
//! value the library hands back can be represented.

use std::ffi::{c_char, c_void};

pub type SlangInt = i64;
pub type SlangUInt = u64;
pub type SlangUInt32 = u32;
pub type SlangResult = i32;

pub type SlangCompileTargetIntegral = i32;
pub type SlangProfileIDIntegral = u32;
pub type SlangTargetFlags = u32;
pub type SlangFloatingPointModeIntegral = u32;
pub type SlangLineDirectiveModeIntegral = u32;
pub type SessionFlags = u32;
pub type SlangMatrixLayoutModeIntegral = u32;
pub type SlangLayoutRulesIntegral = SlangUInt32;
pub type ModifierIDIntegral = SlangUInt32;
pub type ParameterCategoryIntegral = u32;
pub type SlangImageFormatIntegral = SlangUInt32;
pub type SlangStageIntegral = SlangUInt32;
pub type SlangTypeKindIntegral = u32;
pub type SlangScalarTypeIntegral = u32;
pub type SlangResourceShapeIntegral = u32;
pub type SlangResourceAccessIntegral = u32;
pub type SlangBindingTypeIntegral = SlangUInt32;
pub type GenericArgTypeIntegral = i32;
pub type CompilerOptionNameIntegral = i32;
pub type CompilerOptionValueKindIntegral = i32;

// ============================================================================
// Status codes
// ============================================================================

pub const SLANG_FACILITY_WIN_GENERAL: i32 = 0;
pub const SLANG_FACILITY_WIN_INTERFACE: i32 = 4;
pub const SLANG_FACILITY_WIN_API: i32 = 7;
pub const SLANG_FACILITY_BASE: i32 = 0x200;
pub const SLANG_FACILITY_CORE: i32 = SLANG_FACILITY_BASE;

/// Builds a failing `SlangResult` from a facility and a code.
pub const fn make_error(facility: i32, code: i32) -> SlangResult {
    (facility << 16) | code | (0x80000000u32 as i32)
}

#[inline]
pub const fn succeeded(result: SlangResult) -> bool {
    result >= 0
}

#[inline]
pub const fn failed(result: SlangResult) -> bool {
    result < 0
}

pub const SLANG_OK: SlangResult = 0;
pub const SLANG_FAIL: SlangResult = make_error(SLANG_FACILITY_WIN_GENERAL, 0x4005);

pub const SLANG_E_NOT_IMPLEMENTED: SlangResult = make_error(SLANG_FACILITY_WIN_GENERAL, 0x4001);
pub const SLANG_E_NO_INTERFACE: SlangResult = make_error(SLANG_FACILITY_WIN_GENERAL, 0x4002);
pub const SLANG_E_ABORT: SlangResult = make_error(SLANG_FACILITY_WIN_GENERAL, 0x4004);
pub const SLANG_E_INVALID_HANDLE: SlangResult = make_error(SLANG_FACILITY_WIN_API, 6);
pub const SLANG_E_INVALID_ARG: SlangResult = make_error(SLANG_FACILITY_WIN_API, 0x57);
pub const SLANG_E_OUT_OF_MEMORY: SlangResult = make_error(SLANG_FACILITY_WIN_API, 0xe);
pub const SLANG_E_BUFFER_TOO_SMALL: SlangResult = make_error(SLANG_FACILITY_CORE, 1);
pub const SLANG_E_UNINITIALIZED: SlangResult = make_error(SLANG_FACILITY_CORE, 2);
pub const SLANG_E_PENDING: SlangResult = make_error(SLANG_FACILITY_CORE, 3);
pub const SLANG_E_CANNOT_OPEN: SlangResult = make_error(SLANG_FACILITY_CORE, 4);
pub const SLANG_E_NOT_FOUND: SlangResult = make_error(SLANG_FACILITY_CORE, 5);
pub const SLANG_E_INTERNAL_FAIL: SlangResult = make_error(SLANG_FACILITY_CORE, 6);
pub const SLANG_E_NOT_AVAILABLE: SlangResult = make_error(SLANG_FACILITY_CORE, 7);
pub const SLANG_E_TIME_OUT: SlangResult = make_error(SLANG_FACILITY_CORE, 8);

pub const SLANG_ERROR_INSUFFICIENT_BUFFER: SlangResult = SLANG_E_BUFFER_TOO_SMALL;
pub const SLANG_ERROR_INVALID_PARAMETER: SlangResult = SLANG_E_INVALID_ARG;

/// Version passed to `slang_createGlobalSession`.
pub const SLANG_API_VERSION: SlangInt = 0;

// ============================================================================
// Enumerations
// ============================================================================

pub const SLANG_TARGET_UNKNOWN: SlangCompileTargetIntegral = 0;
pub const SLANG_TARGET_NONE: SlangCompileTargetIntegral = 1;
pub const SLANG_GLSL: SlangCompileTargetIntegral = 2;
pub const SLANG_GLSL_VULKAN_DEPRECATED: SlangCompileTargetIntegral = 3;
pub const SLANG_GLSL_VULKAN_ONE_DESC_DEPRECATED: SlangCompileTargetIntegral = 4;
pub const SLANG_HLSL: SlangCompileTargetIntegral = 5;
pub const SLANG_SPIRV: SlangCompileTargetIntegral = 6;
pub const SLANG_SPIRV_ASM: SlangCompileTargetIntegral = 7;
pub const SLANG_DXBC: SlangCompileTargetIntegral = 8;
pub const SLANG_DXBC_ASM: SlangCompileTargetIntegral = 9;
pub const SLANG_DXIL: SlangCompileTargetIntegral = 10;
pub const SLANG_DXIL_ASM: SlangCompileTargetIntegral = 11;
pub const SLANG_C_SOURCE: SlangCompileTargetIntegral = 12;
pub const SLANG_CPP_SOURCE: SlangCompileTargetIntegral = 13;
pub const SLANG_HOST_EXECUTABLE: SlangCompileTargetIntegral = 14;
pub const SLANG_SHADER_SHARED_LIBRARY: SlangCompileTargetIntegral = 15;
pub const SLANG_SHADER_HOST_CALLABLE: SlangCompileTargetIntegral = 16;
pub const SLANG_CUDA_SOURCE: SlangCompileTargetIntegral = 17;
pub const SLANG_PTX: SlangCompileTargetIntegral = 18;
pub const SLANG_CUDA_OBJECT_CODE: SlangCompileTargetIntegral = 19;
pub const SLANG_OBJECT_CODE: SlangCompileTargetIntegral = 20;
pub const SLANG_HOST_CPP_SOURCE: SlangCompileTargetIntegral = 21;
pub const SLANG_HOST_HOST_CALLABLE: SlangCompileTargetIntegral = 22;
pub const SLANG_CPP_PYTORCH_BINDING: SlangCompileTargetIntegral = 23;
pub const SLANG_METAL: SlangCompileTargetIntegral = 24;
pub const SLANG_METAL_LIB: SlangCompileTargetIntegral = 25;
pub const SLANG_METAL_LIB_ASM: SlangCompileTargetIntegral = 26;
pub const SLANG_HOST_SHARED_LIBRARY: SlangCompileTargetIntegral = 27;
pub const SLANG_WGSL: SlangCompileTargetIntegral = 28;
pub const SLANG_WGSL_SPIRV_ASM: SlangCompileTargetIntegral = 29;
pub const SLANG_WGSL_SPIRV: SlangCompileTargetIntegral = 30;
pub const SLANG_HOST_VM: SlangCompileTargetIntegral = 31;
pub const SLANG_CPP_HEADER: SlangCompileTargetIntegral = 32;
pub const SLANG_CUDA_HEADER: SlangCompileTargetIntegral = 33;
pub const SLANG_TARGET_COUNT_OF: SlangCompileTargetIntegral = 34;

pub const SLANG_PROFILE_UNKNOWN: SlangProfileIDIntegral = 0;

pub const SLANG_TARGET_FLAG_PARAMETER_BLOCKS_USE_REGISTER_SPACES: SlangTargetFlags = 1 << 4;
pub const SLANG_TARGET_FLAG_GENERATE_WHOLE_PROGRAM: SlangTargetFlags = 1 << 8;
pub const SLANG_TARGET_FLAG_DUMP_IR: SlangTargetFlags = 1 << 9;
pub const SLANG_TARGET_FLAG_GENERATE_SPIRV_DIRECTLY: SlangTargetFlags = 1 << 10;
pub const K_DEFAULT_TARGET_FLAGS: SlangTargetFlags = SLANG_TARGET_FLAG_GENERATE_SPIRV_DIRECTLY;

pub const SLANG_FLOATING_POINT_MODE_DEFAULT: SlangFloatingPointModeIntegral = 0;
pub const SLANG_FLOATING_POINT_MODE_FAST: SlangFloatingPointModeIntegral = 1;
pub const SLANG_FLOATING_POINT_MODE_PRECISE: SlangFloatingPointModeIntegral = 2;

pub const SLANG_LINE_DIRECTIVE_MODE_DEFAULT: SlangLineDirectiveModeIntegral = 0;
pub const SLANG_LINE_DIRECTIVE_MODE_NONE: SlangLineDirectiveModeIntegral = 1;
pub const SLANG_LINE_DIRECTIVE_MODE_STANDARD: SlangLineDirectiveModeIntegral = 2;
pub const SLANG_LINE_DIRECTIVE_MODE_GLSL: SlangLineDirectiveModeIntegral = 3;
pub const SLANG_LINE_DIRECTIVE_MODE_SOURCE_MAP: SlangLineDirectiveModeIntegral = 4;

pub const SESSION_FLAGS_NONE: SessionFlags = 0;

pub const SLANG_MATRIX_LAYOUT_MODE_UNKNOWN: SlangMatrixLayoutModeIntegral = 0;
pub const SLANG_MATRIX_LAYOUT_ROW_MAJOR: SlangMatrixLayoutModeIntegral = 1;
pub const SLANG_MATRIX_LAYOUT_COLUMN_MAJOR: SlangMatrixLayoutModeIntegral = 2;

pub const SLANG_LAYOUT_RULES_DEFAULT: SlangLayoutRulesIntegral = 0;
pub const SLANG_LAYOUT_RULES_METAL_ARGUMENT_BUFFER_TIER_2: SlangLayoutRulesIntegral = 1;

pub const SLANG_GENERIC_ARG_TYPE: GenericArgTypeIntegral = 0;
pub const SLANG_GENERIC_ARG_INT: GenericArgTypeIntegral = 1;
pub const SLANG_GENERIC_ARG_BOOL: GenericArgTypeIntegral = 2;

pub const SLANG_MODIFIER_SHARED: ModifierIDIntegral = 0;
pub const SLANG_MODIFIER_NO_DIFF: ModifierIDIntegral = 1;
pub const SLANG_MODIFIER_STATIC: ModifierIDIntegral = 2;
pub const SLANG_MODIFIER_CONST: ModifierIDIntegral = 3;
pub const SLANG_MODIFIER_EXPORT: ModifierIDIntegral = 4;
pub const SLANG_MODIFIER_EXTERN: ModifierIDIntegral = 5;
pub const SLANG_MODIFIER_DIFFERENTIABLE: ModifierIDIntegral = 6;
pub const SLANG_MODIFIER_MUTATING: ModifierIDIntegral = 7;
pub const SLANG_MODIFIER_IN: ModifierIDIntegral = 8;
pub const SLANG_MODIFIER_OUT: ModifierIDIntegral = 9;
pub const SLANG_MODIFIER_INOUT: ModifierIDIntegral = 10;

pub const SLANG_PARAMETER_CATEGORY_NONE: ParameterCategoryIntegral = 0;
pub const SLANG_PARAMETER_CATEGORY_MIXED: ParameterCategoryIntegral = 1;
pub const SLANG_PARAMETER_CATEGORY_CONSTANT_BUFFER: ParameterCategoryIntegral = 2;
pub const SLANG_PARAMETER_CATEGORY_SHADER_RESOURCE: ParameterCategoryIntegral = 3;
pub const SLANG_PARAMETER_CATEGORY_UNORDERED_ACCESS: ParameterCategoryIntegral = 4;
pub const SLANG_PARAMETER_CATEGORY_VARYING_INPUT: ParameterCategoryIntegral = 5;
pub const SLANG_PARAMETER_CATEGORY_VARYING_OUTPUT: ParameterCategoryIntegral = 6;
pub const SLANG_PARAMETER_CATEGORY_SAMPLER_STATE: ParameterCategoryIntegral = 7;
pub const SLANG_PARAMETER_CATEGORY_UNIFORM: ParameterCategoryIntegral = 8;
pub const SLANG_PARAMETER_CATEGORY_DESCRIPTOR_TABLE_SLOT: ParameterCategoryIntegral = 9;
pub const SLANG_PARAMETER_CATEGORY_SPECIALIZATION_CONSTANT: ParameterCategoryIntegral = 10;
pub const SLANG_PARAMETER_CATEGORY_PUSH_CONSTANT_BUFFER: ParameterCategoryIntegral = 11;
pub const SLANG_PARAMETER_CATEGORY_REGISTER_SPACE: ParameterCategoryIntegral = 12;
pub const SLANG_PARAMETER_CATEGORY_GENERIC: ParameterCategoryIntegral = 13;
pub const SLANG_PARAMETER_CATEGORY_RAY_PAYLOAD: ParameterCategoryIntegral = 14;
pub const SLANG_PARAMETER_CATEGORY_HIT_ATTRIBUTES: ParameterCategoryIntegral = 15;
pub const SLANG_PARAMETER_CATEGORY_CALLABLE_PAYLOAD: ParameterCategoryIntegral = 16;
pub const SLANG_PARAMETER_CATEGORY_SHADER_RECORD: ParameterCategoryIntegral = 17;
pub const SLANG_PARAMETER_CATEGORY_EXISTENTIAL_TYPE_PARAM: ParameterCategoryIntegral = 18;
pub const SLANG_PARAMETER_CATEGORY_EXISTENTIAL_OBJECT_PARAM: ParameterCategoryIntegral = 19;
pub const SLANG_PARAMETER_CATEGORY_SUB_ELEMENT_REGISTER_SPACE: ParameterCategoryIntegral = 20;
pub const SLANG_PARAMETER_CATEGORY_SUBPASS: ParameterCategoryIntegral = 21;
pub const SLANG_PARAMETER_CATEGORY_METAL_ARGUMENT_BUFFER_ELEMENT: ParameterCategoryIntegral = 22;
pub const SLANG_PARAMETER_CATEGORY_METAL_ATTRIBUTE: ParameterCategoryIntegral = 23;
pub const SLANG_PARAMETER_CATEGORY_METAL_PAYLOAD: ParameterCategoryIntegral = 24;
pub const SLANG_PARAMETER_CATEGORY_COUNT: ParameterCategoryIntegral = 25;
pub const SLANG_PARAMETER_CATEGORY_METAL_BUFFER: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_CONSTANT_BUFFER;
pub const SLANG_PARAMETER_CATEGORY_METAL_TEXTURE: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_SHADER_RESOURCE;
pub const SLANG_PARAMETER_CATEGORY_METAL_SAMPLER: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_SAMPLER_STATE;
pub const SLANG_PARAMETER_CATEGORY_VERTEX_INPUT: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_VARYING_INPUT;
pub const SLANG_PARAMETER_CATEGORY_FRAGMENT_OUTPUT: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_VARYING_OUTPUT;
pub const SLANG_PARAMETER_CATEGORY_COUNT_V1: ParameterCategoryIntegral =
    SLANG_PARAMETER_CATEGORY_SUBPASS;

// Order follows slang-image-format-defs.h.
pub const SLANG_IMAGE_FORMAT_unknown: SlangImageFormatIntegral = 0;
pub const SLANG_IMAGE_FORMAT_rgba32f: SlangImageFormatIntegral = 1;
pub const SLANG_IMAGE_FORMAT_rgba16f: SlangImageFormatIntegral = 2;
pub const SLANG_IMAGE_FORMAT_rg32f: SlangImageFormatIntegral = 3;
pub const SLANG_IMAGE_FORMAT_rg16f: SlangImageFormatIntegral = 4;
pub const SLANG_IMAGE_FORMAT_r11f_g11f_b10f: SlangImageFormatIntegral = 5;
pub const SLANG_IMAGE_FORMAT_r32f: SlangImageFormatIntegral = 6;
pub const SLANG_IMAGE_FORMAT_r16f: SlangImageFormatIntegral = 7;
pub const SLANG_IMAGE_FORMAT_rgba16: SlangImageFormatIntegral = 8;
pub const SLANG_IMAGE_FORMAT_rgb10_a2: SlangImageFormatIntegral = 9;
pub const SLANG_IMAGE_FORMAT_rgba8: SlangImageFormatIntegral = 10;
pub const SLANG_IMAGE_FORMAT_rg16: SlangImageFormatIntegral = 11;
pub const SLANG_IMAGE_FORMAT_rg8: SlangImageFormatIntegral = 12;
pub const SLANG_IMAGE_FORMAT_r16: SlangImageFormatIntegral = 13;
pub const SLANG_IMAGE_FORMAT_r8: SlangImageFormatIntegral = 14;
pub const SLANG_IMAGE_FORMAT_rgba16_snorm: SlangImageFormatIntegral = 15;
pub const SLANG_IMAGE_FORMAT_rgba8_snorm: SlangImageFormatIntegral = 16;
pub const SLANG_IMAGE_FORMAT_rg16_snorm: SlangImageFormatIntegral = 17;
pub const SLANG_IMAGE_FORMAT_rg8_snorm: SlangImageFormatIntegral = 18;
pub const SLANG_IMAGE_FORMAT_r16_snorm: SlangImageFormatIntegral = 19;
pub const SLANG_IMAGE_FORMAT_r8_snorm: SlangImageFormatIntegral = 20;
pub const SLANG_IMAGE_FORMAT_rgba32i: SlangImageFormatIntegral = 21;
pub const SLANG_IMAGE_FORMAT_rgba16i: SlangImageFormatIntegral = 22;
pub const SLANG_IMAGE_FORMAT_rgba8i: SlangImageFormatIntegral = 23;
pub const SLANG_IMAGE_FORMAT_rg32i: SlangImageFormatIntegral = 24;
pub const SLANG_IMAGE_FORMAT_rg16i: SlangImageFormatIntegral = 25;
pub const SLANG_IMAGE_FORMAT_rg8i: SlangImageFormatIntegral = 26;
pub const SLANG_IMAGE_FORMAT_r32i: SlangImageFormatIntegral = 27;
pub const SLANG_IMAGE_FORMAT_r16i: SlangImageFormatIntegral = 28;
pub const SLANG_IMAGE_FORMAT_r8i: SlangImageFormatIntegral = 29;
pub const SLANG_IMAGE_FORMAT_rgba32ui: SlangImageFormatIntegral = 30;
pub const SLANG_IMAGE_FORMAT_rgba16ui: SlangImageFormatIntegral = 31;
pub const SLANG_IMAGE_FORMAT_rgb10_a2ui: SlangImageFormatIntegral = 32;
pub const SLANG_IMAGE_FORMAT_rgba8ui: SlangImageFormatIntegral = 33;
pub const SLANG_IMAGE_FORMAT_rg32ui: SlangImageFormatIntegral = 34;
pub const SLANG_IMAGE_FORMAT_rg16ui: SlangImageFormatIntegral = 35;
pub const SLANG_IMAGE_FORMAT_rg8ui: SlangImageFormatIntegral = 36;
pub const SLANG_IMAGE_FORMAT_r32ui: SlangImageFormatIntegral = 37;
pub const SLANG_IMAGE_FORMAT_r16ui: SlangImageFormatIntegral = 38;
pub const SLANG_IMAGE_FORMAT_r8ui: SlangImageFormatIntegral = 39;
pub const SLANG_IMAGE_FORMAT_r64ui: SlangImageFormatIntegral = 40;
pub const SLANG_IMAGE_FORMAT_r64i: SlangImageFormatIntegral = 41;
pub const SLANG_IMAGE_FORMAT_bgra8: SlangImageFormatIntegral = 42;

pub const SLANG_STAGE_NONE: SlangStageIntegral = 0;
pub const SLANG_STAGE_VERTEX: SlangStageIntegral = 1;
pub const SLANG_STAGE_HULL: SlangStageIntegral = 2;
pub const SLANG_STAGE_DOMAIN: SlangStageIntegral = 3;
pub const SLANG_STAGE_GEOMETRY: SlangStageIntegral = 4;
pub const SLANG_STAGE_FRAGMENT: SlangStageIntegral = 5;
pub const SLANG_STAGE_COMPUTE: SlangStageIntegral = 6;
pub const SLANG_STAGE_RAY_GENERATION: SlangStageIntegral = 7;
pub const SLANG_STAGE_INTERSECTION: SlangStageIntegral = 8;
pub const SLANG_STAGE_ANY_HIT: SlangStageIntegral = 9;
pub const SLANG_STAGE_CLOSEST_HIT: SlangStageIntegral = 10;
pub const SLANG_STAGE_MISS: SlangStageIntegral = 11;
pub const SLANG_STAGE_CALLABLE: SlangStageIntegral = 12;
pub const SLANG_STAGE_MESH: SlangStageIntegral = 13;
pub const SLANG_STAGE_AMPLIFICATION: SlangStageIntegral = 14;
pub const SLANG_STAGE_DISPATCH: SlangStageIntegral = 15;
pub const SLANG_STAGE_COUNT: SlangStageIntegral = 16;
pub const SLANG_STAGE_PIXEL: SlangStageIntegral = SLANG_STAGE_FRAGMENT;

pub const SLANG_TYPE_KIND_NONE: SlangTypeKindIntegral = 0;
pub const SLANG_TYPE_KIND_STRUCT: SlangTypeKindIntegral = 1;
pub const SLANG_TYPE_KIND_ARRAY: SlangTypeKindIntegral = 2;
pub const SLANG_TYPE_KIND_MATRIX: SlangTypeKindIntegral = 3;
pub const SLANG_TYPE_KIND_VECTOR: SlangTypeKindIntegral = 4;
pub const SLANG_TYPE_KIND_SCALAR: SlangTypeKindIntegral = 5;
pub const SLANG_TYPE_KIND_CONSTANT_BUFFER: SlangTypeKindIntegral = 6;
pub const SLANG_TYPE_KIND_RESOURCE: SlangTypeKindIntegral = 7;
pub const SLANG_TYPE_KIND_SAMPLER_STATE: SlangTypeKindIntegral = 8;
pub const SLANG_TYPE_KIND_TEXTURE_BUFFER: SlangTypeKindIntegral = 9;
pub const SLANG_TYPE_KIND_SHADER_STORAGE_BUFFER: SlangTypeKindIntegral = 10;
pub const SLANG_TYPE_KIND_PARAMETER_BLOCK: SlangTypeKindIntegral = 11;
pub const SLANG_TYPE_KIND_GENERIC_TYPE_PARAMETER: SlangTypeKindIntegral = 12;
pub const SLANG_TYPE_KIND_INTERFACE: SlangTypeKindIntegral = 13;
pub const SLANG_TYPE_KIND_OUTPUT_STREAM: SlangTypeKindIntegral = 14;
pub const SLANG_TYPE_KIND_MESH_OUTPUT: SlangTypeKindIntegral = 15;
pub const SLANG_TYPE_KIND_SPECIALIZED: SlangTypeKindIntegral = 16;
pub const SLANG_TYPE_KIND_FEEDBACK: SlangTypeKindIntegral = 17;
pub const SLANG_TYPE_KIND_POINTER: SlangTypeKindIntegral = 18;
pub const SLANG_TYPE_KIND_DYNAMIC_RESOURCE: SlangTypeKindIntegral = 19;
pub const SLANG_TYPE_KIND_COUNT: SlangTypeKindIntegral = 20;

pub const SLANG_SCALAR_TYPE_NONE: SlangScalarTypeIntegral = 0;
pub const SLANG_SCALAR_TYPE_VOID: SlangScalarTypeIntegral = 1;
pub const SLANG_SCALAR_TYPE_BOOL: SlangScalarTypeIntegral = 2;
pub const SLANG_SCALAR_TYPE_INT32: SlangScalarTypeIntegral = 3;
pub const SLANG_SCALAR_TYPE_UINT32: SlangScalarTypeIntegral = 4;
pub const SLANG_SCALAR_TYPE_INT64: SlangScalarTypeIntegral = 5;
pub const SLANG_SCALAR_TYPE_UINT64: SlangScalarTypeIntegral = 6;
pub const SLANG_SCALAR_TYPE_FLOAT16: SlangScalarTypeIntegral = 7;
pub const SLANG_SCALAR_TYPE_FLOAT32: SlangScalarTypeIntegral = 8;
pub const SLANG_SCALAR_TYPE_FLOAT64: SlangScalarTypeIntegral = 9;
pub const SLANG_SCALAR_TYPE_INT8: SlangScalarTypeIntegral = 10;
pub const SLANG_SCALAR_TYPE_UINT8: SlangScalarTypeIntegral = 11;
pub const SLANG_SCALAR_TYPE_INT16: SlangScalarTypeIntegral = 12;
pub const SLANG_SCALAR_TYPE_UINT16: SlangScalarTypeIntegral = 13;
pub const SLANG_SCALAR_TYPE_INTPTR: SlangScalarTypeIntegral = 14;
pub const SLANG_SCALAR_TYPE_UINTPTR: SlangScalarTypeIntegral = 15;

pub const SLANG_RESOURCE_BASE_SHAPE_MASK: SlangResourceShapeIntegral = 0x0F;
pub const SLANG_RESOURCE_NONE: SlangResourceShapeIntegral = 0x00;
pub const SLANG_TEXTURE_1D: SlangResourceShapeIntegral = 0x01;
pub const SLANG_TEXTURE_2D: SlangResourceShapeIntegral = 0x02;
pub const SLANG_TEXTURE_3D: SlangResourceShapeIntegral = 0x03;
pub const SLANG_TEXTURE_CUBE: SlangResourceShapeIntegral = 0x04;
pub const SLANG_TEXTURE_BUFFER: SlangResourceShapeIntegral = 0x05;
pub const SLANG_STRUCTURED_BUFFER: SlangResourceShapeIntegral = 0x06;
pub const SLANG_BYTE_ADDRESS_BUFFER: SlangResourceShapeIntegral = 0x07;
pub const SLANG_RESOURCE_UNKNOWN: SlangResourceShapeIntegral = 0x08;
pub const SLANG_ACCELERATION_STRUCTURE: SlangResourceShapeIntegral = 0x09;
pub const SLANG_TEXTURE_SUBPASS: SlangResourceShapeIntegral = 0x0A;
pub const SLANG_RESOURCE_EXT_SHAPE_MASK: SlangResourceShapeIntegral = 0x1F0;
pub const SLANG_TEXTURE_FEEDBACK_FLAG: SlangResourceShapeIntegral = 0x10;
pub const SLANG_TEXTURE_SHADOW_FLAG: SlangResourceShapeIntegral = 0x20;
pub const SLANG_TEXTURE_ARRAY_FLAG: SlangResourceShapeIntegral = 0x40;
pub const SLANG_TEXTURE_MULTISAMPLE_FLAG: SlangResourceShapeIntegral = 0x80;
pub const SLANG_TEXTURE_COMBINED_FLAG: SlangResourceShapeIntegral = 0x100;
pub const SLANG_TEXTURE_1D_ARRAY: SlangResourceShapeIntegral =
    SLANG_TEXTURE_1D | SLANG_TEXTURE_ARRAY_FLAG;
pub const SLANG_TEXTURE_2D_ARRAY: SlangResourceShapeIntegral =
    SLANG_TEXTURE_2D | SLANG_TEXTURE_ARRAY_FLAG;
pub const SLANG_TEXTURE_CUBE_ARRAY: SlangResourceShapeIntegral =
    SLANG_TEXTURE_CUBE | SLANG_TEXTURE_ARRAY_FLAG;
pub const SLANG_TEXTURE_2D_MULTISAMPLE: SlangResourceShapeIntegral =
    SLANG_TEXTURE_2D | SLANG_TEXTURE_MULTISAMPLE_FLAG;
pub const SLANG_TEXTURE_2D_MULTISAMPLE_ARRAY: SlangResourceShapeIntegral =
    SLANG_TEXTURE_2D | SLANG_TEXTURE_MULTISAMPLE_FLAG | SLANG_TEXTURE_ARRAY_FLAG;
pub const SLANG_TEXTURE_SUBPASS_MULTISAMPLE: SlangResourceShapeIntegral =
    SLANG_TEXTURE_SUBPASS | SLANG_TEXTURE_MULTISAMPLE_FLAG;

pub const SLANG_RESOURCE_ACCESS_NONE: SlangResourceAccessIntegral = 0;
pub const SLANG_RESOURCE_ACCESS_READ: SlangResourceAccessIntegral = 1;
pub const SLANG_RESOURCE_ACCESS_READ_WRITE: SlangResourceAccessIntegral = 2;
pub const SLANG_RESOURCE_ACCESS_RASTER_ORDERED: SlangResourceAccessIntegral = 3;
pub const SLANG_RESOURCE_ACCESS_APPEND: SlangResourceAccessIntegral = 4;
pub const SLANG_RESOURCE_ACCESS_CONSUME: SlangResourceAccessIntegral = 5;
pub const SLANG_RESOURCE_ACCESS_WRITE: SlangResourceAccessIntegral = 6;
pub const SLANG_RESOURCE_ACCESS_FEEDBACK: SlangResourceAccessIntegral = 7;
pub const SLANG_RESOURCE_ACCESS_UNKNOWN: SlangResourceAccessIntegral = 0x7FFFFFFF;

pub const SLANG_BINDING_TYPE_UNKNOWN: SlangBindingTypeIntegral = 0;
pub const SLANG_BINDING_TYPE_SAMPLER: SlangBindingTypeIntegral = 1;
pub const SLANG_BINDING_TYPE_TEXTURE: SlangBindingTypeIntegral = 2;
pub const SLANG_BINDING_TYPE_CONSTANT_BUFFER: SlangBindingTypeIntegral = 3;
pub const SLANG_BINDING_TYPE_PARAMETER_BLOCK: SlangBindingTypeIntegral = 4;
pub const SLANG_BINDING_TYPE_TYPED_BUFFER: SlangBindingTypeIntegral = 5;
pub const SLANG_BINDING_TYPE_RAW_BUFFER: SlangBindingTypeIntegral = 6;
pub const SLANG_BINDING_TYPE_COMBINED_TEXTURE_SAMPLER: SlangBindingTypeIntegral = 7;
pub const SLANG_BINDING_TYPE_INPUT_RENDER_TARGET: SlangBindingTypeIntegral = 8;
pub const SLANG_BINDING_TYPE_INLINE_UNIFORM_DATA: SlangBindingTypeIntegral = 9;
pub const SLANG_BINDING_TYPE_RAY_TRACING_ACCELERATION_STRUCTURE: SlangBindingTypeIntegral = 10;
pub const SLANG_BINDING_TYPE_VARYING_INPUT: SlangBindingTypeIntegral = 11;
pub const SLANG_BINDING_TYPE_VARYING_OUTPUT: SlangBindingTypeIntegral = 12;
pub const SLANG_BINDING_TYPE_EXISTENTIAL_VALUE: SlangBindingTypeIntegral = 13;
pub const SLANG_BINDING_TYPE_PUSH_CONSTANT: SlangBindingTypeIntegral = 14;
pub const SLANG_BINDING_TYPE_MUTABLE_FLAG: SlangBindingTypeIntegral = 0x100;
pub const SLANG_BINDING_TYPE_MUTABLE_TETURE: SlangBindingTypeIntegral =
    SLANG_BINDING_TYPE_TEXTURE | SLANG_BINDING_TYPE_MUTABLE_FLAG;
pub const SLANG_BINDING_TYPE_MUTABLE_TEXTURE: SlangBindingTypeIntegral =
    SLANG_BINDING_TYPE_MUTABLE_TETURE;
pub const SLANG_BINDING_TYPE_MUTABLE_TYPED_BUFFER: SlangBindingTypeIntegral =
    SLANG_BINDING_TYPE_TYPED_BUFFER | SLANG_BINDING_TYPE_MUTABLE_FLAG;
pub const SLANG_BINDING_TYPE_MUTABLE_RAW_BUFFER: SlangBindingTypeIntegral =
    SLANG_BINDING_TYPE_RAW_BUFFER | SLANG_BINDING_TYPE_MUTABLE_FLAG;
pub const SLANG_BINDING_TYPE_BASE_MASK: SlangBindingTypeIntegral = 0x00FF;
pub const SLANG_BINDING_TYPE_EXT_MASK: SlangBindingTypeIntegral = 0xFF00;

pub const COMPILER_OPTION_VALUE_KIND_INT: CompilerOptionValueKindIntegral = 0;
pub const COMPILER_OPTION_VALUE_KIND_STRING: CompilerOptionValueKindIntegral = 1;

/// Name of a compiler option carried by [`CompilerOptionEntry`].
///
/// Written into descriptors as `CompilerOptionName::X as i32`; the ordering
/// must match the library's `slang::CompilerOptionName`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerOptionName {
    MacroDefine,
    DepFile,
    EntryPointName,
    Specialize,
    Help,
    HelpStyle,
    Include,
    Language,
    MatrixLayoutColumn,
    MatrixLayoutRow,
    ZeroInitialize,
    IgnoreCapabilities,
    RestrictiveCapabilityCheck,
    ModuleName,
    Output,
    Profile,
    Stage,
    Target,
    Version,
    WarningsAsErrors,
    DisableWarnings,
    EnableWarning,
    DisableWarning,
    DumpWarningDiagnostics,
    InputFilesRemain,
    EmitIr,
    ReportDownstreamTime,
    ReportPerfBenchmark,
    ReportCheckpointIntermediates,
    SkipSPIRVValidation,
    SourceEmbedStyle,
    SourceEmbedName,
    SourceEmbedLanguage,
    DisableShortCircuit,
    MinimumSlangOptimization,
    DisableNonEssentialValidations,
    DisableSourceMap,
    UnscopedEnum,
    PreserveParameters,
    Capability,
    DefaultImageFormatUnknown,
    DisableDynamicDispatch,
    DisableSpecialization,
    FloatingPointMode,
    DebugInformation,
    LineDirectiveMode,
    Optimization,
    Obfuscate,
    VulkanBindShift,
    VulkanBindGlobals,
    VulkanInvertY,
    VulkanUseDxPositionW,
    VulkanUseEntryPointName,
    VulkanUseGLLayout,
    VulkanEmitReflection,
    GLSLForceScalarLayout,
    EnableEffectAnnotations,
    EmitSpirvViaGLSL,
    EmitSpirvDirectly,
    SPIRVCoreGrammarJSON,
    IncompleteLibrary,
    CompilerPath,
    DefaultDownstreamCompiler,
    DownstreamArgs,
    PassThrough,
    DumpRepro,
    DumpReproOnError,
    ExtractRepro,
    LoadRepro,
    LoadReproDirectory,
    ReproFallbackDirectory,
    DumpAst,
    DumpIntermediatePrefix,
    DumpIntermediates,
    DumpIr,
    DumpIrIds,
    PreprocessorOutput,
    OutputIncludes,
    ReproFileSystem,
    REMOVED_SerialIR,
    SkipCodeGen,
    ValidateIr,
    VerbosePaths,
    VerifyDebugSerialIr,
    NoCodeGen,
    FileSystem,
    Heterogeneous,
    NoMangle,
    NoHLSLBinding,
    NoHLSLPackConstantBufferElements,
    ValidateUniformity,
    AllowGLSL,
    EnableExperimentalPasses,
    BindlessSpaceIndex,
    ArchiveType,
    CompileCoreModule,
    Doc,
    IrCompression,
    LoadCoreModule,
    ReferenceModule,
    SaveCoreModule,
    SaveCoreModuleBinSource,
    TrackLiveness,
    LoopInversion,
    ParameterBlocksUseRegisterSpaces,
    LanguageVersion,
    TypeConformance,
    EnableExperimentalDynamicDispatch,
    EmitReflectionJSON,
    CountOfParsableOptions,
    DebugInformationFormat,
    VulkanBindShiftAll,
    GenerateWholeProgram,
    UseUpToDateBinaryModule,
    EmbedDownstreamIR,
    ForceDXLayout,
    EmitSpirvMethod,
    SaveGLSLModuleBinSource,
    SkipDownstreamLinking,
    DumpModule,
    GetModuleInfo,
    GetSupportedModuleVersions,
    EmitSeparateDebug,
    DenormalModeFp16,
    DenormalModeFp32,
    DenormalModeFp64,
    UseMSVCStyleBitfieldPacking,
    ForceCLayout,
    ExperimentalFeature,
    ReportDetailedPerfBenchmark,
    ValidateIRDetailed,
    DumpIRBefore,
    DumpIRAfter,
    CountOf,
}

// ============================================================================
// Descriptors
// ============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlangUUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PreprocessorMacroDesc {
    pub name: *const c_char,
    pub value: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CompilerOptionValue {
    pub kind: CompilerOptionValueKindIntegral,
    pub intValue0: i32,
    pub intValue1: i32,
    pub stringValue0: *const c_char,
    pub stringValue1: *const c_char,
}

impl Default for CompilerOptionValue {
    fn default() -> Self {
        CompilerOptionValue {
            kind: COMPILER_OPTION_VALUE_KIND_INT,
            intValue0: 0,
            intValue1: 0,
            stringValue0: std::ptr::null(),
            stringValue1: std::ptr::null(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CompilerOptionEntry {
    pub name: CompilerOptionNameIntegral,
    pub value: CompilerOptionValue,
}

/// One code generation target of a session.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TargetDesc {
    pub structureSize: usize,
    pub format: SlangCompileTargetIntegral,
    pub profile: SlangProfileIDIntegral,
    pub flags: SlangTargetFlags,
    pub floatingPointMode: SlangFloatingPointModeIntegral,
    pub lineDirectiveMode: SlangLineDirectiveModeIntegral,
    pub forceGLSLScalarBufferLayout: bool,
    pub compilerOptionEntries: *const CompilerOptionEntry,
    pub compilerOptionEntryCount: u32,
}

impl Default for TargetDesc {
    fn default() -> Self {
        TargetDesc {
            structureSize: std::mem::size_of::<TargetDesc>(),
            format: SLANG_TARGET_UNKNOWN,
            profile: SLANG_PROFILE_UNKNOWN,
            flags: K_DEFAULT_TARGET_FLAGS,
            floatingPointMode: SLANG_FLOATING_POINT_MODE_DEFAULT,
            lineDirectiveMode: SLANG_LINE_DIRECTIVE_MODE_DEFAULT,
            forceGLSLScalarBufferLayout: false,
            compilerOptionEntries: std::ptr::null(),
            compilerOptionEntryCount: 0,
        }
    }
}

/// Configuration of a compilation session.
///
/// `targets`, `searchPaths`, `preprocessorMacros` and
/// `compilerOptionEntries` are borrowed; they must outlive the
/// `createSession` call that receives this descriptor.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SessionDesc {
    pub structureSize: usize,
    pub targets: *const TargetDesc,
    pub targetCount: SlangInt,
    pub flags: SessionFlags,
    pub defaultMatrixLayoutMode: SlangMatrixLayoutModeIntegral,
    pub searchPaths: *const *const c_char,
    pub searchPathCount: SlangInt,
    pub preprocessorMacros: *const PreprocessorMacroDesc,
    pub preprocessorMacroCount: SlangInt,
    pub fileSystem: *mut c_void,
    pub enableEffectAnnotations: bool,
    pub allowGLSLSyntax: bool,
    pub compilerOptionEntries: *mut CompilerOptionEntry,
    pub compilerOptionEntryCount: u32,
    pub skipSPIRVValidation: bool,
}

impl Default for SessionDesc {
    fn default() -> Self {
        SessionDesc {
            structureSize: std::mem::size_of::<SessionDesc>(),
            targets: std::ptr::null(),
            targetCount: 0,
            flags: SESSION_FLAGS_NONE,
            defaultMatrixLayoutMode: SLANG_MATRIX_LAYOUT_ROW_MAJOR,
            searchPaths: std::ptr::null(),
            searchPathCount: 0,
            preprocessorMacros: std::ptr::null(),
            preprocessorMacroCount: 0,
            fileSystem: std::ptr::null_mut(),
            enableEffectAnnotations: false,
            allowGLSLSyntax: false,
            compilerOptionEntries: std::ptr::null_mut(),
            compilerOptionEntryCount: 0,
            skipSPIRVValidation: false,
        }
    }
}

// ============================================================================
// Reflection objects
// ============================================================================

macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque! {
    /// Layout of a whole linked program (`slang::ShaderReflection`).
    ProgramLayout;
    TypeReflection;
    TypeLayoutReflection;
    VariableReflection;
    VariableLayoutReflection;
    EntryPointReflection;
    TypeParameterReflection;
    FunctionReflection;
    GenericReflection;
    /// A user attribute attached to a declaration.
    Attribute;
    Modifier;
}

pub type ShaderReflection = ProgramLayout;

/// A generic argument value, discriminated by a parallel
/// `GenericArgTypeIntegral` array.
#[repr(C)]
#[derive(Clone, Copy)]
pub union GenericArgReflection {
    pub typeVal: *mut TypeReflection,
    pub intVal: i64,
    pub boolVal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_status_codes() {
        assert_eq!(SLANG_FAIL as u32, 0x80004005);
        assert_eq!(SLANG_E_INVALID_ARG as u32, 0x80070057);
        assert_eq!(SLANG_E_NOT_FOUND as u32, 0x82000005);
        assert_eq!(SLANG_E_NOT_AVAILABLE as u32, 0x82000007);
        assert!(succeeded(SLANG_OK));
        assert!(failed(SLANG_E_NOT_IMPLEMENTED));
    }

    #[test]
    fn test_enum_aliases() {
        assert_eq!(SLANG_STAGE_PIXEL, SLANG_STAGE_FRAGMENT);
        assert_eq!(SLANG_TEXTURE_2D_MULTISAMPLE_ARRAY, 0xC2);
        assert_eq!(SLANG_BINDING_TYPE_MUTABLE_RAW_BUFFER, 0x106);
        assert_eq!(SLANG_PARAMETER_CATEGORY_COUNT_V1, 21);
        assert_eq!(CompilerOptionName::Include as i32, 6);
        assert_eq!(CompilerOptionName::CountOfParsableOptions as i32, 109);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_target_desc_layout() {
        assert_eq!(offset_of!(TargetDesc, format), 8);
        assert_eq!(offset_of!(TargetDesc, profile), 12);
        assert_eq!(offset_of!(TargetDesc, flags), 16);
        assert_eq!(offset_of!(TargetDesc, floatingPointMode), 20);
        assert_eq!(offset_of!(TargetDesc, lineDirectiveMode), 24);
        assert_eq!(offset_of!(TargetDesc, forceGLSLScalarBufferLayout), 28);
        assert_eq!(offset_of!(TargetDesc, compilerOptionEntries), 32);
        assert_eq!(offset_of!(TargetDesc, compilerOptionEntryCount), 40);
        assert_eq!(size_of::<TargetDesc>(), 48);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_session_desc_layout() {
        assert_eq!(offset_of!(SessionDesc, targets), 8);
        assert_eq!(offset_of!(SessionDesc, targetCount), 16);
        assert_eq!(offset_of!(SessionDesc, flags), 24);
        assert_eq!(offset_of!(SessionDesc, defaultMatrixLayoutMode), 28);
        assert_eq!(offset_of!(SessionDesc, searchPaths), 32);
        assert_eq!(offset_of!(SessionDesc, searchPathCount), 40);
        assert_eq!(offset_of!(SessionDesc, preprocessorMacros), 48);
        assert_eq!(offset_of!(SessionDesc, preprocessorMacroCount), 56);
        assert_eq!(offset_of!(SessionDesc, fileSystem), 64);
        assert_eq!(offset_of!(SessionDesc, enableEffectAnnotations), 72);
        assert_eq!(offset_of!(SessionDesc, allowGLSLSyntax), 73);
        assert_eq!(offset_of!(SessionDesc, compilerOptionEntries), 80);
        assert_eq!(offset_of!(SessionDesc, compilerOptionEntryCount), 88);
        assert_eq!(offset_of!(SessionDesc, skipSPIRVValidation), 92);
        assert_eq!(size_of::<SessionDesc>(), 96);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_compiler_option_layout() {
        assert_eq!(offset_of!(CompilerOptionValue, intValue0), 4);
        assert_eq!(offset_of!(CompilerOptionValue, intValue1), 8);
        assert_eq!(offset_of!(CompilerOptionValue, stringValue0), 16);
        assert_eq!(size_of::<CompilerOptionValue>(), 32);
        assert_eq!(offset_of!(CompilerOptionEntry, value), 8);
        assert_eq!(size_of::<CompilerOptionEntry>(), 40);
        assert_eq!(size_of::<GenericArgReflection>(), 8);
    }

    #[test]
    fn test_descriptor_defaults() {
        let target = TargetDesc::default();
        assert_eq!(target.structureSize, size_of::<TargetDesc>());
        assert_eq!(target.flags, SLANG_TARGET_FLAG_GENERATE_SPIRV_DIRECTLY);

        let session = SessionDesc::default();
        assert_eq!(session.structureSize, size_of::<SessionDesc>());
        assert_eq!(session.defaultMatrixLayoutMode, SLANG_MATRIX_LAYOUT_ROW_MAJOR);
        assert!(session.targets.is_null());
        assert_eq!(session.targetCount, 0);
    }
}
