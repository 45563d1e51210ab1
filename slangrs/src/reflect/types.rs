//! Type reflection

use super::{Attribute, Iter, ParameterCategory, Variable, VariableLayout, str_from};
use crate::{MatrixLayout, to_cstring};
use bitflags::bitflags;
use slangc::{Handle, TypeLayoutReflection, TypeReflection};
use std::marker::PhantomData;

/// Kind of a reflected type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TypeKind {
    /// No type
    None = 0,
    /// Structure
    Struct = 1,
    /// Array
    Array = 2,
    /// Matrix
    Matrix = 3,
    /// Vector
    Vector = 4,
    /// Scalar
    Scalar = 5,
    /// `ConstantBuffer<T>` / `cbuffer`
    ConstantBuffer = 6,
    /// Texture or buffer resource
    Resource = 7,
    /// Sampler
    SamplerState = 8,
    /// `TextureBuffer<T>` / `tbuffer`
    TextureBuffer = 9,
    /// GLSL shader storage buffer
    ShaderStorageBuffer = 10,
    /// `ParameterBlock<T>`
    ParameterBlock = 11,
    /// Generic type parameter
    GenericTypeParameter = 12,
    /// Interface
    Interface = 13,
    /// Geometry shader output stream
    OutputStream = 14,
    /// Mesh shader output
    MeshOutput = 15,
    /// Specialized generic
    Specialized = 16,
    /// Sampler feedback
    Feedback = 17,
    /// Pointer
    Pointer = 18,
    /// Dynamic resource
    DynamicResource = 19,
}

impl From<u32> for TypeKind {
    fn from(value: u32) -> Self {
        if value < slangc::SLANG_TYPE_KIND_COUNT {
            unsafe { std::mem::transmute::<u32, TypeKind>(value) }
        } else {
            TypeKind::None
        }
    }
}

/// Scalar element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ScalarType {
    /// Not a scalar
    None = 0,
    /// void
    Void = 1,
    /// bool
    Bool = 2,
    /// int
    Int32 = 3,
    /// uint
    UInt32 = 4,
    /// int64_t
    Int64 = 5,
    /// uint64_t
    UInt64 = 6,
    /// half
    Float16 = 7,
    /// float
    Float32 = 8,
    /// double
    Float64 = 9,
    /// int8_t
    Int8 = 10,
    /// uint8_t
    UInt8 = 11,
    /// int16_t
    Int16 = 12,
    /// uint16_t
    UInt16 = 13,
    /// intptr_t
    IntPtr = 14,
    /// uintptr_t
    UIntPtr = 15,
}

impl ScalarType {
    /// Size in bytes, if fixed
    pub fn size(&self) -> Option<usize> {
        match self {
            ScalarType::Bool | ScalarType::Int32 | ScalarType::UInt32 | ScalarType::Float32 => Some(4),
            ScalarType::Int64 | ScalarType::UInt64 | ScalarType::Float64 => Some(8),
            ScalarType::Float16 | ScalarType::Int16 | ScalarType::UInt16 => Some(2),
            ScalarType::Int8 | ScalarType::UInt8 => Some(1),
            _ => None,
        }
    }
}

impl From<u32> for ScalarType {
    fn from(value: u32) -> Self {
        if value <= slangc::SLANG_SCALAR_TYPE_UINTPTR {
            unsafe { std::mem::transmute::<u32, ScalarType>(value) }
        } else {
            ScalarType::None
        }
    }
}

/// Base shape of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceShape {
    /// Not a resource
    None,
    /// 1D texture
    Texture1D,
    /// 2D texture
    Texture2D,
    /// 3D texture
    Texture3D,
    /// Cube texture
    TextureCube,
    /// Typed buffer
    TextureBuffer,
    /// Structured buffer
    StructuredBuffer,
    /// Byte address buffer
    ByteAddressBuffer,
    /// Unknown shape
    Unknown,
    /// Ray tracing acceleration structure
    AccelerationStructure,
    /// Subpass input
    TextureSubpass,
}

impl From<u32> for ResourceShape {
    fn from(value: u32) -> Self {
        match value & slangc::SLANG_RESOURCE_BASE_SHAPE_MASK {
            slangc::SLANG_RESOURCE_NONE => ResourceShape::None,
            slangc::SLANG_TEXTURE_1D => ResourceShape::Texture1D,
            slangc::SLANG_TEXTURE_2D => ResourceShape::Texture2D,
            slangc::SLANG_TEXTURE_3D => ResourceShape::Texture3D,
            slangc::SLANG_TEXTURE_CUBE => ResourceShape::TextureCube,
            slangc::SLANG_TEXTURE_BUFFER => ResourceShape::TextureBuffer,
            slangc::SLANG_STRUCTURED_BUFFER => ResourceShape::StructuredBuffer,
            slangc::SLANG_BYTE_ADDRESS_BUFFER => ResourceShape::ByteAddressBuffer,
            slangc::SLANG_ACCELERATION_STRUCTURE => ResourceShape::AccelerationStructure,
            slangc::SLANG_TEXTURE_SUBPASS => ResourceShape::TextureSubpass,
            _ => ResourceShape::Unknown,
        }
    }
}

bitflags! {
    /// Modifiers on top of a [`ResourceShape`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResourceShapeFlags: u32 {
        /// Sampler feedback texture
        const FEEDBACK = slangc::SLANG_TEXTURE_FEEDBACK_FLAG;
        /// Shadow (comparison) texture
        const SHADOW = slangc::SLANG_TEXTURE_SHADOW_FLAG;
        /// Texture array
        const ARRAY = slangc::SLANG_TEXTURE_ARRAY_FLAG;
        /// Multisampled texture
        const MULTISAMPLE = slangc::SLANG_TEXTURE_MULTISAMPLE_FLAG;
        /// Combined texture and sampler
        const COMBINED = slangc::SLANG_TEXTURE_COMBINED_FLAG;
    }
}

/// Access mode of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceAccess {
    /// Not a resource
    None,
    /// Read-only
    Read,
    /// Read-write
    ReadWrite,
    /// Rasterizer ordered
    RasterOrdered,
    /// Append buffer
    Append,
    /// Consume buffer
    Consume,
    /// Write-only
    Write,
    /// Sampler feedback
    Feedback,
    /// Unknown
    Unknown,
}

impl ResourceAccess {
    /// Returns true if shaders can write through this resource
    pub fn is_writable(&self) -> bool {
        matches!(
            self,
            ResourceAccess::ReadWrite
                | ResourceAccess::RasterOrdered
                | ResourceAccess::Append
                | ResourceAccess::Write
                | ResourceAccess::Feedback
        )
    }
}

impl From<u32> for ResourceAccess {
    fn from(value: u32) -> Self {
        match value {
            slangc::SLANG_RESOURCE_ACCESS_NONE => ResourceAccess::None,
            slangc::SLANG_RESOURCE_ACCESS_READ => ResourceAccess::Read,
            slangc::SLANG_RESOURCE_ACCESS_READ_WRITE => ResourceAccess::ReadWrite,
            slangc::SLANG_RESOURCE_ACCESS_RASTER_ORDERED => ResourceAccess::RasterOrdered,
            slangc::SLANG_RESOURCE_ACCESS_APPEND => ResourceAccess::Append,
            slangc::SLANG_RESOURCE_ACCESS_CONSUME => ResourceAccess::Consume,
            slangc::SLANG_RESOURCE_ACCESS_WRITE => ResourceAccess::Write,
            slangc::SLANG_RESOURCE_ACCESS_FEEDBACK => ResourceAccess::Feedback,
            _ => ResourceAccess::Unknown,
        }
    }
}

/// Wrapper for a reflected type
#[derive(Clone, Copy)]
pub struct Type<'a> {
    handle: Handle<TypeReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Type<'a> {
    pub(crate) fn from_handle(handle: Handle<TypeReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(Type {
            handle,
            _marker: PhantomData,
        })
    }

    /// Gets the type kind.
    pub fn kind(&self) -> TypeKind {
        TypeKind::from(unsafe { slangc::TypeReflection_getKind(self.handle) })
    }

    /// Gets the type name, e.g. "float4" or a struct name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::TypeReflection_getName(self.handle)) }
    }

    /// Number of fields (structs only).
    pub fn field_count(&self) -> u32 {
        unsafe { slangc::TypeReflection_getFieldCount(self.handle) }
    }

    /// Gets a field by index.
    pub fn field(&self, index: u32) -> Option<Variable<'a>> {
        Variable::from_handle(unsafe { slangc::TypeReflection_getFieldByIndex(self.handle, index) })
    }

    /// Returns an iterator over fields.
    pub fn fields(&self) -> Iter<Self, Variable<'a>> {
        Iter::new(*self, self.field_count(), |ty, i| ty.field(i))
    }

    /// Returns true for array types.
    pub fn is_array(&self) -> bool {
        unsafe { slangc::TypeReflection_isArray(self.handle) }
    }

    /// Strips all array dimensions.
    pub fn unwrap_array(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::TypeReflection_unwrapArray(self.handle) })
    }

    /// Element count of an array or vector (0 for unsized arrays).
    pub fn element_count(&self) -> usize {
        unsafe { slangc::TypeReflection_getElementCount(self.handle) }
    }

    /// Product of the element counts of every array dimension.
    pub fn total_array_element_count(&self) -> usize {
        unsafe { slangc::TypeReflection_getTotalArrayElementCount(self.handle) }
    }

    /// Element type of an array, vector or matrix.
    pub fn element_type(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::TypeReflection_getElementType(self.handle) })
    }

    /// Number of rows (matrices; 1 for vectors and scalars).
    pub fn row_count(&self) -> u32 {
        unsafe { slangc::TypeReflection_getRowCount(self.handle) }
    }

    /// Number of columns.
    pub fn column_count(&self) -> u32 {
        unsafe { slangc::TypeReflection_getColumnCount(self.handle) }
    }

    /// Scalar element type.
    pub fn scalar_type(&self) -> ScalarType {
        ScalarType::from(unsafe { slangc::TypeReflection_getScalarType(self.handle) })
    }

    /// The `T` in `Texture2D<T>` / `StructuredBuffer<T>`.
    pub fn resource_result_type(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::TypeReflection_getResourceResultType(self.handle) })
    }

    /// Base shape of a resource type.
    pub fn resource_shape(&self) -> ResourceShape {
        ResourceShape::from(self.raw_resource_shape())
    }

    /// Array/multisample/shadow modifiers of a resource type.
    pub fn resource_shape_flags(&self) -> ResourceShapeFlags {
        ResourceShapeFlags::from_bits_truncate(self.raw_resource_shape())
    }

    fn raw_resource_shape(&self) -> u32 {
        unsafe { slangc::TypeReflection_getResourceShape(self.handle) }
    }

    /// Access mode of a resource type.
    pub fn resource_access(&self) -> ResourceAccess {
        ResourceAccess::from(unsafe { slangc::TypeReflection_getResourceAccess(self.handle) })
    }

    /// Number of user-defined attributes.
    pub fn user_attribute_count(&self) -> u32 {
        unsafe { slangc::TypeReflection_getUserAttributeCount(self.handle) }
    }

    /// Gets a user-defined attribute by index.
    pub fn user_attribute(&self, index: u32) -> Option<Attribute<'a>> {
        Attribute::from_handle(unsafe { slangc::TypeReflection_getUserAttributeByIndex(self.handle, index) })
    }

    /// Returns an iterator over user-defined attributes.
    pub fn user_attributes(&self) -> Iter<Self, Attribute<'a>> {
        Iter::new(*self, self.user_attribute_count(), |ty, i| ty.user_attribute(i))
    }

    /// Finds a user-defined attribute by name.
    pub fn find_user_attribute(&self, name: &str) -> Option<Attribute<'a>> {
        let name = to_cstring(name, "attribute name").ok()?;
        Attribute::from_handle(unsafe { slangc::TypeReflection_findUserAttributeByName(self.handle, name.as_ptr()) })
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<TypeReflection> {
        self.handle
    }
}

impl std::fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Type")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Wrapper for a type together with its layout on one target
#[derive(Clone, Copy)]
pub struct TypeLayout<'a> {
    handle: Handle<TypeLayoutReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> TypeLayout<'a> {
    pub(crate) fn from_handle(handle: Handle<TypeLayoutReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(TypeLayout {
            handle,
            _marker: PhantomData,
        })
    }

    /// The type being laid out.
    pub fn ty(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::TypeLayoutReflection_getType(self.handle) })
    }

    /// Gets the type kind.
    pub fn kind(&self) -> TypeKind {
        TypeKind::from(unsafe { slangc::TypeLayoutReflection_getKind(self.handle) })
    }

    /// Gets the type name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::TypeLayoutReflection_getName(self.handle)) }
    }

    /// Resources of `category` consumed by one value of this type.
    ///
    /// For [`ParameterCategory::Uniform`] this is the size in bytes.
    pub fn size(&self, category: ParameterCategory) -> usize {
        unsafe { slangc::TypeLayoutReflection_getSize(self.handle, category.as_raw()) }
    }

    /// Distance between consecutive array elements of this type.
    pub fn stride(&self, category: ParameterCategory) -> usize {
        unsafe { slangc::TypeLayoutReflection_getStride(self.handle, category.as_raw()) }
    }

    /// Required alignment.
    pub fn alignment(&self, category: ParameterCategory) -> i32 {
        unsafe { slangc::TypeLayoutReflection_getAlignment(self.handle, category.as_raw()) }
    }

    /// Number of fields (structs only).
    pub fn field_count(&self) -> u32 {
        unsafe { slangc::TypeLayoutReflection_getFieldCount(self.handle) }
    }

    /// Gets a field layout by index.
    pub fn field(&self, index: u32) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::TypeLayoutReflection_getFieldByIndex(self.handle, index) })
    }

    /// Returns an iterator over field layouts.
    pub fn fields(&self) -> Iter<Self, VariableLayout<'a>> {
        Iter::new(*self, self.field_count(), |layout, i| layout.field(i))
    }

    /// Index of the field called `name`.
    pub fn find_field_index(&self, name: &str) -> Option<u32> {
        let name = to_cstring(name, "field name").ok()?;
        let index = unsafe { slangc::TypeLayoutReflection_findFieldIndexByName(self.handle, name.as_ptr()) };
        u32::try_from(index).ok()
    }

    /// Returns true for array types.
    pub fn is_array(&self) -> bool {
        unsafe { slangc::TypeLayoutReflection_isArray(self.handle) }
    }

    /// Strips all array dimensions.
    pub fn unwrap_array(&self) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe { slangc::TypeLayoutReflection_unwrapArray(self.handle) })
    }

    /// Element count of an array or vector.
    pub fn element_count(&self) -> usize {
        unsafe { slangc::TypeLayoutReflection_getElementCount(self.handle, Handle::null()) }
    }

    /// Product of the element counts of every array dimension.
    pub fn total_element_count(&self) -> usize {
        unsafe { slangc::TypeLayoutReflection_getTotalElementCount(self.handle) }
    }

    /// Distance between consecutive elements.
    pub fn element_stride(&self, category: ParameterCategory) -> usize {
        unsafe { slangc::TypeLayoutReflection_getElementStride(self.handle, category.as_raw()) }
    }

    /// Layout of the element type (arrays, buffers, parameter blocks).
    pub fn element_type_layout(&self) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe { slangc::TypeLayoutReflection_getElementTypeLayout(self.handle) })
    }

    /// Variable layout of the element, with offsets inside the container.
    pub fn element_var_layout(&self) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::TypeLayoutReflection_getElementVarLayout(self.handle) })
    }

    /// Variable layout of the container itself (e.g. the constant buffer binding).
    pub fn container_var_layout(&self) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::TypeLayoutReflection_getContainerVarLayout(self.handle) })
    }

    /// The single category this type consumes, or `Mixed`.
    pub fn parameter_category(&self) -> ParameterCategory {
        ParameterCategory::from(unsafe { slangc::TypeLayoutReflection_getParameterCategory(self.handle) })
    }

    /// Every category this type consumes.
    pub fn categories(&self) -> Vec<ParameterCategory> {
        let count = unsafe { slangc::TypeLayoutReflection_getCategoryCount(self.handle) };
        (0..count)
            .map(|i| ParameterCategory::from(unsafe { slangc::TypeLayoutReflection_getCategoryByIndex(self.handle, i) }))
            .collect()
    }

    /// Matrix layout of a matrix type.
    pub fn matrix_layout(&self) -> Option<MatrixLayout> {
        match unsafe { slangc::TypeLayoutReflection_getMatrixLayoutMode(self.handle) } {
            slangc::SLANG_MATRIX_LAYOUT_ROW_MAJOR => Some(MatrixLayout::RowMajor),
            slangc::SLANG_MATRIX_LAYOUT_COLUMN_MAJOR => Some(MatrixLayout::ColumnMajor),
            _ => None,
        }
    }

    /// Index of the generic parameter this type stands for.
    pub fn generic_param_index(&self) -> Option<u32> {
        u32::try_from(unsafe { slangc::TypeLayoutReflection_getGenericParamIndex(self.handle) }).ok()
    }

    /// Number of binding ranges (descriptor-like slots) in this type.
    pub fn binding_range_count(&self) -> usize {
        let count = unsafe { slangc::TypeLayoutReflection_getBindingRangeCount(self.handle) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Descriptor kind of a binding range.
    pub fn binding_range_type(&self, index: usize) -> super::BindingType {
        super::BindingType::from(unsafe {
            slangc::TypeLayoutReflection_getBindingRangeType(self.handle, index as slangc::SlangInt)
        })
    }

    /// Number of descriptors in a binding range.
    pub fn binding_range_binding_count(&self, index: usize) -> i64 {
        unsafe { slangc::TypeLayoutReflection_getBindingRangeBindingCount(self.handle, index as slangc::SlangInt) }
    }

    /// The variable a binding range comes from.
    pub fn binding_range_leaf_variable(&self, index: usize) -> Option<Variable<'a>> {
        Variable::from_handle(unsafe {
            slangc::TypeLayoutReflection_getBindingRangeLeafVariable(self.handle, index as slangc::SlangInt)
        })
    }

    /// Type layout at the leaf of a binding range.
    pub fn binding_range_leaf_type_layout(&self, index: usize) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe {
            slangc::TypeLayoutReflection_getBindingRangeLeafTypeLayout(self.handle, index as slangc::SlangInt)
        })
    }

    /// Descriptor set a binding range lives in.
    pub fn binding_range_descriptor_set_index(&self, index: usize) -> i64 {
        unsafe {
            slangc::TypeLayoutReflection_getBindingRangeDescriptorSetIndex(self.handle, index as slangc::SlangInt)
        }
    }

    /// Number of descriptor sets needed by this type.
    pub fn descriptor_set_count(&self) -> usize {
        let count = unsafe { slangc::TypeLayoutReflection_getDescriptorSetCount(self.handle) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<TypeLayoutReflection> {
        self.handle
    }
}

impl std::fmt::Debug for TypeLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeLayout")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("size", &self.size(ParameterCategory::Uniform))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_kind_from_raw() {
        assert_eq!(TypeKind::from(slangc::SLANG_TYPE_KIND_CONSTANT_BUFFER), TypeKind::ConstantBuffer);
        assert_eq!(TypeKind::from(slangc::SLANG_TYPE_KIND_DYNAMIC_RESOURCE), TypeKind::DynamicResource);
        assert_eq!(TypeKind::from(slangc::SLANG_TYPE_KIND_COUNT), TypeKind::None);
    }

    #[test]
    fn test_scalar_type() {
        assert_eq!(ScalarType::from(slangc::SLANG_SCALAR_TYPE_FLOAT32), ScalarType::Float32);
        assert_eq!(ScalarType::Float32.size(), Some(4));
        assert_eq!(ScalarType::Float16.size(), Some(2));
        assert_eq!(ScalarType::Void.size(), None);
        assert_eq!(ScalarType::from(99), ScalarType::None);
    }

    #[test]
    fn test_resource_shape_splits_flags() {
        let raw = slangc::SLANG_TEXTURE_2D_MULTISAMPLE_ARRAY;
        assert_eq!(ResourceShape::from(raw), ResourceShape::Texture2D);
        assert_eq!(
            ResourceShapeFlags::from_bits_truncate(raw),
            ResourceShapeFlags::ARRAY | ResourceShapeFlags::MULTISAMPLE
        );
        assert_eq!(ResourceShape::from(slangc::SLANG_STRUCTURED_BUFFER), ResourceShape::StructuredBuffer);
        assert_eq!(ResourceShape::from(slangc::SLANG_RESOURCE_UNKNOWN), ResourceShape::Unknown);
    }

    #[test]
    fn test_resource_access() {
        assert_eq!(ResourceAccess::from(2), ResourceAccess::ReadWrite);
        assert!(ResourceAccess::ReadWrite.is_writable());
        assert!(!ResourceAccess::Read.is_writable());
        assert_eq!(ResourceAccess::from(slangc::SLANG_RESOURCE_ACCESS_UNKNOWN), ResourceAccess::Unknown);
    }

    #[test]
    fn test_null_handles_are_none() {
        assert!(Type::from_handle(Handle::null()).is_none());
        assert!(TypeLayout::from_handle(Handle::null()).is_none());
    }
}
