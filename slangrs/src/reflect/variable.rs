//! Variable reflection

use super::{Attribute, Iter, ParameterCategory, Stage, Type, TypeLayout, str_from};
use slangc::{Handle, VariableLayoutReflection, VariableReflection};
use std::marker::PhantomData;

/// A declared variable: global parameter, struct field or function parameter
#[derive(Clone, Copy)]
pub struct Variable<'a> {
    handle: Handle<VariableReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Variable<'a> {
    pub(crate) fn from_handle(handle: Handle<VariableReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(Variable {
            handle,
            _marker: PhantomData,
        })
    }

    /// Gets the variable name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::VariableReflection_getName(self.handle)) }
    }

    /// Gets the declared type.
    pub fn ty(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::VariableReflection_getType(self.handle) })
    }

    /// Number of user-defined attributes.
    pub fn user_attribute_count(&self) -> u32 {
        unsafe { slangc::VariableReflection_getUserAttributeCount(self.handle) }
    }

    /// Gets a user-defined attribute by index.
    pub fn user_attribute(&self, index: u32) -> Option<Attribute<'a>> {
        Attribute::from_handle(unsafe { slangc::VariableReflection_getUserAttributeByIndex(self.handle, index) })
    }

    /// Returns an iterator over user-defined attributes.
    pub fn user_attributes(&self) -> Iter<Self, Attribute<'a>> {
        Iter::new(*self, self.user_attribute_count(), |var, i| var.user_attribute(i))
    }

    /// Returns true if the declaration has an initializer.
    pub fn has_default_value(&self) -> bool {
        unsafe { slangc::VariableReflection_hasDefaultValue(self.handle) }
    }

    /// Integer value of the initializer, if it is a compile-time constant.
    pub fn default_value_int(&self) -> Option<i64> {
        let mut value = 0i64;
        let status = unsafe { slangc::VariableReflection_getDefaultValue(self.handle, &mut value) };
        slangc::succeeded(status).then_some(value)
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<VariableReflection> {
        self.handle
    }
}

impl std::fmt::Debug for Variable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variable").field("name", &self.name()).finish()
    }
}

/// A variable together with its binding on one target
#[derive(Clone, Copy)]
pub struct VariableLayout<'a> {
    handle: Handle<VariableLayoutReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> VariableLayout<'a> {
    pub(crate) fn from_handle(handle: Handle<VariableLayoutReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(VariableLayout {
            handle,
            _marker: PhantomData,
        })
    }

    /// The underlying declaration.
    pub fn variable(&self) -> Option<Variable<'a>> {
        Variable::from_handle(unsafe { slangc::VariableLayoutReflection_getVariable(self.handle) })
    }

    /// Gets the variable name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::VariableLayoutReflection_getName(self.handle)) }
    }

    /// Layout of the variable's type.
    pub fn type_layout(&self) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe { slangc::VariableLayoutReflection_getTypeLayout(self.handle) })
    }

    /// The variable's type.
    pub fn ty(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::VariableLayoutReflection_getType(self.handle) })
    }

    /// The single category this variable consumes, or `Mixed`.
    pub fn category(&self) -> ParameterCategory {
        ParameterCategory::from(unsafe { slangc::VariableLayoutReflection_getCategory(self.handle) })
    }

    /// Every category this variable consumes.
    pub fn categories(&self) -> Vec<ParameterCategory> {
        let count = unsafe { slangc::VariableLayoutReflection_getCategoryCount(self.handle) };
        (0..count)
            .map(|i| {
                ParameterCategory::from(unsafe { slangc::VariableLayoutReflection_getCategoryByIndex(self.handle, i) })
            })
            .collect()
    }

    /// Offset for `category`: a register index, or a byte offset for
    /// [`ParameterCategory::Uniform`].
    pub fn offset(&self, category: ParameterCategory) -> usize {
        unsafe { slangc::VariableLayoutReflection_getOffset(self.handle, category.as_raw()) }
    }

    /// Binding index in the variable's primary category.
    pub fn binding_index(&self) -> u32 {
        unsafe { slangc::VariableLayoutReflection_getBindingIndex(self.handle) }
    }

    /// Register space / descriptor set in the primary category.
    pub fn binding_space(&self) -> u32 {
        unsafe { slangc::VariableLayoutReflection_getBindingSpace(self.handle) }
    }

    /// Register space / descriptor set for `category`.
    pub fn binding_space_for(&self, category: ParameterCategory) -> usize {
        unsafe { slangc::VariableLayoutReflection_getBindingSpaceByCategory(self.handle, category.as_raw()) }
    }

    /// Raw `SlangImageFormat` of a typed storage image.
    pub fn image_format(&self) -> u32 {
        unsafe { slangc::VariableLayoutReflection_getImageFormat(self.handle) }
    }

    /// Semantic name of a varying parameter.
    pub fn semantic_name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::VariableLayoutReflection_getSemanticName(self.handle)) }
    }

    pub fn semantic_index(&self) -> usize {
        unsafe { slangc::VariableLayoutReflection_getSemanticIndex(self.handle) }
    }

    /// Stage of a varying parameter.
    pub fn stage(&self) -> Stage {
        Stage::from(unsafe { slangc::VariableLayoutReflection_getSlangStage(self.handle) })
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<VariableLayoutReflection> {
        self.handle
    }
}

impl std::fmt::Debug for VariableLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableLayout")
            .field("name", &self.name())
            .field("category", &self.category())
            .field("binding_index", &self.binding_index())
            .field("binding_space", &self.binding_space())
            .finish()
    }
}
