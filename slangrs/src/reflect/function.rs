//! Functions, attributes and type parameters

use super::{Iter, Type, Variable, str_from};
use slangc::{Attribute as RawAttribute, FunctionReflection, Handle, TypeParameterReflection};
use std::ffi::c_char;
use std::marker::PhantomData;

/// A function declaration
#[derive(Clone, Copy)]
pub struct Function<'a> {
    handle: Handle<FunctionReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Function<'a> {
    pub(crate) fn from_handle(handle: Handle<FunctionReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(Function {
            handle,
            _marker: PhantomData,
        })
    }

    /// Gets the function name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::FunctionReflection_getName(self.handle)) }
    }

    /// Gets the return type.
    pub fn return_type(&self) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::FunctionReflection_getReturnType(self.handle) })
    }

    pub fn parameter_count(&self) -> u32 {
        unsafe { slangc::FunctionReflection_getParameterCount(self.handle) }
    }

    /// Gets a parameter declaration by index.
    pub fn parameter(&self, index: u32) -> Option<Variable<'a>> {
        Variable::from_handle(unsafe { slangc::FunctionReflection_getParameterByIndex(self.handle, index) })
    }

    /// Returns an iterator over parameter declarations.
    pub fn parameters(&self) -> Iter<Self, Variable<'a>> {
        Iter::new(*self, self.parameter_count(), |f, i| f.parameter(i))
    }

    pub fn user_attribute_count(&self) -> u32 {
        unsafe { slangc::FunctionReflection_getUserAttributeCount(self.handle) }
    }

    /// Gets a user-defined attribute by index.
    pub fn user_attribute(&self, index: u32) -> Option<Attribute<'a>> {
        Attribute::from_handle(unsafe { slangc::FunctionReflection_getUserAttributeByIndex(self.handle, index) })
    }

    /// Returns an iterator over user-defined attributes.
    pub fn user_attributes(&self) -> Iter<Self, Attribute<'a>> {
        Iter::new(*self, self.user_attribute_count(), |f, i| f.user_attribute(i))
    }

    /// Returns true if the name resolves to several overloads.
    pub fn is_overloaded(&self) -> bool {
        unsafe { slangc::FunctionReflection_isOverloaded(self.handle) }
    }

    /// Returns an iterator over the overloads of an overloaded name.
    pub fn overloads(&self) -> Iter<Self, Function<'a>> {
        let count = unsafe { slangc::FunctionReflection_getOverloadCount(self.handle) };
        Iter::new(*self, count, |f, i| {
            Function::from_handle(unsafe { slangc::FunctionReflection_getOverload(f.handle, i) })
        })
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<FunctionReflection> {
        self.handle
    }
}

impl std::fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("name", &self.name()).finish()
    }
}

/// A user-defined attribute, e.g. `[MyAttr(1, "x")]`
#[derive(Clone, Copy)]
pub struct Attribute<'a> {
    handle: Handle<RawAttribute>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Attribute<'a> {
    pub(crate) fn from_handle(handle: Handle<RawAttribute>) -> Option<Self> {
        (!handle.is_null()).then_some(Attribute {
            handle,
            _marker: PhantomData,
        })
    }

    /// Gets the attribute name.
    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::AttributeReflection_getName(self.handle)) }
    }

    pub fn argument_count(&self) -> u32 {
        unsafe { slangc::AttributeReflection_getArgumentCount(self.handle) }
    }

    /// Gets the type of an argument.
    pub fn argument_type(&self, index: u32) -> Option<Type<'a>> {
        Type::from_handle(unsafe { slangc::AttributeReflection_getArgumentType(self.handle, index) })
    }

    /// Reads an integer argument.
    pub fn argument_int(&self, index: u32) -> Option<i32> {
        let mut value = 0i32;
        let status = unsafe { slangc::AttributeReflection_getArgumentValueInt(self.handle, index, &mut value) };
        slangc::succeeded(status).then_some(value)
    }

    /// Reads a float argument.
    pub fn argument_float(&self, index: u32) -> Option<f32> {
        let mut value = 0f32;
        let status = unsafe { slangc::AttributeReflection_getArgumentValueFloat(self.handle, index, &mut value) };
        slangc::succeeded(status).then_some(value)
    }

    /// Reads a string argument.
    ///
    /// The string is not NUL-terminated; the returned slice uses the length
    /// Slang reports.
    pub fn argument_string(&self, index: u32) -> Option<&'a str> {
        let mut size = 0usize;
        let ptr: *const c_char =
            unsafe { slangc::AttributeReflection_getArgumentValueString(self.handle, index, &mut size) };
        if ptr.is_null() {
            return None;
        }
        let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, size) };
        std::str::from_utf8(bytes).ok()
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<RawAttribute> {
        self.handle
    }
}

impl std::fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name())
            .field("arguments", &self.argument_count())
            .finish()
    }
}

/// A global generic type parameter (`type_param T : IFoo;`)
#[derive(Clone, Copy)]
pub struct TypeParameter<'a> {
    handle: Handle<TypeParameterReflection>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> TypeParameter<'a> {
    pub(crate) fn from_handle(handle: Handle<TypeParameterReflection>) -> Option<Self> {
        (!handle.is_null()).then_some(TypeParameter {
            handle,
            _marker: PhantomData,
        })
    }

    pub fn name(&self) -> Option<&'a str> {
        unsafe { str_from(slangc::TypeParameterReflection_getName(self.handle)) }
    }

    /// Position among the program's type parameters.
    pub fn index(&self) -> u32 {
        unsafe { slangc::TypeParameterReflection_getIndex(self.handle) }
    }

    /// Returns an iterator over the interfaces the parameter must conform to.
    pub fn constraints(&self) -> Iter<Self, Type<'a>> {
        let count = unsafe { slangc::TypeParameterReflection_getConstraintCount(self.handle) };
        Iter::new(*self, count, |p, i| {
            Type::from_handle(unsafe { slangc::TypeParameterReflection_getConstraintByIndex(p.handle, i) })
        })
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<TypeParameterReflection> {
        self.handle
    }
}

impl std::fmt::Debug for TypeParameter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeParameter")
            .field("name", &self.name())
            .field("index", &self.index())
            .finish()
    }
}
