//! Program reflection
//!
//! Safe wrappers over Slang's reflection objects. Every wrapper is a `Copy`
//! view borrowed from the [`ComponentType`](crate::ComponentType) that
//! produced the [`ProgramLayout`]; nothing here owns or releases anything.
//!
//! # Example
//! ```no_run
//! use slangrs::{CompileTarget, GlobalSession, SessionBuilder};
//! use slangrs::reflect::ParameterCategory;
//!
//! let global = GlobalSession::new().unwrap();
//! let session = SessionBuilder::new().target(CompileTarget::Spirv).build(&global).unwrap();
//! let module = session
//!     .load_module(
//!         r#"
//!         RWStructuredBuffer<float> output;
//!         [shader("compute")]
//!         [numthreads(64, 1, 1)]
//!         void main(uint3 id : SV_DispatchThreadID) { output[id.x] = 1.0; }
//!         "#,
//!     )
//!     .unwrap();
//! let entry = module.find_entry_point("main").unwrap();
//! let program = session.compose(&[&module, &entry]).unwrap().link().unwrap();
//! let layout = program.layout(0).unwrap();
//!
//! for param in layout.parameters() {
//!     println!(
//!         "{}: binding {} set {}",
//!         param.name().unwrap_or("?"),
//!         param.offset(ParameterCategory::DescriptorTableSlot),
//!         param.binding_space_for(ParameterCategory::DescriptorTableSlot),
//!     );
//! }
//! ```

mod bindings;
mod entry_point;
mod function;
mod types;
mod variable;

pub use bindings::{BindingType, ParameterCategory};
pub use entry_point::{EntryPointReflection, Stage};
pub use function::{Attribute, Function, TypeParameter};
pub use types::{ResourceAccess, ResourceShape, ResourceShapeFlags, ScalarType, Type, TypeKind, TypeLayout};
pub use variable::{Variable, VariableLayout};

use crate::to_cstring;
use slangc::{Handle, SlangUInt};
use std::ffi::{CStr, c_char};
use std::marker::PhantomData;

/// Reads a NUL-terminated string owned by a reflection object.
///
/// # Safety
/// `ptr` must be null or point to a string that lives for `'a`.
pub(crate) unsafe fn str_from<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_str().ok()
    }
}

/// Iterator over an indexed reflection collection
pub struct Iter<P, T> {
    parent: P,
    index: u32,
    count: u32,
    get: fn(&P, u32) -> Option<T>,
}

impl<P, T> Iter<P, T> {
    pub(crate) fn new(parent: P, count: u32, get: fn(&P, u32) -> Option<T>) -> Self {
        Iter {
            parent,
            index: 0,
            count,
            get,
        }
    }
}

impl<P, T> Iterator for Iter<P, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        match (self.get)(&self.parent, self.index) {
            Some(item) => {
                self.index += 1;
                Some(item)
            }
            None => {
                // A missing element ends the collection
                self.index = self.count;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl<P, T> ExactSizeIterator for Iter<P, T> {}

/// Layout rules for [`ProgramLayout::type_layout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutRules {
    /// The target's default rules
    #[default]
    Default,
    /// Metal argument buffer tier 2
    MetalArgumentBufferTier2,
}

impl LayoutRules {
    fn as_raw(&self) -> slangc::SlangLayoutRulesIntegral {
        match self {
            LayoutRules::Default => slangc::SLANG_LAYOUT_RULES_DEFAULT,
            LayoutRules::MetalArgumentBufferTier2 => slangc::SLANG_LAYOUT_RULES_METAL_ARGUMENT_BUFFER_TIER_2,
        }
    }
}

/// Parameter layout of a program on one target
#[derive(Clone, Copy)]
pub struct ProgramLayout<'a> {
    handle: Handle<slangc::ProgramLayout>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> ProgramLayout<'a> {
    /// # Safety
    /// `handle` must be a non-null layout that stays valid for `'a`.
    pub(crate) unsafe fn from_handle(handle: Handle<slangc::ProgramLayout>) -> Self {
        ProgramLayout {
            handle,
            _marker: PhantomData,
        }
    }

    /// Number of global shader parameters.
    pub fn parameter_count(&self) -> u32 {
        unsafe { slangc::ProgramLayout_getParameterCount(self.handle) }
    }

    /// Gets a global parameter by index.
    pub fn parameter(&self, index: u32) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::ProgramLayout_getParameterByIndex(self.handle, index) })
    }

    /// Returns an iterator over global parameters.
    pub fn parameters(&self) -> Iter<Self, VariableLayout<'a>> {
        Iter::new(*self, self.parameter_count(), |layout, i| layout.parameter(i))
    }

    /// Number of entry points in the program.
    pub fn entry_point_count(&self) -> u32 {
        let count = unsafe { slangc::ProgramLayout_getEntryPointCount(self.handle) };
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Gets an entry point by index.
    pub fn entry_point(&self, index: u32) -> Option<EntryPointReflection<'a>> {
        EntryPointReflection::from_handle(unsafe {
            slangc::ProgramLayout_getEntryPointByIndex(self.handle, index as SlangUInt)
        })
    }

    /// Returns an iterator over entry points.
    pub fn entry_points(&self) -> Iter<Self, EntryPointReflection<'a>> {
        Iter::new(*self, self.entry_point_count(), |layout, i| layout.entry_point(i))
    }

    /// Finds an entry point by name.
    pub fn find_entry_point(&self, name: &str) -> Option<EntryPointReflection<'a>> {
        let name = to_cstring(name, "entry point name").ok()?;
        EntryPointReflection::from_handle(unsafe {
            slangc::ProgramLayout_findEntryPointReflectionByName(self.handle, name.as_ptr())
        })
    }

    /// Number of global generic type parameters.
    pub fn type_parameter_count(&self) -> u32 {
        unsafe { slangc::ProgramLayout_getTypeParameterCount(self.handle) }
    }

    /// Gets a global type parameter by index.
    pub fn type_parameter(&self, index: u32) -> Option<TypeParameter<'a>> {
        TypeParameter::from_handle(unsafe { slangc::ProgramLayout_getTypeParameterByIndex(self.handle, index) })
    }

    /// Returns an iterator over global type parameters.
    pub fn type_parameters(&self) -> Iter<Self, TypeParameter<'a>> {
        Iter::new(*self, self.type_parameter_count(), |layout, i| layout.type_parameter(i))
    }

    /// Finds a global type parameter by name.
    pub fn find_type_parameter(&self, name: &str) -> Option<TypeParameter<'a>> {
        let name = to_cstring(name, "type parameter name").ok()?;
        TypeParameter::from_handle(unsafe { slangc::ProgramLayout_findTypeParameter(self.handle, name.as_ptr()) })
    }

    /// Binding of the implicit constant buffer holding global uniforms.
    pub fn global_constant_buffer_binding(&self) -> u64 {
        unsafe { slangc::ProgramLayout_getGlobalConstantBufferBinding(self.handle) }
    }

    /// Size in bytes of the implicit global constant buffer.
    pub fn global_constant_buffer_size(&self) -> usize {
        unsafe { slangc::ProgramLayout_getGlobalConstantBufferSize(self.handle) }
    }

    /// Looks up a type by name in the program's scope.
    pub fn find_type_by_name(&self, name: &str) -> Option<Type<'a>> {
        let name = to_cstring(name, "type name").ok()?;
        Type::from_handle(unsafe { slangc::ProgramLayout_findTypeByName(self.handle, name.as_ptr()) })
    }

    /// Looks up a function by name in the program's scope.
    pub fn find_function_by_name(&self, name: &str) -> Option<Function<'a>> {
        let name = to_cstring(name, "function name").ok()?;
        Function::from_handle(unsafe { slangc::ProgramLayout_findFunctionByName(self.handle, name.as_ptr()) })
    }

    /// Computes the layout of an arbitrary type on this program's target.
    pub fn type_layout(&self, ty: Type<'a>, rules: LayoutRules) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe {
            slangc::ProgramLayout_getTypeLayout(self.handle, ty.as_handle(), rules.as_raw())
        })
    }

    /// Strings passed to `getStringHash` in the program, in hash-table order.
    pub fn hashed_strings(&self) -> Vec<String> {
        let count = unsafe { slangc::ProgramLayout_getHashedStringCount(self.handle) };
        (0..count)
            .filter_map(|i| {
                let mut size = 0usize;
                let ptr = unsafe { slangc::ProgramLayout_getHashedString(self.handle, i, &mut size) };
                if ptr.is_null() {
                    return None;
                }
                let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, size) };
                Some(String::from_utf8_lossy(bytes).into_owned())
            })
            .collect()
    }

    /// Layout of all global parameters viewed as one struct.
    pub fn global_params_type_layout(&self) -> Option<TypeLayout<'a>> {
        TypeLayout::from_handle(unsafe { slangc::ProgramLayout_getGlobalParamsTypeLayout(self.handle) })
    }

    /// Variable layout wrapping [`Self::global_params_type_layout`].
    pub fn global_params_var_layout(&self) -> Option<VariableLayout<'a>> {
        VariableLayout::from_handle(unsafe { slangc::ProgramLayout_getGlobalParamsVarLayout(self.handle) })
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<slangc::ProgramLayout> {
        self.handle
    }
}

impl std::fmt::Debug for ProgramLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramLayout")
            .field("parameters", &self.parameter_count())
            .field("entry_points", &self.entry_point_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_from() {
        assert_eq!(unsafe { str_from(std::ptr::null()) }, None);
        assert_eq!(unsafe { str_from(c"params".as_ptr()) }, Some("params"));
    }

    #[test]
    fn test_iter_counts_and_stops() {
        let items = [10u32, 20, 30];
        let iter = Iter::new(items, 3, |items, i| items.get(i as usize).copied());
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![10, 20, 30]);

        // A missing element ends iteration early
        let iter = Iter::new(items, 5, |items, i| items.get(i as usize).copied());
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn test_iter_len_after_early_end() {
        let items = [10u32, 20];
        let mut iter = Iter::new(items, 4, |items, i| items.get(i as usize).copied());
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.next(), Some(20));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_layout_rules() {
        assert_eq!(LayoutRules::default().as_raw(), slangc::SLANG_LAYOUT_RULES_DEFAULT);
        assert_eq!(LayoutRules::MetalArgumentBufferTier2.as_raw(), 1);
    }
}
