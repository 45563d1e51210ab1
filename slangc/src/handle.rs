//! Opaque handles crossing the C boundary

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;

/// A non-owning, type-tagged pointer to a Slang object.
///
/// ABI-identical to `void*`. `T` is the interface or reflection struct the
/// pointer is reinterpreted as; nothing checks that the tag is right.
#[repr(transparent)]
pub struct Handle<T> {
    ptr: *mut c_void,
    _kind: PhantomData<*mut T>,
}

impl<T> Handle<T> {
    #[inline]
    pub const fn null() -> Self {
        Handle {
            ptr: std::ptr::null_mut(),
            _kind: PhantomData,
        }
    }

    #[inline]
    pub const fn from_raw(ptr: *mut T) -> Self {
        Handle {
            ptr: ptr as *mut c_void,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub const fn as_raw(self) -> *mut T {
        self.ptr as *mut T
    }

    #[inline]
    pub const fn as_ptr(self) -> *mut c_void {
        self.ptr
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// Retags the handle, e.g. an `IModule` used as an `IComponentType`.
    #[inline]
    pub const fn cast<U>(self) -> Handle<U> {
        Handle {
            ptr: self.ptr,
            _kind: PhantomData,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<*mut T> for Handle<T> {
    fn from(ptr: *mut T) -> Self {
        Self::from_raw(ptr)
    }
}

impl<T> From<*const T> for Handle<T> {
    fn from(ptr: *const T) -> Self {
        Self::from_raw(ptr as *mut T)
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        write!(f, "Handle<{}>({:p})", short, self.ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeReflection;

    #[test]
    fn test_handle_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Handle<TypeReflection>>(),
            std::mem::size_of::<*mut c_void>()
        );
    }

    #[test]
    fn test_null_and_cast() {
        let handle: Handle<TypeReflection> = Handle::null();
        assert!(handle.is_null());
        assert_eq!(handle, Handle::default());

        let mut value = 7u32;
        let typed = Handle::from_raw(&mut value as *mut u32);
        let untyped: Handle<c_void> = typed.cast();
        assert_eq!(untyped.as_ptr(), typed.as_ptr());
        assert_eq!(unsafe { *untyped.cast::<u32>().as_raw() }, 7);
    }
}
