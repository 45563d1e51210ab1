//! RAII wrapper for IBlob

use slangc::com::IBlob;
use slangc::{Handle, SLANG_OK, getBlobSlice, release};
use std::ffi::c_void;
use std::ops::Deref;
use std::{ptr, slice};

/// RAII wrapper for IBlob
///
/// Holds one reference to a Slang blob (target code or diagnostics) and
/// releases it on drop.
pub struct Blob {
    handle: Handle<IBlob>,
}

impl Blob {
    /// Takes ownership of one reference to `handle`.
    ///
    /// # Safety
    /// The handle must be a valid IBlob or null.
    /// Takes ownership of the reference count (does not addRef).
    pub(crate) unsafe fn from_handle(handle: Handle<IBlob>) -> Option<Self> {
        if handle.is_null() {
            None
        } else {
            Some(Blob { handle })
        }
    }

    /// Reads and releases a diagnostics blob, returning its text if any.
    ///
    /// # Safety
    /// Same as [`Blob::from_handle`].
    pub(crate) unsafe fn take_diagnostics(handle: Handle<IBlob>) -> Option<String> {
        unsafe { Self::from_handle(handle) }
            .map(|blob| blob.to_string_lossy())
            .filter(|s| !s.is_empty())
    }

    /// Returns the blob data as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        let mut data: *const c_void = ptr::null();
        let mut size = 0usize;
        unsafe {
            if getBlobSlice(self.handle, &mut data, &mut size) != SLANG_OK {
                return &[];
            }
            slice::from_raw_parts(data as *const u8, size)
        }
    }

    /// Returns the size of the blob in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Interprets the blob as a UTF-8 string.
    ///
    /// Useful for diagnostics and textual targets (HLSL, GLSL, SPIR-V assembly).
    /// Trailing null bytes are trimmed.
    pub fn as_str(&self) -> crate::Result<&str> {
        std::str::from_utf8(trim_nulls(self.as_bytes())).map_err(Into::into)
    }

    /// Converts the blob to a String, trimming trailing nulls.
    ///
    /// Invalid UTF-8 sequences are replaced.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(trim_nulls(self.as_bytes())).into_owned()
    }

    /// Reinterprets the blob as little-endian 32-bit words (SPIR-V).
    ///
    /// Returns `None` if the length is not a multiple of four.
    pub fn to_words(&self) -> Option<Vec<u32>> {
        let bytes = self.as_bytes();
        if bytes.len() % 4 != 0 {
            return None;
        }
        Some(
            bytes
                .chunks_exact(4)
                .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
                .collect(),
        )
    }

    /// Returns the raw handle (for use with the `slangc` C ABI).
    pub fn as_handle(&self) -> Handle<IBlob> {
        self.handle
    }
}

fn trim_nulls(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .rposition(|&b| b != 0)
        .map(|i| &bytes[..=i])
        .unwrap_or(&[])
}

impl Drop for Blob {
    fn drop(&mut self) {
        unsafe {
            release(self.handle.cast());
        }
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.len())
            .field("handle", &self.handle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_nulls() {
        assert_eq!(trim_nulls(b"error\0\0"), b"error");
        assert_eq!(trim_nulls(b"\0\0"), b"");
        assert_eq!(trim_nulls(b""), b"");
        assert_eq!(trim_nulls(b"a\0b"), b"a\0b");
    }

    #[test]
    fn test_null_handle_is_no_blob() {
        assert!(unsafe { Blob::from_handle(Handle::null()) }.is_none());
        assert!(unsafe { Blob::take_diagnostics(Handle::null()) }.is_none());
    }
}
