//! The two Win32 resolution tiers: the opengl32.dll export table and the
//! per-context `wglGetProcAddress` extension loader.

use super::{ProcAddress, ProcResolver};
use crate::dependencies::{wglGetProcAddress, CString, GetProcAddress, LoadLibraryW, HMODULE};
use crate::error::{last_error, PlatformError, Result};
use crate::window::to_wide;

/// Static export table of opengl32.dll. Covers the core 1.1 entry points.
pub struct OpenglLibrary {
    module: HMODULE,
}

impl OpenglLibrary {
    pub fn open() -> Result<Self> {
        let name = to_wide("opengl32.dll");
        let module = unsafe { LoadLibraryW(name.as_ptr()) };
        if module.is_null() {
            return Err(PlatformError::LibraryLoad {
                name: "opengl32.dll",
                code: last_error(),
            });
        }
        Ok(Self { module })
    }
}

impl ProcResolver for OpenglLibrary {
    fn try_resolve(&self, name: &str) -> Option<ProcAddress> {
        let symbol = CString::new(name).ok()?;
        let address = unsafe { GetProcAddress(self.module, symbol.as_ptr()) };
        if address.is_null() {
            return None;
        }
        Some(address as ProcAddress)
    }
}

/// Extension loader tier. Only yields addresses while a rendering context
/// is current on the calling thread.
pub struct WglExtensions;

impl ProcResolver for WglExtensions {
    fn try_resolve(&self, name: &str) -> Option<ProcAddress> {
        let symbol = CString::new(name).ok()?;
        let address = unsafe { wglGetProcAddress(symbol.as_ptr()) };
        if address.is_null() {
            return None;
        }
        Some(address as ProcAddress)
    }
}
