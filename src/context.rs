//! The WGL rendering context: created against the window surface, made
//! current on the calling thread, deleted exactly once on drop.

use crate::dependencies::{
    null_mut, wglCreateContext, wglDeleteContext, wglMakeCurrent, HGLRC, HWND,
};
use crate::error::{last_error, PlatformError, Result};
use crate::surface::DeviceContext;

pub struct RenderingContext {
    handle: HGLRC,
}

impl RenderingContext {
    /// Create a context bound to the window's surface and make it current.
    ///
    /// The device context is only needed for the duration of this call; the
    /// rendering context stays valid and current after it is released.
    pub fn create_current(hwnd: HWND) -> Result<Self> {
        let surface = DeviceContext::acquire(hwnd)?;

        let handle = unsafe { wglCreateContext(surface.raw()) };
        if handle.is_null() {
            return Err(PlatformError::ContextCreation { code: last_error() });
        }

        if unsafe { wglMakeCurrent(surface.raw(), handle) } == 0 {
            let code = last_error();
            unsafe { wglDeleteContext(handle) };
            return Err(PlatformError::ContextActivation { code });
        }

        log::info!("rendering context created and made current");
        Ok(Self { handle })
    }
}

impl Drop for RenderingContext {
    fn drop(&mut self) {
        unsafe {
            wglMakeCurrent(null_mut(), null_mut());
            wglDeleteContext(self.handle);
        }
    }
}
