use crate::dependencies::{
    null, null_mut, size_of, GetModuleHandleW, RegisterClassExW, UnregisterClassW, HINSTANCE,
    LPCWSTR, UINT, WNDCLASSEXW, WNDPROC,
};
use crate::error::{last_error, PlatformError, Result};
use crate::window::to_wide;

/// Registered window class. Keeps the wide class name alive for as long as
/// the registration exists; unregisters on drop.
pub struct WindowClass {
    name: Vec<u16>,
    instance: HINSTANCE,
}

impl WindowClass {
    pub fn register(name: &str, window_proc: WNDPROC) -> Result<Self> {
        let name = to_wide(name);
        let instance = unsafe { GetModuleHandleW(null()) };

        let descriptor = WNDCLASSEXW {
            cbSize: size_of::<WNDCLASSEXW>() as UINT,
            style: 0,
            lpfnWndProc: window_proc,
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance,
            hIcon: null_mut(),
            hCursor: null_mut(),
            hbrBackground: null_mut(),
            lpszMenuName: null(),
            lpszClassName: name.as_ptr(),
            hIconSm: null_mut(),
        };

        if unsafe { RegisterClassExW(&descriptor) } == 0 {
            return Err(PlatformError::ClassRegistration { code: last_error() });
        }

        log::debug!("window class registered");
        Ok(Self { name, instance })
    }

    pub fn name_ptr(&self) -> LPCWSTR {
        self.name.as_ptr()
    }

    pub fn instance(&self) -> HINSTANCE {
        self.instance
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        unsafe { UnregisterClassW(self.name.as_ptr(), self.instance) };
    }
}
