pub use std::{
    ffi::{CString, OsStr},
    iter::once,
    mem::{size_of, zeroed},
    os::windows::ffi::OsStrExt,
    ptr::{null, null_mut},
};

pub use winapi::{
    shared::{
        minwindef::{HINSTANCE, HMODULE, LPARAM, LRESULT, UINT, WPARAM},
        ntdef::LPCWSTR,
        windef::{HDC, HGLRC, HWND},
    },
    um::{
        errhandlingapi::GetLastError,
        libloaderapi::{GetModuleHandleW, GetProcAddress, LoadLibraryW},
        wingdi::{
            wglCreateContext, wglDeleteContext, wglGetProcAddress, wglMakeCurrent,
            ChoosePixelFormat, SetPixelFormat, SwapBuffers, PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW,
            PFD_MAIN_PLANE, PFD_SUPPORT_OPENGL, PFD_TYPE_RGBA, PIXELFORMATDESCRIPTOR,
        },
        winuser::{
            BeginPaint, CreateWindowExW, DefWindowProcW, DispatchMessageW, EndPaint, GetDC,
            PeekMessageW, RegisterClassExW, ReleaseDC, UnregisterClassW, MSG, PAINTSTRUCT,
            PM_REMOVE, WM_CLOSE, WM_PAINT, WNDCLASSEXW, WNDPROC, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
        },
    },
};
