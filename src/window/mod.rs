//! The platform window: class registration, creation, the window procedure
//! and the message pump.

mod class;
pub use class::WindowClass;

use crate::dependencies::{
    null_mut, once, zeroed, BeginPaint, CreateWindowExW, DefWindowProcW, DispatchMessageW,
    EndPaint, OsStr, OsStrExt, PeekMessageW, HWND, LPARAM, LRESULT, MSG, PAINTSTRUCT, PM_REMOVE,
    UINT, WM_CLOSE, WM_PAINT, WPARAM, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
};
use crate::error::{last_error, PlatformError, Result};
use crate::frame::{CloseSignal, MessagePump};

const CLASS_NAME: &str = "HuecycleWindow";
const WINDOW_WIDTH: i32 = 500;
const WINDOW_HEIGHT: i32 = 500;

/// Set by the window procedure when the user asks to close the window.
///
/// The procedure is invoked by the windowing system, not from this crate's
/// call stack, so it cannot capture state; this latch is the only channel
/// between it and the frame loop.
pub static CLOSE_REQUESTED: CloseSignal = CloseSignal::new();

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    message: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match message {
        WM_PAINT => {
            // All drawing happens in the frame loop; just validate the region.
            let mut paint: PAINTSTRUCT = zeroed();
            BeginPaint(hwnd, &mut paint);
            EndPaint(hwnd, &paint);
            0
        }
        WM_CLOSE => {
            CLOSE_REQUESTED.request();
            0
        }
        _ => DefWindowProcW(hwnd, message, wparam, lparam),
    }
}

pub struct Window {
    // Field order keeps the class registered until the window handle is gone.
    hwnd: HWND,
    #[allow(dead_code)]
    class: WindowClass,
}

impl Window {
    /// Register the window class and create the single visible top-level
    /// window. Both steps are one-shot startup preconditions; neither is
    /// retried on failure.
    pub fn create(title: &str) -> Result<Self> {
        let class = WindowClass::register(CLASS_NAME, Some(window_proc))?;
        let title = to_wide(title);

        let hwnd = unsafe {
            CreateWindowExW(
                // No extended styles.
                0,
                class.name_ptr(),
                title.as_ptr(),
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                0,
                0,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                null_mut(),
                null_mut(),
                class.instance(),
                null_mut(),
            )
        };

        if hwnd.is_null() {
            return Err(PlatformError::WindowCreation { code: last_error() });
        }

        log::info!("window created ({WINDOW_WIDTH}x{WINDOW_HEIGHT})");
        Ok(Self { hwnd, class })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

/// Non-blocking pump over the window's message queue.
pub struct MessageQueue {
    hwnd: HWND,
}

impl MessageQueue {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl MessagePump for MessageQueue {
    fn pump_one(&mut self) -> bool {
        let mut message: MSG = unsafe { zeroed() };
        if unsafe { PeekMessageW(&mut message, self.hwnd, 0, 0, PM_REMOVE) } == 0 {
            return false;
        }
        unsafe { DispatchMessageW(&message) };
        true
    }
}

/// NUL-terminated UTF-16 for the W-suffixed Win32 entry points.
pub fn to_wide(text: &str) -> Vec<u16> {
    OsStr::new(text).encode_wide().chain(once(0)).collect()
}
