//! Pixel-format negotiation for the window's drawing surface.
//!
//! The negotiation itself ([`negotiate`]) is a short state machine over the
//! [`SurfaceOps`] strategy: acquire the surface, choose the best matching
//! format, apply it, release the surface on every path. The Win32
//! implementation maps that onto `GetDC`, `ChoosePixelFormat`,
//! `SetPixelFormat` and `ReleaseDC`.

use crate::error::Result;

/// Capabilities the drawing surface must provide. Buffering (double) and
/// color model (RGBA) are fixed; only the bit depths vary.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRequirements {
    pub color_bits: u8,
    pub depth_bits: u8,
}

impl Default for SurfaceRequirements {
    fn default() -> Self {
        Self {
            color_bits: 24,
            depth_bits: 32,
        }
    }
}

/// Platform seam for format negotiation. `Surface` is the scoped drawing
/// surface handle; every successful `acquire` is matched by exactly one
/// `release` inside [`negotiate`].
pub trait SurfaceOps {
    type Surface;

    fn acquire(&mut self) -> Result<Self::Surface>;
    fn release(&mut self, surface: Self::Surface);
    fn choose_format(&mut self, surface: &Self::Surface, wanted: &SurfaceRequirements)
        -> Result<i32>;
    fn apply_format(
        &mut self,
        surface: &Self::Surface,
        index: i32,
        wanted: &SurfaceRequirements,
    ) -> Result<()>;
}

/// Negotiate and apply a pixel format, returning the chosen format index.
///
/// The surface is released before returning whether choosing or applying
/// failed; only a failed acquisition skips the release.
pub fn negotiate<O: SurfaceOps>(ops: &mut O, wanted: &SurfaceRequirements) -> Result<i32> {
    let surface = ops.acquire()?;

    let chosen = ops
        .choose_format(&surface, wanted)
        .and_then(|index| ops.apply_format(&surface, index, wanted).map(|()| index));

    ops.release(surface);
    chosen
}

#[cfg(windows)]
pub use win32::{configure, DeviceContext, WindowSurface};

#[cfg(windows)]
mod win32 {
    use super::{negotiate, SurfaceOps, SurfaceRequirements};
    use crate::dependencies::{
        size_of, zeroed, ChoosePixelFormat, GetDC, ReleaseDC, SetPixelFormat, SwapBuffers, HDC,
        HWND, PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW, PFD_MAIN_PLANE, PFD_SUPPORT_OPENGL,
        PFD_TYPE_RGBA, PIXELFORMATDESCRIPTOR,
    };
    use crate::error::{last_error, PlatformError, Result};
    use crate::window::Window;

    /// Negotiate the default double-buffered RGBA format for the window.
    pub fn configure(window: &Window) -> Result<i32> {
        let mut ops = WindowSurface::new(window.hwnd());
        let index = negotiate(&mut ops, &SurfaceRequirements::default())?;
        log::info!("pixel format {index} applied to the window surface");
        Ok(index)
    }

    /// [`SurfaceOps`] over the window's device context.
    pub struct WindowSurface {
        hwnd: HWND,
    }

    impl WindowSurface {
        pub fn new(hwnd: HWND) -> Self {
            Self { hwnd }
        }
    }

    impl SurfaceOps for WindowSurface {
        type Surface = HDC;

        fn acquire(&mut self) -> Result<HDC> {
            let dc = unsafe { GetDC(self.hwnd) };
            if dc.is_null() {
                return Err(PlatformError::SurfaceAcquisition);
            }
            Ok(dc)
        }

        fn release(&mut self, surface: HDC) {
            unsafe { ReleaseDC(self.hwnd, surface) };
        }

        fn choose_format(&mut self, surface: &HDC, wanted: &SurfaceRequirements) -> Result<i32> {
            let descriptor = describe(wanted);
            let index = unsafe { ChoosePixelFormat(*surface, &descriptor) };
            if index == 0 {
                return Err(PlatformError::NoMatchingPixelFormat);
            }
            Ok(index)
        }

        fn apply_format(
            &mut self,
            surface: &HDC,
            index: i32,
            wanted: &SurfaceRequirements,
        ) -> Result<()> {
            let descriptor = describe(wanted);
            if unsafe { SetPixelFormat(*surface, index, &descriptor) } == 0 {
                return Err(PlatformError::SetPixelFormat {
                    index,
                    code: last_error(),
                });
            }
            Ok(())
        }
    }

    fn describe(wanted: &SurfaceRequirements) -> PIXELFORMATDESCRIPTOR {
        PIXELFORMATDESCRIPTOR {
            nSize: size_of::<PIXELFORMATDESCRIPTOR>() as u16,
            nVersion: 1,
            dwFlags: PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL | PFD_DOUBLEBUFFER,
            iPixelType: PFD_TYPE_RGBA,
            cColorBits: wanted.color_bits,
            cDepthBits: wanted.depth_bits,
            iLayerType: PFD_MAIN_PLANE,
            ..unsafe { zeroed() }
        }
    }

    /// Scoped device context, released on drop. Used wherever the surface
    /// handle outlives a single call: context creation and presentation.
    pub struct DeviceContext {
        hwnd: HWND,
        hdc: HDC,
    }

    impl DeviceContext {
        pub fn acquire(hwnd: HWND) -> Result<Self> {
            let hdc = unsafe { GetDC(hwnd) };
            if hdc.is_null() {
                return Err(PlatformError::SurfaceAcquisition);
            }
            Ok(Self { hwnd, hdc })
        }

        pub fn raw(&self) -> HDC {
            self.hdc
        }

        pub fn swap_buffers(&self) -> Result<()> {
            if unsafe { SwapBuffers(self.hdc) } == 0 {
                return Err(PlatformError::PresentFailed { code: last_error() });
            }
            Ok(())
        }
    }

    impl Drop for DeviceContext {
        fn drop(&mut self) {
            unsafe { ReleaseDC(self.hwnd, self.hdc) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlatformError;

    /// Counts acquire/release pairs and can be told to fail at each stage.
    #[derive(Default)]
    struct CountingOps {
        acquired: usize,
        released: usize,
        fail_acquire: bool,
        fail_choose: bool,
        fail_apply: bool,
    }

    impl SurfaceOps for CountingOps {
        type Surface = u32;

        fn acquire(&mut self) -> Result<u32> {
            if self.fail_acquire {
                return Err(PlatformError::SurfaceAcquisition);
            }
            self.acquired += 1;
            Ok(7)
        }

        fn release(&mut self, surface: u32) {
            assert_eq!(surface, 7);
            self.released += 1;
        }

        fn choose_format(&mut self, _: &u32, _: &SurfaceRequirements) -> Result<i32> {
            if self.fail_choose {
                return Err(PlatformError::NoMatchingPixelFormat);
            }
            Ok(3)
        }

        fn apply_format(&mut self, _: &u32, index: i32, _: &SurfaceRequirements) -> Result<()> {
            if self.fail_apply {
                return Err(PlatformError::SetPixelFormat { index, code: 0 });
            }
            Ok(())
        }
    }

    #[test]
    fn success_releases_exactly_once() {
        let mut ops = CountingOps::default();

        let index = negotiate(&mut ops, &SurfaceRequirements::default()).unwrap();

        assert_eq!(index, 3);
        assert_eq!(ops.acquired, 1);
        assert_eq!(ops.released, 1);
    }

    #[test]
    fn choose_failure_still_releases() {
        let mut ops = CountingOps {
            fail_choose: true,
            ..CountingOps::default()
        };

        let result = negotiate(&mut ops, &SurfaceRequirements::default());

        assert!(matches!(result, Err(PlatformError::NoMatchingPixelFormat)));
        assert_eq!(ops.acquired, 1);
        assert_eq!(ops.released, 1);
    }

    #[test]
    fn apply_failure_still_releases() {
        let mut ops = CountingOps {
            fail_apply: true,
            ..CountingOps::default()
        };

        let result = negotiate(&mut ops, &SurfaceRequirements::default());

        assert!(matches!(
            result,
            Err(PlatformError::SetPixelFormat { index: 3, .. })
        ));
        assert_eq!(ops.acquired, 1);
        assert_eq!(ops.released, 1);
    }

    #[test]
    fn acquire_failure_releases_nothing() {
        let mut ops = CountingOps {
            fail_acquire: true,
            ..CountingOps::default()
        };

        let result = negotiate(&mut ops, &SurfaceRequirements::default());

        assert!(matches!(result, Err(PlatformError::SurfaceAcquisition)));
        assert_eq!(ops.released, 0);
    }
}
