//! Error taxonomy for the bootstrap and the frame loop.
//!
//! Everything here is fatal at its call site: the bootstrap steps are
//! one-shot preconditions with no retry, and a failed present tears the
//! program down. Only entry-point lookup has a non-failing sibling
//! (`ProcResolver::try_resolve`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("window class registration failed (error code {code})")]
    ClassRegistration { code: u32 },

    #[error("window creation failed (error code {code})")]
    WindowCreation { code: u32 },

    #[error("drawing surface for the window could not be acquired")]
    SurfaceAcquisition,

    #[error("no pixel format matches the requested capabilities")]
    NoMatchingPixelFormat,

    #[error("applying pixel format {index} failed (error code {code})")]
    SetPixelFormat { index: i32, code: u32 },

    #[error("could not load {name} (error code {code})")]
    LibraryLoad { name: &'static str, code: u32 },

    #[error("rendering context creation failed (error code {code})")]
    ContextCreation { code: u32 },

    #[error("could not make the rendering context current (error code {code})")]
    ContextActivation { code: u32 },

    #[error("no entry point named `{0}` in the export table or the extension loader")]
    MissingEntryPoint(String),

    #[error("presenting the frame failed (error code {code})")]
    PresentFailed { code: u32 },
}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(windows)]
pub(crate) fn last_error() -> u32 {
    unsafe { crate::dependencies::GetLastError() }
}
