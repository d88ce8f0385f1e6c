//! A single Win32 window with a WGL rendering context, clearing the
//! framebuffer to a slowly cycling color every frame.
//!
//! The platform-facing modules (`window`, `surface`, `context`, `gl::win32`,
//! `app`) only exist on Windows. The logic they sit on top of — color
//! derivation, message-drain termination, pixel-format negotiation and the
//! two-tier entry-point resolver — is platform-free and lives behind small
//! traits so it can be exercised without a window system.

#[cfg(windows)]
pub mod dependencies;

pub mod error;
pub mod frame;
pub mod gl;
pub mod surface;

#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub mod context;

#[cfg(windows)]
pub mod app;

pub use error::{PlatformError, Result};
