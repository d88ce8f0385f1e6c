//! Entry-point resolution and the minimal OpenGL binding.
//!
//! Core GL functions live in the library's static export table; extension
//! and newer-version functions only resolve through the context-specific
//! loader, and only while a context is current. [`Tiered`] composes the two
//! behind one [`ProcResolver`] capability so [`Gl`] never cares which tier
//! produced an address.

use std::ffi::c_void;
use std::mem::transmute;

use crate::error::{PlatformError, Result};

pub type ProcAddress = *const c_void;

pub const GL_COLOR_BUFFER_BIT: u32 = 0x0000_4000;

/// Resolve-by-name capability for graphics entry points.
pub trait ProcResolver {
    /// Address of the named entry point, or `None` if this resolver does not
    /// know it. Never returns a null address.
    fn try_resolve(&self, name: &str) -> Option<ProcAddress>;

    /// Like [`try_resolve`](Self::try_resolve) but failing with the symbol
    /// name when nothing resolves it.
    fn resolve(&self, name: &str) -> Result<ProcAddress> {
        self.try_resolve(name)
            .ok_or_else(|| PlatformError::MissingEntryPoint(name.to_owned()))
    }
}

/// Primary resolver with a fallback, consulted in that order. The fallback
/// is only asked for names the primary does not export.
pub struct Tiered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Tiered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ProcResolver, F: ProcResolver> ProcResolver for Tiered<P, F> {
    fn try_resolve(&self, name: &str) -> Option<ProcAddress> {
        self.primary
            .try_resolve(name)
            .or_else(|| self.fallback.try_resolve(name))
    }
}

type ClearColorFn = unsafe extern "system" fn(f32, f32, f32, f32);
type ClearFn = unsafe extern "system" fn(u32);

/// The three-operation command surface the frame loop needs: set clear
/// color, clear, and (through the device context) present.
#[derive(Debug)]
pub struct Gl {
    clear_color: ClearColorFn,
    clear: ClearFn,
}

impl Gl {
    /// Resolve every entry point up front so a missing symbol fails the
    /// bootstrap instead of the first frame.
    pub fn load<R: ProcResolver>(resolver: &R) -> Result<Self> {
        unsafe {
            Ok(Self {
                clear_color: transmute::<ProcAddress, ClearColorFn>(
                    resolver.resolve("glClearColor")?,
                ),
                clear: transmute::<ProcAddress, ClearFn>(resolver.resolve("glClear")?),
            })
        }
    }

    pub fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { (self.clear_color)(red, green, blue, alpha) };
    }

    pub fn clear(&self, mask: u32) {
        unsafe { (self.clear)(mask) };
    }
}

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::{OpenglLibrary, WglExtensions};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    unsafe extern "system" fn noop_clear_color(_: f32, _: f32, _: f32, _: f32) {}

    static LAST_CLEAR_MASK: AtomicU32 = AtomicU32::new(0);

    unsafe extern "system" fn recording_clear(mask: u32) {
        LAST_CLEAR_MASK.store(mask, Ordering::Relaxed);
    }

    /// Map-backed resolver counting how often it is consulted.
    struct FakeExports {
        table: HashMap<&'static str, ProcAddress>,
        lookups: Cell<usize>,
    }

    impl FakeExports {
        fn new(entries: &[(&'static str, ProcAddress)]) -> Self {
            Self {
                table: entries.iter().copied().collect(),
                lookups: Cell::new(0),
            }
        }

        fn empty() -> Self {
            Self::new(&[])
        }
    }

    impl ProcResolver for FakeExports {
        fn try_resolve(&self, name: &str) -> Option<ProcAddress> {
            self.lookups.set(self.lookups.get() + 1);
            self.table.get(name).copied()
        }
    }

    fn clear_color_addr() -> ProcAddress {
        noop_clear_color as ClearColorFn as ProcAddress
    }

    fn clear_addr() -> ProcAddress {
        recording_clear as ClearFn as ProcAddress
    }

    #[test]
    fn primary_hit_never_consults_the_fallback() {
        let tiered = Tiered::new(
            FakeExports::new(&[("glClear", clear_addr())]),
            FakeExports::empty(),
        );

        let address = tiered.resolve("glClear").unwrap();

        assert!(!address.is_null());
        assert_eq!(tiered.fallback.lookups.get(), 0);
    }

    #[test]
    fn fallback_is_consulted_exactly_once_on_primary_miss() {
        let tiered = Tiered::new(
            FakeExports::empty(),
            FakeExports::new(&[("glSampleCoverageARB", clear_addr())]),
        );

        let address = tiered.resolve("glSampleCoverageARB").unwrap();

        assert!(!address.is_null());
        assert_eq!(tiered.fallback.lookups.get(), 1);
    }

    #[test]
    fn unknown_name_fails_with_the_name() {
        let tiered = Tiered::new(FakeExports::empty(), FakeExports::empty());

        assert!(tiered.try_resolve("glNotARealEntryPoint").is_none());

        let error = tiered.resolve("glNotARealEntryPoint").unwrap_err();
        assert!(error.to_string().contains("glNotARealEntryPoint"));
    }

    #[test]
    fn load_reports_the_missing_symbol() {
        let resolver = FakeExports::new(&[("glClearColor", clear_color_addr())]);

        let error = Gl::load(&resolver).unwrap_err();
        assert!(error.to_string().contains("glClear"));
    }

    #[test]
    fn loaded_binding_calls_through_the_resolved_addresses() {
        let resolver = FakeExports::new(&[
            ("glClearColor", clear_color_addr()),
            ("glClear", clear_addr()),
        ]);

        let gl = Gl::load(&resolver).unwrap();
        gl.clear_color(0.5, 1.0, 0.5, 0.0);
        gl.clear(GL_COLOR_BUFFER_BIT);

        assert_eq!(LAST_CLEAR_MASK.load(Ordering::Relaxed), GL_COLOR_BUFFER_BIT);
    }
}
