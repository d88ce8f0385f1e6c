//! Composition root: window → surface format → rendering context →
//! entry-point resolver → frame loop, then teardown in reverse.

use crate::context::RenderingContext;
use crate::error::Result;
use crate::frame::{self, FramePresenter};
use crate::gl::{Gl, OpenglLibrary, Tiered, WglExtensions, GL_COLOR_BUFFER_BIT};
use crate::surface::{self, DeviceContext};
use crate::window::{MessageQueue, Window, CLOSE_REQUESTED};

const WINDOW_TITLE: &str = "huecycle";

/// Presents one frame through the GL binding: clear to the derived color,
/// then swap the window surface's buffers.
struct GlPresenter {
    gl: Gl,
    surface: DeviceContext,
}

impl FramePresenter for GlPresenter {
    fn present(&mut self, [red, green, blue]: [f32; 3]) -> Result<()> {
        self.gl.clear_color(red, green, blue, 0.0);
        self.gl.clear(GL_COLOR_BUFFER_BIT);
        self.surface.swap_buffers()
    }
}

pub fn run() -> Result<()> {
    let window = Window::create(WINDOW_TITLE)?;
    surface::configure(&window)?;
    let context = RenderingContext::create_current(window.hwnd())?;

    // wglGetProcAddress only answers while the context above is current.
    let resolver = Tiered::new(OpenglLibrary::open()?, WglExtensions);
    let gl = Gl::load(&resolver)?;

    let mut pump = MessageQueue::new(window.hwnd());
    let mut presenter = GlPresenter {
        gl,
        surface: DeviceContext::acquire(window.hwnd())?,
    };

    frame::run_loop(&mut pump, &mut presenter, &CLOSE_REQUESTED)?;

    // Release the presentation surface before the context it drew through.
    drop(presenter);
    drop(context);
    Ok(())
}
