//! The per-frame loop: drain window messages, derive a color from elapsed
//! time, submit one clear and present it.
//!
//! The loop itself is platform-free. The window system is reached through
//! two seams: [`MessagePump`] (non-blocking message drain, dispatching into
//! the window procedure) and [`FramePresenter`] (clear + swap). The Win32
//! implementations live in `window` and `app`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::error::Result;

/// Latched "the user asked to close" signal.
///
/// Written by the window procedure during synchronous dispatch, read by the
/// frame loop on the same thread. The transition is one-way; there is no way
/// to un-request a close.
pub struct CloseSignal(AtomicBool);

impl CloseSignal {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for CloseSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blocking access to the window's message queue.
pub trait MessagePump {
    /// Remove and dispatch at most one pending message. Returns `false` when
    /// the queue is empty.
    fn pump_one(&mut self) -> bool;
}

/// One frame's worth of drawing: clear to the given color and present.
pub trait FramePresenter {
    fn present(&mut self, color: [f32; 3]) -> Result<()>;
}

/// Clear color for a given number of elapsed seconds.
///
/// Each channel is a normalized trigonometric function of time, so every
/// channel stays inside [0, 1] and the three never line up in phase:
/// at t = 0 this is (0.5, 1.0, 0.5).
pub fn clear_color(elapsed: f32) -> [f32; 3] {
    [
        normalize(elapsed.sin()),
        normalize(elapsed.cos()),
        normalize((-elapsed).sin()),
    ]
}

fn normalize(sin_cos: f32) -> f32 {
    0.5 + sin_cos / 2.0
}

#[derive(Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    Closed,
}

/// Dispatch pending messages until the queue is empty or a close is
/// requested. A close latched mid-drain stops the drain immediately; the
/// rest of the queue is left for the platform to discard at exit.
pub fn drain_messages<P: MessagePump>(pump: &mut P, close: &CloseSignal) {
    while !close.is_requested() && pump.pump_one() {}
}

/// A single loop iteration: drain, check for close, draw.
pub fn run_frame<P, R>(
    pump: &mut P,
    presenter: &mut R,
    close: &CloseSignal,
    elapsed: f32,
) -> Result<FrameOutcome>
where
    P: MessagePump,
    R: FramePresenter,
{
    drain_messages(pump, close);

    if close.is_requested() {
        return Ok(FrameOutcome::Closed);
    }

    presenter.present(clear_color(elapsed))?;
    Ok(FrameOutcome::Drawn)
}

/// Run frames until a close is requested. No frame pacing; presentation
/// failures propagate and end the process.
pub fn run_loop<P, R>(pump: &mut P, presenter: &mut R, close: &CloseSignal) -> Result<()>
where
    P: MessagePump,
    R: FramePresenter,
{
    let start = Instant::now();

    loop {
        match run_frame(pump, presenter, close, start.elapsed().as_secs_f32())? {
            FrameOutcome::Drawn => {}
            FrameOutcome::Closed => {
                log::info!("close requested, leaving the frame loop");
                return Ok(());
            }
        }
    }
}
