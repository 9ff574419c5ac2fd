//! Frame loop state machine.
//!
//! Instead of a callback that reschedules itself forever, the loop keeps the
//! handle of the single pending frame so `stop` can cancel exactly that one.

use std::fmt::Debug;

/// The host's "request next frame" / "cancel requested frame" pair.
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + Debug;

    /// `None` when the host refused to schedule a frame.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Stopped,
            pending: None,
            frames: 0,
        }
    }

    /// Stopped -> Running. Returns `false` if already running or the host
    /// would not schedule the first frame.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        self.schedule();
        self.state == LoopState::Running
    }

    /// Running -> Stopped, cancelling the pending frame. Returns `false` if
    /// it was already stopped.
    pub fn stop(&mut self) -> bool {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        let was_running = self.state == LoopState::Running;
        self.state = LoopState::Stopped;
        was_running
    }

    /// Called when a scheduled frame fires. Returns whether a tick should run.
    ///
    /// A frame that slipped through after `stop` is ignored.
    pub fn begin_frame(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.pending = None;
        self.frames += 1;
        true
    }

    /// Request the next frame once the current tick has finished.
    pub fn end_frame(&mut self) {
        if self.state == LoopState::Running && self.pending.is_none() {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::debug!("[loop] host refused a frame, stopping");
                self.state = LoopState::Stopped;
            }
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    /// Ticks run since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
