//! Start / pause / resume / destroy bookkeeping for the frame loop.
//!
//! The host owns the actual per-frame callback; this state machine only tells
//! it when to request or cancel one, so at most one frame is ever pending.

/// Host-issued id of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Destroyed,
}

/// What the host scheduler should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    Nothing,
    RequestFrame,
    CancelFrame(FrameHandle),
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    phase: LoopPhase,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn start(&mut self) -> LoopCommand {
        match self.phase {
            LoopPhase::Idle => {
                self.phase = LoopPhase::Running;
                self.request_if_idle()
            }
            _ => LoopCommand::Nothing,
        }
    }

    pub fn pause(&mut self) -> LoopCommand {
        if self.phase != LoopPhase::Running {
            return LoopCommand::Nothing;
        }
        self.phase = LoopPhase::Paused;
        self.cancel_pending()
    }

    pub fn resume(&mut self) -> LoopCommand {
        if self.phase != LoopPhase::Paused {
            return LoopCommand::Nothing;
        }
        self.phase = LoopPhase::Running;
        self.request_if_idle()
    }

    /// Stop permanently. Later start/resume calls are ignored.
    pub fn destroy(&mut self) -> LoopCommand {
        if self.phase == LoopPhase::Destroyed {
            return LoopCommand::Nothing;
        }
        self.phase = LoopPhase::Destroyed;
        self.cancel_pending()
    }

    /// Record the handle the host returned for a requested frame.
    pub fn frame_requested(&mut self, handle: FrameHandle) {
        self.pending = Some(handle);
    }

    /// The host failed to schedule a requested frame.
    pub fn request_failed(&mut self) {
        self.pending = None;
    }

    /// Called when a frame callback fires. Returns `true` if a tick should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.is_running()
    }

    /// Called after a tick; asks for the next frame while running.
    pub fn end_frame(&mut self) -> LoopCommand {
        if self.is_running() {
            self.request_if_idle()
        } else {
            LoopCommand::Nothing
        }
    }

    fn request_if_idle(&self) -> LoopCommand {
        if self.pending.is_some() {
            LoopCommand::Nothing
        } else {
            LoopCommand::RequestFrame
        }
    }

    fn cancel_pending(&mut self) -> LoopCommand {
        match self.pending.take() {
            Some(h) => LoopCommand::CancelFrame(h),
            None => LoopCommand::Nothing,
        }
    }
}
