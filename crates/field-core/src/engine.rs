//! The particle-field engine: simulation, render target and loop state in one
//! object.

use crate::config::{MeshStyle, Viewport};
use crate::field::{Field, FrameStats};
use crate::lifecycle::{FrameHandle, FrameLoop, LoopCommand, LoopPhase};
use crate::pointer::PointerState;
use crate::render::{self, Surface};

pub struct Engine<S: Surface> {
    field: Field,
    surface: S,
    frame_loop: FrameLoop,
    last_stats: FrameStats,
}

impl<S: Surface> Engine<S> {
    pub fn new(surface: S, viewport: Viewport, mesh: MeshStyle, seed: u64) -> Self {
        let field = Field::new(viewport, mesh, seed);
        log::debug!(
            "[engine] created {:?} tier, {} entities",
            field.config().tier,
            field.entity_count()
        );
        Self {
            field,
            surface,
            frame_loop: FrameLoop::new(),
            last_stats: FrameStats::default(),
        }
    }

    pub fn start(&mut self) -> LoopCommand {
        self.frame_loop.start()
    }

    /// Stop requesting frames. Entity state is kept as is.
    pub fn pause(&mut self) -> LoopCommand {
        let cmd = self.frame_loop.pause();
        log::debug!("[engine] pause -> {:?}", cmd);
        cmd
    }

    pub fn resume(&mut self) -> LoopCommand {
        let cmd = self.frame_loop.resume();
        log::debug!("[engine] resume -> {:?}", cmd);
        cmd
    }

    pub fn destroy(&mut self) -> LoopCommand {
        let cmd = self.frame_loop.destroy();
        log::debug!("[engine] destroyed");
        cmd
    }

    pub fn phase(&self) -> LoopPhase {
        self.frame_loop.phase()
    }

    pub fn frame_requested(&mut self, handle: FrameHandle) {
        self.frame_loop.frame_requested(handle);
    }

    pub fn request_failed(&mut self) {
        self.frame_loop.request_failed();
    }

    /// Host frame callback: tick when running, then say whether to continue.
    pub fn on_frame(&mut self, dt_sec: f32) -> LoopCommand {
        if !self.frame_loop.begin_frame() {
            return LoopCommand::Nothing;
        }
        self.tick(dt_sec);
        self.frame_loop.end_frame()
    }

    /// One full tick: kinematics, proximity, then every render layer.
    pub fn tick(&mut self, dt_sec: f32) -> FrameStats {
        self.last_stats = self.field.step(dt_sec);
        render::render(&self.field, &mut self.surface);
        self.last_stats
    }

    /// Rebuild configuration and entities for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.field.rebuild(viewport);
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.field.set_pointer(pointer);
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}
