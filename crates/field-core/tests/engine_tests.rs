// Host-side tests for the engine lifecycle: start, pause, resume, destroy.

use field_core::{
    Engine, FrameHandle, FrameLoop, LoopCommand, LoopPhase, MeshStyle, PointerState,
    RecordingSurface, Viewport,
};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn engine() -> Engine<RecordingSurface> {
    Engine::new(
        RecordingSurface::new(),
        Viewport::new(1024.0, 768.0).unwrap(),
        MeshStyle::Grid,
        99,
    )
}

#[test]
fn start_requests_exactly_one_frame() {
    let mut e = engine();
    assert_eq!(e.phase(), LoopPhase::Idle);
    assert_eq!(e.start(), LoopCommand::RequestFrame);
    e.frame_requested(FrameHandle(1));
    assert_eq!(e.start(), LoopCommand::Nothing);
    assert_eq!(e.phase(), LoopPhase::Running);
}

#[test]
fn running_frames_tick_and_chain() {
    let mut e = engine();
    e.start();
    e.frame_requested(FrameHandle(1));
    assert_eq!(e.on_frame(DT), LoopCommand::RequestFrame);
    assert!(!e.surface().commands.is_empty());
    assert_eq!(e.last_stats().particles, 60);
}

#[test]
fn pause_cancels_pending_frame_and_keeps_state() {
    let mut e = engine();
    e.start();
    e.frame_requested(FrameHandle(1));
    e.on_frame(DT);
    e.frame_requested(FrameHandle(2));

    let before: Vec<Vec2> = e.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(e.pause(), LoopCommand::CancelFrame(FrameHandle(2)));
    assert_eq!(e.phase(), LoopPhase::Paused);

    // A stale callback that still fires while paused does nothing.
    e.surface_mut().reset();
    assert_eq!(e.on_frame(DT), LoopCommand::Nothing);
    assert!(e.surface().commands.is_empty());

    assert_eq!(e.resume(), LoopCommand::RequestFrame);
    let after: Vec<Vec2> = e.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(e.field().particles().len(), 60);
}

#[test]
fn pause_and_resume_are_idempotent() {
    let mut e = engine();
    assert_eq!(e.pause(), LoopCommand::Nothing);
    assert_eq!(e.resume(), LoopCommand::Nothing);
    e.start();
    e.frame_requested(FrameHandle(5));
    e.pause();
    assert_eq!(e.pause(), LoopCommand::Nothing);
    e.resume();
    e.frame_requested(FrameHandle(6));
    assert_eq!(e.resume(), LoopCommand::Nothing);
}

#[test]
fn destroy_is_final() {
    let mut e = engine();
    e.start();
    e.frame_requested(FrameHandle(3));
    assert_eq!(e.destroy(), LoopCommand::CancelFrame(FrameHandle(3)));
    assert_eq!(e.phase(), LoopPhase::Destroyed);
    assert_eq!(e.start(), LoopCommand::Nothing);
    assert_eq!(e.resume(), LoopCommand::Nothing);
    assert_eq!(e.on_frame(DT), LoopCommand::Nothing);
    assert_eq!(e.destroy(), LoopCommand::Nothing);
}

#[test]
fn resize_rebuilds_for_new_tier() {
    let mut e = engine();
    e.start();
    e.resize(Viewport::new(375.0, 667.0).unwrap());
    assert_eq!(e.field().particles().len(), 30);
    assert_eq!(e.field().config().max_distance, 100.0);
    assert_eq!(e.phase(), LoopPhase::Running);
}

#[test]
fn pointer_port_feeds_the_next_tick() {
    let mut e = engine();
    let target = e.field().particles()[0].position;
    e.set_pointer(PointerState::Present(target + Vec2::new(1.0, 0.0)));
    let stats = e.tick(DT);
    assert!(stats.pointer_interactions >= 1);
    e.set_pointer(PointerState::Absent);
    let stats = e.tick(DT);
    assert_eq!(stats.pointer_interactions, 0);
}

#[test]
fn failed_request_allows_a_retry() {
    let mut lp = FrameLoop::new();
    assert_eq!(lp.start(), LoopCommand::RequestFrame);
    lp.request_failed();
    assert!(lp.pending().is_none());
    lp.pause();
    assert_eq!(lp.resume(), LoopCommand::RequestFrame);
}
