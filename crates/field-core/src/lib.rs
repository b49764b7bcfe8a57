//! Platform-free core of the particle-field background: entity kinematics,
//! proximity queries, render planning and frame-loop bookkeeping.

pub mod config;
pub mod constants;
pub mod engine;
pub mod entity;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod palette;
pub mod pointer;
pub mod proximity;
pub mod render;

pub use config::*;
pub use engine::Engine;
pub use error::FieldError;
pub use field::{Field, FrameStats};
pub use lifecycle::{FrameHandle, FrameLoop, LoopCommand, LoopPhase};
pub use pointer::PointerState;
pub use render::{Layer, Paint, RecordingSurface, Surface};
