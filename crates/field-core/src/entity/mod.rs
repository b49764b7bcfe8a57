//! Animated primitives and their per-type boundary policies.
//!
//! Particles bounce off the canvas edges, nodes float around a base point that
//! wraps across the canvas, and decorative lines respawn at an edge once they
//! drift past an off-screen margin. Circuits and scan waves are pure functions
//! of elapsed time.

mod circuit;
mod line;
mod node;
mod particle;
mod wave;

pub use circuit::Circuit;
pub use line::Line;
pub use node::Node;
pub use particle::Particle;
pub use wave::ScanWave;

use rand::Rng;

/// Time step shared by every entity in one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Elapsed time in 60 Hz frames.
    pub frames: f32,
    /// Total elapsed simulation time in seconds. Kept in `f64` so long
    /// sessions do not lose sub-frame resolution.
    pub time: f64,
}

/// `time * rate + offset` wrapped into `[0, TAU)`.
#[inline]
pub fn phase(time: f64, rate: f32, offset: f32) -> f32 {
    (time * rate as f64 + offset as f64).rem_euclid(std::f64::consts::TAU) as f32
}

/// `time * rate` wrapped into `[0, period)`; 0 for an empty period.
#[inline]
pub fn cycle(time: f64, rate: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    // Narrowing can round up to exactly `period`.
    let v = (time * rate as f64).rem_euclid(period as f64) as f32;
    if v >= period {
        0.0
    } else {
        v
    }
}

#[inline]
pub(crate) fn range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform value in `[0, max)`, or 0 for an empty span.
#[inline]
pub(crate) fn span<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
