use super::{cycle, range, span, Step};
use crate::config::Viewport;
use crate::constants::*;
use crate::palette::PaletteColor;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Curved trace through a few random waypoints with a signal dot that runs
/// along it, looping once per `1 / speed` seconds.
#[derive(Clone, Debug)]
pub struct Circuit {
    pub points: SmallVec<[Vec2; 6]>,
    pub color: PaletteColor,
    pub thickness: f32,
    pub speed: f32,
    /// Position of the signal along the whole path, in `[0, 1)`.
    pub progress: f32,
}

impl Circuit {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> Self {
        let (lo, hi) = CIRCUIT_POINTS;
        let count = rng.gen_range(lo..=hi);
        let points = (0..count)
            .map(|_| Vec2::new(span(rng, bounds.width), span(rng, bounds.height)))
            .collect();
        Self {
            points,
            color: PaletteColor::random(rng),
            thickness: range(rng, CIRCUIT_THICKNESS_RANGE),
            speed: range(rng, CIRCUIT_SPEED_RANGE),
            progress: 0.0,
        }
    }

    pub fn advance(&mut self, step: Step) {
        self.progress = cycle(step.time, self.speed, 1.0);
    }

    /// The trace as a polyline. Each waypoint pair is joined by a quadratic
    /// curve whose control point sits level with the earlier waypoint,
    /// halfway across.
    pub fn path(&self) -> Vec<Vec2> {
        let Some(&first) = self.points.first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(1 + (self.points.len() - 1) * CIRCUIT_CURVE_STEPS);
        out.push(first);
        for pair in self.points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let control = Vec2::new((from.x + to.x) * 0.5, from.y);
            for i in 1..=CIRCUIT_CURVE_STEPS {
                let t = i as f32 / CIRCUIT_CURVE_STEPS as f32;
                out.push(quadratic(from, control, to, t));
            }
        }
        out
    }

    /// Current signal position, interpolated straight between waypoints.
    pub fn signal(&self) -> Option<Vec2> {
        let segments = self.points.len().checked_sub(1).filter(|s| *s > 0)?;
        let along = self.progress.clamp(0.0, 1.0) * segments as f32;
        let index = (along.floor() as usize).min(segments - 1);
        let t = along - index as f32;
        Some(self.points[index].lerp(self.points[index + 1], t))
    }
}

#[inline]
fn quadratic(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
}
