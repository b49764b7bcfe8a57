use super::{phase, range, span, Step};
use crate::config::Viewport;
use crate::constants::*;
use crate::palette::PaletteColor;
use glam::Vec2;
use rand::Rng;

/// Connection point that orbits a base point and pulses in size.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vec2,
    pub base: Vec2,
    pub size: f32,
    pub color: PaletteColor,
    pub float_radius: f32,
    pub float_speed: f32,
    pub float_offset: f32,
    pub pulse_speed: f32,
    pub pulse_phase: f32,
}

impl Node {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> Self {
        let base = Vec2::new(span(rng, bounds.width), span(rng, bounds.height));
        Self {
            position: base,
            base,
            size: range(rng, NODE_SIZE_RANGE),
            color: PaletteColor::Primary,
            float_radius: range(rng, NODE_FLOAT_RADIUS_RANGE),
            float_speed: range(rng, NODE_FLOAT_SPEED_RANGE),
            float_offset: span(rng, std::f32::consts::TAU),
            pulse_speed: range(rng, NODE_PULSE_SPEED_RANGE),
            pulse_phase: span(rng, std::f32::consts::TAU),
        }
    }

    #[inline]
    fn orbit(&self, time: f64) -> Vec2 {
        let angle = phase(time, self.float_speed, self.float_offset);
        self.base + Vec2::new(angle.cos(), angle.sin()) * self.float_radius
    }

    /// Place the node on its orbit for `step.time`, wrapping the base point
    /// across the canvas when the orbit leaves it.
    pub fn advance(&mut self, bounds: Viewport, step: Step) {
        let mut pos = self.orbit(step.time);
        let mut shifted = false;
        if bounds.width > 0.0 {
            if pos.x < 0.0 {
                self.base.x += bounds.width;
                shifted = true;
            } else if pos.x > bounds.width {
                self.base.x -= bounds.width;
                shifted = true;
            }
        }
        if bounds.height > 0.0 {
            if pos.y < 0.0 {
                self.base.y += bounds.height;
                shifted = true;
            } else if pos.y > bounds.height {
                self.base.y -= bounds.height;
                shifted = true;
            }
        }
        if shifted {
            pos = self.orbit(step.time);
        }
        // Orbits wider than the canvas can still overshoot after one wrap.
        self.position = pos.clamp(Vec2::ZERO, Vec2::new(bounds.width, bounds.height));
        self.pulse_phase = phase(step.time, self.pulse_speed, 0.0);
    }

    /// Pulse amount in `[0, 1]`.
    #[inline]
    pub fn pulse(&self) -> f32 {
        self.pulse_phase.sin() * 0.5 + 0.5
    }

    #[inline]
    pub fn current_size(&self) -> f32 {
        self.size + self.pulse() * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(base: Vec2, radius: f32, offset: f32) -> Node {
        Node {
            position: base,
            base,
            size: 3.0,
            color: PaletteColor::Primary,
            float_radius: radius,
            float_speed: 1.0,
            float_offset: offset,
            pulse_speed: 1.0,
            pulse_phase: 0.0,
        }
    }

    #[test]
    fn follows_orbit_inside_canvas() {
        let bounds = Viewport::new(200.0, 200.0).unwrap();
        let mut n = node(Vec2::new(100.0, 100.0), 20.0, 0.0);
        n.advance(bounds, Step { frames: 1.0, time: 0.0 });
        assert!((n.position - Vec2::new(120.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn wraps_base_across_left_edge() {
        let bounds = Viewport::new(200.0, 200.0).unwrap();
        // orbit starts pointing left: cos(pi) = -1
        let mut n = node(Vec2::new(5.0, 100.0), 20.0, std::f32::consts::PI);
        n.advance(bounds, Step { frames: 1.0, time: 0.0 });
        assert!((n.base.x - 205.0).abs() < 1e-4);
        assert!((n.position.x - 185.0).abs() < 1e-3);
        assert!(n.position.x >= 0.0 && n.position.x <= bounds.width);
    }

    #[test]
    fn pulse_is_normalized() {
        let bounds = Viewport::new(200.0, 200.0).unwrap();
        let mut n = node(Vec2::new(100.0, 100.0), 20.0, 0.0);
        for i in 0..100 {
            n.advance(bounds, Step { frames: 1.0, time: i as f64 * 0.1 });
            assert!((0.0..=1.0).contains(&n.pulse()));
        }
    }

    #[test]
    fn orbit_stays_smooth_after_long_sessions() {
        let bounds = Viewport::new(400.0, 400.0).unwrap();
        let mut n = node(Vec2::new(200.0, 200.0), 20.0, 0.0);
        let t0 = 100_000.0;
        n.advance(bounds, Step { frames: 1.0, time: t0 });
        let before = n.position;
        n.advance(bounds, Step { frames: 1.0, time: t0 + 1.0 / 60.0 });
        // one frame of a radius-20 orbit at 1 rad/s
        let moved = (n.position - before).length();
        assert!((moved - 20.0 / 60.0).abs() < 1e-2, "moved {moved}");
    }
}
