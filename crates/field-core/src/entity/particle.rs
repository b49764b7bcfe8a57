use super::{range, span, Step};
use crate::config::Viewport;
use crate::constants::*;
use crate::palette::PaletteColor;
use glam::Vec2;
use rand::Rng;

/// Free-moving dot that bounces off the canvas edges and slows down by friction.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_size: f32,
    pub size: f32,
    pub color: PaletteColor,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> Self {
        let position = Vec2::new(span(rng, bounds.width), span(rng, bounds.height));
        let max = PARTICLE_MAX_INITIAL_SPEED;
        let velocity = Vec2::new(rng.gen_range(-max..max), rng.gen_range(-max..max));
        let base_size = range(rng, PARTICLE_SIZE_RANGE);
        Self {
            position,
            velocity,
            base_size,
            size: base_size,
            color: PaletteColor::random(rng),
            pulse_phase: span(rng, std::f32::consts::TAU),
            pulse_speed: range(rng, PARTICLE_PULSE_SPEED_RANGE),
        }
    }

    /// Move by one step, reflect off the edges and apply friction.
    pub fn advance(&mut self, bounds: Viewport, step: Step) {
        self.position += self.velocity * step.frames;

        if self.position.x < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y.abs();
        }
        self.position = self
            .position
            .clamp(Vec2::ZERO, Vec2::new(bounds.width, bounds.height));

        self.velocity *= PARTICLE_FRICTION.powf(step.frames);

        self.pulse_phase =
            (self.pulse_phase + self.pulse_speed * step.frames).rem_euclid(std::f32::consts::TAU);
        self.size = self.base_size + self.pulse_phase.sin() * PARTICLE_PULSE_AMPLITUDE;
    }

    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.velocity += force;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ONE_FRAME: Step = Step {
        frames: 1.0,
        time: 0.0,
    };

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::spawn(&mut rng, Viewport::new(100.0, 100.0).unwrap());
        p.position = Vec2::new(x, y);
        p.velocity = Vec2::new(vx, vy);
        p
    }

    #[test]
    fn bounces_off_right_edge() {
        let bounds = Viewport::new(100.0, 100.0).unwrap();
        let mut p = particle_at(99.5, 50.0, 2.0, 0.0);
        p.advance(bounds, ONE_FRAME);
        assert_eq!(p.position.x, 100.0);
        assert!(p.velocity.x < 0.0);
    }

    #[test]
    fn bounces_off_top_edge() {
        let bounds = Viewport::new(100.0, 100.0).unwrap();
        let mut p = particle_at(50.0, 0.5, 0.0, -2.0);
        p.advance(bounds, ONE_FRAME);
        assert_eq!(p.position.y, 0.0);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn friction_slows_every_frame() {
        let bounds = Viewport::new(100.0, 100.0).unwrap();
        let mut p = particle_at(50.0, 50.0, 0.3, -0.2);
        let before = p.velocity.length();
        p.advance(bounds, ONE_FRAME);
        let after = p.velocity.length();
        assert!((after - before * PARTICLE_FRICTION).abs() < 1e-6);
    }

    #[test]
    fn size_pulses_around_base() {
        let bounds = Viewport::new(100.0, 100.0).unwrap();
        let mut p = particle_at(50.0, 50.0, 0.0, 0.0);
        for _ in 0..500 {
            p.advance(bounds, ONE_FRAME);
            assert!((p.size - p.base_size).abs() <= PARTICLE_PULSE_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn pulse_phase_stays_wrapped() {
        let bounds = Viewport::new(100.0, 100.0).unwrap();
        let mut p = particle_at(50.0, 50.0, 0.0, 0.0);
        p.pulse_speed = 0.5;
        for _ in 0..10_000 {
            p.advance(bounds, ONE_FRAME);
        }
        assert!((0.0..std::f32::consts::TAU).contains(&p.pulse_phase));
    }
}
