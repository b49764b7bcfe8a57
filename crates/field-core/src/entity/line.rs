use super::{range, span, Step};
use crate::config::Viewport;
use crate::constants::*;
use crate::palette::PaletteColor;
use glam::Vec2;
use rand::Rng;

/// Slowly rotating gradient segment that drifts across the canvas.
#[derive(Clone, Debug)]
pub struct Line {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
    pub angle: f32,
    pub length: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub color: PaletteColor,
}

impl Line {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> Self {
        let mut line = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            speed: range(rng, LINE_SPEED_RANGE),
            angle: span(rng, std::f32::consts::TAU),
            length: range(rng, LINE_LENGTH_RANGE),
            thickness: range(rng, LINE_THICKNESS_RANGE),
            opacity: range(rng, LINE_OPACITY_RANGE),
            color: PaletteColor::random(rng),
        };
        line.reset(rng, bounds);
        line
    }

    /// Move the line just outside a random edge, heading inward.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Viewport) {
        let m = LINE_SPAWN_MARGIN;
        let drift = rng.gen_range(-1.0..1.0);
        let inward = rng.gen_range(1.0..3.0);
        let (position, velocity) = match rng.gen_range(0..4) {
            0 => (
                Vec2::new(span(rng, bounds.width), -m),
                Vec2::new(drift, inward),
            ),
            1 => (
                Vec2::new(bounds.width + m, span(rng, bounds.height)),
                Vec2::new(-inward, drift),
            ),
            2 => (
                Vec2::new(span(rng, bounds.width), bounds.height + m),
                Vec2::new(drift, -inward),
            ),
            _ => (
                Vec2::new(-m, span(rng, bounds.height)),
                Vec2::new(inward, drift),
            ),
        };
        self.position = position;
        self.velocity = velocity;
    }

    #[inline]
    pub fn is_outside(&self, bounds: Viewport) -> bool {
        let m = LINE_RESET_MARGIN;
        self.position.x < -m
            || self.position.x > bounds.width + m
            || self.position.y < -m
            || self.position.y > bounds.height + m
    }

    /// Drift and spin; respawn at an edge once past the reset margin.
    /// Returns `true` when the line was respawned.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Viewport, step: Step) -> bool {
        self.position += self.velocity * self.speed * step.frames;
        self.angle = (self.angle + LINE_SPIN_PER_FRAME * step.frames) % std::f32::consts::TAU;
        if self.is_outside(bounds) {
            self.reset(rng, bounds);
            return true;
        }
        false
    }

    /// Far end of the segment.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.position + Vec2::new(self.angle.cos(), self.angle.sin()) * self.length
    }
}
