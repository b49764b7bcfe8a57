use super::{Glow, Layer, Paint, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Layer(Layer),
    Clear {
        size: Vec2,
    },
    FillRect {
        origin: Vec2,
        size: Vec2,
        paint: Paint,
    },
    Stroke {
        points: Vec<Vec2>,
        closed: bool,
        paint: Paint,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        glow: Option<Glow>,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Layer markers in the order they were emitted.
    pub fn layers(&self) -> Vec<Layer> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Layer(l) => Some(*l),
                _ => None,
            })
            .collect()
    }

    /// Draw commands emitted after the `layer` marker and before the next one.
    pub fn commands_in(&self, layer: Layer) -> Vec<&DrawCommand> {
        let mut current = None;
        let mut out = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::Layer(l) => current = Some(*l),
                DrawCommand::Clear { .. } => current = None,
                other if current == Some(layer) => out.push(other),
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn layer(&mut self, layer: Layer) {
        self.commands.push(DrawCommand::Layer(layer));
    }

    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], closed: bool, paint: &Paint, width: f32) {
        self.commands.push(DrawCommand::Stroke {
            points: points.to_vec(),
            closed,
            paint: paint.clone(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, glow: Option<Glow>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: paint.clone(),
            glow,
        });
    }
}
