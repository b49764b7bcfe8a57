//! Frame composition.
//!
//! The render pass turns the current [`Field`] into draw calls on a
//! [`Surface`]. Layers are emitted back to front in a fixed order and the
//! surface is cleared first, so nothing carries over between frames.

mod layers;
mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use crate::field::Field;
use crate::palette::{Rgb, Rgba};
use glam::Vec2;
use smallvec::SmallVec;

/// Back-to-front layer order of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Mesh,
    Lines,
    Entities,
    Links,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[GradientStop; 3]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear { from: Vec2, to: Vec2, stops: Stops },
    Radial { center: Vec2, radius: f32, stops: Stops },
}

/// Shadow-blur halo drawn around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgb,
}

/// A 2D drawing target. Implemented by the browser canvas and by
/// [`RecordingSurface`] for headless inspection.
pub trait Surface {
    /// Marks the start of a layer. Purely informational.
    fn layer(&mut self, _layer: Layer) {}
    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);
    fn stroke_path(&mut self, points: &[Vec2], closed: bool, paint: &Paint, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, glow: Option<Glow>);
}

/// Draw one complete frame of `field` onto `surface`.
///
/// Layers with nothing to draw are skipped entirely: an empty field yields only
/// the background and mesh (even under a pointer), and an absent pointer yields
/// no pointer layer.
pub fn render<S: Surface + ?Sized>(field: &Field, surface: &mut S) {
    let viewport = field.config().viewport;
    let size = Vec2::new(viewport.width, viewport.height);
    surface.clear(size);

    surface.layer(Layer::Background);
    layers::background(surface, size);

    surface.layer(Layer::Mesh);
    layers::mesh(surface, field, size);

    if !field.lines().is_empty() {
        surface.layer(Layer::Lines);
        layers::lines(surface, field.lines());
    }

    if !field.particles().is_empty() || !field.nodes().is_empty() {
        surface.layer(Layer::Entities);
        layers::entities(surface, field.particles(), field.nodes());
    }

    if !field.links().is_empty() {
        surface.layer(Layer::Links);
        layers::links(surface, field.particles(), field.links());
    }

    let pointer = field.pointer().position().filter(|_| field.entity_count() > 0);
    if let Some(pointer) = pointer {
        surface.layer(Layer::Pointer);
        layers::pointer(surface, field, pointer, size);
    }
}
