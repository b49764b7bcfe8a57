//! Viewport-derived engine configuration.

use crate::constants::*;
use crate::error::FieldError;

/// Canvas size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(FieldError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Coarse device class chosen from viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTier {
    Reduced,
    Full,
}

impl DeviceTier {
    pub fn for_width(width: f32) -> Self {
        if width < TIER_BREAKPOINT_PX {
            DeviceTier::Reduced
        } else {
            DeviceTier::Full
        }
    }

    #[inline]
    fn pick<T>(self, (reduced, full): (T, T)) -> T {
        match self {
            DeviceTier::Reduced => reduced,
            DeviceTier::Full => full,
        }
    }
}

/// Style of the overlay drawn between the background gradient and the lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeshStyle {
    #[default]
    Grid,
    Hex,
}

impl MeshStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(MeshStyle::Grid),
            "hex" | "hexagon" => Some(MeshStyle::Hex),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub tier: DeviceTier,
    pub viewport: Viewport,
    pub particle_count: usize,
    pub line_count: usize,
    pub node_count: usize,
    pub circuit_count: usize,
    pub wave_count: usize,
    pub max_distance: f32,
    pub node_link_distance: f32,
    pub grid_spacing: f32,
    pub hex_radius: f32,
    pub pointer_radius: f32,
    pub mesh: MeshStyle,
}

impl EngineConfig {
    pub fn for_viewport(viewport: Viewport, mesh: MeshStyle) -> Self {
        let tier = DeviceTier::for_width(viewport.width);
        Self {
            tier,
            viewport,
            particle_count: tier.pick(PARTICLE_COUNT),
            line_count: tier.pick(LINE_COUNT),
            node_count: tier.pick(NODE_COUNT),
            circuit_count: tier.pick(CIRCUIT_COUNT),
            wave_count: tier.pick(WAVE_COUNT),
            max_distance: tier.pick(PARTICLE_LINK_DISTANCE),
            node_link_distance: tier.pick(NODE_LINK_DISTANCE),
            grid_spacing: tier.pick(GRID_SPACING),
            hex_radius: tier.pick(HEX_RADIUS),
            pointer_radius: POINTER_RADIUS,
            mesh,
        }
    }

    /// Total number of simulated entities.
    pub fn entity_count(&self) -> usize {
        self.particle_count + self.line_count + self.node_count
    }
}
