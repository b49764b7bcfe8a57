//! Simulation state: every entity plus the per-frame derived relations.

use crate::config::{EngineConfig, MeshStyle, Viewport};
use crate::constants::{FRAME_RATE_HZ, MAX_FRAME_STEPS, PACKET_CHANCE, POINTER_FORCE_GAIN};
use crate::entity::{Circuit, Line, Node, Particle, ScanWave, Step};
use crate::pointer::PointerState;
use crate::proximity::{self, PointerInteraction, ProximityLink};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Summary of one simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub node_links: usize,
    pub packets: usize,
    pub pointer_interactions: usize,
    pub respawned_lines: usize,
}

pub struct Field {
    config: EngineConfig,
    particles: Vec<Particle>,
    nodes: Vec<Node>,
    lines: Vec<Line>,
    circuits: Vec<Circuit>,
    waves: Vec<ScanWave>,
    pointer: PointerState,
    time: f64,
    rng: StdRng,

    // Rebuilt every step; kept to reuse allocations.
    particle_positions: Vec<Vec2>,
    node_positions: Vec<Vec2>,
    links: Vec<ProximityLink>,
    node_links: Vec<ProximityLink>,
    // Indices into `node_links` carrying a data packet this step.
    packets: Vec<usize>,
    interactions: Vec<PointerInteraction>,
}

impl Field {
    pub fn new(viewport: Viewport, mesh: MeshStyle, seed: u64) -> Self {
        let mut field = Self {
            config: EngineConfig::for_viewport(viewport, mesh),
            particles: Vec::new(),
            nodes: Vec::new(),
            lines: Vec::new(),
            circuits: Vec::new(),
            waves: Vec::new(),
            pointer: PointerState::Absent,
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
            particle_positions: Vec::new(),
            node_positions: Vec::new(),
            links: Vec::new(),
            node_links: Vec::new(),
            packets: Vec::new(),
            interactions: Vec::new(),
        };
        field.populate();
        field
    }

    /// Replace the configuration and every entity for a new viewport.
    pub fn rebuild(&mut self, viewport: Viewport) {
        self.config = EngineConfig::for_viewport(viewport, self.config.mesh);
        self.populate();
        log::debug!(
            "[field] rebuilt {:?} tier at {}x{}: {} particles, {} nodes, {} lines",
            self.config.tier,
            viewport.width,
            viewport.height,
            self.particles.len(),
            self.nodes.len(),
            self.lines.len()
        );
    }

    /// Rebuild with an explicit configuration (counts may differ from the tier
    /// defaults).
    pub fn rebuild_with(&mut self, config: EngineConfig) {
        self.config = config;
        self.populate();
    }

    fn populate(&mut self) {
        let bounds = self.config.viewport;
        let rng = &mut self.rng;
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::spawn(&mut *rng, bounds))
            .collect();
        self.nodes = (0..self.config.node_count)
            .map(|_| Node::spawn(&mut *rng, bounds))
            .collect();
        self.lines = (0..self.config.line_count)
            .map(|_| Line::spawn(&mut *rng, bounds))
            .collect();
        self.circuits = (0..self.config.circuit_count)
            .map(|_| Circuit::spawn(&mut *rng, bounds))
            .collect();
        self.waves = (0..self.config.wave_count)
            .map(|i| ScanWave::spawn(&mut *rng, i))
            .collect();
        self.links.clear();
        self.node_links.clear();
        self.packets.clear();
        self.interactions.clear();
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Advance every entity, then recompute proximity relations and apply
    /// pointer repulsion. `dt_sec` is the real time since the previous step.
    pub fn step(&mut self, dt_sec: f32) -> FrameStats {
        let frames = if dt_sec.is_finite() {
            (dt_sec * FRAME_RATE_HZ).clamp(0.0, MAX_FRAME_STEPS)
        } else {
            0.0
        };
        self.time += (frames / FRAME_RATE_HZ) as f64;
        let step = Step {
            frames,
            time: self.time,
        };
        let bounds = self.config.viewport;

        // Kinematics
        for p in &mut self.particles {
            p.advance(bounds, step);
        }
        for n in &mut self.nodes {
            n.advance(bounds, step);
        }
        let mut respawned_lines = 0;
        for l in &mut self.lines {
            if l.advance(&mut self.rng, bounds, step) {
                respawned_lines += 1;
            }
        }
        for c in &mut self.circuits {
            c.advance(step);
        }
        for w in &mut self.waves {
            w.advance(bounds, step);
        }

        // Proximity
        self.particle_positions.clear();
        let particle_positions = self.particles.iter().map(|p| p.position);
        self.particle_positions.extend(particle_positions);
        self.node_positions.clear();
        self.node_positions.extend(self.nodes.iter().map(|n| n.position));

        proximity::collect_links(
            &self.particle_positions,
            self.config.max_distance,
            &mut self.links,
        );
        proximity::collect_links(
            &self.node_positions,
            self.config.node_link_distance,
            &mut self.node_links,
        );
        self.packets.clear();
        for i in 0..self.node_links.len() {
            if self.rng.gen_bool(PACKET_CHANCE) {
                self.packets.push(i);
            }
        }

        match self.pointer.position() {
            Some(pointer) if !self.particles.is_empty() => {
                proximity::collect_pointer_interactions(
                    &self.particle_positions,
                    pointer,
                    self.config.pointer_radius,
                    &mut self.interactions,
                );
                let gain = POINTER_FORCE_GAIN * frames;
                for hit in &self.interactions {
                    self.particles[hit.index].apply_force(hit.force * gain);
                }
            }
            _ => self.interactions.clear(),
        }

        FrameStats {
            particles: self.particles.len(),
            links: self.links.len(),
            node_links: self.node_links.len(),
            packets: self.packets.len(),
            pointer_interactions: self.interactions.len(),
            respawned_lines,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }
    pub fn waves(&self) -> &[ScanWave] {
        &self.waves
    }
    pub fn links(&self) -> &[ProximityLink] {
        &self.links
    }
    pub fn node_links(&self) -> &[ProximityLink] {
        &self.node_links
    }
    /// Node links that carry a travelling data packet this step.
    pub fn packet_links(&self) -> impl Iterator<Item = &ProximityLink> + '_ {
        self.packets.iter().map(|&i| &self.node_links[i])
    }
    pub fn pointer_interactions(&self) -> &[PointerInteraction] {
        &self.interactions
    }
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }
    /// Elapsed simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }
    /// Particles, nodes and lines. Circuits and scan waves are mesh
    /// decoration and do not count.
    pub fn entity_count(&self) -> usize {
        self.particles.len() + self.nodes.len() + self.lines.len()
    }
}
