use super::{GradientStop, Glow, Paint, Stops, Surface};
use crate::config::{MeshStyle, Viewport};
use crate::constants::*;
use crate::entity::{cycle, phase, Circuit, Line, Node, Particle, ScanWave};
use crate::field::Field;
use crate::palette::{PaletteColor, Rgba, GLOW};
use crate::proximity::ProximityLink;
use glam::Vec2;
use smallvec::smallvec;

#[inline]
fn stop(offset: f32, color: Rgba) -> GradientStop {
    GradientStop { offset, color }
}

pub(super) fn background<S: Surface + ?Sized>(surface: &mut S, size: Vec2) {
    let a = BACKGROUND_ALPHA;
    let stops: Stops = smallvec![
        stop(0.0, PaletteColor::Primary.rgb().with_alpha(a)),
        stop(0.5, PaletteColor::Accent.rgb().with_alpha(a)),
        stop(1.0, PaletteColor::Secondary.rgb().with_alpha(a)),
    ];
    let paint = Paint::Linear {
        from: Vec2::ZERO,
        to: size,
        stops,
    };
    surface.fill_rect(Vec2::ZERO, size, &paint);
}

pub(super) fn mesh<S: Surface + ?Sized>(surface: &mut S, field: &Field, size: Vec2) {
    let config = field.config();
    let time = field.time();
    match config.mesh {
        MeshStyle::Grid => grid(surface, config.grid_spacing, time, size),
        MeshStyle::Hex => {
            hexagons(surface, config.hex_radius, time, size);
            scan_lines(surface, time, size);
        }
    }
    waves(surface, field.waves(), config.viewport);
    circuits(surface, field.circuits());
    node_links(surface, field.nodes(), field.node_links(), time);
    packets(surface, field, time);
}

// Both line sets slide back by `offset`, so the grid drifts up and to the left.
fn grid<S: Surface + ?Sized>(surface: &mut S, spacing: f32, time: f64, size: Vec2) {
    if spacing <= 0.0 {
        return;
    }
    let offset = cycle(time, GRID_DRIFT_PX_PER_SEC, spacing);
    let paint = Paint::Solid(PaletteColor::Primary.rgb().with_alpha(GRID_ALPHA));
    let mut x = -offset;
    while x < size.x {
        surface.stroke_path(&[Vec2::new(x, 0.0), Vec2::new(x, size.y)], false, &paint, 1.0);
        x += spacing;
    }
    let mut y = -offset;
    while y < size.y {
        surface.stroke_path(&[Vec2::new(0.0, y), Vec2::new(size.x, y)], false, &paint, 1.0);
        y += spacing;
    }
}

fn hexagons<S: Surface + ?Sized>(surface: &mut S, radius: f32, time: f64, size: Vec2) {
    if radius <= 0.0 {
        return;
    }
    let vert = radius * 3f32.sqrt();
    let horiz = radius * 2.0 * 0.75;
    let offset = cycle(time, HEX_DRIFT_PX_PER_SEC, horiz);
    let paint = Paint::Solid(PaletteColor::Accent.rgb().with_alpha(HEX_ALPHA));
    let rows = (size.y / vert).ceil() as i32 + 2;
    let cols = (size.x / horiz).ceil() as i32 + 2;
    let r = radius * 0.8;
    for row in -2..rows {
        for col in -2..cols {
            let x = col as f32 * horiz - offset;
            let y = row as f32 * vert + col.rem_euclid(2) as f32 * (vert / 2.0);
            let corners: [Vec2; 6] = std::array::from_fn(|i| {
                let angle = std::f32::consts::FRAC_PI_3 * i as f32;
                Vec2::new(x + r * angle.cos(), y + r * angle.sin())
            });
            surface.stroke_path(&corners, true, &paint, 1.0);
        }
    }
}

/// Diagonal hairlines across the whole canvas, drifting left.
fn scan_lines<S: Surface + ?Sized>(surface: &mut S, time: f64, size: Vec2) {
    let offset = cycle(time, SCAN_LINE_DRIFT_PX_PER_SEC, SCAN_LINE_SPACING * 2.0);
    let paint = Paint::Solid(PaletteColor::Tertiary.rgb().with_alpha(SCAN_LINE_ALPHA));
    let mut x = -size.y;
    while x < size.x + size.y {
        let top = Vec2::new(x - offset, 0.0);
        let bottom = Vec2::new(x - offset - size.y, size.y);
        surface.stroke_path(&[top, bottom], false, &paint, 1.0);
        x += SCAN_LINE_SPACING;
    }
}

fn waves<S: Surface + ?Sized>(surface: &mut S, waves: &[ScanWave], viewport: Viewport) {
    for wave in waves {
        let rgb = wave.color.rgb();
        let (from, to) = wave.axis();
        let paint = Paint::Linear {
            from,
            to,
            stops: smallvec![
                stop(0.0, rgb.with_alpha(0.0)),
                stop(0.5, rgb.with_alpha(WAVE_PEAK_ALPHA)),
                stop(1.0, rgb.with_alpha(0.0)),
            ],
        };
        let (origin, extent) = wave.rect(viewport);
        surface.fill_rect(origin, extent, &paint);
    }
}

fn circuits<S: Surface + ?Sized>(surface: &mut S, circuits: &[Circuit]) {
    for circuit in circuits {
        let path = circuit.path();
        if path.len() < 2 {
            continue;
        }
        let rgb = circuit.color.rgb();
        let trace = Paint::Solid(rgb.with_alpha(CIRCUIT_ALPHA));
        surface.stroke_path(&path, false, &trace, circuit.thickness);
        if let Some(signal) = circuit.signal() {
            surface.fill_circle(
                signal,
                CIRCUIT_SIGNAL_RADIUS,
                &Paint::Solid(rgb.with_alpha(1.0)),
                Some(Glow {
                    blur: CIRCUIT_SIGNAL_BLUR,
                    color: rgb,
                }),
            );
        }
    }
}

fn node_links<S: Surface + ?Sized>(
    surface: &mut S,
    nodes: &[Node],
    links: &[ProximityLink],
    time: f64,
) {
    let color = PaletteColor::Primary.rgb();
    for link in links {
        let shimmer = phase(time, 2.0, link.distance * 0.01).sin() * 0.3;
        let alpha = (link.opacity * NODE_LINK_ALPHA + shimmer * 0.1).clamp(0.0, 1.0);
        let paint = Paint::Solid(color.with_alpha(alpha));
        surface.stroke_path(
            &[nodes[link.a].position, nodes[link.b].position],
            false,
            &paint,
            1.0,
        );
    }
}

fn packets<S: Surface + ?Sized>(surface: &mut S, field: &Field, time: f64) {
    let progress = cycle(time, PACKET_TRIPS_PER_SEC, 1.0);
    let nodes = field.nodes();
    for link in field.packet_links() {
        let at = nodes[link.a].position.lerp(nodes[link.b].position, progress);
        surface.fill_circle(
            at,
            PACKET_RADIUS,
            &Paint::Solid(GLOW.with_alpha(1.0)),
            Some(Glow {
                blur: PACKET_GLOW_BLUR,
                color: GLOW,
            }),
        );
    }
}

pub(super) fn lines<S: Surface + ?Sized>(surface: &mut S, lines: &[Line]) {
    for line in lines {
        let start = line.position;
        let end = line.end();
        let rgb = line.color.rgb();
        let paint = Paint::Linear {
            from: start,
            to: end,
            stops: smallvec![
                stop(0.0, rgb.with_alpha(0.0)),
                stop(0.5, rgb.with_alpha(line.opacity)),
                stop(1.0, rgb.with_alpha(0.0)),
            ],
        };
        surface.stroke_path(&[start, end], false, &paint, line.thickness);
    }
}

pub(super) fn entities<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    nodes: &[Node],
) {
    for p in particles {
        let rgb = p.color.rgb();
        surface.fill_circle(
            p.position,
            p.size.max(0.1),
            &Paint::Solid(rgb.with_alpha(1.0)),
            Some(Glow {
                blur: PARTICLE_GLOW_BLUR,
                color: rgb,
            }),
        );
    }
    for n in nodes {
        let pulse = n.pulse();
        let size = n.current_size();
        let rgb = n.color.rgb();
        // halo, core, highlight
        surface.fill_circle(
            n.position,
            size * 2.0,
            &Paint::Solid(rgb.with_alpha(pulse * 0.2)),
            None,
        );
        surface.fill_circle(
            n.position,
            size,
            &Paint::Solid(rgb.with_alpha(1.0)),
            Some(Glow {
                blur: NODE_GLOW_BLUR,
                color: rgb,
            }),
        );
        surface.fill_circle(
            n.position - Vec2::splat(size * 0.3),
            size * 0.4,
            &Paint::Solid(Rgba::WHITE.rgb.with_alpha(0.8)),
            None,
        );
    }
}

pub(super) fn links<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    links: &[ProximityLink],
) {
    let color = PaletteColor::Primary.rgb();
    for link in links {
        let paint = Paint::Solid(color.with_alpha(link.opacity * PARTICLE_LINK_ALPHA));
        surface.stroke_path(
            &[particles[link.a].position, particles[link.b].position],
            false,
            &paint,
            1.0,
        );
    }
}

pub(super) fn pointer<S: Surface + ?Sized>(
    surface: &mut S,
    field: &Field,
    pointer: Vec2,
    size: Vec2,
) {
    let color = PaletteColor::Secondary.rgb();
    let particles = field.particles();
    for hit in field.pointer_interactions() {
        let paint = Paint::Solid(color.with_alpha(hit.opacity * POINTER_LINK_ALPHA));
        surface.stroke_path(&[particles[hit.index].position, pointer], false, &paint, 2.0);
    }
    let glow = Paint::Radial {
        center: pointer,
        radius: field.config().pointer_radius,
        stops: smallvec![
            stop(0.0, color.with_alpha(POINTER_GLOW_ALPHA)),
            stop(1.0, color.with_alpha(0.0)),
        ],
    };
    surface.fill_rect(Vec2::ZERO, size, &glow);
}
