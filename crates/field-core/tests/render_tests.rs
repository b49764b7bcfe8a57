// Host-side tests for frame composition, using the recording surface.

use field_core::render::{render, DrawCommand};
use field_core::palette::PaletteColor;
use field_core::{
    EngineConfig, Field, Layer, MeshStyle, Paint, PointerState, RecordingSurface, Viewport,
};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn clustered_field() -> Field {
    let mut f = Field::new(Viewport::new(1200.0, 800.0).unwrap(), MeshStyle::Grid, 7);
    for (i, p) in f.particles_mut().iter_mut().enumerate() {
        p.position = Vec2::new(500.0 + (i % 5) as f32 * 8.0, 400.0 + (i / 5) as f32 * 8.0);
    }
    f
}

#[test]
fn layers_are_drawn_back_to_front() {
    let mut f = clustered_field();
    f.set_pointer(PointerState::Present(Vec2::new(510.0, 410.0)));
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);

    assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
    assert_eq!(
        surface.layers(),
        vec![
            Layer::Background,
            Layer::Mesh,
            Layer::Lines,
            Layer::Entities,
            Layer::Links,
            Layer::Pointer,
        ]
    );
}

#[test]
fn every_frame_starts_with_a_clear() {
    let mut f = clustered_field();
    let mut surface = RecordingSurface::new();
    for _ in 0..3 {
        f.step(DT);
        render(&f, &mut surface);
    }
    let clears = surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Clear { .. }))
        .count();
    assert_eq!(clears, 3);
}

#[test]
fn link_strokes_follow_link_opacity() {
    let mut f = clustered_field();
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);

    let strokes = surface.commands_in(Layer::Links);
    assert_eq!(strokes.len(), f.links().len());
    for (cmd, link) in strokes.iter().zip(f.links()) {
        match cmd {
            DrawCommand::Stroke {
                paint: Paint::Solid(c),
                ..
            } => assert!((c.a - link.opacity * 0.3).abs() < 1e-6),
            other => panic!("unexpected link command {other:?}"),
        }
    }
}

#[test]
fn absent_pointer_draws_no_glow() {
    let mut f = clustered_field();
    f.set_pointer(PointerState::Absent);
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);

    assert!(!surface.layers().contains(&Layer::Pointer));
    let radial = surface.commands.iter().any(|c| {
        matches!(
            c,
            DrawCommand::FillRect {
                paint: Paint::Radial { .. },
                ..
            }
        )
    });
    assert!(!radial);
}

#[test]
fn pointer_layer_ends_with_radial_glow() {
    let mut f = clustered_field();
    let pointer = Vec2::new(510.0, 410.0);
    f.set_pointer(PointerState::Present(pointer));
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);

    let cmds = surface.commands_in(Layer::Pointer);
    assert_eq!(cmds.len(), f.pointer_interactions().len() + 1);
    match cmds.last() {
        Some(DrawCommand::FillRect {
            paint: Paint::Radial { center, radius, .. },
            ..
        }) => {
            assert_eq!(*center, pointer);
            assert_eq!(*radius, f.config().pointer_radius);
        }
        other => panic!("expected glow, got {other:?}"),
    }
}

fn empty_field(pointer: PointerState) -> Field {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let mut config = EngineConfig::for_viewport(vp, MeshStyle::Grid);
    config.particle_count = 0;
    config.node_count = 0;
    config.line_count = 0;
    let mut f = Field::new(vp, MeshStyle::Grid, 3);
    f.rebuild_with(config);
    f.set_pointer(pointer);
    f.step(DT);
    f
}

#[test]
fn empty_field_renders_background_only() {
    for pointer in [
        PointerState::Absent,
        PointerState::Present(Vec2::new(100.0, 100.0)),
    ] {
        let f = empty_field(pointer);
        let mut surface = RecordingSurface::new();
        render(&f, &mut surface);
        assert_eq!(surface.layers(), vec![Layer::Background, Layer::Mesh]);
        assert!(surface.commands_in(Layer::Entities).is_empty());
        let radial = surface
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRect { paint: Paint::Radial { .. }, .. }));
        assert!(!radial, "pointer glow drawn for {pointer:?}");
    }
}

fn is_hexagon(c: &DrawCommand) -> bool {
    matches!(c, DrawCommand::Stroke { closed: true, points, .. } if points.len() == 6)
}

#[test]
fn hex_mesh_draws_closed_paths() {
    let mut f = Field::new(Viewport::new(400.0, 300.0).unwrap(), MeshStyle::Hex, 3);
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);
    let hexes = surface
        .commands_in(Layer::Mesh)
        .into_iter()
        .filter(|c| is_hexagon(c))
        .count();
    assert!(hexes > 0);
}

fn grid_columns(surface: &RecordingSurface) -> Vec<f32> {
    surface
        .commands_in(Layer::Mesh)
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::Stroke {
                points,
                closed: false,
                width,
                ..
            } if *width == 1.0
                && points.len() == 2
                && points[0].x == points[1].x
                && points[0].y == 0.0 =>
            {
                Some(points[0].x)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn grid_mesh_spacing_matches_config() {
    let mut f = Field::new(Viewport::new(300.0, 90.0).unwrap(), MeshStyle::Grid, 3);
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);
    let spacing = f.config().grid_spacing;
    let xs = grid_columns(&surface);
    assert!(xs.len() >= 2);
    assert!(xs[0] <= 0.0 && xs[0] > -spacing);
    for pair in xs.windows(2) {
        assert!((pair[1] - pair[0] - spacing).abs() < 1e-3);
    }
    let last = xs[xs.len() - 1];
    assert!(last < 300.0 && last + spacing >= 300.0);
}

#[test]
fn grid_drifts_ten_px_per_second() {
    let mut f = Field::new(Viewport::new(300.0, 90.0).unwrap(), MeshStyle::Grid, 3);
    let mut surface = RecordingSurface::new();
    f.step(DT);
    render(&f, &mut surface);
    let first = grid_columns(&surface)[0];
    // 30 steps of 1/60 s = 0.5 s
    for _ in 0..30 {
        f.step(DT);
    }
    surface.reset();
    render(&f, &mut surface);
    let later = grid_columns(&surface)[0];
    let spacing = f.config().grid_spacing;
    let moved = (first - later).rem_euclid(spacing);
    assert!((moved - 5.0).abs() < 1e-2, "moved {moved}");
}

#[test]
fn scan_waves_fill_mesh_layer_once_each() {
    let mut f = Field::new(Viewport::new(1280.0, 720.0).unwrap(), MeshStyle::Grid, 9);
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);
    let bands: Vec<_> = surface
        .commands_in(Layer::Mesh)
        .into_iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { paint: Paint::Linear { .. }, .. }))
        .collect();
    assert_eq!(bands.len(), f.config().wave_count);
    assert_eq!(bands.len(), 4);
}

#[test]
fn circuits_draw_trace_and_signal() {
    let mut f = Field::new(Viewport::new(500.0, 700.0).unwrap(), MeshStyle::Grid, 9);
    f.step(DT);
    let mut surface = RecordingSurface::new();
    render(&f, &mut surface);
    let mesh = surface.commands_in(Layer::Mesh);
    let signals = mesh
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { glow: Some(g), .. } if g.blur == 20.0))
        .count();
    assert_eq!(signals, f.config().circuit_count);
    assert_eq!(signals, 3);
    let traces = mesh
        .iter()
        .filter(|c| matches!(c, DrawCommand::Stroke { points, .. } if points.len() > 2))
        .count();
    assert_eq!(traces, f.circuits().len());
}

#[test]
fn packets_ride_on_node_links() {
    let mut f = Field::new(Viewport::new(1200.0, 800.0).unwrap(), MeshStyle::Grid, 4);
    let mut total = 0;
    for _ in 0..120 {
        let stats = f.step(DT);
        assert!(stats.packets <= stats.node_links);
        let mut surface = RecordingSurface::new();
        render(&f, &mut surface);
        let dots = surface
            .commands_in(Layer::Mesh)
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::Circle { glow: Some(g), .. } if g.blur == 10.0))
            .count();
        assert_eq!(dots, stats.packets);
        total += stats.packets;
    }
    assert!(total > 0);
}

#[test]
fn scan_lines_only_in_hex_style() {
    let faint_yellow = |c: &&DrawCommand| {
        matches!(c, DrawCommand::Stroke { paint: Paint::Solid(p), .. }
            if p.rgb == PaletteColor::Tertiary.rgb() && (p.a - 0.03).abs() < 1e-6)
    };
    for (mesh, expect) in [(MeshStyle::Grid, false), (MeshStyle::Hex, true)] {
        let mut f = Field::new(Viewport::new(400.0, 300.0).unwrap(), mesh, 2);
        f.step(DT);
        let mut surface = RecordingSurface::new();
        render(&f, &mut surface);
        let found = surface.commands_in(Layer::Mesh).iter().any(faint_yellow);
        assert_eq!(found, expect, "{mesh:?}");
    }
}
