// Shared simulation and visual tuning constants.
//
// Per-frame values are expressed for a 60 Hz frame; `Field::step` rescales them
// by the real frame delta.

// Device tier
pub const TIER_BREAKPOINT_PX: f32 = 768.0; // widths below this are the reduced tier

// Entity counts (reduced, full)
pub const PARTICLE_COUNT: (usize, usize) = (30, 60);
pub const LINE_COUNT: (usize, usize) = (8, 15);
pub const NODE_COUNT: (usize, usize) = (20, 40);
pub const CIRCUIT_COUNT: (usize, usize) = (3, 5);
pub const WAVE_COUNT: (usize, usize) = (2, 4);

// Proximity thresholds (reduced, full)
pub const PARTICLE_LINK_DISTANCE: (f32, f32) = (100.0, 150.0);
pub const NODE_LINK_DISTANCE: (f32, f32) = (150.0, 200.0);

// Overlay sizing (reduced, full)
pub const GRID_SPACING: (f32, f32) = (40.0, 30.0);
pub const HEX_RADIUS: (f32, f32) = (60.0, 50.0);

// Pointer interaction
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_FORCE_GAIN: f32 = 0.2; // velocity change per frame at full force

// Time base
pub const FRAME_RATE_HZ: f32 = 60.0;
pub const MAX_FRAME_STEPS: f32 = 3.0; // cap on frames advanced by a single tick

// Particles
pub const PARTICLE_FRICTION: f32 = 0.99; // velocity multiplier per frame
pub const PARTICLE_MAX_INITIAL_SPEED: f32 = 0.25; // per axis, px per frame
pub const PARTICLE_SIZE_RANGE: (f32, f32) = (1.0, 4.0);
pub const PARTICLE_PULSE_SPEED_RANGE: (f32, f32) = (0.01, 0.03);
pub const PARTICLE_PULSE_AMPLITUDE: f32 = 0.5;
pub const PARTICLE_GLOW_BLUR: f32 = 10.0;

// Decorative lines
pub const LINE_SPAWN_MARGIN: f32 = 50.0; // spawn this far outside an edge
pub const LINE_RESET_MARGIN: f32 = 100.0; // respawn after leaving by this much
pub const LINE_SPEED_RANGE: (f32, f32) = (0.3, 0.8);
pub const LINE_LENGTH_RANGE: (f32, f32) = (100.0, 300.0);
pub const LINE_THICKNESS_RANGE: (f32, f32) = (1.0, 3.0);
pub const LINE_OPACITY_RANGE: (f32, f32) = (0.1, 0.4);
pub const LINE_SPIN_PER_FRAME: f32 = 0.01;

// Nodes
pub const NODE_SIZE_RANGE: (f32, f32) = (2.0, 6.0);
pub const NODE_FLOAT_RADIUS_RANGE: (f32, f32) = (20.0, 50.0);
pub const NODE_FLOAT_SPEED_RANGE: (f32, f32) = (0.3, 0.8);
pub const NODE_PULSE_SPEED_RANGE: (f32, f32) = (1.0, 3.0);
pub const NODE_GLOW_BLUR: f32 = 15.0;

// Circuits
pub const CIRCUIT_POINTS: (usize, usize) = (3, 6); // inclusive
pub const CIRCUIT_THICKNESS_RANGE: (f32, f32) = (1.0, 3.0);
pub const CIRCUIT_SPEED_RANGE: (f32, f32) = (0.2, 0.5); // path traversals per second
pub const CIRCUIT_CURVE_STEPS: usize = 8; // polyline samples per curved segment
pub const CIRCUIT_ALPHA: f32 = 0.3;
pub const CIRCUIT_SIGNAL_RADIUS: f32 = 5.0;
pub const CIRCUIT_SIGNAL_BLUR: f32 = 20.0;

// Scan waves
pub const WAVE_SPEED_RANGE: (f32, f32) = (0.5, 1.0);
pub const WAVE_PX_PER_SEC: f32 = 50.0; // at speed 1
pub const WAVE_THICKNESS_RANGE: (f32, f32) = (50.0, 150.0);
pub const WAVE_PEAK_ALPHA: f32 = 0.1;

// Data packets on node links
pub const PACKET_CHANCE: f64 = 0.05; // per link, per step
pub const PACKET_TRIPS_PER_SEC: f32 = 0.5;
pub const PACKET_RADIUS: f32 = 3.0;
pub const PACKET_GLOW_BLUR: f32 = 10.0;

// Layer opacities
pub const BACKGROUND_ALPHA: f32 = 0.05;
pub const GRID_ALPHA: f32 = 0.03;
pub const HEX_ALPHA: f32 = 0.08;
pub const HEX_DRIFT_PX_PER_SEC: f32 = 5.0;
pub const GRID_DRIFT_PX_PER_SEC: f32 = 10.0;
pub const SCAN_LINE_SPACING: f32 = 4.0;
pub const SCAN_LINE_DRIFT_PX_PER_SEC: f32 = 30.0;
pub const SCAN_LINE_ALPHA: f32 = 0.03;
pub const PARTICLE_LINK_ALPHA: f32 = 0.3;
pub const NODE_LINK_ALPHA: f32 = 0.3;
pub const POINTER_LINK_ALPHA: f32 = 0.5;
pub const POINTER_GLOW_ALPHA: f32 = 0.1;
