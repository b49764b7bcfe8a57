// Web front-end tuning constants.
// Simulation tuning lives in `field_core::constants`; these only cover how the
// browser host drives it.

// Element the background attaches to when none is given
pub const DEFAULT_CANVAS_ID: &str = "bg-canvas";

// Canvas data attributes
pub const MESH_ATTR: &str = "data-mesh"; // "grid" | "hex"
pub const SEED_ATTR: &str = "data-seed"; // fixed RNG seed, decimal
pub const ATTACHED_ATTR: &str = "data-field-attached"; // set once an engine owns the canvas

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (tab switch, debugger) count as this
pub const RESUME_DT_SEC: f32 = 1.0 / 60.0; // first frame after a resume
