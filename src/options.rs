use crate::constants::DEFAULT_CANVAS_ID;
use field_core::MeshStyle;

/// Start-up options for one background instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOptions {
    pub canvas_id: String,
    pub seed: Option<u64>,
    pub mesh: MeshStyle,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            seed: None,
            mesh: MeshStyle::Grid,
        }
    }
}

impl FieldOptions {
    pub fn for_canvas(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        }
    }

    /// Apply the optional `data-mesh` / `data-seed` attribute values.
    /// Unrecognized values are ignored with a warning.
    pub fn with_attributes(mut self, mesh: Option<&str>, seed: Option<&str>) -> Self {
        if let Some(m) = mesh {
            match MeshStyle::parse(m) {
                Some(style) => self.mesh = style,
                None => log::warn!("[options] unknown mesh style {:?}, using {:?}", m, self.mesh),
            }
        }
        if let Some(s) = seed {
            match s.trim().parse::<u64>() {
                Ok(v) => self.seed = Some(v),
                Err(_) => log::warn!("[options] ignoring non-numeric seed {:?}", s),
            }
        }
        self
    }
}
