//! Colour palette and CSS colour formatting.

use rand::Rng;

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba { rgb: self, a }
    }

    /// `#rrggbb` form, used for solid fills and shadow colours.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour plus straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgb::new(255, 255, 255).with_alpha(1.0);

    pub fn to_css(self) -> String {
        let a = if self.a.is_finite() {
            self.a.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b, a)
    }
}

/// The site palette, in a fixed order so random picks are stable for a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Primary,
    Secondary,
    Tertiary,
    Accent,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::Primary,
        PaletteColor::Secondary,
        PaletteColor::Tertiary,
        PaletteColor::Accent,
    ];

    pub const fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Primary => Rgb::new(59, 130, 246),   // hero blue
            PaletteColor::Secondary => Rgb::new(255, 46, 99),  // power pink
            PaletteColor::Tertiary => Rgb::new(252, 211, 77),  // cyber yellow
            PaletteColor::Accent => Rgb::new(139, 92, 246),    // purple
        }
    }

    /// Uniformly pick one palette entry.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Cyan used for data packets travelling along node links.
pub const GLOW: Rgb = Rgb::new(0, 217, 255);
