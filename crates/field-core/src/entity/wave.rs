use super::{range, Step};
use crate::config::Viewport;
use crate::constants::*;
use crate::palette::PaletteColor;
use glam::Vec2;
use rand::Rng;

/// Soft gradient band that sweeps across the canvas and re-enters from the
/// start once fully past the far edge.
#[derive(Clone, Debug)]
pub struct ScanWave {
    /// Sweeps left to right when set, top to bottom otherwise.
    pub vertical: bool,
    pub index: usize,
    pub speed: f32,
    pub thickness: f32,
    pub color: PaletteColor,
    /// Leading edge along the sweep axis, in `[-thickness, extent + thickness)`.
    pub position: f32,
}

impl ScanWave {
    /// Waves are staggered by a quarter of the sweep per index and cycle
    /// through the palette in order.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        let thickness = range(rng, WAVE_THICKNESS_RANGE);
        Self {
            vertical: rng.gen_bool(0.5),
            index,
            speed: range(rng, WAVE_SPEED_RANGE),
            thickness,
            color: PaletteColor::ALL[index % PaletteColor::ALL.len()],
            position: -thickness,
        }
    }

    #[inline]
    fn extent(&self, bounds: Viewport) -> f32 {
        if self.vertical {
            bounds.width
        } else {
            bounds.height
        }
    }

    pub fn advance(&mut self, bounds: Viewport, step: Step) {
        let extent = self.extent(bounds);
        let period = (extent + self.thickness * 2.0) as f64;
        let travelled = step.time * (self.speed * WAVE_PX_PER_SEC) as f64
            + self.index as f64 * extent as f64 / 4.0;
        let offset = if period > 0.0 {
            travelled.rem_euclid(period) as f32
        } else {
            0.0
        };
        // Narrowing can round up to exactly one period.
        let offset = if offset as f64 >= period { 0.0 } else { offset };
        self.position = offset - self.thickness;
    }

    /// The band's rectangle as `(origin, size)`.
    pub fn rect(&self, bounds: Viewport) -> (Vec2, Vec2) {
        if self.vertical {
            (
                Vec2::new(self.position, 0.0),
                Vec2::new(self.thickness, bounds.height),
            )
        } else {
            (
                Vec2::new(0.0, self.position),
                Vec2::new(bounds.width, self.thickness),
            )
        }
    }

    /// Gradient axis across the band's thickness.
    pub fn axis(&self) -> (Vec2, Vec2) {
        if self.vertical {
            (
                Vec2::new(self.position, 0.0),
                Vec2::new(self.position + self.thickness, 0.0),
            )
        } else {
            (
                Vec2::new(0.0, self.position),
                Vec2::new(0.0, self.position + self.thickness),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wave(vertical: bool, index: usize) -> ScanWave {
        ScanWave {
            vertical,
            index,
            speed: 1.0,
            thickness: 100.0,
            color: PaletteColor::Primary,
            position: 0.0,
        }
    }

    #[test]
    fn sweeps_at_fifty_px_per_second() {
        let bounds = Viewport::new(800.0, 600.0).unwrap();
        let mut w = wave(true, 0);
        w.advance(bounds, Step { frames: 1.0, time: 2.0 });
        assert!((w.position - 0.0).abs() < 1e-3);
        w.advance(bounds, Step { frames: 1.0, time: 3.0 });
        assert!((w.position - 50.0).abs() < 1e-3);
    }

    #[test]
    fn position_wraps_past_far_edge() {
        let bounds = Viewport::new(800.0, 600.0).unwrap();
        let mut w = wave(false, 1);
        for i in 0..2000 {
            w.advance(bounds, Step { frames: 1.0, time: i as f64 * 0.25 });
            assert!(w.position >= -w.thickness && w.position < 600.0 + w.thickness);
        }
    }

    #[test]
    fn index_staggers_the_start() {
        let bounds = Viewport::new(800.0, 600.0).unwrap();
        let (mut a, mut b) = (wave(true, 0), wave(true, 1));
        let start = Step { frames: 0.0, time: 0.0 };
        a.advance(bounds, start);
        b.advance(bounds, start);
        assert!((b.position - a.position - 200.0).abs() < 1e-3);
    }

    #[test]
    fn colours_cycle_through_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        let colors: Vec<_> = (0..5).map(|i| ScanWave::spawn(&mut rng, i).color).collect();
        assert_eq!(&colors[..4], &PaletteColor::ALL[..]);
        assert_eq!(colors[4], PaletteColor::ALL[0]);
    }

    #[test]
    fn horizontal_band_spans_full_width() {
        let bounds = Viewport::new(800.0, 600.0).unwrap();
        let mut w = wave(false, 0);
        w.position = 120.0;
        assert_eq!(
            w.rect(bounds),
            (Vec2::new(0.0, 120.0), Vec2::new(800.0, 100.0))
        );
        assert_eq!(w.axis(), (Vec2::new(0.0, 120.0), Vec2::new(0.0, 220.0)));
    }
}
