use field_core::render::{Glow, GradientStop, Paint, Surface};
use glam::Vec2;
use web_sys as web;

/// [`Surface`] backed by a browser `CanvasRenderingContext2d`. Draw calls are
/// in logical pixels; the context transform scales them to the backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    pixel_ratio: f64,
}

enum Target {
    Fill,
    Stroke,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, pixel_ratio: f64) -> Self {
        Self { ctx, pixel_ratio }
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.pixel_ratio = pixel_ratio;
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[GradientStop]) {
        for s in stops {
            _ = gradient.add_color_stop(s.offset.clamp(0.0, 1.0) as f64, &s.color.to_css());
        }
    }

    /// Install `paint` as the fill or stroke style. Returns `false` if the
    /// gradient could not be created, in which case the shape is skipped.
    fn set_paint(&self, paint: &Paint, target: Target) -> bool {
        let gradient = match paint {
            Paint::Solid(c) => {
                let css = c.to_css();
                match target {
                    Target::Fill => self.ctx.set_fill_style_str(&css),
                    Target::Stroke => self.ctx.set_stroke_style_str(&css),
                }
                return true;
            }
            Paint::Linear { from, to, stops } => {
                let g = self
                    .ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
                Self::add_stops(&g, stops);
                g
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                match self
                    .ctx
                    .create_radial_gradient(x, y, 0.0, x, y, (*radius).max(0.0) as f64)
                {
                    Ok(g) => {
                        Self::add_stops(&g, stops);
                        g
                    }
                    Err(e) => {
                        log::debug!("[surface] radial gradient failed: {:?}", e);
                        return false;
                    }
                }
            }
        };
        match target {
            Target::Fill => self.ctx.set_fill_style_canvas_gradient(&gradient),
            Target::Stroke => self.ctx.set_stroke_style_canvas_gradient(&gradient),
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        // Resizing the canvas resets the transform, so set it every frame.
        let r = self.pixel_ratio;
        _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        if self.set_paint(paint, Target::Fill) {
            self.ctx
                .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], closed: bool, paint: &Paint, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if !self.set_paint(paint, Target::Stroke) {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        if closed {
            self.ctx.close_path();
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, glow: Option<Glow>) {
        if !self.set_paint(paint, Target::Fill) {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            return;
        }
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.to_hex());
                self.ctx.fill();
                self.ctx.set_shadow_blur(0.0);
            }
            None => self.ctx.fill(),
        }
    }
}
