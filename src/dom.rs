use crate::scale;
use field_core::{FieldError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(
    document: &web::Document,
    element_id: &str,
) -> Result<web::HtmlCanvasElement, FieldError> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| FieldError::MissingSurface(element_id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
    element_id: &str,
) -> Result<web::CanvasRenderingContext2d, FieldError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| FieldError::ContextUnavailable(element_id.to_string()))
}

/// Logical viewport plus the device pixel ratio the backing store uses.
#[derive(Clone, Copy, Debug)]
pub struct CanvasFit {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
}

/// Cover the window: CSS size is the window's inner size and the backing
/// store is that times `devicePixelRatio`, so HiDPI screens stay sharp.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Option<CanvasFit> {
    let window = web::window()?;
    let w = window.inner_width().ok()?.as_f64()?.max(0.0);
    let h = window.inner_height().ok()?.as_f64()?.max(0.0);
    let ratio = scale::pixel_ratio(window.device_pixel_ratio());
    let (w_px, h_px) = scale::backing_size(w, h, ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    let viewport = Viewport::new(w as f32, h as f32).ok()?;
    Some(CanvasFit {
        viewport,
        pixel_ratio: ratio,
    })
}


#[inline]
pub fn document_hidden() -> bool {
    window_document().map(|d| d.hidden()).unwrap_or(false)
}
