use crate::scale;
use field_core::PointerState;
use glam::Vec2;
use web_sys as web;

/// Map a client-space point into canvas pixels of size `canvas_size`.
///
/// `rect_origin`/`rect_size` are the canvas' bounding client rect. Returns
/// `None` for a collapsed rect.
#[inline]
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let css = client - rect_origin;
    let px = css / rect_size * canvas_size;
    px.is_finite().then_some(px)
}

/// Client point to logical canvas pixels (backing store divided by the
/// device pixel ratio), the space the simulation runs in.
#[inline]
fn canvas_point(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> PointerState {
    let rect = canvas.get_bounding_client_rect();
    let ratio = web::window()
        .map(|w| scale::pixel_ratio(w.device_pixel_ratio()))
        .unwrap_or(1.0) as f32;
    client_to_canvas(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32) / ratio,
    )
    .into()
}

// ---------------- Event adapters ----------------
#[inline]
pub fn pointer_from_mouse(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> PointerState {
    canvas_point(ev.client_x() as f64, ev.client_y() as f64, canvas)
}

/// First active touch, or absent when the last finger lifted.
#[inline]
pub fn pointer_from_touch(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> PointerState {
    match ev.touches().get(0) {
        Some(t) => canvas_point(t.client_x() as f64, t.client_y() as f64, canvas),
        None => PointerState::Absent,
    }
}
