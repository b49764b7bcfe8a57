// Canvas backing-store scaling. The simulation runs in logical (CSS) pixels;
// the backing store is that size times `devicePixelRatio`.

/// `devicePixelRatio`, or 1 when the browser reports something unusable.
#[inline]
pub fn pixel_ratio(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        1.0
    }
}

/// Backing-store size in device pixels for a logical size. Never zero.
#[inline]
pub fn backing_size(logical_w: f64, logical_h: f64, ratio: f64) -> (u32, u32) {
    let r = pixel_ratio(ratio);
    let w_px = (logical_w.max(0.0) * r) as u32;
    let h_px = (logical_h.max(0.0) * r) as u32;
    (w_px.max(1), h_px.max(1))
}
