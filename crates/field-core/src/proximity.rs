//! Per-frame proximity relations.
//!
//! Entity counts are bounded by the device tier (tens, not thousands), so pairs
//! are found with a brute-force scan over unique unordered pairs. Results depend
//! only on the positions passed in and are rebuilt from scratch every frame.

use glam::Vec2;

/// Two entities closer than the link threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityLink {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// An entity inside the pointer radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInteraction {
    pub index: usize,
    pub distance: f32,
    /// Unit-scaled push away from the pointer: direction times
    /// `(radius - distance) / radius`.
    pub force: Vec2,
    /// `1 - distance / radius`.
    pub opacity: f32,
}

/// Opacity of a link at `distance`: 1 at zero distance, falling linearly to 0
/// at `max_distance` and beyond.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 || !distance.is_finite() {
        return 0.0;
    }
    if distance <= 0.0 {
        return 1.0;
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Append every pair `(i, j)` with `i < j` closer than `max_distance`.
pub fn collect_links(positions: &[Vec2], max_distance: f32, out: &mut Vec<ProximityLink>) {
    out.clear();
    if positions.len() < 2 || max_distance <= 0.0 {
        return;
    }
    let max_sq = max_distance * max_distance;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let d_sq = positions[i].distance_squared(positions[j]);
            if d_sq < max_sq {
                let distance = d_sq.sqrt();
                out.push(ProximityLink {
                    a: i,
                    b: j,
                    distance,
                    opacity: link_opacity(distance, max_distance),
                });
            }
        }
    }
}

/// Convenience wrapper around [`collect_links`].
pub fn links(positions: &[Vec2], max_distance: f32) -> Vec<ProximityLink> {
    let mut out = Vec::new();
    collect_links(positions, max_distance, &mut out);
    out
}

/// Append every entity strictly inside `radius` of `pointer`.
pub fn collect_pointer_interactions(
    positions: &[Vec2],
    pointer: Vec2,
    radius: f32,
    out: &mut Vec<PointerInteraction>,
) {
    out.clear();
    if radius <= 0.0 {
        return;
    }
    for (index, p) in positions.iter().enumerate() {
        let away = *p - pointer;
        let distance = away.length();
        if distance >= radius {
            continue;
        }
        let strength = (radius - distance) / radius;
        // Coincident with the pointer: any direction is valid, pick +x.
        let dir = away.try_normalize().unwrap_or(Vec2::X);
        out.push(PointerInteraction {
            index,
            distance,
            force: dir * strength,
            opacity: link_opacity(distance, radius),
        });
    }
}
