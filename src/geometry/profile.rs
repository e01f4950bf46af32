use nalgebra::Vector3;
use std::f64::consts::TAU;

use crate::components::SegmentProfile;
use crate::utils::lerp;

/// Ordered points in a segment's local frame. Point `i` of an `n`-point ring
/// always sits at angle `2π·i/n`, whatever the shaping parameters, because
/// downstream code indexes rings positionally.
pub type Ring = Vec<Vector3<f64>>;

/// `count` points evenly spaced on a circle in the XY plane through `center`.
pub fn generate_circle_points(center: &Vector3<f64>, count: usize, radius: f64) -> Ring {
    (0..count)
        .map(|i| {
            let theta = TAU * i as f64 / count as f64;
            Vector3::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
                center.z,
            )
        })
        .collect()
}

/// Corner index for a direction: (+x,+y), (-x,+y), (-x,-y), (+x,-y).
fn quadrant(cos: f64, sin: f64) -> usize {
    match (cos >= 0.0, sin >= 0.0) {
        (true, true) => 0,
        (false, true) => 1,
        (false, false) => 2,
        (true, false) => 3,
    }
}

/// Ring for a parametric profile, centred on the origin.
///
/// Each direction is first placed on the unit square and on the unit circle;
/// the quadrant's corner radius blends between the two. Pinch then narrows
/// the shape towards its top (X pinch) or right (Y pinch) edge, the result is
/// scaled to the profile size, and slant tilts it out of plane.
pub fn generate_profile(profile: &SegmentProfile) -> Ring {
    let count = profile.point_count;
    if count == 0 {
        return Vec::new();
    }
    let [width, height] = profile.size;
    if profile.is_circular() {
        return generate_circle_points(&Vector3::zeros(), count, width / 2.0);
    }

    let (half_w, half_h) = (width / 2.0, height / 2.0);
    (0..count)
        .map(|i| {
            let theta = TAU * i as f64 / count as f64;
            let (sin, cos) = theta.sin_cos();
            let corner = profile.corner_radii[quadrant(cos, sin)].clamp(0.0, 1.0);

            let edge = cos.abs().max(sin.abs());
            let nx = lerp(cos / edge, cos, corner);
            let ny = lerp(sin / edge, sin, corner);

            let px = nx * (1.0 - profile.pinch_x * (ny + 1.0) / 2.0);
            let py = ny * (1.0 - profile.pinch_y * (nx + 1.0) / 2.0);

            let y = py * half_h;
            Vector3::new(px * half_w, y, profile.slant * y)
        })
        .collect()
}
