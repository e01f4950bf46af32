use nalgebra::Vector3;

/// Map index `i` of a ring walked with `from` steps onto a ring of `to` points.
///
/// Integer division keeps the mapping monotonic; `i == from` wraps to 0.
#[inline]
pub fn remap_index(i: usize, from: usize, to: usize) -> usize {
    (i * to / from) % to
}

/// Stitch ring `a` to ring `b` with a closed band of triangles.
///
/// Walks `max(|a|, |b|)` steps around both rings and emits two triangles per
/// step, `(a0, b0, a1)` and `(b0, b1, a1)`. The output is a flat triangle
/// list, three positions per triangle. Either ring being empty yields nothing.
pub fn build_bridge(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let steps = a.len().max(b.len());
    let mut positions = Vec::with_capacity(steps * 6);

    for i in 0..steps {
        let a0 = a[remap_index(i, steps, a.len())];
        let a1 = a[remap_index(i + 1, steps, a.len())];
        let b0 = b[remap_index(i, steps, b.len())];
        let b1 = b[remap_index(i + 1, steps, b.len())];

        positions.extend_from_slice(&[a0, b0, a1, b0, b1, a1]);
    }
    positions
}

pub fn triangle_count(positions: &[Vector3<f64>]) -> usize {
    positions.len() / 3
}

/// Flatten to the `[x, y, z, x, y, z, ..]` single-precision layout render backends take.
pub fn flatten_positions(positions: &[Vector3<f64>]) -> Vec<f32> {
    positions
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
