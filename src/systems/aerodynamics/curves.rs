/// Piecewise-linear curve through `(x, y)` control points sorted by `x`.
///
/// Outside the table the boundary value is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    points: &'static [(f64, f64)],
}

impl Curve {
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &'static [(f64, f64)] {
        self.points
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        self.points
            .windows(2)
            .find(|w| x <= w[1].0)
            .map(|w| {
                let (x0, y0) = w[0];
                let (x1, y1) = w[1];
                y0 + (x - x0) / (x1 - x0) * (y1 - y0)
            })
            .unwrap_or(last.1)
    }
}

/// Lift coefficient against effective angle of attack (deg).
///
/// Dense around ±15..27° where the wing stalls.
pub const CL: Curve = Curve::new(&[
    (-180.0, 0.0),
    (-160.0, 0.6),
    (-135.0, 0.9),
    (-90.0, 0.0),
    (-45.0, -0.85),
    (-27.0, -0.75),
    (-24.0, -0.9),
    (-21.0, -1.1),
    (-18.0, -1.3),
    (-15.0, -1.2),
    (-10.0, -0.85),
    (-5.0, -0.4),
    (0.0, 0.1),
    (5.0, 0.6),
    (10.0, 1.0),
    (15.0, 1.35),
    (18.0, 1.45),
    (21.0, 1.2),
    (24.0, 0.95),
    (27.0, 0.8),
    (45.0, 0.9),
    (90.0, 0.0),
    (135.0, -0.9),
    (160.0, -0.6),
    (180.0, 0.0),
]);

/// Drag coefficient against effective angle of attack (deg).
pub const CD: Curve = Curve::new(&[
    (-180.0, 0.03),
    (-135.0, 1.0),
    (-90.0, 1.8),
    (-45.0, 1.0),
    (-27.0, 0.35),
    (-24.0, 0.28),
    (-21.0, 0.2),
    (-18.0, 0.12),
    (-15.0, 0.08),
    (-10.0, 0.04),
    (0.0, 0.02),
    (10.0, 0.04),
    (15.0, 0.08),
    (18.0, 0.12),
    (21.0, 0.2),
    (24.0, 0.28),
    (27.0, 0.35),
    (45.0, 1.0),
    (90.0, 1.8),
    (135.0, 1.0),
    (180.0, 0.03),
]);
