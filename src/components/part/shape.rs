use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_RING_POINTS;

/// Parametric description of one 2D cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentProfile {
    /// Number of points on the generated ring.
    pub point_count: usize,
    /// Width and height of the profile bounding box (m).
    pub size: [f64; 2],
    /// Corner rounding per quadrant, 0 = sharp corner and 1 = fully round.
    /// Order: (+x,+y), (-x,+y), (-x,-y), (+x,-y).
    pub corner_radii: [f64; 4],
    /// Narrows the profile in X towards its top edge.
    pub pinch_x: f64,
    /// Narrows the profile in Y towards its right edge.
    pub pinch_y: f64,
    /// Tilts the ring out of its plane, dz = slant * y.
    pub slant: f64,
}

impl SegmentProfile {
    pub fn new(point_count: usize, width: f64, height: f64) -> Self {
        Self {
            point_count,
            size: [width, height],
            ..Default::default()
        }
    }

    pub fn rounded(point_count: usize, width: f64, height: f64) -> Self {
        Self::new(point_count, width, height)
    }

    pub fn boxed(point_count: usize, width: f64, height: f64, corner: f64) -> Self {
        Self {
            corner_radii: [corner; 4],
            ..Self::new(point_count, width, height)
        }
    }

    /// A profile that reduces to an evenly spaced circle.
    pub fn is_circular(&self) -> bool {
        self.size[0] == self.size[1]
            && self.corner_radii.iter().all(|c| *c == 1.0)
            && self.pinch_x == 0.0
            && self.pinch_y == 0.0
            && self.slant == 0.0
    }
}

impl Default for SegmentProfile {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_RING_POINTS,
            size: [1.0, 1.0],
            corner_radii: [1.0; 4],
            pinch_x: 0.0,
            pinch_y: 0.0,
            slant: 0.0,
        }
    }
}

/// Global shape parameters from which the effective front/back profiles derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterParams {
    /// Distance between the front and back sections (m).
    pub length: f64,
    /// Lateral shift of the front section relative to the back (m).
    pub offset_x: f64,
    /// Vertical shift of the front section relative to the back (m).
    pub offset_y: f64,
    /// Added to the pinch of both end profiles.
    pub pinch: f64,
    /// Added to the slant of both end profiles.
    pub slant: f64,
}

impl CenterParams {
    pub fn with_length(length: f64) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }
}

impl Default for CenterParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            pinch: 0.0,
            slant: 0.0,
        }
    }
}

/// Named cross-sections making up a part's silhouette.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeSegments {
    pub front: SegmentProfile,
    pub back: SegmentProfile,
    pub center: CenterParams,
}

impl ShapeSegments {
    pub fn new(front: SegmentProfile, back: SegmentProfile, center: CenterParams) -> Self {
        Self {
            front,
            back,
            center,
        }
    }

    /// Same profile at both ends.
    pub fn prism(profile: SegmentProfile, length: f64) -> Self {
        Self::new(profile.clone(), profile, CenterParams::with_length(length))
    }

    pub fn length(&self) -> f64 {
        self.center.length
    }
}
