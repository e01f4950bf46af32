use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::assembly::AssemblyError;
use crate::components::part::shape::{CenterParams, SegmentProfile, ShapeSegments};

/// What a part contributes to flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRole {
    Structural,
    Engine,
    LiftingSurface,
}

/// The closed set of part kinds the editor knows how to build.
///
/// Each kind resolves its default shape, mass and role through a single
/// exhaustive match, so an unknown kind can only enter through [`FromStr`]
/// (or deserialization), where it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    #[serde(rename = "fueltank")]
    FuelTank,
    #[serde(rename = "fuselage")]
    Fuselage,
    #[serde(rename = "cockpit")]
    Cockpit,
    #[serde(rename = "engine1")]
    Engine,
    #[serde(rename = "wing")]
    Wing,
    #[serde(rename = "tail")]
    Tail,
}

impl PartKind {
    pub const ALL: [PartKind; 6] = [
        PartKind::FuelTank,
        PartKind::Fuselage,
        PartKind::Cockpit,
        PartKind::Engine,
        PartKind::Wing,
        PartKind::Tail,
    ];

    /// Registry name, as used in persisted assemblies.
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::FuelTank => "fueltank",
            PartKind::Fuselage => "fuselage",
            PartKind::Cockpit => "cockpit",
            PartKind::Engine => "engine1",
            PartKind::Wing => "wing",
            PartKind::Tail => "tail",
        }
    }

    /// Default bounding size `[width, height, length]` (m).
    pub fn default_size(&self) -> [f64; 3] {
        match self {
            PartKind::FuelTank => [1.0, 1.0, 2.0],
            PartKind::Fuselage => [1.2, 1.2, 3.0],
            PartKind::Cockpit => [1.2, 1.2, 1.5],
            PartKind::Engine => [0.8, 0.8, 1.2],
            PartKind::Wing => [4.0, 0.2, 1.5],
            PartKind::Tail => [1.5, 0.15, 1.0],
        }
    }

    /// Dry mass contribution (kg).
    pub fn mass(&self) -> f64 {
        match self {
            PartKind::FuelTank => 400.0,
            PartKind::Fuselage => 300.0,
            PartKind::Cockpit => 250.0,
            PartKind::Engine => 500.0,
            PartKind::Wing => 200.0,
            PartKind::Tail => 60.0,
        }
    }

    pub fn role(&self) -> PartRole {
        match self {
            PartKind::FuelTank | PartKind::Fuselage | PartKind::Cockpit => PartRole::Structural,
            PartKind::Engine => PartRole::Engine,
            PartKind::Wing | PartKind::Tail => PartRole::LiftingSurface,
        }
    }

    /// Whether two attached parts of this kind get a bridging skin between them.
    pub fn is_fuselage_like(&self) -> bool {
        matches!(
            self,
            PartKind::FuelTank | PartKind::Fuselage | PartKind::Cockpit
        )
    }

    /// Default cross-section set for a freshly added part.
    pub fn default_segments(&self) -> ShapeSegments {
        let [width, height, length] = self.default_size();
        match self {
            PartKind::FuelTank | PartKind::Fuselage => {
                ShapeSegments::prism(SegmentProfile::rounded(16, width, height), length)
            }
            PartKind::Cockpit => ShapeSegments::new(
                SegmentProfile {
                    pinch_x: 0.3,
                    ..SegmentProfile::rounded(16, width * 0.6, height * 0.7)
                },
                SegmentProfile::rounded(16, width, height),
                CenterParams {
                    offset_y: 0.15,
                    ..CenterParams::with_length(length)
                },
            ),
            PartKind::Engine => ShapeSegments::new(
                SegmentProfile::rounded(12, width, height),
                SegmentProfile::rounded(12, width * 0.7, height * 0.7),
                CenterParams::with_length(length),
            ),
            PartKind::Wing | PartKind::Tail => {
                ShapeSegments::prism(SegmentProfile::boxed(8, width, height, 0.5), length)
            }
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AssemblyError::UnknownPartType(s.to_string()))
    }
}
