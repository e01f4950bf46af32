pub mod controls;
pub mod part;
pub mod physics;
pub mod profile;
pub mod spatial;
pub mod telemetry;

pub use controls::{ControlChannel, ControlInputs, ControlState};
pub use part::{
    AttachedPart, Attachments, CenterParams, Part, PartId, PartKind, PartRole, SegmentProfile,
    ShapeSegments, Slot,
};
pub use physics::{Force, ForceCategory, PhysicsComponent, ReferenceFrame};
pub use profile::AssemblyProfile;
pub use spatial::SpatialComponent;
pub use telemetry::FlightTelemetry;
