mod kind;
#[allow(clippy::module_inception)]
mod part;
mod shape;

pub use kind::{PartKind, PartRole};
pub use part::{AttachedPart, Attachments, Part, PartId, Slot};
pub use shape::{CenterParams, SegmentProfile, ShapeSegments};
