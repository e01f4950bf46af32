use thiserror::Error;

use crate::components::{PartId, Slot};

/// Hard failures of the assembly layer.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Part {0} does not exist")]
    PartNotFound(PartId),

    #[error("Part id {0} is used by more than one part")]
    DuplicatePartId(PartId),

    #[error("Unknown part type: {0}")]
    UnknownPartType(String),

    #[error("Part {part} lists {other} under {slot:?} but {other} does not list it back")]
    AsymmetricAttachment {
        part: PartId,
        slot: Slot,
        other: PartId,
    },

    #[error("Failed to parse assembly JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Expected, user-triggerable reasons an attach request is refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachRejection {
    #[error("Part {0} cannot be attached to itself")]
    SelfAttachment(PartId),

    #[error("Part {0} does not exist")]
    PartNotFound(PartId),

    #[error("Parts {0} and {1} are already connected")]
    AlreadyConnected(PartId, PartId),

    #[error("Attaching {0} to {1} would close a cycle")]
    WouldFormCycle(PartId, PartId),
}
