use bevy::prelude::*;
use std::collections::HashSet;

use crate::assembly::{validator, AssemblyError, PartsStorage};
use crate::components::{PartId, Slot};

/// A reference that was dropped while sanitizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    pub part: PartId,
    pub slot: Slot,
    pub missing: PartId,
}

/// Reject an assembly in which two parts share an id.
pub fn check_unique_ids(storage: &PartsStorage) -> Result<(), AssemblyError> {
    let mut seen = HashSet::new();
    match storage.ids().find(|id| !seen.insert(*id)) {
        Some(id) => Err(AssemblyError::DuplicatePartId(id)),
        None => Ok(()),
    }
}

/// Verify that every listing has its mirror on the other part.
pub fn check_symmetry(storage: &PartsStorage) -> Result<(), AssemblyError> {
    for part in &storage.parts {
        for slot in Slot::ALL {
            for other in part.attached_ids(slot) {
                let mirrored = storage
                    .find_part(other)
                    .is_some_and(|o| o.attached_ids(slot.complement()).any(|id| id == part.id));
                if !mirrored {
                    return Err(AssemblyError::AsymmetricAttachment {
                        part: part.id,
                        slot,
                        other,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Drop references to parts that do not exist, logging each one.
pub fn sanitize(storage: &PartsStorage) -> (PartsStorage, Vec<DanglingReference>) {
    let mut next = storage.clone();
    let mut dropped = Vec::new();

    for part in &mut next.parts {
        for slot in Slot::ALL {
            let id = part.id;
            part.attached.slot_mut(slot).retain(|a| {
                let present = storage.contains(a.id);
                if !present {
                    warn!(
                        "Dropping dangling reference from {} ({:?}) to missing part {}",
                        id, slot, a.id
                    );
                    dropped.push(DanglingReference {
                        part: id,
                        slot,
                        missing: a.id,
                    });
                }
                present
            });
        }
    }

    if next.selected_part.is_some_and(|id| !storage.contains(id)) {
        warn!("Clearing selection of missing part");
        next.selected_part = None;
    }

    (next, dropped)
}

/// Full check for assemblies that did not come through the mutation API, such
/// as externally edited save files.
///
/// Ids must be unique, dangling references are dropped, and symmetry is then
/// enforced. A loop in the graph is reported but tolerated, since every walk
/// is guarded.
pub fn verify(storage: &PartsStorage) -> Result<PartsStorage, AssemblyError> {
    check_unique_ids(storage)?;
    let (clean, _) = sanitize(storage);
    check_symmetry(&clean)?;
    if !validator::is_forest(&clean) {
        warn!("Assembly contains a cycle; transforms will follow the first path found");
    }
    Ok(clean)
}
