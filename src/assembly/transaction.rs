use nalgebra::Vector3;

use crate::assembly::{propagate, AssemblyError, PartsStorage};
use crate::components::PartId;

/// An in-progress drag of one part and everything attached to it.
///
/// The committed snapshot is never touched. Each [`update`](Self::update)
/// recomputes the working copy from that snapshot with the accumulated delta,
/// so repeated pointer moves do not compound rounding error. Dropping the
/// transaction or calling [`cancel`](Self::cancel) discards the working copy.
#[derive(Debug, Clone)]
pub struct DragTransaction {
    base: PartsStorage,
    working: PartsStorage,
    part: PartId,
    position_delta: Vector3<f64>,
    rotation_delta: Vector3<f64>,
}

impl DragTransaction {
    pub fn begin(snapshot: &PartsStorage, part: PartId) -> Result<Self, AssemblyError> {
        if !snapshot.contains(part) {
            return Err(AssemblyError::PartNotFound(part));
        }
        let mut working = snapshot.clone();
        if let Some(p) = working.find_part_mut(part) {
            p.drag = true;
        }
        Ok(Self {
            base: snapshot.clone(),
            working,
            part,
            position_delta: Vector3::zeros(),
            rotation_delta: Vector3::zeros(),
        })
    }

    pub fn part(&self) -> PartId {
        self.part
    }

    /// State as it would look if committed now.
    pub fn preview(&self) -> &PartsStorage {
        &self.working
    }

    /// Accumulate a further pointer movement.
    pub fn update(
        &mut self,
        position_delta: Vector3<f64>,
        rotation_delta: Vector3<f64>,
    ) -> Result<(), AssemblyError> {
        self.position_delta += position_delta;
        self.rotation_delta += rotation_delta;
        let mut working = propagate(
            &self.base,
            self.part,
            self.position_delta,
            self.rotation_delta,
        )?;
        if let Some(p) = working.find_part_mut(self.part) {
            p.drag = true;
        }
        self.working = working;
        Ok(())
    }

    /// Finish the drag and hand back the new committed state.
    pub fn commit(self) -> PartsStorage {
        let mut committed = self.working;
        if let Some(p) = committed.find_part_mut(self.part) {
            p.drag = self.base.find_part(self.part).is_some_and(|b| b.drag);
        }
        committed
    }

    /// Abandon the drag; the snapshot it started from is returned untouched.
    pub fn cancel(self) -> PartsStorage {
        self.base
    }
}
