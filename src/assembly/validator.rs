use std::collections::{BTreeSet, HashSet};

use crate::assembly::{AttachRejection, PartsStorage};
use crate::components::{Part, PartId};

/// Ids reachable from `start` through any slot, `start` included.
///
/// References to ids that no longer exist are not followed. The walk keeps
/// its own visited set, so input that already contains a cycle terminates.
pub fn reachable_from(storage: &PartsStorage, start: PartId) -> HashSet<PartId> {
    let mut visited = HashSet::new();
    if !storage.contains(start) {
        return visited;
    }

    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        if let Some(part) = storage.find_part(id) {
            stack.extend(
                part.attached
                    .all_ids()
                    .filter(|next| storage.contains(*next) && !visited.contains(next)),
            );
        }
    }
    visited
}

/// True unless the pair already shares a connection on any slot, from either side.
pub fn can_attach(a: &Part, b: &Part) -> bool {
    !(a.attached.contains(b.id) || b.attached.contains(a.id))
}

/// True when `b` is already reachable from `a`, so connecting them would close a loop.
pub fn would_form_cycle(storage: &PartsStorage, a: PartId, b: PartId) -> bool {
    reachable_from(storage, a).contains(&b)
}

/// Full pre-attach check.
pub fn check_attach(storage: &PartsStorage, a: PartId, b: PartId) -> Result<(), AttachRejection> {
    if a == b {
        return Err(AttachRejection::SelfAttachment(a));
    }
    let part_a = storage
        .find_part(a)
        .ok_or(AttachRejection::PartNotFound(a))?;
    let part_b = storage
        .find_part(b)
        .ok_or(AttachRejection::PartNotFound(b))?;

    if !can_attach(part_a, part_b) {
        return Err(AttachRejection::AlreadyConnected(a, b));
    }
    if would_form_cycle(storage, a, b) {
        return Err(AttachRejection::WouldFormCycle(a, b));
    }
    Ok(())
}

/// Root of the component containing `id`: its smallest id.
pub fn component_root(storage: &PartsStorage, id: PartId) -> Option<PartId> {
    reachable_from(storage, id).into_iter().min()
}

/// Neighbour of `id` on the path towards its component root.
pub fn parent_of(storage: &PartsStorage, id: PartId) -> Option<PartId> {
    let root = component_root(storage, id)?;
    if root == id {
        return None;
    }

    // Depth-first walk from the root, remembering how each node was reached.
    let mut visited = HashSet::new();
    let mut stack = vec![(root, None)];
    while let Some((current, via)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == id {
            return via;
        }
        if let Some(part) = storage.find_part(current) {
            for next in part.attached.all_ids() {
                if storage.contains(next) && !visited.contains(&next) {
                    stack.push((next, Some(current)));
                }
            }
        }
    }
    None
}

/// `id` plus every part hanging off it when the component is viewed from its root.
pub fn subtree(storage: &PartsStorage, id: PartId) -> HashSet<PartId> {
    if !storage.contains(id) {
        return HashSet::new();
    }
    let mut visited: HashSet<PartId> = parent_of(storage, id).into_iter().collect();
    let blocked = visited.clone();

    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(part) = storage.find_part(current) {
            stack.extend(
                part.attached
                    .all_ids()
                    .filter(|next| storage.contains(*next) && !visited.contains(next)),
            );
        }
    }
    visited.retain(|p| !blocked.contains(p));
    visited
}

/// Connected components, each listed in ascending id order.
pub fn components(storage: &PartsStorage) -> Vec<BTreeSet<PartId>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for id in storage.ids() {
        if seen.contains(&id) {
            continue;
        }
        let component: BTreeSet<PartId> = reachable_from(storage, id).into_iter().collect();
        seen.extend(component.iter().copied());
        out.push(component);
    }
    out
}

/// True when the attachment graph is a forest.
///
/// A component of `n` parts is a tree exactly when it holds `n - 1`
/// connections; each connection is listed once on each side.
pub fn is_forest(storage: &PartsStorage) -> bool {
    components(storage).iter().all(|component| {
        let listings: usize = component
            .iter()
            .filter_map(|id| storage.find_part(*id))
            .map(|part| {
                part.attached
                    .all_ids()
                    .filter(|other| storage.contains(*other))
                    .count()
            })
            .sum();
        listings == 2 * (component.len() - 1)
    })
}
