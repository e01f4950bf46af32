mod common;

use common::*;
use hangar::assembly::{validator, AssemblyError, DragTransaction, PartsStorage};
use hangar::components::{PartId, PartKind, Slot};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_attach_translate_detach_scenario() {
    let (storage, tank) = PartsStorage::new().add_part(PartKind::FuelTank);
    assert_eq!(tank, PartId(0));
    let (storage, fuselage) = storage.add_part_named("fuselage").unwrap();
    assert_eq!(fuselage, PartId(1));

    let storage = storage.attach(tank, fuselage, Slot::Back);
    assert_eq!(storage.attached_ids(tank, Slot::Back), vec![fuselage]);
    assert_eq!(storage.attached_ids(fuselage, Slot::Front), vec![tank]);
    assert_symmetric(&storage);

    let before = hangar::assembly::relative_offset(&storage, tank, fuselage).unwrap();
    let old_child = storage.find_part(fuselage).unwrap().pos;

    let delta = Vector3::new(0.0, 0.0, 5.0);
    let moved = hangar::assembly::propagate(&storage, tank, delta, Vector3::zeros()).unwrap();
    let new_child = moved.find_part(fuselage).unwrap().pos;
    assert_eq!(new_child, old_child + delta);
    let after = hangar::assembly::relative_offset(&moved, tank, fuselage).unwrap();
    assert_position_eq(&after, &before, 1e-12);

    let detached = moved.detach_parts_by_id(tank, fuselage);
    for slot in Slot::ALL {
        assert!(detached.attached_ids(tank, slot).is_empty());
        assert!(detached.attached_ids(fuselage, slot).is_empty());
    }
    assert_no_dangling(&detached);
}

#[test]
fn test_mutations_never_touch_the_previous_snapshot() {
    let storage = create_tank_and_fuselage();
    let snapshot = storage.clone();

    let _ = storage.add_part(PartKind::Wing);
    let _ = storage.remove_part(PartId(1));
    let _ = storage.detach_parts_by_id(PartId(0), PartId(1));
    let _ = hangar::assembly::propagate(&storage, PartId(0), Vector3::x(), Vector3::y());

    assert_eq!(storage, snapshot);
}

#[test]
fn test_unknown_part_type_is_a_hard_failure() {
    let result = PartsStorage::new().add_part_named("hovercraft");
    assert!(matches!(result, Err(AssemblyError::UnknownPartType(name)) if name == "hovercraft"));
}

#[test]
fn test_random_attach_detach_keeps_invariants() {
    let mut rng = Lcg::new(7);
    let mut storage = [PartKind::Fuselage; 8]
        .into_iter()
        .fold(PartsStorage::new(), |s, kind| s.add_part(kind).0);

    for _ in 0..400 {
        let a = PartId(rng.next_below(8));
        let b = PartId(rng.next_below(8));
        let slot = Slot::ALL[rng.next_below(3) as usize];

        storage = if rng.next_below(4) == 0 {
            storage.detach_parts_by_id(a, b)
        } else {
            let cycle = validator::would_form_cycle(&storage, a, b);
            match storage.try_attach(a, b, slot) {
                Ok(next) => {
                    assert!(!cycle, "attach of {} to {} committed a cycle", b, a);
                    next
                }
                Err(_) => storage,
            }
        };

        assert_symmetric(&storage);
        assert_acyclic(&storage);
        assert_no_dangling(&storage);
    }
}

#[test]
fn test_random_removals_leave_no_dangling_references() {
    let mut rng = Lcg::new(42);
    let mut storage = create_test_aircraft();
    while !storage.is_empty() {
        let ids: Vec<PartId> = storage.ids().collect();
        let victim = ids[rng.next_below(ids.len() as u32) as usize];
        storage = if rng.next_below(2) == 0 {
            storage.remove_part(victim)
        } else {
            storage.remove_part_cascade(victim)
        };
        assert!(!storage.contains(victim));
        assert_symmetric(&storage);
        assert_no_dangling(&storage);
    }
}

#[test]
fn test_rotation_pivots_whole_subtree() {
    let (storage, root) = PartsStorage::new().add_part(PartKind::FuelTank);
    let (storage, child) = storage.add_part(PartKind::Fuselage);
    let (storage, grandchild) = storage.add_part(PartKind::Engine);
    let storage = storage
        .set_transform(child, Vector3::new(0.0, 0.0, 2.0), Vector3::zeros())
        .unwrap()
        .set_transform(grandchild, Vector3::new(0.0, 0.0, 4.0), Vector3::zeros())
        .unwrap()
        .attach(root, child, Slot::Back)
        .attach(child, grandchild, Slot::Back);

    let rotated =
        hangar::assembly::propagate(&storage, root, Vector3::zeros(), Vector3::new(0.0, FRAC_PI_2, 0.0))
            .unwrap();

    assert_position_eq(&rotated.find_part(child).unwrap().pos, &Vector3::new(2.0, 0.0, 0.0), 1e-9);
    assert_position_eq(
        &rotated.find_part(grandchild).unwrap().pos,
        &Vector3::new(4.0, 0.0, 0.0),
        1e-9,
    );
    for id in [root, child, grandchild] {
        assert_eq!(rotated.find_part(id).unwrap().rot.y, FRAC_PI_2);
    }
}

#[test]
fn test_cancelled_drag_leaves_committed_state() {
    let storage = create_test_aircraft();
    let mut drag = DragTransaction::begin(&storage, PartId(1)).unwrap();
    drag.update(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros()).unwrap();
    drag.update(Vector3::new(0.0, 2.0, 0.0), Vector3::zeros()).unwrap();

    let preview_pos = drag.preview().find_part(PartId(1)).unwrap().pos;
    assert_eq!(preview_pos, Vector3::new(1.0, 2.0, 0.0));

    assert_eq!(drag.cancel(), storage);
}

#[test]
fn test_committed_drag_moves_the_whole_assembly() {
    let storage = create_test_aircraft();
    let mut drag = DragTransaction::begin(&storage, PartId(1)).unwrap();
    drag.update(Vector3::new(0.0, 3.0, 0.0), Vector3::zeros()).unwrap();
    let committed = drag.commit();

    for part in &committed.parts {
        let original = storage.find_part(part.id).unwrap();
        assert_eq!(part.pos, original.pos + Vector3::new(0.0, 3.0, 0.0));
        assert_eq!(part.drag, original.drag);
    }
}

#[test]
fn test_json_round_trip_preserves_forest() {
    let storage = create_test_aircraft()
        .set_transform(PartId(3), Vector3::new(0.5, -1.0, 7.25), Vector3::new(0.1, 0.2, 0.3))
        .unwrap()
        .select_part(Some(PartId(4)));

    let json = storage.to_json().unwrap();
    let restored = PartsStorage::from_json(&json).unwrap();

    assert_eq!(restored, storage);
    assert_eq!(validator::components(&restored), validator::components(&storage));
}

#[test]
fn test_loading_drops_dangling_entries() {
    let json = r#"{
        "parts": [
            {
                "id": 0,
                "type": "fueltank",
                "pos": [0.0, 0.0, 0.0],
                "rot": [0.0, 0.0, 0.0],
                "shape_segments": {
                    "front": {"point_count": 8, "size": [1.0, 1.0], "corner_radii": [1.0, 1.0, 1.0, 1.0], "pinch_x": 0.0, "pinch_y": 0.0, "slant": 0.0},
                    "back": {"point_count": 8, "size": [1.0, 1.0], "corner_radii": [1.0, 1.0, 1.0, 1.0], "pinch_x": 0.0, "pinch_y": 0.0, "slant": 0.0},
                    "center": {"length": 2.0, "offset_x": 0.0, "offset_y": 0.0, "pinch": 0.0, "slant": 0.0}
                },
                "attached": {"front": [], "back": [{"id": 9}], "side": []}
            }
        ]
    }"#;

    let storage = PartsStorage::from_json(json).unwrap();
    assert_eq!(storage.len(), 1);
    assert_no_dangling(&storage);
}

#[test]
fn test_loading_rejects_duplicate_ids() {
    let part = r#"{
        "id": 0,
        "type": "fuselage",
        "pos": [0.0, 0.0, 0.0],
        "rot": [0.0, 0.0, 0.0],
        "shape_segments": {
            "front": {"point_count": 8, "size": [1.0, 1.0], "corner_radii": [1.0, 1.0, 1.0, 1.0], "pinch_x": 0.0, "pinch_y": 0.0, "slant": 0.0},
            "back": {"point_count": 8, "size": [1.0, 1.0], "corner_radii": [1.0, 1.0, 1.0, 1.0], "pinch_x": 0.0, "pinch_y": 0.0, "slant": 0.0},
            "center": {"length": 2.0, "offset_x": 0.0, "offset_y": 0.0, "pinch": 0.0, "slant": 0.0}
        }
    }"#;
    let json = format!(r#"{{"parts": [{part}, {part}]}}"#);

    assert!(matches!(
        PartsStorage::from_json(&json),
        Err(AssemblyError::DuplicatePartId(PartId(0)))
    ));
}
