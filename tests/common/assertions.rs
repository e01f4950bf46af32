use approx::assert_relative_eq;
use hangar::assembly::{integrity, validator, PartsStorage};
use hangar::components::{SpatialComponent, Slot};
use nalgebra::Vector3;

/// Every slot entry is mirrored on the other part.
#[track_caller]
pub fn assert_symmetric(storage: &PartsStorage) {
    if let Err(e) = integrity::check_symmetry(storage) {
        panic!("attachment symmetry broken: {}", e);
    }
    for part in &storage.parts {
        for slot in Slot::ALL {
            for other in part.attached_ids(slot) {
                let mirrored = storage.attached_ids(other, slot.complement());
                assert!(
                    mirrored.contains(&part.id),
                    "{} lists {} under {:?} but not the reverse",
                    part.id,
                    other,
                    slot
                );
            }
        }
    }
}

#[track_caller]
pub fn assert_acyclic(storage: &PartsStorage) {
    assert!(validator::is_forest(storage), "attachment graph has a cycle");
}

#[track_caller]
pub fn assert_no_dangling(storage: &PartsStorage) {
    for part in &storage.parts {
        for id in part.attached.all_ids() {
            assert!(
                storage.contains(id),
                "{} references missing part {}",
                part.id,
                id
            );
        }
    }
}

#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite"
    );
    assert_relative_eq!(spatial.attitude.norm(), 1.0, epsilon = 1e-9);
}
