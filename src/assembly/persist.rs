use crate::assembly::{integrity, AssemblyError, PartsStorage};

impl PartsStorage {
    /// Serialize to the plain JSON layout used for saved assemblies.
    pub fn to_json(&self) -> Result<String, AssemblyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a saved assembly, dropping dangling references and rejecting
    /// duplicate ids and one-sided attachments.
    pub fn from_json(json: &str) -> Result<Self, AssemblyError> {
        let raw: PartsStorage = serde_json::from_str(json)?;
        integrity::verify(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::propagate;
    use crate::components::{PartId, PartKind, Slot};
    use nalgebra::Vector3;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_keeps_structure_and_transforms() {
        let (storage, _) = PartsStorage::new().add_part(PartKind::Cockpit);
        let (storage, _) = storage.add_part(PartKind::Fuselage);
        let (storage, _) = storage.add_part(PartKind::Wing);
        let storage = storage
            .attach_snapped(PartId(0), PartId(1), Slot::Back)
            .unwrap()
            .attach(PartId(1), PartId(2), Slot::Side)
            .set_transform(PartId(2), Vector3::new(1.5, -0.25, 2.0), Vector3::new(0.0, 0.1, 0.3))
            .unwrap()
            .select_part(Some(PartId(2)));

        let json = storage.to_json().unwrap();
        let loaded = PartsStorage::from_json(&json).unwrap();
        assert_eq!(loaded, storage);
    }

    #[test]
    fn test_registry_names_appear_in_json() {
        let (storage, _) = PartsStorage::new().add_part(PartKind::Engine);
        let json = storage.to_json().unwrap();
        assert!(json.contains("\"type\": \"engine1\""));
    }

    #[test]
    fn test_unknown_type_fails_at_load_boundary() {
        let json = r#"{"parts":[{"id":0,"type":"blimp","pos":[0,0,0],"rot":[0,0,0],
            "shape_segments":{"front":{"point_count":8,"size":[1,1],"corner_radii":[1,1,1,1],"pinch_x":0,"pinch_y":0,"slant":0},
            "back":{"point_count":8,"size":[1,1],"corner_radii":[1,1,1,1],"pinch_x":0,"pinch_y":0,"slant":0},
            "center":{"length":1,"offset_x":0,"offset_y":0,"pinch":0,"slant":0}}}]}"#;
        assert!(matches!(
            PartsStorage::from_json(json),
            Err(AssemblyError::Json(_))
        ));
    }

    #[test]
    fn test_dangling_reference_is_dropped_on_load() {
        let (mut storage, _) = PartsStorage::new().add_part(PartKind::Fuselage);
        storage.parts[0]
            .attached
            .front
            .push(crate::components::AttachedPart { id: PartId(4) });
        let json = serde_json::to_string(&storage).unwrap();

        let loaded = PartsStorage::from_json(&json).unwrap();
        assert!(loaded.parts[0].attached.is_empty());
    }

    #[test]
    fn test_round_trip_is_exact_after_rotations() {
        let (storage, _) = PartsStorage::new().add_part(PartKind::Fuselage);
        let (storage, _) = storage.add_part(PartKind::Tail);
        let (storage, _) = storage.add_part(PartKind::Wing);
        let mut storage = storage
            .attach_snapped(PartId(0), PartId(1), Slot::Back)
            .unwrap()
            .attach(PartId(1), PartId(2), Slot::Side);

        for step in 1..=25 {
            let k = step as f64;
            storage = propagate(
                &storage,
                PartId(0),
                Vector3::new(0.37 * k, -1.0 / k, 0.011 * k * k),
                Vector3::new(0.13 / k, 0.7 * k.sin(), -0.29 * k.cos()),
            )
            .unwrap();

            let loaded = PartsStorage::from_json(&storage.to_json().unwrap()).unwrap();
            assert_eq!(loaded, storage);
        }
    }

    #[test]
    fn test_duplicate_ids_fail_to_load() {
        let (storage, _) = PartsStorage::new().add_part(PartKind::Fuselage);
        let (mut storage, _) = storage.add_part(PartKind::Fuselage);
        storage.parts[1].id = PartId(0);
        let json = storage.to_json().unwrap();

        assert!(matches!(
            PartsStorage::from_json(&json),
            Err(AssemblyError::DuplicatePartId(PartId(0)))
        ));
    }
}
