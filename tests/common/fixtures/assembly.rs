use hangar::assembly::PartsStorage;
use hangar::components::{PartId, PartKind, Slot};

/// Fuel tank (0) with a fuselage (1) on its back slot.
pub fn create_tank_and_fuselage() -> PartsStorage {
    let (storage, tank) = PartsStorage::new().add_part(PartKind::FuelTank);
    let (storage, fuselage) = storage.add_part(PartKind::Fuselage);
    storage.attach(tank, fuselage, Slot::Back)
}

/// Cockpit - fuselage - tank - engine along the back slots, a wing on the
/// fuselage side and a tail on the tank side. Ids in that order from 0.
pub fn create_test_aircraft() -> PartsStorage {
    let kinds = [
        PartKind::Cockpit,
        PartKind::Fuselage,
        PartKind::FuelTank,
        PartKind::Engine,
        PartKind::Wing,
        PartKind::Tail,
    ];
    let storage = kinds
        .into_iter()
        .fold(PartsStorage::new(), |storage, kind| storage.add_part(kind).0);

    storage
        .attach(PartId(0), PartId(1), Slot::Back)
        .attach(PartId(1), PartId(2), Slot::Back)
        .attach(PartId(2), PartId(3), Slot::Back)
        .attach(PartId(1), PartId(4), Slot::Side)
        .attach(PartId(2), PartId(5), Slot::Side)
}

/// Tiny deterministic generator so the property-style tests are repeatable.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }
}
