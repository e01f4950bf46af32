use bevy::prelude::*;
use hangar::{
    assembly::PartsStorage,
    components::{AssemblyProfile, ControlChannel, ControlInputs, SpatialComponent},
    plugins::{vehicle_bundle, AssemblyPlugin, FlightPlugin},
    resources::SimulationConfig,
};

use crate::common::{create_test_profile, create_test_spatial};

/// Builder for a headless app carrying the assembly and flight plugins.
pub struct TestAppBuilder {
    config: SimulationConfig,
    storage: PartsStorage,
    vehicles: Vec<(AssemblyProfile, SpatialComponent)>,
    integrate: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            storage: PartsStorage::new(),
            vehicles: Vec::new(),
            integrate: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_storage(mut self, storage: PartsStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_vehicle(mut self, profile: AssemblyProfile, spatial: SpatialComponent) -> Self {
        self.vehicles.push((profile, spatial));
        self
    }

    pub fn with_default_vehicle(self) -> Self {
        self.with_vehicle(create_test_profile(), create_test_spatial())
    }

    pub fn without_integration(mut self) -> Self {
        self.integrate = false;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let flight = if self.integrate {
            FlightPlugin::new(self.config)
        } else {
            FlightPlugin::new(self.config).without_integration()
        };
        app.add_plugins((AssemblyPlugin::with_storage(self.storage), flight));

        let vehicles = self
            .vehicles
            .into_iter()
            .map(|(profile, spatial)| app.world_mut().spawn(vehicle_bundle(profile, spatial)).id())
            .collect();

        TestApp { app, vehicles }
    }
}

pub struct TestApp {
    pub app: App,
    pub vehicles: Vec<Entity>,
}

impl TestApp {
    /// Run `n` fixed ticks.
    pub fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn press(&mut self, channel: ControlChannel) {
        self.app
            .world_mut()
            .resource_mut::<ControlInputs>()
            .press(channel);
    }

    pub fn release(&mut self, channel: ControlChannel) {
        self.app
            .world_mut()
            .resource_mut::<ControlInputs>()
            .release(channel);
    }

    pub fn vehicle(&self) -> Entity {
        self.vehicles[0]
    }

    pub fn get<T: Component>(&self) -> &T {
        self.app
            .world()
            .get::<T>(self.vehicle())
            .expect("vehicle is missing a component")
    }

    pub fn storage(&self) -> &PartsStorage {
        self.app.world().resource::<PartsStorage>()
    }
}
