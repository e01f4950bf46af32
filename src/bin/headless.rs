use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use nalgebra::Vector3;
use std::{env, time::Duration};

use hangar::{
    assembly::PartsStorage,
    components::{
        AssemblyProfile, ControlChannel, ControlInputs, FlightTelemetry, PartKind, Slot,
        SpatialComponent,
    },
    plugins::{vehicle_bundle, AssemblyPlugin, FlightPlugin},
    resources::SimulationConfig,
    utils::SimError,
};

const DEFAULT_TICKS: u32 = 600;
const TELEMETRY_EVERY: u32 = 60;

#[derive(Resource)]
struct TickBudget {
    remaining: u32,
    elapsed: u32,
}

/// Cockpit, fuselage and tail in a line with wings and an engine hung off the fuselage.
fn demo_assembly() -> PartsStorage {
    let storage = PartsStorage::new();
    let (storage, cockpit) = storage.add_part(PartKind::Cockpit);
    let (storage, fuselage) = storage.add_part(PartKind::Fuselage);
    let (storage, tank) = storage.add_part(PartKind::FuelTank);
    let (storage, wing) = storage.add_part(PartKind::Wing);
    let (storage, tail) = storage.add_part(PartKind::Tail);
    let (storage, engine) = storage.add_part(PartKind::Engine);

    let snapped = storage
        .attach_snapped(cockpit, fuselage, Slot::Back)
        .and_then(|s| s.attach_snapped(fuselage, tank, Slot::Back))
        .and_then(|s| s.attach_snapped(tank, engine, Slot::Back))
        .and_then(|s| s.attach_snapped(fuselage, wing, Slot::Side))
        .and_then(|s| s.attach_snapped(tank, tail, Slot::Side));

    match snapped {
        Ok(storage) => storage,
        Err(rejection) => {
            warn!("Demo assembly incomplete: {}", rejection);
            storage
        }
    }
}

fn spawn_vehicle(mut commands: Commands, storage: Res<PartsStorage>) {
    let profile = AssemblyProfile::from_storage(&storage);
    info!(
        "Spawning vehicle: {:.0} kg, {} engine(s), {} lifting surface(s)",
        profile.mass, profile.engine_count, profile.lifting_surface_count
    );
    let spatial = SpatialComponent::at_position_and_airspeed(Vector3::new(0.0, 1000.0, 0.0), 60.0);
    commands.spawn((Name::new("demo"), vehicle_bundle(profile, spatial)));
}

fn hold_throttle(mut inputs: ResMut<ControlInputs>) {
    inputs.press(ControlChannel::ThrottleUp);
}

fn report_and_count(
    mut budget: ResMut<TickBudget>,
    telemetry: Query<&FlightTelemetry>,
    mut exit: EventWriter<AppExit>,
) {
    budget.elapsed += 1;
    budget.remaining = budget.remaining.saturating_sub(1);

    if budget.elapsed % TELEMETRY_EVERY == 0 || budget.remaining == 0 {
        for t in telemetry.iter() {
            info!(
                "tick {:>5} | speed {:6.1} m/s | alt {:7.1} m | vs {:6.1} m/s | thr {:5.1}% | aoa {:6.2}° | aos {:6.2}°",
                budget.elapsed,
                t.speed,
                t.altitude,
                t.vertical_speed,
                t.throttle_percent,
                t.angle_of_attack,
                t.sideslip
            );
        }
    }
    if budget.remaining == 0 {
        exit.send(AppExit::Success);
    }
}

fn main() -> Result<(), SimError> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let ticks = args
        .get(2)
        .and_then(|t| t.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
            LogPlugin::default(),
        ))
        .add_plugins((
            AssemblyPlugin {
                initial: demo_assembly(),
                editor: config.editor.clone(),
            },
            FlightPlugin::new(config),
        ))
        .insert_resource(TickBudget {
            remaining: ticks,
            elapsed: 0,
        })
        .add_systems(Startup, spawn_vehicle)
        .add_systems(FixedPreUpdate, hold_throttle)
        .add_systems(FixedPostUpdate, report_and_count)
        .run();

    Ok(())
}
